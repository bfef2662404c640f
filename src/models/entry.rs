use serde::Serialize;

/// One dated block of a resume section: a job, degree or project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    #[serde(rename = "Degree type", skip_serializing_if = "Option::is_none")]
    pub degree_type: Option<String>,
    #[serde(rename = "Major", skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(rename = "Place", skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(rename = "Position", skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Raw start date, never parsed.
    #[serde(rename = "Date start", skip_serializing_if = "Option::is_none")]
    pub date_start: Option<String>,
    #[serde(rename = "Date end", skip_serializing_if = "Option::is_none")]
    pub date_end: Option<String>,
    /// Bullet text in source order, wrapped lines already merged.
    #[serde(rename = "Data")]
    pub data: Vec<String>,
}

impl Entry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both dates from a `start - end` pair; a lone date fills both.
    pub fn set_dates(&mut self, (start, end): (String, String)) {
        self.date_start = Some(start);
        self.date_end = Some(end);
    }

    /// Populated optional fields as `(output key, value)`, in output order.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Degree type", &self.degree_type),
            ("Major", &self.major),
            ("Place", &self.place),
            ("Position", &self.position),
            ("Date start", &self.date_start),
            ("Date end", &self.date_end),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    /// Start a new bullet and return its index.
    pub fn push_bullet(&mut self, text: impl Into<String>) -> usize {
        self.data.push(text.into());
        self.data.len() - 1
    }

    /// Append a wrapped line to the bullet at `index`, joined by one space.
    pub fn extend_bullet(&mut self, index: usize, text: &str) {
        if let Some(bullet) = self.data.get_mut(index) {
            bullet.push(' ');
            bullet.push_str(text);
        }
    }
}
