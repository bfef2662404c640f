use crate::models::SkillsTable;

/// Build the skills table from `Category: a, b, c` lines.
///
/// Lines without a `:` are skipped. A repeated category replaces the earlier one.
#[must_use]
pub fn parse_skills(lines: &[&str]) -> SkillsTable {
    let mut skills = SkillsTable::new();
    for line in lines {
        let Some((category, values)) = line.split_once(':') else {
            tracing::trace!(line, "skipping skills line without a category");
            continue;
        };
        let names: Vec<String> = values
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        skills.insert(category.trim(), names);
    }
    skills
}
