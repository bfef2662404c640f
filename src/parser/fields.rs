//! Field extraction for entry header lines.
//!
//! Header lines carry up to three kinds of field, each introduced by its own
//! delimiter: `,` for the place, an em-dash for the position and `|` for the
//! date range. Fields may appear in any subset, left to right.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Entry;

const EM_DASH: char = '—';
const COMMA: char = ',';
const PIPE: char = '|';

static DATE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*").expect("date separator pattern is valid"));

static FIELD_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([,—|])\s*").expect("field delimiter pattern is valid"));

/// Delimiter that introduces a header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    EmDash,
    Pipe,
}

impl Delimiter {
    fn from_char(c: char) -> Option<Self> {
        match c {
            COMMA => Some(Self::Comma),
            EM_DASH => Some(Self::EmDash),
            PIPE => Some(Self::Pipe),
            _ => None,
        }
    }
}

/// A header line split into its leading name and delimited fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTokens<'a> {
    pub name: &'a str,
    pub fields: Vec<(Delimiter, &'a str)>,
}

/// True if the line introduces a new entry.
#[must_use]
pub fn is_entry_header(line: &str) -> bool {
    line.contains(PIPE)
}

/// Split a date range on `-`; a single date is both start and end.
#[must_use]
pub fn split_dates(text: &str) -> (String, String) {
    let mut parts = DATE_SEPARATOR.split(text.trim());
    let start = parts.next().unwrap_or_default().trim().to_string();
    let end = parts
        .next()
        .map_or_else(|| start.clone(), |end| end.trim().to_string());
    (start, end)
}

/// Tokenize a header line on `,`, em-dash and `|`, keeping which delimiter
/// preceded each field.
#[must_use]
pub fn tokenize_header(line: &str) -> HeaderTokens<'_> {
    let mut name: Option<&str> = None;
    let mut fields = Vec::new();
    let mut pending: Option<Delimiter> = None;
    let mut last_end = 0;

    for caps in FIELD_DELIMITER.captures_iter(line) {
        let (Some(whole), Some(delim)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let text = line[last_end..whole.start()].trim();
        match pending {
            None => name = Some(text),
            Some(d) => fields.push((d, text)),
        }
        pending = delim.as_str().chars().next().and_then(Delimiter::from_char);
        last_end = whole.end();
    }

    let tail = line[last_end..].trim();
    match pending {
        None => name = Some(tail),
        Some(d) => fields.push((d, tail)),
    }

    HeaderTokens {
        name: name.unwrap_or_default(),
        fields,
    }
}

/// Build an entry from a generic header line such as
/// `Acme, Remote — Engineer | 2019 - 2021`.
#[must_use]
pub fn parse_entry_header(line: &str) -> (String, Entry) {
    let tokens = tokenize_header(line);
    let mut entry = Entry::new();
    for (delim, text) in tokens.fields {
        match delim {
            Delimiter::Comma => entry.place = Some(text.to_string()),
            Delimiter::EmDash => entry.position = Some(text.to_string()),
            Delimiter::Pipe => entry.set_dates(split_dates(text)),
        }
    }
    (tokens.name.to_string(), entry)
}

/// Build an entry from an education header line such as
/// `State University — B.Sc., Computer Science | 2016 - 2020`.
///
/// Only the first `|` and the first em-dash are significant, so commas in the
/// institution name stay part of the name.
#[must_use]
pub fn parse_education_header(line: &str) -> Option<(String, Entry)> {
    let (left, date_part) = line.split_once(PIPE)?;
    let mut entry = Entry::new();

    let name = match left.trim().split_once(EM_DASH) {
        Some((name, degree_major)) => {
            let degree_major = degree_major.trim();
            match degree_major.split_once(COMMA) {
                Some((degree, major)) => {
                    entry.degree_type = Some(degree.trim().to_string());
                    entry.major = Some(major.trim().to_string());
                }
                None => entry.degree_type = Some(degree_major.to_string()),
            }
            name.trim()
        }
        None => left.trim(),
    };

    entry.set_dates(split_dates(date_part));
    Some((name.to_string(), entry))
}
