use std::fmt::Write;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::{ResumeDocument, Section};

/// Format an error as JSON.
pub fn format_error(err: &dyn std::fmt::Display) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}

/// Render a parsed document in the requested format.
pub fn format_document(doc: &ResumeDocument, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(doc)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(doc)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(doc)?,
        OutputFormat::Tree => format_tree(doc),
    })
}

/// Indented key/value tree. Mappings and sequences nest; everything else is a
/// text leaf.
#[must_use]
pub fn format_tree(doc: &ResumeDocument) -> String {
    let mut out = String::new();
    for (title, section) in doc.sections.iter() {
        let _ = writeln!(out, "{title}");
        match section {
            Section::Header(lines) => write_items(&mut out, lines, 1),
            Section::Skills(skills) => {
                for (category, names) in skills.iter() {
                    let _ = writeln!(out, "  {category}");
                    write_items(&mut out, names, 2);
                }
            }
            Section::Entries(entries) => {
                for (name, entry) in entries.iter() {
                    let _ = writeln!(out, "  {name}");
                    for (key, value) in entry.fields() {
                        let _ = writeln!(out, "    {key}: {value}");
                    }
                    let _ = writeln!(out, "    Data");
                    write_items(&mut out, &entry.data, 3);
                }
            }
        }
    }
    out
}

fn write_items(out: &mut String, items: &[String], indent: usize) {
    let prefix = "  ".repeat(indent);
    for item in items {
        let _ = writeln!(out, "{prefix}- {item}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    const RESUME: &str = "Jane Doe\n\nA\n\nB\n\nC\n\nD\n\n\
                          Skills\nTools: Git, Cargo\n\n\
                          Experience\nAcme, Remote | 2020\n- Built it";

    #[test]
    fn json_keeps_section_order() {
        let doc = parse_document(RESUME).unwrap();
        let json = format_document(&doc, OutputFormat::Json).unwrap();
        assert!(!json.contains('\n'));
        let header = json.find("\"Header\"").unwrap();
        let skills = json.find("\"Skills\"").unwrap();
        let experience = json.find("\"Experience\"").unwrap();
        assert!(header < skills && skills < experience);
    }

    #[test]
    fn pretty_is_indented() {
        let doc = parse_document(RESUME).unwrap();
        let json = format_document(&doc, OutputFormat::Pretty).unwrap();
        assert!(json.contains("\n  \"Skills\": {"));
    }

    #[test]
    fn yaml_output() {
        let doc = parse_document(RESUME).unwrap();
        let yaml = format_document(&doc, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("Place: Remote"));
        assert!(yaml.contains("- Built it"));
    }

    #[test]
    fn tree_output_nests_values() {
        let doc = parse_document(RESUME).unwrap();
        let tree = format_tree(&doc);
        assert!(tree.starts_with("Header\n  - Jane Doe\n"));
        assert!(tree.contains("Skills\n  Tools\n    - Git\n    - Cargo\n"));
        assert!(tree.contains("  Acme\n    Place: Remote\n    Date start: 2020\n"));
        assert!(tree.contains("    Data\n      - Built it\n"));
    }

    #[test]
    fn format_error_produces_json() {
        let err = "detail line without a header: \"x\"";
        let json = format_error(&err);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], err);
    }

    #[test]
    fn format_error_escapes_backslashes() {
        let err = r"detail line without a header: C:\tools text";
        let value: serde_json::Value = serde_json::from_str(&format_error(&err)).unwrap();
        assert_eq!(value["error"], err);
    }
}
