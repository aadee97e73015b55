//! Markdown rendering for extracted plugin metadata.

use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::extract::JoinEntry;
use crate::schema::SampleValue;

/// Join table kinds, in rendering order: (heading, join type fragment)
const JOIN_KINDS: &[(&str, &str)] = &[
    ("Digitals", "Digital"),
    ("Analogs", "Analog"),
    ("Serials", "Serial"),
];

/// A titled block of rendered Markdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// One `- item` line per item
pub fn render_list(items: &[String]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "- {}", item);
    }
    out
}

/// Digital, analog and serial join tables.
///
/// A combined join type such as `DigitalSerial` is listed in every table it names.
pub fn render_join_tables(joins: &[JoinEntry]) -> String {
    let mut out = String::new();

    for (i, (heading, kind)) in JOIN_KINDS.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "### {}\n", heading);
        out.push_str("Join | Type (RW) | Description\n");
        out.push_str("--- | --- | ---\n");
        for join in joins.iter().filter(|j| j.join_type.contains(kind)) {
            let _ = writeln!(
                out,
                "{} | {} | {}",
                join.join_number,
                join.access(),
                join.description
            );
        }
    }

    out
}

/// Pretty-printed JSON in a fenced code block
pub fn render_config_block(value: &SampleValue) -> Result<String> {
    Ok(format!("```json\n{}\n```\n", value.to_json_pretty()?))
}

/// Section as printed to standard output
pub fn render_stdout_section(section: &Section) -> String {
    format!("### {}:\n\n{}\n", section.title, section.body)
}
