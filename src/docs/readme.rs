//! README section patching.
//!
//! Generated content lives between marker comments:
//!
//! ```markdown
//! <!-- START Supported Types -->
//! - widget
//! <!-- END Supported Types -->
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use regex::{NoExpand, RegexBuilder};

use crate::error::Result;

use super::markdown::Section;

/// Replaces the marked section for `title`, or appends it under a new heading.
///
/// Marker matching is case-insensitive and spans the shortest enclosed text.
pub fn update_section(document: &str, title: &str, content: &str) -> String {
    let block = format!(
        "<!-- START {title} -->\n{}\n<!-- END {title} -->",
        content.trim_end_matches('\n')
    );

    let escaped = regex::escape(title);
    let pattern = format!(r"<!--\s*START\s+{escaped}\s*-->.*?<!--\s*END\s+{escaped}\s*-->");
    let marker = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build();

    match marker {
        Ok(re) if re.is_match(document) => re.replace_all(document, NoExpand(&block)).into_owned(),
        Ok(_) => append_section(document, title, &block),
        Err(e) => {
            tracing::warn!("Cannot match section markers for {}: {}", title, e);
            append_section(document, title, &block)
        }
    }
}

fn append_section(document: &str, title: &str, block: &str) -> String {
    let mut out = document.trim_end().to_string();
    if !out.is_empty() {
        out.push_str("\n\n");
    }
    out.push_str(&format!("### {title}\n\n{block}\n"));
    out
}

/// Applies every section to the README at `path` and writes it back.
///
/// A missing README is created.
pub fn patch_readme(path: &Path, sections: &[Section]) -> Result<()> {
    let mut document = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("{} does not exist; creating it", path.display());
            String::new()
        }
        Err(e) => return Err(e.into()),
    };

    for section in sections {
        document = update_section(&document, &section.title, &section.body);
    }

    fs::write(path, document)?;
    tracing::info!("Updated {} sections in {}", sections.len(), path.display());
    Ok(())
}
