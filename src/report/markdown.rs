//! Markdown building blocks shared by the category renderers.

use chrono::{DateTime, Utc};

/// Collapse line breaks so a value stays on one markdown line.
pub fn inline(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

/// Escape text for use inside a table cell.
pub fn cell(text: &str) -> String {
    inline(&text.replace('|', "\\|"))
}

/// Render a pipe table. Returns an empty string when there are no rows.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut md = String::new();
    md.push_str(&format!("| {} |\n", headers.join(" | ")));
    md.push_str(&format!(
        "|{}|\n",
        headers.iter().map(|_| "---").collect::<Vec<_>>().join("|")
    ));
    for row in rows {
        let cells: Vec<String> = row.iter().map(|c| cell(c)).collect();
        md.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    md.push('\n');
    md
}

/// `**Key:** value` line, skipped when `value` is empty.
pub fn property(md: &mut String, key: &str, value: &str) {
    if !value.is_empty() {
        md.push_str(&format!("**{key}:** {}  \n", inline(value)));
    }
}

/// `name` followed by ` - label` when a label is present.
pub fn with_label(name: &str, label: &str) -> String {
    if label.is_empty() {
        format!("`{name}`")
    } else {
        format!("`{name}` - {}", inline(label))
    }
}

/// Header opening every category section.
pub fn section_header(title: &str, total: usize) -> String {
    format!("## {title}\n\nTotal: {total}\n\n")
}

/// Sub-section header for categories split across several object kinds.
pub fn subsection_header(title: &str, total: usize) -> String {
    format!("### {title}\n\nTotal: {total}\n\n")
}

/// Fixed terminator closing a category section.
pub const SECTION_TERMINATOR: &str = "\n";

/// Separator the orchestrator writes after each extractor.
pub const CATEGORY_SEPARATOR: &str = "---\n\n";

/// Run header at the top of the document.
pub fn run_header(generated: DateTime<Utc>, partitions: usize) -> String {
    let mut md = String::new();
    md.push_str("# Metadata Documentation\n\n");
    md.push_str(&format!(
        "> **Generated:** {}  \n",
        generated.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!("> **Models scanned:** {partitions}\n\n"));
    md.push_str(CATEGORY_SEPARATOR);
    md
}
