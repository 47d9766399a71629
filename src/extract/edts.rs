//! Extended data types, one table row each.

use std::io::Write;

use super::classify::classify;
use super::session::Session;
use crate::catalog::{MetadataProvider, ObjectKind, Record, RecordExt as _};
use crate::config::ExtractOptions;
use crate::error::Result;
use crate::report::markdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdtDoc {
    pub extends: String,
    pub base_type: String,
    /// Only set when the record declares a non-zero size
    pub string_length: Option<u32>,
    pub label: String,
}

pub fn extract(record: &Record, _options: &ExtractOptions) -> EdtDoc {
    EdtDoc {
        extends: record.text("Extends"),
        base_type: classify(record).to_string(),
        string_length: record
            .text("StringSize")
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0),
        label: record.text("Label"),
    }
}

const COLUMNS: [&str; 5] = ["Name", "Extends", "Base Type", "Length", "Label"];

fn header(total: usize) -> String {
    let mut md = markdown::section_header("Extended Data Types", total);
    md.push_str(&format!("| {} |\n", COLUMNS.join(" | ")));
    md.push_str(&format!("|{}|\n", ["---"; COLUMNS.len()].join("|")));
    md
}

pub fn render(name: &str, doc: &EdtDoc) -> String {
    let length = doc
        .string_length
        .map(|n| n.to_string())
        .unwrap_or_default();
    let cells = [
        markdown::cell(name),
        markdown::cell(&doc.extends),
        markdown::cell(&doc.base_type),
        length,
        markdown::cell(&doc.label),
    ];
    format!("| {} |\n", cells.join(" | "))
}

pub(crate) fn document<P, W>(session: &mut Session<'_, P, W>) -> Result<()>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    session.document_kind(ObjectKind::Edt, header, extract, render)
}
