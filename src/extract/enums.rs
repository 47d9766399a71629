//! Enums: label and ordered value list.

use std::io::Write;

use super::session::{Session, collect_items};
use crate::catalog::{MetadataProvider, ObjectKind, Record, RecordExt as _};
use crate::config::ExtractOptions;
use crate::error::Result;
use crate::report::markdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDoc {
    pub label: String,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub value: i64,
    pub name: String,
}

/// Values keep their declared order. A value without an explicit number takes
/// its position in the collection.
pub fn extract(record: &Record, _options: &ExtractOptions) -> EnumDoc {
    let mut position = 0_i64;
    let values = collect_items(record, "EnumValues", |item| {
        let slot = position;
        position += 1;
        let name = item.opt_text("Name")?;
        let value = item.text("Value").parse::<i64>().unwrap_or(slot);
        Some(EnumValue { value, name })
    });

    EnumDoc {
        label: record.text("Label"),
        values,
    }
}

pub fn render(name: &str, doc: &EnumDoc) -> String {
    let mut md = format!("### {name}\n\n");
    markdown::property(&mut md, "Label", &doc.label);
    if !doc.label.is_empty() {
        md.push('\n');
    }

    let rows: Vec<Vec<String>> = doc
        .values
        .iter()
        .map(|v| vec![v.value.to_string(), v.name.clone()])
        .collect();
    md.push_str(&markdown::table(&["Value", "Name"], &rows));
    md
}

pub(crate) fn document<P, W>(session: &mut Session<'_, P, W>) -> Result<()>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    session.document_kind(
        ObjectKind::Enum,
        |total| markdown::section_header("Enums", total),
        extract,
        render,
    )
}
