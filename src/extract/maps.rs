//! Table maps: fields and mapped tables.

use std::io::Write;

use super::classify::classify;
use super::session::{Session, collect_items};
use crate::catalog::{MetadataProvider, ObjectKind, Record, RecordExt as _};
use crate::config::ExtractOptions;
use crate::error::Result;
use crate::report::markdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDoc {
    pub fields: Vec<MapField>,
    /// Target tables, in declaration order
    pub mappings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapField {
    pub name: String,
    pub storage: String,
}

pub fn extract(record: &Record, _options: &ExtractOptions) -> MapDoc {
    MapDoc {
        fields: collect_items(record, "Fields", |field| {
            Some(MapField {
                name: field.opt_text("Name")?,
                storage: classify(field).to_string(),
            })
        }),
        mappings: collect_items(record, "Mappings", |mapping| {
            mapping.opt_text("MappingTable")
        }),
    }
}

pub fn render(name: &str, doc: &MapDoc) -> String {
    let mut md = format!("### {name}\n\n");
    let rows: Vec<Vec<String>> = doc
        .fields
        .iter()
        .map(|f| vec![f.name.clone(), f.storage.clone()])
        .collect();
    md.push_str(&markdown::table(&["Field", "Type"], &rows));

    if !doc.mappings.is_empty() {
        md.push_str("**Mapped Tables:**\n\n");
        for table in &doc.mappings {
            md.push_str(&format!("- `{table}`\n"));
        }
        md.push('\n');
    }
    md
}

pub(crate) fn document<P, W>(session: &mut Session<'_, P, W>) -> Result<()>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    session.document_kind(
        ObjectKind::Map,
        |total| markdown::section_header("Maps", total),
        extract,
        render,
    )
}
