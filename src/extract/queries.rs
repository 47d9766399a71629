//! Queries: label and data sources.
//!
//! Not every export carries data sources. When the attribute is missing the
//! query is documented without them.

use std::io::Write;

use super::session::{Session, collect_items};
use crate::catalog::{MetadataProvider, ObjectKind, Record, RecordExt as _};
use crate::config::ExtractOptions;
use crate::error::Result;
use crate::report::markdown;

const DATA_SOURCES: &str = "DataSources";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDoc {
    pub label: String,
    /// `None` when the record has no data source collection
    pub data_sources: Option<Vec<DataSource>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub name: String,
    pub table: String,
    /// Nesting level, 0 for root data sources
    pub depth: usize,
}

fn flatten_sources(record: &Record, depth: usize, out: &mut Vec<DataSource>) {
    let sources = collect_items(record, DATA_SOURCES, |source| {
        Some((source, source.opt_text("Name")?))
    });
    for (source, name) in sources {
        out.push(DataSource {
            name,
            table: source.text("Table"),
            depth,
        });
        flatten_sources(source, depth + 1, out);
    }
}

pub fn extract(record: &Record, _options: &ExtractOptions) -> QueryDoc {
    let data_sources = record.nested(DATA_SOURCES).map(|_| {
        let mut sources = Vec::new();
        flatten_sources(record, 0, &mut sources);
        sources
    });

    QueryDoc {
        label: record.opt_text("Title").unwrap_or_else(|| record.text("Label")),
        data_sources,
    }
}

pub fn render(name: &str, doc: &QueryDoc) -> String {
    let mut md = format!("### {name}\n\n");
    markdown::property(&mut md, "Label", &doc.label);
    md.push('\n');

    if let Some(sources) = &doc.data_sources {
        let rows: Vec<Vec<String>> = sources
            .iter()
            .map(|s| {
                vec![
                    format!("{}{}", "> ".repeat(s.depth), s.name),
                    s.table.clone(),
                ]
            })
            .collect();
        md.push_str(&markdown::table(&["Data Source", "Table"], &rows));
    }
    md
}

pub(crate) fn document<P, W>(session: &mut Session<'_, P, W>) -> Result<()>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    session.document_kind(
        ObjectKind::Query,
        |total| markdown::section_header("Queries", total),
        extract,
        render,
    )
}
