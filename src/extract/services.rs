//! Services: external name, implementing class and operations.

use std::io::Write;

use super::session::{Session, collect_items};
use crate::catalog::{MetadataProvider, ObjectKind, Record, RecordExt as _};
use crate::config::ExtractOptions;
use crate::error::Result;
use crate::report::markdown;

const OPERATIONS: &str = "ServiceOperations";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDoc {
    pub external_name: String,
    pub class: String,
    /// `None` when the record has no operation collection
    pub operations: Option<Vec<String>>,
}

pub fn extract(record: &Record, _options: &ExtractOptions) -> ServiceDoc {
    ServiceDoc {
        external_name: record.text("ExternalName"),
        class: record.text("Class"),
        operations: record
            .nested(OPERATIONS)
            .map(|_| collect_items(record, OPERATIONS, |op| op.opt_text("Name"))),
    }
}

pub fn render(name: &str, doc: &ServiceDoc) -> String {
    let mut md = format!("### {name}\n\n");
    markdown::property(&mut md, "External Name", &doc.external_name);
    markdown::property(&mut md, "Class", &doc.class);
    md.push('\n');

    if let Some(operations) = &doc.operations
        && !operations.is_empty()
    {
        md.push_str(&format!("**Operations ({}):**\n\n", operations.len()));
        for op in operations {
            md.push_str(&format!("- `{op}`\n"));
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
        ObjectKind::Service,
        |total| markdown::section_header("Services", total),
        extract,
        render,
    )
}
