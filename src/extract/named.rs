//! Name-only categories: forms, security objects, composite and aggregate
//! entities. Each object is listed by name with its label when it has one.

use std::io::Write;

use super::session::Session;
use crate::catalog::{Category, CategorySet, MetadataProvider, ObjectKind, Record, RecordExt as _};
use crate::config::ExtractOptions;
use crate::error::Result;
use crate::report::markdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDoc {
    pub label: String,
}

pub fn extract(record: &Record, _options: &ExtractOptions) -> NamedDoc {
    NamedDoc {
        label: record.text("Label"),
    }
}

/// Forms put their caption on the design in most exports.
pub fn extract_form(record: &Record, _options: &ExtractOptions) -> NamedDoc {
    let label = record
        .opt_text("Caption")
        .or_else(|| record.nested("Design").and_then(|d| d.opt_text("Caption")))
        .unwrap_or_else(|| record.text("Label"));
    NamedDoc { label }
}

pub fn render(name: &str, doc: &NamedDoc) -> String {
    format!("- {}\n", markdown::with_label(name, &doc.label))
}

fn document_named<P, W>(
    session: &mut Session<'_, P, W>,
    kind: ObjectKind,
    title: &str,
) -> Result<()>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    session.document_kind(
        kind,
        |total| markdown::section_header(title, total),
        extract,
        render,
    )
}

pub(crate) fn document_forms<P, W>(session: &mut Session<'_, P, W>) -> Result<()>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    session.document_kind(
        ObjectKind::Form,
        |total| markdown::section_header(Category::Forms.title(), total),
        extract_form,
        render,
    )
}

/// Sub-categories handled by [`document_gated`], in document order.
pub const SECURITY: [Category; 3] = [
    Category::SecurityRoles,
    Category::SecurityDuties,
    Category::SecurityPrivileges,
];

pub const COMPOSITES: [Category; 2] = [Category::CompositeEntities, Category::AggregateEntities];

/// Document each of `group` that is enabled, one section per sub-category.
pub(crate) fn document_gated<P, W>(
    session: &mut Session<'_, P, W>,
    group: &[Category],
    enabled: &CategorySet,
) -> Result<()>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    for category in group.iter().filter(|c| enabled.contains(*c)) {
        for kind in category.kinds() {
            document_named(session, *kind, category.title())?;
        }
    }
    Ok(())
}
