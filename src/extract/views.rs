//! Views and data entities.
//!
//! Both list their fields with the field's binding shape as its type; the
//! shape names only differ by family prefix.

use std::io::Write;

use super::classify::{DATA_ENTITY_FIELD_PREFIX, VIEW_FIELD_PREFIX, strip_prefix_label};
use super::session::{Session, collect_items};
use crate::catalog::{MetadataProvider, ObjectKind, Record, RecordExt as _, matches_literal};
use crate::config::ExtractOptions;
use crate::error::Result;
use crate::report::markdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewField {
    pub name: String,
    pub shape: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDoc {
    pub label: String,
    pub fields: Vec<ViewField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEntityDoc {
    pub label: String,
    pub public_entity_name: String,
    pub public_collection_name: String,
    pub is_public: bool,
    pub fields: Vec<ViewField>,
}

fn fields(record: &Record, prefix: &str) -> Vec<ViewField> {
    collect_items(record, "Fields", |field| {
        Some(ViewField {
            name: field.opt_text("Name")?,
            shape: strip_prefix_label(field, prefix),
        })
    })
}

fn render_fields(md: &mut String, fields: &[ViewField]) {
    let rows: Vec<Vec<String>> = fields
        .iter()
        .map(|f| vec![f.name.clone(), f.shape.clone()])
        .collect();
    md.push_str(&markdown::table(&["Field", "Type"], &rows));
}

pub fn extract_view(record: &Record, _options: &ExtractOptions) -> ViewDoc {
    ViewDoc {
        label: record.text("Label"),
        fields: fields(record, VIEW_FIELD_PREFIX),
    }
}

pub fn render_view(name: &str, doc: &ViewDoc) -> String {
    let mut md = format!("### {name}\n\n");
    markdown::property(&mut md, "Label", &doc.label);
    md.push('\n');
    render_fields(&mut md, &doc.fields);
    md
}

pub fn extract_data_entity(record: &Record, options: &ExtractOptions) -> DataEntityDoc {
    DataEntityDoc {
        label: record.text("Label"),
        public_entity_name: record.text("PublicEntityName"),
        public_collection_name: record.text("PublicCollectionName"),
        is_public: matches_literal(&record.text("IsPublic"), &options.truthy_literals),
        fields: fields(record, DATA_ENTITY_FIELD_PREFIX),
    }
}

pub fn render_data_entity(name: &str, doc: &DataEntityDoc) -> String {
    let mut md = format!("### {name}\n\n");
    markdown::property(&mut md, "Label", &doc.label);
    markdown::property(&mut md, "Public Entity Name", &doc.public_entity_name);
    markdown::property(&mut md, "Public Collection Name", &doc.public_collection_name);
    markdown::property(
        &mut md,
        "Public",
        if doc.is_public { "Yes" } else { "No" },
    );
    md.push('\n');
    render_fields(&mut md, &doc.fields);
    md
}

pub(crate) fn document_views<P, W>(session: &mut Session<'_, P, W>) -> Result<()>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    session.document_kind(
        ObjectKind::View,
        |total| markdown::section_header("Views", total),
        extract_view,
        render_view,
    )
}

pub(crate) fn document_data_entities<P, W>(session: &mut Session<'_, P, W>) -> Result<()>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    session.document_kind(
        ObjectKind::DataEntity,
        |total| markdown::section_header("Data Entities", total),
        extract_data_entity,
        render_data_entity,
    )
}
