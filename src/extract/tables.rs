//! Tables: properties, fields, field groups, indexes and relations.
//!
//! Each sub-record is extracted on its own; a malformed field, index, relation
//! or field group is dropped without affecting the rest of the table.

use std::io::Write;

use super::classify::classify;
use super::session::{Session, collect_items, member_fields};
use crate::catalog::{MetadataProvider, ObjectKind, Record, RecordExt as _, matches_literal};
use crate::config::ExtractOptions;
use crate::error::Result;
use crate::report::markdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDoc {
    pub label: String,
    pub table_group: String,
    pub primary_index: String,
    pub cluster_index: String,
    pub extends: String,
    pub fields: Vec<TableField>,
    pub field_groups: Vec<FieldGroup>,
    pub indexes: Vec<TableIndex>,
    pub relations: Vec<TableRelation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableField {
    pub name: String,
    pub storage: String,
    /// Extended data type, or the enum when the field has no EDT
    pub reference: String,
    pub mandatory: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    pub name: String,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableIndex {
    pub name: String,
    pub unique: bool,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRelation {
    pub name: String,
    pub related_table: String,
}

pub fn extract(record: &Record, options: &ExtractOptions) -> TableDoc {
    let fields = collect_items(record, "Fields", |field| {
        Some(TableField {
            name: field.opt_text("Name")?,
            storage: classify(field).to_string(),
            reference: field
                .opt_text("ExtendedDataType")
                .or_else(|| field.opt_text("EnumType"))
                .unwrap_or_default(),
            mandatory: matches_literal(&field.text("Mandatory"), &options.truthy_literals),
        })
    });

    let field_groups = collect_items(record, "FieldGroups", |group| {
        Some(FieldGroup {
            name: group.opt_text("Name")?,
            fields: member_fields(group),
        })
    });

    // The platform default for AllowDuplicates is "No", so an index that omits
    // the attribute is unique.
    let indexes = collect_items(record, "Indexes", |index| {
        Some(TableIndex {
            name: index.opt_text("Name")?,
            unique: matches_literal(
                &index.text_or("AllowDuplicates", "No"),
                &options.allow_duplicates_false_literals,
            ),
            fields: member_fields(index),
        })
    });

    let relations = collect_items(record, "Relations", |relation| {
        Some(TableRelation {
            name: relation.opt_text("Name")?,
            related_table: relation.text("RelatedTable"),
        })
    });

    TableDoc {
        label: record.text("Label"),
        table_group: record.text("TableGroup"),
        primary_index: record.text("PrimaryIndex"),
        cluster_index: record.text("ClusteredIndex"),
        extends: record.text("Extends"),
        fields,
        field_groups,
        indexes,
        relations,
    }
}

pub fn render(name: &str, doc: &TableDoc) -> String {
    let mut md = format!("### {name}\n\n");
    markdown::property(&mut md, "Label", &doc.label);
    markdown::property(&mut md, "Table Group", &doc.table_group);
    markdown::property(&mut md, "Primary Index", &doc.primary_index);
    markdown::property(&mut md, "Cluster Index", &doc.cluster_index);
    markdown::property(&mut md, "Extends", &doc.extends);
    md.push('\n');

    if !doc.fields.is_empty() {
        md.push_str(&format!("#### Fields ({})\n\n", doc.fields.len()));
        let rows: Vec<Vec<String>> = doc
            .fields
            .iter()
            .map(|f| {
                vec![
                    f.name.clone(),
                    f.storage.clone(),
                    f.reference.clone(),
                    if f.mandatory { "Yes" } else { "" }.to_owned(),
                ]
            })
            .collect();
        md.push_str(&markdown::table(
            &["Name", "Type", "EDT / Enum", "Mandatory"],
            &rows,
        ));
    }

    if !doc.field_groups.is_empty() {
        md.push_str("#### Field Groups\n\n");
        for group in &doc.field_groups {
            md.push_str(&format!(
                "- **{}**: {}\n",
                markdown::inline(&group.name),
                markdown::inline(&group.fields.join(", "))
            ));
        }
        md.push('\n');
    }

    if !doc.indexes.is_empty() {
        md.push_str("#### Indexes\n\n");
        let rows: Vec<Vec<String>> = doc
            .indexes
            .iter()
            .map(|i| {
                vec![
                    i.name.clone(),
                    if i.unique { "Yes" } else { "No" }.to_owned(),
                    i.fields.join(", "),
                ]
            })
            .collect();
        md.push_str(&markdown::table(&["Name", "Unique", "Fields"], &rows));
    }

    if !doc.relations.is_empty() {
        md.push_str("#### Relations\n\n");
        let rows: Vec<Vec<String>> = doc
            .relations
            .iter()
            .map(|r| vec![r.name.clone(), r.related_table.clone()])
            .collect();
        md.push_str(&markdown::table(&["Name", "Related Table"], &rows));
    }

    md
}

pub(crate) fn document<P, W>(session: &mut Session<'_, P, W>) -> Result<()>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    session.document_kind(
        ObjectKind::Table,
        |total| markdown::section_header("Tables", total),
        extract,
        render,
    )
}
