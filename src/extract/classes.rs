//! Classes.
//!
//! Only classes whose name starts with a configured prefix are read and get a
//! detailed block; every class name is listed at the end regardless.

use std::io::Write;

use super::session::{Session, collect_items};
use crate::catalog::{MetadataProvider, ObjectKind, Record, RecordExt as _, matches_literal};
use crate::config::ExtractOptions;
use crate::error::Result;
use crate::report::markdown;

/// Tally label for the flat class list.
pub const LISTED_LABEL: &str = "Classes (listed)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDoc {
    pub extends: String,
    /// Sorted by name
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Method {
    pub name: String,
    pub is_static: bool,
}

pub fn extract(record: &Record, options: &ExtractOptions) -> ClassDoc {
    // Older exports nest methods under SourceCode.
    let owner = match record.nested("Methods") {
        Some(_) => record,
        None => record.nested("SourceCode").unwrap_or(record),
    };

    let mut methods = collect_items(owner, "Methods", |method| {
        Some(Method {
            name: method.opt_text("Name")?,
            is_static: matches_literal(&method.text("IsStatic"), &options.truthy_literals),
        })
    });
    methods.sort();

    ClassDoc {
        extends: record.text("Extends"),
        methods,
    }
}

pub fn render(name: &str, doc: &ClassDoc) -> String {
    let mut md = format!("#### {name}\n\n");
    markdown::property(&mut md, "Extends", &doc.extends);
    if !doc.extends.is_empty() {
        md.push('\n');
    }

    if !doc.methods.is_empty() {
        md.push_str(&format!("**Methods ({}):**\n\n", doc.methods.len()));
        for method in &doc.methods {
            if method.is_static {
                md.push_str(&format!("- `{}` (static)\n", method.name));
            } else {
                md.push_str(&format!("- `{}`\n", method.name));
            }
        }
        md.push('\n');
    }
    md
}

fn render_listing(names: &[String]) -> String {
    let mut md = format!("### All Classes ({})\n\n", names.len());
    for name in names {
        md.push_str(&format!("- {name}\n"));
    }
    md
}

pub(crate) fn document<P, W>(session: &mut Session<'_, P, W>) -> Result<()>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    let names = session.aggregate(ObjectKind::Class);
    let options = session.options();
    let documented: Vec<String> = names
        .iter()
        .filter(|name| options.is_documented_class(name))
        .cloned()
        .collect();

    session.write(&markdown::section_header("Classes", names.len()))?;
    session.document_names(
        ObjectKind::Class,
        &documented,
        |total| format!("### Framework Classes ({total})\n\n"),
        extract,
        render,
    )?;

    session.write_flushed(&render_listing(&names))?;
    session.tally_mut().add_documented(LISTED_LABEL, names.len());
    session.end_section()
}
