//! Menu items: display, action and output listings.

use std::io::Write;

use super::session::Session;
use crate::catalog::{MetadataProvider, ObjectKind, Record, RecordExt as _};
use crate::config::ExtractOptions;
use crate::error::Result;
use crate::report::markdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemDoc {
    /// Object the menu item opens or runs
    pub target: Option<String>,
}

pub fn extract(record: &Record, _options: &ExtractOptions) -> MenuItemDoc {
    MenuItemDoc {
        target: record.opt_text("Object"),
    }
}

pub fn render(name: &str, doc: &MenuItemDoc) -> String {
    match &doc.target {
        Some(target) => format!("- `{name}` → `{target}`\n"),
        None => format!("- `{name}`\n"),
    }
}

pub(crate) fn document<P, W>(session: &mut Session<'_, P, W>) -> Result<()>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    session.write_flushed("## Menu Items\n\n")?;
    for kind in [
        ObjectKind::MenuItemDisplay,
        ObjectKind::MenuItemAction,
        ObjectKind::MenuItemOutput,
    ] {
        session.document_kind(
            kind,
            |total| markdown::subsection_header(kind.label(), total),
            extract,
            render,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_is_optional() {
        let options = ExtractOptions::default();
        let with = extract(&json!({ "Object": "CustTable" }), &options);
        assert_eq!(render("CustTable", &with), "- `CustTable` → `CustTable`\n");

        let without = extract(&json!({ "Label": "x" }), &options);
        assert_eq!(render("Orphan", &without), "- `Orphan`\n");
    }
}
