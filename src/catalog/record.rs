//! Attribute-sparse catalog records and the safe field reader.
//!
//! Records come from a data source whose exact shape depends on the platform
//! version that produced it. Every accessor here is total: a missing record, a
//! missing attribute, or an attribute of an unexpected JSON type all degrade to
//! "no data" (the caller's default or `None`).

use serde_json::Value;

/// One catalog object or sub-object as returned by a provider.
pub type Record = Value;

/// Attribute carrying the concrete shape of a polymorphic record.
pub const SHAPE_ATTRIBUTE: &str = "$type";

/// Read `attribute` from `record` as text, or `default` when unavailable.
///
/// Strings are trimmed, numbers are printed as-is, booleans become `Yes`/`No`.
/// Objects, arrays, nulls and blank strings all yield `default`.
pub fn read_field(record: Option<&Record>, attribute: &str, default: &str) -> String {
    record
        .and_then(|r| r.get(attribute))
        .and_then(scalar_text)
        .unwrap_or_else(|| default.to_owned())
}

/// Raw nested value of `attribute`, or `None` when unavailable.
pub fn read_nested<'a>(record: Option<&'a Record>, attribute: &str) -> Option<&'a Record> {
    record
        .and_then(|r| r.get(attribute))
        .filter(|v| !v.is_null())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("Yes".to_owned()),
        Value::Bool(false) => Some("No".to_owned()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Method-style access to the safe reader.
pub trait RecordExt {
    /// Attribute as text, empty when unavailable.
    fn text(&self, attribute: &str) -> String;

    /// Attribute as text, `default` when unavailable.
    fn text_or(&self, attribute: &str, default: &str) -> String;

    /// Attribute as text, `None` when unavailable.
    fn opt_text(&self, attribute: &str) -> Option<String>;

    /// Raw nested value.
    fn nested(&self, attribute: &str) -> Option<&Record>;

    /// Items of a nested collection.
    ///
    /// Arrays yield their elements; a lone object yields itself; anything else
    /// (including absence) yields nothing.
    fn children(&self, attribute: &str) -> Vec<&Record>;

    /// Concrete shape name carried in [`SHAPE_ATTRIBUTE`].
    fn shape(&self) -> Option<&str>;
}

impl RecordExt for Record {
    fn text(&self, attribute: &str) -> String {
        read_field(Some(self), attribute, "")
    }

    fn text_or(&self, attribute: &str, default: &str) -> String {
        read_field(Some(self), attribute, default)
    }

    fn opt_text(&self, attribute: &str) -> Option<String> {
        self.get(attribute).and_then(scalar_text)
    }

    fn nested(&self, attribute: &str) -> Option<&Record> {
        read_nested(Some(self), attribute)
    }

    fn children(&self, attribute: &str) -> Vec<&Record> {
        match self.nested(attribute) {
            Some(Value::Array(items)) => items.iter().collect(),
            Some(item @ Value::Object(_)) => vec![item],
            _ => Vec::new(),
        }
    }

    fn shape(&self) -> Option<&str> {
        self.get(SHAPE_ATTRIBUTE)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Case-insensitive membership test against a literal set.
pub fn matches_literal(value: &str, literals: &[String]) -> bool {
    let value = value.trim();
    literals.iter().any(|l| l.trim().eq_ignore_ascii_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_field_absent_record() {
        assert_eq!(read_field(None, "Label", ""), "");
        assert_eq!(read_field(None, "Label", "n/a"), "n/a");
    }

    #[test]
    fn test_read_field_missing_attribute() {
        let record = json!({ "Name": "CustTable" });
        assert_eq!(read_field(Some(&record), "Label", "-"), "-");
    }

    #[test]
    fn test_read_field_non_object_record() {
        for record in [json!(null), json!([]), json!("text"), json!(42)] {
            assert_eq!(read_field(Some(&record), "Label", "d"), "d");
        }
    }

    #[test]
    fn test_read_field_scalar_kinds() {
        let record = json!({
            "Label": "  @SYS123 ",
            "StringSize": 20,
            "IsPublic": true,
            "Hidden": false,
            "Blank": "   ",
            "Fields": [],
        });
        assert_eq!(record.text("Label"), "@SYS123");
        assert_eq!(record.text("StringSize"), "20");
        assert_eq!(record.text("IsPublic"), "Yes");
        assert_eq!(record.text("Hidden"), "No");
        assert_eq!(record.text_or("Blank", "none"), "none");
        assert_eq!(record.text_or("Fields", "none"), "none");
        assert_eq!(record.opt_text("Missing"), None);
    }

    #[test]
    fn test_read_nested_is_total() {
        let record = json!({ "Fields": [{ "Name": "A" }], "Indexes": null });
        assert!(read_nested(Some(&record), "Fields").is_some());
        assert!(read_nested(Some(&record), "Indexes").is_none());
        assert!(read_nested(Some(&record), "Relations").is_none());
        assert!(read_nested(None, "Fields").is_none());
    }

    #[test]
    fn test_children_accepts_array_or_single_object() {
        let record = json!({
            "Fields": [{ "Name": "A" }, { "Name": "B" }],
            "Mappings": { "MappingTable": "CustTable" },
            "Label": "text",
        });
        assert_eq!(record.children("Fields").len(), 2);
        assert_eq!(record.children("Mappings").len(), 1);
        assert!(record.children("Label").is_empty());
        assert!(record.children("Missing").is_empty());
    }

    #[test]
    fn test_shape() {
        assert_eq!(
            json!({ "$type": "AxTableFieldString" }).shape(),
            Some("AxTableFieldString")
        );
        assert_eq!(json!({ "$type": "" }).shape(), None);
        assert_eq!(json!({}).shape(), None);
    }

    #[test]
    fn test_matches_literal_ignores_case() {
        let literals = vec!["No".to_owned(), "0".to_owned(), "false".to_owned()];
        assert!(matches_literal("no", &literals));
        assert!(matches_literal("FALSE", &literals));
        assert!(matches_literal(" 0 ", &literals));
        assert!(!matches_literal("Yes", &literals));
    }
}
