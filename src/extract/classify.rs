//! Shape classification: maps a record's concrete shape to a readable label.
//!
//! Shapes arrive as type names such as `AxTableFieldString` or `AxEdtEnum`.
//! Known storage kinds map to canonical labels regardless of which family they
//! belong to; anything else falls back to the shape name with its family prefix
//! removed, so a label is produced even for shapes introduced by newer platform
//! versions.

use std::fmt;

use crate::catalog::{Record, RecordExt as _};

/// Shape-family prefixes, longest first so nested families strip correctly.
pub const SHAPE_FAMILIES: &[&str] = &[
    "AxDataEntityViewField",
    "AxMapBaseField",
    "AxTableField",
    "AxViewField",
    "AxMapField",
    "AxEdt",
];

/// Family prefix for view fields.
pub const VIEW_FIELD_PREFIX: &str = "AxViewField";

/// Family prefix for data entity fields.
pub const DATA_ENTITY_FIELD_PREFIX: &str = "AxDataEntityView";

/// Label used when a record carries no shape at all.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Normalized classification of a record's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    String,
    Int,
    Int64,
    Real,
    Date,
    UtcDateTime,
    Guid,
    Container,
    Time,
    /// Enum-typed storage, with the referenced enum when known
    Enum(Option<String>),
    Index,
    Relation,
    FieldGroup,
    /// Not in the fixed table; label derived from the shape name
    Derived(String),
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("String"),
            Self::Int => f.write_str("Int"),
            Self::Int64 => f.write_str("Int64"),
            Self::Real => f.write_str("Real"),
            Self::Date => f.write_str("Date"),
            Self::UtcDateTime => f.write_str("UtcDateTime"),
            Self::Guid => f.write_str("Guid"),
            Self::Container => f.write_str("Container"),
            Self::Time => f.write_str("Time"),
            Self::Enum(Some(enum_type)) => write!(f, "Enum ({enum_type})"),
            Self::Enum(None) => f.write_str("Enum"),
            Self::Index => f.write_str("Index"),
            Self::Relation => f.write_str("Relation"),
            Self::FieldGroup => f.write_str("Field Group"),
            Self::Derived(label) => f.write_str(label),
        }
    }
}

fn storage_kind(residual: &str) -> Option<ShapeKind> {
    Some(match residual {
        "String" => ShapeKind::String,
        "Int" => ShapeKind::Int,
        "Int64" => ShapeKind::Int64,
        "Real" => ShapeKind::Real,
        "Date" => ShapeKind::Date,
        "UtcDateTime" => ShapeKind::UtcDateTime,
        "Guid" => ShapeKind::Guid,
        "Container" => ShapeKind::Container,
        "Time" => ShapeKind::Time,
        "Enum" => ShapeKind::Enum(None),
        _ => return None,
    })
}

fn sub_record_kind(shape: &str) -> Option<ShapeKind> {
    Some(match shape {
        "AxTableIndex" => ShapeKind::Index,
        "AxTableRelation" | "AxTableRelationForeignKey" => ShapeKind::Relation,
        "AxTableFieldGroup" => ShapeKind::FieldGroup,
        _ => return None,
    })
}

/// Remove the first matching family prefix from `shape`.
fn strip_family(shape: &str) -> &str {
    SHAPE_FAMILIES
        .iter()
        .find_map(|family| shape.strip_prefix(family))
        .filter(|residual| !residual.is_empty())
        .unwrap_or(shape)
}

/// Classify a bare shape name.
pub fn classify_shape(shape: &str) -> ShapeKind {
    let shape = shape.trim();
    if shape.is_empty() {
        return ShapeKind::Derived(UNKNOWN_LABEL.to_owned());
    }
    if let Some(kind) = sub_record_kind(shape) {
        return kind;
    }

    let residual = strip_family(shape);
    storage_kind(residual).unwrap_or_else(|| ShapeKind::Derived(residual.to_owned()))
}

/// Classify a record by its shape attribute.
///
/// Enum-typed shapes embed the record's `EnumType` when it has one.
pub fn classify(record: &Record) -> ShapeKind {
    match classify_shape(record.shape().unwrap_or_default()) {
        ShapeKind::Enum(_) => ShapeKind::Enum(record.opt_text("EnumType")),
        kind => kind,
    }
}

/// Label of `record` with a specific family `prefix` removed.
///
/// Used for view and data entity fields, whose shapes describe how the field is
/// bound rather than how it is stored.
pub fn strip_prefix_label(record: &Record, prefix: &str) -> String {
    match record.shape() {
        Some(shape) => match shape.strip_prefix(prefix) {
            Some(residual) if !residual.is_empty() => residual.to_owned(),
            _ => shape.to_owned(),
        },
        None => UNKNOWN_LABEL.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_storage_shapes() {
        let cases = [
            ("AxTableFieldString", "String"),
            ("AxTableFieldInt", "Int"),
            ("AxTableFieldInt64", "Int64"),
            ("AxTableFieldReal", "Real"),
            ("AxTableFieldDate", "Date"),
            ("AxTableFieldUtcDateTime", "UtcDateTime"),
            ("AxTableFieldGuid", "Guid"),
            ("AxTableFieldContainer", "Container"),
            ("AxTableFieldTime", "Time"),
            ("AxTableFieldEnum", "Enum"),
            ("AxEdtString", "String"),
            ("AxEdtInt64", "Int64"),
            ("AxMapBaseFieldReal", "Real"),
            ("AxTableIndex", "Index"),
            ("AxTableRelation", "Relation"),
            ("AxTableFieldGroup", "Field Group"),
        ];
        for (shape, label) in cases {
            assert_eq!(classify_shape(shape).to_string(), label, "shape {shape}");
        }
    }

    #[test]
    fn test_enum_edt_embeds_enum_type() {
        let record = json!({ "$type": "AxEdtEnum", "EnumType": "CustVendGroupId" });
        assert_eq!(classify(&record).to_string(), "Enum (CustVendGroupId)");

        let bare = json!({ "$type": "AxEdtEnum" });
        assert_eq!(classify(&bare).to_string(), "Enum");
    }

    #[test]
    fn test_unknown_shape_falls_back_to_residual() {
        assert_eq!(classify_shape("AxTableFieldBlob").to_string(), "Blob");
        assert_eq!(classify_shape("AxEdtVector").to_string(), "Vector");
        assert_eq!(classify_shape("SomethingNew").to_string(), "SomethingNew");
        assert_eq!(classify_shape("AxEdt").to_string(), "AxEdt");
        assert_eq!(classify_shape("").to_string(), UNKNOWN_LABEL);
    }

    #[test]
    fn test_record_without_shape_is_unknown() {
        assert_eq!(classify(&json!({ "Name": "X" })).to_string(), UNKNOWN_LABEL);
        assert_eq!(classify(&json!(null)).to_string(), UNKNOWN_LABEL);
    }

    #[test]
    fn test_strip_prefix_label() {
        let field = json!({ "$type": "AxViewFieldBound" });
        assert_eq!(strip_prefix_label(&field, VIEW_FIELD_PREFIX), "Bound");

        let entity_field = json!({ "$type": "AxDataEntityViewMappedField" });
        assert_eq!(
            strip_prefix_label(&entity_field, DATA_ENTITY_FIELD_PREFIX),
            "MappedField"
        );

        let other = json!({ "$type": "CustomField" });
        assert_eq!(strip_prefix_label(&other, VIEW_FIELD_PREFIX), "CustomField");
        assert_eq!(strip_prefix_label(&json!({}), VIEW_FIELD_PREFIX), UNKNOWN_LABEL);
    }
}
