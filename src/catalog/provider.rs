//! Provider boundary and partition type.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::category::ObjectKind;
use super::record::Record;
use crate::error::Result;

/// A named grouping of catalog objects (a model).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Model name
    pub name: String,
    /// Package the model belongs to
    pub package: String,
    /// Directory holding the model's object folders
    pub path: PathBuf,
}

impl Partition {
    pub fn new(name: impl Into<String>, package: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            path,
        }
    }
}

/// Source of catalog objects.
///
/// Both operations may fail. Callers in [`crate::extract`] treat every failure
/// as local to the partition or object that produced it.
pub trait MetadataProvider {
    /// Names of all objects of `kind` contained in `partition`.
    ///
    /// # Errors
    ///
    /// Fails when the partition cannot be listed.
    fn list_identifiers(&self, kind: ObjectKind, partition: &Partition) -> Result<Vec<String>>;

    /// Read one object by name. `Ok(None)` means the object does not exist.
    ///
    /// # Errors
    ///
    /// Fails when the object exists but cannot be read or parsed.
    fn read_object(&self, kind: ObjectKind, name: &str) -> Result<Option<Record>>;
}

impl<P: MetadataProvider + ?Sized> MetadataProvider for &P {
    fn list_identifiers(&self, kind: ObjectKind, partition: &Partition) -> Result<Vec<String>> {
        (**self).list_identifiers(kind, partition)
    }

    fn read_object(&self, kind: ObjectKind, name: &str) -> Result<Option<Record>> {
        (**self).read_object(kind, name)
    }
}
