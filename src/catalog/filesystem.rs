//! Filesystem-backed metadata provider.
//!
//! Expected layout under the metadata root:
//!
//! ```text
//! <root>/
//!   ApplicationSuite/
//!     Descriptor/
//!       Foundation.json          declares model "Foundation"
//!     Foundation/
//!       AxTable/CustTable.json
//!       AxEnum/NoYes.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use super::category::ObjectKind;
use super::provider::{MetadataProvider, Partition};
use super::record::Record;
use crate::error::{AxDocError, Result};

/// Folder inside each package that declares its models.
pub const DESCRIPTOR_DIR: &str = "Descriptor";

const RECORD_EXTENSION: &str = "json";

/// Discover every model under `root`, packages and models in name order.
///
/// A package without a descriptor folder is skipped.
///
/// # Errors
///
/// Returns [`AxDocError::Discovery`] when `root` is missing, not a directory,
/// or cannot be listed.
pub fn discover_partitions(root: &Path) -> Result<Vec<Partition>> {
    if !root.is_dir() {
        return Err(AxDocError::discovery(root, "metadata root is not a directory"));
    }

    let mut packages = sorted_entries(root)
        .map_err(|e| AxDocError::discovery(root, format!("cannot read root: {e}")))?;
    packages.retain(|p| p.is_dir());

    let mut partitions = Vec::new();
    for package_dir in packages {
        let package = file_name(&package_dir);
        let descriptor_dir = package_dir.join(DESCRIPTOR_DIR);
        if !descriptor_dir.is_dir() {
            log::debug!("Skipping {package}: no {DESCRIPTOR_DIR} folder");
            continue;
        }

        let descriptors = match sorted_entries(&descriptor_dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Skipping {package}: cannot read descriptors ({e})");
                continue;
            }
        };

        for descriptor in descriptors {
            if descriptor.extension().and_then(|s| s.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            let Some(model) = descriptor.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            partitions.push(Partition::new(model, &package, package_dir.join(model)));
        }
    }

    log::info!(
        "Discovered {} models under {}",
        partitions.len(),
        root.display()
    );
    Ok(partitions)
}

/// Provider reading one JSON file per object from a discovered catalog.
#[derive(Debug, Clone)]
pub struct FileSystemProvider {
    partitions: Vec<Partition>,
}

impl FileSystemProvider {
    /// Discover partitions under `root` and build a provider over them.
    ///
    /// # Errors
    ///
    /// Fails when `root` is not a readable directory (see [`discover_partitions`]).
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let partitions = discover_partitions(root.as_ref())?;
        Ok(Self { partitions })
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    fn object_path(partition: &Partition, kind: ObjectKind, name: &str) -> PathBuf {
        partition
            .path
            .join(kind.folder())
            .join(format!("{name}.{RECORD_EXTENSION}"))
    }
}

impl MetadataProvider for FileSystemProvider {
    fn list_identifiers(&self, kind: ObjectKind, partition: &Partition) -> Result<Vec<String>> {
        let folder = partition.path.join(kind.folder());
        if !folder.is_dir() {
            return Ok(Vec::new());
        }

        let entries = sorted_entries(&folder).map_err(|e| {
            AxDocError::provider(format!("cannot list {}: {e}", folder.display()))
        })?;

        Ok(entries
            .iter()
            .filter(|p| p.extension().and_then(|s| s.to_str()) == Some(RECORD_EXTENSION))
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(str::to_owned))
            .collect())
    }

    fn read_object(&self, kind: ObjectKind, name: &str) -> Result<Option<Record>> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(AxDocError::provider(format!("invalid object name '{name}'")));
        }

        let Some(path) = self
            .partitions
            .iter()
            .map(|p| Self::object_path(p, kind, name))
            .find(|p| p.is_file())
        else {
            return Ok(None);
        };

        let json = fs::read_to_string(&path).map_err(|e| {
            AxDocError::provider(format!("cannot read {}: {e}", path.display()))
        })?;
        let record: Record = serde_json::from_str(&json).map_err(|e| {
            AxDocError::provider(format!("malformed record {}: {e}", path.display()))
        })?;
        Ok(Some(record))
    }
}

fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect::<Vec<_>>();
    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
