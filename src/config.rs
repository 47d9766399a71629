//! Run configuration.
//!
//! Settings persist as JSON. Every field has a default, so a partial file (or
//! none at all) is a valid configuration. Command-line flags are layered on top
//! by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::Category;
use crate::error::{AxDocError, Result, ResultExt as _};

/// File name used when the output path names a directory.
pub const DEFAULT_OUTPUT_FILE: &str = "AxMetadataDocumentation.md";

/// Top-level settings for one documentation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    /// Root of the metadata catalog (the packages directory)
    pub metadata_root: Option<PathBuf>,
    /// Output document, or a directory to place it in
    pub output: PathBuf,
    /// Categories to document when none are given on the command line.
    /// Empty means the user is asked.
    pub categories: Vec<Category>,
    /// Knobs consulted while reading objects
    pub extraction: ExtractOptions,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            metadata_root: None,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            categories: Vec::new(),
            extraction: ExtractOptions::default(),
        }
    }
}

/// Literal sets and filters used by the category extractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Class name prefixes that get a detailed section (extends + methods)
    pub class_prefixes: Vec<String>,
    /// Values of an index's `AllowDuplicates` that mark it unique
    pub allow_duplicates_false_literals: Vec<String>,
    /// Values treated as "yes" for mandatory, static and public flags
    pub truthy_literals: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            class_prefixes: [
                "SysOperation",
                "RunBase",
                "FormLetter",
                "NumberSeq",
                "SysDict",
                "SysExtension",
                "SysQuery",
                "Dmf",
                "BatchJob",
                "Global",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            allow_duplicates_false_literals: ["No", "0", "false"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            truthy_literals: ["Yes", "1", "true"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl ExtractOptions {
    /// Whether `name` starts with one of the configured class prefixes.
    pub fn is_documented_class(&self, name: &str) -> bool {
        self.class_prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && name.starts_with(prefix.as_str()))
    }
}

impl DocConfig {
    /// Default location: `<config dir>/axdoc/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("axdoc").join("config.json"))
    }

    /// Load from an explicit path.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing, unreadable, or not valid config JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str::<Self>(&contents)
            .with_context(|| format!("Failed to parse config JSON in {}", path.display()))
    }

    /// Load from `path` if given, otherwise from the default location.
    /// A missing default file yields defaults.
    ///
    /// # Errors
    ///
    /// See [`DocConfig::load_from`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Output file path, with directories resolved to [`DEFAULT_OUTPUT_FILE`].
    pub fn output_file(&self) -> PathBuf {
        if self.output.is_dir() || self.output.as_os_str().is_empty() {
            self.output.join(DEFAULT_OUTPUT_FILE)
        } else {
            self.output.clone()
        }
    }

    /// The configured metadata root.
    ///
    /// # Errors
    ///
    /// Returns [`AxDocError::Config`] when no root is set.
    pub fn require_root(&self) -> Result<&Path> {
        self.metadata_root.as_deref().ok_or_else(|| {
            AxDocError::Config(
                "no metadata root configured (pass --root or set metadata_root)".to_owned(),
            )
        })
    }
}
