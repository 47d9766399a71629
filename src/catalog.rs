//! Metadata catalog access.
//!
//! The catalog is an external, versioned data source. This module fixes the
//! vocabulary used to address it ([`Category`], [`ObjectKind`], [`Partition`]),
//! the boundary through which it is read ([`MetadataProvider`]), and the total
//! accessors used on whatever it returns ([`read_field`], [`RecordExt`]).

pub mod category;
pub mod filesystem;
pub mod provider;
pub mod record;

pub use category::{Category, CategorySet, ObjectKind, all_categories};
pub use filesystem::{FileSystemProvider, discover_partitions};
pub use provider::{MetadataProvider, Partition};
pub use record::{Record, RecordExt, matches_literal, read_field, read_nested};
