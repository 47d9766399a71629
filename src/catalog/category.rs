//! Vocabulary of documentable object kinds.
//!
//! A [`Category`] is what a user selects; an [`ObjectKind`] is what the provider
//! lists and reads. Most categories map to exactly one kind, menu items map to
//! three (display, action, output).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::AxDocError;

/// User-selectable object categories, in document order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Enums,
    Edts,
    Tables,
    Views,
    DataEntities,
    Classes,
    Forms,
    MenuItems,
    Queries,
    Services,
    Maps,
    SecurityRoles,
    SecurityDuties,
    SecurityPrivileges,
    CompositeEntities,
    AggregateEntities,
}

impl Category {
    /// Every category in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Enums,
        Self::Edts,
        Self::Tables,
        Self::Views,
        Self::DataEntities,
        Self::Classes,
        Self::Forms,
        Self::MenuItems,
        Self::Queries,
        Self::Services,
        Self::Maps,
        Self::SecurityRoles,
        Self::SecurityDuties,
        Self::SecurityPrivileges,
        Self::CompositeEntities,
        Self::AggregateEntities,
    ];

    /// Stable key used in config files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::Enums => "enums",
            Self::Edts => "edts",
            Self::Tables => "tables",
            Self::Views => "views",
            Self::DataEntities => "data-entities",
            Self::Classes => "classes",
            Self::Forms => "forms",
            Self::MenuItems => "menu-items",
            Self::Queries => "queries",
            Self::Services => "services",
            Self::Maps => "maps",
            Self::SecurityRoles => "security-roles",
            Self::SecurityDuties => "security-duties",
            Self::SecurityPrivileges => "security-privileges",
            Self::CompositeEntities => "composite-entities",
            Self::AggregateEntities => "aggregate-entities",
        }
    }

    /// Heading used in the document and the interactive menu.
    pub fn title(self) -> &'static str {
        match self {
            Self::Enums => "Enums",
            Self::Edts => "Extended Data Types",
            Self::Tables => "Tables",
            Self::Views => "Views",
            Self::DataEntities => "Data Entities",
            Self::Classes => "Classes",
            Self::Forms => "Forms",
            Self::MenuItems => "Menu Items",
            Self::Queries => "Queries",
            Self::Services => "Services",
            Self::Maps => "Maps",
            Self::SecurityRoles => "Security Roles",
            Self::SecurityDuties => "Security Duties",
            Self::SecurityPrivileges => "Security Privileges",
            Self::CompositeEntities => "Composite Data Entities",
            Self::AggregateEntities => "Aggregate Data Entities",
        }
    }

    /// Provider-level kinds read for this category.
    pub fn kinds(self) -> &'static [ObjectKind] {
        match self {
            Self::Enums => &[ObjectKind::Enum],
            Self::Edts => &[ObjectKind::Edt],
            Self::Tables => &[ObjectKind::Table],
            Self::Views => &[ObjectKind::View],
            Self::DataEntities => &[ObjectKind::DataEntity],
            Self::Classes => &[ObjectKind::Class],
            Self::Forms => &[ObjectKind::Form],
            Self::MenuItems => &[
                ObjectKind::MenuItemDisplay,
                ObjectKind::MenuItemAction,
                ObjectKind::MenuItemOutput,
            ],
            Self::Queries => &[ObjectKind::Query],
            Self::Services => &[ObjectKind::Service],
            Self::Maps => &[ObjectKind::Map],
            Self::SecurityRoles => &[ObjectKind::SecurityRole],
            Self::SecurityDuties => &[ObjectKind::SecurityDuty],
            Self::SecurityPrivileges => &[ObjectKind::SecurityPrivilege],
            Self::CompositeEntities => &[ObjectKind::CompositeEntity],
            Self::AggregateEntities => &[ObjectKind::AggregateEntity],
        }
    }

    /// 1-based position in the interactive menu.
    pub fn menu_number(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .map_or(0, |i| i + 1)
    }

    /// Look up a category by its 1-based menu number.
    pub fn from_menu_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Category {
    type Err = AxDocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|c| c.key() == needle)
            .ok_or_else(|| AxDocError::Selection(format!("unknown category '{s}'")))
    }
}

/// Set of enabled categories. Iteration always follows declaration order.
pub type CategorySet = BTreeSet<Category>;

/// Every category enabled.
pub fn all_categories() -> CategorySet {
    Category::ALL.into_iter().collect()
}

/// Concrete object kinds exposed by the metadata provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectKind {
    Enum,
    Edt,
    Table,
    View,
    DataEntity,
    Class,
    Form,
    MenuItemDisplay,
    MenuItemAction,
    MenuItemOutput,
    Query,
    Service,
    Map,
    SecurityRole,
    SecurityDuty,
    SecurityPrivilege,
    CompositeEntity,
    AggregateEntity,
}

impl ObjectKind {
    /// Folder holding objects of this kind inside a model directory.
    pub fn folder(self) -> &'static str {
        match self {
            Self::Enum => "AxEnum",
            Self::Edt => "AxEdt",
            Self::Table => "AxTable",
            Self::View => "AxView",
            Self::DataEntity => "AxDataEntityView",
            Self::Class => "AxClass",
            Self::Form => "AxForm",
            Self::MenuItemDisplay => "AxMenuItemDisplay",
            Self::MenuItemAction => "AxMenuItemAction",
            Self::MenuItemOutput => "AxMenuItemOutput",
            Self::Query => "AxQuery",
            Self::Service => "AxService",
            Self::Map => "AxMap",
            Self::SecurityRole => "AxSecurityRole",
            Self::SecurityDuty => "AxSecurityDuty",
            Self::SecurityPrivilege => "AxSecurityPrivilege",
            Self::CompositeEntity => "AxCompositeDataEntityView",
            Self::AggregateEntity => "AxAggregateDataEntity",
        }
    }

    /// Label used for tally entries and sub-headings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Enum => "Enums",
            Self::Edt => "EDTs",
            Self::Table => "Tables",
            Self::View => "Views",
            Self::DataEntity => "Data Entities",
            Self::Class => "Classes",
            Self::Form => "Forms",
            Self::MenuItemDisplay => "Display Menu Items",
            Self::MenuItemAction => "Action Menu Items",
            Self::MenuItemOutput => "Output Menu Items",
            Self::Query => "Queries",
            Self::Service => "Services",
            Self::Map => "Maps",
            Self::SecurityRole => "Security Roles",
            Self::SecurityDuty => "Security Duties",
            Self::SecurityPrivilege => "Security Privileges",
            Self::CompositeEntity => "Composite Entities",
            Self::AggregateEntity => "Aggregate Entities",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder())
    }
}
