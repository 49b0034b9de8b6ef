//! OID tree node types.

use crate::model::Oid;
use serde::Serialize;
use strum::{Display, EnumString};

/// Classification of a managed-object definition, mapped from the
/// compiler collaborator's class kind.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum NodeType {
    /// Single-instance object
    Scalar,
    /// Conceptual table
    Table,
    /// Column object within a table row
    TableColumn,
    /// NOTIFICATION-TYPE / trap definition
    Notification,
    /// Module-identity marker
    Module,
    /// Anything else (identifiers, rows, groups, unknown kinds)
    #[default]
    Other,
}

impl NodeType {
    /// Map a collaborator class-kind string onto a node type. Unknown
    /// kinds land on `Other` rather than failing ingestion.
    pub fn from_kind(kind: &str) -> Self {
        if kind.contains("Notification") {
            NodeType::Notification
        } else if kind.contains("Scalar") {
            NodeType::Scalar
        } else if kind.contains("Column") {
            NodeType::TableColumn
        } else if kind.contains("Table") && !kind.contains("Row") {
            NodeType::Table
        } else if kind.contains("Module") {
            NodeType::Module
        } else {
            NodeType::Other
        }
    }
}

/// A node in the OID tree.
///
/// Nodes are created in bulk during a build pass and never mutated
/// afterwards; a rebuild replaces the whole structure. `parent` and
/// `children` hold keys into the tree map, never owning pointers.
#[derive(Clone, Debug, Serialize)]
pub struct OidNode {
    pub oid: Oid,
    pub name: String,
    pub module: String,
    pub node_type: NodeType,
    /// Syntax name, empty when the collaborator did not report one
    pub syntax: String,
    /// Max-access keyword, empty when unknown
    pub access: String,
    /// Status keyword, empty when unknown
    pub status: String,
    pub description: String,
    /// Index column names, for table rows
    pub indexes: Vec<String>,
    /// Back-reference to the parent key; `None` for roots and orphans
    pub parent: Option<Oid>,
    /// Child keys, ascending and duplicate-free
    pub children: Vec<Oid>,
}

impl OidNode {
    /// The qualified `module::name` form used by the symbolic index.
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.module, self.name)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
