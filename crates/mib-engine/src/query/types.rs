//! Serializable views returned by the query operations.

use crate::model::{NodeType, OidNode};
use serde::Serialize;

/// Flat view of one tree node.
#[derive(Clone, Debug, Serialize)]
pub struct NodeView {
    pub oid: String,
    pub name: String,
    pub full_name: String,
    pub module: String,
    pub node_type: NodeType,
    pub syntax: String,
    pub access: String,
    pub status: String,
    pub description: String,
    pub indexes: Vec<String>,
    pub parent: Option<String>,
    pub has_children: bool,
}

impl From<&OidNode> for NodeView {
    fn from(node: &OidNode) -> Self {
        Self {
            oid: node.oid.to_string(),
            name: node.name.clone(),
            full_name: node.full_name(),
            module: node.module.clone(),
            node_type: node.node_type,
            syntax: node.syntax.clone(),
            access: node.access.clone(),
            status: node.status.clone(),
            description: node.description.clone(),
            indexes: node.indexes.clone(),
            parent: node.parent.as_ref().map(|p| p.to_string()),
            has_children: node.has_children(),
        }
    }
}

/// A node plus its expanded children, used by subtree expansion.
#[derive(Clone, Debug, Serialize)]
pub struct TreeNodeView {
    #[serde(flatten)]
    pub node: NodeView,
    pub children: Vec<TreeNodeView>,
}

/// Subtree expansion anchored at a (possibly virtual) root.
#[derive(Clone, Debug, Serialize)]
pub struct SubtreeView {
    pub root: NodeView,
    pub children: Vec<TreeNodeView>,
    /// Direct children of the anchor after filtering
    pub child_count: usize,
}

/// One synthesized module entry in the module-organized tree.
#[derive(Clone, Debug, Serialize)]
pub struct ModuleTreeView {
    pub module: String,
    pub is_system: bool,
    pub children: Vec<NodeView>,
}

/// One step of a root-to-leaf breadcrumb.
#[derive(Clone, Debug, Serialize)]
pub struct BreadcrumbEntry {
    pub oid: String,
    pub name: String,
    pub full_name: String,
    pub module: String,
}

/// Full detail response for one node.
#[derive(Clone, Debug, Serialize)]
pub struct NodeDetails {
    pub node: NodeView,
    /// The parent's other children, in child order
    pub siblings: Vec<NodeView>,
    pub breadcrumb: Vec<BreadcrumbEntry>,
}

/// Search response.
#[derive(Clone, Debug, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub count: usize,
    pub results: Vec<NodeView>,
}

/// Per-module object counts.
#[derive(Clone, Debug, Serialize)]
pub struct ModuleStats {
    pub name: String,
    pub objects: usize,
    pub scalars: usize,
    pub tables: usize,
    pub columns: usize,
    pub notifications: usize,
}

/// Overall ingestion status: what loaded, what failed.
#[derive(Clone, Debug, Serialize)]
pub struct StatusView {
    pub loaded: usize,
    pub failed: usize,
    pub total: usize,
    pub modules: Vec<crate::snapshot::ModuleInfo>,
    pub failures: Vec<crate::ingest::ModuleFailure>,
}
