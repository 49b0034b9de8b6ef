//! Subtree expansion from a (possibly virtual) anchor.

use crate::error::Result;
use crate::model::{NodeType, Oid, OidNode};
use crate::query::types::{NodeView, SubtreeView, TreeNodeView};
use crate::query::well_known_name;
use crate::snapshot::MibSnapshot;

/// Expansion depth is clamped into this range.
pub const MIN_DEPTH: usize = 1;
pub const MAX_DEPTH: usize = 5;

/// Expand the tree below `root_oid` to the requested depth.
///
/// Anchors without a tree entry become virtual nodes named from the
/// well-known-arc table; their children are found by a prefix scan one
/// level deeper (virtual-root lookups are rare, so the linear scan is
/// acceptable). `module_filter` excludes individual nodes whose module
/// differs; descendants of an excluded node are simply not reached
/// through it.
pub fn oid_subtree(
    snapshot: &MibSnapshot,
    root_oid: &str,
    depth: usize,
    module_filter: Option<&str>,
) -> Result<SubtreeView> {
    let anchor = Oid::parse(root_oid)?;
    let depth = depth.clamp(MIN_DEPTH, MAX_DEPTH);

    let root = match snapshot.node(&anchor) {
        Some(node) => NodeView::from(node),
        None => virtual_node_view(&anchor),
    };

    let children = expand_children(snapshot, &anchor, depth, module_filter);
    Ok(SubtreeView {
        child_count: children.len(),
        root,
        children,
    })
}

fn virtual_node_view(oid: &Oid) -> NodeView {
    let dotted = oid.to_string();
    NodeView {
        oid: dotted.clone(),
        name: well_known_name(oid),
        full_name: dotted,
        module: "Standard".to_string(),
        node_type: NodeType::Other,
        syntax: String::new(),
        access: String::new(),
        status: String::new(),
        description: String::new(),
        indexes: Vec::new(),
        parent: None,
        has_children: true,
    }
}

fn expand_children(
    snapshot: &MibSnapshot,
    parent: &Oid,
    depth: usize,
    module_filter: Option<&str>,
) -> Vec<TreeNodeView> {
    if depth == 0 {
        return Vec::new();
    }

    if let Some(parent_node) = snapshot.node(parent) {
        let mut children = Vec::new();
        for child_oid in &parent_node.children {
            let Some(child) = snapshot.node(child_oid) else {
                continue;
            };
            if excluded(child, module_filter) {
                continue;
            }
            let grandchildren = if depth > 1 && child.has_children() {
                expand_children(snapshot, child_oid, depth - 1, module_filter)
            } else {
                Vec::new()
            };
            children.push(TreeNodeView {
                node: NodeView::from(child),
                children: grandchildren,
            });
        }
        children
    } else {
        // Virtual anchor: scan for nodes exactly one level deeper that
        // share the anchor's prefix.
        let mut found: Vec<&OidNode> = snapshot
            .nodes
            .values()
            .filter(|node| node.oid.len() == parent.len() + 1 && node.oid.starts_with(parent))
            .filter(|node| !excluded(node, module_filter))
            .collect();
        found.sort_by(|a, b| a.oid.cmp(&b.oid));
        found
            .into_iter()
            .map(|node| TreeNodeView {
                node: NodeView::from(node),
                children: Vec::new(),
            })
            .collect()
    }
}

fn excluded(node: &OidNode, module_filter: Option<&str>) -> bool {
    module_filter.is_some_and(|filter| node.module != filter)
}
