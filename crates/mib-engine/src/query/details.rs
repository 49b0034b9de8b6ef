//! Node detail lookup: the node itself, its siblings and a breadcrumb.

use crate::error::{QueryError, Result};
use crate::model::{NodeType, Oid, OidNode};
use crate::query::types::{BreadcrumbEntry, NodeDetails, NodeView};
use crate::snapshot::MibSnapshot;
use rustc_hash::FxHashSet;

/// Top-of-tree arc labels that carry no information in a breadcrumb.
const GENERIC_ARC_LABELS: &[&str] = &["iso", "org", "dod", "internet"];

/// Look up one node by dotted-numeric or `module::name` identifier.
pub fn node_details(snapshot: &MibSnapshot, identifier: &str) -> Result<NodeDetails> {
    let oid = snapshot
        .oid_index
        .get(identifier)
        .or_else(|| snapshot.name_index.get(identifier))
        .ok_or_else(|| QueryError::NotFound(identifier.to_string()))?;

    let node = snapshot
        .node(oid)
        .ok_or_else(|| QueryError::NotFound(identifier.to_string()))?;

    Ok(NodeDetails {
        node: NodeView::from(node),
        siblings: siblings_of(snapshot, node),
        breadcrumb: breadcrumb(snapshot, &node.oid),
    })
}

/// The parent's children minus the node itself, in child order.
fn siblings_of(snapshot: &MibSnapshot, node: &OidNode) -> Vec<NodeView> {
    let Some(parent_oid) = &node.parent else {
        return Vec::new();
    };
    let Some(parent) = snapshot.node(parent_oid) else {
        return Vec::new();
    };
    parent
        .children
        .iter()
        .filter(|child| **child != node.oid)
        .filter_map(|child| snapshot.node(child))
        .map(NodeView::from)
        .collect()
}

/// Walk upward to the root and return the meaningful part of the path
/// in root-to-leaf order.
///
/// Missing tree entries fall back to truncating the key by one arc. The
/// visited set guards against cycles: the tree is acyclic by
/// construction, but malformed ingestion data must not hang the walk.
pub(crate) fn breadcrumb(snapshot: &MibSnapshot, oid: &Oid) -> Vec<BreadcrumbEntry> {
    let mut path: Vec<&OidNode> = Vec::new();
    let mut visited: FxHashSet<Oid> = FxHashSet::default();
    let mut current = Some(oid.clone());

    while let Some(cur) = current {
        if !visited.insert(cur.clone()) {
            break;
        }
        match snapshot.node(&cur) {
            Some(node) => {
                path.push(node);
                current = node.parent.clone();
            }
            None => current = cur.parent(),
        }
    }

    path.reverse();
    path.into_iter()
        .filter(|node| !is_bookkeeping(node))
        .map(|node| BreadcrumbEntry {
            oid: node.oid.to_string(),
            name: node.name.clone(),
            full_name: node.full_name(),
            module: node.module.clone(),
        })
        .collect()
}

/// Module-identity markers and generic top-of-tree arcs are dropped
/// from breadcrumbs.
fn is_bookkeeping(node: &OidNode) -> bool {
    node.node_type == NodeType::Module || GENERIC_ARC_LABELS.contains(&node.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build_snapshot;
    use crate::ingest::{ModuleSymbols, SymbolRecord, SymbolSet};

    fn symbol(arcs: &[u32], name: &str, kind: &str) -> SymbolRecord {
        SymbolRecord {
            oid: Oid::from_arcs(arcs),
            name: name.to_string(),
            kind: kind.to_string(),
            syntax: None,
            access: None,
            status: None,
            description: None,
            indexes: Vec::new(),
        }
    }

    fn system_snapshot() -> MibSnapshot {
        build_snapshot(SymbolSet {
            modules: vec![ModuleSymbols {
                module: "SNMPv2-MIB".to_string(),
                system: true,
                symbols: vec![
                    symbol(&[1, 3, 6, 1], "internet", "MibIdentifier"),
                    symbol(&[1, 3, 6, 1, 2], "mgmt", "MibIdentifier"),
                    symbol(&[1, 3, 6, 1, 2, 1], "mib-2", "MibIdentifier"),
                    symbol(&[1, 3, 6, 1, 2, 1, 1], "system", "MibIdentifier"),
                    symbol(&[1, 3, 6, 1, 2, 1, 1, 1], "sysDescr", "MibScalar"),
                    symbol(&[1, 3, 6, 1, 2, 1, 1, 3], "sysUpTime", "MibScalar"),
                    symbol(&[1, 3, 6, 1, 2, 1, 1, 5], "sysName", "MibScalar"),
                ],
            }],
            failures: Vec::new(),
            ancestors: Vec::new(),
        })
    }

    #[test]
    fn test_lookup_by_oid_and_by_name() {
        let snapshot = system_snapshot();

        let by_oid = node_details(&snapshot, "1.3.6.1.2.1.1.3").unwrap();
        assert_eq!(by_oid.node.name, "sysUpTime");

        let by_name = node_details(&snapshot, "SNMPv2-MIB::sysUpTime").unwrap();
        assert_eq!(by_name.node.oid, "1.3.6.1.2.1.1.3");
    }

    #[test]
    fn test_instance_level_lookup_is_not_found() {
        let snapshot = system_snapshot();
        // Only 1.3.6.1.2.1.1.3 exists; the .0 instance is not a node.
        assert!(matches!(
            node_details(&snapshot, "1.3.6.1.2.1.1.3.0"),
            Err(QueryError::NotFound(_))
        ));
    }

    #[test]
    fn test_siblings_exclude_self_and_keep_order() {
        let snapshot = system_snapshot();
        let details = node_details(&snapshot, "1.3.6.1.2.1.1.3").unwrap();
        let names: Vec<&str> = details.siblings.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["sysDescr", "sysName"]);
    }

    #[test]
    fn test_breadcrumb_drops_generic_arcs() {
        let snapshot = system_snapshot();
        let details = node_details(&snapshot, "1.3.6.1.2.1.1.1").unwrap();
        let names: Vec<&str> = details.breadcrumb.iter().map(|b| b.name.as_str()).collect();
        // internet is ingested but generic, so it is dropped.
        assert_eq!(names, vec!["mgmt", "mib-2", "system", "sysDescr"]);
    }

    #[test]
    fn test_breadcrumb_skips_module_identity_markers() {
        let snapshot = build_snapshot(SymbolSet {
            modules: vec![ModuleSymbols {
                module: "EXAMPLE-MIB".to_string(),
                system: false,
                symbols: vec![
                    symbol(&[1, 3, 6, 1, 4, 1, 42], "exampleModule", "ModuleIdentity"),
                    symbol(&[1, 3, 6, 1, 4, 1, 42, 1], "exampleObject", "MibScalar"),
                ],
            }],
            failures: Vec::new(),
            ancestors: Vec::new(),
        });

        let details = node_details(&snapshot, "1.3.6.1.4.1.42.1").unwrap();
        let names: Vec<&str> = details.breadcrumb.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["exampleObject"]);
    }

    #[test]
    fn test_breadcrumb_survives_malformed_parent_cycles() {
        let mut snapshot = system_snapshot();
        // Corrupt a parent link to point at the node itself.
        let oid = Oid::from_arcs(&[1, 3, 6, 1, 2, 1, 1, 1]);
        snapshot.nodes.get_mut(&oid).unwrap().parent = Some(oid.clone());

        // Must terminate and still return the node itself.
        let crumbs = breadcrumb(&snapshot, &oid);
        assert_eq!(crumbs.last().unwrap().name, "sysDescr");
    }
}
