//! Module-organized tree listing.

use crate::model::OidNode;
use crate::query::types::{ModuleTreeView, NodeView};
use crate::snapshot::MibSnapshot;
use rustc_hash::FxHashMap;

/// Synthesize one tree entry per module, with every node of that module
/// attached as a child sorted by oid. Modules without any nodes are
/// omitted. `module_filter` restricts the listing to a single module.
pub fn module_tree(snapshot: &MibSnapshot, module_filter: Option<&str>) -> Vec<ModuleTreeView> {
    let mut by_module: FxHashMap<&str, Vec<&OidNode>> = FxHashMap::default();
    for node in snapshot.nodes.values() {
        by_module.entry(node.module.as_str()).or_default().push(node);
    }

    let mut result = Vec::new();
    for info in snapshot.modules() {
        if module_filter.is_some_and(|filter| filter != info.name) {
            continue;
        }
        let Some(members) = by_module.get_mut(info.name.as_str()) else {
            continue;
        };
        if members.is_empty() {
            continue;
        }
        members.sort_by(|a, b| a.oid.cmp(&b.oid));
        result.push(ModuleTreeView {
            module: info.name.clone(),
            is_system: info.system,
            children: members.iter().map(|node| NodeView::from(*node)).collect(),
        });
    }
    result
}
