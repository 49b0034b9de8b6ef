//! Per-module statistics and overall ingestion status.

use crate::model::NodeType;
use crate::query::types::{ModuleStats, StatusView};
use crate::snapshot::MibSnapshot;
use std::collections::BTreeMap;

/// Classify every node and count per module, sorted by module name.
pub fn module_stats(snapshot: &MibSnapshot) -> Vec<ModuleStats> {
    let mut by_module: BTreeMap<&str, ModuleStats> = BTreeMap::new();

    for node in snapshot.nodes.values() {
        let entry = by_module
            .entry(node.module.as_str())
            .or_insert_with(|| ModuleStats {
                name: node.module.clone(),
                objects: 0,
                scalars: 0,
                tables: 0,
                columns: 0,
                notifications: 0,
            });
        entry.objects += 1;
        match node.node_type {
            NodeType::Scalar => entry.scalars += 1,
            NodeType::Table => entry.tables += 1,
            NodeType::TableColumn => entry.columns += 1,
            NodeType::Notification => entry.notifications += 1,
            NodeType::Module | NodeType::Other => {}
        }
    }

    by_module.into_values().collect()
}

/// Loaded/failed module counts plus the underlying records.
pub fn status(snapshot: &MibSnapshot) -> StatusView {
    StatusView {
        loaded: snapshot.modules().len(),
        failed: snapshot.failures().len(),
        total: snapshot.modules().len() + snapshot.failures().len(),
        modules: snapshot.modules().to_vec(),
        failures: snapshot.failures().to_vec(),
    }
}
