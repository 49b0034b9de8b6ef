//! Snapshot construction: one synchronous pass from symbol records to a
//! complete tree plus indices.

pub mod keywords;

use crate::ingest::SymbolSet;
use crate::model::{NodeType, Oid};
use crate::snapshot::{MibSnapshot, ModuleInfo};
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::{debug, info};

/// Nodes at most this many arcs deep are registered as root-like for
/// their module. A heuristic over observed MIB layouts, not an SMI rule.
pub const MODULE_ROOT_MAX_DEPTH: usize = 10;

/// Build a complete snapshot from one compiler pass.
///
/// Construction is deterministic: parent/child links depend only on the
/// set of keys present, and every `children` list ends up sorted
/// ascending regardless of ingestion order.
pub fn build_snapshot(set: SymbolSet) -> MibSnapshot {
    let start = Instant::now();
    let mut snapshot = MibSnapshot {
        failures: set.failures,
        ancestors: set.ancestors,
        ..MibSnapshot::default()
    };

    // Pass one: materialize nodes, direct indices and module records.
    for module in set.modules {
        let roots = snapshot.module_roots.entry(module.module.clone()).or_default();
        let mut info = ModuleInfo {
            name: module.module.clone(),
            system: module.system,
            objects: 0,
            notifications: 0,
        };

        for record in module.symbols {
            let node = record.into_node(&module.module);
            match node.node_type {
                NodeType::Scalar | NodeType::TableColumn => info.objects += 1,
                NodeType::Notification => info.notifications += 1,
                _ => {}
            }
            if node.oid.len() <= MODULE_ROOT_MAX_DEPTH {
                roots.push(node.oid.clone());
            }
            snapshot.oid_index.insert(node.oid.to_string(), node.oid.clone());
            snapshot.name_index.insert(node.full_name(), node.oid.clone());
            snapshot.nodes.insert(node.oid.clone(), node);
        }

        debug!(
            module = %info.name,
            objects = info.objects,
            notifications = info.notifications,
            "module ingested"
        );
        // A module name appears once, however often the provider
        // repeats it.
        match snapshot.modules.iter_mut().find(|m| m.name == info.name) {
            Some(existing) => {
                existing.objects += info.objects;
                existing.notifications += info.notifications;
                existing.system |= info.system;
            }
            None => snapshot.modules.push(info),
        }
    }
    snapshot.modules.sort_by(|a, b| a.name.cmp(&b.name));

    link_parents(&mut snapshot);
    build_search_index(&mut snapshot);

    info!(
        nodes = snapshot.nodes.len(),
        modules = snapshot.modules.len(),
        failures = snapshot.failures.len(),
        keywords = snapshot.search_index.len(),
        elapsed = ?start.elapsed(),
        "snapshot built"
    );
    snapshot
}

/// Pass two: wire up parent/child links by truncating each key one arc.
/// Nodes whose computed parent is absent stay orphans; they remain
/// reachable through prefix scans.
fn link_parents(snapshot: &mut MibSnapshot) {
    let keys: Vec<Oid> = snapshot
        .nodes
        .keys()
        .filter(|oid| oid.len() > 1)
        .cloned()
        .collect();

    for oid in keys {
        let Some(parent_oid) = oid.parent() else {
            continue;
        };
        if !snapshot.nodes.contains_key(&parent_oid) {
            continue;
        }
        if let Some(child) = snapshot.nodes.get_mut(&oid) {
            child.parent = Some(parent_oid.clone());
        }
        if let Some(parent) = snapshot.nodes.get_mut(&parent_oid) {
            if !parent.children.contains(&oid) {
                parent.children.push(oid);
            }
        }
    }

    for node in snapshot.nodes.values_mut() {
        node.children.sort();
    }
}

/// Pass three: the inverted keyword index.
fn build_search_index(snapshot: &mut MibSnapshot) {
    let mut entries: Vec<(Oid, FxHashSet<String>)> = Vec::with_capacity(snapshot.nodes.len());
    for node in snapshot.nodes.values() {
        entries.push((node.oid.clone(), keywords::node_keywords(node)));
    }
    for (oid, words) in entries {
        for word in words {
            snapshot
                .search_index
                .entry(word)
                .or_default()
                .insert(oid.clone());
        }
    }
}
