//! The immutable snapshot published by a build pass.

use crate::ingest::{AncestorEntry, ModuleFailure};
use crate::model::{Oid, OidNode};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// Per-module metadata carried alongside the tree.
#[derive(Clone, Debug, Serialize)]
pub struct ModuleInfo {
    pub name: String,
    /// Pre-existing/system module rather than a user-uploaded one
    pub system: bool,
    /// Scalars and table columns
    pub objects: usize,
    pub notifications: usize,
}

/// One complete, read-only view of the compiled MIB universe: the OID
/// tree, its derived indices, per-module metadata and ingestion
/// failures. A rebuild constructs a whole new snapshot and swaps it in;
/// a live snapshot is never mutated.
#[derive(Debug, Default)]
pub struct MibSnapshot {
    /// Identity-keyed node storage
    pub(crate) nodes: FxHashMap<Oid, OidNode>,
    /// Dotted string form to key, injective
    pub(crate) oid_index: FxHashMap<String, Oid>,
    /// `module::name` to key, injective
    pub(crate) name_index: FxHashMap<String, Oid>,
    /// Lowercase keyword to the keys that produced it
    pub(crate) search_index: FxHashMap<String, FxHashSet<Oid>>,
    /// Module name to its shallow, root-like keys
    pub(crate) module_roots: FxHashMap<String, Vec<Oid>>,
    /// Sorted by module name
    pub(crate) modules: Vec<ModuleInfo>,
    pub(crate) failures: Vec<ModuleFailure>,
    /// Collaborator label paths, longest prefix wins
    pub(crate) ancestors: Vec<AncestorEntry>,
}

impl MibSnapshot {
    pub fn node(&self, oid: &Oid) -> Option<&OidNode> {
        self.nodes.get(oid)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn modules(&self) -> &[ModuleInfo] {
        &self.modules
    }

    pub fn failures(&self) -> &[ModuleFailure] {
        &self.failures
    }

    pub fn module_roots(&self, module: &str) -> Option<&[Oid]> {
        self.module_roots.get(module).map(|roots| roots.as_slice())
    }

    /// Look up the longest collaborator-supplied label path covering
    /// `oid`. Returns the labels plus the arcs left unresolved below the
    /// covered prefix.
    pub fn ancestor_label<'a>(&'a self, oid: &'a Oid) -> Option<(&'a [String], &'a [u32])> {
        let mut best: Option<(&AncestorEntry, &[u32])> = None;
        for entry in &self.ancestors {
            if let Some(suffix) = oid.suffix_after(&entry.oid) {
                let better = match best {
                    Some((current, _)) => entry.oid.len() > current.oid.len(),
                    None => true,
                };
                if better {
                    best = Some((entry, suffix));
                }
            }
        }
        best.map(|(entry, suffix)| (entry.labels.as_slice(), suffix))
    }
}
