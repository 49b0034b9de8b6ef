//! The published snapshot and its rebuild cycle.

use crate::build::build_snapshot;
use crate::error::Result;
use crate::ingest::SymbolProvider;
use crate::model::NodeType;
use crate::query;
use crate::query::ResolveMode;
use crate::query::types::{
    ModuleStats, ModuleTreeView, NodeDetails, SearchResults, StatusView, SubtreeView,
};
use crate::snapshot::MibSnapshot;
use std::sync::{Arc, RwLock};
use tracing::info;

/// Owns the compiled MIB universe and hands out consistent snapshots.
///
/// Readers clone the current `Arc` under a read lock and never observe
/// a partially built tree: `rebuild` constructs the replacement
/// completely before swapping the published reference. Rebuilds are
/// rare (explicit admin action), so the coarse lock is fine.
pub struct MibCatalog {
    provider: Box<dyn SymbolProvider>,
    current: RwLock<Arc<MibSnapshot>>,
}

impl MibCatalog {
    /// Build the initial snapshot from the provider.
    pub fn new(provider: Box<dyn SymbolProvider>) -> anyhow::Result<Self> {
        let set = provider.load()?;
        let snapshot = Arc::new(build_snapshot(set));
        info!(
            modules = snapshot.modules().len(),
            nodes = snapshot.node_count(),
            "catalog initialized"
        );
        Ok(Self {
            provider,
            current: RwLock::new(snapshot),
        })
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<MibSnapshot> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Re-ingest from the provider and atomically publish the result.
    /// Invoked after upload, delete or reload of the underlying module
    /// files.
    pub fn rebuild(&self) -> anyhow::Result<()> {
        let set = self.provider.load()?;
        let replacement = Arc::new(build_snapshot(set));
        let mut published = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *published = replacement;
        info!(nodes = published.node_count(), "catalog rebuilt");
        Ok(())
    }

    pub fn module_tree(&self, module_filter: Option<&str>) -> Vec<ModuleTreeView> {
        query::module_tree(&self.snapshot(), module_filter)
    }

    pub fn oid_subtree(
        &self,
        root_oid: &str,
        depth: usize,
        module_filter: Option<&str>,
    ) -> Result<SubtreeView> {
        query::oid_subtree(&self.snapshot(), root_oid, depth, module_filter)
    }

    pub fn node_details(&self, identifier: &str) -> Result<NodeDetails> {
        query::node_details(&self.snapshot(), identifier)
    }

    pub fn search(
        &self,
        text: &str,
        limit: usize,
        module_filter: Option<&str>,
        type_filter: Option<NodeType>,
    ) -> SearchResults {
        query::search(&self.snapshot(), text, limit, module_filter, type_filter)
    }

    pub fn resolve(&self, identifier: &str, mode: ResolveMode) -> String {
        query::resolve(&self.snapshot(), identifier, mode)
    }

    pub fn module_stats(&self) -> Vec<ModuleStats> {
        query::module_stats(&self.snapshot())
    }

    pub fn status(&self) -> StatusView {
        query::status(&self.snapshot())
    }
}
