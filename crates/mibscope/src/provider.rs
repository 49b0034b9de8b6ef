//! File-backed symbol provider.
//!
//! The MIB compiler collaborator runs out of band and serializes its
//! output as a JSON symbol dump; this provider replays that dump into
//! the engine. Re-reading the file on every `load` gives `rebuild` its
//! hot-reload semantics.

use anyhow::Context;
use mib_engine::{SymbolProvider, SymbolSet};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub struct JsonSymbolProvider {
    path: PathBuf,
}

impl JsonSymbolProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SymbolProvider for JsonSymbolProvider {
    fn load(&self) -> anyhow::Result<SymbolSet> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading symbol dump {}", self.path.display()))?;
        let set: SymbolSet = serde_json::from_str(&content)
            .with_context(|| format!("parsing symbol dump {}", self.path.display()))?;
        debug!(
            path = %self.path.display(),
            modules = set.modules.len(),
            failures = set.failures.len(),
            "symbol dump loaded"
        );
        Ok(set)
    }
}
