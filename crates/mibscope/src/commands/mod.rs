pub mod details;
pub mod resolve;
pub mod search;
pub mod stats;
pub mod status;
pub mod subtree;
pub mod tree;
pub mod walk;

use crate::provider::JsonSymbolProvider;
use anyhow::Result;
use mib_engine::MibCatalog;
use serde::Serialize;
use std::path::Path;

/// Build a catalog over the symbol dump at `path`.
pub(crate) fn open_catalog(path: &Path) -> Result<MibCatalog> {
    MibCatalog::new(Box::new(JsonSymbolProvider::new(path.to_path_buf())))
}

/// All command output goes to STDOUT as pretty JSON.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
