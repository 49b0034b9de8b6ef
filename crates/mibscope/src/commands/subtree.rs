use super::{open_catalog, print_json};
use anyhow::Result;
use std::path::Path;

pub fn run(symbols: &Path, oid: &str, depth: usize, module: Option<&str>) -> Result<()> {
    let catalog = open_catalog(symbols)?;
    let view = catalog.oid_subtree(oid, depth, module)?;
    print_json(&view)
}
