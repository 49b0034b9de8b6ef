use super::{open_catalog, print_json};
use anyhow::Result;
use std::path::Path;

pub fn run(symbols: &Path, identifier: &str) -> Result<()> {
    let catalog = open_catalog(symbols)?;
    let details = catalog.node_details(identifier)?;
    print_json(&details)
}
