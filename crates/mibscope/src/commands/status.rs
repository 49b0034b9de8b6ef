use super::{open_catalog, print_json};
use anyhow::Result;
use std::path::Path;

pub fn run(symbols: &Path) -> Result<()> {
    let catalog = open_catalog(symbols)?;
    print_json(&catalog.status())
}
