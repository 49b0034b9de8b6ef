use super::open_catalog;
use anyhow::{Result, anyhow};
use mib_engine::query::ResolveMode;
use std::path::Path;
use std::str::FromStr;

pub fn run(symbols: &Path, identifier: &str, mode: &str) -> Result<()> {
    let mode = ResolveMode::from_str(mode).map_err(|_| anyhow!("unknown mode: {mode:?}"))?;
    let catalog = open_catalog(symbols)?;
    println!("{}", catalog.resolve(identifier, mode));
    Ok(())
}
