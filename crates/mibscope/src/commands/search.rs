use super::{open_catalog, print_json};
use anyhow::{Result, anyhow};
use mib_engine::NodeType;
use std::path::Path;
use std::str::FromStr;

pub fn run(
    symbols: &Path,
    query: &str,
    limit: usize,
    module: Option<&str>,
    node_type: Option<&str>,
) -> Result<()> {
    let type_filter = node_type
        .map(|text| {
            NodeType::from_str(text).map_err(|_| anyhow!("unknown node type: {text:?}"))
        })
        .transpose()?;

    let catalog = open_catalog(symbols)?;
    print_json(&catalog.search(query, limit, module, type_filter))
}
