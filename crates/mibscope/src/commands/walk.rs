use super::print_json;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::info;
use walk_telemetry::parse_walk_output;

pub fn run(input: Option<&Path>, host: &str, root: &str) -> Result<()> {
    let content = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading walk output {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading walk output from stdin")?;
            buffer
        }
    };

    let lines: Vec<&str> = content.lines().collect();
    let samples = parse_walk_output(&lines, host, root);
    info!(
        lines = lines.len(),
        samples = samples.len(),
        host,
        "walk output parsed"
    );
    print_json(&samples)
}
