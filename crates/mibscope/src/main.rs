mod cli;
mod commands;
mod provider;

use crate::cli::{Commands, MibscopeCli};
use anyhow::Result;
use logging::LogMode;

fn main() -> Result<()> {
    let cli = MibscopeCli::parse_args();
    logging::init(LogMode::Cli, cli.verbose)?;

    match &cli.command {
        Commands::Tree { module } => commands::tree::run(&cli.symbols, module.as_deref()),
        Commands::Subtree { oid, depth, module } => {
            commands::subtree::run(&cli.symbols, oid, *depth, module.as_deref())
        }
        Commands::Details { identifier } => commands::details::run(&cli.symbols, identifier),
        Commands::Search {
            query,
            limit,
            module,
            node_type,
        } => commands::search::run(
            &cli.symbols,
            query,
            *limit,
            module.as_deref(),
            node_type.as_deref(),
        ),
        Commands::Resolve { identifier, mode } => {
            commands::resolve::run(&cli.symbols, identifier, mode)
        }
        Commands::Stats => commands::stats::run(&cli.symbols),
        Commands::Status => commands::status::run(&cli.symbols),
        Commands::ParseWalk { input, host, root } => {
            commands::walk::run(input.as_deref(), host, root)
        }
    }
}
