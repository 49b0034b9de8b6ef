use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mibscope",
    version,
    about = "SNMP MIB browser and walk telemetry CLI",
    long_about = "Browses compiled MIB symbol dumps and extracts structured telemetry from SNMP walk output."
)]
pub struct MibscopeCli {
    /// Path to the compiled symbol dump (JSON)
    #[arg(long, global = true, default_value = "symbols.json")]
    pub symbols: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl MibscopeCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the OID tree organized by module
    Tree {
        /// Only show this module
        #[arg(long)]
        module: Option<String>,
    },
    /// Expand the tree below an OID
    Subtree {
        /// Dotted-decimal anchor, e.g. 1.3.6.1.2.1
        oid: String,

        /// Expansion depth (1-5)
        #[arg(short, long, default_value_t = 1)]
        depth: usize,

        /// Exclude nodes outside this module
        #[arg(long)]
        module: Option<String>,
    },
    /// Show one node with its siblings and breadcrumb
    Details {
        /// Dotted-decimal OID or Module::name
        identifier: String,
    },
    /// Search nodes by name, keyword or OID fragment
    Search {
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 100)]
        limit: usize,

        /// Restrict results to this module
        #[arg(long)]
        module: Option<String>,

        /// Restrict results to one node type
        /// (scalar, table, table-column, notification, module, other)
        #[arg(long = "type")]
        node_type: Option<String>,
    },
    /// Translate between numeric and symbolic identifiers
    Resolve {
        identifier: String,

        /// Target form: name or numeric
        #[arg(long, default_value = "name")]
        mode: String,
    },
    /// Per-module object statistics
    Stats,
    /// Ingestion status: loaded and failed modules
    Status,
    /// Parse SNMP walk output into metric samples
    ParseWalk {
        /// Walk output file; read from stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Host the walk was taken from
        #[arg(long)]
        host: String,

        /// Root identifier the walk started at
        #[arg(long)]
        root: String,
    },
}
