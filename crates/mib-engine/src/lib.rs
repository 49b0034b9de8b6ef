pub mod build;
pub mod catalog;
pub mod error;
pub mod ingest;
pub mod model;
pub mod query;
pub mod snapshot;

pub use catalog::MibCatalog;
pub use error::{QueryError, Result};
pub use ingest::{ModuleFailure, ModuleSymbols, SymbolProvider, SymbolRecord, SymbolSet};
pub use model::{NodeType, Oid, OidNode};
pub use snapshot::MibSnapshot;
