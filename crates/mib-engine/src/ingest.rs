//! Ingestion-side types for the MIB compiler collaborator.
//!
//! The collaborator compiles MIB module files out of band and hands the
//! engine a flat set of symbol records per module. Optional fields are
//! normalized here, once, into explicit sentinels so nothing downstream
//! needs presence checks.

use crate::model::{NodeType, Oid, OidNode};
use serde::{Deserialize, Serialize};

/// One named object definition within a MIB module, as reported by the
/// compiler.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SymbolRecord {
    pub oid: Oid,
    pub name: String,
    /// Compiler class kind (e.g. `MibScalar`, `MibTableColumn`)
    pub kind: String,
    #[serde(default)]
    pub syntax: Option<String>,
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub indexes: Vec<String>,
}

impl SymbolRecord {
    /// Turn the raw record into an unlinked tree node, substituting
    /// empty-string sentinels for absent optional fields.
    pub fn into_node(self, module: &str) -> OidNode {
        OidNode {
            oid: self.oid,
            name: self.name,
            module: module.to_string(),
            node_type: NodeType::from_kind(&self.kind),
            syntax: self.syntax.unwrap_or_default(),
            access: self.access.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            indexes: self.indexes,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// All symbol records of one successfully compiled module.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ModuleSymbols {
    pub module: String,
    /// Pre-existing/system module, as opposed to a user-uploaded one
    #[serde(default)]
    pub system: bool,
    pub symbols: Vec<SymbolRecord>,
}

/// A module the compiler could not ingest. Failures are data, not
/// errors: they are carried in the snapshot and excluded from the tree.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ModuleFailure {
    pub module: String,
    pub error: String,
    /// The failure was an unresolved import rather than a syntax problem
    #[serde(default)]
    pub missing_deps: bool,
}

/// A best-effort `(label path, unresolved suffix)` pair for an OID the
/// tree itself cannot name, supplied by the collaborator's view of the
/// base modules.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AncestorEntry {
    pub oid: Oid,
    /// Label path from the top of the tree down to `oid`
    pub labels: Vec<String>,
}

/// Everything one compiler pass produces.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SymbolSet {
    #[serde(default)]
    pub modules: Vec<ModuleSymbols>,
    #[serde(default)]
    pub failures: Vec<ModuleFailure>,
    /// Name-resolution helper data for arcs outside the compiled modules
    #[serde(default)]
    pub ancestors: Vec<AncestorEntry>,
}

/// The MIB compiler collaborator, as seen by the engine.
///
/// `load` is the only I/O-bound step in the system; everything built
/// from its output is an in-memory snapshot.
pub trait SymbolProvider: Send + Sync {
    fn load(&self) -> anyhow::Result<SymbolSet>;
}
