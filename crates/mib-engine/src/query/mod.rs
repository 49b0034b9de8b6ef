//! Read-only query operations over a snapshot.
//!
//! Every function here is a pure function of the snapshot it receives;
//! concurrency is handled one level up by the catalog's snapshot swap.

pub mod details;
pub mod module_tree;
pub mod resolve;
pub mod search;
pub mod stats;
pub mod subtree;
pub mod types;

pub use details::node_details;
pub use module_tree::module_tree;
pub use resolve::{ResolveMode, resolve};
pub use search::search;
pub use stats::{module_stats, status};
pub use subtree::oid_subtree;

use crate::model::Oid;

/// Well-known top-of-tree arcs, keyed by exact prefix. Anything else
/// synthesizes an `OID-<dotted>` placeholder name.
pub(crate) const WELL_KNOWN_ARCS: &[(&[u32], &str)] = &[
    (&[1], "iso"),
    (&[1, 3], "org"),
    (&[1, 3, 6], "dod"),
    (&[1, 3, 6, 1], "internet"),
    (&[1, 3, 6, 1, 1], "directory"),
    (&[1, 3, 6, 1, 2], "mgmt"),
    (&[1, 3, 6, 1, 2, 1], "mib-2"),
    (&[1, 3, 6, 1, 3], "experimental"),
    (&[1, 3, 6, 1, 4], "private"),
    (&[1, 3, 6, 1, 4, 1], "enterprises"),
];

pub(crate) fn well_known_name(oid: &Oid) -> String {
    WELL_KNOWN_ARCS
        .iter()
        .find(|(arcs, _)| *arcs == oid.arcs())
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("OID-{oid}"))
}
