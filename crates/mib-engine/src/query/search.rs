//! Keyword, name and numeric search over the indices.

use crate::model::{NodeType, Oid, OidNode};
use crate::query::types::{NodeView, SearchResults};
use crate::snapshot::MibSnapshot;
use rustc_hash::FxHashSet;

/// Search the snapshot for `query`.
///
/// Candidates are the union of an exact case-sensitive full-name hit,
/// every index keyword containing the lowercased query, and, when the
/// query is entirely digits and dots, every dotted oid containing it.
/// Results are sorted before truncation (exact case-insensitive name
/// matches first, then alphabetically, oid as tiebreaker) so a smaller
/// limit always yields a prefix of a larger one.
pub fn search(
    snapshot: &MibSnapshot,
    query: &str,
    limit: usize,
    module_filter: Option<&str>,
    type_filter: Option<NodeType>,
) -> SearchResults {
    let query_lower = query.to_lowercase();
    let mut candidates: FxHashSet<Oid> = FxHashSet::default();

    if let Some(oid) = snapshot.name_index.get(query) {
        candidates.insert(oid.clone());
    }

    for (keyword, members) in &snapshot.search_index {
        if keyword.contains(&query_lower) {
            candidates.extend(members.iter().cloned());
        }
    }

    let numeric_query = !query.is_empty()
        && query.chars().all(|c| c.is_ascii_digit() || c == '.');
    if numeric_query {
        for (dotted, oid) in &snapshot.oid_index {
            if dotted.contains(query) {
                candidates.insert(oid.clone());
            }
        }
    }

    let mut matches: Vec<&OidNode> = candidates
        .iter()
        .filter_map(|oid| snapshot.node(oid))
        .filter(|node| module_filter.is_none_or(|filter| node.module == filter))
        .filter(|node| type_filter.is_none_or(|filter| node.node_type == filter))
        .collect();

    matches.sort_by(|a, b| {
        // Exact case-insensitive name matches first (false < true).
        let a_miss = a.name.to_lowercase() != query_lower;
        let b_miss = b.name.to_lowercase() != query_lower;
        a_miss
            .cmp(&b_miss)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.oid.cmp(&b.oid))
    });
    matches.truncate(limit);

    SearchResults {
        query: query.to_string(),
        count: matches.len(),
        results: matches.into_iter().map(NodeView::from).collect(),
    }
}
