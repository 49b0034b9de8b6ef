//! Bidirectional, best-effort name/number resolution.

use crate::model::{Oid, oid::join_arcs};
use crate::snapshot::MibSnapshot;
use serde::Serialize;
use strum::{Display, EnumString};
use tracing::debug;

/// Direction of a resolve call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// Dotted-numeric to symbolic
    #[default]
    Name,
    /// Symbolic to dotted-numeric
    Numeric,
}

/// Labels stripped from collaborator label paths before display.
const GENERIC_PATH_LABELS: &[&str] = &[
    "iso",
    "org",
    "dod",
    "internet",
    "mgmt",
    "mib-2",
    "private",
    "enterprises",
];

/// Resolve an identifier in the requested direction.
///
/// Resolution is diagnostic, not a total function: it never fails, and
/// input that cannot be resolved is returned unchanged.
pub fn resolve(snapshot: &MibSnapshot, identifier: &str, mode: ResolveMode) -> String {
    match mode {
        ResolveMode::Numeric => to_numeric(snapshot, identifier),
        ResolveMode::Name => to_name(snapshot, identifier),
    }
}

/// `module::name[.index]` to dotted-numeric, preserving the instance
/// suffix.
fn to_numeric(snapshot: &MibSnapshot, identifier: &str) -> String {
    let Some((module, rest)) = identifier.split_once("::") else {
        // Already numeric.
        return identifier.to_string();
    };
    if rest.contains("::") {
        debug!(identifier, "malformed symbolic identifier");
        return identifier.to_string();
    }

    let (name, instance) = match rest.rsplit_once('.') {
        Some((name, instance)) => (name, Some(instance)),
        None => (rest, None),
    };

    match snapshot.name_index.get(&format!("{module}::{name}")) {
        Some(oid) => {
            let mut numeric = oid.to_string();
            if let Some(instance) = instance {
                numeric.push('.');
                numeric.push_str(instance);
            }
            debug!(identifier, resolved = %numeric, "resolved to numeric");
            numeric
        }
        None => {
            debug!(identifier, "symbol not indexed");
            identifier.to_string()
        }
    }
}

/// Dotted-numeric to the best available symbolic form.
///
/// The longest key prefix present in the tree wins and yields
/// `module::name` with the leftover arcs as instance suffix. With no
/// tree ancestor at all, the collaborator's label path stands in, with
/// generic top-of-tree labels stripped.
fn to_name(snapshot: &MibSnapshot, identifier: &str) -> String {
    if identifier.contains("::") {
        // Already symbolic.
        return identifier.to_string();
    }
    let Ok(oid) = Oid::parse(identifier) else {
        return identifier.to_string();
    };

    for prefix_len in (1..=oid.len()).rev() {
        let prefix = oid.prefix(prefix_len);
        if let Some(node) = snapshot.node(&prefix) {
            let mut name = node.full_name();
            let suffix = &oid.arcs()[prefix_len..];
            if !suffix.is_empty() {
                name.push('.');
                name.push_str(&join_arcs(suffix));
            }
            return name;
        }
    }

    match snapshot.ancestor_label(&oid) {
        Some((labels, suffix)) => {
            let meaningful: Vec<&str> = labels
                .iter()
                .map(String::as_str)
                .filter(|label| !GENERIC_PATH_LABELS.contains(label))
                .collect();
            let shown: Vec<&str> = if meaningful.is_empty() {
                labels
                    .iter()
                    .map(String::as_str)
                    .skip(labels.len().saturating_sub(2))
                    .collect()
            } else {
                meaningful[meaningful.len().saturating_sub(2)..].to_vec()
            };
            if shown.is_empty() {
                return identifier.to_string();
            }
            let mut name = shown.join("::");
            if !suffix.is_empty() {
                name.push('.');
                name.push_str(&join_arcs(suffix));
            }
            name
        }
        None => identifier.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build_snapshot;
    use crate::ingest::{AncestorEntry, ModuleSymbols, SymbolRecord, SymbolSet};

    fn symbol(arcs: &[u32], name: &str) -> SymbolRecord {
        SymbolRecord {
            oid: Oid::from_arcs(arcs),
            name: name.to_string(),
            kind: "MibScalar".to_string(),
            syntax: None,
            access: None,
            status: None,
            description: None,
            indexes: Vec::new(),
        }
    }

    fn snapshot_with_helper() -> MibSnapshot {
        build_snapshot(SymbolSet {
            modules: vec![ModuleSymbols {
                module: "SNMPv2-MIB".to_string(),
                system: true,
                symbols: vec![
                    symbol(&[1, 3, 6, 1, 2, 1, 1, 1], "sysDescr"),
                    symbol(&[1, 3, 6, 1, 2, 1, 1, 3], "sysUpTime"),
                ],
            }],
            failures: Vec::new(),
            ancestors: vec![AncestorEntry {
                oid: Oid::from_arcs(&[1, 3, 6, 1, 4, 1]),
                labels: vec![
                    "iso".to_string(),
                    "org".to_string(),
                    "dod".to_string(),
                    "internet".to_string(),
                    "private".to_string(),
                    "enterprises".to_string(),
                ],
            }],
        })
    }

    #[test]
    fn test_numeric_mode_resolves_symbol_with_suffix() {
        let snapshot = snapshot_with_helper();
        assert_eq!(
            resolve(&snapshot, "SNMPv2-MIB::sysUpTime.0", ResolveMode::Numeric),
            "1.3.6.1.2.1.1.3.0"
        );
        assert_eq!(
            resolve(&snapshot, "SNMPv2-MIB::sysDescr", ResolveMode::Numeric),
            "1.3.6.1.2.1.1.1"
        );
    }

    #[test]
    fn test_numeric_mode_echoes_unresolvable_input() {
        let snapshot = snapshot_with_helper();
        assert_eq!(
            resolve(&snapshot, "NO-MIB::nothing.0", ResolveMode::Numeric),
            "NO-MIB::nothing.0"
        );
        assert_eq!(
            resolve(&snapshot, "1.3.6.1.2.1.1.1.0", ResolveMode::Numeric),
            "1.3.6.1.2.1.1.1.0"
        );
        assert_eq!(
            resolve(&snapshot, "A::b::c", ResolveMode::Numeric),
            "A::b::c"
        );
    }

    #[test]
    fn test_name_mode_prefers_exact_symbol_match() {
        let snapshot = snapshot_with_helper();
        assert_eq!(
            resolve(&snapshot, "1.3.6.1.2.1.1.3", ResolveMode::Name),
            "SNMPv2-MIB::sysUpTime"
        );
        assert_eq!(
            resolve(&snapshot, "1.3.6.1.2.1.1.3.0", ResolveMode::Name),
            "SNMPv2-MIB::sysUpTime.0"
        );
    }

    #[test]
    fn test_name_mode_falls_back_to_label_path() {
        let snapshot = snapshot_with_helper();
        // No tree ancestor covers the private enterprise arc; the
        // collaborator path applies. Every label on it is generic, so
        // the last two stand in, with the unresolved arcs appended.
        assert_eq!(
            resolve(&snapshot, "1.3.6.1.4.1.9.9.1", ResolveMode::Name),
            "private::enterprises.9.9.1"
        );
    }

    #[test]
    fn test_name_mode_keeps_meaningful_labels() {
        let mut snapshot = snapshot_with_helper();
        snapshot.ancestors.push(crate::ingest::AncestorEntry {
            oid: Oid::from_arcs(&[1, 3, 6, 1, 4, 1, 9]),
            labels: vec![
                "iso".to_string(),
                "org".to_string(),
                "dod".to_string(),
                "internet".to_string(),
                "private".to_string(),
                "enterprises".to_string(),
                "cisco".to_string(),
            ],
        });

        // Longest helper prefix wins; only the meaningful tail is shown.
        assert_eq!(
            resolve(&snapshot, "1.3.6.1.4.1.9.9.1", ResolveMode::Name),
            "cisco.9.1"
        );
    }

    #[test]
    fn test_name_mode_echoes_unresolvable_input() {
        let snapshot = snapshot_with_helper();
        assert_eq!(resolve(&snapshot, "2.99.1", ResolveMode::Name), "2.99.1");
        assert_eq!(
            resolve(&snapshot, "not-an-oid", ResolveMode::Name),
            "not-an-oid"
        );
        assert_eq!(
            resolve(&snapshot, "ALREADY::symbolic", ResolveMode::Name),
            "ALREADY::symbolic"
        );
    }

    #[test]
    fn test_mode_parses_from_text() {
        use std::str::FromStr;
        assert_eq!(ResolveMode::from_str("name").unwrap(), ResolveMode::Name);
        assert_eq!(
            ResolveMode::from_str("NUMERIC").unwrap(),
            ResolveMode::Numeric
        );
    }
}
