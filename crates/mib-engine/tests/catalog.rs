//! End-to-end exercises of the catalog against an in-memory provider.

use mib_engine::query::ResolveMode;
use mib_engine::{
    MibCatalog, ModuleFailure, ModuleSymbols, QueryError, SymbolProvider, SymbolRecord, SymbolSet,
};
use mib_engine::model::Oid;
use std::sync::Mutex;

/// Stands in for the MIB compiler collaborator: hands out whatever set
/// was queued last.
struct StaticProvider {
    sets: Mutex<Vec<SymbolSet>>,
}

impl StaticProvider {
    fn new(first: SymbolSet) -> Self {
        Self {
            sets: Mutex::new(vec![first]),
        }
    }

    fn with_queue(sets: Vec<SymbolSet>) -> Self {
        Self {
            sets: Mutex::new(sets),
        }
    }
}

impl SymbolProvider for StaticProvider {
    fn load(&self) -> anyhow::Result<SymbolSet> {
        let mut sets = self.sets.lock().unwrap();
        let next = if sets.len() > 1 {
            sets.remove(0)
        } else {
            sets[0].clone()
        };
        Ok(next)
    }
}

fn symbol(arcs: &[u32], name: &str, kind: &str) -> SymbolRecord {
    SymbolRecord {
        oid: Oid::from_arcs(arcs),
        name: name.to_string(),
        kind: kind.to_string(),
        syntax: Some("DisplayString".to_string()),
        access: Some("read-only".to_string()),
        status: Some("current".to_string()),
        description: None,
        indexes: Vec::new(),
    }
}

fn system_set() -> SymbolSet {
    SymbolSet {
        modules: vec![ModuleSymbols {
            module: "SNMPv2-MIB".to_string(),
            system: true,
            symbols: vec![
                symbol(&[1, 3, 6, 1, 2, 1, 1], "system", "MibIdentifier"),
                symbol(&[1, 3, 6, 1, 2, 1, 1, 1], "sysDescr", "MibScalar"),
                symbol(&[1, 3, 6, 1, 2, 1, 1, 3], "sysUpTime", "MibScalar"),
            ],
        }],
        failures: vec![ModuleFailure {
            module: "VENDOR-MIB".to_string(),
            error: "cannot locate VENDOR-TC".to_string(),
            missing_deps: true,
        }],
        ancestors: Vec::new(),
    }
}

#[test]
fn catalog_answers_all_read_operations() {
    let catalog = MibCatalog::new(Box::new(StaticProvider::new(system_set()))).unwrap();

    let tree = catalog.module_tree(None);
    assert_eq!(tree.len(), 1);
    assert!(tree[0].is_system);
    assert_eq!(tree[0].children.len(), 3);

    let subtree = catalog.oid_subtree("1.3.6.1.2.1.1", 1, None).unwrap();
    let children: Vec<&str> = subtree
        .children
        .iter()
        .map(|c| c.node.name.as_str())
        .collect();
    assert_eq!(children, vec!["sysDescr", "sysUpTime"]);

    let details = catalog.node_details("SNMPv2-MIB::sysDescr").unwrap();
    assert_eq!(details.node.oid, "1.3.6.1.2.1.1.1");
    assert_eq!(details.siblings.len(), 1);

    let found = catalog.search("sys", 10, None, None);
    assert!(found.count >= 2);

    assert_eq!(
        catalog.resolve("1.3.6.1.2.1.1.3.0", ResolveMode::Name),
        "SNMPv2-MIB::sysUpTime.0"
    );
    assert_eq!(
        catalog.resolve("SNMPv2-MIB::sysUpTime.0", ResolveMode::Numeric),
        "1.3.6.1.2.1.1.3.0"
    );

    let stats = catalog.module_stats();
    assert_eq!(stats[0].scalars, 2);

    let status = catalog.status();
    assert_eq!(status.loaded, 1);
    assert_eq!(status.failed, 1);
}

#[test]
fn instance_lookup_of_missing_node_is_not_found() {
    let catalog = MibCatalog::new(Box::new(StaticProvider::new(system_set()))).unwrap();
    assert!(matches!(
        catalog.node_details("1.3.6.1.2.1.1.3.0"),
        Err(QueryError::NotFound(_))
    ));
}

#[test]
fn rebuild_swaps_the_whole_snapshot() {
    let mut second = SymbolSet::default();
    second.modules.push(ModuleSymbols {
        module: "IF-MIB".to_string(),
        system: true,
        symbols: vec![symbol(&[1, 3, 6, 1, 2, 1, 2, 1], "ifNumber", "MibScalar")],
    });

    let provider = StaticProvider::with_queue(vec![system_set(), second]);
    let catalog = MibCatalog::new(Box::new(provider)).unwrap();

    let before = catalog.snapshot();
    assert!(catalog.node_details("1.3.6.1.2.1.1.1").is_ok());

    catalog.rebuild().unwrap();

    // A reader holding the old snapshot still sees a complete old view.
    assert!(before.node(&Oid::from_arcs(&[1, 3, 6, 1, 2, 1, 1, 1])).is_some());

    // New lookups see only the replacement.
    assert!(catalog.node_details("1.3.6.1.2.1.2.1").is_ok());
    assert!(matches!(
        catalog.node_details("1.3.6.1.2.1.1.1"),
        Err(QueryError::NotFound(_))
    ));
    assert!(catalog.status().failures.is_empty());
}

#[test]
fn search_results_are_prefix_consistent_across_limits() {
    let catalog = MibCatalog::new(Box::new(StaticProvider::new(system_set()))).unwrap();
    let wide = catalog.search("sys", 50, None, None);
    let narrow = catalog.search("sys", 1, None, None);
    assert_eq!(narrow.results[0].full_name, wide.results[0].full_name);
}
