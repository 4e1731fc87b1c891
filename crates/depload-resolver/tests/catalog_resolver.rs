use depload_core::catalog::Catalog;
use depload_core::config::VersionPolicy;
use depload_core::framework::KnownFrameworkClassifier;
use depload_resolver::catalog_resolver::CatalogResolver;
use depload_resolver::host::ReferenceEnumerator;
use depload_resolver::loader::DependencyLoader;

const WORKSPACE: &str = r#"
[[assembly]]
name = "App"
version = "1.0.0.0"
references = [
    "mscorlib, Version=4.0.0.0",
    "Core, Version=2.0.0.0",
    "Plugins, Version=1.0.0.0",
]

[[assembly]]
name = "mscorlib"
version = "4.0.0.0"

[[assembly]]
name = "Core"
version = "2.1.0.0"
references = ["Util, Version=1.0.0.0", "System.Runtime, Version=4.2.0.0"]

[[assembly]]
name = "Util"
version = "1.0.0.0"
references = ["Core, Version=2.0.0.0"]

[[assembly]]
name = "Plugins"
version = "1.0.0.0"
references = ["Util, Version=1.0.0.0", "Missing, Version=1.0.0.0"]
"#;

fn resolver(policy: VersionPolicy) -> CatalogResolver {
    CatalogResolver::new(Catalog::parse(WORKSPACE).unwrap(), policy)
}

fn loader() -> DependencyLoader<KnownFrameworkClassifier> {
    DependencyLoader::new(KnownFrameworkClassifier::new())
}

#[test]
fn load_all_walks_catalog_graph() {
    let mut host = resolver(VersionPolicy::Minimum);
    let root = host.load_root("App").unwrap();

    let report = loader().load_all_transitive(&mut host, root);
    let visited: Vec<String> = report.modules().iter().map(|&m| host.describe(m)).collect();
    assert_eq!(
        visited,
        vec!["App 1.0.0.0", "Core 2.1.0.0", "Util 1.0.0.0", "Plugins 1.0.0.0"]
    );
    assert_eq!(report.framework_count(), 2);
    assert_eq!(report.unresolved().count(), 1);
    // mscorlib is in the catalog but never loaded
    assert_eq!(host.loaded(), 4);
}

#[test]
fn exact_policy_leaves_version_mismatch_unresolved() {
    let mut host = resolver(VersionPolicy::Exact);
    let root = host.load_root("App").unwrap();

    let report = loader().load_all_transitive(&mut host, root);
    let visited: Vec<String> = report.modules().iter().map(|&m| host.describe(m)).collect();
    assert_eq!(visited, vec!["App 1.0.0.0", "Plugins 1.0.0.0", "Util 1.0.0.0"]);
}

#[test]
fn rerun_reuses_loaded_modules() {
    let mut host = resolver(VersionPolicy::Minimum);
    let root = host.load_root("App").unwrap();
    let loader = loader();

    let first = loader.load_all_transitive(&mut host, root);
    let loaded = host.loaded();
    let second = loader.load_all_transitive(&mut host, root);

    assert_eq!(first.modules(), second.modules());
    assert_eq!(host.loaded(), loaded);
    assert_eq!(first.newly_loaded(), 3);
    assert_eq!(second.newly_loaded(), 0);
}

#[test]
fn load_immediate_loads_framework_references_too() {
    let mut host = resolver(VersionPolicy::Minimum);
    let root = host.load_root("App").unwrap();

    let outcomes = loader().load_immediate(&mut host, root);
    assert_eq!(outcomes.len(), 3);
    assert_eq!(host.resolve_calls(), 3);
    assert!(outcomes.iter().all(|o| o.outcome.module().is_some()));
    assert!(host.store().find("mscorlib", outcomes[0].reference.version).is_some());
    // one level only: Util is not loaded
    assert!(host.store().iter().all(|m| m.name != "Util"));
}

#[test]
fn unknown_root_is_an_error() {
    let mut host = resolver(VersionPolicy::Minimum);
    let err = host.load_root("Nope").unwrap_err();
    assert!(err.to_string().contains("Module not found"), "got: {err}");
}

#[test]
fn why_path_through_report_graph() {
    let mut host = resolver(VersionPolicy::Minimum);
    let root = host.load_root("App").unwrap();
    let report = loader().load_all_transitive(&mut host, root);
    let graph = report.graph(&host);

    let path = graph.find_path("Util").unwrap();
    let labels: Vec<String> = path.iter().map(|n| n.to_string()).collect();
    assert_eq!(labels, vec!["App 1.0.0.0", "Core 2.1.0.0", "Util 1.0.0.0"]);
}

#[test]
fn why_path_is_shortest_not_first_found() {
    let catalog = Catalog::parse(
        r#"
[[assembly]]
name = "App"
references = ["A", "T"]

[[assembly]]
name = "A"
references = ["B"]

[[assembly]]
name = "B"
references = ["T"]

[[assembly]]
name = "T"
"#,
    )
    .unwrap();
    let mut host = CatalogResolver::new(catalog, VersionPolicy::Minimum);
    let root = host.load_root("App").unwrap();
    let report = loader().load_all_transitive(&mut host, root);
    let graph = report.graph(&host);

    let path = graph.find_path("T").unwrap();
    let labels: Vec<&str> = path.iter().map(|n| n.simple_name()).collect();
    assert_eq!(labels, vec!["App", "T"]);
}
