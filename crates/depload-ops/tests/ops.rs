use std::fs;
use std::path::PathBuf;

use depload_core::config::{GlobalConfig, VersionPolicy};
use depload_ops::ops_load_all::{self, LoadAllOptions};
use depload_ops::{load_config, ops_classify, ops_load, ops_why};
use tempfile::TempDir;

const CATALOG: &str = r#"
[[assembly]]
name = "App"
version = "1.0.0.0"
references = ["mscorlib, Version=4.0.0.0", "Lib, Version=1.0.0.0", "Ghost, Version=1.0.0.0"]

[[assembly]]
name = "Lib"
version = "1.0.0.0"
references = ["Xamarin.Forms, Version=5.0.0.0", "App, Version=1.0.0.0"]

[[assembly]]
name = "Xamarin.Forms"
version = "5.0.0.0"
"#;

fn write_catalog(tmp: &TempDir) -> PathBuf {
    let path = tmp.path().join("catalog.toml");
    fs::write(&path, CATALOG).unwrap();
    path
}

#[test]
fn load_all_summary_lists_modules_and_skips() {
    let tmp = TempDir::new().unwrap();
    let catalog = write_catalog(&tmp);

    let summary = ops_load_all::load_all(
        &catalog,
        "App",
        &GlobalConfig::default(),
        &LoadAllOptions::default(),
    )
    .unwrap();

    assert_eq!(summary.root, "App 1.0.0.0");
    assert_eq!(
        summary.modules,
        vec!["App 1.0.0.0", "Lib 1.0.0.0", "Xamarin.Forms 5.0.0.0"]
    );
    assert_eq!(summary.framework, vec!["mscorlib, Version=4.0.0.0"]);
    assert_eq!(summary.newly_loaded, 2);
    assert_eq!(summary.unresolved.len(), 1);
    assert_eq!(summary.unresolved[0].requested_by, "App 1.0.0.0");
}

#[test]
fn load_all_honours_configured_patterns() {
    let tmp = TempDir::new().unwrap();
    let catalog = write_catalog(&tmp);
    let mut config = GlobalConfig::default();
    config.framework.patterns.push("Xamarin.*".to_string());

    let summary =
        ops_load_all::load_all(&catalog, "App", &config, &LoadAllOptions::default()).unwrap();
    assert_eq!(summary.modules, vec!["App 1.0.0.0", "Lib 1.0.0.0"]);
    assert_eq!(summary.framework.len(), 2);
}

#[test]
fn load_all_json_output() {
    let tmp = TempDir::new().unwrap();
    let catalog = write_catalog(&tmp);
    let opts = LoadAllOptions {
        json: true,
        ..LoadAllOptions::default()
    };

    let summary = ops_load_all::load_all(&catalog, "App", &GlobalConfig::default(), &opts).unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["modules"].as_array().unwrap().len(), 3);
    assert!(json["unresolved"][0].get("error").is_none());
}

#[test]
fn load_immediate_resolves_framework_references() {
    let tmp = TempDir::new().unwrap();
    let catalog = write_catalog(&tmp);
    let mut config = GlobalConfig::default();
    config.resolver.version_policy = VersionPolicy::Exact;

    let outcomes = ops_load::load(&catalog, "App", &config).unwrap();
    assert_eq!(outcomes.len(), 3);
    // mscorlib is not in the catalog, so it stays unresolved even though it was attempted
    assert!(outcomes[0].outcome.is_unresolved());
    assert!(outcomes[1].outcome.module().is_some());
    assert!(outcomes[2].outcome.is_unresolved());
}

#[test]
fn why_reports_chain() {
    let tmp = TempDir::new().unwrap();
    let catalog = write_catalog(&tmp);

    let chain = ops_why::why(&catalog, "App", "Xamarin.Forms", false, &GlobalConfig::default())
        .unwrap()
        .unwrap();
    assert_eq!(
        chain,
        vec!["App 1.0.0.0", "Lib 1.0.0.0", "Xamarin.Forms 5.0.0.0"]
    );
}

#[test]
fn why_inverted_on_reached_module_returns_chain() {
    let tmp = TempDir::new().unwrap();
    let catalog = write_catalog(&tmp);

    let chain = ops_why::why(&catalog, "App", "xamarin.forms", true, &GlobalConfig::default())
        .unwrap()
        .unwrap();
    assert_eq!(chain.last().map(String::as_str), Some("Xamarin.Forms 5.0.0.0"));
    assert_eq!(chain.len(), 3);
}

#[test]
fn why_unreached_module_is_none() {
    let tmp = TempDir::new().unwrap();
    let catalog = write_catalog(&tmp);

    let chain = ops_why::why(&catalog, "Lib", "Ghost", true, &GlobalConfig::default()).unwrap();
    assert!(chain.is_none());
}

#[test]
fn unknown_root_fails() {
    let tmp = TempDir::new().unwrap();
    let catalog = write_catalog(&tmp);
    let err = ops_load::load(&catalog, "Nope", &GlobalConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Module not found"), "got: {err}");
}

#[test]
fn classify_uses_builtin_list() {
    assert!(ops_classify::classify("System.Xml", None, &GlobalConfig::default()).unwrap());
    assert!(!ops_classify::classify("Lib", None, &GlobalConfig::default()).unwrap());
}

#[test]
fn load_config_reads_explicit_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[resolver]\nversion-policy = \"exact\"\n").unwrap();
    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.resolver.version_policy, VersionPolicy::Exact);
}

#[test]
fn load_config_explicit_missing_path_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_config(Some(&tmp.path().join("cofnig.toml"))).unwrap_err();
    assert!(err.to_string().contains("Config error"), "got: {err}");
}

#[test]
fn load_config_explicit_invalid_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "not = [valid").unwrap();
    assert!(load_config(Some(&path)).is_err());
}
