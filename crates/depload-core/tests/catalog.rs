use std::fs;

use depload_core::catalog::Catalog;
use depload_core::reference::AssemblyVersion;
use tempfile::TempDir;

const SAMPLE: &str = r#"
[[assembly]]
name = "App"
version = "1.0.0.0"
references = ["Lib, Version=1.0.0.0", "mscorlib, Version=4.0.0.0"]

[[assembly]]
name = "Lib"
version = "1.0.0.0"

[[assembly]]
name = "Lib"
version = "2.0.0.0"
references = ["App"]
"#;

#[test]
fn catalog_parse_entries() {
    let catalog = Catalog::parse(SAMPLE).unwrap();
    assert_eq!(catalog.len(), 3);
    let app = &catalog.assemblies[0];
    assert_eq!(app.references.len(), 2);
    assert_eq!(app.references[0].name, "Lib");
}

#[test]
fn catalog_empty_is_valid() {
    let catalog = Catalog::parse("").unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn catalog_rejects_duplicates() {
    let toml = r#"
[[assembly]]
name = "Lib"
version = "1.0"

[[assembly]]
name = "lib"
version = "1.0.0.0"
"#;
    let err = Catalog::parse(toml).unwrap_err();
    assert!(err.to_string().contains("duplicate"), "got: {err}");
}

#[test]
fn catalog_rejects_bad_reference() {
    let toml = r#"
[[assembly]]
name = "App"
references = ["App, Version=x"]
"#;
    assert!(Catalog::parse(toml).is_err());
}

#[test]
fn catalog_candidates_case_insensitive() {
    let catalog = Catalog::parse(SAMPLE).unwrap();
    assert_eq!(catalog.candidates("lib").len(), 2);
    assert_eq!(catalog.candidates("missing").len(), 0);
}

#[test]
fn catalog_find_root_prefers_highest_version() {
    let catalog = Catalog::parse(SAMPLE).unwrap();
    let entry = catalog.find_root("Lib").unwrap();
    assert_eq!(entry.version, Some(AssemblyVersion::new(2, 0, 0, 0)));
}

#[test]
fn catalog_find_root_exact_version() {
    let catalog = Catalog::parse(SAMPLE).unwrap();
    let entry = catalog.find_root("Lib, Version=1.0.0.0").unwrap();
    assert_eq!(entry.version, Some(AssemblyVersion::new(1, 0, 0, 0)));
}

#[test]
fn catalog_find_root_missing() {
    let catalog = Catalog::parse(SAMPLE).unwrap();
    let err = catalog.find_root("Nope").unwrap_err();
    assert!(err.to_string().contains("Module not found"), "got: {err}");
}

#[test]
fn catalog_from_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalog.toml");
    fs::write(&path, SAMPLE).unwrap();
    let catalog = Catalog::from_path(&path).unwrap();
    assert_eq!(catalog.len(), 3);
}

#[test]
fn catalog_from_missing_path_fails() {
    let tmp = TempDir::new().unwrap();
    assert!(Catalog::from_path(&tmp.path().join("none.toml")).is_err());
}
