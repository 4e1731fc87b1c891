//! Module catalog: the set of assemblies a host is able to load.
//!
//! ```toml
//! [[assembly]]
//! name = "App"
//! version = "1.0.0.0"
//! references = ["Lib, Version=1.0.0.0", "mscorlib, Version=4.0.0.0"]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use depload_util::errors::DeploadError;

use crate::reference::{AssemblyReference, AssemblyVersion};

/// Parsed catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "assembly")]
    pub assemblies: Vec<CatalogEntry>,
}

/// One loadable assembly and the references it declares.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub version: Option<AssemblyVersion>,
    #[serde(default)]
    pub references: Vec<AssemblyReference>,
}

impl CatalogEntry {
    pub fn as_reference(&self) -> AssemblyReference {
        AssemblyReference {
            name: self.name.clone(),
            version: self.version,
            culture: None,
            public_key_token: None,
        }
    }
}

impl Catalog {
    /// Load and parse a catalog file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DeploadError::Catalog {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content)
    }

    /// Parse catalog TOML and reject duplicate name/version entries.
    pub fn parse(content: &str) -> miette::Result<Self> {
        let catalog: Catalog = toml::from_str(content).map_err(|e| DeploadError::Catalog {
            message: format!("Failed to parse catalog: {e}"),
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> miette::Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.assemblies {
            if entry.name.trim().is_empty() {
                return Err(DeploadError::Catalog {
                    message: "assembly entry with empty name".to_string(),
                }
                .into());
            }
            if !seen.insert((entry.name.to_ascii_lowercase(), entry.version)) {
                return Err(DeploadError::Catalog {
                    message: format!("duplicate assembly '{}'", entry.as_reference()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// All entries with the given simple name (case-insensitive).
    pub fn candidates(&self, name: &str) -> Vec<&CatalogEntry> {
        self.assemblies
            .iter()
            .filter(|e| e.name.eq_ignore_ascii_case(name))
            .collect()
    }

    /// Select the root module for a run from a user-supplied display name.
    ///
    /// An exact version is honoured when given; otherwise the highest
    /// available version wins.
    pub fn find_root(&self, display_name: &str) -> miette::Result<&CatalogEntry> {
        let wanted: AssemblyReference = display_name.parse()?;
        self.candidates(&wanted.name)
            .into_iter()
            .filter(|e| wanted.version.is_none() || e.version == wanted.version)
            .max_by_key(|e| e.version)
            .ok_or_else(|| {
                DeploadError::ModuleNotFound {
                    name: display_name.to_string(),
                }
                .into()
            })
    }

    pub fn len(&self) -> usize {
        self.assemblies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assemblies.is_empty()
    }
}
