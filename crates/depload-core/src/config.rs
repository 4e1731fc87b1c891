use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use depload_util::errors::DeploadError;

/// Global user configuration loaded from `~/.depload/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub framework: FrameworkConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Framework classification rules from `[framework]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkConfig {
    /// Keep the built-in platform assembly list.
    #[serde(default = "default_use_builtin", rename = "use-builtin")]
    pub use_builtin: bool,
    /// Additional exact simple names.
    #[serde(default, rename = "extra-names")]
    pub extra_names: Vec<String>,
    /// Glob patterns matched against simple names, e.g. `"Xamarin.*"`.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Files under these directories are framework assemblies.
    #[serde(default)]
    pub directories: Vec<PathBuf>,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            use_builtin: true,
            extra_names: Vec::new(),
            patterns: Vec::new(),
            directories: Vec::new(),
        }
    }
}

fn default_use_builtin() -> bool {
    true
}

/// Catalog resolver settings from `[resolver]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default, rename = "version-policy")]
    pub version_policy: VersionPolicy,
}

/// How a versioned reference is matched against available assemblies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionPolicy {
    /// Only the exact requested version.
    Exact,
    /// The lowest available version at or above the requested one.
    #[default]
    Minimum,
    /// Ignore versions and take the highest available.
    NameOnly,
}

impl GlobalConfig {
    /// Load the global configuration from `~/.depload/config.toml`.
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        let path = Self::default_path();
        if !path.is_file() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Err(DeploadError::Config {
                message: format!("Config file {} does not exist", path.display()),
            }
            .into());
        }
        let content = std::fs::read_to_string(path).map_err(|e| DeploadError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            DeploadError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the depload data directory (`~/.depload/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".depload")
}
