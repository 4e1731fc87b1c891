//! Framework assembly classification.
//!
//! A framework assembly is part of the always-available base platform. The
//! transitive loader never resolves or recurses into one.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use depload_util::errors::DeploadError;

use crate::config::FrameworkConfig;

/// Built-in platform assemblies, lowercase.
const BUILTIN_NAMES: &[&str] = &[
    "mscorlib",
    "netstandard",
    "system",
    "windowsbase",
    "presentationcore",
    "presentationframework",
    "microsoft.csharp",
    "microsoft.visualbasic",
    "microsoft.win32.primitives",
    "microsoft.win32.registry",
    "accessibility",
];

/// Built-in platform name prefixes, lowercase.
const BUILTIN_PREFIXES: &[&str] = &["system."];

/// Decides whether an assembly belongs to the base platform.
///
/// `context` is the file path of the assembly when known, otherwise empty.
/// Implementations must be pure and must answer `false` for input they
/// cannot interpret.
pub trait FrameworkClassifier {
    fn is_framework_assembly(&self, context: &str, name: &str) -> bool;
}

impl<F> FrameworkClassifier for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_framework_assembly(&self, context: &str, name: &str) -> bool {
        self(context, name)
    }
}

/// Classifier backed by a built-in platform list plus user rules.
#[derive(Debug, Clone)]
pub struct KnownFrameworkClassifier {
    use_builtin: bool,
    extra_names: HashSet<String>,
    patterns: GlobSet,
    directories: Vec<PathBuf>,
}

impl Default for KnownFrameworkClassifier {
    fn default() -> Self {
        Self {
            use_builtin: true,
            extra_names: HashSet::new(),
            patterns: GlobSet::empty(),
            directories: Vec::new(),
        }
    }
}

impl KnownFrameworkClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a classifier from `[framework]` settings.
    pub fn from_config(config: &FrameworkConfig) -> miette::Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.patterns {
            let glob = GlobBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| DeploadError::Config {
                    message: format!("invalid framework pattern '{pattern}': {e}"),
                })?;
            builder.add(glob);
        }
        let patterns = builder.build().map_err(|e| DeploadError::Config {
            message: format!("invalid framework patterns: {e}"),
        })?;

        Ok(Self {
            use_builtin: config.use_builtin,
            extra_names: config
                .extra_names
                .iter()
                .map(|n| n.trim().to_ascii_lowercase())
                .collect(),
            patterns,
            directories: config.directories.clone(),
        })
    }

    fn is_builtin(lower: &str) -> bool {
        BUILTIN_NAMES.contains(&lower) || BUILTIN_PREFIXES.iter().any(|p| lower.starts_with(p))
    }

    fn in_framework_directory(&self, context: &str) -> bool {
        if context.is_empty() {
            return false;
        }
        let path = Path::new(context);
        self.directories.iter().any(|dir| path.starts_with(dir))
    }
}

/// Names the classifier refuses to interpret.
fn is_malformed(name: &str) -> bool {
    name.trim().is_empty()
        || name
            .chars()
            .any(|c| c.is_control() || c == '/' || c == '\\')
}

impl FrameworkClassifier for KnownFrameworkClassifier {
    fn is_framework_assembly(&self, context: &str, name: &str) -> bool {
        if is_malformed(name) {
            return false;
        }
        let lower = name.trim().to_ascii_lowercase();
        (self.use_builtin && Self::is_builtin(&lower))
            || self.extra_names.contains(&lower)
            || self.patterns.is_match(&lower)
            || self.in_framework_directory(context)
    }
}
