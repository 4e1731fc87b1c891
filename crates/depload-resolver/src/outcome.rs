use std::fmt;

use serde::Serialize;

use depload_core::module::ModuleId;
use depload_core::reference::AssemblyReference;

/// What happened to one assembly reference during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ResolvedDependency {
    Resolved { module: ModuleId },
    /// Skipped as part of the base platform; never passed to the resolver.
    Framework,
    /// The resolver produced no module. `error` holds the resolver's failure, if any.
    Unresolved { error: Option<String> },
}

impl ResolvedDependency {
    pub fn module(&self) -> Option<ModuleId> {
        match self {
            Self::Resolved { module } => Some(*module),
            _ => None,
        }
    }

    pub fn is_framework(&self) -> bool {
        matches!(self, Self::Framework)
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved { .. })
    }
}

impl fmt::Display for ResolvedDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved { module } => write!(f, "resolved {module}"),
            Self::Framework => write!(f, "framework"),
            Self::Unresolved { error: None } => write!(f, "unresolved"),
            Self::Unresolved { error: Some(e) } => write!(f, "unresolved ({e})"),
        }
    }
}

/// A reference together with the module that declared it and its outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceOutcome {
    pub requesting: ModuleId,
    pub reference: AssemblyReference,
    pub outcome: ResolvedDependency,
}
