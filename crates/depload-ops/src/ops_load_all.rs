//! Operation: load the full transitive closure of a module's dependencies.

use std::path::Path;

use serde::Serialize;

use depload_core::config::GlobalConfig;
use depload_resolver::host::ReferenceEnumerator;
use depload_resolver::outcome::ResolvedDependency;
use depload_util::errors::DeploadError;
use depload_util::progress::{status, status_info, status_warn};

use crate::Session;

/// Options for `depload load-all`.
#[derive(Default)]
pub struct LoadAllOptions {
    /// Print the loaded modules as a tree.
    pub tree: bool,
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
    /// Print a JSON summary instead of text.
    pub json: bool,
}

/// Serializable outcome of a `load-all` run.
#[derive(Debug, Serialize)]
pub struct LoadSummary {
    pub root: String,
    /// Visited modules in first-visit order, root first.
    pub modules: Vec<String>,
    /// Modules loaded into the host by this run.
    pub newly_loaded: usize,
    /// Framework references that were skipped, deduplicated.
    pub framework: Vec<String>,
    pub unresolved: Vec<UnresolvedEntry>,
}

#[derive(Debug, Serialize)]
pub struct UnresolvedEntry {
    pub reference: String,
    pub requested_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Load every module reachable from `root` and print the result.
pub fn load_all(
    catalog: &Path,
    root: &str,
    config: &GlobalConfig,
    opts: &LoadAllOptions,
) -> miette::Result<LoadSummary> {
    let mut session = Session::open(catalog, root, config)?;
    let host = &mut session.host;
    if !opts.json {
        status("Loading", &host.describe(session.root));
    }

    let report = session.loader.load_all_transitive(host, session.root);

    let mut framework: Vec<String> = Vec::new();
    let mut unresolved = Vec::new();
    for o in &report.outcomes {
        match &o.outcome {
            ResolvedDependency::Framework => {
                let name = o.reference.to_string();
                if !framework.contains(&name) {
                    framework.push(name);
                }
            }
            ResolvedDependency::Unresolved { error } => unresolved.push(UnresolvedEntry {
                reference: o.reference.to_string(),
                requested_by: host.describe(o.requesting),
                error: error.clone(),
            }),
            ResolvedDependency::Resolved { .. } => {}
        }
    }

    let summary = LoadSummary {
        root: host.describe(report.root()),
        modules: report.modules().iter().map(|&m| host.describe(m)).collect(),
        newly_loaded: report.newly_loaded(),
        framework,
        unresolved,
    };

    if opts.json {
        let json = serde_json::to_string_pretty(&summary).map_err(|e| DeploadError::Generic {
            message: format!("Failed to serialize summary: {e}"),
        })?;
        println!("{json}");
        return Ok(summary);
    }

    if opts.tree {
        print!("{}", report.graph(&*host).print_tree(opts.depth));
    } else {
        for module in &summary.modules {
            println!("{module}");
        }
    }

    if !summary.framework.is_empty() {
        status_info(
            "Skipped",
            &format!("{} framework reference(s)", summary.framework.len()),
        );
    }
    for entry in &summary.unresolved {
        status_warn(
            "Unresolved",
            &format!("{} (from {})", entry.reference, entry.requested_by),
        );
    }
    status(
        "Finished",
        &format!(
            "{} module(s) reached, {} newly loaded",
            summary.modules.len(),
            summary.newly_loaded
        ),
    );

    Ok(summary)
}
