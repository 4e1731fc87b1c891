//! Operation: load the immediate dependencies of a module.

use std::path::Path;

use depload_core::config::GlobalConfig;
use depload_resolver::host::ReferenceEnumerator;
use depload_resolver::outcome::{ReferenceOutcome, ResolvedDependency};
use depload_util::progress::{status, status_warn};

use crate::Session;

/// Resolve each reference declared on `root` once and print the outcome.
pub fn load(
    catalog: &Path,
    root: &str,
    config: &GlobalConfig,
) -> miette::Result<Vec<ReferenceOutcome>> {
    let mut session = Session::open(catalog, root, config)?;
    status("Loading", &session.host.describe(session.root));

    let outcomes = session
        .loader
        .load_immediate(&mut session.host, session.root);

    for o in &outcomes {
        match o.outcome {
            ResolvedDependency::Resolved { module } => {
                println!("{} -> {}", o.reference, session.host.describe(module));
            }
            _ => println!("{} -> {}", o.reference, o.outcome),
        }
    }

    let unresolved = outcomes.iter().filter(|o| o.outcome.is_unresolved()).count();
    if unresolved > 0 {
        status_warn("Unresolved", &format!("{unresolved} reference(s)"));
    }
    status(
        "Finished",
        &format!("{} module(s) in working set", session.host.loaded()),
    );
    Ok(outcomes)
}
