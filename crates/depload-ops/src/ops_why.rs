//! Operation: explain why a module is part of a root's dependency closure.

use std::path::Path;

use depload_core::config::GlobalConfig;

use crate::Session;

/// Print the reference chain from `root` to `target`.
///
/// Returns the chain, or `None` when `target` is not reached from `root`.
pub fn why(
    catalog: &Path,
    root: &str,
    target: &str,
    inverted: bool,
    config: &GlobalConfig,
) -> miette::Result<Option<Vec<String>>> {
    let mut session = Session::open(catalog, root, config)?;
    let report = session
        .loader
        .load_all_transitive(&mut session.host, session.root);
    let graph = report.graph(&session.host);

    let Some(path) = graph.find_path(target) else {
        println!("Module '{target}' is not loaded from {root}.");
        return Ok(None);
    };

    let chain: Vec<String> = path.iter().map(|n| n.to_string()).collect();
    if inverted {
        print!("{}", graph.print_inverted_tree(target));
    } else {
        println!("Path to {target}:");
        for (i, node) in chain.iter().enumerate() {
            let indent = "  ".repeat(i);
            println!("{indent}{node}");
        }
    }
    Ok(Some(chain))
}
