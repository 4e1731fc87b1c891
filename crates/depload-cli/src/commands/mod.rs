//! Command dispatch and handler modules.

mod classify;
mod load;
mod load_all;
mod why;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = depload_ops::load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Load { root, catalog } => load::exec(&root, &catalog, &config),
        Command::LoadAll {
            root,
            catalog,
            tree,
            depth,
            json,
        } => load_all::exec(&root, &catalog, tree, depth, json, &config),
        Command::Why {
            root,
            target,
            catalog,
            inverted,
        } => why::exec(&root, &target, &catalog, inverted, &config),
        Command::Classify { name, context } => classify::exec(&name, context.as_deref(), &config),
    }
}

/// Fail early with a readable message when the catalog file is missing.
fn require_catalog(catalog: &std::path::Path) -> Result<()> {
    if catalog.is_file() {
        return Ok(());
    }
    Err(depload_util::errors::DeploadError::Catalog {
        message: format!("Could not find catalog {}", catalog.display()),
    }
    .into())
}
