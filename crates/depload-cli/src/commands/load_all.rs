//! Handler for `depload load-all`.

use std::path::Path;

use miette::Result;

use depload_core::config::GlobalConfig;
use depload_ops::ops_load_all::{self, LoadAllOptions};

use super::require_catalog;

pub fn exec(
    root: &str,
    catalog: &Path,
    tree: bool,
    depth: Option<usize>,
    json: bool,
    config: &GlobalConfig,
) -> Result<()> {
    require_catalog(catalog)?;
    let opts = LoadAllOptions { tree, depth, json };
    ops_load_all::load_all(catalog, root, config, &opts)?;
    Ok(())
}
