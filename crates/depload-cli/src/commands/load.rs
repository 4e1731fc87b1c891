//! Handler for `depload load`.

use std::path::Path;

use miette::Result;

use depload_core::config::GlobalConfig;
use depload_ops::ops_load;

use super::require_catalog;

pub fn exec(root: &str, catalog: &Path, config: &GlobalConfig) -> Result<()> {
    require_catalog(catalog)?;
    ops_load::load(catalog, root, config)?;
    Ok(())
}
