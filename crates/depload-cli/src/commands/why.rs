//! Handler for `depload why`.

use std::path::Path;

use miette::Result;

use depload_core::config::GlobalConfig;
use depload_ops::ops_why;

use super::require_catalog;

pub fn exec(
    root: &str,
    target: &str,
    catalog: &Path,
    inverted: bool,
    config: &GlobalConfig,
) -> Result<()> {
    require_catalog(catalog)?;
    ops_why::why(catalog, root, target, inverted, config)?;
    Ok(())
}
