//! Handler for `depload classify`.

use miette::Result;

use depload_core::config::GlobalConfig;
use depload_ops::ops_classify;

pub fn exec(name: &str, context: Option<&str>, config: &GlobalConfig) -> Result<()> {
    ops_classify::classify(name, context, config)?;
    Ok(())
}
