//! Operation: report whether an assembly is treated as framework.

use depload_core::config::GlobalConfig;
use depload_core::framework::{FrameworkClassifier, KnownFrameworkClassifier};

/// Classify `name` (with an optional file path as context) and print the verdict.
pub fn classify(name: &str, context: Option<&str>, config: &GlobalConfig) -> miette::Result<bool> {
    let classifier = KnownFrameworkClassifier::from_config(&config.framework)?;
    let is_framework = classifier.is_framework_assembly(context.unwrap_or(""), name);
    if is_framework {
        println!("{name}: framework");
    } else {
        println!("{name}: not framework");
    }
    Ok(is_framework)
}
