//! Dependency resolution engine: loads the immediate or transitive set of
//! modules a root module references, skipping framework assemblies and
//! tolerating references that cannot be resolved.

pub mod cache;
pub mod catalog_resolver;
pub mod graph;
pub mod host;
pub mod loader;
pub mod outcome;
pub mod report;
