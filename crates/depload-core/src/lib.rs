//! Core data types for the depload dependency loader.
//!
//! This crate defines the types the resolution engine reads: assembly
//! references and versions, the arena of loaded modules, the module catalog
//! a host can load from, framework classification, and user configuration.
//!
//! This crate is intentionally free of traversal logic; the engine lives in
//! `depload-resolver`.

pub mod catalog;
pub mod config;
pub mod framework;
pub mod module;
pub mod reference;
