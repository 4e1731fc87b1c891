//! Shared utilities for the depload dependency loader.
//!
//! This crate provides cross-cutting concerns used by all other depload
//! crates: the unified error type and Cargo-style status output.

pub mod errors;
pub mod progress;
