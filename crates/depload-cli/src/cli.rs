//! CLI argument definitions for depload.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "depload",
    version,
    about = "Load the dependencies of a module into the working set",
    long_about = "depload resolves the assembly references of a module against a catalog, \
                  either one level deep or transitively, skipping framework assemblies."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (defaults to ~/.depload/config.toml)
    #[arg(long, global = true, env = "DEPLOAD_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the immediate dependencies of a module
    Load {
        /// Root module display name, e.g. "App" or "App, Version=1.0.0.0"
        root: String,
        /// Module catalog file
        #[arg(short, long, default_value = "depload.toml")]
        catalog: PathBuf,
    },

    /// Load all transitive dependencies of a module
    LoadAll {
        /// Root module display name
        root: String,
        /// Module catalog file
        #[arg(short, long, default_value = "depload.toml")]
        catalog: PathBuf,
        /// Print the loaded modules as a tree
        #[arg(long)]
        tree: bool,
        /// Maximum tree depth
        #[arg(long, requires = "tree")]
        depth: Option<usize>,
        /// Print a JSON summary
        #[arg(long, conflicts_with = "tree")]
        json: bool,
    },

    /// Show why a module is loaded from a root
    Why {
        /// Root module display name
        root: String,
        /// Module to explain
        target: String,
        /// Module catalog file
        #[arg(short, long, default_value = "depload.toml")]
        catalog: PathBuf,
        /// Show every module that references the target instead of one path
        #[arg(long)]
        inverted: bool,
    },

    /// Check whether an assembly counts as a framework assembly
    Classify {
        /// Assembly simple name
        name: String,
        /// File path of the assembly, if known
        #[arg(long)]
        context: Option<String>,
    },
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}
