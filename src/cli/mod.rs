//! CLI Module
//!
//! Command-line interface for the Cuebank identifier toolkit.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::codegen::ArtifactFormat;

/// Cuebank - soundbank identifier toolkit
#[derive(Parser, Debug)]
#[command(name = "cuebank")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Artifact flavor selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rust constants module
    Rust,
    /// Middleware C++ header
    Header,
}

impl From<OutputFormat> for ArtifactFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Rust => ArtifactFormat::Rust,
            OutputFormat::Header => ArtifactFormat::Header,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the ID for an authored name
    #[command(name = "hash")]
    Hash {
        /// The authored name (hashed case-insensitively)
        name: String,
    },

    /// Validate a manifest's structural invariants
    #[command(name = "check")]
    Check {
        /// Path to the manifest JSON
        manifest: PathBuf,
    },

    /// Render a manifest into a constants artifact
    #[command(name = "generate")]
    Generate {
        /// Path to the manifest JSON
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output file
        #[arg(short, long)]
        out: PathBuf,

        /// Artifact flavor
        #[arg(short, long, value_enum, default_value = "rust")]
        format: OutputFormat,

        /// Verify the artifact is current instead of writing it
        #[arg(long)]
        check: bool,
    },

    /// List the bindings in a manifest
    #[command(name = "list")]
    List {
        /// Path to the manifest JSON
        manifest: PathBuf,

        /// Restrict to one category (events, banks, busses, ...)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Compare two exports
    #[command(name = "diff")]
    Diff {
        /// The older manifest
        old: PathBuf,

        /// The newer manifest
        new: PathBuf,
    },

    /// Walk a soundbank directory and report manifests and stale artifacts
    #[command(name = "scan")]
    Scan {
        /// Directory to walk
        dir: PathBuf,
    },
}
