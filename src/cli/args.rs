//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gantry - Template-driven project generator.
#[derive(Debug, Parser)]
#[command(name = "gantry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project from a template
    Generate(GenerateArgs),

    /// List available templates
    List,
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GenerateArgs {
    /// Template identifier
    pub template: String,

    /// Destination root (defaults to the project root)
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Pre-seed an answer as NAME=VALUE (repeatable)
    #[arg(short, long = "answer", value_name = "NAME=VALUE")]
    pub answers: Vec<String>,
}
