//! Command-line interface and dispatch.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, GenerateArgs};

use std::path::PathBuf;

use crate::error::Result;
use crate::ui::Output;

/// Dispatch the parsed CLI to its command implementation.
pub fn dispatch(cli: &Cli, output: &Output) -> Result<()> {
    let project_root = project_root(cli);
    match &cli.command {
        Commands::Generate(args) => commands::generate::run(args, &project_root, output),
        Commands::List => commands::list::run(&project_root, output),
    }
}

fn project_root(cli: &Cli) -> PathBuf {
    cli.project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}
