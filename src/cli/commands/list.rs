//! The `list` command: show template identifiers the locator can resolve.

use std::path::Path;

use crate::error::Result;
use crate::template::{DirLocator, TemplateLocator};
use crate::ui::Output;

pub fn run(project_root: &Path, output: &Output) -> Result<()> {
    let locator = DirLocator::discover(project_root);
    let ids = locator.list();

    if ids.is_empty() {
        output.message("No templates found");
        return Ok(());
    }

    output.header("Available templates:");
    for id in ids {
        output.message(&format!("  {id}"));
    }
    Ok(())
}
