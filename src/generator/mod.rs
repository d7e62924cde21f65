//! The generation executor.
//!
//! Walks a template's instructions strictly in declared order, copying or
//! transforming each source into the destination tree. Order matters: a
//! later instruction may rely on directories or files an earlier one
//! created. The first failure aborts the remaining instructions; nothing is
//! rolled back here, that is the caller's concern.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::answers::Answers;
use crate::error::{GantryError, Result};
use crate::template::{placeholder, Instruction, Template};

/// Outcome of one executed instruction, for progress reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub dst: PathBuf,
    pub transformed: bool,
}

/// Execute all of the template's instructions against `dest_root`.
///
/// Returns the destinations written, in execution order.
pub fn generate(
    template: &Template,
    answers: &Answers,
    dest_root: &Path,
) -> Result<Vec<GeneratedFile>> {
    let mut written = Vec::with_capacity(template.instructions.len());
    for instruction in &template.instructions {
        apply(&template.root, instruction, answers, dest_root)?;
        written.push(GeneratedFile {
            dst: instruction.dst.clone(),
            transformed: instruction.transform,
        });
    }
    Ok(written)
}

/// Execute a single instruction.
fn apply(
    template_root: &Path,
    instruction: &Instruction,
    answers: &Answers,
    dest_root: &Path,
) -> Result<()> {
    let src = template_root.join(&instruction.src);
    let dst = dest_root.join(&instruction.dst);
    debug!(src = %src.display(), dst = %dst.display(), transform = instruction.transform, "applying instruction");

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|e| generation_error(&dst, e))?;
    }

    if instruction.transform {
        let source = fs::read_to_string(&src).map_err(|e| generation_error(&src, e))?;
        let rendered =
            placeholder::substitute(&source, answers).map_err(|message| {
                GantryError::GenerationError {
                    path: src.clone(),
                    message,
                }
            })?;
        fs::write(&dst, rendered).map_err(|e| generation_error(&dst, e))?;
    } else {
        fs::copy(&src, &dst).map_err(|e| generation_error(&src, e))?;
    }
    Ok(())
}

fn generation_error(path: &Path, source: std::io::Error) -> GantryError {
    GantryError::GenerationError {
        path: path.to_path_buf(),
        message: source.to_string(),
    }
}
