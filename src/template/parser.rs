//! Template description parsing.
//!
//! The description document is YAML. Question entries and operation entries
//! are externally tagged, so the entry's tag picks its kind:
//!
//! ```yaml
//! model: Shop
//! questions:
//!   - plain:
//!       name: entity
//!       caption: Entity name
//!   - options:
//!       name: database
//!       caption: Database
//!       option: [MySQL, PostgreSQL]
//! operations:
//!   - copy:
//!       src: static/logo.png
//!       dst: assets/logo.png
//!   - transform:
//!       src: src/Main.tpl
//!       dst: src/Main.rs
//! ```
//!
//! An unrecognized tag or field anywhere fails the whole parse; no partial
//! template is ever produced.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{GantryError, Result};
use crate::template::{
    Instruction, Template, TemplateLocator, TemplateQuestion, DESCRIPTION_FILE,
};

/// Resolve `id` through the locator and parse its description document.
///
/// A missing directory or description document is fatal, as is any
/// malformed content.
pub fn load_template(locator: &dyn TemplateLocator, id: &str) -> Result<Template> {
    let root = locator
        .locate(id)
        .ok_or_else(|| GantryError::UnknownTemplate {
            name: id.to_string(),
        })?;
    parse_template_dir(&root)
}

/// Parse the description document found in `root`.
pub fn parse_template_dir(root: &Path) -> Result<Template> {
    let description = root.join(DESCRIPTION_FILE);
    if !description.is_file() {
        return Err(GantryError::TemplateNotFound { path: description });
    }

    let content = std::fs::read_to_string(&description)?;
    let doc: DescriptionDoc =
        serde_yaml::from_str(&content).map_err(|e| GantryError::TemplateParseError {
            path: description.clone(),
            message: e.to_string(),
        })?;

    debug!(
        model = %doc.model,
        questions = doc.questions.len(),
        operations = doc.operations.len(),
        "parsed template description"
    );

    Ok(Template {
        root: root.to_path_buf(),
        model: doc.model,
        questions: doc.questions.into_iter().map(Into::into).collect(),
        instructions: doc.operations.into_iter().map(Into::into).collect(),
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DescriptionDoc {
    /// Model name label.
    model: String,
    #[serde(default)]
    questions: Vec<QuestionEntry>,
    #[serde(default)]
    operations: Vec<OperationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase", deny_unknown_fields)]
enum QuestionEntry {
    Plain {
        name: String,
        caption: String,
    },
    Options {
        name: String,
        caption: String,
        option: Vec<String>,
    },
}

impl From<QuestionEntry> for TemplateQuestion {
    fn from(entry: QuestionEntry) -> Self {
        match entry {
            QuestionEntry::Plain { name, caption } => Self::Plain { name, caption },
            QuestionEntry::Options {
                name,
                caption,
                option,
            } => Self::Options {
                name,
                caption,
                options: option,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase", deny_unknown_fields)]
enum OperationEntry {
    Transform { src: PathBuf, dst: PathBuf },
    Copy { src: PathBuf, dst: PathBuf },
}

impl From<OperationEntry> for Instruction {
    fn from(entry: OperationEntry) -> Self {
        match entry {
            OperationEntry::Transform { src, dst } => Self {
                src,
                dst,
                transform: true,
            },
            OperationEntry::Copy { src, dst } => Self {
                src,
                dst,
                transform: false,
            },
        }
    }
}
