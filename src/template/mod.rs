//! Template model and parsing.
//!
//! A template is a directory holding a `template.yml` description document
//! plus the source artifacts its instructions reference. The description
//! declares a model name, template-scoped question descriptors, and an
//! ordered list of copy/transform instructions.

pub mod locator;
pub mod parser;
pub mod placeholder;

pub use locator::{DirLocator, TemplateLocator};
pub use parser::load_template;

use std::path::PathBuf;

use crate::error::Result;
use crate::question::{FreeText, Question, SingleChoice};

/// Name of the description document inside a template directory.
pub const DESCRIPTION_FILE: &str = "template.yml";

/// A parsed template, immutable after parsing.
#[derive(Debug)]
pub struct Template {
    /// Template root directory; instruction sources are relative to it.
    pub root: PathBuf,
    /// Model name label from the description's root attribute.
    pub model: String,
    /// Template-scoped question descriptors, in document order.
    pub questions: Vec<TemplateQuestion>,
    /// Generation instructions, in document order.
    pub instructions: Vec<Instruction>,
}

/// A template-scoped question descriptor.
///
/// Simpler than the full question model: no default or validator is attached
/// at parse time; descriptors are converted into question instances to drive
/// the same answering loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateQuestion {
    /// Free-text input.
    Plain { name: String, caption: String },
    /// Single choice from ordered option labels.
    Options {
        name: String,
        caption: String,
        options: Vec<String>,
    },
}

impl TemplateQuestion {
    /// The answer key this descriptor's question commits under.
    pub fn name(&self) -> &str {
        match self {
            Self::Plain { name, .. } | Self::Options { name, .. } => name,
        }
    }

    /// Convert the descriptor into a question model instance.
    pub fn to_question(&self) -> Result<Question> {
        match self {
            Self::Plain { name, caption } => Ok(FreeText::new(name, caption).into()),
            Self::Options {
                name,
                caption,
                options,
            } => Ok(SingleChoice::new(name, caption, options.iter().cloned())?.into()),
        }
    }
}

/// One ordered generation step: copy a source artifact to a destination,
/// optionally substituting answer placeholders on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Source path, relative to the template root.
    pub src: PathBuf,
    /// Destination path, relative to the generation root.
    pub dst: PathBuf,
    /// Substitute `${name}` placeholders instead of copying bytes verbatim.
    pub transform: bool,
}
