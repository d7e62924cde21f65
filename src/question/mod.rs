//! The question model.
//!
//! This module provides:
//! - Capability traits ([`ReadInput`], [`PrintValue`], [`ValidateValue`],
//!   [`ResolveDefault`], [`RenderPrompt`]) that a variant implements
//!   selectively
//! - The three question variants: [`FreeText`], [`SingleChoice`], [`YesNo`]
//! - [`Question`], the closed tagged union the answering loop matches on
//!
//! Read converts raw user text into the variant's value type, Print renders
//! a value back as canonical text, and Validate runs only after a successful
//! Read. Read and Validate failures carry a user-facing message and re-prompt
//! the same question; they are never command failures.

pub mod default;
pub mod free_text;
pub mod single_choice;
pub mod validate;
pub mod yes_no;

pub use default::DefaultValue;
pub use free_text::FreeText;
pub use single_choice::SingleChoice;
pub use validate::{
    class_name_validator, package_name_validator, regex_validator, Validator,
};
pub use yes_no::YesNo;

use crate::answers::Answers;

/// Convert raw user text into this question's value type.
pub trait ReadInput {
    type Value;

    /// Parse raw text; failure carries a user-facing message.
    fn read(&self, raw: &str) -> Result<Self::Value, String>;
}

/// Render a typed value back as its canonical display text.
pub trait PrintValue: ReadInput {
    fn print(&self, value: &Self::Value) -> String;
}

/// Accept or reject a successfully converted value.
pub trait ValidateValue: ReadInput {
    /// Failure carries the validator-supplied message, shown verbatim.
    fn validate(&self, value: &Self::Value) -> Result<(), String>;
}

/// Resolve this question's default against the answers gathered so far.
pub trait ResolveDefault: ReadInput {
    fn resolve_default(&self, answers: &Answers) -> Option<Self::Value>;
}

/// Render the full prompt text: caption, default hint, option lines.
pub trait RenderPrompt {
    fn render_prompt(&self, answers: &Answers) -> String;
}

/// A question of one of the three kinds.
#[derive(Debug)]
pub enum Question {
    FreeText(FreeText),
    SingleChoice(SingleChoice),
    YesNo(YesNo),
}

impl Question {
    /// Unique name, the key the answer is committed under.
    pub fn name(&self) -> &str {
        match self {
            Self::FreeText(q) => q.name(),
            Self::SingleChoice(q) => q.name(),
            Self::YesNo(q) => q.name(),
        }
    }

    /// Human-readable caption.
    pub fn caption(&self) -> &str {
        match self {
            Self::FreeText(q) => q.caption(),
            Self::SingleChoice(q) => q.caption(),
            Self::YesNo(q) => q.caption(),
        }
    }

    /// Render the prompt for this question.
    pub fn render_prompt(&self, answers: &Answers) -> String {
        match self {
            Self::FreeText(q) => q.render_prompt(answers),
            Self::SingleChoice(q) => q.render_prompt(answers),
            Self::YesNo(q) => q.render_prompt(answers),
        }
    }
}

impl From<FreeText> for Question {
    fn from(q: FreeText) -> Self {
        Self::FreeText(q)
    }
}

impl From<SingleChoice> for Question {
    fn from(q: SingleChoice) -> Self {
        Self::SingleChoice(q)
    }
}

impl From<YesNo> for Question {
    fn from(q: YesNo) -> Self {
        Self::YesNo(q)
    }
}
