//! Error types for Gantry operations.
//!
//! This module defines [`GantryError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Construction-time failures (duplicate question names, empty option lists,
//!   double validator attachment) and template parse/generation failures are
//!   `GantryError` variants and abort the enclosing command
//! - Per-question read/validate failures are *not* errors: they are the
//!   `Rejected` outcome of the answering transition and drive a re-prompt
//! - Use `anyhow::Error` (via `GantryError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Gantry operations.
#[derive(Debug, Error)]
pub enum GantryError {
    /// Two questions in the same tree share a name.
    #[error("Duplicate question name: {name}")]
    DuplicateQuestion { name: String },

    /// A question tree was finalized with no questions in it.
    #[error("Question tree is empty")]
    EmptyQuestionTree,

    /// A single-choice question was constructed with no options.
    #[error("Question '{question}' has an empty options list")]
    EmptyOptions { question: String },

    /// A second validator was attached to the same question.
    #[error("Validator already set for question '{question}'")]
    ValidatorAlreadySet { question: String },

    /// A validator pattern failed to compile.
    #[error("Invalid validator pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// An answer was committed twice under the same name.
    #[error("Answer '{name}' is already committed")]
    AnswerAlreadyCommitted { name: String },

    /// No template description document at the resolved location.
    #[error("Unable to find template description: {path}")]
    TemplateNotFound { path: PathBuf },

    /// No template directory matched the given identifier.
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// The template description document is malformed.
    #[error("Invalid template description at {path}: {message}")]
    TemplateParseError { path: PathBuf, message: String },

    /// A generation instruction failed; remaining instructions are aborted.
    #[error("Generation failed for '{path}': {message}")]
    GenerationError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Gantry operations.
pub type Result<T> = std::result::Result<T, GantryError>;
