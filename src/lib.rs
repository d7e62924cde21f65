//! Gantry - Template-driven project generator with interactive prompts.
//!
//! Gantry collects project inputs through a typed question/answer loop and
//! then executes a template's ordered copy/transform instructions against
//! the collected answers.
//!
//! # Modules
//!
//! - [`answers`] - Ordered store of committed, typed answers
//! - [`cli`] - Command-line interface and dispatch
//! - [`error`] - Error types and result aliases
//! - [`generator`] - Ordered copy/transform instruction executor
//! - [`question`] - Question variants and their read/print/validate/default capabilities
//! - [`session`] - Single-question transition function and the answering loop
//! - [`template`] - Template description parsing and placeholder substitution
//! - [`tree`] - Composite question tree builder
//! - [`ui`] - Terminal input source and styled output
//!
//! # Example
//!
//! ```
//! use gantry::session::{answer_question, Outcome};
//! use gantry::answers::{Answer, Answers};
//! use gantry::question::{Question, SingleChoice};
//!
//! let question: Question = SingleChoice::new("database", "Database", ["MySQL", "PostgreSQL"])
//!     .unwrap()
//!     .into();
//! let outcome = answer_question(&question, "2", &Answers::new());
//! assert_eq!(outcome, Outcome::Committed(Answer::Choice(1)));
//! ```

pub mod answers;
pub mod cli;
pub mod error;
pub mod generator;
pub mod question;
pub mod session;
pub mod template;
pub mod tree;
pub mod ui;

pub use error::{GantryError, Result};
