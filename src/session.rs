//! The answering protocol.
//!
//! [`answer_question`] is the single-question transition: raw text plus the
//! answers committed so far go in, and either a committed value or a
//! re-promptable rejection message comes out. Empty input substitutes the
//! question's resolved default, rendered back through the same Read path as
//! typed text.
//!
//! [`run_tree`] is the driver loop: it walks the tree in traversal order,
//! re-prompting on rejection, and returns the completed answer store.
//! Rejections never surface as errors; only input-source failure does.

use tracing::debug;

use crate::answers::{Answer, Answers};
use crate::error::Result;
use crate::question::{PrintValue, Question, ReadInput, ResolveDefault, ValidateValue};
use crate::tree::QuestionTree;
use crate::ui::{InputSource, Output};

/// Outcome of attempting to answer a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The value converted and validated; merge it under the question's name.
    Committed(Answer),
    /// Conversion or validation failed; re-prompt with this message.
    Rejected(String),
}

/// Attempt to answer one question with raw user text.
///
/// Never mutates `answers`; the caller commits on `Committed`.
pub fn answer_question(question: &Question, raw: &str, answers: &Answers) -> Outcome {
    match question {
        Question::FreeText(q) => transition(q, raw, answers, Answer::Text),
        Question::SingleChoice(q) => transition(q, raw, answers, Answer::Choice),
        Question::YesNo(q) => transition(q, raw, answers, Answer::Bool),
    }
}

/// Shared Pending → Converting → Validating → Committed/Rejected transition.
fn transition<Q, W>(question: &Q, raw: &str, answers: &Answers, wrap: W) -> Outcome
where
    Q: ReadInput + PrintValue + ValidateValue + ResolveDefault,
    W: FnOnce(Q::Value) -> Answer,
{
    let effective = if raw.is_empty() {
        match question.resolve_default(answers) {
            Some(default) => question.print(&default),
            None => String::new(),
        }
    } else {
        raw.to_string()
    };

    let value = match question.read(&effective) {
        Ok(value) => value,
        Err(message) => return Outcome::Rejected(message),
    };
    match question.validate(&value) {
        Ok(()) => Outcome::Committed(wrap(value)),
        Err(message) => Outcome::Rejected(message),
    }
}

/// Drive the answering loop over a whole tree.
///
/// Questions already present in `answers` (pre-seeded) are skipped.
pub fn run_tree(
    tree: &QuestionTree,
    input: &mut dyn InputSource,
    output: &Output,
) -> Result<Answers> {
    let mut answers = Answers::new();
    run_tree_into(tree, input, output, &mut answers)?;
    Ok(answers)
}

/// As [`run_tree`], but accumulating into an existing store.
pub fn run_tree_into(
    tree: &QuestionTree,
    input: &mut dyn InputSource,
    output: &Output,
    answers: &mut Answers,
) -> Result<()> {
    for question in tree {
        if answers.contains(question.name()) {
            debug!(question = question.name(), "answer pre-seeded, skipping");
            continue;
        }
        loop {
            output.prompt(&question.render_prompt(answers));
            let raw = input.read_line()?;
            match answer_question(question, &raw, answers) {
                Outcome::Committed(answer) => {
                    debug!(question = question.name(), "committed");
                    answers.commit(question.name(), answer)?;
                    break;
                }
                Outcome::Rejected(message) => output.rejection(&message),
            }
        }
    }
    Ok(())
}
