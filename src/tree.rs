//! The composite question tree.
//!
//! A [`QuestionTreeBuilder`] accumulates questions in call order; each add
//! call may carry a configuration closure that attaches a default and/or a
//! validator to the just-created question. [`QuestionTreeBuilder::build`]
//! runs the structural checks once (non-empty, duplicate-free names) and
//! returns an immutable [`QuestionTree`]. Insertion order is the canonical
//! traversal order for the answering loop.

use crate::error::{GantryError, Result};
use crate::question::{FreeText, Question, SingleChoice, YesNo};

/// Finalized, ordered, duplicate-free sequence of questions.
#[derive(Debug)]
pub struct QuestionTree {
    questions: Vec<Question>,
}

impl QuestionTree {
    /// Start building a tree.
    pub fn builder() -> QuestionTreeBuilder {
        QuestionTreeBuilder::default()
    }

    /// Iterate questions in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Number of questions in the tree. Never zero.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a finalized tree; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl<'a> IntoIterator for &'a QuestionTree {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// Ordered builder for a [`QuestionTree`].
///
/// Construction errors (empty option list, double validator attachment, a
/// failing configuration closure) latch: later calls are ignored and the
/// first error is reported by [`build`](Self::build). Partial trees are
/// never produced.
#[derive(Debug, Default)]
pub struct QuestionTreeBuilder {
    questions: Vec<Question>,
    error: Option<GantryError>,
}

impl QuestionTreeBuilder {
    /// Append a free-text question.
    pub fn free_text(self, name: &str, caption: &str) -> Self {
        self.free_text_with(name, caption, |_| Ok(()))
    }

    /// Append a free-text question, configuring it before it is added.
    pub fn free_text_with<F>(mut self, name: &str, caption: &str, configure: F) -> Self
    where
        F: FnOnce(&mut FreeText) -> Result<()>,
    {
        if self.error.is_some() {
            return self;
        }
        let mut question = FreeText::new(name, caption);
        match configure(&mut question) {
            Ok(()) => self.questions.push(question.into()),
            Err(e) => self.error = Some(e),
        }
        self
    }

    /// Append a single-choice question with the given option labels.
    pub fn single_choice<I, S>(self, name: &str, caption: &str, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.single_choice_with(name, caption, options, |_| Ok(()))
    }

    /// Append a single-choice question, configuring it before it is added.
    pub fn single_choice_with<I, S, F>(
        mut self,
        name: &str,
        caption: &str,
        options: I,
        configure: F,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnOnce(&mut SingleChoice) -> Result<()>,
    {
        if self.error.is_some() {
            return self;
        }
        let configured = SingleChoice::new(name, caption, options).and_then(|mut question| {
            configure(&mut question)?;
            Ok(question)
        });
        match configured {
            Ok(question) => self.questions.push(question.into()),
            Err(e) => self.error = Some(e),
        }
        self
    }

    /// Append a yes/no question.
    pub fn yes_no(self, name: &str, caption: &str) -> Self {
        self.yes_no_with(name, caption, |_| Ok(()))
    }

    /// Append a yes/no question, configuring it before it is added.
    pub fn yes_no_with<F>(mut self, name: &str, caption: &str, configure: F) -> Self
    where
        F: FnOnce(&mut YesNo) -> Result<()>,
    {
        if self.error.is_some() {
            return self;
        }
        let mut question = YesNo::new(name, caption);
        match configure(&mut question) {
            Ok(()) => self.questions.push(question.into()),
            Err(e) => self.error = Some(e),
        }
        self
    }

    /// Append an already-built question (used for template descriptors).
    pub fn push(mut self, question: Question) -> Self {
        if self.error.is_none() {
            self.questions.push(question);
        }
        self
    }

    /// Finalize the tree.
    ///
    /// Fails on any latched construction error, on an empty tree, and on the
    /// first duplicate name found. Partial success is not possible.
    pub fn build(self) -> Result<QuestionTree> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if self.questions.is_empty() {
            return Err(GantryError::EmptyQuestionTree);
        }
        for (position, question) in self.questions.iter().enumerate() {
            let name = question.name();
            if self.questions[..position].iter().any(|q| q.name() == name) {
                return Err(GantryError::DuplicateQuestion {
                    name: name.to_string(),
                });
            }
        }
        Ok(QuestionTree {
            questions: self.questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::class_name_validator;

    #[test]
    fn build_preserves_insertion_order() {
        let tree = QuestionTree::builder()
            .free_text("app_name", "Application name")
            .single_choice("database", "Database", ["MySQL", "PostgreSQL"])
            .yes_no("docker", "Use Docker?")
            .build()
            .unwrap();

        let names: Vec<_> = tree.iter().map(Question::name).collect();
        assert_eq!(names, vec!["app_name", "database", "docker"]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn empty_tree_fails() {
        let result = QuestionTree::builder().build();
        assert!(matches!(result, Err(GantryError::EmptyQuestionTree)));
    }

    #[test]
    fn duplicate_name_fails_and_names_it() {
        let result = QuestionTree::builder()
            .free_text("app_name", "Application name")
            .yes_no("docker", "Use Docker?")
            .free_text("app_name", "Again")
            .build();

        match result {
            Err(GantryError::DuplicateQuestion { name }) => assert_eq!(name, "app_name"),
            other => panic!("expected DuplicateQuestion, got {other:?}"),
        }
    }

    #[test]
    fn empty_options_surface_at_build() {
        let empty: Vec<String> = Vec::new();
        let result = QuestionTree::builder()
            .free_text("app_name", "Application name")
            .single_choice("database", "Database", empty)
            .build();
        assert!(matches!(result, Err(GantryError::EmptyOptions { .. })));
    }

    #[test]
    fn configure_closure_attaches_default_and_validator() {
        let tree = QuestionTree::builder()
            .free_text_with("class", "Entity class", |q| {
                q.set_default("Customer");
                q.set_validator(class_name_validator()?)
            })
            .build()
            .unwrap();

        let prompt = tree.iter().next().unwrap().render_prompt(&Default::default());
        assert_eq!(prompt, "Entity class [Customer]");
    }

    #[test]
    fn double_validator_in_closure_fails_build() {
        let result = QuestionTree::builder()
            .free_text_with("class", "Entity class", |q| {
                q.set_validator(class_name_validator()?)?;
                q.set_validator(class_name_validator()?)
            })
            .build();
        assert!(matches!(
            result,
            Err(GantryError::ValidatorAlreadySet { .. })
        ));
    }

    #[test]
    fn error_latches_and_skips_later_adds() {
        let empty: Vec<String> = Vec::new();
        let result = QuestionTree::builder()
            .single_choice("database", "Database", empty)
            .free_text("app_name", "Application name")
            .build();
        // The first error wins, not the later (valid) add.
        assert!(matches!(result, Err(GantryError::EmptyOptions { .. })));
    }
}
