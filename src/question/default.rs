//! Default values for questions.
//!
//! A default is shown as part of the prompt and substituted when the user
//! submits empty input. `Computed` defaults are resolved lazily against the
//! answers gathered so far, so a later question's default can depend on an
//! earlier answer.

use std::fmt;

use crate::answers::Answers;

/// Boxed function computing a default from the answers committed so far.
pub type ComputeFn<T> = Box<dyn Fn(&Answers) -> T>;

/// Default value for a question.
///
/// `Computed` is evaluated only when the default is resolved (prompt render
/// or empty-input substitution), never at construction time. A computed
/// default must only reference questions answered before its own question is
/// rendered; that ordering is the tree author's responsibility.
pub enum DefaultValue<T> {
    /// No default; empty input is handed to the question's reader as-is.
    Absent,
    /// A fixed default value.
    Fixed(T),
    /// A default derived from earlier answers.
    Computed(ComputeFn<T>),
}

impl<T: Clone> DefaultValue<T> {
    /// Resolve the default against the answers committed so far.
    pub fn resolve(&self, answers: &Answers) -> Option<T> {
        match self {
            Self::Absent => None,
            Self::Fixed(value) => Some(value.clone()),
            Self::Computed(compute) => Some(compute(answers)),
        }
    }
}

impl<T> DefaultValue<T> {
    /// Whether no default is set.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Build a computed default from a closure.
    pub fn computed<F>(compute: F) -> Self
    where
        F: Fn(&Answers) -> T + 'static,
    {
        Self::Computed(Box::new(compute))
    }
}

impl<T: fmt::Debug> fmt::Debug for DefaultValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "Absent"),
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Computed(_) => write!(f, "Computed(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Answer;

    #[test]
    fn absent_resolves_to_none() {
        let default: DefaultValue<String> = DefaultValue::Absent;
        assert_eq!(default.resolve(&Answers::new()), None);
        assert!(default.is_absent());
    }

    #[test]
    fn fixed_resolves_without_answers() {
        let default = DefaultValue::Fixed("demo".to_string());
        assert_eq!(default.resolve(&Answers::new()), Some("demo".to_string()));
    }

    #[test]
    fn computed_reads_earlier_answer() {
        let mut answers = Answers::new();
        answers
            .commit("app_name", Answer::Text("shop".into()))
            .unwrap();

        let default = DefaultValue::computed(|answers: &Answers| {
            let app = answers
                .get("app_name")
                .and_then(|a| a.as_text())
                .unwrap_or("app");
            format!("com.example.{app}")
        });

        assert_eq!(
            default.resolve(&answers),
            Some("com.example.shop".to_string())
        );
    }

    #[test]
    fn computed_is_evaluated_per_resolve() {
        // The same default sees whatever answers exist at each render.
        let default = DefaultValue::computed(|answers: &Answers| answers.len());

        let mut answers = Answers::new();
        assert_eq!(default.resolve(&answers), Some(0));
        answers.commit("a", Answer::Bool(true)).unwrap();
        assert_eq!(default.resolve(&answers), Some(1));
    }
}
