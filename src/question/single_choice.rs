//! Single-choice questions.
//!
//! The user types a one-based option number; the stored value is the
//! zero-based index. A range validator rejecting out-of-range indices is
//! installed at construction and may be replaced once.

use crate::answers::Answers;
use crate::error::{GantryError, Result};
use crate::question::default::DefaultValue;
use crate::question::validate::Validator;
use crate::question::{PrintValue, ReadInput, RenderPrompt, ResolveDefault, ValidateValue};

/// A question answered by picking one option from an ordered list.
#[derive(Debug)]
pub struct SingleChoice {
    name: String,
    caption: String,
    options: Vec<String>,
    default: DefaultValue<usize>,
    validator: Validator<usize>,
    validator_replaced: bool,
}

impl SingleChoice {
    /// Construct with an ordered, non-empty list of option labels.
    pub fn new<I, S>(name: &str, caption: &str, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(GantryError::EmptyOptions {
                question: name.to_string(),
            });
        }
        let count = options.len();
        Ok(Self {
            name: name.to_string(),
            caption: caption.to_string(),
            options,
            default: DefaultValue::Absent,
            validator: Validator::new(move |index: &usize| {
                if *index < count {
                    Ok(())
                } else {
                    Err(format!("Input 1-{count}"))
                }
            }),
            validator_replaced: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// The ordered option labels.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Hint message naming the accepted range.
    fn range_hint(&self) -> String {
        format!("Input 1-{}", self.options.len())
    }

    /// Set a fixed default as a zero-based index. Defaults may be reassigned.
    pub fn set_default(&mut self, index: usize) {
        self.default = DefaultValue::Fixed(index);
    }

    /// Set a default index computed from earlier answers.
    pub fn set_computed_default<F>(&mut self, compute: F)
    where
        F: Fn(&Answers) -> usize + 'static,
    {
        self.default = DefaultValue::computed(compute);
    }

    /// Replace the range validator. May be called at most once.
    pub fn set_validator(&mut self, validator: Validator<usize>) -> Result<()> {
        if self.validator_replaced {
            return Err(GantryError::ValidatorAlreadySet {
                question: self.name.clone(),
            });
        }
        self.validator = validator;
        self.validator_replaced = true;
        Ok(())
    }
}

impl ReadInput for SingleChoice {
    type Value = usize;

    /// One-based numeral text to zero-based index.
    fn read(&self, raw: &str) -> std::result::Result<usize, String> {
        raw.trim()
            .parse::<usize>()
            .ok()
            .and_then(|numeral| numeral.checked_sub(1))
            .ok_or_else(|| self.range_hint())
    }
}

impl PrintValue for SingleChoice {
    fn print(&self, index: &usize) -> String {
        (index + 1).to_string()
    }
}

impl ValidateValue for SingleChoice {
    fn validate(&self, index: &usize) -> std::result::Result<(), String> {
        self.validator.validate(index)
    }
}

impl ResolveDefault for SingleChoice {
    fn resolve_default(&self, answers: &Answers) -> Option<usize> {
        self.default.resolve(answers)
    }
}

impl RenderPrompt for SingleChoice {
    fn render_prompt(&self, answers: &Answers) -> String {
        let mut prompt = match self.resolve_default(answers) {
            Some(index) => format!("{} [{}]", self.caption, self.print(&index)),
            None => self.caption.clone(),
        };
        for (position, label) in self.options.iter().enumerate() {
            prompt.push_str(&format!("\n{}. {}", position + 1, label));
        }
        prompt
    }
}
