//! Yes/no questions.
//!
//! The accepted input is a single case-insensitive `y` or `n`. The prompt
//! hint marks the default letter in uppercase: `(Y/n)`, `(y/N)`, or a
//! neutral `(y/n)` when no default is set.

use crate::answers::Answers;
use crate::error::{GantryError, Result};
use crate::question::default::DefaultValue;
use crate::question::validate::Validator;
use crate::question::{PrintValue, ReadInput, RenderPrompt, ResolveDefault, ValidateValue};

/// A question answered with yes or no.
#[derive(Debug)]
pub struct YesNo {
    name: String,
    caption: String,
    default: DefaultValue<bool>,
    validator: Validator<bool>,
    validator_replaced: bool,
}

impl YesNo {
    pub fn new(name: &str, caption: &str) -> Self {
        Self {
            name: name.to_string(),
            caption: caption.to_string(),
            default: DefaultValue::Absent,
            validator: Validator::accept_all(),
            validator_replaced: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Set a fixed default. Defaults may be reassigned.
    pub fn set_default(&mut self, value: bool) {
        self.default = DefaultValue::Fixed(value);
    }

    /// Set a default computed from earlier answers.
    pub fn set_computed_default<F>(&mut self, compute: F)
    where
        F: Fn(&Answers) -> bool + 'static,
    {
        self.default = DefaultValue::computed(compute);
    }

    /// Attach a validator. May be called at most once.
    pub fn set_validator(&mut self, validator: Validator<bool>) -> Result<()> {
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

impl ReadInput for YesNo {
    type Value = bool;

    fn read(&self, raw: &str) -> std::result::Result<bool, String> {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "y" => Ok(true),
            "n" => Ok(false),
            _ => Err("Enter y or n".to_string()),
        }
    }
}

impl PrintValue for YesNo {
    fn print(&self, value: &bool) -> String {
        if *value { "y" } else { "n" }.to_string()
    }
}

impl ValidateValue for YesNo {
    fn validate(&self, value: &bool) -> std::result::Result<(), String> {
        self.validator.validate(value)
    }
}

impl ResolveDefault for YesNo {
    fn resolve_default(&self, answers: &Answers) -> Option<bool> {
        self.default.resolve(answers)
    }
}

impl RenderPrompt for YesNo {
    fn render_prompt(&self, answers: &Answers) -> String {
        let hint = match self.resolve_default(answers) {
            Some(true) => "(Y/n)",
            Some(false) => "(y/N)",
            None => "(y/n)",
        };
        format!("{} {}", self.caption, hint)
    }
}
