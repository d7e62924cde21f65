//! Free-text questions.

use crate::answers::Answers;
use crate::error::{GantryError, Result};
use crate::question::default::DefaultValue;
use crate::question::validate::Validator;
use crate::question::{PrintValue, ReadInput, RenderPrompt, ResolveDefault, ValidateValue};

/// A question answered with arbitrary text. Read and Print are identity.
#[derive(Debug)]
pub struct FreeText {
    name: String,
    caption: String,
    default: DefaultValue<String>,
    validator: Validator<String>,
    validator_replaced: bool,
}

impl FreeText {
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
    pub fn set_default(&mut self, value: &str) {
        self.default = DefaultValue::Fixed(value.to_string());
    }

    /// Set a default computed from earlier answers.
    pub fn set_computed_default<F>(&mut self, compute: F)
    where
        F: Fn(&Answers) -> String + 'static,
    {
        self.default = DefaultValue::computed(compute);
    }

    /// Attach a validator. May be called at most once.
    pub fn set_validator(&mut self, validator: Validator<String>) -> Result<()> {
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

impl ReadInput for FreeText {
    type Value = String;

    fn read(&self, raw: &str) -> std::result::Result<String, String> {
        Ok(raw.to_string())
    }
}

impl PrintValue for FreeText {
    fn print(&self, value: &String) -> String {
        value.clone()
    }
}

impl ValidateValue for FreeText {
    fn validate(&self, value: &String) -> std::result::Result<(), String> {
        self.validator.validate(value)
    }
}

impl ResolveDefault for FreeText {
    fn resolve_default(&self, answers: &Answers) -> Option<String> {
        self.default.resolve(answers)
    }
}

impl RenderPrompt for FreeText {
    fn render_prompt(&self, answers: &Answers) -> String {
        match self.resolve_default(answers) {
            Some(default) => format!("{} [{}]", self.caption, self.print(&default)),
            None => self.caption.clone(),
        }
    }
}
