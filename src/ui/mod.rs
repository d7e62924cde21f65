//! Terminal input and output.
//!
//! The answering loop renders its own canonical prompt text, so the input
//! side is just a line source: [`InputSource`] with a stdin-backed
//! implementation for real runs and [`ScriptedInput`] as a test double.
//! Output styling goes through the `console` crate.

use std::collections::VecDeque;
use std::io::BufRead;

use console::style;

use crate::error::Result;

/// How much output to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// A source of raw answer lines.
pub trait InputSource {
    /// Read one line of user input, without the trailing newline.
    fn read_line(&mut self) -> Result<String>;
}

/// Reads answer lines from standard input.
///
/// Works both on a terminal and with piped input.
#[derive(Debug, Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Scripted input for tests: returns pre-loaded lines in order.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> Result<String> {
        self.lines.pop_front().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no more scripted input").into()
        })
    }
}

/// Styled terminal output.
#[derive(Debug, Default)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Show a prompt and leave the cursor on the input line.
    pub fn prompt(&self, text: &str) {
        println!("{text}");
        print!("{} ", style(">").cyan());
        use std::io::Write;
        let _ = std::io::stdout().flush();
    }

    /// Plain message, suppressed in quiet mode.
    pub fn message(&self, msg: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{msg}");
        }
    }

    /// Extra detail, shown only in verbose mode.
    pub fn detail(&self, msg: &str) {
        if self.mode == OutputMode::Verbose {
            println!("{}", style(msg).dim());
        }
    }

    /// Section header.
    pub fn header(&self, title: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{}", style(title).bold());
        }
    }

    /// Success line.
    pub fn success(&self, msg: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    /// Re-promptable rejection message from the answering loop.
    pub fn rejection(&self, msg: &str) {
        println!("{} {}", style("!").yellow(), msg);
    }

    /// Error line, always shown, on stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red(), msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_returns_lines_in_order() {
        let mut input = ScriptedInput::new(["first", "second"]);
        assert_eq!(input.read_line().unwrap(), "first");
        assert_eq!(input.read_line().unwrap(), "second");
    }

    #[test]
    fn scripted_input_fails_when_exhausted() {
        let mut input = ScriptedInput::new(Vec::<String>::new());
        assert!(input.read_line().is_err());
    }

    #[test]
    fn output_mode_defaults_to_normal() {
        assert_eq!(Output::default().mode(), OutputMode::Normal);
        assert_eq!(Output::new(OutputMode::Quiet).mode(), OutputMode::Quiet);
    }
}
