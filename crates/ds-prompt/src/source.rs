use std::fmt;
use std::io::{BufRead, Write};

use dialoguer::{Input, console::Term, theme::Theme};

use crate::error::PromptError;

/// Checks a trimmed answer; `Err` carries the corrective message to show.
pub type Validator<'v> = dyn FnMut(&str) -> Result<(), String> + 'v;

/// Where prompts are shown and answers come from.
pub trait AnswerSource {
    /// Show `prompt` and block until `validate` accepts a trimmed answer.
    ///
    /// Every rejection prints the validator's message before asking again.
    fn answer(
        &mut self,
        prompt: &str,
        validate: &mut Validator<'_>,
    ) -> Result<String, PromptError>;

    /// Print a status line.
    fn say(&mut self, message: &str) -> Result<(), PromptError>;
}

impl<S: AnswerSource + ?Sized> AnswerSource for Box<S> {
    fn answer(
        &mut self,
        prompt: &str,
        validate: &mut Validator<'_>,
    ) -> Result<String, PromptError> {
        (**self).answer(prompt, validate)
    }

    fn say(&mut self, message: &str) -> Result<(), PromptError> {
        (**self).say(message)
    }
}

/// Interactive terminal input through `dialoguer`.
pub struct TermSource {
    term: Term,
}

impl TermSource {
    #[must_use]
    pub const fn new(term: Term) -> Self {
        Self { term }
    }
}

impl AnswerSource for TermSource {
    fn answer(
        &mut self,
        prompt: &str,
        validate: &mut Validator<'_>,
    ) -> Result<String, PromptError> {
        let answer = Input::<String>::with_theme(&PlainTheme)
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|input: &String| validate(input.trim()))
            .interact_text_on(&self.term)?;
        Ok(answer.trim().to_string())
    }

    fn say(&mut self, message: &str) -> Result<(), PromptError> {
        self.term.write_line(message)?;
        Ok(())
    }
}

/// Line-at-a-time input for piped stdin and scripted sessions.
pub struct LineSource<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineSource<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect a scripted session.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> AnswerSource for LineSource<R, W> {
    fn answer(
        &mut self,
        prompt: &str,
        validate: &mut Validator<'_>,
    ) -> Result<String, PromptError> {
        loop {
            write!(self.writer, "{prompt}")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                tracing::debug!("prompt input reached end of stream");
                return Err(PromptError::Closed);
            }
            let answer = line.trim();
            match validate(answer) {
                Ok(()) => return Ok(answer.to_string()),
                Err(message) => writeln!(self.writer, "{message}")?,
            }
        }
    }

    fn say(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Renders prompts and corrections verbatim; hints are part of the prompt.
struct PlainTheme;

impl Theme for PlainTheme {
    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        write!(f, "{err}")
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{prompt}")
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{prompt}{sel}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn accept_digits(answer: &str) -> Result<(), String> {
        if answer.chars().all(|c| c.is_ascii_digit()) && !answer.is_empty() {
            Ok(())
        } else {
            Err("digits only".to_string())
        }
    }

    #[test]
    fn line_source_repeats_prompt_until_valid() {
        let mut source = LineSource::new("x\n 42 \n".as_bytes(), Vec::new());
        let answer = source
            .answer("Count? ", &mut accept_digits)
            .expect("answered");
        assert_eq!(answer, "42");
        let out = String::from_utf8(source.into_writer()).expect("utf8");
        assert_eq!(out, "Count? digits only\nCount? ");
    }

    #[test]
    fn line_source_reports_closed_input() {
        let mut source = LineSource::new("".as_bytes(), Vec::new());
        let err = source
            .answer("Count? ", &mut accept_digits)
            .expect_err("no input");
        assert!(matches!(err, PromptError::Closed));
    }

    #[test]
    fn boxed_source_delegates() {
        let mut source: Box<dyn AnswerSource> =
            Box::new(LineSource::new("7\n".as_bytes(), std::io::sink()));
        assert_eq!(
            source.answer("Count? ", &mut accept_digits).expect("answered"),
            "7"
        );
    }

    #[test]
    fn plain_theme_renders_text_verbatim() {
        let mut prompt = String::new();
        PlainTheme
            .format_input_prompt(&mut prompt, "Go? [y/N] ", Some("no"))
            .expect("formatted");
        assert_eq!(prompt, "Go? [y/N] ");

        let mut error = String::new();
        PlainTheme
            .format_error(&mut error, "Please respond with 'yes' or 'no' (or 'y' or 'n').")
            .expect("formatted");
        assert_eq!(error, "Please respond with 'yes' or 'no' (or 'y' or 'n').");

        let mut selection = String::new();
        PlainTheme
            .format_input_prompt_selection(&mut selection, "Go? [y/N] ", "y")
            .expect("formatted");
        assert_eq!(selection, "Go? [y/N] y");
    }
}
