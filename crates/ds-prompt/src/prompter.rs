use std::io::{self, IsTerminal};

use dialoguer::console::Term;

use crate::error::PromptError;
use crate::source::{AnswerSource, LineSource, TermSource};
use crate::yes_no::YesNo;

/// Prompter bound to the process console.
pub type StdPrompter = Prompter<Box<dyn AnswerSource>>;

pub struct Prompter<S> {
    source: S,
}

impl StdPrompter {
    /// Use `dialoguer` on an interactive terminal, plain lines otherwise.
    #[must_use]
    pub fn stdio() -> Self {
        let term = Term::stdout();
        if term.is_term() && io::stdin().is_terminal() {
            tracing::debug!("prompting on the interactive terminal");
            Self::new(Box::new(TermSource::new(term)))
        } else {
            tracing::debug!("prompting on piped standard input");
            Self::new(Box::new(LineSource::new(io::stdin().lock(), io::stdout())))
        }
    }
}

impl<S: AnswerSource> Prompter<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Give back the answer source, e.g. to inspect a scripted session.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Print a status line to the prompt's output.
    pub fn say(&mut self, message: &str) -> Result<(), PromptError> {
        self.source.say(message)
    }

    /// Ask a yes/no question.
    ///
    /// Empty input returns `default` when one is given; without a default an
    /// explicit answer is required.
    pub fn ask_yes_no(
        &mut self,
        question: &str,
        default: Option<YesNo>,
    ) -> Result<bool, PromptError> {
        let hint = YesNo::hint(default);
        let answer = self
            .source
            .answer(&format!("{question}{hint}"), &mut |answer: &str| {
                let accepted = (answer.is_empty() && default.is_some())
                    || YesNo::from_answer(&answer.to_lowercase()).is_some();
                if accepted {
                    Ok(())
                } else {
                    Err("Please respond with 'yes' or 'no' (or 'y' or 'n').".to_string())
                }
            })?;
        Ok(YesNo::from_answer(&answer.to_lowercase())
            .or(default)
            .is_some_and(YesNo::as_bool))
    }

    /// Ask the user to pick one of `options` by its index.
    ///
    /// `default` must index into `options`; it is returned on empty input.
    pub fn ask_choice<'o, O: AsRef<str>>(
        &mut self,
        question: &str,
        options: &'o [O],
        default: usize,
    ) -> Result<&'o str, PromptError> {
        if options.is_empty() {
            return Err(PromptError::NoOptions);
        }
        let len = options.len();
        if default >= len {
            return Err(PromptError::DefaultOutOfRange {
                index: default,
                len,
            });
        }

        let listing = options
            .iter()
            .enumerate()
            .map(|(index, option)| format!("[{index}] - {}", option.as_ref()))
            .collect::<Vec<_>>()
            .join("\n");
        let prompt = format!("{question}[{default}]\n{listing}\n");

        let answer = self.source.answer(&prompt, &mut |answer: &str| {
            if answer.is_empty() || parse_index(answer, len).is_some() {
                Ok(())
            } else {
                Err(format!("Please respond with a number from 0 to {}.", len - 1))
            }
        })?;
        let index = parse_index(&answer, len).unwrap_or(default);
        Ok(options[index].as_ref())
    }

    /// Ask for a free-text answer shorter than `max_len` characters.
    ///
    /// Empty input returns `default` when one is given; without a default a
    /// non-empty answer is required.
    pub fn ask_field(
        &mut self,
        question: &str,
        default: Option<&str>,
        max_len: usize,
    ) -> Result<String, PromptError> {
        if max_len < 2 {
            return Err(PromptError::InvalidLimit(max_len));
        }
        let hint = default.map_or_else(|| "  ".to_string(), |value| format!(" [{value}] "));

        let answer = self
            .source
            .answer(&format!("{question}{hint}"), &mut |answer: &str| {
                let len = answer.chars().count();
                if (len == 0 && default.is_some()) || (len > 0 && len < max_len) {
                    Ok(())
                } else {
                    Err(format!(
                        "Please respond with a non-empty answer that has less than \
                         {max_len} characters."
                    ))
                }
            })?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }
}

/// Accept only the canonical decimal spelling of an index below `len`.
fn parse_index(answer: &str, len: usize) -> Option<usize> {
    answer
        .parse::<usize>()
        .ok()
        .filter(|index| *index < len && index.to_string() == answer)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    type Scripted<'a> = Prompter<LineSource<&'a [u8], Vec<u8>>>;

    fn scripted(input: &str) -> Scripted<'_> {
        Prompter::new(LineSource::new(input.as_bytes(), Vec::new()))
    }

    fn output(prompter: Scripted<'_>) -> String {
        String::from_utf8(prompter.into_source().into_writer()).expect("utf8 output")
    }

    #[rstest]
    #[case("yes\n")]
    #[case("Y\n")]
    #[case("  ye  \n")]
    #[case("YES\n")]
    fn affirmative_tokens_return_true(#[case] input: &str) {
        let mut prompter = scripted(input);
        assert!(prompter.ask_yes_no("Go?", Some(YesNo::No)).expect("answered"));
    }

    #[rstest]
    #[case("no\n")]
    #[case("N\n")]
    #[case("\tNo \n")]
    fn negative_tokens_return_false(#[case] input: &str) {
        let mut prompter = scripted(input);
        assert!(!prompter.ask_yes_no("Go?", Some(YesNo::Yes)).expect("answered"));
    }

    #[rstest]
    #[case(YesNo::Yes, true)]
    #[case(YesNo::No, false)]
    fn empty_answer_returns_default(#[case] default: YesNo, #[case] expected: bool) {
        let mut prompter = scripted("\n");
        assert_eq!(
            prompter.ask_yes_no("Go?", Some(default)).expect("answered"),
            expected
        );
    }

    #[test]
    fn yes_no_without_default_requires_answer() {
        let mut prompter = scripted("\nmaybe\ny\n");
        assert!(prompter.ask_yes_no("Go?", None).expect("answered"));
        let out = output(prompter);
        assert_eq!(out.matches("Go? [y/n] ").count(), 3);
        assert_eq!(
            out.matches("Please respond with 'yes' or 'no' (or 'y' or 'n').")
                .count(),
            2
        );
    }

    #[test]
    fn choice_empty_returns_default_option() {
        let mut prompter = scripted("\n");
        let picked = prompter
            .ask_choice("Pick", &["a", "b", "c"], 1)
            .expect("answered");
        assert_eq!(picked, "b");
        assert_eq!(output(prompter), "Pick[1]\n[0] - a\n[1] - b\n[2] - c\n");
    }

    #[test]
    fn choice_index_selects_option() {
        let mut prompter = scripted("2\n");
        let picked = prompter
            .ask_choice("Pick", &["a", "b", "c"], 1)
            .expect("answered");
        assert_eq!(picked, "c");
    }

    #[test]
    fn choice_out_of_range_reprompts() {
        let mut prompter = scripted("5\n+1\n0\n");
        let picked = prompter
            .ask_choice("Pick", &["a", "b", "c"], 1)
            .expect("answered");
        assert_eq!(picked, "a");
        assert_eq!(
            output(prompter)
                .matches("Please respond with a number from 0 to 2.")
                .count(),
            2
        );
    }

    #[test]
    fn choice_rejects_bad_configuration_before_reading() {
        let mut prompter = scripted("");
        let empty: [&str; 0] = [];
        assert!(matches!(
            prompter.ask_choice("Pick", &empty, 0),
            Err(PromptError::NoOptions)
        ));
        assert!(matches!(
            prompter.ask_choice("Pick", &["a", "b"], 2),
            Err(PromptError::DefaultOutOfRange { index: 2, len: 2 })
        ));
        assert_eq!(output(prompter), "");
    }

    #[test]
    fn field_empty_returns_default() {
        let mut prompter = scripted("\n");
        let value = prompter.ask_field("Name?", Some("x"), 5).expect("answered");
        assert_eq!(value, "x");
        assert_eq!(output(prompter), "Name? [x] ");
    }

    #[test]
    fn field_accepts_short_answer() {
        let mut prompter = scripted("  ab \n");
        let value = prompter.ask_field("Name?", Some("x"), 5).expect("answered");
        assert_eq!(value, "ab");
    }

    #[test]
    fn field_limit_is_exclusive() {
        let mut prompter = scripted("abcde\nabcd\n");
        let value = prompter.ask_field("Name?", Some("x"), 5).expect("answered");
        assert_eq!(value, "abcd");
        assert!(output(prompter).contains(
            "Please respond with a non-empty answer that has less than 5 characters."
        ));
    }

    #[test]
    fn field_limit_counts_characters_not_bytes() {
        let mut prompter = scripted("ünï\n");
        let value = prompter.ask_field("Name?", None, 4).expect("answered");
        assert_eq!(value, "ünï");
    }

    #[test]
    fn field_without_default_keeps_asking_until_input_ends() {
        let mut prompter = scripted("\n\n\n");
        let err = prompter
            .ask_field("Path?", None, 100)
            .expect_err("never answered");
        assert!(matches!(err, PromptError::Closed));
        assert_eq!(output(prompter).matches("Path?  ").count(), 4);
    }

    #[test]
    fn field_rejects_unsatisfiable_limit() {
        let mut prompter = scripted("a\n");
        assert!(matches!(
            prompter.ask_field("Name?", None, 1),
            Err(PromptError::InvalidLimit(1))
        ));
    }

    #[test]
    fn say_writes_a_line() {
        let mut prompter = scripted("");
        prompter.say("Ok, creating the link.").expect("written");
        assert_eq!(output(prompter), "Ok, creating the link.\n");
    }
}
