//! # ds-prompt
//!
//! Blocking console prompts.
//!
//! Every helper shows a question, reads one answer, and loops with a corrective
//! message until the answer is valid. Configuration mistakes (a bad default,
//! an empty option list) are reported before anything is read.
//!
//! A [`Prompter`] reads through an [`AnswerSource`]: [`TermSource`] drives an
//! interactive terminal with `dialoguer`, [`LineSource`] reads plain lines from
//! piped input or an in-memory script:
//!
//! ```
//! use ds_prompt::{LineSource, Prompter, YesNo};
//!
//! let mut out = Vec::new();
//! let mut prompter = Prompter::new(LineSource::new("\n".as_bytes(), &mut out));
//! let linked = prompter.ask_yes_no("Link data?", Some(YesNo::No)).unwrap();
//! assert!(!linked);
//! ```

mod error;
mod prompter;
mod source;
mod yes_no;

pub use error::PromptError;
pub use prompter::{Prompter, StdPrompter};
pub use source::{AnswerSource, LineSource, TermSource, Validator};
pub use yes_no::YesNo;
