use std::str::FromStr;

use crate::error::PromptError;

/// A yes/no answer, also used as the default of a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Interpret a normalized (trimmed, lowercase) answer token.
    #[must_use]
    pub fn from_answer(token: &str) -> Option<Self> {
        match token {
            "yes" | "y" | "ye" => Some(Self::Yes),
            "no" | "n" => Some(Self::No),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(self) -> bool {
        matches!(self, Self::Yes)
    }

    pub(crate) const fn hint(default: Option<Self>) -> &'static str {
        match default {
            None => " [y/n] ",
            Some(Self::Yes) => " [Y/n] ",
            Some(Self::No) => " [y/N] ",
        }
    }
}

/// Only the spelled-out `yes` and `no` are accepted as defaults.
impl FromStr for YesNo {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            other => Err(PromptError::InvalidDefault(other.to_string())),
        }
    }
}
