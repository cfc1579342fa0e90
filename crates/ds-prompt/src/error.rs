use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("invalid default answer: '{0}'")]
    InvalidDefault(String),
    #[error("options must be a non-empty list")]
    NoOptions,
    #[error("default index {index} must be in range (0, {len})")]
    DefaultOutOfRange { index: usize, len: usize },
    #[error("length limit {0} leaves no valid answer")]
    InvalidLimit(usize),
    #[error("input closed before an answer was given")]
    Closed,
    #[error("terminal error: {0}")]
    Terminal(#[from] dialoguer::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
