use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can end a submission in `Failed`.
///
/// None of these leave the controller: `MessageForm::submit` turns each one into
/// banner text and the form stays usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A required field is empty after trimming. Detected before any request.
    #[error("Missing required field: {0}")]
    Validation(&'static str),

    /// The endpoint answered with a non-2xx status.
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// The endpoint answered 2xx but reported `success: false`.
    #[error("{0}")]
    Application(String),

    /// The request never completed.
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}
