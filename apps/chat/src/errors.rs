#![allow(dead_code)]

use thiserror::Error;

/// Application-level error type.
///
/// Input failures are conversation content, not process failures:
/// `user_reply` maps them to the assistant-visible message the widget
/// appends instead of crashing. Process failures (`Io`, `Internal`)
/// propagate out of the session loop with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generator error: {0}")]
    Generator(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The assistant-visible reply for an error surfaced into the chat.
    ///
    /// `Io` and `Internal` are not expected to be surfaced this way; they
    /// still get a generic line so a misrouted error cannot leak detail
    /// into the transcript.
    pub fn user_reply(&self) -> String {
        match self {
            AppError::Validation(msg) => format!(
                "I couldn't read that request ({msg}). \
                Send JSON in the shape shown by :example."
            ),
            AppError::Generator(msg) => {
                format!("Resume generation failed: {msg}. Please try again.")
            }
            AppError::Io(_) | AppError::Internal(_) => {
                "Something went wrong on my side. Please try again.".to_string()
            }
        }
    }
}
