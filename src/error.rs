//! Error taxonomy for the command pipeline
//!
//! Every variant is terminal for the command that triggered it and is turned
//! into exactly one error message in the conversation.

use thiserror::Error;

use crate::constants::USAGE;
use crate::models::DisplayMessage;

/// Why a line could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("Invalid command format. Use: {}", USAGE)]
    Format,

    #[error("Invalid JSON data: {0}")]
    InvalidJson(String),
}

/// A rejected input line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct ParseError {
    pub raw_input: String,
    pub reason: ParseFailure,
}

/// Anything that can end a command without a successful reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Network error or server is unreachable: {0}")]
    Transport(String),

    #[error("Error {status}: {message}")]
    Api { status: u16, message: String },
}

impl PipelineError {
    /// The conversation message shown for this error
    pub fn to_message(&self) -> DisplayMessage {
        DisplayMessage::bot_error(self.to_string())
    }
}
