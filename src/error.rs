use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    InvalidInput = 10,
    OutOfRangeCode = 11,
    IoError = 12,
    UnknownMethod = 13,
    InvalidAlphabet = 14,
    DuplicateMethod = 15,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

#[derive(Debug, Error)]
pub enum MixerError {
    #[error("unknown method: {name}")]
    UnknownMethod { name: String },

    #[error("code '{token}' at token {position} is outside 1-26")]
    OutOfRangeCode { token: String, position: usize },

    #[error("invalid alphabet mapping: {message}")]
    InvalidAlphabetMapping { message: String },

    #[error("method name '{name}' is used by both '{first}' and '{second}'")]
    DuplicateMethod {
        name: String,
        first: String,
        second: String,
    },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MixerError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MixerError::UnknownMethod { .. } => ExitCode::UnknownMethod,
            MixerError::OutOfRangeCode { .. } => ExitCode::OutOfRangeCode,
            MixerError::InvalidAlphabetMapping { .. } => ExitCode::InvalidAlphabet,
            MixerError::DuplicateMethod { .. } => ExitCode::DuplicateMethod,
            MixerError::InvalidInput { .. } => ExitCode::InvalidInput,
            MixerError::Io(_) => ExitCode::IoError,
        }
    }

    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self::UnknownMethod { name: name.into() }
    }

    pub fn out_of_range(token: impl Into<String>, position: usize) -> Self {
        Self::OutOfRangeCode {
            token: token.into(),
            position,
        }
    }

    pub fn invalid_alphabet(message: impl Into<String>) -> Self {
        Self::InvalidAlphabetMapping {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MixerError>;
