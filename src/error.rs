// SPDX-License-Identifier: MPL-2.0
use std::fmt;

use crate::codec::Operation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Codec(CodecError),
    Clipboard(ClipboardError),
}

/// Errors raised by the Base64 codec.
/// Each variant maps to a localized, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The source text is missing, empty or whitespace only.
    InvalidInput {
        operation: Operation,
        /// `true` when the source was missing altogether (as opposed to blank).
        missing: bool,
    },

    /// The source is not valid standard Base64 (alphabet, length or padding).
    MalformedInput(String),
}

impl CodecError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CodecError::InvalidInput {
                operation: Operation::Encode,
                missing: true,
            } => "error-encode-missing",
            CodecError::InvalidInput {
                operation: Operation::Encode,
                missing: false,
            } => "error-encode-empty",
            CodecError::InvalidInput {
                operation: Operation::Decode,
                missing: true,
            } => "error-decode-missing",
            CodecError::InvalidInput {
                operation: Operation::Decode,
                missing: false,
            } => "error-decode-empty",
            CodecError::MalformedInput(_) => "error-decode-malformed",
        }
    }

    /// Arguments interpolated into the localized message.
    pub fn i18n_args(&self) -> Vec<(String, String)> {
        match self {
            CodecError::MalformedInput(reason) => vec![("reason".to_string(), reason.clone())],
            CodecError::InvalidInput { .. } => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CodecError::InvalidInput { .. })
    }

    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, CodecError::MalformedInput(_))
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidInput { operation, missing } => {
                let verb = operation.verb();
                if *missing {
                    write!(f, "The string to {verb} can not be null")
                } else {
                    write!(f, "The string to {verb} can not be empty")
                }
            }
            CodecError::MalformedInput(reason) => {
                write!(f, "The string to decode is not valid Base64: {reason}")
            }
        }
    }
}

/// Errors raised while writing to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless session, missing display server).
    Unavailable(String),
    /// The clipboard was opened but refused the write.
    WriteFailed(String),
}

impl ClipboardError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ClipboardError::Unavailable(_) => "error-clipboard-unavailable",
            ClipboardError::WriteFailed(_) => "error-clipboard-write",
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            ClipboardError::Unavailable(reason) | ClipboardError::WriteFailed(reason) => reason,
        }
    }
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            ClipboardError::WriteFailed(msg) => write!(f, "Clipboard write failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Codec(e) => write!(f, "Codec Error: {}", e),
            Error::Clipboard(e) => write!(f, "Clipboard Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for CodecError {}
impl std::error::Error for ClipboardError {}

impl From<CodecError> for Error {
    fn from(err: CodecError) -> Self {
        Error::Codec(err)
    }
}

impl From<ClipboardError> for Error {
    fn from(err: ClipboardError) -> Self {
        Error::Clipboard(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
