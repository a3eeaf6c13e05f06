// SPDX-License-Identifier: MPL-2.0
//! Base64 conversion between UTF-8 text and its standard Base64 form.
//!
//! The functions here are pure: they validate the source, run the codec and
//! return the converted text. Copying to the clipboard and notifying the user
//! is handled by [`crate::application::conversion`].
//!
//! A missing source (a text field that could not be read) is passed as `None`.
//!
//! # Examples
//!
//! ```
//! use iced_base64::codec;
//!
//! assert_eq!(codec::encode(Some("hello")).unwrap(), "aGVsbG8=");
//! assert_eq!(codec::decode(Some("aGVsbG8=")).unwrap(), "hello");
//! assert!(codec::encode(Some("   ")).unwrap_err().is_invalid_input());
//! ```

use crate::error::CodecError;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

/// Standard alphabet, padded on encode. Decoding takes input with or without
/// padding and ignores non-zero bits left over in the last symbol.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// The two conversions offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Encode,
    Decode,
}

impl Operation {
    /// Lowercase verb used in error messages.
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Encode => "encode",
            Operation::Decode => "decode",
        }
    }

    /// i18n key of the notification shown when the result reached the clipboard.
    #[must_use]
    pub fn copied_key(self) -> &'static str {
        match self {
            Operation::Encode => "notification-encode-copied",
            Operation::Decode => "notification-decode-copied",
        }
    }

    /// i18n key of the notification shown when clipboard copy is disabled.
    #[must_use]
    pub fn done_key(self) -> &'static str {
        match self {
            Operation::Encode => "notification-encode-done",
            Operation::Decode => "notification-decode-done",
        }
    }

    /// i18n key of the button label triggering this operation.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Operation::Encode => "action-encode",
            Operation::Decode => "action-decode",
        }
    }
}

/// Runs `operation` on `source`.
pub fn run(operation: Operation, source: Option<&str>) -> Result<String, CodecError> {
    match operation {
        Operation::Encode => encode(source),
        Operation::Decode => decode(source),
    }
}

/// Encodes the UTF-8 bytes of `source` into padded standard Base64.
///
/// The source is validated on its trimmed form but encoded as given, so
/// surrounding whitespace is part of the output.
pub fn encode(source: Option<&str>) -> Result<String, CodecError> {
    let source = require_text(Operation::Encode, source)?;
    Ok(ENGINE.encode(source.as_bytes()))
}

/// Decodes standard Base64 back into text.
///
/// Whitespace around the Base64 text is ignored, which includes the line break
/// left after the last line of a multi-line source field. Bytes that do not
/// form valid UTF-8 are replaced with U+FFFD.
pub fn decode(source: Option<&str>) -> Result<String, CodecError> {
    let source = require_text(Operation::Decode, source)?;
    let bytes = ENGINE
        .decode(source.trim())
        .map_err(|e| CodecError::MalformedInput(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn require_text(operation: Operation, source: Option<&str>) -> Result<&str, CodecError> {
    match source {
        None => Err(CodecError::InvalidInput {
            operation,
            missing: true,
        }),
        Some(text) if text.trim().is_empty() => Err(CodecError::InvalidInput {
            operation,
            missing: false,
        }),
        Some(text) => Ok(text),
    }
}
