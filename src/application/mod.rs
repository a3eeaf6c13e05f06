// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`conversion`]: The encode/decode use case
//!
//! # Dependency Rule
//!
//! - Application layer depends on the codec and the notification model
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`app`, `ui`) uses application layer services
//!
//! # Example
//!
//! ```
//! use iced_base64::application::conversion::Converter;
//! use iced_base64::application::port::MemoryClipboard;
//! use iced_base64::codec::Operation;
//! use iced_base64::notifications::Manager;
//!
//! let mut converter = Converter::new(Box::new(MemoryClipboard::new()));
//! let mut notifications = Manager::new();
//!
//! let output = converter.convert(Operation::Encode, Some("hello"), &mut notifications);
//! assert_eq!(output.as_deref(), Some("aGVsbG8="));
//! assert_eq!(notifications.visible_count(), 1);
//! ```

pub mod conversion;
pub mod port;
