//! Core domain layer. No external I/O dependencies.
//!
//! The title normalizer and the chat-line parser live here, along with the
//! entities they produce. Dependencies flow inward.

pub mod chat_line;
pub mod entities;
pub mod errors;
pub mod title;

pub use chat_line::parse_chat_line;
pub use entities::{ParsedMessage, Sentiment};
pub use errors::DomainError;
pub use title::{MINOR_WORDS, normalize_title};
