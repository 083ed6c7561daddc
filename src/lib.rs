//! chatfix: movie-title normalizer and chat-export line parser.
//!
//! The two pure functions live in [`domain`]; everything else is the
//! hexagon around them (ports, use cases, stdout/TUI adapters, config).

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;

pub use domain::{ParsedMessage, Sentiment, normalize_title, parse_chat_line};
