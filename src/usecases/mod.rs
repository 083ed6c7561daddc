//! Application use cases. Orchestrate domain logic via ports.

pub mod dynamic;
pub mod text_service;

pub use dynamic::{normalize_title_value, parse_chat_line_value};
pub use text_service::TextService;
