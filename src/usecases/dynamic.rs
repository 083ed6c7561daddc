//! Entry points for dynamically-typed input (JSON values).
//!
//! Anything that is not a JSON string is treated as no input at all.

use crate::domain::{ParsedMessage, normalize_title, parse_chat_line};
use serde_json::Value;

/// `""` for non-string values, otherwise [`normalize_title`].
pub fn normalize_title_value(input: &Value) -> String {
    match input {
        Value::String(s) => normalize_title(s),
        _ => String::new(),
    }
}

/// `None` for non-string values, otherwise [`parse_chat_line`].
pub fn parse_chat_line_value(input: &Value) -> Option<ParsedMessage> {
    match input {
        Value::String(s) => parse_chat_line(s),
        _ => None,
    }
}
