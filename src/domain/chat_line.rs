//! Parser for exported chat lines: `DD/MM/YYYY, HH:MM - Sender Name: Message text`.
//!
//! Fields are cut at the first `,`, then the first `-`, then the first `:`.
//! Date and time are passed through trimmed, never validated.

use super::entities::{ParsedMessage, Sentiment};
use super::errors::LineRejection;
use tracing::{debug, trace};

const FUNNY_WORDS: [&str; 3] = ["😂", ":)", "haha"];
const LOVE_WORDS: [&str; 3] = ["❤", "love", "pyaar"];

/// Parse one exported chat line. Returns `None` when the line does not fit
/// the grammar; the reason is only logged.
pub fn parse_chat_line(input: &str) -> Option<ParsedMessage> {
    match scan(input) {
        Ok(message) => Some(message),
        Err(reason) => {
            debug!(%reason, len = input.len(), "chat line rejected");
            None
        }
    }
}

pub(crate) fn scan(input: &str) -> Result<ParsedMessage, LineRejection> {
    if input.is_empty() {
        return Err(LineRejection::Empty);
    }

    let (date, rest) = input.split_once(',').ok_or(LineRejection::MissingComma)?;
    let (time, rest) = rest.split_once('-').ok_or(LineRejection::MissingHyphen)?;
    let (sender, after_colon) = rest.split_once(':').ok_or(LineRejection::MissingColon)?;

    // Skip exactly one character after the colon (normally the space of ": ").
    let mut tail = after_colon.chars();
    tail.next();
    let payload = tail.as_str();
    if payload.is_empty() {
        return Err(LineRejection::EmptyPayload);
    }

    let text = payload.trim();
    let (word_count, sentiment) = text.split(' ').fold(
        (0usize, Sentiment::Neutral),
        |(count, sentiment), raw| {
            let word = raw.trim().to_lowercase();
            let count = if word.is_empty() { count } else { count + 1 };
            (count, sentiment.escalate(classify(&word)))
        },
    );

    Ok(ParsedMessage {
        date: date.trim().to_string(),
        time: time.trim().to_string(),
        sender: sender.trim().to_string(),
        text: text.to_string(),
        word_count,
        sentiment,
    })
}

/// Classify a single lowercased, trimmed token.
fn classify(word: &str) -> Sentiment {
    let sentiment = if FUNNY_WORDS.contains(&word) {
        Sentiment::Funny
    } else if LOVE_WORDS.contains(&word) {
        Sentiment::Love
    } else {
        Sentiment::Neutral
    };
    if sentiment != Sentiment::Neutral {
        trace!(word, %sentiment, "sentiment keyword");
    }
    sentiment
}
