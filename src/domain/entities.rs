//! Domain entities. Pure data structures for the core business.
//!
//! No IO types here. Produced by the domain functions, consumed by adapters.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse mood of a chat message, derived from keyword presence.
///
/// Variants are ordered by priority: `Funny` beats `Love` beats `Neutral`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    #[default]
    Neutral,
    Love,
    Funny,
}

impl Sentiment {
    /// Move towards `next` if it ranks higher; never moves backward.
    pub fn escalate(self, next: Sentiment) -> Sentiment {
        self.max(next)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Neutral => "neutral",
            Sentiment::Love => "love",
            Sentiment::Funny => "funny",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neutral" => Ok(Sentiment::Neutral),
            "love" => Ok(Sentiment::Love),
            "funny" => Ok(Sentiment::Funny),
            other => Err(format!("unknown sentiment: {other}")),
        }
    }
}

/// A single chat-export line split into its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    pub date: String,
    pub time: String,
    pub sender: String,
    pub text: String,
    #[serde(rename = "wordCount")]
    pub word_count: usize,
    pub sentiment: Sentiment,
}

impl ParsedMessage {
    /// Interpret `date` and `time` as `DD/MM/YYYY` and `HH:MM`.
    ///
    /// Returns `None` when either field does not follow that layout. Parsing
    /// itself never validates these fields.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, "%d/%m/%Y").ok()?;
        let time = NaiveTime::parse_from_str(&self.time, "%H:%M").ok()?;
        Some(date.and_time(time))
    }
}
