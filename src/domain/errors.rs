//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. The two text functions
//! never fail; they fold bad input into `""` or `None`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("Input error: {0}")]
    Input(String),
}

/// Why a chat line was rejected. Only surfaced through logs; callers see `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineRejection {
    #[error("line is empty")]
    Empty,

    #[error("no comma after the date")]
    MissingComma,

    #[error("no hyphen after the time")]
    MissingHyphen,

    #[error("no colon after the sender")]
    MissingColon,

    #[error("nothing after the sender separator")]
    EmptyPayload,
}
