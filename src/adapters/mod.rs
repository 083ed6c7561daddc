//! Infrastructure adapters. Implement the ports.
//!
//! Output sinks and the interactive UI. Map errors to DomainError.

pub mod output;
pub mod ui;
