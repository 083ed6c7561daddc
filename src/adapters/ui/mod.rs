//! Interactive UI adapters. Implement InputPort.

pub mod tui;

pub use tui::TuiInputPort;
