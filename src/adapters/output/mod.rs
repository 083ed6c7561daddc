//! Output adapters. Implement OutputPort.
//!
//! Stdout for the binary, memory for tests.

pub mod memory_sink;
pub mod render;
pub mod stdout_sink;

pub use memory_sink::MemorySink;
pub use render::{message_to_csv, message_to_json, render_message};
pub use stdout_sink::StdoutSink;
