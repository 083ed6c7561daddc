//! In-memory OutputPort for tests and embedding.
//!
//! Keeps every emitted chunk, rendered exactly as stdout would see it.

use super::render::render_message;
use crate::domain::{DomainError, ParsedMessage};
use crate::ports::OutputPort;
use crate::shared::OutputFormat;
use async_trait::async_trait;
use tokio::sync::Mutex;

pub struct MemorySink {
    format: OutputFormat,
    emitted: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            emitted: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything emitted so far, in order.
    pub async fn emitted(&self) -> Vec<String> {
        self.emitted.lock().await.clone()
    }
}

#[async_trait]
impl OutputPort for MemorySink {
    async fn emit_title(&self, title: &str) -> Result<(), DomainError> {
        self.emitted.lock().await.push(title.to_string());
        Ok(())
    }

    async fn emit_message(&self, message: Option<&ParsedMessage>) -> Result<(), DomainError> {
        if let Some(rendered) = render_message(self.format, message)? {
            self.emitted.lock().await.push(rendered);
        }
        Ok(())
    }
}
