//! Implements OutputPort by writing to stdout.

use super::render::render_message;
use crate::domain::{DomainError, ParsedMessage};
use crate::ports::OutputPort;
use crate::shared::OutputFormat;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

/// Stdout sink. Logs go to stderr, so stdout carries results only.
pub struct StdoutSink {
    format: OutputFormat,
}

impl StdoutSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    async fn write_line(&self, content: &str) -> Result<(), DomainError> {
        let mut out = tokio::io::stdout();
        out.write_all(content.as_bytes())
            .await
            .map_err(|e| DomainError::Output(format!("write stdout: {}", e)))?;
        if !content.ends_with('\n') {
            out.write_all(b"\n")
                .await
                .map_err(|e| DomainError::Output(format!("write stdout: {}", e)))?;
        }
        out.flush()
            .await
            .map_err(|e| DomainError::Output(format!("flush stdout: {}", e)))
    }
}

#[async_trait]
impl OutputPort for StdoutSink {
    async fn emit_title(&self, title: &str) -> Result<(), DomainError> {
        self.write_line(title).await
    }

    async fn emit_message(&self, message: Option<&ParsedMessage>) -> Result<(), DomainError> {
        match render_message(self.format, message)? {
            Some(rendered) => self.write_line(&rendered).await,
            None => Ok(()),
        }
    }
}
