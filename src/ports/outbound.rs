//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, ParsedMessage};

/// Output port. Where normalized titles and parsed lines end up.
#[async_trait::async_trait]
pub trait OutputPort: Send + Sync {
    /// Emit a normalized title (possibly empty).
    async fn emit_title(&self, title: &str) -> Result<(), DomainError>;

    /// Emit the result of parsing one line. `None` is a rejected line.
    async fn emit_message(&self, message: Option<&ParsedMessage>) -> Result<(), DomainError>;
}
