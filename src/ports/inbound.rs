//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: interactive UI drives the application use cases.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the prompt loop until the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
