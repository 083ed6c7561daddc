//! Implements InputPort. Inquire-based interactive prompts.

use crate::domain::DomainError;
use crate::ports::InputPort;
use crate::usecases::TextService;
use async_trait::async_trait;
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    FixTitle,
    ParseLine,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 3] = [MenuAction::FixTitle, MenuAction::ParseLine, MenuAction::Quit];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::FixTitle => f.write_str("Fix a movie title"),
            MenuAction::ParseLine => f.write_str("Parse a chat line"),
            MenuAction::Quit => f.write_str("Quit"),
        }
    }
}

/// Esc / Ctrl-C end the session instead of failing it.
fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<TextService>,
}

impl TuiInputPort {
    pub fn new(service: Arc<TextService>) -> Self {
        Self { service }
    }

    /// Prompt for free text. `Ok(None)` when the user cancels.
    fn ask(message: &str, help: &str) -> Result<Option<String>, DomainError> {
        match Text::new(message).with_help_message(help).prompt() {
            Ok(answer) => Ok(Some(answer)),
            Err(e) if is_cancel(&e) => Ok(None),
            Err(e) => Err(DomainError::Input(e.to_string())),
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let action = match Select::new("What do you want to do?", MenuAction::ALL.to_vec())
                .prompt()
            {
                Ok(action) => action,
                Err(e) if is_cancel(&e) => MenuAction::Quit,
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            match action {
                MenuAction::FixTitle => {
                    if let Some(raw) = Self::ask("Title:", "e.g. DILWALE   dulhania LE jayenge")? {
                        self.service.fix_title(&raw).await?;
                    }
                }
                MenuAction::ParseLine => {
                    if let Some(raw) =
                        Self::ask("Chat line:", "DD/MM/YYYY, HH:MM - Sender Name: Message text")?
                    {
                        self.service.parse_line(&raw).await?;
                    }
                }
                MenuAction::Quit => {
                    info!("interactive session ended");
                    return Ok(());
                }
            }
        }
    }
}
