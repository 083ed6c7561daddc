//! Text service. Runs the domain functions and hands results to the output port.

use super::dynamic::{normalize_title_value, parse_chat_line_value};
use crate::domain::{DomainError, ParsedMessage, normalize_title, parse_chat_line};
use crate::ports::OutputPort;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Orchestrates one title fix or one line parse per call.
pub struct TextService {
    output: Arc<dyn OutputPort>,
}

impl TextService {
    pub fn new(output: Arc<dyn OutputPort>) -> Self {
        Self { output }
    }

    /// Normalize a title and emit it. Returns the normalized title.
    pub async fn fix_title(&self, raw: &str) -> Result<String, DomainError> {
        self.emit_title(normalize_title(raw)).await
    }

    /// Same as [`fix_title`](Self::fix_title) for a JSON value; non-strings give `""`.
    pub async fn fix_title_value(&self, raw: &Value) -> Result<String, DomainError> {
        self.emit_title(normalize_title_value(raw)).await
    }

    /// Parse one chat line and emit the result. A rejected line is not an error.
    pub async fn parse_line(&self, line: &str) -> Result<Option<ParsedMessage>, DomainError> {
        self.emit_parsed(parse_chat_line(line)).await
    }

    /// Same as [`parse_line`](Self::parse_line) for a JSON value; non-strings are rejected.
    pub async fn parse_value(&self, line: &Value) -> Result<Option<ParsedMessage>, DomainError> {
        self.emit_parsed(parse_chat_line_value(line)).await
    }

    async fn emit_title(&self, title: String) -> Result<String, DomainError> {
        if title.is_empty() {
            warn!("title is blank after normalization");
        } else {
            info!(title = %title, "title normalized");
        }
        self.output.emit_title(&title).await?;
        Ok(title)
    }

    async fn emit_parsed(
        &self,
        parsed: Option<ParsedMessage>,
    ) -> Result<Option<ParsedMessage>, DomainError> {
        match &parsed {
            Some(message) => info!(
                sender = %message.sender,
                word_count = message.word_count,
                sentiment = %message.sentiment,
                "chat line parsed"
            ),
            None => warn!("chat line does not match `date, time - sender: message`; skipped"),
        }
        self.output.emit_message(parsed.as_ref()).await?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::output::MemorySink;
    use crate::domain::Sentiment;
    use crate::shared::OutputFormat;

    #[tokio::test]
    async fn test_fix_title_emits_normalized() {
        let sink = Arc::new(MemorySink::new(OutputFormat::Json));
        let service = TextService::new(Arc::clone(&sink) as Arc<dyn OutputPort>);

        let title = service.fix_title("  sholay  ").await.unwrap();
        assert_eq!(title, "Sholay");
        let blank = service.fix_title("   ").await.unwrap();
        assert_eq!(blank, "");

        assert_eq!(sink.emitted().await, vec!["Sholay".to_string(), String::new()]);
    }

    #[tokio::test]
    async fn test_value_entry_points() {
        let sink = Arc::new(MemorySink::new(OutputFormat::Json));
        let service = TextService::new(Arc::clone(&sink) as Arc<dyn OutputPort>);

        assert_eq!(service.fix_title_value(&serde_json::json!(7)).await.unwrap(), "");
        assert_eq!(
            service
                .fix_title_value(&serde_json::json!("the house"))
                .await
                .unwrap(),
            "The House"
        );
        assert!(service.parse_value(&Value::Null).await.unwrap().is_none());

        assert_eq!(
            sink.emitted().await,
            vec![String::new(), "The House".to_string(), "null".to_string()]
        );
    }

    #[tokio::test]
    async fn test_parse_line_emits_json_and_null() {
        let sink = Arc::new(MemorySink::new(OutputFormat::Json));
        let service = TextService::new(Arc::clone(&sink) as Arc<dyn OutputPort>);

        let parsed = service
            .parse_line("25/01/2025, 14:30 - Rahul: Bhai party kab hai? 😂")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(parsed.sentiment, Sentiment::Funny);
        assert!(service.parse_line("garbage").await.unwrap().is_none());

        let emitted = sink.emitted().await;
        assert_eq!(emitted.len(), 2);
        assert!(emitted[0].contains("\"sender\": \"Rahul\""));
        assert_eq!(emitted[1], "null");
    }

    #[tokio::test]
    async fn test_parse_line_csv_skips_rejected() {
        let sink = Arc::new(MemorySink::new(OutputFormat::Csv));
        let service = TextService::new(Arc::clone(&sink) as Arc<dyn OutputPort>);

        service.parse_line("").await.unwrap();
        service
            .parse_line("01/12/2024, 09:15 - Priya: I love this song")
            .await
            .unwrap();

        let emitted = sink.emitted().await;
        assert_eq!(emitted.len(), 1);
        assert!(
            emitted[0].ends_with("01/12/2024;09:15;Priya;I love this song;4;love;2024-12-01T09:15\n")
        );
    }
}
