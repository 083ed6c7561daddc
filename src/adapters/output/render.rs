//! Rendering of parsed lines. Uses `serde_json` and the `csv` crate.
//!
//! One record per call; nothing here accumulates state between lines.

use crate::domain::{DomainError, ParsedMessage};
use crate::shared::OutputFormat;

const CSV_HEADER: [&str; 7] = [
    "Date",
    "Time",
    "Sender",
    "Message",
    "WordCount",
    "Sentiment",
    "Timestamp",
];

/// Render a parse result in the given format.
///
/// Returns `None` when there is nothing to print (a rejected line in CSV mode).
/// JSON renders a rejected line as `null`.
pub fn render_message(
    format: OutputFormat,
    message: Option<&ParsedMessage>,
) -> Result<Option<String>, DomainError> {
    match (format, message) {
        (OutputFormat::Json, message) => message_to_json(message)
            .map(Some)
            .map_err(|e| DomainError::Output(format!("Failed to render JSON: {}", e))),
        (OutputFormat::Csv, Some(message)) => message_to_csv(message)
            .map(Some)
            .map_err(|e| DomainError::Output(format!("Failed to render CSV: {}", e))),
        (OutputFormat::Csv, None) => Ok(None),
    }
}

pub fn message_to_json(message: Option<&ParsedMessage>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&message)
}

/// Convert a message to a semicolon-delimited CSV block (header + one row).
///
/// Newlines in the text are flattened to spaces; the csv crate handles quoting.
/// `Timestamp` is ISO `YYYY-MM-DDTHH:MM` when date and time follow the export
/// layout, empty otherwise.
pub fn message_to_csv(message: &ParsedMessage) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;

    let clean_text = message.text.replace('\n', " ").replace('\r', "");
    let word_count = message.word_count.to_string();
    let timestamp = message
        .timestamp()
        .map(|ts| ts.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default();
    wtr.write_record([
        message.date.as_str(),
        message.time.as_str(),
        message.sender.as_str(),
        clean_text.as_str(),
        word_count.as_str(),
        message.sentiment.as_str(),
        timestamp.as_str(),
    ])?;

    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;

    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sentiment;

    fn sample(text: &str) -> ParsedMessage {
        ParsedMessage {
            date: "01/12/2024".to_string(),
            time: "09:15".to_string(),
            sender: "Priya".to_string(),
            text: text.to_string(),
            word_count: 4,
            sentiment: Sentiment::Love,
        }
    }

    #[test]
    fn test_csv_has_header_and_row() {
        let csv = message_to_csv(&sample("I love this song")).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Date;Time;Sender;Message;WordCount;Sentiment;Timestamp"
        );
        assert_eq!(
            lines[1],
            "01/12/2024;09:15;Priya;I love this song;4;love;2024-12-01T09:15"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_csv_timestamp_empty_for_unknown_layout() {
        let mut message = sample("kal milte hain");
        message.time = "9.15 am".to_string();
        let csv = message_to_csv(&message).unwrap();
        assert!(csv.lines().nth(1).unwrap().ends_with(";love;"));
    }

    #[test]
    fn test_csv_quotes_delimiters_and_flattens_newlines() {
        let csv = message_to_csv(&sample("a;b\nc")).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("\"a;b c\""));
    }

    #[test]
    fn test_json_renders_record_and_null() {
        let json = render_message(OutputFormat::Json, Some(&sample("I love this song")))
            .unwrap()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sender"], "Priya");
        assert_eq!(value["wordCount"], 4);
        assert_eq!(value["sentiment"], "love");

        let null = render_message(OutputFormat::Json, None).unwrap();
        assert_eq!(null.as_deref(), Some("null"));
    }

    #[test]
    fn test_csv_skips_rejected_line() {
        assert!(render_message(OutputFormat::Csv, None).unwrap().is_none());
    }
}
