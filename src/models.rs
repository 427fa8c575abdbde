use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who produced a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// How a message should be displayed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Error,
    Code,
}

/// One line of the conversation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMessage {
    pub text: String,
    pub sender: Sender,
    pub kind: MessageKind,
}

impl DisplayMessage {
    /// The line a user typed, recorded verbatim
    pub fn user(text: impl Into<String>) -> Self {
        DisplayMessage {
            text: text.into(),
            sender: Sender::User,
            kind: MessageKind::Text,
        }
    }

    pub fn bot_text(text: impl Into<String>) -> Self {
        DisplayMessage {
            text: text.into(),
            sender: Sender::Bot,
            kind: MessageKind::Text,
        }
    }

    pub fn bot_error(text: impl Into<String>) -> Self {
        DisplayMessage {
            text: text.into(),
            sender: Sender::Bot,
            kind: MessageKind::Error,
        }
    }

    pub fn bot_code(text: impl Into<String>) -> Self {
        DisplayMessage {
            text: text.into(),
            sender: Sender::Bot,
            kind: MessageKind::Code,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

/// A parsed `METHOD /path [data:{...}]` line
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    /// Uppercased HTTP verb
    pub method: String,
    pub path: String,
    pub payload: Option<Value>,
}

/// Transport-agnostic description of the HTTP call to issue
///
/// Serializes to the relay backend's request shape:
/// `{"method": .., "endpoint_path": .., "data": ..}` with `data: null` when absent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutboundRequest {
    pub method: String,
    pub endpoint_path: String,
    pub data: Option<Value>,
}

/// A message as stored in the conversation log
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub seq: u64,
    pub at: DateTime<Utc>,
    pub message: DisplayMessage,
}

/// Append-only record of the conversation, in display order
#[derive(Debug, Default)]
pub struct ConversationLog {
    entries: Vec<LogEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return its entry
    pub fn push(&mut self, message: DisplayMessage) -> &LogEntry {
        let seq = self.entries.len() as u64;
        self.entries.push(LogEntry {
            seq,
            at: Utc::now(),
            message,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn messages(&self) -> impl Iterator<Item = &DisplayMessage> {
        self.entries.iter().map(|e| &e.message)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_insertion_order() {
        let mut log = ConversationLog::new();
        log.push(DisplayMessage::user("GET /a"));
        log.push(DisplayMessage::bot_text("ok"));
        log.push(DisplayMessage::bot_error("boom"));

        let seqs: Vec<u64> = log.entries().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        let texts: Vec<&str> = log.messages().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["GET /a", "ok", "boom"]);
    }

    #[test]
    fn test_message_tags_serialize_lowercase() {
        let json = serde_json::to_value(DisplayMessage::bot_code("{}")).unwrap();
        assert_eq!(json["sender"], "bot");
        assert_eq!(json["kind"], "code");
    }

    #[test]
    fn test_outbound_request_serializes_null_data() {
        let req = OutboundRequest {
            method: "GET".into(),
            endpoint_path: "/dna/intent/api/v1/site".into(),
            data: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["endpoint_path"], "/dna/intent/api/v1/site");
        assert!(json["data"].is_null());
    }
}
