//! Render events - what the App layer asks the UI to draw

use crate::models::LogEntry;

#[derive(Debug, Clone)]
pub enum RenderEvent {
    /// A new conversation entry; `request_id` is set for replies to a dispatched command
    Entry {
        entry: LogEntry,
        request_id: Option<u64>,
    },
    /// A command was dispatched and is waiting for its reply
    Pending {
        request_id: u64,
        method: String,
        path: String,
    },
}
