//! App state - pure data structure with no I/O logic

use std::collections::BTreeMap;

use crate::app::classify::classify;
use crate::error::PipelineError;
use crate::messages::{NetworkCommand, NetworkResponse, RenderEvent};
use crate::models::{ConversationLog, DisplayMessage, OutboundRequest};
use crate::parser;

/// Main application state - pure data, no I/O
#[derive(Debug)]
pub struct AppState {
    pub log: ConversationLog,
    pub next_request_id: u64,
    /// Dispatched requests still waiting for a reply, by request id
    pub pending: BTreeMap<u64, OutboundRequest>,
    render_queue: Vec<RenderEvent>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            log: ConversationLog::new(),
            next_request_id: 1,
            pending: BTreeMap::new(),
            render_queue: Vec::new(),
        }
    }

    /// Handle one submitted line
    ///
    /// Returns the command to hand to the network layer, if the line parsed.
    pub fn submit(&mut self, line: &str) -> Option<NetworkCommand> {
        let parsed = parser::parse(line);
        if matches!(parsed, Ok(None)) {
            return None;
        }

        self.append(DisplayMessage::user(line), None);

        let cmd = match parsed {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return None,
            Err(err) => {
                tracing::debug!(input = %err.raw_input, reason = %err.reason, "Rejected command");
                self.append(PipelineError::from(err).to_message(), None);
                return None;
            }
        };

        let id = self.next_request_id;
        self.next_request_id += 1;

        let request = parser::build_request(cmd);
        self.render_queue.push(RenderEvent::Pending {
            request_id: id,
            method: request.method.clone(),
            path: request.endpoint_path.clone(),
        });
        self.pending.insert(id, request.clone());

        Some(NetworkCommand::Execute { id, request })
    }

    /// Record the reply to a dispatched command
    pub fn handle_response(&mut self, response: NetworkResponse) {
        let id = response.id();
        match self.pending.remove(&id) {
            Some(request) => tracing::debug!(
                id,
                method = %request.method,
                path = %request.endpoint_path,
                time_ms = response.time_ms(),
                "Reply received"
            ),
            None => tracing::warn!(id, "Reply for a request that is not pending"),
        }
        self.append(classify(&response), Some(id));
    }

    /// No request is waiting for a reply
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain the events produced since the last call
    pub fn take_render_events(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.render_queue)
    }

    fn append(&mut self, message: DisplayMessage, request_id: Option<u64>) {
        let entry = self.log.push(message).clone();
        self.render_queue.push(RenderEvent::Entry { entry, request_id });
    }
}
