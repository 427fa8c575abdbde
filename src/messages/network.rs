//! Network messages - communication between App and Network layers

use serde_json::Value;

use crate::models::OutboundRequest;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Issue one request; the reply carries the same id
    Execute {
        id: u64,
        request: OutboundRequest,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Body of an HTTP response as received by the transport
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    /// The body was not valid JSON (an empty body lands here too)
    Malformed { raw: String, error: String },
}

impl ResponseBody {
    /// Decode a raw response body
    pub fn decode(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => ResponseBody::Json(value),
            Err(e) => ResponseBody::Malformed {
                raw,
                error: e.to_string(),
            },
        }
    }
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// The server answered, whatever the status
    Completed {
        id: u64,
        status: u16,
        body: ResponseBody,
        time_ms: u64,
    },
    /// The request never produced a response
    Failed {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Completed { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }

    /// Milliseconds from dispatch to reply or failure
    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::Completed { time_ms, .. } => *time_ms,
            NetworkResponse::Failed { time_ms, .. } => *time_ms,
        }
    }
}
