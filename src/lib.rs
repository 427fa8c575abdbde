//! # Catalyst Chat
//!
//! A conversational terminal client for REST management APIs.
//!
//! Type `METHOD /path [data:{...}]`; the line is parsed, sent to the backend
//! and the reply comes back as a message in the conversation.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (line-based REPL)
//! - App Layer (parse, dispatch, classify, conversation log)
//! - Network Layer (Tokio runtime, one task per request)

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod messages;
pub mod models;
pub mod network;
pub mod parser;
pub mod ui;

// Re-export commonly used types
pub use app::{classify, AppActor, AppState};
pub use config::{Config, TransportMode};
pub use error::{ParseError, ParseFailure, PipelineError};
pub use messages::{NetworkCommand, NetworkResponse, RenderEvent, ResponseBody, UiEvent};
pub use models::{Command, ConversationLog, DisplayMessage, MessageKind, OutboundRequest, Sender};
pub use network::NetworkActor;
pub use parser::{build_request, parse};
