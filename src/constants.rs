//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Command grammar shown when a line cannot be parsed
pub const USAGE: &str = r#"METHOD /path [data:{"key":"value"}]"#;

/// Default backend (the relay listens on port 5001)
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Relay route that forwards request descriptors to the management API
pub const DEFAULT_RELAY_ROUTE: &str = "/api/catalyst/request";

/// Transport timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "catalyst-chat.log";

/// Directory under $HOME holding the config file
pub const CONFIG_DIR_NAME: &str = ".catalyst-chat";

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Reply text for 204 No Content
pub const NO_CONTENT_TEXT: &str = "Operation successful, no content returned.";

/// REPL prompt
pub const PROMPT: &str = "> ";

/// Application name
pub const APP_NAME: &str = "Catalyst Center API Chat";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
