use clap::Parser;
use std::path::PathBuf;

use crate::config::{Overrides, TransportMode};

/// Talk to a REST management API one line at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Run a single command (e.g. "GET /dna/intent/api/v1/site") and exit
    #[arg(index = 1)]
    pub command: Option<String>,

    /// Backend base URL
    #[arg(long, env = "CATALYST_CHAT_BASE_URL")]
    pub base_url: Option<String>,

    /// Send through the relay backend or straight to the API
    #[arg(long, value_enum, env = "CATALYST_CHAT_MODE")]
    pub mode: Option<TransportMode>,

    /// Relay route on the backend
    #[arg(long)]
    pub relay_route: Option<String>,

    /// Transport timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Accept invalid TLS certificates
    #[arg(long, default_value_t = false)]
    pub insecure: bool,

    /// Config file (default: ~/.catalyst-chat/config.yaml)
    #[arg(long, env = "CATALYST_CHAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show your own lines in the transcript
    #[arg(long, default_value_t = false)]
    pub echo: bool,

    /// Where to write logs
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            mode: self.mode,
            relay_route: self.relay_route.clone(),
            timeout_secs: self.timeout,
            insecure: self.insecure,
            echo: self.echo,
            log_file: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_command_and_flags() {
        let args = Args::try_parse_from([
            "catalyst-chat",
            "--mode",
            "direct",
            "--timeout",
            "10",
            "GET /dna/intent/api/v1/site",
        ])
        .unwrap();
        assert_eq!(args.command.as_deref(), Some("GET /dna/intent/api/v1/site"));

        let overrides = args.overrides();
        assert_eq!(overrides.mode, Some(TransportMode::Direct));
        assert_eq!(overrides.timeout_secs, Some(10));
        assert!(!overrides.insecure);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["catalyst-chat", "--mode", "smoke-signal"]).is_err());
    }
}
