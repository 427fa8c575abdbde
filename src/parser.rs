//! Command language: `METHOD /path [data:<json>]`

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{ParseError, ParseFailure};
use crate::models::{Command, OutboundRequest};

fn command_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)^(?P<method>\S+)\s+(?P<path>\S+)(?:\s+(?i:data):(?P<data>.+))?$")
            .expect("command pattern is valid")
    })
}

/// Parse one input line
///
/// Returns `Ok(None)` for blank input (nothing to send).
pub fn parse(raw_line: &str) -> Result<Option<Command>, ParseError> {
    let line = raw_line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fail = |reason| ParseError {
        raw_input: raw_line.to_string(),
        reason,
    };

    let caps = command_regex()
        .captures(line)
        .ok_or_else(|| fail(ParseFailure::Format))?;

    let payload: Option<Value> = match caps.name("data") {
        Some(data) => Some(
            serde_json::from_str(data.as_str())
                .map_err(|e| fail(ParseFailure::InvalidJson(e.to_string())))?,
        ),
        None => None,
    };

    Ok(Some(Command {
        method: caps["method"].to_uppercase(),
        path: caps["path"].to_string(),
        payload,
    }))
}

/// Turn a parsed command into the request descriptor handed to the transport
pub fn build_request(cmd: Command) -> OutboundRequest {
    OutboundRequest {
        method: cmd.method,
        endpoint_path: cmd.path,
        data: cmd.payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_ok(line: &str) -> Command {
        parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_simple_get() {
        let cmd = parse_ok("get /dna/intent/api/v1/site");
        assert_eq!(cmd.method, "GET");
        assert_eq!(cmd.path, "/dna/intent/api/v1/site");
        assert_eq!(cmd.payload, None);
    }

    #[test]
    fn test_parse_path_is_not_rewritten() {
        let cmd = parse_ok("Delete /Templates/ABC?force=True");
        assert_eq!(cmd.method, "DELETE");
        assert_eq!(cmd.path, "/Templates/ABC?force=True");
    }

    #[test]
    fn test_parse_post_with_data() {
        let cmd = parse_ok(r#"POST /templates data:{"name":"T1","tags":[1,2]}"#);
        assert_eq!(cmd.method, "POST");
        assert_eq!(cmd.path, "/templates");
        assert_eq!(cmd.payload, Some(json!({"name": "T1", "tags": [1, 2]})));
    }

    #[test]
    fn test_data_keyword_is_case_insensitive() {
        let cmd = parse_ok(r#"put /x DATA:{"a": 1}"#);
        assert_eq!(cmd.payload, Some(json!({"a": 1})));
    }

    #[test]
    fn test_data_may_be_any_json_value() {
        assert_eq!(parse_ok("POST /x data:[1,2]").payload, Some(json!([1, 2])));
        assert_eq!(parse_ok("POST /x data:42").payload, Some(json!(42)));
        assert_eq!(parse_ok(r#"POST /x data:"s""#).payload, Some(json!("s")));
        assert_eq!(parse_ok("POST /x data:null").payload, Some(json!(null)));
    }

    #[test]
    fn test_data_may_contain_spaces() {
        let cmd = parse_ok(r#"POST /x data:{ "name" : "two words" }"#);
        assert_eq!(cmd.payload, Some(json!({"name": "two words"})));
    }

    #[test]
    fn test_blank_input_is_nothing_to_send() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   \t "), Ok(None));
    }

    #[test]
    fn test_missing_path_is_format_error() {
        let err = parse("frobnicate").unwrap_err();
        assert_eq!(err.reason, ParseFailure::Format);
        assert_eq!(err.raw_input, "frobnicate");
    }

    #[test]
    fn test_extra_tokens_are_format_error() {
        let err = parse("GET /a /b").unwrap_err();
        assert_eq!(err.reason, ParseFailure::Format);
    }

    #[test]
    fn test_bad_json_rejects_whole_command() {
        let err = parse("POST /x data:{bad json}").unwrap_err();
        match err.reason {
            ParseFailure::InvalidJson(msg) => assert!(msg.contains("line 1")),
            other => panic!("expected json failure, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_data_tail_is_format_error() {
        let err = parse("POST /x data:").unwrap_err();
        assert_eq!(err.reason, ParseFailure::Format);
    }

    #[test]
    fn test_build_request_round_trip() {
        let tail = r#"{"name":"T1","nested":{"k":[true,null]}}"#;
        let line = format!("post /templates data:{tail}");
        let req = build_request(parse_ok(&line));
        let expected: serde_json::Value = serde_json::from_str(tail).unwrap();
        assert_eq!(req.method, "POST");
        assert_eq!(req.endpoint_path, "/templates");
        assert_eq!(req.data, Some(expected));
    }

    #[test]
    fn test_build_request_without_payload() {
        let req = build_request(parse_ok("GET /a"));
        assert_eq!(req.data, None);
    }
}
