//! HTTP client wrapper - turns request descriptors into HTTP calls

use std::time::{Duration, Instant};

use reqwest::Method;

use crate::config::{Config, TransportMode};
use crate::messages::network::{NetworkResponse, ResponseBody};
use crate::models::OutboundRequest;

/// Join the base URL and a path, adding the leading slash when missing
fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Build the HTTP request for a descriptor
pub fn build_request(
    client: &reqwest::Client,
    config: &Config,
    request: &OutboundRequest,
) -> Result<reqwest::RequestBuilder, String> {
    let (method, url) = match config.mode {
        TransportMode::Relay => (Method::POST, join_url(&config.base_url, &config.relay_route)),
        TransportMode::Direct => {
            let method = Method::from_bytes(request.method.as_bytes())
                .map_err(|_| format!("Unsupported HTTP method: {}", request.method))?;
            (method, join_url(&config.base_url, &request.endpoint_path))
        }
    };

    let req_builder = client
        .request(method, url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json");

    // Relay always gets the full descriptor; direct calls only send non-null data
    Ok(match (config.mode, &request.data) {
        (TransportMode::Relay, _) => req_builder.json(request),
        (TransportMode::Direct, Some(data)) if !data.is_null() => req_builder.json(data),
        (TransportMode::Direct, _) => req_builder,
    })
}

/// Execute a request and return the decoded response
pub async fn execute_request(
    client: &reqwest::Client,
    config: &Config,
    request: OutboundRequest,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let elapsed = || start.elapsed().as_millis() as u64;

    let req_builder = match build_request(client, config, &request) {
        Ok(builder) => builder,
        Err(message) => {
            return NetworkResponse::Failed {
                id: request_id,
                message,
                time_ms: elapsed(),
            }
        }
    };

    match req_builder.send().await {
        Ok(resp) => {
            let status = resp.status().as_u16();
            match resp.text().await {
                Ok(body) => NetworkResponse::Completed {
                    id: request_id,
                    status,
                    body: ResponseBody::decode(body),
                    time_ms: elapsed(),
                },
                Err(e) => NetworkResponse::Failed {
                    id: request_id,
                    message: format!("Error reading body: {}", e),
                    time_ms: elapsed(),
                },
            }
        }
        Err(e) => {
            let message = if e.is_timeout() {
                format!("Request timed out ({}s)", config.timeout_secs)
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                format!("Request failed: {}", e)
            };
            NetworkResponse::Failed {
                id: request_id,
                message,
                time_ms: elapsed(),
            }
        }
    }
}

/// Create an HTTP client from the configuration
pub fn create_client(config: &Config) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .danger_accept_invalid_certs(config.insecure)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default HTTP client");
            reqwest::Client::new()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn config(mode: TransportMode) -> Config {
        Config {
            base_url: "http://catalyst.local:5001/".into(),
            mode,
            ..Config::default()
        }
    }

    fn descriptor(method: &str, path: &str, data: Option<Value>) -> OutboundRequest {
        OutboundRequest {
            method: method.into(),
            endpoint_path: path.into(),
            data,
        }
    }

    fn body_json(req: &reqwest::Request) -> Value {
        let bytes = req.body().and_then(|b| b.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_relay_wraps_descriptor() {
        let client = reqwest::Client::new();
        let outbound = descriptor("GET", "/dna/intent/api/v1/site", None);
        let req = build_request(&client, &config(TransportMode::Relay), &outbound)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(*req.method(), Method::POST);
        assert_eq!(req.url().as_str(), "http://catalyst.local:5001/api/catalyst/request");
        assert_eq!(
            body_json(&req),
            json!({"method": "GET", "endpoint_path": "/dna/intent/api/v1/site", "data": null})
        );
    }

    #[test]
    fn test_direct_uses_command_method_and_path() {
        let client = reqwest::Client::new();
        let outbound = descriptor("PUT", "templates/7", Some(json!({"name": "T1"})));
        let req = build_request(&client, &config(TransportMode::Direct), &outbound)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(*req.method(), Method::PUT);
        assert_eq!(req.url().as_str(), "http://catalyst.local:5001/templates/7");
        assert_eq!(body_json(&req), json!({"name": "T1"}));
        assert_eq!(req.headers()["Accept"], "application/json");
    }

    #[test]
    fn test_direct_without_data_has_no_body() {
        let client = reqwest::Client::new();
        let outbound = descriptor("DELETE", "/templates/7", None);
        let req = build_request(&client, &config(TransportMode::Direct), &outbound)
            .unwrap()
            .build()
            .unwrap();
        assert!(req.body().is_none());
    }

    #[test]
    fn test_direct_with_null_data_has_no_body() {
        let client = reqwest::Client::new();
        let cmd = crate::parser::parse("POST /templates data:null").unwrap().unwrap();
        let outbound = crate::parser::build_request(cmd);
        assert_eq!(outbound.data, Some(Value::Null));

        let req = build_request(&client, &config(TransportMode::Direct), &outbound)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(*req.method(), Method::POST);
        assert!(req.body().is_none());
    }

    #[test]
    fn test_direct_rejects_invalid_method_token() {
        let client = reqwest::Client::new();
        let outbound = descriptor("GE{T", "/x", None);
        let err = build_request(&client, &config(TransportMode::Direct), &outbound).unwrap_err();
        assert_eq!(err, "Unsupported HTTP method: GE{T");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_failure() {
        // Bind then drop to get a port nobody listens on
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = Config {
            base_url: format!("http://127.0.0.1:{port}"),
            timeout_secs: 5,
            ..Config::default()
        };
        let client = create_client(&config);
        let resp = execute_request(&client, &config, descriptor("GET", "/x", None), 9).await;

        match resp {
            NetworkResponse::Failed { id, message, .. } => {
                assert_eq!(id, 9);
                assert!(
                    message.starts_with("Connection failed") || message.starts_with("Request failed"),
                    "{message}"
                );
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
