//! Network actor - runs HTTP requests in the Tokio async runtime

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_request};

/// Network actor that processes request commands
///
/// Each request runs in its own task, so replies come back in completion
/// order, not submission order.
pub struct NetworkActor {
    client: reqwest::Client,
    config: Arc<Config>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: Config, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(&config),
            config: Arc::new(config),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Execute { id, request }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let config = Arc::clone(&self.config);

                            self.active_requests.spawn(async move {
                                tracing::info!(id, method = %request.method, path = %request.endpoint_path, "Executing request");
                                let result = execute_request(&client, &config, request, id).await;
                                match &result {
                                    NetworkResponse::Completed { status, time_ms, .. } => {
                                        tracing::info!(id, status, time_ms, "Request completed");
                                    }
                                    NetworkResponse::Failed { message, time_ms, .. } => {
                                        tracing::warn!(id, time_ms, error = %message, "Request failed");
                                    }
                                }
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }

        // Dispatched requests run to completion
        while self.active_requests.join_next().await.is_some() {}
        tracing::debug!("Network actor stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutboundRequest;

    #[tokio::test]
    async fn test_every_request_gets_a_reply_with_its_id() {
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

        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(NetworkActor::new(config, resp_tx).run(cmd_rx));

        for id in [1, 2] {
            cmd_tx
                .send(NetworkCommand::Execute {
                    id,
                    request: OutboundRequest {
                        method: "GET".into(),
                        endpoint_path: "/dna/intent/api/v1/site".into(),
                        data: None,
                    },
                })
                .unwrap();
        }

        let mut ids = vec![resp_rx.recv().await.unwrap().id(), resp_rx.recv().await.unwrap().id()];
        ids.sort();
        assert_eq!(ids, vec![1, 2]);

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }
}
