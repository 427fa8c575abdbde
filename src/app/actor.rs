//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderEvent, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderEvent>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderEvent>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    ///
    /// Returns the final state once input has ended and every dispatched
    /// request has been answered.
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) -> AppState {
        let mut accepting_input = true;

        loop {
            if !accepting_input && self.state.is_idle() {
                break;
            }

            tokio::select! {
                event = ui_rx.recv(), if accepting_input => {
                    match event {
                        Some(UiEvent::Submit(line)) => {
                            if let Some(cmd) = self.state.submit(&line) {
                                if self.network_tx.send(cmd).is_err() {
                                    tracing::error!("Network actor is gone");
                                    break;
                                }
                            }
                        }
                        Some(UiEvent::Quit) | None => {
                            tracing::debug!(pending = self.state.pending.len(), "Input closed");
                            accepting_input = false;
                        }
                    }
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                }
                else => break,
            }

            self.flush();
        }

        let _ = self.network_tx.send(NetworkCommand::Shutdown);
        self.state
    }

    fn flush(&mut self) {
        for event in self.state.take_render_events() {
            let _ = self.render_tx.send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ResponseBody;
    use serde_json::json;

    #[tokio::test]
    async fn test_quit_waits_for_in_flight_replies() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let app = tokio::spawn(AppActor::new(net_tx, render_tx).run(ui_rx, resp_rx));

        ui_tx.send(UiEvent::Submit("GET /dna/intent/api/v1/site".into())).unwrap();
        ui_tx.send(UiEvent::Quit).unwrap();

        let id = match net_cmd_rx.recv().await.unwrap() {
            NetworkCommand::Execute { id, .. } => id,
            other => panic!("unexpected command {other:?}"),
        };
        resp_tx
            .send(NetworkResponse::Completed {
                id,
                status: 200,
                body: ResponseBody::Json(json!({"id": 1})),
                time_ms: 3,
            })
            .unwrap();

        let state = app.await.unwrap();
        assert_eq!(state.log.len(), 2);
        assert!(matches!(net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown)));

        let mut entries = 0;
        while let Ok(event) = render_rx.try_recv() {
            if matches!(event, RenderEvent::Entry { .. }) {
                entries += 1;
            }
        }
        assert_eq!(entries, 2);
    }
}
