use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use zen_core::AttemptId;

use crate::api::{ExtractionApi, HttpExtractionApi};
use crate::types::{ClientEvent, ClientSettings, SetupError};

enum ClientCommand {
    Submit {
        attempt_id: AttemptId,
        url: String,
    },
    SaveFile {
        attempt_id: AttemptId,
        uri: String,
        filename: String,
    },
    Probe,
}

/// Front door to the background client: commands go in over a channel,
/// events come back the same way. The worker thread owns the runtime.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, SetupError> {
        let api = Arc::new(HttpExtractionApi::new(settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, attempt_id: AttemptId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Submit {
            attempt_id,
            url: url.into(),
        });
    }

    pub fn save_file(
        &self,
        attempt_id: AttemptId,
        uri: impl Into<String>,
        filename: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(ClientCommand::SaveFile {
            attempt_id,
            uri: uri.into(),
            filename: filename.into(),
        });
    }

    pub fn probe(&self) {
        let _ = self.cmd_tx.send(ClientCommand::Probe);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<ClientEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: &dyn ExtractionApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Submit { attempt_id, url } => {
            let reply = api.submit(&url).await;
            let _ = event_tx.send(ClientEvent::ExchangeFinished { attempt_id, reply });
        }
        ClientCommand::SaveFile {
            attempt_id,
            uri,
            filename,
        } => match api.save_file(&uri, &filename).await {
            Ok(path) => {
                client_info!("Saved file for attempt {} to {:?}", attempt_id, path);
                let _ = event_tx.send(ClientEvent::FileSaved { attempt_id, path });
            }
            Err(err) => {
                client_warn!("Save for attempt {} failed: {}", attempt_id, err);
                let _ = event_tx.send(ClientEvent::FileSaveFailed {
                    attempt_id,
                    error: err.to_string(),
                });
            }
        },
        ClientCommand::Probe => {
            let result = api.health().await;
            let _ = event_tx.send(ClientEvent::HealthProbed { result });
        }
    }
}
