use client_logging::{client_info, client_warn};
use zen_client::{ClientEvent, ClientHandle};
use zen_core::{Effect, ExchangeReply, Msg};

use super::ui::Presenter;

/// Executes update effects: presentation effects go to the screen, client
/// effects to the background client.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(client: ClientHandle) -> Self {
        Self { client }
    }

    pub fn run(&self, presenter: &mut dyn Presenter, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SetStatus { text, severity } => presenter.set_status(&text, severity),
                Effect::ClearResults => presenter.clear_results(),
                Effect::ShowDownload {
                    uri,
                    filename,
                    title,
                } => presenter.show_download(&uri, &filename, title.as_deref()),
                Effect::SetBusy(busy) => presenter.set_busy(busy),
                Effect::FocusInput => presenter.focus_input(),
                Effect::Dispatch { attempt_id, url } => {
                    client_info!(
                        "Dispatch attempt={} url_len={} url={}",
                        attempt_id,
                        url.len(),
                        url
                    );
                    self.client.submit(attempt_id, url);
                }
                Effect::SaveFile {
                    attempt_id,
                    uri,
                    filename,
                } => {
                    self.client.save_file(attempt_id, uri, filename);
                }
            }
        }
    }

    /// Drain pending client events. The first that maps to a message is
    /// returned; health reports are logged and never reach the core.
    pub fn poll_msg(&self) -> Option<Msg> {
        while let Some(event) = self.client.try_recv() {
            match event {
                ClientEvent::ExchangeFinished { attempt_id, reply } => {
                    match &reply {
                        ExchangeReply::Delivered(delivered) => client_info!(
                            "Attempt {} answered with http status {}",
                            attempt_id,
                            delivered.http_status
                        ),
                        ExchangeReply::TransportFailed { error } => {
                            client_warn!("Attempt {} transport failure: {}", attempt_id, error)
                        }
                    }
                    return Some(Msg::ExchangeFinished { attempt_id, reply });
                }
                ClientEvent::FileSaved { attempt_id, path } => {
                    return Some(Msg::FileSaved {
                        attempt_id,
                        path: path.display().to_string(),
                    });
                }
                ClientEvent::FileSaveFailed { attempt_id, error } => {
                    return Some(Msg::FileSaveFailed { attempt_id, error });
                }
                ClientEvent::HealthProbed { result } => match result {
                    Ok(report) => client_info!(
                        "Service health: {} ({})",
                        report.status,
                        report.service.as_deref().unwrap_or("unknown")
                    ),
                    Err(err) => client_warn!("Health probe failed: {}", err),
                },
            }
        }
        None
    }

    pub fn probe_health(&self) {
        self.client.probe();
    }
}
