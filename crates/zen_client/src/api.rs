use std::path::PathBuf;

use futures_util::StreamExt;

use zen_core::{DeliveredReply, ExchangeReply};

use crate::save::{sanitize_filename, AtomicFileWriter};
use crate::types::{ClientSettings, HealthReport, SaveError, SetupError};
use crate::wire::{decode_reply_body, DownloadRequestBody, HealthResponseBody};

#[async_trait::async_trait]
pub trait ExtractionApi: Send + Sync {
    /// Submit a URL for extraction. Transport failures are folded into the
    /// reply, so every dispatched attempt produces exactly one reply.
    async fn submit(&self, url: &str) -> ExchangeReply;

    /// Fetch the produced file behind `uri` and persist it under the
    /// configured downloads directory. Returns the final path.
    async fn save_file(&self, uri: &str, filename: &str) -> Result<PathBuf, SaveError>;

    async fn health(&self) -> Result<HealthReport, String>;
}

pub struct HttpExtractionApi {
    http: reqwest::Client,
    settings: ClientSettings,
}

impl HttpExtractionApi {
    /// Builds the HTTP client. No request deadline is set: extraction can
    /// legitimately run for minutes, and the service reports its own
    /// timeouts as 408 replies.
    pub fn new(settings: ClientSettings) -> Result<Self, SetupError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| SetupError::HttpClient(err.to_string()))?;
        Ok(Self { http, settings })
    }

    /// Stream the file behind `uri` into memory. Relative links resolve
    /// against the configured base URL; absolute links stand on their own.
    pub async fn fetch_file(&self, uri: &str) -> Result<Vec<u8>, SaveError> {
        let target = self
            .settings
            .base_url()
            .join(uri)
            .map_err(|err| SaveError::BadLink(format!("{uri}: {err}")))?;

        let response = self
            .http
            .get(target)
            .send()
            .await
            .map_err(|err| SaveError::Fetch(error_chain_text(&err)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SaveError::FileStatus(status.as_u16()));
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|err| SaveError::Fetch(error_chain_text(&err)))?;
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl ExtractionApi for HttpExtractionApi {
    async fn submit(&self, url: &str) -> ExchangeReply {
        let endpoint = match self.settings.base_url().join("api/download") {
            Ok(endpoint) => endpoint,
            Err(err) => {
                return ExchangeReply::TransportFailed {
                    error: err.to_string(),
                }
            }
        };

        let sent = self
            .http
            .post(endpoint)
            .json(&DownloadRequestBody { url })
            .send()
            .await;
        let response = match sent {
            Ok(response) => response,
            Err(err) => {
                return ExchangeReply::TransportFailed {
                    error: error_chain_text(&err),
                }
            }
        };

        let http_status = response.status().as_u16();
        // A reply that arrived but cannot be read or parsed still counts as
        // delivered; the status code carries the verdict.
        let body = match response.text().await {
            Ok(text) => decode_reply_body(&text),
            Err(_) => None,
        };
        ExchangeReply::Delivered(DeliveredReply { http_status, body })
    }

    async fn save_file(&self, uri: &str, filename: &str) -> Result<PathBuf, SaveError> {
        let bytes = self.fetch_file(uri).await?;
        let name = sanitize_filename(filename);
        let writer = AtomicFileWriter::new(self.settings.downloads_dir().to_path_buf());
        writer.write(&name, &bytes)
    }

    async fn health(&self) -> Result<HealthReport, String> {
        let endpoint = self
            .settings
            .base_url()
            .join("health")
            .map_err(|err| err.to_string())?;
        let response = self
            .http
            .get(endpoint)
            .send()
            .await
            .map_err(|err| error_chain_text(&err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("health endpoint answered {status}"));
        }
        let body: HealthResponseBody = response
            .json()
            .await
            .map_err(|err| error_chain_text(&err))?;
        Ok(HealthReport {
            status: body.status,
            service: body.service,
        })
    }
}

/// Flatten an error and its causes into one line. For connection failures
/// the informative part ("tcp connect error", "dns error") sits a level or
/// two down the source chain, not in the top-level message.
pub(crate) fn error_chain_text(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
