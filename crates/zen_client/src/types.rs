use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;
use zen_core::{AttemptId, ExchangeReply};

/// Where the remote service lives and where produced files land.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    base_url: Url,
    downloads_dir: PathBuf,
}

impl ClientSettings {
    /// Validates the base URL: it must be absolute and speak http(s).
    pub fn new(base_url: &str, downloads_dir: PathBuf) -> Result<Self, SetupError> {
        let parsed = Url::parse(base_url)
            .map_err(|err| SetupError::InvalidBaseUrl(format!("{base_url}: {err}")))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(SetupError::UnsupportedScheme(other.to_string())),
        }
        Ok(Self {
            base_url: parsed,
            downloads_dir,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }
}

/// What the background client reports back to the platform loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// Exactly one per dispatched attempt; errors are folded into the reply.
    ExchangeFinished {
        attempt_id: AttemptId,
        reply: ExchangeReply,
    },
    FileSaved {
        attempt_id: AttemptId,
        path: PathBuf,
    },
    FileSaveFailed {
        attempt_id: AttemptId,
        error: String,
    },
    HealthProbed {
        result: Result<HealthReport, String>,
    },
}

/// Decoded `/health` answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub status: String,
    pub service: Option<String>,
}

/// Startup-time failures; a submission never produces these.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("server url is not a valid absolute url: {0}")]
    InvalidBaseUrl(String),
    #[error("server url must use http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("could not build http client: {0}")]
    HttpClient(String),
}

/// Failures while retrieving or writing a produced file.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("invalid download link: {0}")]
    BadLink(String),
    #[error("file request failed: {0}")]
    Fetch(String),
    #[error("file request returned http status {0}")]
    FileStatus(u16),
    #[error("downloads directory missing or not writable: {0}")]
    DownloadsDir(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
