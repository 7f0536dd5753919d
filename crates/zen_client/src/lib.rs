//! Zen client: the remote-service boundary for the submission pipeline.
mod api;
mod handle;
mod save;
mod types;
mod wire;

pub use api::{ExtractionApi, HttpExtractionApi};
pub use handle::ClientHandle;
pub use save::{ensure_downloads_dir, sanitize_filename, AtomicFileWriter, FALLBACK_FILENAME};
pub use types::{ClientEvent, ClientSettings, HealthReport, SaveError, SetupError};
