//! Startup configuration: where the extraction service lives and where
//! saved files land.

use std::path::PathBuf;

use zen_client::{ClientSettings, SetupError};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
pub const SERVER_URL_ENV: &str = "ZEN_SERVER_URL";

/// First CLI argument wins, then the environment, then the default.
pub fn resolve_server_url(arg: Option<String>, env: Option<String>) -> String {
    arg.map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| env.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()))
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
}

/// Saved files land in `{cwd}/downloads`, created on first save.
pub fn load() -> Result<ClientSettings, SetupError> {
    let server_url = resolve_server_url(
        std::env::args().nth(1),
        std::env::var(SERVER_URL_ENV).ok(),
    );
    let downloads_dir = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("downloads");
    ClientSettings::new(&server_url, downloads_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_beats_environment() {
        let url = resolve_server_url(
            Some("http://one:1".to_string()),
            Some("http://two:2".to_string()),
        );
        assert_eq!(url, "http://one:1");
    }

    #[test]
    fn environment_beats_default() {
        let url = resolve_server_url(None, Some("http://two:2".to_string()));
        assert_eq!(url, "http://two:2");
    }

    #[test]
    fn blank_values_fall_through_to_default() {
        let url = resolve_server_url(Some("   ".to_string()), Some(String::new()));
        assert_eq!(url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn values_are_trimmed() {
        let url = resolve_server_url(Some("  http://one:1  ".to_string()), None);
        assert_eq!(url, "http://one:1");
    }
}
