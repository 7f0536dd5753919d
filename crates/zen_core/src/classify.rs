use crate::ErrorKind;

/// Generic text when the service answered 5xx without a usable message.
pub const SERVER_ERROR_TEXT: &str = "Server error. Please try again later.";
/// Generic text for a 408 from the service.
pub const REQUEST_TIMEOUT_TEXT: &str =
    "Download timed out. The video might be too long or unavailable.";
/// Generic text for a 400 from the service.
pub const BAD_REQUEST_TEXT: &str =
    "Unable to process this URL. Please verify the link and try again.";
/// Text when the transport itself timed out (no HTTP status to go on).
pub const TRANSPORT_TIMEOUT_TEXT: &str =
    "Download timeout - the video may be too long or unavailable.";
/// Text for network-level connectivity failures.
pub const NETWORK_ERROR_TEXT: &str = "Network error. Please check your connection.";
/// Last-resort text when nothing more specific applies.
pub const FALLBACK_ERROR_TEXT: &str = "An error occurred. Please try again.";

// The only place transport-error text is sniffed. Lower-case substrings,
// matched against the lower-cased error text.
const TIMEOUT_MARKERS: &[&str] = &["timed out", "timeout"];
const NETWORK_MARKERS: &[&str] = &["network", "connect", "dns"];

/// A raw failure signal mapped to a user-facing category plus message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub kind: ErrorKind,
    pub message: String,
}

/// Maps a failure signal to what the user is told.
///
/// Precedence: a non-empty `server_message` always wins the message text;
/// the kind is derived from `http_status` when one exists, else from the
/// marker tables over `transport_error`; everything left is `Unrecognized`.
pub fn classify(
    http_status: Option<u16>,
    server_message: Option<&str>,
    transport_error: Option<&str>,
) -> Classified {
    let kind = derive_kind(http_status, transport_error);

    if let Some(message) = server_message.filter(|m| !m.is_empty()) {
        return Classified {
            kind,
            message: message.to_string(),
        };
    }

    let message = match (http_status, kind) {
        (Some(_), ErrorKind::ServerFault) => SERVER_ERROR_TEXT,
        (Some(_), ErrorKind::Timeout) => REQUEST_TIMEOUT_TEXT,
        (Some(_), ErrorKind::ClientRejected) => BAD_REQUEST_TEXT,
        (None, ErrorKind::Timeout) => TRANSPORT_TIMEOUT_TEXT,
        (None, ErrorKind::TransportFailure) => NETWORK_ERROR_TEXT,
        _ => FALLBACK_ERROR_TEXT,
    };

    Classified {
        kind,
        message: message.to_string(),
    }
}

fn derive_kind(http_status: Option<u16>, transport_error: Option<&str>) -> ErrorKind {
    match http_status {
        Some(status) if status >= 500 => ErrorKind::ServerFault,
        Some(408) => ErrorKind::Timeout,
        Some(400) => ErrorKind::ClientRejected,
        Some(_) => ErrorKind::Unrecognized,
        None => match transport_error {
            Some(text) if matches_marker(text, TIMEOUT_MARKERS) => ErrorKind::Timeout,
            Some(text) if matches_marker(text, NETWORK_MARKERS) => ErrorKind::TransportFailure,
            _ => ErrorKind::Unrecognized,
        },
    }
}

fn matches_marker(text: &str, markers: &[&str]) -> bool {
    let lowered = text.to_ascii_lowercase();
    markers.iter().any(|marker| lowered.contains(marker))
}
