//! Serde shapes of the service's JSON bodies. Nothing outside this crate
//! sees them; replies cross into the core as plain values.

use serde::{Deserialize, Serialize};
use zen_core::ReplyBody;

#[derive(Debug, Serialize)]
pub(crate) struct DownloadRequestBody<'a> {
    pub url: &'a str,
}

/// The fields this client understands in an extraction response. Unknown
/// fields are ignored; a body that does not parse at all yields `None`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ExtractionResponseBody {
    status: Option<String>,
    detail: Option<String>,
    message: Option<String>,
    download_link: Option<String>,
    filename: Option<String>,
    title: Option<String>,
}

pub(crate) fn decode_reply_body(text: &str) -> Option<ReplyBody> {
    let body: ExtractionResponseBody = serde_json::from_str(text).ok()?;
    Some(ReplyBody {
        status: body.status,
        detail: body.detail,
        message: body.message,
        download_link: body.download_link,
        filename: body.filename,
        title: body.title,
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct HealthResponseBody {
    pub status: String,
    pub service: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::decode_reply_body;

    #[test]
    fn decodes_known_fields_and_ignores_extras() {
        let body = decode_reply_body(
            r#"{"status":"success","download_link":"/downloads/a.mp3","filename":"a.mp3","title":"Song","bitrate":320}"#,
        )
        .unwrap();
        assert_eq!(body.status.as_deref(), Some("success"));
        assert_eq!(body.download_link.as_deref(), Some("/downloads/a.mp3"));
        assert_eq!(body.filename.as_deref(), Some("a.mp3"));
        assert_eq!(body.title.as_deref(), Some("Song"));
        assert_eq!(body.detail, None);
    }

    #[test]
    fn unparseable_body_yields_none() {
        assert!(decode_reply_body("<html>teapot</html>").is_none());
        assert!(decode_reply_body("").is_none());
        // Wrong field type counts as unparseable, not as a partial decode.
        assert!(decode_reply_body(r#"{"detail":[{"loc":["body"]}]}"#).is_none());
    }

    #[test]
    fn empty_object_decodes_to_empty_fields() {
        let body = decode_reply_body("{}").unwrap();
        assert_eq!(body.status, None);
        assert_eq!(body.detail, None);
    }
}
