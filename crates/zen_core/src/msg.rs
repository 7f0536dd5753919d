use crate::AttemptId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User requested submission of the current input (Enter or button).
    SubmitRequested,
    /// The HTTP exchange for an attempt finished with a reply.
    ExchangeFinished {
        attempt_id: AttemptId,
        reply: ExchangeReply,
    },
    /// The produced file finished saving into the downloads directory.
    FileSaved { attempt_id: AttemptId, path: String },
    /// Saving the produced file failed.
    FileSaveFailed { attempt_id: AttemptId, error: String },
    /// UI/render tick to coalesce rendering.
    Tick,
}

/// Transport-level outcome of one exchange, as observed by the client layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeReply {
    /// An HTTP response arrived, with any status code.
    Delivered(DeliveredReply),
    /// No response at all; the transport failed outright.
    TransportFailed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredReply {
    pub http_status: u16,
    /// Decoded body fields; `None` when the body was not parseable JSON.
    pub body: Option<ReplyBody>,
}

/// The fields this client understands in a service response body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplyBody {
    pub status: Option<String>,
    pub detail: Option<String>,
    pub message: Option<String>,
    pub download_link: Option<String>,
    pub filename: Option<String>,
    pub title: Option<String>,
}
