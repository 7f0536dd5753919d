//! Zen core: pure submission state machine and view-model helpers.
mod classify;
mod effect;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use classify::{
    classify, Classified, BAD_REQUEST_TEXT, FALLBACK_ERROR_TEXT, NETWORK_ERROR_TEXT,
    REQUEST_TIMEOUT_TEXT, SERVER_ERROR_TEXT, TRANSPORT_TIMEOUT_TEXT,
};
pub use effect::{Effect, Severity};
pub use msg::{DeliveredReply, ExchangeReply, Msg, ReplyBody};
pub use state::{AppState, AttemptId, ErrorKind, SubmissionResult, SubmissionState};
pub use update::{
    update, COMPLETE_STATUS_TEXT, EMPTY_INPUT_TEXT, PROCESSING_ERROR_TEXT,
    PROCESSING_STATUS_TEXT, SAVE_FAILED_TEXT, UNSUPPORTED_URL_TEXT,
};
pub use validate::is_acceptable;
pub use view_model::AppViewModel;
