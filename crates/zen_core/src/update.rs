use crate::classify::classify;
use crate::msg::{DeliveredReply, ExchangeReply, Msg};
use crate::state::{AppState, AttemptId, ErrorKind, SubmissionResult, SubmissionState};
use crate::validate;
use crate::{Effect, Severity};

/// Shown when submit is requested with nothing in the input box.
pub const EMPTY_INPUT_TEXT: &str = "Please paste a valid URL.";
/// Shown when the input does not match any supported URL shape.
pub const UNSUPPORTED_URL_TEXT: &str = "Please provide a valid YouTube URL.";
/// Status line while an attempt is in flight.
pub const PROCESSING_STATUS_TEXT: &str = "Analyzing and processing...";
/// Status line once the service reports a finished extraction.
pub const COMPLETE_STATUS_TEXT: &str = "Complete! Your audio is ready.";
/// Fallback when a 2xx reply carries a failing or unusable body.
pub const PROCESSING_ERROR_TEXT: &str = "An error occurred during processing.";
/// Shown when the produced file could not be saved locally.
pub const SAVE_FAILED_TEXT: &str =
    "Could not save the file automatically. Please use the download link.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            // Typing while a failure is on display dismisses it; a running
            // or succeeded attempt is left alone.
            if state.submission() == SubmissionState::Failed {
                state.reset_to_idle();
                vec![Effect::SetStatus {
                    text: String::new(),
                    severity: Severity::Neutral,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::SubmitRequested => submit(&mut state),
        Msg::ExchangeFinished { attempt_id, reply } => {
            exchange_finished(&mut state, attempt_id, reply)
        }
        Msg::FileSaved { attempt_id, path } => {
            if attempt_on_display(&state, attempt_id) {
                state.mark_dirty();
                vec![Effect::SetStatus {
                    text: format!("Saved to {path}"),
                    severity: Severity::Success,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::FileSaveFailed { attempt_id, error: _ } => {
            // The raw error stays in the diagnostics log; the affordance
            // remains visible so the user can still fetch the file.
            if attempt_on_display(&state, attempt_id) {
                state.mark_dirty();
                vec![Effect::SetStatus {
                    text: SAVE_FAILED_TEXT.to_string(),
                    severity: Severity::Error,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::Tick => {
            if state.submission() == SubmissionState::Submitting {
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}

/// Validates the current input and, if it passes, moves to `Submitting`
/// with exactly one dispatch effect. A no-op while an attempt is in flight.
fn submit(state: &mut AppState) -> Vec<Effect> {
    if state.submission() == SubmissionState::Submitting {
        return Vec::new();
    }

    let trimmed = state.input().trim().to_string();
    if trimmed.is_empty() {
        return reject(state, EMPTY_INPUT_TEXT);
    }
    if !validate::is_acceptable(&trimmed) {
        return reject(state, UNSUPPORTED_URL_TEXT);
    }

    let attempt_id = state.begin_attempt();
    vec![
        Effect::SetBusy(true),
        Effect::ClearResults,
        Effect::SetStatus {
            text: PROCESSING_STATUS_TEXT.to_string(),
            severity: Severity::Processing,
        },
        Effect::Dispatch {
            attempt_id,
            url: trimmed,
        },
    ]
}

// Local validation failures never touch the busy flag or the result area.
fn reject(state: &mut AppState, message: &str) -> Vec<Effect> {
    state.resolve(SubmissionResult::Failure {
        reason: ErrorKind::InvalidInput,
        message: message.to_string(),
    });
    vec![
        Effect::SetStatus {
            text: message.to_string(),
            severity: Severity::Error,
        },
        Effect::FocusInput,
    ]
}

fn exchange_finished(
    state: &mut AppState,
    attempt_id: AttemptId,
    reply: ExchangeReply,
) -> Vec<Effect> {
    // A reply may only resolve the attempt it belongs to; anything else is
    // a late echo of an attempt that already finished.
    if state.submission() != SubmissionState::Submitting
        || attempt_id != state.current_attempt()
    {
        return Vec::new();
    }

    match interpret(reply) {
        SubmissionResult::Success {
            download_uri,
            filename,
            display_title,
        } => {
            let effects = vec![
                Effect::SetStatus {
                    text: COMPLETE_STATUS_TEXT.to_string(),
                    severity: Severity::Success,
                },
                Effect::ShowDownload {
                    uri: download_uri.clone(),
                    filename: filename.clone(),
                    title: display_title.clone(),
                },
                Effect::SaveFile {
                    attempt_id,
                    uri: download_uri.clone(),
                    filename: filename.clone(),
                },
                Effect::SetBusy(false),
            ];
            state.resolve(SubmissionResult::Success {
                download_uri,
                filename,
                display_title,
            });
            effects
        }
        SubmissionResult::Failure { reason, message } => {
            let effects = vec![
                Effect::SetStatus {
                    text: message.clone(),
                    severity: Severity::Error,
                },
                Effect::SetBusy(false),
            ];
            state.resolve(SubmissionResult::Failure { reason, message });
            effects
        }
    }
}

/// Folds one exchange reply into the attempt's terminal outcome.
fn interpret(reply: ExchangeReply) -> SubmissionResult {
    match reply {
        ExchangeReply::Delivered(delivered) => interpret_delivered(delivered),
        ExchangeReply::TransportFailed { error } => {
            let classified = classify(None, None, Some(&error));
            SubmissionResult::Failure {
                reason: classified.kind,
                message: classified.message,
            }
        }
    }
}

fn interpret_delivered(delivered: DeliveredReply) -> SubmissionResult {
    let DeliveredReply { http_status, body } = delivered;

    if !(200..300).contains(&http_status) {
        let body = body.unwrap_or_default();
        let server_message = body
            .detail
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| body.message.as_deref().filter(|m| !m.is_empty()));
        let classified = classify(Some(http_status), server_message, None);
        return SubmissionResult::Failure {
            reason: classified.kind,
            message: classified.message,
        };
    }

    // 2xx transport. The body's own status field still has to agree.
    let Some(body) = body else {
        return SubmissionResult::Failure {
            reason: ErrorKind::Unrecognized,
            message: PROCESSING_ERROR_TEXT.to_string(),
        };
    };

    if body.status.as_deref() == Some("success") {
        if let (Some(download_link), Some(filename)) = (body.download_link, body.filename) {
            return SubmissionResult::Success {
                download_uri: download_link,
                filename,
                display_title: body.title,
            };
        }
        // Success status without the payload fields is still malformed.
        return SubmissionResult::Failure {
            reason: ErrorKind::Unrecognized,
            message: PROCESSING_ERROR_TEXT.to_string(),
        };
    }

    SubmissionResult::Failure {
        reason: ErrorKind::Unrecognized,
        message: body
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| PROCESSING_ERROR_TEXT.to_string()),
    }
}

fn attempt_on_display(state: &AppState, attempt_id: AttemptId) -> bool {
    state.submission() == SubmissionState::Succeeded && attempt_id == state.current_attempt()
}
