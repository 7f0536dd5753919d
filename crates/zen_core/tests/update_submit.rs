use std::sync::Once;

use zen_core::{
    update, AppState, Effect, ErrorKind, ExchangeReply, Msg, Severity, SubmissionResult,
    SubmissionState, EMPTY_INPUT_TEXT, PROCESSING_STATUS_TEXT, UNSUPPORTED_URL_TEXT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn type_input(state: AppState, input: &str) -> AppState {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    state
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    update(type_input(state, input), Msg::SubmitRequested)
}

fn count_busy(effects: &[Effect], raised: bool) -> usize {
    effects
        .iter()
        .filter(|effect| matches!(effect, Effect::SetBusy(value) if *value == raised))
        .count()
}

#[test]
fn empty_input_fails_locally_without_dispatch() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "   ");

    assert_eq!(state.submission(), SubmissionState::Failed);
    assert_eq!(
        state.last_result(),
        Some(&SubmissionResult::Failure {
            reason: ErrorKind::InvalidInput,
            message: EMPTY_INPUT_TEXT.to_string(),
        })
    );
    assert_eq!(
        effects,
        vec![
            Effect::SetStatus {
                text: EMPTY_INPUT_TEXT.to_string(),
                severity: Severity::Error,
            },
            Effect::FocusInput,
        ]
    );
}

#[test]
fn unsupported_url_fails_locally_without_dispatch() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "not a url");

    assert_eq!(state.submission(), SubmissionState::Failed);
    assert_eq!(
        state.last_result(),
        Some(&SubmissionResult::Failure {
            reason: ErrorKind::InvalidInput,
            message: UNSUPPORTED_URL_TEXT.to_string(),
        })
    );
    // No dispatch and no busy signal on the local-rejection path.
    assert!(!effects.iter().any(|e| matches!(e, Effect::Dispatch { .. })));
    assert_eq!(count_busy(&effects, true), 0);
    assert_eq!(count_busy(&effects, false), 0);
}

#[test]
fn valid_url_enters_submitting_and_dispatches_once() {
    init_logging();
    let (mut state, effects) = submit(AppState::new(), "https://youtu.be/abc123");

    assert_eq!(state.submission(), SubmissionState::Submitting);
    assert!(state.view().busy);
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![
            Effect::SetBusy(true),
            Effect::ClearResults,
            Effect::SetStatus {
                text: PROCESSING_STATUS_TEXT.to_string(),
                severity: Severity::Processing,
            },
            Effect::Dispatch {
                attempt_id: 1,
                url: "https://youtu.be/abc123".to_string(),
            },
        ]
    );
}

#[test]
fn input_is_trimmed_before_dispatch() {
    init_logging();
    let (_state, effects) = submit(AppState::new(), "  https://youtu.be/abc123  ");

    assert!(effects.iter().any(|effect| matches!(
        effect,
        Effect::Dispatch { url, .. } if url == "https://youtu.be/abc123"
    )));
}

#[test]
fn submit_while_submitting_is_refused() {
    init_logging();
    let (state, first) = submit(AppState::new(), "https://youtu.be/abc123");
    assert_eq!(count_busy(&first, true), 1);

    // Second request while the first attempt is still in flight.
    let (state, effects) = update(state, Msg::SubmitRequested);

    assert!(effects.is_empty());
    assert_eq!(state.submission(), SubmissionState::Submitting);
    assert_eq!(state.current_attempt(), 1);
}

#[test]
fn attempt_ids_increase_across_attempts() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://youtu.be/first");
    let (state, _) = update(
        state,
        Msg::ExchangeFinished {
            attempt_id: 1,
            reply: ExchangeReply::TransportFailed {
                error: "tcp connect error".to_string(),
            },
        },
    );
    assert_eq!(state.submission(), SubmissionState::Failed);

    let (state, effects) = submit(state, "https://youtu.be/second");
    assert_eq!(state.current_attempt(), 2);
    assert!(effects.iter().any(|effect| matches!(
        effect,
        Effect::Dispatch { attempt_id: 2, .. }
    )));
}

#[test]
fn typing_clears_a_failed_status() {
    init_logging();
    let (state, _) = submit(AppState::new(), "not a url");
    assert_eq!(state.submission(), SubmissionState::Failed);

    let (mut state, effects) = update(state, Msg::InputChanged("y".to_string()));

    assert_eq!(state.submission(), SubmissionState::Idle);
    assert_eq!(state.last_result(), None);
    assert_eq!(state.input(), "y");
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::SetStatus {
            text: String::new(),
            severity: Severity::Neutral,
        }]
    );
}

#[test]
fn typing_while_submitting_only_updates_input() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://youtu.be/abc123");

    let (state, effects) = update(state, Msg::InputChanged("https://youtu.be/x".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.submission(), SubmissionState::Submitting);
    assert_eq!(state.input(), "https://youtu.be/x");
}

#[test]
fn tick_requests_repaint_only_while_submitting() {
    init_logging();
    let (mut idle, effects) = update(AppState::new(), Msg::Tick);
    assert!(effects.is_empty());
    assert!(!idle.consume_dirty());

    let (mut submitting, _) = submit(idle, "https://youtu.be/abc123");
    assert!(submitting.consume_dirty());

    let (mut submitting, effects) = update(submitting, Msg::Tick);
    assert!(effects.is_empty());
    assert!(submitting.consume_dirty());
}
