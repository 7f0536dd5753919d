use crate::view_model::AppViewModel;

/// Identifier for one submit cycle, increasing per dispatched attempt.
pub type AttemptId = u64;

/// The single per-session state driving what the user is shown.
///
/// `Succeeded`/`Failed` are the resting labels of a resolved attempt; for
/// accepting a new submission they count as idle. Only `Submitting` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Classified failure categories surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any network call.
    InvalidInput,
    /// The service refused the request as a bad one (400).
    ClientRejected,
    /// The service reported 408, or the transport timed out.
    Timeout,
    /// 5xx from the service.
    ServerFault,
    /// Network-level failure, no HTTP status available.
    TransportFailure,
    Unrecognized,
}

/// Terminal outcome of one attempt, produced exactly once per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success {
        download_uri: String,
        filename: String,
        display_title: Option<String>,
    },
    Failure {
        reason: ErrorKind,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    submission: SubmissionState,
    input: String,
    attempt_seq: AttemptId,
    last_result: Option<SubmissionResult>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Id of the most recently dispatched attempt (0 before the first one).
    pub fn current_attempt(&self) -> AttemptId {
        self.attempt_seq
    }

    pub fn last_result(&self) -> Option<&SubmissionResult> {
        self.last_result.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            submission: self.submission,
            input: self.input.clone(),
            busy: self.submission == SubmissionState::Submitting,
            last_result: self.last_result.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a repaint is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn reset_to_idle(&mut self) {
        self.submission = SubmissionState::Idle;
        self.last_result = None;
        self.dirty = true;
    }

    /// Enters `Submitting` and hands out the new attempt's id.
    pub(crate) fn begin_attempt(&mut self) -> AttemptId {
        self.submission = SubmissionState::Submitting;
        self.last_result = None;
        self.attempt_seq += 1;
        self.dirty = true;
        self.attempt_seq
    }

    /// Records the attempt's terminal outcome and the matching resting label.
    pub(crate) fn resolve(&mut self, result: SubmissionResult) {
        self.submission = match result {
            SubmissionResult::Success { .. } => SubmissionState::Succeeded,
            SubmissionResult::Failure { .. } => SubmissionState::Failed,
        };
        self.last_result = Some(result);
        self.dirty = true;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
