use crate::{SubmissionResult, SubmissionState};

/// Screen-facing projection of the orchestrator state. The status line and
/// result area are driven by effects; the view carries what the screen
/// derives on its own (input echo, busy spinner, resting label).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub submission: SubmissionState,
    pub input: String,
    pub busy: bool,
    pub last_result: Option<SubmissionResult>,
    pub dirty: bool,
}
