use crate::AttemptId;

/// Operations the orchestrator asks the platform to perform. The first five
/// are the presentation port; the last two go to the remote-service client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the status line.
    SetStatus { text: String, severity: Severity },
    /// Empty the result area.
    ClearResults,
    /// Render the download affordance for a completed extraction.
    ShowDownload {
        uri: String,
        filename: String,
        title: Option<String>,
    },
    /// Raise or drop the busy indicator; submit is disabled while busy.
    SetBusy(bool),
    /// Move focus back to the URL input.
    FocusInput,
    /// Issue the extraction request for this attempt.
    Dispatch { attempt_id: AttemptId, url: String },
    /// Retrieve the produced file into the downloads directory.
    SaveFile {
        attempt_id: AttemptId,
        uri: String,
        filename: String,
    },
}

/// Display class of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Neutral,
    Processing,
    Success,
    Error,
}
