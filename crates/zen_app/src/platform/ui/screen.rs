use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use zen_client::FALLBACK_FILENAME;
use zen_core::{AppViewModel, Severity, SubmissionState};

use super::palette::{severity_color, DIM_COLOR, TITLE_COLOR};
use super::Presenter;

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const INPUT_PROMPT: &str = "YouTube URL: ";

/// The download affordance, kept on screen until the next submission
/// clears it.
struct DownloadCard {
    label: String,
    filename: String,
    link: String,
}

/// Full-redraw terminal screen. Presentation effects land in retained
/// fields; `draw` repaints everything from those fields plus the view.
pub struct Screen<W: Write> {
    out: W,
    base_url: String,
    status_text: String,
    status_severity: Severity,
    card: Option<DownloadCard>,
    busy: bool,
    spinner_frame: usize,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, base_url: String) -> Self {
        Self {
            out,
            base_url,
            status_text: String::new(),
            status_severity: Severity::Neutral,
            card: None,
            busy: false,
            spinner_frame: 0,
        }
    }

    pub fn draw(&mut self, view: &AppViewModel) -> io::Result<()> {
        if view.busy {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }

        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(
            self.out,
            SetForegroundColor(TITLE_COLOR),
            Print("Zen Downloader"),
            SetForegroundColor(DIM_COLOR),
            Print(" - personal audio extractor"),
            ResetColor
        )?;
        queue!(
            self.out,
            MoveTo(0, 1),
            SetForegroundColor(DIM_COLOR),
            Print(format!("Server: {}", self.base_url)),
            ResetColor
        )?;

        queue!(self.out, MoveTo(0, 2), Print(INPUT_PROMPT), Print(&view.input))?;

        queue!(
            self.out,
            MoveTo(0, 3),
            SetForegroundColor(DIM_COLOR),
            Print(format!("State: {}", submission_label(view.submission))),
            ResetColor
        )?;

        if view.busy || !self.status_text.is_empty() {
            let line = if view.busy {
                format!("{} {}", SPINNER_FRAMES[self.spinner_frame], self.status_text)
            } else {
                self.status_text.clone()
            };
            queue!(
                self.out,
                MoveTo(0, 5),
                SetForegroundColor(severity_color(self.status_severity)),
                Print(line),
                ResetColor
            )?;
        }

        if let Some(card) = &self.card {
            queue!(
                self.out,
                MoveTo(0, 7),
                Print(format!("Download: {}", card.label))
            )?;
            queue!(
                self.out,
                MoveTo(0, 8),
                SetForegroundColor(DIM_COLOR),
                Print(format!("  File: {}", card.filename)),
                ResetColor
            )?;
            queue!(self.out, MoveTo(0, 9), Print(format!("  Link: {}", card.link)))?;
        }

        let footer = if self.busy {
            "Esc: quit (submission in progress)"
        } else {
            "Enter: submit    Esc: quit"
        };
        queue!(
            self.out,
            MoveTo(0, 11),
            SetForegroundColor(DIM_COLOR),
            Print(footer),
            ResetColor
        )?;

        // Park the cursor at the end of the URL being typed.
        let col = INPUT_PROMPT.chars().count() + view.input.chars().count();
        queue!(self.out, MoveTo(col.min(u16::MAX as usize) as u16, 2))?;
        self.out.flush()
    }
}

impl<W: Write> Presenter for Screen<W> {
    fn set_status(&mut self, text: &str, severity: Severity) {
        self.status_text = text.to_string();
        self.status_severity = severity;
    }

    fn clear_results(&mut self) {
        self.card = None;
    }

    fn show_download(&mut self, uri: &str, filename: &str, title: Option<&str>) {
        let label = title
            .filter(|t| !t.is_empty())
            .unwrap_or(FALLBACK_FILENAME)
            .to_string();
        self.card = Some(DownloadCard {
            label,
            filename: filename.to_string(),
            link: display_link(&self.base_url, uri),
        });
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        if !busy {
            self.spinner_frame = 0;
        }
    }

    fn focus_input(&mut self) {
        // Single input field; the cursor parks there on every draw.
    }
}

fn submission_label(submission: SubmissionState) -> &'static str {
    match submission {
        SubmissionState::Idle => "Idle",
        SubmissionState::Submitting => "Working",
        SubmissionState::Succeeded => "Done",
        SubmissionState::Failed => "Failed",
    }
}

/// Absolute links pass through; service-relative ones resolve against the
/// configured base so the shown link is usable outside this terminal.
fn display_link(base_url: &str, uri: &str) -> String {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        return uri.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        uri.trim_start_matches('/')
    )
}
