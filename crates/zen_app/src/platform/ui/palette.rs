use crossterm::style::Color;
use zen_core::Severity;

pub const TITLE_COLOR: Color = Color::Cyan;
pub const DIM_COLOR: Color = Color::DarkGrey;

/// Status line color per display class.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Neutral => Color::Reset,
        Severity::Processing => Color::Cyan,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    }
}
