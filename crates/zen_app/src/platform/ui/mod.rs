pub mod palette;
pub mod screen;

use zen_core::Severity;

/// What the platform needs from a screen to honor presentation effects.
/// The effect runner talks to this; the terminal screen implements it.
pub trait Presenter {
    fn set_status(&mut self, text: &str, severity: Severity);
    fn clear_results(&mut self);
    fn show_download(&mut self, uri: &str, filename: &str, title: Option<&str>);
    fn set_busy(&mut self, busy: bool);
    fn focus_input(&mut self);
}
