use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

use client_logging::client_info;
use zen_client::ClientHandle;
use zen_core::{update, AppState, Msg};

use super::config;
use super::effects::EffectRunner;
use super::logging;
use super::ui::screen::Screen;

/// Poll window for keyboard events; on timeout a tick repaints the spinner.
const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    logging::initialize();

    let settings = config::load()?;
    let base_url = settings.base_url().to_string();
    client_info!("Starting against {}", base_url);

    let runner = EffectRunner::new(ClientHandle::new(settings)?);
    runner.probe_health();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut screen = Screen::new(stdout, base_url);

    let res = run_loop(&mut screen, &runner);

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    res.map_err(Into::into)
}

fn run_loop<W: io::Write>(screen: &mut Screen<W>, runner: &EffectRunner) -> io::Result<()> {
    let mut state = AppState::new();
    screen.draw(&state.view())?;

    loop {
        while let Some(msg) = runner.poll_msg() {
            state = step(state, msg, screen, runner);
        }

        let msg = if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match map_key(key, state.input()) {
                        KeyOutcome::Quit => return Ok(()),
                        KeyOutcome::Forward(msg) => Some(msg),
                        KeyOutcome::Ignore => None,
                    }
                }
                _ => None,
            }
        } else {
            Some(Msg::Tick)
        };

        if let Some(msg) = msg {
            state = step(state, msg, screen, runner);
        }

        // One repaint per pass, no matter how many messages landed.
        if state.consume_dirty() {
            screen.draw(&state.view())?;
        }
    }
}

fn step<W: io::Write>(
    state: AppState,
    msg: Msg,
    screen: &mut Screen<W>,
    runner: &EffectRunner,
) -> AppState {
    let (state, effects) = update(state, msg);
    runner.run(screen, effects);
    state
}

#[derive(Debug, PartialEq, Eq)]
enum KeyOutcome {
    Forward(Msg),
    Ignore,
    Quit,
}

/// Keyboard mapping: Enter submits, Esc and Ctrl-C quit, printable keys and
/// Backspace edit the URL. Edits carry the whole new input string.
fn map_key(key: KeyEvent, input: &str) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyOutcome::Quit,
            _ => KeyOutcome::Ignore,
        };
    }
    match key.code {
        KeyCode::Esc => KeyOutcome::Quit,
        KeyCode::Enter => KeyOutcome::Forward(Msg::SubmitRequested),
        KeyCode::Char(c) => {
            let mut next = input.to_string();
            next.push(c);
            KeyOutcome::Forward(Msg::InputChanged(next))
        }
        KeyCode::Backspace => {
            let mut next = input.to_string();
            if next.pop().is_none() {
                return KeyOutcome::Ignore;
            }
            KeyOutcome::Forward(Msg::InputChanged(next))
        }
        _ => KeyOutcome::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_submits() {
        assert_eq!(
            map_key(plain(KeyCode::Enter), "anything"),
            KeyOutcome::Forward(Msg::SubmitRequested)
        );
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        assert_eq!(map_key(plain(KeyCode::Esc), ""), KeyOutcome::Quit);
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                ""
            ),
            KeyOutcome::Quit
        );
    }

    #[test]
    fn typing_appends_to_the_input() {
        assert_eq!(
            map_key(plain(KeyCode::Char('b')), "a"),
            KeyOutcome::Forward(Msg::InputChanged("ab".to_string()))
        );
    }

    #[test]
    fn shifted_characters_still_type() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('V'), KeyModifiers::SHIFT), ""),
            KeyOutcome::Forward(Msg::InputChanged("V".to_string()))
        );
    }

    #[test]
    fn backspace_trims_the_last_character() {
        assert_eq!(
            map_key(plain(KeyCode::Backspace), "ab"),
            KeyOutcome::Forward(Msg::InputChanged("a".to_string()))
        );
    }

    #[test]
    fn backspace_on_empty_input_is_ignored() {
        assert_eq!(map_key(plain(KeyCode::Backspace), ""), KeyOutcome::Ignore);
    }

    #[test]
    fn other_control_chords_are_ignored() {
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
                "abc"
            ),
            KeyOutcome::Ignore
        );
        assert_eq!(map_key(plain(KeyCode::F(5)), "abc"), KeyOutcome::Ignore);
    }
}
