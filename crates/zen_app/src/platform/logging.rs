//! Platform logging initialization for zen_app.
//!
//! Logs go to `./zen.log` in the current working directory. There is no
//! terminal destination: the screen runs in raw mode for the whole session,
//! and anything printed to it would tear the drawing.

use std::fs::File;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, WriteLogger};

const LOG_FILE: &str = "./zen.log";

/// Initialize the file logger, truncating any previous log.
///
/// Runs before the terminal enters raw mode. When the log file cannot be
/// created the app keeps going without diagnostics.
pub fn initialize() {
    let level = LevelFilter::Info;

    match File::create(LOG_FILE) {
        Ok(file) => {
            let _ = CombinedLogger::init(vec![WriteLogger::new(level, build_config(), file)]);
        }
        Err(err) => {
            eprintln!("Warning: Could not create log file at {LOG_FILE}: {err}");
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
