//! Platform logging initialization for lengthener_app.
//!
//! The terminal is owned by the UI, so logs go to `./lengthener.log` in the
//! current working directory. `LENGTHENER_LOG_LEVEL` overrides the default
//! `info` level.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, WriteLogger};

const LOG_FILE: &str = "./lengthener.log";
const LEVEL_ENV: &str = "LENGTHENER_LOG_LEVEL";

/// Initialize the file logger. Failure to create the file only disables logging.
pub fn initialize() {
    let level = level_from(std::env::var(LEVEL_ENV).ok().as_deref());
    if let Some(file_logger) = create_file_logger(level, build_config()) {
        let loggers: Vec<Box<dyn SharedLogger>> = vec![file_logger];
        let _ = CombinedLogger::init(loggers);
    }
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from(LOG_FILE);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
