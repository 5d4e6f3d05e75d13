// src/logging.rs

use crate::{cli::LogLevel, constants};
use log::warn;
use std::{env, fs, path::PathBuf};

fn level_filter(level: LogLevel) -> log::LevelFilter {
    match level {
        LogLevel::Off => log::LevelFilter::Off,
        LogLevel::Error => log::LevelFilter::Error,
        LogLevel::Warn => log::LevelFilter::Warn,
        LogLevel::Info => log::LevelFilter::Info,
        LogLevel::Debug => log::LevelFilter::Debug,
        LogLevel::Trace => log::LevelFilter::Trace,
    }
}

fn log_file_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(constants::CONFIG_DIR_NAME).join(constants::LOG_FILE_NAME),
        None => {
            eprintln!("Warning: no home directory, logging to the temp directory.");
            env::temp_dir().join(clap::crate_name!()).join(constants::LOG_FILE_NAME)
        }
    }
}

/// Sends log records to `~/.course-dl/course-dl.log`. Nothing is set up for [`LogLevel::Off`].
///
/// Failing to open the log file is never fatal: a file in the temp directory
/// is tried next, then logging is simply left off.
pub fn init_logger(level: LogLevel) {
    if level == LogLevel::Off {
        return;
    }
    let path = log_file_path();
    if let Some(dir) = path.parent()
        && let Err(e) = fs::create_dir_all(dir)
    {
        eprintln!("Warning: cannot create log directory {:?}: {}", dir, e);
    }

    let file = match fern::log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: cannot open log file {:?}: {}. Trying a fallback.", path, e);
            let fallback = env::temp_dir().join(format!(
                "{}-{}",
                clap::crate_name!(),
                constants::LOG_FALLBACK_FILE_NAME
            ));
            match fern::log_file(&fallback) {
                Ok(file) => {
                    warn!("logging to fallback file {:?}", fallback);
                    file
                }
                Err(e) => {
                    eprintln!("Error: cannot open fallback log file {:?}: {}. File logging is off.", fallback, e);
                    return;
                }
            }
        }
    };

    let result = fern::Dispatch::new()
        .level(level_filter(level))
        // thirtyfour and hyper are chatty at debug level
        .level_for("hyper", log::LevelFilter::Warn)
        .level_for("hyper_util", log::LevelFilter::Warn)
        .level_for("thirtyfour", log::LevelFilter::Info)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{:<5}] [{}:{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .chain(file)
        .apply();

    if let Err(e) = result {
        eprintln!("Warning: logger initialisation failed: {}", e);
    }
}
