// src/cli.rs

use crate::constants;
use clap::{Parser, ValueEnum, crate_version};
use std::path::PathBuf;

/// Log file verbosity
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Parser, Debug, Clone)]
#[command(
    version = crate_version!(),
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
)]
pub struct Cli {
    // --- Inputs ---
    /// JSON list of course pages: [{"url": "...", "dir": "..."}]
    #[arg(short, long, value_name = "FILE", default_value_os_t = PathBuf::from(constants::DEFAULT_SITES_FILE), help_heading = "Inputs")]
    pub sites: PathBuf,
    /// JSON file with username, password, first_name and last_name
    #[arg(short, long, value_name = "FILE", env = constants::CREDENTIALS_ENV_VAR, help_heading = "Inputs")]
    pub credentials: Option<PathBuf>,
    /// Directory that relative paths (sites file, credentials, target dirs) are resolved against
    #[arg(short = 'd', long, value_name = "DIR", default_value_os_t = PathBuf::from("."), help_heading = "Inputs")]
    pub base_dir: PathBuf,
    /// Use this config file instead of the one in the home directory
    #[arg(long, value_name = "FILE", help_heading = "Inputs")]
    pub config: Option<PathBuf>,

    // --- Options ---
    /// Re-download files that already exist
    #[arg(short, long, action = clap::ArgAction::SetTrue, help_heading = "Options")]
    pub force: bool,
    /// Show the browser window instead of running headless
    #[arg(long, action = clap::ArgAction::SetTrue, help_heading = "Options")]
    pub headed: bool,
    /// WebDriver server URL (overrides the config file)
    #[arg(long, value_name = "URL", help_heading = "Options")]
    pub webdriver: Option<String>,
    /// Write the session cookies to FILE (tab separated, Netscape style) after the run
    #[arg(long, value_name = "FILE", help_heading = "Options")]
    pub export_cookies: Option<PathBuf>,

    // --- General ---
    /// Print help and exit
    #[arg(short = 'h', long, action = clap::ArgAction::Help, global = true, help_heading = "General")]
    _help: Option<bool>,
    /// Print version and exit
    #[arg(short = 'V', long, action = clap::ArgAction::Version, global = true, help_heading = "General")]
    _version: Option<bool>,
    /// (hidden) log file level, for debugging
    #[arg(long, value_enum, default_value_t = LogLevel::Off, global = true, hide = true)]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["course-dl"]);
        assert_eq!(cli.sites, PathBuf::from("sites.json"));
        assert_eq!(cli.base_dir, PathBuf::from("."));
        assert!(!cli.force);
        assert!(!cli.headed);
        assert_eq!(cli.log_level, LogLevel::Off);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "course-dl",
            "-s",
            "my_sites.json",
            "--force",
            "--headed",
            "--webdriver",
            "http://127.0.0.1:4445",
            "--export-cookies",
            "cookies.txt",
        ]);
        assert_eq!(cli.sites, PathBuf::from("my_sites.json"));
        assert!(cli.force);
        assert!(cli.headed);
        assert_eq!(cli.webdriver.as_deref(), Some("http://127.0.0.1:4445"));
        assert_eq!(cli.export_cookies, Some(PathBuf::from("cookies.txt")));
    }
}
