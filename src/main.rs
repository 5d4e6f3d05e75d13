// src/main.rs

use clap::{CommandFactory, FromArgMatches};
use colored::*;
use course_dl::{cli::Cli, logging, run_from_cli, ui};
use std::{env, sync::Arc, time::Duration};

#[tokio::main]
async fn main() {
    #[cfg(windows)]
    {
        colored::control::set_virtual_terminal(true).ok();
    }
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n{} Interrupted by user.", "[!]".yellow());
            tokio::time::sleep(Duration::from_millis(100)).await;
            std::process::exit(130);
        }
    });

    let bin_name = env::var("CARGO_BIN_NAME").unwrap_or_else(|_| "course-dl".to_string());

    let after_help = format!(
        "Examples:\n  # Download everything listed in ./sites.json\n  {bin}\n\n  # Other site list, credentials from the environment, re-download all\n  COURSE_DL_CREDENTIALS=~/me.json {bin} -s semester3.json --force\n\n  # Watch the browser and keep the session cookies\n  {bin} --headed --export-cookies cookies.txt\n\nA WebDriver server (e.g. geckodriver --port 4444) must be running.",
        bin = bin_name
    );

    let cmd = Cli::command().after_help(after_help);
    let args = match Cli::from_arg_matches(&cmd.get_matches()) {
        Ok(args) => Arc::new(args),
        Err(e) => e.exit(),
    };

    logging::init_logger(args.log_level);

    if let Err(e) = run_from_cli(args).await {
        log::error!("run failed: {}", e);
        eprintln!();
        ui::error(&format!("Run failed: {}", e));
        std::process::exit(1);
    }
}
