// src/ui.rs

use crate::{constants, symbols};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};

pub fn print_header(title: &str) {
    println!("\n{}", "═".repeat(constants::UI_WIDTH));
    println!(" {}", title.cyan().bold());
    println!("{}", "═".repeat(constants::UI_WIDTH));
}

pub fn print_sub_header(title: &str) {
    println!("\n--- {} ---", title.bold());
}

pub fn info(message: &str) {
    println!("{} {}", *symbols::INFO, message);
}

pub fn ok(message: &str) {
    println!("{} {}", *symbols::OK, message);
}

pub fn warn(message: &str) {
    println!("{} {}", *symbols::WARN, message.yellow());
}

pub fn error(message: &str) {
    eprintln!("{} {}", *symbols::ERROR, message.red());
}

pub fn prompt_hidden(message: &str) -> io::Result<String> {
    print!("\n>>> {}: ", message);
    io::stdout().flush()?;
    rpassword::read_password()
}

/// Byte progress bar for a single transfer; falls back to a spinner when the size is unknown.
pub fn new_bytes_progress_bar(total: Option<u64>, label: &str) -> ProgressBar {
    let pbar = match total {
        Some(total) => {
            let pbar = ProgressBar::new(total);
            pbar.set_style(
                ProgressStyle::with_template(
                    "{msg:<24} [{bar:30.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
            );
            pbar
        }
        None => {
            let pbar = ProgressBar::new_spinner();
            pbar.set_style(
                ProgressStyle::with_template("{spinner} {msg:<24} {bytes} ({bytes_per_sec})")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pbar
        }
    };
    pbar.set_message(label.to_string());
    pbar
}
