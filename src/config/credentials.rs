// src/config/credentials.rs

use crate::{
    constants,
    error::{AppError, AppResult},
    models::Credentials,
    ui, utils,
};
use anyhow::Context;
use log::{debug, info};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Picks the credentials file: command line (or its env var) first, then the default location.
///
/// Returns the path together with a human readable description of where it came from.
pub fn resolve_credentials_path(cli_path: Option<&Path>, base_dir: &Path) -> (PathBuf, String) {
    if let Some(path) = cli_path
        && !path.as_os_str().is_empty()
    {
        debug!("using credentials file given on the command line: {:?}", path);
        return (
            utils::resolve_under(base_dir, path),
            "command line / environment".to_string(),
        );
    }
    debug!("using default credentials file");
    (
        utils::resolve_under(base_dir, Path::new(constants::DEFAULT_CREDENTIALS_FILE)),
        "default location".to_string(),
    )
}

pub fn load_credentials(path: &Path) -> AppResult<Credentials> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading credentials file '{}' failed", path.display()))?;
    let credentials: Credentials = serde_json::from_str(&content)
        .with_context(|| format!("parsing credentials file '{}' failed", path.display()))?;
    if credentials.username.trim().is_empty() {
        return Err(AppError::UserInputError(format!(
            "credentials file '{}' has an empty username",
            path.display()
        )));
    }
    info!("loaded credentials for user '{}'", credentials.username);
    Ok(credentials)
}

/// Asks for the password on the terminal when the file did not contain one.
pub fn ensure_password(mut credentials: Credentials) -> AppResult<Credentials> {
    if credentials.password.as_deref().is_some_and(|p| !p.is_empty()) {
        return Ok(credentials);
    }
    let password = ui::prompt_hidden(&format!("Password for {}", credentials.username))
        .map_err(|_| AppError::UserInterrupt)?;
    if password.is_empty() {
        return Err(AppError::UserInputError("password must not be empty".into()));
    }
    credentials.password = Some(password);
    Ok(credentials)
}
