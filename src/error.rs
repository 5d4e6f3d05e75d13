// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("no cookie named '{name}' in the browser session")]
    CookieNotFound { name: String },
    #[error("extractor produced {links} links but {filenames} filenames")]
    LinkFilenameMismatch { links: usize, filenames: usize },
    #[error("target directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),
    #[error("refusing to write '{0}' outside the target directory")]
    UnsafeFilename(String),
    #[error("session rejected by the server while fetching '{url}' (login expired?)")]
    SessionRejected { url: String },
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("browser automation failed: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not move the finished download into place: {0}")]
    TempFilePersist(#[from] tempfile::PersistError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("interrupted by user")]
    UserInterrupt,
    #[error("{0}")] // message only, no prefix
    UserInputError(String),
    #[error("unexpected error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
