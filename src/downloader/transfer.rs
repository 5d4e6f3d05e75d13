// src/downloader/transfer.rs

use crate::{error::*, ui};
use anyhow::anyhow;
use futures::StreamExt;
use log::debug;
use reqwest::Response;
use std::{io::Write as IoWrite, path::Path};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Mode before the umask is applied, as `File::create` uses.
#[cfg(unix)]
const DOCUMENT_MODE: u32 = 0o666;

/// Streams the body of `response` into `destination` chunk by chunk.
///
/// Bytes land in a hidden temp file in the same directory, which replaces
/// `destination` only after the last chunk was written.
pub(super) async fn stream_to_file(response: Response, destination: &Path) -> AppResult<u64> {
    let directory = destination
        .parent()
        .ok_or_else(|| AppError::Other(anyhow!("'{}' has no parent directory", destination.display())))?;
    let label = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut builder = tempfile::Builder::new();
    builder.prefix(".course-dl-").suffix(".part");
    // tempfile defaults to 0600, which the rename would carry over
    #[cfg(unix)]
    builder.permissions(std::fs::Permissions::from_mode(DOCUMENT_MODE));
    let mut part = builder.tempfile_in(directory)?;
    let pbar = ui::new_bytes_progress_bar(response.content_length(), &label);

    let mut written = 0u64;
    let mut stream = response.bytes_stream();
    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        part.write_all(&chunk)?;
        written += chunk.len() as u64;
        pbar.inc(chunk.len() as u64);
    }
    part.flush()?;
    pbar.finish_and_clear();

    debug!("persisting {} bytes from {:?} to {:?}", written, part.path(), destination);
    part.persist(destination)?;
    Ok(written)
}
