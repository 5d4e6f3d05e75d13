// src/downloader/mod.rs

mod transfer;

use crate::{
    client::DocumentClient,
    constants,
    error::*,
    models::{DownloadOutcome, DownloadReport, LinkRecord, SessionCredential},
    utils,
};
use indicatif::HumanBytes;
use log::{debug, info};
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Writes linked documents into a directory, skipping files that are already there.
///
/// Presence on disk is the only dedup key: an existing file is never compared
/// against the remote one. Every transfer is streamed into a temporary file next
/// to the destination and only moved into place once complete, so an aborted
/// run never leaves a truncated file that the next run would skip.
pub struct DocumentDownloader {
    client: DocumentClient,
}

impl DocumentDownloader {
    pub fn new(client: DocumentClient) -> Self {
        Self { client }
    }

    /// Downloads `links[i]` to `directory/filenames[i]` for every `i`.
    ///
    /// Fails before touching the network or the filesystem when the two lists
    /// differ in length or `directory` is missing. The first failing transfer
    /// aborts the remaining ones.
    pub async fn download(
        &self,
        links: &[Url],
        filenames: &[String],
        directory: &Path,
        session: &SessionCredential,
        overwrite: bool,
    ) -> AppResult<DownloadReport> {
        if links.len() != filenames.len() {
            return Err(AppError::LinkFilenameMismatch {
                links: links.len(),
                filenames: filenames.len(),
            });
        }
        if !directory.is_dir() {
            return Err(AppError::MissingDirectory(directory.to_path_buf()));
        }

        info!(
            "downloading {} file(s) into {} (overwrite={})",
            links.len(),
            directory.display(),
            overwrite
        );
        let mut report = DownloadReport::default();
        for (link, filename) in links.iter().zip(filenames) {
            let destination = destination_path(directory, filename)?;
            let outcome = self.download_one(link, &destination, session, overwrite).await?;
            print_outcome(filename, outcome);
            report.record(outcome);
        }
        Ok(report)
    }

    /// Convenience over [`download`](Self::download) for extractor output.
    pub async fn download_records(
        &self,
        records: Vec<LinkRecord>,
        directory: &Path,
        session: &SessionCredential,
        overwrite: bool,
    ) -> AppResult<DownloadReport> {
        let (links, filenames) = LinkRecord::unzip(records);
        self.download(&links, &filenames, directory, session, overwrite).await
    }

    async fn download_one(
        &self,
        link: &Url,
        destination: &Path,
        session: &SessionCredential,
        overwrite: bool,
    ) -> AppResult<DownloadOutcome> {
        if !overwrite && destination.is_file() {
            debug!("'{}' exists, skipping {}", destination.display(), link);
            return Ok(DownloadOutcome::Skipped);
        }
        let response = self.client.get_with_session(link, session).await?;
        let bytes = transfer::stream_to_file(response, destination).await?;
        info!("wrote {} bytes to '{}'", bytes, destination.display());
        Ok(DownloadOutcome::Written { bytes })
    }
}

/// `directory/filename`, refusing names that would escape `directory`.
fn destination_path(directory: &Path, filename: &str) -> AppResult<PathBuf> {
    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(directory.join(filename)),
        _ => Err(AppError::UnsafeFilename(filename.to_string())),
    }
}

fn print_outcome(filename: &str, outcome: DownloadOutcome) {
    let (symbol, color_fn) = outcome.get_display_info();
    let name = utils::truncate_text(filename, constants::FILENAME_TRUNCATE_LENGTH);
    let detail = match outcome {
        DownloadOutcome::Skipped => "already downloaded".to_string(),
        DownloadOutcome::Written { bytes } => HumanBytes(bytes).to_string(),
    };
    println!("{} {} {}", symbol, name, color_fn(format!("({})", detail).into()));
}
