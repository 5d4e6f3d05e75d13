// src/workflows.rs

use crate::{
    RunContext, auth,
    browser::Browser,
    cookies,
    error::AppResult,
    extractor,
    models::{DownloadReport, Portal, SiteDescriptor},
    ui,
};
use colored::*;
use indicatif::HumanBytes;
use itertools::{Either, Itertools};
use log::{error, info, warn};
use std::collections::BTreeMap;

/// What a completed run did, for the closing report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sites_done: usize,
    pub unmatched: Vec<String>,
    pub unverified_logins: Vec<Portal>,
    pub report: DownloadReport,
}

/// Groups sites by portal (ordered Moodle, Reader) and returns the ones matching neither.
pub fn partition_sites(sites: &[SiteDescriptor]) -> (BTreeMap<Portal, Vec<SiteDescriptor>>, Vec<SiteDescriptor>) {
    let (matched, unmatched): (Vec<_>, Vec<_>) = sites.iter().cloned().partition_map(|site| match site.portal() {
        Some(portal) => Either::Left((portal, site)),
        None => Either::Right(site),
    });
    let mut partitions: BTreeMap<Portal, Vec<SiteDescriptor>> = BTreeMap::new();
    for (portal, site) in matched {
        partitions.entry(portal).or_default().push(site);
    }
    (partitions, unmatched)
}

/// Processes every site, then closes the browser whether or not that succeeded.
///
/// The first failure aborts the remaining sites and is returned after the
/// browser has been closed.
pub async fn run<B>(browser: &B, sites: &[SiteDescriptor], context: &RunContext) -> AppResult<RunSummary>
where
    B: Browser + ?Sized,
{
    let result = run_portals(browser, sites, context).await;
    if let Err(e) = &result {
        error!("run aborted: {}", e);
    }
    if let Err(e) = browser.close().await {
        warn!("closing the browser failed: {}", e);
    }
    result
}

async fn run_portals<B>(browser: &B, sites: &[SiteDescriptor], context: &RunContext) -> AppResult<RunSummary>
where
    B: Browser + ?Sized,
{
    let (partitions, unmatched) = partition_sites(sites);
    let mut summary = RunSummary::default();
    for site in unmatched {
        warn!("site '{}' matches no known portal, skipping", site.url);
        ui::warn(&format!("Skipping {}: neither Reader nor Moodle.", site.url));
        summary.unmatched.push(site.url);
    }

    let mut jar = Vec::new();
    for (portal, portal_sites) in &partitions {
        let portal = *portal;
        ui::print_header(&format!("{} ({} site(s))", portal, portal_sites.len()));

        let verified = auth::login(browser, portal, &context.credentials, &context.config.login_wait).await?;
        if verified {
            ui::ok(&format!("Logged into {}.", portal));
        } else {
            ui::warn(&format!("{} login could not be verified, continuing anyway.", portal));
            summary.unverified_logins.push(portal);
        }

        let session = cookies::get_cookie_value(browser, portal.session_cookie()).await?;
        if context.export_cookies.is_some() {
            jar.extend(browser.cookies().await?);
        }

        let link_extractor = extractor::for_portal(portal);
        for site in portal_sites {
            ui::print_sub_header(&site.url);
            let records =
                extractor::extract(browser, link_extractor.as_ref(), &site.url, &context.config.page_wait).await?;
            if records.is_empty() {
                ui::info("No documents found on this page.");
            }
            let report = context
                .downloader
                .download_records(records, &site.dir, &session, context.overwrite)
                .await?;
            info!(
                "site {} done: {} written, {} skipped",
                site.url, report.written, report.skipped
            );
            ui::info(&format!(
                "Site belonging to {} done ({} new, {} already present).",
                site.dir.display(),
                report.written,
                report.skipped
            ));
            summary.report.merge(&report);
            summary.sites_done += 1;
        }
    }

    if let Some(path) = &context.export_cookies {
        let jar: Vec<_> = jar
            .into_iter()
            .unique_by(|c| (c.domain.clone(), c.path.clone(), c.name.clone()))
            .collect();
        cookies::export_cookies(&jar, path)?;
        ui::info(&format!("Cookies written to {}.", path.display()));
    }
    Ok(summary)
}

pub fn print_summary(summary: &RunSummary) {
    ui::print_header("Summary");
    println!(
        "{} | {} | {}",
        format!("sites: {}", summary.sites_done).cyan(),
        format!("downloaded: {} ({})", summary.report.written, HumanBytes(summary.report.bytes)).green(),
        format!("already present: {}", summary.report.skipped).dimmed()
    );
    if !summary.unmatched.is_empty() {
        ui::warn(&format!("{} site(s) skipped, unknown portal:", summary.unmatched.len()));
        for url in &summary.unmatched {
            println!("    - {}", url);
        }
    }
    for portal in &summary.unverified_logins {
        ui::warn(&format!("{} login was not verified; check the files if something looks off.", portal));
    }
}
