// src/config/sites.rs

use crate::{error::AppResult, models::SiteDescriptor, utils};
use anyhow::Context;
use log::{debug, warn};
use std::{fs, path::Path};

/// Reads the site list and anchors every relative `dir` at `base_dir`.
pub fn load_sites(path: &Path, base_dir: &Path) -> AppResult<Vec<SiteDescriptor>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading sites file '{}' failed", path.display()))?;
    let sites: Vec<SiteDescriptor> = serde_json::from_str(&content)
        .with_context(|| format!("parsing sites file '{}' failed", path.display()))?;
    if sites.is_empty() {
        warn!("sites file '{}' lists no sites", path.display());
    }
    Ok(sites
        .into_iter()
        .map(|site| {
            let dir = utils::resolve_under(base_dir, &site.dir);
            debug!("site {} -> {}", site.url, dir.display());
            SiteDescriptor { url: site.url, dir }
        })
        .collect())
}
