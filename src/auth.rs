// src/auth.rs

use crate::{
    browser::{Browser, Locator, WaitPolicy, wait},
    error::AppResult,
    models::{Credentials, Portal},
};
use log::{debug, info, warn};

/// Logs into `portal` and reports whether the landing page looks like a logged-in page.
///
/// The check only looks for the user's first and last name in the rendered page,
/// so it can be fooled by any page mentioning them. A `false` result is never
/// fatal here; callers log it and carry on.
pub async fn login<B>(
    browser: &B,
    portal: Portal,
    credentials: &Credentials,
    wait_policy: &WaitPolicy,
) -> AppResult<bool>
where
    B: Browser + ?Sized,
{
    info!("logging into {} as '{}'", portal, credentials.username);
    browser.navigate(portal.login_url()).await?;

    let form = portal.login_form();
    let username_field = browser.find(Locator::Id(form.username_id)).await?;
    let password_field = browser.find(Locator::Id(form.password_id)).await?;
    let submit_button = browser.find(Locator::Id(form.submit_id)).await?;

    browser
        .send_keys(&username_field, &portal.format_username(&credentials.username))
        .await?;
    browser
        .send_keys(&password_field, credentials.password.as_deref().unwrap_or_default())
        .await?;
    browser.submit(&submit_button).await?;

    let first_name = credentials.first_name.to_lowercase();
    let last_name = credentials.last_name.to_lowercase();
    let readiness = wait::wait_for_source(browser, wait_policy, |source| {
        looks_logged_in(source, &first_name, &last_name)
    })
    .await?;

    if readiness.ready {
        debug!("{} login verified after {:?}", portal, readiness.waited);
    } else {
        warn!(
            "{} login could not be verified: '{} {}' not found on the landing page",
            portal, credentials.first_name, credentials.last_name
        );
    }
    Ok(readiness.ready)
}

fn looks_logged_in(source: &str, first_name: &str, last_name: &str) -> bool {
    let page = source.to_lowercase();
    page.contains(first_name) && page.contains(last_name)
}
