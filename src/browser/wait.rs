// src/browser/wait.rs

use super::Browser;
use crate::error::AppResult;
use log::{debug, trace};
use std::time::Duration;
use tokio::time::{Instant, sleep};

/// Bounds for polling a page until it looks ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub interval: Duration,
    pub timeout: Duration,
}

impl WaitPolicy {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }
}

/// Result of waiting on a page: whether the condition held, plus the last source seen.
#[derive(Debug, Clone)]
pub struct Readiness {
    pub ready: bool,
    pub source: String,
    pub waited: Duration,
}

/// Polls the rendered source until `ready` accepts it or the policy's timeout passes.
///
/// The source is always checked at least once, so a zero timeout degenerates
/// into a single read. Timing out is not an error: the caller decides what an
/// unready page means.
pub async fn wait_for_source<B, P>(browser: &B, policy: &WaitPolicy, ready: P) -> AppResult<Readiness>
where
    B: Browser + ?Sized,
    P: Fn(&str) -> bool,
{
    let started = Instant::now();
    let deadline = started + policy.timeout;
    let mut polls = 0u32;
    loop {
        let source = browser.page_source().await?;
        polls += 1;
        if ready(&source) {
            debug!("page ready after {} poll(s), {:?}", polls, started.elapsed());
            return Ok(Readiness {
                ready: true,
                source,
                waited: started.elapsed(),
            });
        }
        let now = Instant::now();
        if now >= deadline {
            debug!("page not ready after {} poll(s), giving up", polls);
            return Ok(Readiness {
                ready: false,
                source,
                waited: started.elapsed(),
            });
        }
        trace!("page not ready yet (poll {})", polls);
        sleep(policy.interval.min(deadline - now)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::fake::FakeBrowser;

    fn quick() -> WaitPolicy {
        WaitPolicy::new(Duration::from_millis(1), Duration::from_millis(200))
    }

    #[tokio::test]
    async fn test_returns_once_condition_holds() {
        let browser = FakeBrowser::new().with_page_sequence(
            "https://moodle.uni-mainz.de/course/view.php?id=1",
            vec!["<p>loading</p>", "<p>loading</p>", "<li class=\"done\"></li>"],
        );
        browser
            .navigate("https://moodle.uni-mainz.de/course/view.php?id=1")
            .await
            .unwrap();

        let readiness = wait_for_source(&browser, &quick(), |s| s.contains("done"))
            .await
            .unwrap();
        assert!(readiness.ready);
        assert!(readiness.source.contains("done"));
    }

    #[tokio::test]
    async fn test_times_out_without_error() {
        let browser = FakeBrowser::new().with_page("https://x.test/", "<p>never</p>");
        browser.navigate("https://x.test/").await.unwrap();

        let policy = WaitPolicy::new(Duration::from_millis(5), Duration::from_millis(20));
        let readiness = wait_for_source(&browser, &policy, |s| s.contains("done"))
            .await
            .unwrap();
        assert!(!readiness.ready);
        assert_eq!(readiness.source, "<p>never</p>");
        assert!(readiness.waited >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_zero_timeout_reads_once() {
        let browser = FakeBrowser::new().with_page("https://x.test/", "ok");
        browser.navigate("https://x.test/").await.unwrap();

        let policy = WaitPolicy::new(Duration::from_millis(5), Duration::ZERO);
        let readiness = wait_for_source(&browser, &policy, |_| false).await.unwrap();
        assert!(!readiness.ready);
        assert_eq!(readiness.source, "ok");
    }
}
