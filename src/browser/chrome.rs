use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tracing::{debug, warn};

use crate::config::BrowserSettings;
use crate::errors::PageLensError;
use crate::models::{CookieRecord, PageSnapshot, StorageState};

const READ_LOCAL_STORAGE: &str = "Object.fromEntries(Object.entries(window.localStorage))";
const READ_SESSION_STORAGE: &str = "Object.fromEntries(Object.entries(window.sessionStorage))";

/// Fetches a single page with a dedicated headless Chromium process.
///
/// Every call to [`ChromeFetcher::fetch`] launches its own browser and shuts
/// it down on every exit path. Nothing is shared between fetches.
pub struct ChromeFetcher {
    settings: BrowserSettings,
}

impl ChromeFetcher {
    pub fn new(settings: BrowserSettings) -> Self {
        Self { settings }
    }

    /// Navigate, wait for the page to render, and capture a snapshot.
    pub async fn fetch(&self, url: &str) -> Result<PageSnapshot, PageLensError> {
        let mut builder = BrowserConfig::builder()
            .arg("--disable-extensions")
            .arg("--disable-popup-blocking");
        if self.settings.no_sandbox {
            builder = builder.no_sandbox();
        }
        let config = builder.build().map_err(PageLensError::Browser)?;

        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| PageLensError::Browser(format!("Failed to launch Chromium: {}", e)))?;

        let handler_task = tokio::spawn(async move { while handler.next().await.is_some() {} });

        let result = self.capture(&browser, url).await;

        // Shutdown happens regardless of how the capture went.
        if let Err(e) = browser.close().await {
            warn!(error = %e, "Browser close failed");
        }
        let _ = browser.wait().await;
        handler_task.abort();

        result
    }

    async fn capture(&self, browser: &Browser, url: &str) -> Result<PageSnapshot, PageLensError> {
        let page = browser
            .new_page(url)
            .await
            .map_err(|e| PageLensError::Browser(format!("Navigation to {} failed: {}", url, e)))?;

        page.wait_for_navigation()
            .await
            .map_err(|e| PageLensError::Browser(format!("Page load failed: {}", e)))?;

        self.await_ready(&page).await;

        // Settle period for client-side scripts to populate storage and
        // fire trackers; readiness alone fires before deferred scripts run.
        tokio::time::sleep(Duration::from_millis(self.settings.settle_ms)).await;

        let html = page
            .content()
            .await
            .map_err(|e| PageLensError::Browser(format!("Failed to read page content: {}", e)))?;

        let cookies = page
            .get_cookies()
            .await
            .map_err(|e| PageLensError::Browser(format!("Failed to read cookies: {}", e)))?
            .into_iter()
            .map(|c| CookieRecord {
                name: c.name,
                value: c.value,
                domain: c.domain,
                path: c.path,
                expires: c.expires,
                secure: c.secure,
                http_only: c.http_only,
                same_site: c.same_site.map(|s| format!("{:?}", s)),
                session: c.session,
            })
            .collect();

        let local_storage = read_storage(&page, "localStorage", READ_LOCAL_STORAGE).await;
        let session_storage = read_storage(&page, "sessionStorage", READ_SESSION_STORAGE).await;

        Ok(PageSnapshot::capture(url, html, cookies, local_storage, session_storage))
    }

    /// Poll `document.readyState` until the document is complete or the
    /// configured deadline passes. Timing out is not an error; the settle
    /// delay still applies and extraction proceeds on whatever rendered.
    async fn await_ready(&self, page: &Page) {
        let deadline = Instant::now() + Duration::from_millis(self.settings.ready_timeout_ms);
        loop {
            let state = page
                .evaluate("document.readyState")
                .await
                .ok()
                .and_then(|v| v.into_value::<String>().ok());
            if state.as_deref() == Some("complete") {
                return;
            }
            if Instant::now() >= deadline {
                warn!(timeout_ms = self.settings.ready_timeout_ms, "Document never reached readyState=complete");
                return;
            }
            tokio::time::sleep(Duration::from_millis(250)).await;
        }
    }
}

/// Read one storage area. Failures degrade to a sentinel instead of
/// failing the capture; pages with opaque origins or storage-blocking
/// policies still get analyzed.
async fn read_storage(page: &Page, kind: &str, script: &str) -> StorageState {
    let entries = match page.evaluate(script).await {
        Ok(result) => result.into_value::<BTreeMap<String, String>>().ok(),
        Err(e) => {
            debug!(kind, error = %e, "Storage read failed");
            None
        }
    };
    match entries {
        Some(map) => StorageState::Available(map),
        None => StorageState::unavailable(kind),
    }
}
