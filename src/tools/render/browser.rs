use crate::config::RenderConfig;
use crate::error::{PatrawlError, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::path::PathBuf;
use tokio::task::JoinHandle;

/// Locate a Chromium/Chrome binary: explicit config path first, then PATH.
pub(super) fn find_browser(config: &RenderConfig) -> Option<PathBuf> {
    if let Some(path) = &config.browser_path {
        if path.exists() {
            return Some(path.clone());
        }
    }

    for name in ["google-chrome", "chromium", "chromium-browser"] {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }

    None
}

/// One isolated headless browser process with its CDP event loop.
///
/// No persistent profile: each session starts clean so portal session
/// cookies never leak between queries.
pub(super) struct BrowserSession {
    pub(super) browser: Browser,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    pub(super) async fn launch(config: &RenderConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .window_size(config.window.0, config.window.1)
            .arg("--headless=new")
            .arg("--no-sandbox")
            .arg("--disable-setuid-sandbox")
            .arg("--disable-dev-shm-usage");
        if let Some(path) = find_browser(config) {
            builder = builder.chrome_executable(path);
        }
        let browser_config = builder
            .build()
            .map_err(|e| PatrawlError::Automation(format!("browser config: {e}")))?;

        let launched = tokio::time::timeout(config.timeout, Browser::launch(browser_config)).await;
        let (browser, mut handler) = match launched {
            Ok(Ok(pair)) => pair,
            Ok(Err(e)) => {
                return Err(PatrawlError::Automation(format!(
                    "browser launch failed: {e}"
                )))
            }
            Err(_) => {
                return Err(PatrawlError::Automation(format!(
                    "browser launch timed out after {}ms",
                    config.timeout.as_millis()
                )))
            }
        };

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        Ok(Self { browser, handler })
    }

    /// Tear down the browser process and its event loop.
    ///
    /// Called on every exit path of an attempt. If the attempt future is
    /// dropped before reaching this (caller cancellation), dropping the
    /// `Browser` kills the spawned child process instead.
    pub(super) async fn close(mut self) {
        let _ = self.browser.close().await;
        let _ = self.browser.wait().await;
        self.handler.abort();
    }
}
