//! Browser session management and the API-to-UI cart bridge
//!
//! One [`BrowserSession`] per scenario. It owns the WebDriver connection and
//! exposes the small vocabulary of UI primitives the page objects are built
//! from: navigate, fill, click, select, wait, screenshot, evaluate.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde_json::json;
use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::{Browser, TestConfig};
use crate::error::{E2eError, E2eResult};

/// `sessionStorage` key the shop UI resolves its current cart from. If the
/// app renames this key the UI silently falls back to an empty cart, so the
/// bridge verifies every write by reading it back.
pub const CART_STORAGE_KEY: &str = "cart_id";

/// Handle to one live browser context. Cloning shares the underlying
/// WebDriver session; page objects hold clones.
#[derive(Clone)]
pub struct BrowserSession {
    driver: WebDriver,
    base_url: String,
    wait_timeout: Duration,
    poll_interval: Duration,
    artifacts_dir: PathBuf,
}

impl BrowserSession {
    /// Connect to the WebDriver endpoint and open a fresh browser context.
    pub async fn start(config: &TestConfig) -> E2eResult<Self> {
        let driver = match config.browser {
            Browser::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if config.headless {
                    caps.set_headless()?;
                }
                WebDriver::new(&config.webdriver_url, caps).await?
            }
            Browser::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                if config.headless {
                    caps.set_headless()?;
                }
                WebDriver::new(&config.webdriver_url, caps).await?
            }
        };

        info!(browser = config.browser.as_str(), "browser session started");

        Ok(Self {
            driver,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            wait_timeout: config.wait_timeout,
            poll_interval: config.poll_interval,
            artifacts_dir: config.artifacts_dir.clone(),
        })
    }

    /// Navigate to a path relative to the UI base URL.
    pub async fn goto(&self, path: &str) -> E2eResult<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "navigate");
        self.driver.goto(url).await?;
        Ok(())
    }

    /// Wait until the element located by `by` is present and displayed.
    pub async fn wait_for_visible(&self, by: &By) -> E2eResult<WebElement> {
        let deadline = Instant::now() + self.wait_timeout;
        loop {
            if let Ok(elem) = self.driver.find(by.clone()).await {
                if elem.is_displayed().await.unwrap_or(false) {
                    return Ok(elem);
                }
            }
            if Instant::now() >= deadline {
                return Err(E2eError::Timeout(format!("{by:?} to become visible")));
            }
            sleep(self.poll_interval).await;
        }
    }

    /// Wait until the element's text contains `needle`. Elements are re-found
    /// on every poll so navigation between polls does not leave a stale
    /// reference.
    pub async fn wait_for_text(&self, by: &By, needle: &str) -> E2eResult<()> {
        let deadline = Instant::now() + self.wait_timeout;
        let mut last_seen = String::new();
        loop {
            if let Ok(elem) = self.driver.find(by.clone()).await {
                if let Ok(text) = elem.text().await {
                    if text.contains(needle) {
                        return Ok(());
                    }
                    last_seen = text;
                }
            }
            if Instant::now() >= deadline {
                return Err(E2eError::AssertionFailed(format!(
                    "{by:?} shows {last_seen:?}, expected it to contain {needle:?}"
                )));
            }
            sleep(self.poll_interval).await;
        }
    }

    /// Wait for the element and click it.
    pub async fn click(&self, by: &By) -> E2eResult<()> {
        let elem = self.wait_for_visible(by).await?;
        elem.click().await?;
        Ok(())
    }

    /// Wait for the input, clear it, and type `value`.
    pub async fn fill(&self, by: &By, value: &str) -> E2eResult<()> {
        let elem = self.wait_for_visible(by).await?;
        elem.clear().await?;
        elem.send_keys(value).await?;
        Ok(())
    }

    /// Wait for a `<select>` element and pick the option with `value`.
    pub async fn select_value(&self, by: &By, value: &str) -> E2eResult<()> {
        let elem = self.wait_for_visible(by).await?;
        let select = SelectElement::new(&elem).await?;
        select.select_by_value(value).await?;
        Ok(())
    }

    /// Write the API-created cart id into the UI's session storage, then read
    /// it back. A mismatch means the app no longer resolves its cart from
    /// [`CART_STORAGE_KEY`] and checkout would fail far downstream without a
    /// useful signal.
    pub async fn bridge_cart(&self, cart_id: &str) -> E2eResult<()> {
        info!(cart_id, "bridging API cart into browser session storage");
        self.driver
            .execute(
                "sessionStorage.setItem(arguments[0], arguments[1]);",
                vec![json!(CART_STORAGE_KEY), json!(cart_id)],
            )
            .await?;

        let ret = self
            .driver
            .execute(
                "return sessionStorage.getItem(arguments[0]);",
                vec![json!(CART_STORAGE_KEY)],
            )
            .await?;
        let read = ret.json().as_str().map(str::to_string);
        if read.as_deref() != Some(cart_id) {
            return Err(E2eError::CartBridge {
                wrote: cart_id.to_string(),
                read,
            });
        }
        Ok(())
    }

    /// Full-page screenshot into the artifacts directory. Called by the
    /// scenarios when a step fails.
    pub async fn capture_screenshot(&self, name: &str) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(&self.artifacts_dir)?;
        let path = self.artifacts_dir.join(format!("{name}.png"));
        self.driver.screenshot(&path).await?;
        info!(path = %path.display(), "screenshot captured");
        Ok(path)
    }

    /// Close the browser. WebDriver sessions leak on the driver side if this
    /// is skipped, so scenarios call it on both the success and failure paths.
    pub async fn quit(self) -> E2eResult<()> {
        self.driver.quit().await?;
        Ok(())
    }
}
