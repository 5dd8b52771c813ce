//! Suite configuration - endpoints, browser engine, timeouts

use std::path::PathBuf;
use std::time::Duration;

/// Browser engine to drive. CI runs the journey against both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Browser {
    #[default]
    Chrome,
    Firefox,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Firefox => "firefox",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "chrome" | "chromium" => Some(Browser::Chrome),
            "firefox" => Some(Browser::Firefox),
            _ => None,
        }
    }
}

/// Configuration for one test run
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Base URL of the shop UI
    pub base_url: String,

    /// Base URL of the shop API
    pub api_base_url: String,

    /// WebDriver endpoint (chromedriver, geckodriver, or a selenium hub)
    pub webdriver_url: String,

    /// Browser engine to drive
    pub browser: Browser,

    /// Run the browser without a visible window
    pub headless: bool,

    /// Fixed timeout for UI waits and assertions
    pub wait_timeout: Duration,

    /// Polling interval while waiting on UI state
    pub poll_interval: Duration,

    /// Directory for failure screenshots
    pub artifacts_dir: PathBuf,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            base_url: "https://practicesoftwaretesting.com".to_string(),
            api_base_url: "https://api.practicesoftwaretesting.com".to_string(),
            webdriver_url: "http://localhost:4444".to_string(),
            browser: Browser::default(),
            headless: true,
            wait_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_millis(250),
            artifacts_dir: PathBuf::from("test-results/screenshots"),
        }
    }
}

impl TestConfig {
    /// Load configuration, letting `E2E_*` environment variables override the
    /// defaults. Unknown browser names fall back to the default engine.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("E2E_BASE_URL") {
            config.base_url = v;
        }
        if let Ok(v) = std::env::var("E2E_API_BASE_URL") {
            config.api_base_url = v;
        }
        if let Ok(v) = std::env::var("E2E_WEBDRIVER_URL") {
            config.webdriver_url = v;
        }
        if let Ok(v) = std::env::var("E2E_BROWSER") {
            if let Some(browser) = Browser::parse(&v) {
                config.browser = browser;
            }
        }
        if let Ok(v) = std::env::var("E2E_HEADLESS") {
            config.headless = !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no");
        }
        if let Ok(v) = std::env::var("E2E_ARTIFACTS_DIR") {
            config.artifacts_dir = PathBuf::from(v);
        }

        config
    }
}
