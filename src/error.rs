//! Error types for the e2e suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Unexpected status for {operation}: {status} (body: {body})")]
    UnexpectedStatus {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("Response for {operation} is missing field `{field}`")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Cart bridge verification failed: wrote {wrote:?}, read back {read:?}")]
    CartBridge {
        wrote: String,
        read: Option<String>,
    },

    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    #[error("Timeout waiting for: {0}")]
    Timeout(String),

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type E2eResult<T> = Result<T, E2eError>;
