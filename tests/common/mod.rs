//! Shared setup for the live scenarios

use std::sync::Once;

use toolshop_e2e::TestConfig;

/// Initialize tracing once across the test binary's threads.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Configuration for this run, with `E2E_*` environment overrides applied.
pub fn config() -> TestConfig {
    init_tracing();
    TestConfig::from_env()
}
