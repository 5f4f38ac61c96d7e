//! Test logging initialization.
//!
//! One idempotent entry point shared by the unit and integration suites;
//! the first caller installs the subscriber, everyone else is a no-op.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the test subscriber once per process.
///
/// Verbosity comes from `TEST_LOG`, falling back to `RUST_LOG`, falling
/// back to `warn`. Output goes through the test writer so cargo/nextest
/// capture works, with timestamps suppressed for stable output.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // try_init: another subscriber may already be installed
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
