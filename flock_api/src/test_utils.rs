//! Test helpers shared by the workspace's test suites.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize fmt logging for tests. Safe to call from every test; only
/// the first call installs the subscriber. Filtering follows the normal
/// `RUST_LOG` environment variable.
pub fn logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
