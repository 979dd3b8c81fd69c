//! Log subscriber setup for the `brisk` binary.
//!
//! Filtering comes from `BRISK_LOG`, falling back to `RUST_LOG`. With
//! neither set nothing is installed and `tracing` macros stay near-free.
//!
//! ```text
//! BRISK_LOG=brisk_lexer=trace brisk lex main.bk
//! ```

use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Environment variable read before `RUST_LOG`.
pub const LOG_ENV: &str = "BRISK_LOG";

/// Install the global subscriber once. Later calls do nothing.
pub fn init() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = env_filter() else {
            return;
        };
        let _ = tracing_subscriber::registry()
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}

fn env_filter() -> Option<EnvFilter> {
    if std::env::var_os(LOG_ENV).is_some() {
        EnvFilter::try_from_env(LOG_ENV).ok()
    } else if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::try_from_default_env().ok()
    } else {
        None
    }
}
