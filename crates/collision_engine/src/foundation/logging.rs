//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

use crate::core::config::EngineConfig;

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default filter, still overridable by `RUST_LOG`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_with_level(level: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

/// Initialize logging with the level from an engine configuration
///
/// Debug mode raises the level to at least `debug`.
pub fn init_from_config(config: &EngineConfig) {
    init_with_level(config.effective_log_level());
}

/// Initialize logging for unit and integration tests
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
