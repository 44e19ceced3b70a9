//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the logging system with the default filter
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this more than
/// once keeps the first logger.
pub fn init_with_filter(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_with_filter("debug");
        init();
        info!("logging initialized twice");
    }
}
