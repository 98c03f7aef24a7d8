//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system with a default filter such as `"info"` or
/// `"lawn_engine=debug"`
///
/// `RUST_LOG` still wins when it is set. Calling this twice is harmless.
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}
