// src/logging.rs
//! Logging initialization for binaries and tools.

/// Initialize env_logger with a default filter level of `info`.
/// Override with the RUST_LOG environment variable.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
