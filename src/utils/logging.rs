//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger;

/// Setup logging (env_logger picks up the RUST_LOG environment variable)
pub fn setup_logging() {
    env_logger::init();
}
