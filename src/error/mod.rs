//! Error handling
//!
//! Defines error types for the working-directory operations.

pub mod types;

pub use types::*;
