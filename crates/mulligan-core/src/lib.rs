//! # mulligan-core
//!
//! Core library for the Mulligan CLI providing:
//! - A bounded retry executor for asynchronous operations
//! - Result validation via caller-supplied success predicates
//! - Observable attempt lifecycle via the `RetryObserver` trait
//! - Serde-backed retry configuration

pub mod error;
pub mod retry;
pub mod types;

pub use error::{Error, Result};
pub use types::RetryConfig;
