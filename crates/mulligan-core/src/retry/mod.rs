//! Retry execution engine with bounded attempts and result validation
//!
//! This module provides a reusable retry executor that wraps an arbitrary
//! asynchronous operation with a finite attempt budget and a caller-supplied
//! success predicate. Every per-attempt failure is recorded in order; callers
//! observe either the accepted result or a single aggregate error.
//!
//! # Features
//!
//! - Bounded, strictly sequential attempts (no unbounded loops)
//! - Result validation via the `SuccessPredicate` trait
//! - Ordered failure log carried by the aggregate `RetryExhausted` error
//! - Observable retry attempts via the `RetryObserver` trait
//! - Built-in `TracingObserver` for logging
//! - Builder pattern for flexible task configuration
//!
//! # Example
//!
//! ```rust,no_run
//! use mulligan_core::retry::{make_retrying, RetryExhausted};
//! use mulligan_core::types::RetryConfig;
//!
//! async fn example() -> Result<String, RetryExhausted<std::io::Error>> {
//!     let task = make_retrying(RetryConfig::default()).expect("valid config");
//!
//!     task.run(|| async {
//!         // Your fallible operation here
//!         Ok("success".to_string())
//!     })
//!     .await
//! }
//! ```

mod error;
mod executor;
mod observer;
mod predicate;

pub use error::{AttemptFailure, RetryExhausted};
pub use executor::{make_retrying, RetryTask, RetryTaskBuilder};
pub use observer::{NoOpObserver, RetryObserver, StatsObserver, TracingObserver};
pub use predicate::{AcceptAll, ClosurePredicate, RejectAll, SuccessPredicate};
