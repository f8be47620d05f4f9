//! Retry execution engine
//!
//! This module provides the core retry execution logic: bounded,
//! strictly sequential attempts with result validation and an observable
//! attempt lifecycle.

use std::future::Future;
use std::time::Instant;

use crate::error::Result;
use crate::types::RetryConfig;

use super::error::{AttemptFailure, RetryExhausted};
use super::observer::{NoOpObserver, RetryObserver};
use super::predicate::{AcceptAll, SuccessPredicate};

/// Build a retry task from a configuration
///
/// This is a convenience constructor for simple retry scenarios: every
/// result is accepted and attempts are not observed. For predicates and
/// observers, use `RetryTaskBuilder`.
///
/// # Errors
///
/// Returns `Error::InvalidConfig` when the attempt budget is zero. The
/// wrapped operation is never invoked on this path.
///
/// # Example
///
/// ```rust,no_run
/// use mulligan_core::retry::make_retrying;
/// use mulligan_core::types::RetryConfig;
///
/// async fn example() {
///     let task = make_retrying(RetryConfig::new(3)).expect("valid config");
///
///     let result = task.run(|| async {
///         // Simulated operation that might fail
///         Ok::<_, std::io::Error>("success")
///     }).await;
/// }
/// ```
pub fn make_retrying(config: RetryConfig) -> Result<RetryTask<AcceptAll, NoOpObserver>> {
    RetryTaskBuilder::new().with_config(config).build()
}

/// Builder for configuring a `RetryTask`
///
/// # Example
///
/// ```rust
/// use mulligan_core::retry::{ClosurePredicate, RetryTaskBuilder, TracingObserver};
/// use mulligan_core::types::RetryConfig;
///
/// let task = RetryTaskBuilder::new()
///     .with_config(RetryConfig::default())
///     .with_predicate(ClosurePredicate::new(|value: &u32| *value >= 3))
///     .with_observer(TracingObserver::new("poll"))
///     .build()
///     .expect("valid config");
/// ```
pub struct RetryTaskBuilder<P = AcceptAll, O = NoOpObserver> {
    config: RetryConfig,
    predicate: P,
    observer: O,
}

impl Default for RetryTaskBuilder<AcceptAll, NoOpObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryTaskBuilder<AcceptAll, NoOpObserver> {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: RetryConfig::default(),
            predicate: AcceptAll,
            observer: NoOpObserver,
        }
    }
}

impl<P, O> RetryTaskBuilder<P, O> {
    /// Set the retry configuration
    pub fn with_config(mut self, config: RetryConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the attempt budget, keeping the rest of the configuration
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    /// Set the success predicate
    ///
    /// The predicate decides whether a task's result is acceptable. A
    /// rejected result consumes an attempt like a task failure does.
    pub fn with_predicate<P2>(self, predicate: P2) -> RetryTaskBuilder<P2, O> {
        RetryTaskBuilder {
            config: self.config,
            predicate,
            observer: self.observer,
        }
    }

    /// Set the observer
    ///
    /// The observer receives callbacks during retry execution.
    pub fn with_observer<O2>(self, observer: O2) -> RetryTaskBuilder<P, O2> {
        RetryTaskBuilder {
            config: self.config,
            predicate: self.predicate,
            observer,
        }
    }

    /// Build the task, validating the configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` when the attempt budget is zero.
    pub fn build(self) -> Result<RetryTask<P, O>> {
        self.config.validate()?;
        Ok(RetryTask {
            config: self.config,
            predicate: self.predicate,
            observer: self.observer,
        })
    }
}

/// A wrapped retryable operation with a bounded attempt budget
///
/// Use `RetryTaskBuilder` or `make_retrying` to create an instance; both
/// validate the configuration, so a constructed task always has a budget
/// of at least one attempt.
pub struct RetryTask<P, O> {
    config: RetryConfig,
    predicate: P,
    observer: O,
}

impl<P, O> RetryTask<P, O> {
    /// Get the configured attempt budget
    pub fn max_attempts(&self) -> u32 {
        self.config.max_attempts
    }
}

impl<P, O> RetryTask<P, O>
where
    O: RetryObserver,
{
    /// Run the wrapped operation until a result is accepted or the attempt
    /// budget is exhausted
    ///
    /// Attempts are strictly sequential: each invocation of `op` is awaited
    /// to completion before the predicate is evaluated or the next attempt
    /// begins. No per-attempt timeout is applied, so an attempt that never
    /// completes blocks the sequence indefinitely.
    ///
    /// Each call starts a fresh failure log; concurrent calls on the same
    /// task share no mutable state.
    ///
    /// # Errors
    ///
    /// Returns `RetryExhausted` carrying the ordered failure log when no
    /// attempt produced an accepted result.
    pub async fn run<F, Fut, T, E>(&self, mut op: F) -> std::result::Result<T, RetryExhausted<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
        E: std::error::Error + Send + 'static,
        P: SuccessPredicate<T>,
    {
        let start = Instant::now();
        let max_attempts = self.config.max_attempts;
        let mut failures: Vec<AttemptFailure<E>> = Vec::new();

        for attempt in 1..=max_attempts {
            self.observer.on_attempt_start(attempt, max_attempts);

            match op().await {
                Ok(value) => {
                    if self.predicate.accept(&value) {
                        self.observer.on_success(attempt, start.elapsed());
                        return Ok(value);
                    }

                    self.observer.on_rejected(attempt);
                    failures.push(AttemptFailure::Rejected);
                }
                Err(err) => {
                    self.observer.on_task_failed(attempt, &err);
                    failures.push(AttemptFailure::Task(err));
                }
            }
        }

        // Budget validated at build time, so the loop ran and the log is
        // non-empty.
        let exhausted = RetryExhausted::new(max_attempts, failures);
        if let Some(last) = exhausted.last_failure() {
            self.observer.on_exhausted(exhausted.attempts(), last);
        }
        Err(exhausted)
    }
}
