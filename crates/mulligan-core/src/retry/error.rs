//! Error types for the retry execution engine
//!
//! This module defines the per-attempt failure record and the aggregate
//! error returned when the attempt budget runs out.

use std::error::Error;
use std::fmt;

/// A single recorded failure from one attempt
///
/// The type is generic over `E`, the error type of the operation being
/// retried. An attempt fails either because the task itself returned an
/// error or because the success predicate refused the task's result.
#[derive(Debug)]
pub enum AttemptFailure<E> {
    /// The task returned an error
    Task(E),

    /// The task succeeded but the success predicate rejected the result
    Rejected,
}

impl<E> AttemptFailure<E> {
    /// Check if this failure came from the task itself
    pub fn is_task(&self) -> bool {
        matches!(self, AttemptFailure::Task(_))
    }

    /// Check if this failure was a predicate rejection
    pub fn is_rejected(&self) -> bool {
        matches!(self, AttemptFailure::Rejected)
    }

    /// Get the task error, consuming this failure
    pub fn into_task_error(self) -> Option<E> {
        match self {
            AttemptFailure::Task(err) => Some(err),
            AttemptFailure::Rejected => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for AttemptFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptFailure::Task(err) => write!(f, "{}", err),
            AttemptFailure::Rejected => write!(f, "result rejected by success predicate"),
        }
    }
}

impl<E: Error + 'static> Error for AttemptFailure<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AttemptFailure::Task(err) => Some(err),
            AttemptFailure::Rejected => None,
        }
    }
}

/// All retry attempts have been exhausted
///
/// This is the only failure that crosses the executor boundary at run time.
/// It carries the configured attempt budget and the full ordered log of
/// per-attempt failures, enabling post-mortem diagnosis without having to
/// instrument each attempt.
#[derive(Debug)]
pub struct RetryExhausted<E> {
    /// Configured attempt budget
    max_attempts: u32,

    /// Every per-attempt failure, in the order attempts occurred
    failures: Vec<AttemptFailure<E>>,
}

impl<E> RetryExhausted<E> {
    pub(crate) fn new(max_attempts: u32, failures: Vec<AttemptFailure<E>>) -> Self {
        Self {
            max_attempts,
            failures,
        }
    }

    /// Get the configured attempt budget
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Get the number of attempts made (one recorded failure per attempt)
    pub fn attempts(&self) -> u32 {
        self.failures.len() as u32
    }

    /// Get the ordered failure log
    pub fn failures(&self) -> &[AttemptFailure<E>] {
        &self.failures
    }

    /// Get the ordered failure log, consuming this error
    pub fn into_failures(self) -> Vec<AttemptFailure<E>> {
        self.failures
    }

    /// Get the failure recorded on the final attempt
    pub fn last_failure(&self) -> Option<&AttemptFailure<E>> {
        self.failures.last()
    }

    /// Map the task error type using a closure
    pub fn map_err<F, E2>(self, mut f: F) -> RetryExhausted<E2>
    where
        F: FnMut(E) -> E2,
    {
        RetryExhausted {
            max_attempts: self.max_attempts,
            failures: self
                .failures
                .into_iter()
                .map(|failure| match failure {
                    AttemptFailure::Task(err) => AttemptFailure::Task(f(err)),
                    AttemptFailure::Rejected => AttemptFailure::Rejected,
                })
                .collect(),
        }
    }
}

impl<E: fmt::Display> fmt::Display for RetryExhausted<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failures.last() {
            Some(last) => write!(
                f,
                "retry exhausted after {} attempts: {}",
                self.attempts(),
                last
            ),
            None => write!(f, "retry exhausted with no attempts recorded"),
        }
    }
}

impl<E: Error + 'static> Error for RetryExhausted<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.failures
            .last()
            .map(|failure| failure as &(dyn Error + 'static))
    }
}
