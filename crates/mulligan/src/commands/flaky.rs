//! Flaky command - deterministic demo of a task that recovers after failures

use std::io;
use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::{bail, Result};
use mulligan_core::retry::{RetryTaskBuilder, TracingObserver};
use mulligan_core::RetryConfig;

use crate::cli::FlakyArgs;
use crate::output;

pub async fn run(args: FlakyArgs, attempts: u32) -> Result<()> {
    tracing::debug!(
        fail_first = args.fail_first,
        attempts = attempts,
        "starting flaky demo"
    );

    output::info(&format!(
        "task fails its first {} calls, budget is {} attempts",
        args.fail_first, attempts
    ));

    let task = RetryTaskBuilder::new()
        .with_config(RetryConfig::new(attempts))
        .with_observer(TracingObserver::new("flaky"))
        .build()?;

    let fail_first = args.fail_first;
    let calls = AtomicU32::new(0);
    let outcome = task
        .run(|| {
            let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if call <= fail_first {
                    Err(io::Error::new(
                        io::ErrorKind::ConnectionRefused,
                        format!("service unavailable (call {})", call),
                    ))
                } else {
                    Ok(call)
                }
            }
        })
        .await;

    match outcome {
        Ok(call) => {
            output::success(&format!("task succeeded on call {}", call));
            Ok(())
        }
        Err(err) => {
            output::error(&err.to_string());
            for (i, failure) in err.failures().iter().enumerate() {
                output::kv(&format!("attempt {}", i + 1), &failure.to_string());
            }
            bail!("task still failing after {} attempts", err.max_attempts())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recovers_within_budget() {
        let args = FlakyArgs { fail_first: 2 };

        assert!(run(args, 5).await.is_ok());
    }

    #[tokio::test]
    async fn test_exhausts_budget_when_failures_outlast_it() {
        let args = FlakyArgs { fail_first: 5 };

        assert!(run(args, 2).await.is_err());
    }

    #[tokio::test]
    async fn test_zero_fail_first_succeeds_immediately() {
        let args = FlakyArgs { fail_first: 0 };

        assert!(run(args, 1).await.is_ok());
    }
}
