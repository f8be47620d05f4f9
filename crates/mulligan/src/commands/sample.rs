//! Sample command - retry a random draw until it clears a threshold

use anyhow::{bail, Result};
use mulligan_core::retry::{ClosurePredicate, RetryTaskBuilder, TracingObserver};
use mulligan_core::RetryConfig;
use rand::Rng;

use crate::cli::SampleArgs;
use crate::output;

pub async fn run(args: SampleArgs, attempts: u32) -> Result<()> {
    if args.min > args.max {
        bail!("--min ({}) must not exceed --max ({})", args.min, args.max);
    }

    tracing::debug!(
        min = args.min,
        max = args.max,
        threshold = args.threshold,
        attempts = attempts,
        "starting sample demo"
    );

    let threshold = args.threshold;
    let task = RetryTaskBuilder::new()
        .with_config(RetryConfig::new(attempts))
        .with_predicate(ClosurePredicate::new(move |sample: &f64| {
            *sample < threshold
        }))
        .with_observer(TracingObserver::new("sample"))
        .build()?;

    let (min, max) = (args.min, args.max);
    let outcome = task
        .run(|| {
            let sample = rand::rng().random_range(min..=max);
            async move { Ok::<_, std::io::Error>(sample) }
        })
        .await;

    match outcome {
        Ok(sample) => {
            output::success(&format!("accepted sample {:.4}", sample));
            Ok(())
        }
        Err(err) => {
            output::error(&err.to_string());
            for (i, failure) in err.failures().iter().enumerate() {
                output::kv(&format!("attempt {}", i + 1), &failure.to_string());
            }
            bail!(
                "no sample below {} within {} attempts",
                threshold,
                err.max_attempts()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_threshold_above_range_accepts_first_sample() {
        let args = SampleArgs {
            min: 1.0,
            max: 3.0,
            threshold: 10.0,
        };

        assert!(run(args, 5).await.is_ok());
    }

    #[tokio::test]
    async fn test_threshold_below_range_exhausts_budget() {
        let args = SampleArgs {
            min: 1.0,
            max: 3.0,
            threshold: 0.0,
        };

        assert!(run(args, 3).await.is_err());
    }

    #[tokio::test]
    async fn test_inverted_range_is_rejected() {
        let args = SampleArgs {
            min: 3.0,
            max: 1.0,
            threshold: 2.0,
        };

        assert!(run(args, 5).await.is_err());
    }
}
