//! CLI argument parsing with clap

use clap::{Args, Parser, Subcommand};

/// Mulligan - bounded retry demonstrations for flaky operations
#[derive(Parser, Debug)]
#[command(name = "mulligan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Attempt budget for the wrapped task
    #[arg(short, long, global = true, default_value_t = 5)]
    pub attempts: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw random samples until one falls below a threshold
    Sample(SampleArgs),

    /// Run a task that fails a fixed number of times before succeeding
    Flaky(FlakyArgs),
}

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Lower bound of the sampled range
    #[arg(long, default_value_t = 1.0)]
    pub min: f64,

    /// Upper bound of the sampled range
    #[arg(long, default_value_t = 3.0)]
    pub max: f64,

    /// Accept a sample only when it is below this value
    #[arg(long, default_value_t = 2.0)]
    pub threshold: f64,
}

#[derive(Args, Debug)]
pub struct FlakyArgs {
    /// Number of calls that fail before the task starts succeeding
    #[arg(long, default_value_t = 3)]
    pub fail_first: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::try_parse_from(["mulligan", "flaky"]).unwrap();
        assert_eq!(cli.attempts, 5);
        assert!(!cli.quiet);
        assert!(matches!(cli.command, Commands::Flaky(args) if args.fail_first == 3));
    }

    #[test]
    fn test_cli_parses_sample_flags() {
        let cli = Cli::try_parse_from([
            "mulligan",
            "sample",
            "--min",
            "0.0",
            "--max",
            "10.0",
            "--threshold",
            "1.5",
        ])
        .unwrap();

        match cli.command {
            Commands::Sample(args) => {
                assert_eq!(args.min, 0.0);
                assert_eq!(args.max, 10.0);
                assert_eq!(args.threshold, 1.5);
            }
            _ => panic!("expected sample subcommand"),
        }
    }

    #[test]
    fn test_global_attempts_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["mulligan", "flaky", "--attempts", "2"]).unwrap();
        assert_eq!(cli.attempts, 2);
    }
}
