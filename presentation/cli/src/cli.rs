//! Command line flags for the interactive catalog console.

use clap::Parser;

/// Interactive CRUD console over an in-process product catalog
#[derive(Parser, Debug)]
#[command(name = "catalog-cli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Simulated latency of every remote call, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub latency_ms: u64,

    /// Probability in [0, 1] that a remote call fails
    #[arg(long, default_value_t = 0.0)]
    pub failure_rate: f64,

    /// Start with an empty catalog instead of the demo products
    #[arg(long)]
    pub empty: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default tracing filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_instant_seeded_catalog() {
        let cli = Cli::try_parse_from(["catalog-cli"]).unwrap();

        assert_eq!(cli.latency_ms, 0);
        assert_eq!(cli.failure_rate, 0.0);
        assert!(!cli.empty);
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn should_parse_simulation_flags() {
        let cli = Cli::try_parse_from([
            "catalog-cli",
            "--latency-ms",
            "250",
            "--failure-rate",
            "0.5",
            "--empty",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.latency_ms, 250);
        assert_eq!(cli.failure_rate, 0.5);
        assert!(cli.empty);
        assert_eq!(cli.log_filter(), "debug");
    }

    #[test]
    fn should_reject_non_numeric_latency() {
        assert!(Cli::try_parse_from(["catalog-cli", "--latency-ms", "soon"]).is_err());
    }
}
