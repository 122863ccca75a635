use std::env;
use std::time::Duration;

use anyhow::Context;
use catalog::simulation::SimulationConfig;

/// Settings for the simulated catalog backend
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub simulation: SimulationConfig,
    pub start_offline: bool,
    pub seed: bool,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_LATENCY_MS: Simulated remote latency in milliseconds (default: 500)
    /// - CATALOG_FAILURE_RATE: Probability in [0, 1] that a remote call fails (default: 0.2)
    /// - CATALOG_OFFLINE: Start with connectivity disabled (default: false)
    /// - CATALOG_SEED: Populate the remote source with demo products (default: true)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let latency_ms = match lookup("CATALOG_LATENCY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("CATALOG_LATENCY_MS is not a number: {raw}"))?,
            None => 500,
        };
        let failure_rate = match lookup("CATALOG_FAILURE_RATE") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("CATALOG_FAILURE_RATE is not a number: {raw}"))?,
            None => 0.2,
        };
        let start_offline = parse_flag(lookup("CATALOG_OFFLINE"), false)
            .context("CATALOG_OFFLINE must be true or false")?;
        let seed = parse_flag(lookup("CATALOG_SEED"), true)
            .context("CATALOG_SEED must be true or false")?;

        Ok(Self {
            simulation: SimulationConfig::new(Duration::from_millis(latency_ms), failure_rate),
            start_offline,
            seed,
        })
    }
}

fn parse_flag(raw: Option<String>, default: bool) -> anyhow::Result<bool> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid flag value: {other}"),
    }
}
