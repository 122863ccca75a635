use std::time::Duration;

/// Configuration for the simulated remote source
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub latency: Duration,
    pub failure_rate: f64,
}

impl SimulationConfig {
    /// Creates a configuration, clamping the failure rate into `[0, 1]`.
    /// A NaN rate is treated as "never fail".
    pub fn new(latency: Duration, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        Self {
            latency,
            failure_rate,
        }
    }

    /// No latency and no failures.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, 0.0)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), 0.2)
    }
}
