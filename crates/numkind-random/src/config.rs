//! Sampler configuration

use numkind_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters of a [`ScalarSampler`](crate::ScalarSampler)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Seed of the generator stream; equal seeds give equal sequences
    pub seed: u64,
    /// Probability of drawing One (rather than Zero) from
    /// `next_between_zero_one` on representations that are not fields
    pub bernoulli_threshold: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            bernoulli_threshold: 0.5,
        }
    }
}

impl SamplerConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn with_bernoulli_threshold(mut self, threshold: f64) -> Self {
        self.bernoulli_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.bernoulli_threshold) {
            return Err(Error::InvalidParameter(format!(
                "Bernoulli threshold {} must be in [0, 1]",
                self.bernoulli_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SamplerConfig::default();
        assert_eq!(config.seed, 0);
        assert_eq!(config.bernoulli_threshold, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        assert!(SamplerConfig::new(1).with_bernoulli_threshold(1.5).validate().is_err());
        assert!(SamplerConfig::new(1).with_bernoulli_threshold(-0.1).validate().is_err());
        assert!(SamplerConfig::new(1).with_bernoulli_threshold(f64::NAN).validate().is_err());
        assert!(SamplerConfig::new(1).with_bernoulli_threshold(1.0).validate().is_ok());
    }

    #[test]
    fn test_json_round_trip_and_defaults() {
        let config = SamplerConfig::new(42).with_bernoulli_threshold(0.25);
        let json = serde_json::to_string(&config).unwrap();
        let back: SamplerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let partial: SamplerConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(partial, SamplerConfig::new(7));
    }
}
