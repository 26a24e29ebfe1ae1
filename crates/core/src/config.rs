//! Game configuration.

use crate::error::ConfigError;
use crate::types::{DEFAULT_FLIP_BACK_TICKS, DEFAULT_MAX_STEPS};

/// Tunables for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Mismatches allowed before clicks are locked out
    pub max_steps: u32,
    /// Ticks a mismatched pair stays face-up
    pub flip_back_delay_ticks: u32,
    /// Deal seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            flip_back_delay_ticks: DEFAULT_FLIP_BACK_TICKS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `CONCENTRATION_MAX_STEPS`
    /// - `CONCENTRATION_FLIP_DELAY` (ticks)
    /// - `CONCENTRATION_SEED`
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let max_steps = env::var("CONCENTRATION_MAX_STEPS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_STEPS);

        let flip_back_delay_ticks = env::var("CONCENTRATION_FLIP_DELAY")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_FLIP_BACK_TICKS);

        let seed = env::var("CONCENTRATION_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        Self {
            max_steps,
            flip_back_delay_ticks,
            seed,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_flip_back_delay(mut self, ticks: u32) -> Self {
        self.flip_back_delay_ticks = ticks;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroMaxSteps);
        }
        if self.flip_back_delay_ticks == 0 {
            return Err(ConfigError::ZeroFlipBackDelay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_steps, 100);
        assert_eq!(config.flip_back_delay_ticks, 20);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders() {
        let config = GameConfig::default()
            .with_max_steps(3)
            .with_flip_back_delay(5)
            .with_seed(42);
        assert_eq!(config.max_steps, 3);
        assert_eq!(config.flip_back_delay_ticks, 5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn validate_rejects_zero_values() {
        assert_eq!(
            GameConfig::default().with_max_steps(0).validate(),
            Err(ConfigError::ZeroMaxSteps)
        );
        assert_eq!(
            GameConfig::default().with_flip_back_delay(0).validate(),
            Err(ConfigError::ZeroFlipBackDelay)
        );
    }
}
