//! Playback and array configuration, validation, and generation.
//!
//! [`PlaybackConfig`] controls pacing and per-algorithm tuning for a
//! [`Player`](crate::Player). [`ArrayConfig`] describes a random input
//! array and draws one with [`generate()`](ArrayConfig::generate).
//! Both derive serde so a host can persist or transmit them.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sortvis_algorithms::{procedure_for, BucketSort, DEFAULT_BUCKET_WIDTH};
use sortvis_core::{Algorithm, Value};
use sortvis_step::SortProcedure;

use crate::error::ConfigError;

/// Slowest speed setting.
pub const MIN_SPEED: u8 = 1;
/// Fastest speed setting.
pub const MAX_SPEED: u8 = 100;
/// Speed used by [`Pacing::default()`].
pub const DEFAULT_SPEED: u8 = 50;
/// Pacing interval in ms is this minus the speed setting.
const PACE_BASE_MS: u64 = 105;

// ── Pacing ─────────────────────────────────────────────────────────

/// Delay inserted at each suspension point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// A speed setting in `1..=100`; the interval is `105 - speed` ms,
    /// so 100 gives 5 ms and 1 gives 104 ms.
    Speed(u8),
    /// An explicit interval. Zero disables pacing.
    Fixed(Duration),
}

impl Pacing {
    /// Resolve to a concrete interval.
    ///
    /// An out-of-range speed is clamped into `1..=100`; use
    /// [`PlaybackConfig::validate`] to reject it instead.
    pub fn interval(&self) -> Duration {
        match *self {
            Self::Speed(speed) => {
                let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
                Duration::from_millis(PACE_BASE_MS - u64::from(speed))
            }
            Self::Fixed(interval) => interval,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::Speed(DEFAULT_SPEED)
    }
}

// ── PlaybackConfig ─────────────────────────────────────────────────

/// Configuration for a [`Player`](crate::Player).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay at each suspension point. Default: speed 50 (55 ms).
    pub pacing: Pacing,
    /// Value span per bucket for bucket sort. Default: 5.
    pub bucket_width: Value,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            pacing: Pacing::default(),
            bucket_width: DEFAULT_BUCKET_WIDTH,
        }
    }
}

impl PlaybackConfig {
    /// A config with the given pacing and defaults elsewhere.
    pub fn with_pacing(pacing: Pacing) -> Self {
        Self {
            pacing,
            ..Self::default()
        }
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Pacing::Speed(speed) = self.pacing {
            if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
                return Err(ConfigError::SpeedOutOfRange { speed });
            }
        }
        if self.bucket_width == 0 {
            return Err(ConfigError::InvalidBucketWidth);
        }
        Ok(())
    }

    /// Build the procedure for `algorithm` under this config.
    pub fn procedure(&self, algorithm: Algorithm) -> Result<Box<dyn SortProcedure>, ConfigError> {
        match algorithm {
            Algorithm::Bucket => {
                let sorter = BucketSort::with_width(self.bucket_width)
                    .map_err(|_| ConfigError::InvalidBucketWidth)?;
                Ok(Box::new(sorter))
            }
            other => Ok(procedure_for(other)),
        }
    }
}

// ── ArrayConfig ────────────────────────────────────────────────────

/// Description of a uniformly random input array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    /// Number of elements. Default: 50.
    pub size: usize,
    /// Smallest value drawn, inclusive. Default: 1.
    pub min_value: Value,
    /// Largest value drawn, inclusive. Default: 100.
    pub max_value: Value,
    /// RNG seed. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            size: 50,
            min_value: 1,
            max_value: 100,
            seed: None,
        }
    }
}

impl ArrayConfig {
    /// Check the config describes a non-empty array over a valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyArray);
        }
        if self.min_value > self.max_value {
            return Err(ConfigError::InvalidValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }

    /// Draw an array.
    ///
    /// Never fails: size 0 yields an empty array, and an inverted range
    /// is read with its bounds swapped. Deterministic when `seed` is set.
    pub fn generate(&self) -> Vec<Value> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        let lo = self.min_value.min(self.max_value);
        let hi = self.min_value.max(self.max_value);
        (0..self.size).map(|_| rng.random_range(lo..=hi)).collect()
    }
}
