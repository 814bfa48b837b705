//! Construction options for a network
//!
//! This module provides the configuration structure consumed by
//! [`Mind::with_config`](crate::Mind::with_config), plus JSON loading with a
//! validation pass so option files can be edited without code changes.

use serde::Deserialize;
use std::error::Error;
use std::fs;

/// Learning rate used when a caller has no opinion.
pub const DEFAULT_LEARNING_RATE: f64 = 0.2;

/// Momentum factor used when a caller has no opinion.
pub const DEFAULT_MOMENTUM: f64 = 0.01;

/// Uniform weight initialization range shared by all layer pairs by default.
pub const DEFAULT_WEIGHT_RANGE: (f64, f64) = (-0.2, 0.2);

/// Options applied when building a network.
///
/// All fields have defaults, so a JSON file only needs the entries it wants
/// to override:
///
/// ```json
/// {
///   "seed": 42,
///   "momentum": 0.01,
///   "output_weight_range": [-2.0, 2.0]
/// }
/// ```
///
/// `output_weight_range` is the historical knob that gave synapses feeding
/// the final output layer a wider initialization range than the rest of the
/// network. It is off (`None`) by default: every layer pair then draws from
/// `weight_range`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MindConfig {
    /// Seed for weight initialization; `None` seeds from the current time.
    pub seed: Option<u64>,
    /// Fraction of the previous weight change re-applied on each update.
    pub momentum: f64,
    /// Uniform initialization range for synapse weights, inclusive.
    pub weight_range: (f64, f64),
    /// Distinct range for the layer pair feeding the output layer.
    pub output_weight_range: Option<(f64, f64)>,
}

impl Default for MindConfig {
    fn default() -> Self {
        Self {
            seed: None,
            momentum: DEFAULT_MOMENTUM,
            weight_range: DEFAULT_WEIGHT_RANGE,
            output_weight_range: None,
        }
    }
}

impl MindConfig {
    /// Loads construction options from a JSON file.
    ///
    /// # Returns
    ///
    /// `Ok(MindConfig)` on success, or an error if the file cannot be read,
    /// the JSON is invalid, or a value fails validation.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(path)?;
        let config: MindConfig = serde_json::from_str(&contents)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Initialization range for the given layer pair.
    ///
    /// `pair` counts adjacent layer pairs from the input side; `pair_count`
    /// is the total number of pairs, so the last pair is the one feeding the
    /// output layer.
    pub fn range_for(&self, pair: usize, pair_count: usize) -> (f64, f64) {
        if pair + 1 == pair_count {
            self.output_weight_range.unwrap_or(self.weight_range)
        } else {
            self.weight_range
        }
    }
}

fn invalid_data(message: String) -> Box<dyn Error> {
    Box::new(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        message,
    ))
}

/// Validates a configuration.
///
/// Checks that momentum is finite and non-negative and that each range is
/// ordered min ≤ max.
fn validate_config(config: &MindConfig) -> Result<(), Box<dyn Error>> {
    if !config.momentum.is_finite() || config.momentum < 0.0 {
        return Err(invalid_data(format!(
            "momentum must be finite and non-negative, got {}",
            config.momentum
        )));
    }

    let mut ranges = vec![("weight_range", config.weight_range)];
    if let Some(range) = config.output_weight_range {
        ranges.push(("output_weight_range", range));
    }
    for (name, (min, max)) in ranges {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(invalid_data(format!(
                "{} must be an ordered pair of finite bounds, got [{}, {}]",
                name, min, max
            )));
        }
    }

    Ok(())
}
