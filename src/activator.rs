//! Activation functions for network units
//!
//! This module provides the closed set of activation functions a network can
//! use. Every variant is a pure scalar function paired with its true
//! mathematical derivative; the network stores a single copy and hands it by
//! reference into per-unit math, so swapping the function re-points every
//! unit at once.

use serde::{Deserialize, Serialize};

/// Activation function shared by all units of a network.
///
/// Both `activate` and `derivative` must be finite for all practical inputs;
/// callers are responsible for choosing a variant with bounded gradients for
/// their value range. The derivative is the true mathematical derivative of
/// the activation, evaluated at whatever point the caller passes in.
///
/// # Example
///
/// ```
/// use mind::Activator;
///
/// let activator = Activator::HTan;
/// assert!((activator.activate(0.0)).abs() < 1e-12);
/// assert!((activator.derivative(0.0) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activator {
    /// Logistic function, output range (0, 1).
    Sigmoid,
    /// Hyperbolic tangent, output range (-1, 1).
    HTan,
    /// Sine, output range [-1, 1].
    Sine,
}

impl Activator {
    /// Apply the activation function to a raw unit sum.
    pub fn activate(&self, x: f64) -> f64 {
        match self {
            Activator::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activator::HTan => x.tanh(),
            Activator::Sine => x.sin(),
        }
    }

    /// Derivative of the activation function at `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Activator::Sigmoid => {
                let y = 1.0 / (1.0 + (-x).exp());
                y * (1.0 - y)
            }
            Activator::HTan => 1.0 - x.tanh().powi(2),
            Activator::Sine => x.cos(),
        }
    }
}
