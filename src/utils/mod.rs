//! Shared utilities for the network core
//!
//! Currently this is the seeded random number generator used for weight
//! initialization.

pub mod rng;

pub use rng::SimpleRng;
