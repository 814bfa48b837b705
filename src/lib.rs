//! Mind: a minimal feed-forward neural network engine
//!
//! This library builds a layered network of units connected by weighted
//! synapses, computes forward activations, and adjusts weights via online
//! backpropagation with momentum. Training is strictly online: one sample
//! updates the weights immediately, and lesson sweeps run in a fixed,
//! deterministic order.
//!
//! # Modules
//!
//! - `activator`: activation functions and their derivatives
//! - `synapse`: weighted edges with momentum state
//! - `neuron`: units and the per-unit math
//! - `layer`: ordered unit groups of one depth
//! - `mind`: the network itself (construction, predict, backpropagate, train)
//! - `config`: construction options (seed, momentum, init ranges)
//! - `snapshot`: wholesale state capture/restore for persistence
//! - `error`: the two failure kinds
//! - `utils`: seeded RNG

pub mod activator;
pub mod config;
pub mod error;
pub mod layer;
pub mod mind;
pub mod neuron;
pub mod snapshot;
pub mod synapse;
pub mod utils;

pub use activator::Activator;
pub use config::{MindConfig, DEFAULT_LEARNING_RATE, DEFAULT_MOMENTUM, DEFAULT_WEIGHT_RANGE};
pub use error::{MindError, Result};
pub use layer::Layer;
pub use mind::{Lesson, Mind};
pub use neuron::{Neuron, NeuronId};
pub use snapshot::{MindSnapshot, SynapseState};
pub use synapse::{Synapse, SynapseId};
