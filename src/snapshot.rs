//! Wholesale state capture and restore
//!
//! Persistence collaborators own their wire format; what the core provides
//! is a serializable view of everything a trained network needs to come
//! back: topology, activation function, momentum, and per-synapse weight and
//! momentum state. Restoring builds a fresh object graph in one atomic
//! step; there is no incremental editing of a live network.

use serde::{Deserialize, Serialize};

use crate::activator::Activator;
use crate::error::{MindError, Result};
use crate::mind::Mind;

/// Trainable state of one synapse.
///
/// `source` and `target` are arena indices; synapse records appear in the
/// deterministic wiring order (layer pair by layer pair, source-major), so a
/// snapshot can be checked against the wiring its topology implies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynapseState {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    pub previous_delta: f64,
}

/// Full trainable state of a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindSnapshot {
    pub topology: Vec<usize>,
    pub activator: Activator,
    pub momentum: f64,
    pub synapses: Vec<SynapseState>,
}

impl Mind {
    /// Capture the full trainable state of this network.
    pub fn snapshot(&self) -> MindSnapshot {
        MindSnapshot {
            topology: self.topology().to_vec(),
            activator: self.activator(),
            momentum: self.momentum(),
            synapses: self
                .synapses()
                .iter()
                .map(|synapse| SynapseState {
                    source: synapse.source().index(),
                    target: synapse.target().index(),
                    weight: synapse.weight(),
                    previous_delta: synapse.previous_delta(),
                })
                .collect(),
        }
    }

    /// Rebuild a network from a snapshot.
    ///
    /// The result has the snapshot's topology, weights and momentum state;
    /// unit outputs and deltas start zeroed, exactly as after a fresh
    /// construction. The random initializer is never consulted.
    ///
    /// # Errors
    ///
    /// `InvalidTopology` if the snapshot's topology is unusable, and
    /// `DimensionMismatch` if its synapse records do not line up with the
    /// wiring that topology implies.
    pub fn restore(snapshot: &MindSnapshot) -> Result<Self> {
        let mut mind = Mind::build(
            &snapshot.topology,
            snapshot.activator,
            snapshot.momentum,
            |_, _, _| 0.0,
        )?;

        if snapshot.synapses.len() != mind.synapses().len() {
            return Err(MindError::DimensionMismatch {
                what: "synapses",
                got: snapshot.synapses.len(),
                expected: mind.synapses().len(),
            });
        }
        for (synapse, state) in mind.synapses().iter().zip(&snapshot.synapses) {
            if synapse.source().index() != state.source {
                return Err(MindError::DimensionMismatch {
                    what: "synapse source",
                    got: state.source,
                    expected: synapse.source().index(),
                });
            }
            if synapse.target().index() != state.target {
                return Err(MindError::DimensionMismatch {
                    what: "synapse target",
                    got: state.target,
                    expected: synapse.target().index(),
                });
            }
        }
        for (synapse, state) in mind.synapses_mut().iter_mut().zip(&snapshot.synapses) {
            synapse.set_weight(state.weight);
            synapse.set_previous_delta(state.previous_delta);
        }

        Ok(mind)
    }
}
