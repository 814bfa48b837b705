//! Units (neurons) and the per-unit math of the engine
//!
//! A unit owns its current output value and a transient error delta, plus
//! handle lists for its incoming and outgoing synapses. The actual math
//! (activation, output/hidden delta computation, weight update) is written
//! as functions over the neuron and synapse arenas so that one unit can read
//! its neighbours' state through the handles without reference cycles.
//!
//! Ordering contract (enforced by the network, relied on here):
//! - `activate` for layer i+1 runs only after layer i is fully finalized;
//! - `compute_hidden_delta` for layer i runs only after every unit in layer
//!   i+1 has its delta set this pass;
//! - `update_weights` runs only after every delta in the whole network is
//!   final.

use crate::activator::Activator;
use crate::synapse::{Synapse, SynapseId};

/// Handle into the network's neuron arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeuronId(pub(crate) usize);

impl NeuronId {
    /// Position of this unit in the network's neuron arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single unit of the network.
///
/// The output value is 0.0 until the first forward pass (or input
/// injection). The delta is only meaningful between a backpropagation pass
/// and the weight update that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    output: f64,
    delta: f64,
    incoming: Vec<SynapseId>,
    outgoing: Vec<SynapseId>,
}

impl Neuron {
    pub(crate) fn new() -> Self {
        Self {
            output: 0.0,
            delta: 0.0,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Current output value.
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Error delta from the most recent backpropagation pass.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Synapses feeding into this unit.
    pub fn incoming(&self) -> &[SynapseId] {
        &self.incoming
    }

    /// Synapses leading out of this unit.
    pub fn outgoing(&self) -> &[SynapseId] {
        &self.outgoing
    }

    /// Inject an output value directly, bypassing the activation function.
    /// Used on input-layer units only.
    pub(crate) fn set_output(&mut self, output: f64) {
        self.output = output;
    }

    pub(crate) fn set_delta(&mut self, delta: f64) {
        self.delta = delta;
    }

    pub(crate) fn push_incoming(&mut self, id: SynapseId) {
        self.incoming.push(id);
    }

    pub(crate) fn push_outgoing(&mut self, id: SynapseId) {
        self.outgoing.push(id);
    }
}

/// Compute a non-input unit's activation from its incoming synapses:
/// `output = activate(Σ source.output * weight)`.
pub(crate) fn activate(
    neurons: &mut [Neuron],
    synapses: &[Synapse],
    id: NeuronId,
    activator: Activator,
) {
    let mut raw = 0.0;
    for &sid in neurons[id.index()].incoming() {
        let synapse = &synapses[sid.index()];
        raw += neurons[synapse.source().index()].output() * synapse.weight();
    }
    neurons[id.index()].set_output(activator.activate(raw));
}

/// Compute an output-layer unit's delta against its target value:
/// `delta = derivative(output) * (target - output)`.
pub(crate) fn compute_output_delta(
    neurons: &mut [Neuron],
    id: NeuronId,
    target: f64,
    activator: Activator,
) {
    let unit = &mut neurons[id.index()];
    let error = target - unit.output();
    unit.set_delta(activator.derivative(unit.output()) * error);
}

/// Compute a hidden unit's delta from the next layer's already-final deltas:
/// `delta = derivative(output) * Σ outgoing (target.delta * weight)`.
pub(crate) fn compute_hidden_delta(
    neurons: &mut [Neuron],
    synapses: &[Synapse],
    id: NeuronId,
    activator: Activator,
) {
    let mut error = 0.0;
    for &sid in neurons[id.index()].outgoing() {
        let synapse = &synapses[sid.index()];
        error += neurons[synapse.target().index()].delta() * synapse.weight();
    }
    let unit = &mut neurons[id.index()];
    let delta = activator.derivative(unit.output()) * error;
    unit.set_delta(delta);
}

/// Apply the momentum SGD update to every outgoing synapse of a unit.
///
/// The gradient term belongs to the edge: `change = target.delta *
/// source.output`, then `weight += learning_rate * change + momentum *
/// previous_delta` and `previous_delta = change`.
pub(crate) fn update_weights(
    neurons: &[Neuron],
    synapses: &mut [Synapse],
    id: NeuronId,
    learning_rate: f64,
    momentum: f64,
) {
    let output = neurons[id.index()].output();
    for &sid in neurons[id.index()].outgoing() {
        let synapse = &mut synapses[sid.index()];
        let change = neurons[synapse.target().index()].delta() * output;
        let weight = synapse.weight() + learning_rate * change + momentum * synapse.previous_delta();
        synapse.set_weight(weight);
        synapse.set_previous_delta(change);
    }
}
