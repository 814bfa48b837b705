//! The network itself: topology construction and the three core passes
//!
//! A [`Mind`] owns every layer, unit and synapse of one feed-forward
//! network. Units and synapses live in flat arenas and refer to each other
//! through integer handles, so the unit ↔ synapse ↔ unit cycle needs no
//! shared ownership. All three operations run to completion synchronously;
//! layer boundaries are the only ordering barriers (forward order for
//! `predict`, reverse order for the delta passes).

use log::debug;

use crate::activator::Activator;
use crate::config::MindConfig;
use crate::error::{MindError, Result};
use crate::layer::Layer;
use crate::neuron::{self, Neuron, NeuronId};
use crate::synapse::{Synapse, SynapseId};
use crate::utils::SimpleRng;

/// One lesson for [`Mind::train`]: an input vector and its target vector.
pub type Lesson = (Vec<f64>, Vec<f64>);

/// A feed-forward neural network.
///
/// Built once from a topology (one width per layer) and an activation
/// function; after that the structure is fixed and only the numeric state
/// (outputs, deltas, weights, momentum) changes, via `predict`,
/// `backpropagate` and `train`.
///
/// # Example
///
/// ```
/// use mind::{Activator, Mind, MindConfig};
///
/// let config = MindConfig { seed: Some(42), ..MindConfig::default() };
/// let mut mind = Mind::with_config(&[2, 3, 1], Activator::HTan, &config).unwrap();
///
/// mind.predict(&[1.0, 0.0]).unwrap();
/// let error = mind.backpropagate(&[1.0], 0.2).unwrap();
/// assert_eq!(error, mind.get_error());
/// ```
pub struct Mind {
    topology: Vec<usize>,
    activator: Activator,
    momentum: f64,
    layers: Vec<Layer>,
    neurons: Vec<Neuron>,
    synapses: Vec<Synapse>,
    last_error: f64,
}

impl Mind {
    /// Build a network with default options (time-seeded weights, momentum
    /// 0.01, uniform initialization range).
    ///
    /// # Errors
    ///
    /// `InvalidTopology` if `topology` has fewer than 2 entries or any entry
    /// is zero.
    pub fn new(topology: &[usize], activator: Activator) -> Result<Self> {
        Self::with_config(topology, activator, &MindConfig::default())
    }

    /// Build a network with explicit construction options.
    ///
    /// Creates one layer per topology entry, then fully connects every unit
    /// in layer *i* to every unit in layer *i+1*, drawing each weight
    /// uniformly from the range the config assigns to that layer pair.
    pub fn with_config(
        topology: &[usize],
        activator: Activator,
        config: &MindConfig,
    ) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_time(),
        };
        let pair_count = topology.len().saturating_sub(1);

        let mind = Self::build(topology, activator, config.momentum, |pair, _, _| {
            let (low, high) = config.range_for(pair, pair_count);
            rng.range(low, high)
        })?;

        debug!(
            "built network: topology {:?}, {} synapses",
            mind.topology,
            mind.synapses.len()
        );
        Ok(mind)
    }

    /// Shared construction path: validates the topology, allocates the unit
    /// arena and layers, and wires the full bipartite connections between
    /// adjacent layers, asking `weight` for each new synapse's value.
    pub(crate) fn build<F>(
        topology: &[usize],
        activator: Activator,
        momentum: f64,
        mut weight: F,
    ) -> Result<Self>
    where
        F: FnMut(usize, NeuronId, NeuronId) -> f64,
    {
        if topology.len() < 2 {
            return Err(MindError::InvalidTopology(format!(
                "need at least input and output layers, got {} entries",
                topology.len()
            )));
        }
        if let Some(position) = topology.iter().position(|&width| width == 0) {
            return Err(MindError::InvalidTopology(format!(
                "layer {} has zero units",
                position
            )));
        }

        let mut neurons = Vec::with_capacity(topology.iter().sum());
        let mut layers = Vec::with_capacity(topology.len());
        for &width in topology {
            let units = (0..width)
                .map(|_| {
                    let id = NeuronId(neurons.len());
                    neurons.push(Neuron::new());
                    id
                })
                .collect();
            layers.push(Layer::new(units));
        }

        let mut synapses = Vec::new();
        for pair in 0..layers.len() - 1 {
            let (sources, targets) = (layers[pair].units(), layers[pair + 1].units());
            for &source in sources {
                for &target in targets {
                    let id = SynapseId(synapses.len());
                    synapses.push(Synapse::new(source, target, weight(pair, source, target)));
                    neurons[source.index()].push_outgoing(id);
                    neurons[target.index()].push_incoming(id);
                }
            }
        }

        Ok(Self {
            topology: topology.to_vec(),
            activator,
            momentum,
            layers,
            neurons,
            synapses,
            last_error: 0.0,
        })
    }

    /// Run a forward pass for one input vector.
    ///
    /// Injects the inputs into the input layer (index-aligned, no activation
    /// applied), then activates every subsequent layer strictly in forward
    /// order.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `inputs` does not match the input layer width;
    /// no unit output is mutated in that case.
    pub fn predict(&mut self, inputs: &[f64]) -> Result<()> {
        if inputs.len() != self.topology[0] {
            return Err(MindError::DimensionMismatch {
                what: "inputs",
                got: inputs.len(),
                expected: self.topology[0],
            });
        }

        for (&id, &value) in self.layers[0].units().iter().zip(inputs) {
            self.neurons[id.index()].set_output(value);
        }
        for layer in &self.layers[1..] {
            layer.feed_forward(&mut self.neurons, &self.synapses, self.activator);
        }
        Ok(())
    }

    /// Run one backpropagation pass against a target vector and apply the
    /// weight updates.
    ///
    /// Strictly ordered: output-layer deltas first (index-aligned with
    /// `targets`), then hidden-layer deltas from the second-to-last layer
    /// backwards (the input layer never receives a delta), then one weight
    /// update pass over every unit with outgoing synapses, using the
    /// configured momentum. Stores and returns
    /// `0.5 * Σ (target - output)²` over the output layer; the outputs are
    /// the ones from the last `predict`, not recomputed after the update.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `targets` does not match the output layer
    /// width; the network is left unchanged in that case.
    pub fn backpropagate(&mut self, targets: &[f64], learning_rate: f64) -> Result<f64> {
        let output_width = self.topology[self.topology.len() - 1];
        if targets.len() != output_width {
            return Err(MindError::DimensionMismatch {
                what: "targets",
                got: targets.len(),
                expected: output_width,
            });
        }

        let last = self.layers.len() - 1;
        for (&id, &target) in self.layers[last].units().iter().zip(targets) {
            neuron::compute_output_delta(&mut self.neurons, id, target, self.activator);
        }
        for layer in self.layers[1..last].iter().rev() {
            for &id in layer.units() {
                neuron::compute_hidden_delta(&mut self.neurons, &self.synapses, id, self.activator);
            }
        }
        for layer in &self.layers[..last] {
            for &id in layer.units() {
                neuron::update_weights(
                    &self.neurons,
                    &mut self.synapses,
                    id,
                    learning_rate,
                    self.momentum,
                );
            }
        }

        let error = self.layers[last]
            .units()
            .iter()
            .zip(targets)
            .map(|(&id, &target)| {
                let difference = target - self.neurons[id.index()].output();
                0.5 * difference * difference
            })
            .sum();
        self.last_error = error;
        Ok(error)
    }

    /// Train on a lesson list for a fixed number of iterations.
    ///
    /// Each iteration sweeps the lessons in their given order, calling
    /// `predict` then `backpropagate` per lesson: online gradient descent
    /// with a deterministic sweep order. No shuffling, no early stopping.
    /// The per-iteration accumulated error is emitted at debug level.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` from the first lesson whose vectors do not match
    /// the topology.
    pub fn train(
        &mut self,
        lessons: &[Lesson],
        iterations: usize,
        learning_rate: f64,
    ) -> Result<()> {
        for iteration in 0..iterations {
            let mut accumulated = 0.0;
            for (inputs, targets) in lessons {
                self.predict(inputs)?;
                accumulated += self.backpropagate(targets, learning_rate)?;
            }
            debug!("iteration {}: accumulated error {:.6}", iteration, accumulated);
        }
        Ok(())
    }

    /// Output-layer values from the most recent `predict`, index-aligned to
    /// the output layer's unit order. Stale until `predict` has been called.
    pub fn get_output(&self) -> Vec<f64> {
        self.layers[self.layers.len() - 1]
            .units()
            .iter()
            .map(|&id| self.neurons[id.index()].output())
            .collect()
    }

    /// Sum of squared output errors from the most recent backpropagation,
    /// 0.0 until the first call.
    pub fn get_error(&self) -> f64 {
        self.last_error
    }

    /// The layer widths this network was built from.
    pub fn topology(&self) -> &[usize] {
        &self.topology
    }

    /// Layers in order, index 0 = input.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The activation function currently shared by all units.
    pub fn activator(&self) -> Activator {
        self.activator
    }

    /// Replace the shared activation function. Every unit picks up the new
    /// function on its next pass; there is no per-unit copy to migrate.
    pub fn swap_activator(&mut self, activator: Activator) {
        self.activator = activator;
    }

    /// Configured momentum factor.
    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Unit state behind a handle.
    pub fn neuron(&self, id: NeuronId) -> &Neuron {
        &self.neurons[id.index()]
    }

    /// Synapse state behind a handle.
    pub fn synapse(&self, id: SynapseId) -> &Synapse {
        &self.synapses[id.index()]
    }

    /// Mutable synapse state behind a handle, for callers that overwrite
    /// weights or momentum directly.
    pub fn synapse_mut(&mut self, id: SynapseId) -> &mut Synapse {
        &mut self.synapses[id.index()]
    }

    pub(crate) fn synapses(&self) -> &[Synapse] {
        &self.synapses
    }

    pub(crate) fn synapses_mut(&mut self) -> &mut [Synapse] {
        &mut self.synapses
    }
}
