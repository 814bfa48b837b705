//! Layers: ordered groups of units of one depth

use crate::activator::Activator;
use crate::neuron::{self, Neuron, NeuronId};
use crate::synapse::Synapse;

/// An ordered collection of units at one depth of the network.
///
/// The order of units is what defines output-vector indexing: the first
/// unit's value is always output index 0, and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    units: Vec<NeuronId>,
}

impl Layer {
    pub(crate) fn new(units: Vec<NeuronId>) -> Self {
        Self { units }
    }

    /// Units of this layer, in index order.
    pub fn units(&self) -> &[NeuronId] {
        &self.units
    }

    /// Number of units in this layer.
    pub fn width(&self) -> usize {
        self.units.len()
    }

    /// Unit at `index`, or `None` past the end of the layer.
    pub fn get_unit(&self, index: usize) -> Option<NeuronId> {
        self.units.get(index).copied()
    }

    /// Activate every unit of this layer.
    ///
    /// Units within a layer are mutually independent, so their order does
    /// not matter; the previous layer must already be finalized.
    pub(crate) fn feed_forward(
        &self,
        neurons: &mut [Neuron],
        synapses: &[Synapse],
        activator: Activator,
    ) {
        for &id in &self.units {
            neuron::activate(neurons, synapses, id, activator);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_unit_in_range() {
        let layer = Layer::new(vec![NeuronId(3), NeuronId(4)]);
        assert_eq!(layer.get_unit(0), Some(NeuronId(3)));
        assert_eq!(layer.get_unit(1), Some(NeuronId(4)));
    }

    #[test]
    fn test_get_unit_out_of_range() {
        let layer = Layer::new(vec![NeuronId(3), NeuronId(4)]);
        assert_eq!(layer.get_unit(2), None);
        assert_eq!(layer.get_unit(953), None);
    }

    #[test]
    fn test_width() {
        let layer = Layer::new(vec![NeuronId(0), NeuronId(1), NeuronId(2)]);
        assert_eq!(layer.width(), 3);
    }
}
