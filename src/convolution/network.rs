use std::ops::{Index, IndexMut};

use super::layer::Layer;
use super::pipe::{PipeId, Pipes};
use crate::error::Result;

/// Anything that can run a forward pass.
///
/// The trainer only evolves [`Network`]s; other calculators are rejected through
/// [`NeuralCalculator::as_network_mut`] returning `None`.
pub trait NeuralCalculator {
    fn calculate(&mut self);

    fn as_network_mut(&mut self) -> Option<&mut Network> {
        None
    }
}

/// Ordered layers sharing one pipe arena.
///
/// Pipes with a handle below `n_external` were allocated by the caller before
/// construction; everything above belongs to the network's neurons.
/// `inputs` and `outputs` are the external pipes as the caller listed them,
/// including inputs that no first-layer window reaches.
#[derive(Clone, Debug)]
pub struct Network {
    pipes: Pipes,
    layers: Vec<Layer>,
    inputs: Vec<PipeId>,
    outputs: Vec<PipeId>,
    n_external: usize,
}

impl Network {
    pub(crate) fn create(pipes: Pipes, layers: Vec<Layer>, inputs: Vec<PipeId>, outputs: Vec<PipeId>, n_external: usize) -> Network {
        debug_assert!(!layers.is_empty(), "Tried to create a network without layers");
        debug_assert!(n_external <= pipes.len(), "External pipe count exceeds the arena");
        Network {
            pipes,
            layers,
            inputs,
            outputs,
            n_external,
        }
    }

    pub fn calculate(&mut self) {
        for layer in self.layers.iter() {
            layer.calculate(&mut self.pipes);
        }
    }

    /// Declared input pipes in the order the caller supplied them.
    pub fn inputs(&self) -> Vec<PipeId> {
        self.inputs.clone()
    }

    /// Declared output pipes in the order the caller supplied them.
    pub fn outputs(&self) -> Vec<PipeId> {
        self.outputs.clone()
    }

    /// Makes every first-layer neuron read all of `pipes`, which become the declared inputs.
    pub fn set_input_pipes(&mut self, pipes: &[PipeId]) {
        self.layers[0].set_input_pipes(pipes);
        self.inputs = pipes.to_vec();
    }

    pub fn set_output_pipes(&mut self, pipes: &[PipeId]) -> Result<()> {
        let last = self.layers.len() - 1;
        self.layers[last].set_output_pipes(pipes)?;
        self.outputs = pipes.to_vec();
        Ok(())
    }

    /// Writes `values` into the declared inputs by position, ignoring whichever side is longer.
    pub fn set_inputs(&mut self, values: &[f64]) {
        for (&pipe, &value) in self.inputs.iter().zip(values) {
            self.pipes.set(pipe, value);
        }
    }

    pub fn read_outputs(&self) -> Vec<f64> {
        self.outputs.iter().map(|&pipe| self.pipes.get(pipe)).collect()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn pipes(&self) -> &Pipes {
        &self.pipes
    }

    pub fn pipes_mut(&mut self) -> &mut Pipes {
        &mut self.pipes
    }

    pub fn n_external(&self) -> usize {
        self.n_external
    }

    pub fn is_external(&self, pipe: PipeId) -> bool {
        pipe.0 < self.n_external
    }

    pub fn neuron_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.len()).sum()
    }
}

impl NeuralCalculator for Network {
    fn calculate(&mut self) {
        Network::calculate(self);
    }

    fn as_network_mut(&mut self) -> Option<&mut Network> {
        Some(self)
    }
}

impl Index<usize> for Network {
    type Output = Layer;
    fn index(&self, index: usize) -> &Self::Output {
        &self.layers[index]
    }
}

impl IndexMut<usize> for Network {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.layers[index]
    }
}
