use super::layer::Layer;
use super::network::Network;
use super::neuron::{InputBiases, Neuron};
use super::pipe::{PipeId, Pipes};
use super::window::offset_centered_wrapped_subset;
use crate::convolution::bias::Bias;
use crate::error::{Error, Result};

/// Builds layered networks where every neuron reads a wraparound window of the
/// previous layer, giving 1-D convolution-like receptive fields.
#[derive(Clone, Copy, Debug)]
pub struct ConvolutionNetworkFactory {
    interconnectivity: f64,
    layers: usize,
    neurons: usize,
}

impl ConvolutionNetworkFactory {
    pub fn new(interconnectivity: f64, layer_count: usize, neuron_count: usize) -> Result<ConvolutionNetworkFactory> {
        if !(0.0..=1.0).contains(&interconnectivity) {
            return Err(Error::InterconnectivityOutOfRange(interconnectivity));
        }
        if layer_count == 0 {
            return Err(Error::InvalidLayerCount(layer_count));
        }
        if neuron_count == 0 {
            return Err(Error::InvalidNeuronCount(neuron_count));
        }
        Ok(ConvolutionNetworkFactory {
            interconnectivity,
            layers: layer_count,
            neurons: neuron_count,
        })
    }

    /// Number of predecessor pipes each neuron reads before the odd-size adjustment.
    /// Never below 1 so a neuron always sees its index-aligned predecessor.
    pub fn connections_per_neuron(&self) -> usize {
        ((self.neurons as f64 * self.interconnectivity).floor() as usize).max(1)
    }

    pub fn layer_count(&self) -> usize {
        self.layers
    }

    pub fn neuron_count(&self) -> usize {
        self.neurons
    }

    /// Wires a network between caller-owned pipes of `pipes`.
    ///
    /// Every pipe already in `pipes` counts as external and is never written by
    /// construction. Layer 0 reads `inputs`, the last layer writes `outputs`.
    pub fn construct(&self, mut pipes: Pipes, inputs: &[PipeId], outputs: &[PipeId]) -> Result<Network> {
        if inputs.is_empty() {
            return Err(Error::MissingExternalPipes("input"));
        }
        if outputs.is_empty() {
            return Err(Error::MissingExternalPipes("output"));
        }
        if let Some(&unknown) = inputs.iter().chain(outputs).find(|&&p| !pipes.contains(p)) {
            return Err(Error::UnknownPipe(unknown));
        }
        if let Some(&shared) = inputs.iter().find(|p| outputs.contains(*p)) {
            return Err(Error::SharedExternalPipe(shared));
        }

        let n_external = pipes.len();
        let window = self.connections_per_neuron();
        let mut layers: Vec<Layer> = Vec::with_capacity(self.layers);

        for l in 0..self.layers {
            let sources = match layers.last() {
                None => inputs.to_vec(),
                Some(previous) => previous.output_pipes(),
            };

            let mut layer = Layer::default();
            for index in 0..self.neurons {
                let input_biases: InputBiases = offset_centered_wrapped_subset(&sources, index, window)?
                    .into_iter()
                    .map(|pipe| (pipe, Bias::Passthrough))
                    .collect();

                let output = if l == self.layers - 1 {
                    offset_centered_wrapped_subset(outputs, index, window)?
                        .first()
                        .copied()
                        .ok_or(Error::MissingExternalPipes("output"))?
                } else {
                    pipes.create()
                };

                layer.push(Neuron::new(input_biases, output));
            }
            layers.push(layer);
        }

        log::debug!(
            "constructed network: {} layers x {} neurons, window {}, {} pipes ({} external)",
            self.layers,
            self.neurons,
            window,
            pipes.len(),
            n_external
        );

        Ok(Network::create(pipes, layers, inputs.to_vec(), outputs.to_vec(), n_external))
    }
}
