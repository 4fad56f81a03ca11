use super::factory::ConvolutionNetworkFactory;
use super::network::Network;
use super::pipe::{PipeId, Pipes};
use crate::error::Result;

/// Network dimensions sized for common image datasets.
///
/// The neuron count per layer matches the output count so that every output
/// pipe gets exactly one writer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkShape {
    pub input_count: usize,
    pub output_count: usize,
    pub layer_count: usize,
    pub neurons_per_layer: usize,
    pub interconnectivity: f64,
}

/// A constructed network together with the external pipes it was wired to.
#[derive(Clone, Debug)]
pub struct ShapedNetwork {
    pub network: Network,
    pub inputs: Vec<PipeId>,
    pub outputs: Vec<PipeId>,
}

impl NetworkShape {
    /// 28x28 grayscale digits, 10 classes.
    pub const MNIST: NetworkShape = NetworkShape {
        input_count: 784,
        output_count: 10,
        layer_count: 3,
        neurons_per_layer: 10,
        interconnectivity: 0.5,
    };

    /// 64x64 grayscale faces, roughly 100 subjects.
    pub const FERET: NetworkShape = NetworkShape {
        input_count: 4096,
        output_count: 100,
        layer_count: 4,
        neurons_per_layer: 100,
        interconnectivity: 0.4,
    };

    /// 112x92 grayscale faces, 40 subjects.
    pub const ORL: NetworkShape = NetworkShape {
        input_count: 10304,
        output_count: 40,
        layer_count: 4,
        neurons_per_layer: 40,
        interconnectivity: 0.4,
    };

    /// 224x224 RGB images, 1000 classes.
    pub const IMAGENET: NetworkShape = NetworkShape {
        input_count: 150528,
        output_count: 1000,
        layer_count: 5,
        neurons_per_layer: 1000,
        interconnectivity: 0.3,
    };

    pub fn new(input_count: usize, output_count: usize, layer_count: usize, neurons_per_layer: usize, interconnectivity: f64) -> NetworkShape {
        NetworkShape {
            input_count,
            output_count,
            layer_count,
            neurons_per_layer,
            interconnectivity,
        }
    }

    pub fn factory(&self) -> Result<ConvolutionNetworkFactory> {
        ConvolutionNetworkFactory::new(self.interconnectivity, self.layer_count, self.neurons_per_layer)
    }

    /// Allocates the external pipes and wires a network between them.
    pub fn build(&self) -> Result<ShapedNetwork> {
        let factory = self.factory()?;
        let mut pipes = Pipes::with_capacity(self.input_count + self.output_count + self.layer_count * self.neurons_per_layer);
        let inputs = pipes.create_many(self.input_count);
        let outputs = pipes.create_many(self.output_count);
        let network = factory.construct(pipes, &inputs, &outputs)?;
        Ok(ShapedNetwork { network, inputs, outputs })
    }
}
