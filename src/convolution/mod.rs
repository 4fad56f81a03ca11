pub mod bias;
pub mod factory;
pub mod layer;
pub mod network;
pub mod neuron;
pub mod pipe;
pub mod presets;
pub mod window;

pub use bias::{Bias, FunctionBias};
pub use factory::ConvolutionNetworkFactory;
pub use layer::Layer;
pub use network::{NeuralCalculator, Network};
pub use neuron::{InputBiases, Neuron};
pub use pipe::{Pipe, PipeId, Pipes};
pub use presets::{NetworkShape, ShapedNetwork};
pub use window::offset_centered_wrapped_subset;
