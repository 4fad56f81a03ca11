use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use super::bias::Bias;
use super::pipe::{PipeId, Pipes};

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Input pipes of a neuron with the bias applied to each, in wiring order.
pub type InputBiases = FxIndexMap<PipeId, Bias>;

#[derive(Clone, Debug)]
pub struct Neuron {
    inputs: InputBiases,
    output: PipeId,
    output_bias: Bias,
}

impl Neuron {
    pub fn new(inputs: InputBiases, output: PipeId) -> Neuron {
        Neuron::with_output_bias(inputs, output, Bias::Passthrough)
    }

    pub fn with_output_bias(inputs: InputBiases, output: PipeId, output_bias: Bias) -> Neuron {
        debug_assert!(!inputs.contains_key(&output), "Tried to create a neuron whose output is also one of its inputs");
        Neuron {
            inputs,
            output,
            output_bias,
        }
    }

    /// Sums the biased input values, applies the output bias and writes the output pipe.
    pub fn calculate(&self, pipes: &mut Pipes) {
        let active_sum = self.inputs.iter().fold(0., |acc, (&pipe, bias)| {
            acc + bias.evaluate(pipes.get(pipe), Some(self))
        });
        let result = self.output_bias.evaluate(active_sum, Some(self));
        pipes.set(self.output, result);
    }

    pub fn inputs(&self) -> &InputBiases {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut InputBiases {
        &mut self.inputs
    }

    pub fn input_pipes(&self) -> impl Iterator<Item = PipeId> + '_ {
        self.inputs.keys().copied()
    }

    pub fn set_inputs(&mut self, inputs: InputBiases) {
        debug_assert!(!inputs.contains_key(&self.output), "Tried to wire a neuron's output back into its inputs");
        self.inputs = inputs;
    }

    /// Rewires the neuron to read `pipes`, each through a passthrough bias.
    pub fn set_input_pipes<I: IntoIterator<Item = PipeId>>(&mut self, pipes: I) {
        let inputs = pipes.into_iter().map(|pipe| (pipe, Bias::Passthrough)).collect();
        self.set_inputs(inputs);
    }

    pub fn output(&self) -> PipeId {
        self.output
    }

    pub fn set_output(&mut self, output: PipeId) {
        debug_assert!(!self.inputs.contains_key(&output), "Tried to write a neuron's output into one of its inputs");
        self.output = output;
    }

    pub fn output_bias(&self) -> &Bias {
        &self.output_bias
    }

    pub fn set_output_bias(&mut self, bias: Bias) {
        self.output_bias = bias;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn two_inputs(first: Bias, second: Bias) -> (Pipes, InputBiases, PipeId) {
        let mut pipes = Pipes::new();
        let pipe1 = pipes.create();
        let pipe2 = pipes.create();
        let output = pipes.create();
        pipes.set(pipe1, 2.0);
        pipes.set(pipe2, 3.0);

        let mut inputs = InputBiases::default();
        inputs.insert(pipe1, first);
        inputs.insert(pipe2, second);
        (pipes, inputs, output)
    }

    #[test]
    fn calculates_with_input_biases() {
        let (mut pipes, inputs, output) = two_inputs(Bias::Passthrough, Bias::Passthrough);
        let neuron = Neuron::new(inputs, output);
        neuron.calculate(&mut pipes);
        assert_eq!(pipes.get(output), 5.0);
    }

    #[test]
    fn calculates_with_constant_biases() {
        let (mut pipes, inputs, output) = two_inputs(Bias::Constant(5.0), Bias::Constant(10.0));
        let neuron = Neuron::new(inputs, output);
        neuron.calculate(&mut pipes);
        assert_eq!(pipes.get(output), 15.0);
    }

    #[test]
    fn applies_output_bias() {
        let mut pipes = Pipes::new();
        let input = pipes.create();
        let output = pipes.create();
        pipes.set(input, 10.0);

        let neuron = Neuron::with_output_bias([(input, Bias::Passthrough)].into_iter().collect(), output, Bias::Invert);
        neuron.calculate(&mut pipes);
        assert_eq!(pipes.get(output), -10.0);

        pipes.set(input, 0.0);
        let neuron = Neuron::with_output_bias(neuron.inputs().clone(), output, Bias::Sigmoid);
        neuron.calculate(&mut pipes);
        assert_approx_eq!(pipes.get(output), 0.5, 1e-4);
    }

    #[test]
    fn output_bias_can_be_replaced() {
        let mut pipes = Pipes::new();
        let input = pipes.create();
        let output = pipes.create();
        pipes.set(input, 5.0);

        let mut neuron = Neuron::new(InputBiases::default(), output);
        assert_eq!(neuron.output_bias(), &Bias::Passthrough);

        neuron.set_input_pipes([input]);
        neuron.set_output_bias(Bias::Constant(100.0));
        neuron.calculate(&mut pipes);
        assert_eq!(pipes.get(output), 100.0);
        assert_eq!(neuron.output_bias(), &Bias::Constant(100.0));
    }

    #[test]
    fn no_inputs_sums_to_zero() {
        let mut pipes = Pipes::new();
        let output = pipes.create();
        pipes.set(output, 7.0);
        let neuron = Neuron::new(InputBiases::default(), output);
        neuron.calculate(&mut pipes);
        assert_eq!(pipes.get(output), 0.0);
    }

    #[test]
    fn calculate_only_writes_output() {
        let (mut pipes, inputs, output) = two_inputs(Bias::Sigmoid, Bias::Reciprocal);
        let neuron = Neuron::new(inputs, output);
        neuron.calculate(&mut pipes);
        assert_eq!(pipes.get(PipeId(0)), 2.0);
        assert_eq!(pipes.get(PipeId(1)), 3.0);
        assert_approx_eq!(pipes.get(output), 1.0 / (1.0 + (-2.0f64).exp()) + 1.0 / 3.0);
    }
}
