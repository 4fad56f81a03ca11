use rand::{Rng, RngCore};
use rand_distr::{Distribution, Uniform};

use super::cloning::clone_network;
use crate::convolution::bias::Bias;
use crate::convolution::network::Network;

pub fn random_bias<R: RngCore>(rng: &mut R) -> Bias {
    Bias::CATALOG[rng.gen_range(0..Bias::CATALOG.len())].clone()
}

/// Resamples every input and output bias of `network` from the catalog.
pub fn randomize_biases<R: RngCore>(network: &mut Network, rng: &mut R) {
    for layer in network.layers_mut() {
        for neuron in layer.iter_mut() {
            neuron.set_output_bias(random_bias(rng));
            for bias in neuron.inputs_mut().values_mut() {
                *bias = random_bias(rng);
            }
        }
    }
}

/// Per neuron: with probability `mutation_rate` a new output bias, and on an
/// independent draw with the same probability, new biases for all of its inputs.
pub fn mutate<R: RngCore>(network: &mut Network, mutation_rate: f64, rng: &mut R) {
    let between = Uniform::from(0.0..1.0);
    for layer in network.layers_mut() {
        for neuron in layer.iter_mut() {
            if between.sample(rng) < mutation_rate {
                neuron.set_output_bias(random_bias(rng));
            }
            if between.sample(rng) < mutation_rate {
                for bias in neuron.inputs_mut().values_mut() {
                    *bias = random_bias(rng);
                }
            }
        }
    }
}

/// Child wired like `parent1` whose output biases come from either parent with
/// equal probability. Input biases are inherited from `parent1`.
pub fn crossover<R: RngCore>(parent1: &Network, parent2: &Network, rng: &mut R) -> Network {
    let mut child = clone_network(parent1);
    let between = Uniform::from(0.0..1.0);
    for (child_layer, other_layer) in child.layers_mut().iter_mut().zip(parent2.layers()) {
        for (neuron, other) in child_layer.iter_mut().zip(other_layer) {
            if between.sample(rng) < 0.5 {
                neuron.set_output_bias(other.output_bias().clone());
            }
        }
    }
    child
}
