use rustc_hash::FxHashMap;

use super::settings::WriteBack;
use crate::convolution::bias::Bias;
use crate::convolution::layer::Layer;
use crate::convolution::network::Network;
use crate::convolution::neuron::{InputBiases, Neuron};
use crate::convolution::pipe::{PipeId, Pipes};

/// Structural copy of `source` with its own pipe arena.
///
/// External pipes keep their handles and values. Every internal pipe is
/// replaced by a fresh one, remapped forward through the layers so that the
/// copy is wired exactly like the source. Biases are cloned.
pub fn clone_network(source: &Network) -> Network {
    let n_external = source.n_external();
    let mut pipes = Pipes::with_capacity(source.pipes().len());
    for pipe in source.pipes().iter().take(n_external) {
        let id = pipes.create();
        pipes.set(id, pipe.get());
    }

    let mut mapping: FxHashMap<PipeId, PipeId> = FxHashMap::default();
    let mut remap = |pipe: PipeId, pipes: &mut Pipes| -> PipeId {
        if source.is_external(pipe) {
            pipe
        } else {
            *mapping.entry(pipe).or_insert_with(|| pipes.create())
        }
    };

    let mut layers = Vec::with_capacity(source.len());
    for layer in source.layers() {
        let mut copy = Layer::default();
        for neuron in layer {
            let inputs: InputBiases = neuron
                .inputs()
                .iter()
                .map(|(&pipe, bias)| (remap(pipe, &mut pipes), bias.clone()))
                .collect();
            let output = remap(neuron.output(), &mut pipes);
            copy.push(Neuron::with_output_bias(inputs, output, neuron.output_bias().clone()));
        }
        layers.push(copy);
    }

    Network::create(pipes, layers, source.inputs(), source.outputs(), n_external)
}

/// Copies the biases of `source` into the structurally identical `target`.
pub fn copy_into(source: &Network, target: &mut Network, mode: WriteBack) {
    debug_assert_eq!(source.len(), target.len(), "Tried to copy biases between networks of different depth");

    for (source_layer, target_layer) in source.layers().iter().zip(target.layers_mut().iter_mut()) {
        debug_assert_eq!(source_layer.len(), target_layer.len(), "Tried to copy biases between layers of different width");

        for (from, to) in source_layer.iter().zip(target_layer.iter_mut()) {
            to.set_output_bias(from.output_bias().clone());
            match mode {
                WriteBack::AllBiases => {
                    for (target_bias, source_bias) in to.inputs_mut().values_mut().zip(from.inputs().values()) {
                        *target_bias = source_bias.clone();
                    }
                }
                WriteBack::OutputBiasesOnly => {
                    for target_bias in to.inputs_mut().values_mut() {
                        *target_bias = Bias::Passthrough;
                    }
                }
            }
        }
    }
}
