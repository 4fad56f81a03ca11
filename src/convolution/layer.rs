use std::ops::{Index, IndexMut};

use itertools::Itertools;

use super::neuron::Neuron;
use super::pipe::{PipeId, Pipes};
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default)]
pub struct Layer(Vec<Neuron>);

impl Layer {
    pub fn new(neurons: Vec<Neuron>) -> Layer {
        Layer(neurons)
    }

    pub fn push(&mut self, neuron: Neuron) {
        self.0.push(neuron);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Neuron> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<Neuron> {
        self.0.iter_mut()
    }

    pub fn calculate(&self, pipes: &mut Pipes) {
        for neuron in self.0.iter() {
            neuron.calculate(pipes);
        }
    }

    /// Every pipe read by some neuron of the layer, first occurrence first.
    pub fn input_pipes(&self) -> Vec<PipeId> {
        self.0.iter().flat_map(|neuron| neuron.input_pipes()).unique().collect()
    }

    /// Every pipe written by the layer, in neuron order.
    pub fn output_pipes(&self) -> Vec<PipeId> {
        self.0.iter().map(|neuron| neuron.output()).unique().collect()
    }

    /// Makes every neuron read all of `pipes`.
    pub fn set_input_pipes(&mut self, pipes: &[PipeId]) {
        for neuron in self.0.iter_mut() {
            neuron.set_input_pipes(pipes.iter().copied());
        }
    }

    /// Assigns `pipes[i]` as the output of neuron `i`.
    pub fn set_output_pipes(&mut self, pipes: &[PipeId]) -> Result<()> {
        if pipes.len() != self.0.len() {
            return Err(Error::OutputCountMismatch { neurons: self.0.len(), pipes: pipes.len() });
        }
        for (neuron, &pipe) in self.0.iter_mut().zip(pipes) {
            neuron.set_output(pipe);
        }
        Ok(())
    }
}

impl Index<usize> for Layer {
    type Output = Neuron;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for Layer {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<'a> IntoIterator for &'a Layer {
    type Item = &'a Neuron;
    type IntoIter = std::slice::Iter<'a, Neuron>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
