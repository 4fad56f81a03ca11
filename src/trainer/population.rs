use std::cmp::Ordering;
use std::ops::Index;

use rand::{Rng, RngCore};
use rand_distr::{Distribution, Uniform};
use rayon::prelude::*;

use super::cloning::clone_network;
use super::data::TrainingData;
use super::fitness::mean_squared_error;
use super::operators::{crossover, mutate, randomize_biases};
use super::settings::TrainerSettings;
use crate::convolution::network::Network;

/// Lower error first. Any NaN, whatever its sign bit, ranks behind every number.
pub fn compare_fitness(a: f64, b: f64) -> Ordering {
    a.is_nan().cmp(&b.is_nan()).then_with(|| a.total_cmp(&b))
}

#[derive(Clone, Debug)]
pub struct Individual {
    pub network: Network,
    /// Mean squared error on the training set; lower is better.
    pub fitness: f64,
}

impl Individual {
    /// Not yet evaluated, so ranked behind everything that was.
    pub fn new(network: Network) -> Individual {
        Individual { network, fitness: f64::INFINITY }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Population(Vec<Individual>);

impl Population {
    pub fn new(individuals: Vec<Individual>) -> Population {
        Population(individuals)
    }

    /// `size` clones of `base`, each with every bias drawn from the catalog.
    pub fn seed<R: RngCore>(base: &Network, size: usize, rng: &mut R) -> Population {
        let individuals = (0..size)
            .map(|_| {
                let mut network = clone_network(base);
                randomize_biases(&mut network, rng);
                Individual::new(network)
            })
            .collect();
        Population(individuals)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Individual> {
        self.0.iter()
    }

    /// Scores every individual. Each one owns its pipes, so they run in parallel.
    pub fn evaluate(&mut self, training_set: &[TrainingData]) {
        self.0.par_iter_mut().for_each(|individual| {
            individual.fitness = mean_squared_error(&mut individual.network, training_set);
            log::trace!("evaluated individual: fitness {}", individual.fitness);
        });
    }

    /// Sorts best (lowest error) first.
    pub fn rank(&mut self) {
        self.0.sort_by(|a, b| compare_fitness(a.fitness, b.fitness));
    }

    pub fn best(&self) -> Option<&Individual> {
        self.0.first()
    }

    pub fn mean_fitness(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        self.0.iter().map(|individual| individual.fitness).sum::<f64>() / self.0.len() as f64
    }

    /// Tournament selection with replacement: the fittest of `tournament_size` random draws.
    pub fn select_parent<R: RngCore>(&self, tournament_size: usize, rng: &mut R) -> &Individual {
        debug_assert!(!self.0.is_empty(), "Tried to select a parent from an empty population");
        let mut winner = &self.0[rng.gen_range(0..self.0.len())];
        for _ in 1..tournament_size {
            let candidate = &self.0[rng.gen_range(0..self.0.len())];
            if compare_fitness(candidate.fitness, winner.fitness).is_lt() {
                winner = candidate;
            }
        }
        winner
    }

    /// Breeds the next population from a ranked one: elites are carried over,
    /// the rest are tournament-selected children, crossed over and mutated.
    pub fn next_generation<R: RngCore>(&self, settings: &TrainerSettings, rng: &mut R) -> Population {
        let mut next = Vec::with_capacity(settings.population_size);
        for elite in self.0.iter().take(settings.elite_count()) {
            next.push(Individual::new(clone_network(&elite.network)));
        }

        let between = Uniform::from(0.0..1.0);
        while next.len() < settings.population_size {
            let parent1 = self.select_parent(settings.tournament_size, rng);
            let parent2 = self.select_parent(settings.tournament_size, rng);
            let mut child = if between.sample(rng) < settings.crossover_rate {
                crossover(&parent1.network, &parent2.network, rng)
            } else {
                clone_network(&parent1.network)
            };
            mutate(&mut child, settings.mutation_rate, rng);
            next.push(Individual::new(child));
        }

        Population(next)
    }
}

impl Index<usize> for Population {
    type Output = Individual;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
