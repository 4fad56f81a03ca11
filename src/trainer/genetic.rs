use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use super::cloning::copy_into;
use super::data::TrainingData;
use super::fitness::mean_squared_error;
use super::population::Population;
use super::settings::TrainerSettings;
use crate::convolution::network::NeuralCalculator;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub best_fitness: f64,
    pub mean_fitness: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrainingReport {
    pub generations: Vec<GenerationStats>,
}

impl TrainingReport {
    /// Best fitness of the last generation, which is what was written back.
    pub fn best_fitness(&self) -> Option<f64> {
        self.generations.last().map(|stats| stats.best_fitness)
    }
}

/// Evolves the biases of a network while keeping its wiring fixed.
pub struct Trainer {
    settings: TrainerSettings,
    rng: Xoshiro256PlusPlus,
}

impl Trainer {
    pub fn new(settings: TrainerSettings) -> Result<Trainer> {
        settings.validate()?;
        let rng = match settings.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };
        Ok(Trainer { settings, rng })
    }

    pub fn settings(&self) -> &TrainerSettings {
        &self.settings
    }

    /// Runs `generations` rounds of evaluate, rank, write back and breed.
    ///
    /// After every generation the best individual's biases are copied into
    /// `calculator`, so it always holds the latest winner. Pipe handles and
    /// wiring of `calculator` are never changed.
    pub fn train(
        &mut self,
        calculator: &mut dyn NeuralCalculator,
        training_set: &[TrainingData],
        generations: usize,
    ) -> Result<TrainingReport> {
        let network = calculator.as_network_mut().ok_or(Error::UnsupportedNetwork)?;
        let mut report = TrainingReport::default();
        if generations == 0 {
            return Ok(report);
        }

        log::info!(
            "training {} neurons for {} generations: population {}, mutation {}, crossover {}",
            network.neuron_count(),
            generations,
            self.settings.population_size,
            self.settings.mutation_rate,
            self.settings.crossover_rate
        );

        let mut population = Population::seed(network, self.settings.population_size, &mut self.rng);
        for generation in 0..generations {
            population.evaluate(training_set);
            population.rank();

            let best = match population.best() {
                Some(best) => best,
                None => break,
            };
            let stats = GenerationStats {
                generation,
                best_fitness: best.fitness,
                mean_fitness: population.mean_fitness(),
            };
            log::debug!("generation {}: best {:.6}, mean {:.6}", generation, stats.best_fitness, stats.mean_fitness);
            copy_into(&best.network, network, self.settings.write_back);
            report.generations.push(stats);

            if generation + 1 < generations {
                population = population.next_generation(&self.settings, &mut self.rng);
            }
        }

        if let Some(best) = report.best_fitness() {
            log::info!("training finished with best fitness {:.6}", best);
        }
        Ok(report)
    }

    /// Mean squared error of `calculator` over `training_set`.
    pub fn fitness(&self, calculator: &mut dyn NeuralCalculator, training_set: &[TrainingData]) -> Result<f64> {
        let network = calculator.as_network_mut().ok_or(Error::UnsupportedNetwork)?;
        Ok(mean_squared_error(network, training_set))
    }
}
