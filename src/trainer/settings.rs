use crate::error::{Error, Result};

/// What the best individual of a generation copies back into the caller's network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteBack {
    /// Output biases and input biases, matched by neuron and input position.
    #[default]
    AllBiases,
    /// Output biases only; every input bias of the target is reset to passthrough.
    OutputBiasesOnly,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrainerSettings {
    pub population_size: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub tournament_size: usize,
    /// Elites per generation are `max(1, population_size / elite_divisor)`.
    pub elite_divisor: usize,
    pub write_back: WriteBack,
    /// `None` seeds the generator from system entropy.
    pub seed: Option<u64>,
}

impl TrainerSettings {
    pub fn standard() -> TrainerSettings {
        TrainerSettings {
            population_size: 50,
            mutation_rate: 0.1,
            crossover_rate: 0.7,
            tournament_size: 3,
            elite_divisor: 10,
            write_back: WriteBack::AllBiases,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> TrainerSettings {
        self.seed = Some(seed);
        self
    }

    pub fn elite_count(&self) -> usize {
        (self.population_size / self.elite_divisor.max(1)).max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::InvalidPopulationSize(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::RateOutOfRange { name: "mutation rate", value: self.mutation_rate });
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(Error::RateOutOfRange { name: "crossover rate", value: self.crossover_rate });
        }
        if self.tournament_size == 0 {
            return Err(Error::InvalidTournamentSize(self.tournament_size));
        }
        if self.elite_divisor == 0 {
            return Err(Error::InvalidEliteDivisor(self.elite_divisor));
        }
        Ok(())
    }
}

impl Default for TrainerSettings {
    fn default() -> Self {
        TrainerSettings::standard()
    }
}
