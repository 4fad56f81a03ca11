pub mod cloning;
pub mod data;
pub mod fitness;
pub mod genetic;
pub mod operators;
pub mod population;
pub mod settings;

pub use cloning::{clone_network, copy_into};
pub use data::TrainingData;
pub use fitness::mean_squared_error;
pub use genetic::{GenerationStats, Trainer, TrainingReport};
pub use population::{Individual, Population};
pub use settings::{TrainerSettings, WriteBack};
