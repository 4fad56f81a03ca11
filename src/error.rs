use thiserror::Error;

use crate::convolution::pipe::PipeId;

/// Errors raised while building networks or configuring and running the trainer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("interconnectivity {0} should be in range 0 to 1 inclusive")]
    InterconnectivityOutOfRange(f64),

    #[error("layer count {0} should be greater than 0")]
    InvalidLayerCount(usize),

    #[error("neuron count {0} should be greater than 0")]
    InvalidNeuronCount(usize),

    #[error("offset {offset} is outside a sequence of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("no external {0} pipes were supplied")]
    MissingExternalPipes(&'static str),

    #[error("pipe {0:?} does not belong to this arena")]
    UnknownPipe(PipeId),

    #[error("pipe {0:?} was supplied both as an input and as an output")]
    SharedExternalPipe(PipeId),

    #[error("layer has {neurons} neurons but {pipes} output pipes were supplied")]
    OutputCountMismatch { neurons: usize, pipes: usize },

    #[error("the trainer only supports networks built by the convolution factory")]
    UnsupportedNetwork,

    #[error("{name} {value} should be in range 0 to 1 inclusive")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("population size {0} should be greater than 0")]
    InvalidPopulationSize(usize),

    #[error("tournament size {0} should be greater than 0")]
    InvalidTournamentSize(usize),

    #[error("elite divisor {0} should be greater than 0")]
    InvalidEliteDivisor(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
