pub mod convolution;
pub mod error;
pub mod trainer;

pub use error::{Error, Result};
