//! Noisy functions: wrap a function so that, with a given probability, its
//! result is replaced by a value drawn from a weighted noise distribution
//! that never contains the true result.

pub mod config;
pub mod distribution;
pub mod error;
pub mod injector;
pub mod probability;
pub mod source;

pub use config::NoiseParams;
pub use distribution::{NoiseDistribution, exclude_true_value};
pub use error::{ConfigError, SamplingError};
pub use injector::{NoiseInjector, make_noisy};
pub use probability::NoiseProbability;
pub use source::NoiseSource;
