use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::distribution::NoiseDistribution;
use crate::error::ConfigError;
use crate::injector::NoiseInjector;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NoiseParams {
    pub probability: f64,
    /// Fixed seed for reproducible runs; OS entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for NoiseParams {
    fn default() -> Self {
        NoiseParams {
            probability: 0.5,
            seed: None,
        }
    }
}

impl NoiseParams {
    pub fn build<T: PartialEq + Clone>(
        &self,
        distribution: NoiseDistribution<T>,
    ) -> Result<NoiseInjector<T, StdRng>, ConfigError> {
        match self.seed {
            Some(seed) => NoiseInjector::with_seed(self.probability, distribution, seed),
            None => NoiseInjector::with_source(self.probability, distribution, StdRng::from_os_rng()),
        }
    }
}
