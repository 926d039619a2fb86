use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::SamplingError;

/// Randomness consumed by a [`NoiseInjector`](crate::injector::NoiseInjector).
///
/// Every `rand::Rng` is a source. Implement it directly to script draws.
pub trait NoiseSource {
    /// Uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Index into `weights`, picked with probability proportional to its weight.
    fn weighted_choice(&mut self, weights: &[f64]) -> Result<usize, SamplingError>;
}

impl<R: Rng + ?Sized> NoiseSource for R {
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn weighted_choice(&mut self, weights: &[f64]) -> Result<usize, SamplingError> {
        if weights.is_empty() {
            return Err(SamplingError::EmptyPool);
        }
        let index = WeightedIndex::<f64>::new(weights)?;
        Ok(index.sample(self))
    }
}
