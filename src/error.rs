use thiserror::Error;

/// Rejected noise setup. Returned at construction, before any call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("noise distribution is empty")]
    EmptyDistribution,
    #[error("weight at index {index} must be finite and non-negative, got {weight}")]
    InvalidWeight { index: usize, weight: f64 },
    #[error("noise distribution weights sum to zero")]
    ZeroTotalWeight,
    #[error("noise distribution weights overflow when summed")]
    TotalWeightOverflow,
    #[error("value at index {index} already appears in the noise distribution")]
    DuplicateValue { index: usize },
    #[error("noise probability must be a number, got {0}")]
    InvalidProbability(f64),
}

/// Failure while drawing a substitute value on a call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    #[error("no candidates left after excluding the true value")]
    EmptyPool,
    #[error("remaining candidate weights sum to zero")]
    ZeroWeight,
    #[error("remaining candidate weights overflow when summed")]
    WeightOverflow,
    #[error("weight at index {index} must be finite and non-negative, got {weight}")]
    InvalidWeight { index: usize, weight: f64 },
    #[error("{values} candidate values but {weights} weights")]
    LengthMismatch { values: usize, weights: usize },
    #[error("weighted sampler rejected the weights: {0}")]
    Weights(String),
}

impl From<rand::distr::weighted::Error> for SamplingError {
    fn from(err: rand::distr::weighted::Error) -> Self {
        SamplingError::Weights(err.to_string())
    }
}
