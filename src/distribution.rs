//! Weighted candidate values used as substitutes for a function's result.

use crate::error::{ConfigError, SamplingError};

/// Ordered mapping from candidate value to relative weight.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseDistribution<T> {
    values: Vec<T>,
    weights: Vec<f64>,
}

impl<T: PartialEq + Clone> NoiseDistribution<T> {
    pub fn new<I>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let (values, weights): (Vec<T>, Vec<f64>) = entries.into_iter().unzip();

        if values.is_empty() {
            return Err(ConfigError::EmptyDistribution);
        }

        for (index, &weight) in weights.iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeight { index, weight });
            }
        }

        for index in 1..values.len() {
            if values[..index].contains(&values[index]) {
                return Err(ConfigError::DuplicateValue { index });
            }
        }

        let total: f64 = weights.iter().sum();
        if !total.is_finite() {
            return Err(ConfigError::TotalWeightOverflow);
        }
        if total <= 0.0 {
            return Err(ConfigError::ZeroTotalWeight);
        }

        Ok(NoiseDistribution { values, weights })
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.values.iter().zip(self.weights.iter().copied())
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn probability_of(&self, value: &T) -> f64 {
        match self.values.iter().position(|v| v == value) {
            Some(i) => self.weights[i] / self.total_weight(),
            None => 0.0,
        }
    }

    pub fn exclude(&self, true_value: &T) -> Result<(Vec<T>, Vec<f64>), SamplingError> {
        exclude_true_value(&self.values, &self.weights, true_value)
    }
}

/// Drops the first entry equal to `true_value` and renormalizes what is left.
///
/// When `true_value` is not a candidate both sequences come back as they
/// were, weights included: no renormalization happens in that case.
pub fn exclude_true_value<T: PartialEq + Clone>(
    values: &[T],
    weights: &[f64],
    true_value: &T,
) -> Result<(Vec<T>, Vec<f64>), SamplingError> {
    if values.len() != weights.len() {
        return Err(SamplingError::LengthMismatch {
            values: values.len(),
            weights: weights.len(),
        });
    }

    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(SamplingError::InvalidWeight { index, weight });
        }
    }

    let Some(i) = values.iter().position(|v| v == true_value) else {
        return Ok((values.to_vec(), weights.to_vec()));
    };

    let kept_values: Vec<T> = values[..i].iter().chain(&values[i + 1..]).cloned().collect();
    let kept_weights: Vec<f64> = weights[..i].iter().chain(&weights[i + 1..]).copied().collect();

    if kept_values.is_empty() {
        return Err(SamplingError::EmptyPool);
    }

    let total: f64 = kept_weights.iter().sum();
    if !total.is_finite() {
        return Err(SamplingError::WeightOverflow);
    }
    if total <= 0.0 {
        return Err(SamplingError::ZeroWeight);
    }

    let renormalized = kept_weights.iter().map(|w| w / total).collect();
    Ok((kept_values, renormalized))
}
