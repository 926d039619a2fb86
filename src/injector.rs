//! Replaces a function's result with weighted noise on a fraction of calls.

use rand::SeedableRng;
use rand::rngs::{StdRng, ThreadRng};

use crate::distribution::NoiseDistribution;
use crate::error::{ConfigError, SamplingError};
use crate::probability::NoiseProbability;
use crate::source::NoiseSource;

/// Noise setup plus the randomness it draws from.
#[derive(Debug, Clone)]
pub struct NoiseInjector<T, S> {
    probability: NoiseProbability,
    distribution: NoiseDistribution<T>,
    source: S,
}

/// Builds an injector drawing from the thread-local generator.
///
/// ```
/// let mut noisy = noisy_fn::make_noisy(0.5, [(-1, 0.7), (-2, 0.3)])
///     .unwrap()
///     .wrap(|x: i64| 2 * x);
/// let out = noisy(5).unwrap();
/// assert!([10, -1, -2].contains(&out));
/// ```
pub fn make_noisy<T, I>(
    probability: f64,
    entries: I,
) -> Result<NoiseInjector<T, ThreadRng>, ConfigError>
where
    T: PartialEq + Clone,
    I: IntoIterator<Item = (T, f64)>,
{
    let distribution = NoiseDistribution::new(entries)?;
    NoiseInjector::new(probability, distribution)
}

impl<T: PartialEq + Clone> NoiseInjector<T, ThreadRng> {
    pub fn new(probability: f64, distribution: NoiseDistribution<T>) -> Result<Self, ConfigError> {
        Self::with_source(probability, distribution, rand::rng())
    }
}

impl<T: PartialEq + Clone> NoiseInjector<T, StdRng> {
    pub fn with_seed(
        probability: f64,
        distribution: NoiseDistribution<T>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_source(probability, distribution, StdRng::seed_from_u64(seed))
    }
}

impl<T: PartialEq + Clone, S: NoiseSource> NoiseInjector<T, S> {
    pub fn with_source(
        probability: f64,
        distribution: NoiseDistribution<T>,
        source: S,
    ) -> Result<Self, ConfigError> {
        let probability = NoiseProbability::new(probability)?;
        tracing::debug!(
            probability = probability.value(),
            candidates = distribution.len(),
            "noise injector ready"
        );

        Ok(NoiseInjector {
            probability,
            distribution,
            source,
        })
    }

    pub fn probability(&self) -> NoiseProbability {
        self.probability
    }

    pub fn distribution(&self) -> &NoiseDistribution<T> {
        &self.distribution
    }

    pub fn apply(&mut self, true_value: T) -> Result<T, SamplingError> {
        let draw = self.source.uniform();
        if !self.probability.fires(draw) {
            return Ok(true_value);
        }

        let (mut values, weights) = self.distribution.exclude(&true_value)?;
        let index = self.source.weighted_choice(&weights)?;
        if index >= values.len() {
            return Err(SamplingError::LengthMismatch {
                values: values.len(),
                weights: index + 1,
            });
        }

        tracing::trace!(draw, index, "noise substituted for true value");
        Ok(values.swap_remove(index))
    }

    /// Wraps `f` so every call goes through [`apply`](Self::apply).
    ///
    /// Functions of several arguments take them as one tuple.
    pub fn wrap<A, F>(mut self, mut f: F) -> impl FnMut(A) -> Result<T, SamplingError>
    where
        F: FnMut(A) -> T,
    {
        move |args| {
            let true_value = f(args);
            self.apply(true_value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays fixed draws so each branch can be hit on purpose.
    struct Scripted {
        draws: VecDeque<f64>,
        picks: VecDeque<usize>,
    }

    impl Scripted {
        fn new(draws: &[f64], picks: &[usize]) -> Self {
            Scripted {
                draws: draws.iter().copied().collect(),
                picks: picks.iter().copied().collect(),
            }
        }
    }

    impl NoiseSource for Scripted {
        fn uniform(&mut self) -> f64 {
            self.draws.pop_front().unwrap()
        }

        fn weighted_choice(&mut self, _weights: &[f64]) -> Result<usize, SamplingError> {
            Ok(self.picks.pop_front().unwrap())
        }
    }

    fn shouts() -> NoiseDistribution<&'static str> {
        NoiseDistribution::new([("ups!", 0.7), ("UPS!", 0.3)]).unwrap()
    }

    #[test]
    fn test_make_noisy_rejects_empty_distribution() {
        let err = make_noisy::<i32, _>(0.5, []).unwrap_err();
        assert_eq!(err, ConfigError::EmptyDistribution);
    }

    #[test]
    fn test_make_noisy_rejects_nan_probability() {
        let err = make_noisy(f64::NAN, [(1, 1.0)]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProbability(_)));
    }

    #[test]
    fn test_draw_below_probability_substitutes() {
        let source = Scripted::new(&[0.1], &[1]);
        let mut injector = NoiseInjector::with_source(0.5, shouts(), source).unwrap();
        assert_eq!(injector.apply("hello").unwrap(), "UPS!");
    }

    #[test]
    fn test_draw_at_or_above_probability_passes_through() {
        let source = Scripted::new(&[0.5, 0.9], &[]);
        let mut injector = NoiseInjector::with_source(0.5, shouts(), source).unwrap();
        assert_eq!(injector.apply("hello").unwrap(), "hello");
        assert_eq!(injector.apply("again").unwrap(), "again");
    }

    #[test]
    fn test_zero_probability_ignores_zero_draw() {
        let source = Scripted::new(&[0.0], &[]);
        let mut injector = NoiseInjector::with_source(0.0, shouts(), source).unwrap();
        assert_eq!(injector.apply("hello").unwrap(), "hello");
    }

    #[test]
    fn test_sampling_uses_pool_without_true_value() {
        let dist = NoiseDistribution::new([(1, 0.2), (2, 0.3), (3, 0.5)]).unwrap();
        let source = Scripted::new(&[0.0, 0.0], &[0, 1]);
        let mut injector = NoiseInjector::with_source(1.0, dist, source).unwrap();

        assert_eq!(injector.apply(1).unwrap(), 2);
        assert_eq!(injector.apply(2).unwrap(), 3);
    }

    #[test]
    fn test_out_of_range_pick_is_an_error() {
        let source = Scripted::new(&[0.0], &[5]);
        let mut injector = NoiseInjector::with_source(1.0, shouts(), source).unwrap();
        assert!(matches!(
            injector.apply("ups!"),
            Err(SamplingError::LengthMismatch { values: 1, .. })
        ));
    }

    #[test]
    fn test_sole_candidate_equal_to_true_value() {
        let dist = NoiseDistribution::new([(10, 1.0)]).unwrap();
        let mut noisy = NoiseInjector::with_seed(1.0, dist, 1)
            .unwrap()
            .wrap(|x: i32| 2 * x);

        assert_eq!(noisy(5).unwrap_err(), SamplingError::EmptyPool);
        assert_eq!(noisy(6).unwrap(), 10);
    }

    #[test]
    fn test_wrap_tuple_arguments() {
        let dist = NoiseDistribution::new([(0, 1.0)]).unwrap();
        let mut noisy = NoiseInjector::with_seed(0.0, dist, 9)
            .unwrap()
            .wrap(|(a, b): (i32, i32)| a + b);

        assert_eq!(noisy((2, 3)).unwrap(), 5);
    }

    #[test]
    fn test_wrap_keeps_caller_state() {
        let dist = NoiseDistribution::new([(-1, 1.0)]).unwrap();
        let mut calls = 0;
        {
            let mut noisy = NoiseInjector::with_seed(0.0, dist, 4)
                .unwrap()
                .wrap(|x: i32| {
                    calls += 1;
                    x
                });
            for x in 0..5 {
                assert_eq!(noisy(x).unwrap(), x);
            }
        }
        assert_eq!(calls, 5);
    }

    #[test]
    fn test_same_seed_same_outputs() {
        let run = |seed| {
            let mut noisy = NoiseInjector::with_seed(0.5, shouts(), seed)
                .unwrap()
                .wrap(|s: &'static str| s);
            (0..200).map(|_| noisy("ok").unwrap()).collect::<Vec<_>>()
        };

        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_accessors() {
        let injector = NoiseInjector::with_seed(2.0, shouts(), 0).unwrap();
        assert_eq!(injector.probability(), NoiseProbability::ALWAYS);
        assert_eq!(injector.distribution(), &shouts());
    }
}
