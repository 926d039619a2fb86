use crate::error::ConfigError;

/// Chance that a call gets its value replaced, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NoiseProbability(f64);

impl NoiseProbability {
    pub const NEVER: NoiseProbability = NoiseProbability(0.0);
    pub const ALWAYS: NoiseProbability = NoiseProbability(1.0);

    /// Out-of-range values are clamped into `[0, 1]`; NaN is rejected.
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if value.is_nan() {
            return Err(ConfigError::InvalidProbability(value));
        }

        let clamped = value.clamp(0.0, 1.0);
        if clamped != value {
            tracing::warn!(requested = value, clamped, "noise probability clamped into [0, 1]");
        }
        Ok(NoiseProbability(clamped))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether a uniform draw in `[0, 1)` selects noise.
    ///
    /// Strict comparison: a probability of 0 never fires and 1 always does.
    /// An inclusive `draw <= p` test would differ only on a draw exactly
    /// equal to `p`, where it fires and this does not.
    pub fn fires(&self, draw: f64) -> bool {
        draw < self.0
    }
}

impl TryFrom<f64> for NoiseProbability {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        NoiseProbability::new(value)
    }
}
