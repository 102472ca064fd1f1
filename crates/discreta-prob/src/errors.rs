use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistError {
    #[error("{what} must be {constraint}, got {got}")]
    InvalidParameter {
        what: &'static str,
        constraint: &'static str,
        got: String,
    },
    #[error("empty support: cannot draw {draws} from a population of {population}")]
    EmptySupport { population: u64, draws: u64 },
    #[error("result too large for f64 conversion ({digits} digits)")]
    PrecisionOverflow { digits: usize },
}

impl DistError {
    pub(crate) fn invalid(
        what: &'static str,
        constraint: &'static str,
        got: impl ToString,
    ) -> Self {
        DistError::InvalidParameter {
            what,
            constraint,
            got: got.to_string(),
        }
    }
}

// Shared precondition checks. Every public entry point validates its full
// parameter tuple through these before any computation runs, so domain
// errors always name the offending parameter.

/// A count parameter: non-negative integer, narrowed to `u64`.
pub(crate) fn require_count(what: &'static str, value: i64) -> Result<u64, DistError> {
    if value < 0 {
        return Err(DistError::invalid(what, "a non-negative integer", value));
    }
    Ok(value as u64)
}

/// A strictly positive count, e.g. the negative binomial's success target.
pub(crate) fn require_positive(what: &'static str, value: i64) -> Result<u64, DistError> {
    if value <= 0 {
        return Err(DistError::invalid(what, "a positive integer", value));
    }
    Ok(value as u64)
}

/// A probability: finite and within `[0, 1]`.
pub(crate) fn require_unit_prob(what: &'static str, value: f64) -> Result<f64, DistError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(DistError::invalid(what, "between 0 and 1", value));
    }
    Ok(value)
}
