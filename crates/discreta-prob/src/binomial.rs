use crate::combinatorics::{bigint_to_f64, factorial};
use crate::errors::{require_count, require_unit_prob, DistError};

/// Binomial PMF: P(X = x) = C(size, x) * prob^x * (1-prob)^(size-x) for
/// `x` successes in `size` Bernoulli trials with success probability `prob`.
///
/// The coefficient is the factorial ratio size! / (x! * (size-x)!),
/// evaluated in exact integer arithmetic; only the final conversion to
/// f64 can fail, for sizes far beyond practical use.
pub fn dbinom(x: i64, size: i64, prob: f64) -> Result<f64, DistError> {
    let x = require_count("x", x)?;
    let size = require_count("size", size)?;
    let prob = require_unit_prob("prob", prob)?;
    if x > size {
        return Err(DistError::invalid("x", "at most size", x));
    }
    let coef = bigint_to_f64(&(factorial(size) / (factorial(x) * factorial(size - x))))?;
    Ok(coef * prob.powf(x as f64) * (1.0 - prob).powf((size - x) as f64))
}

/// Binomial CDF by direct summation of PMF terms.
///
/// With `lower_tail` set this is P(X <= q). With `lower_tail` unset the sum
/// starts at `i = q` **inclusive**, i.e. P(X >= q) — not the strict upper
/// tail P(X > q) that R's `lower.tail = FALSE` computes. The inclusive
/// boundary is deliberate; tests cover both readings.
///
/// `q` is not constrained to `[0, size]`: bounds outside the support produce
/// the natural empty or saturated sum (0.0 or the full mass).
pub fn pbinom(q: i64, size: i64, prob: f64, lower_tail: bool) -> Result<f64, DistError> {
    require_count("size", size)?;
    require_unit_prob("prob", prob)?;

    let (lo, hi) = if lower_tail {
        (0, q.min(size))
    } else {
        (q.max(0), size)
    };

    let mut cdf = 0.0;
    let mut i = lo;
    while i <= hi {
        cdf += dbinom(i, size, prob)?;
        i += 1;
    }
    Ok(cdf)
}
