use crate::combinatorics::{bigint_to_f64, binom};
use crate::errors::{require_count, require_positive, require_unit_prob, DistError};

/// Negative binomial PMF: the probability of `k` failures before the `r`-th
/// success in a sequence of Bernoulli trials with success probability `p`.
///
/// # Returns
/// C(r+k-1, k) * p^r * (1-p)^k.
pub fn dnbinom(k: i64, r: i64, p: f64) -> Result<f64, DistError> {
    let p = require_unit_prob("p", p)?;
    let r = require_positive("r", r)?;
    let k = require_count("k", k)?;

    let coef = bigint_to_f64(&binom(r + k - 1, k))?;
    Ok(coef * p.powf(r as f64) * (1.0 - p).powf(k as f64))
}

/// Negative binomial CDF in the R parameterization: the probability of at
/// most `x` failures before `size` successes with per-trial success
/// probability `prob`.
///
/// Each term is the closed-form C(i+size-1, size-1) * prob^size *
/// (1-prob)^i rather than a `dnbinom` call; the two agree because
/// C(i+size-1, size-1) = C(i+size-1, i).
pub fn pnbinom(x: i64, size: i64, prob: f64) -> Result<f64, DistError> {
    let x = require_count("x", x)?;
    let size = require_positive("size", size)?;
    let prob = require_unit_prob("prob", prob)?;

    let mut cdf = 0.0;
    for i in 0..=x {
        let coef = bigint_to_f64(&binom(i + size - 1, size - 1))?;
        cdf += coef * prob.powf(size as f64) * (1.0 - prob).powf(i as f64);
    }
    Ok(cdf)
}
