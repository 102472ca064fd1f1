use num::rational::BigRational;
use num::traits::Zero;

use crate::combinatorics::{binom, ratio_to_f64};
use crate::errors::{require_count, DistError};

/// Hypergeometric PMF: the probability of drawing exactly `x` successes in a
/// sample of `k` drawn without replacement from a population with `m`
/// successes and `n` failures.
///
/// Computed exactly as C(m,x) * C(n,k-x) / C(m+n,k) in rational arithmetic
/// and converted to f64 once. Outside the support [max(0,k-n), min(m,k)] no
/// branching is needed: one of the numerator coefficients is zero by the
/// k > n contract of the coefficient kernel. The single explicit guard is
/// `x > k`, where `k - x` has no meaning for an unsigned subtraction.
///
/// A sample larger than the population (`k > m+n`) would make the
/// denominator zero and is rejected as [`DistError::EmptySupport`].
pub fn dhyper(x: i64, m: i64, n: i64, k: i64) -> Result<f64, DistError> {
    let x = require_count("x", x)?;
    let m = require_count("m", m)?;
    let n = require_count("n", n)?;
    let k = require_count("k", k)?;
    if k > m + n {
        return Err(DistError::EmptySupport {
            population: m + n,
            draws: k,
        });
    }
    if x > k {
        return Ok(0.0);
    }

    let numerator = binom(m, x) * binom(n, k - x);
    let denominator = binom(m + n, k);
    ratio_to_f64(&BigRational::new(numerator, denominator))
}

/// Hypergeometric CDF: the probability of at most `x` successes in a sample
/// of `n1` drawn without replacement from `m1` population successes and
/// `m2` population failures.
///
/// Explicit-sum form: Σ_{i=0}^{x} C(m1,i) * C(m2,n1-i) / C(m1+m2,n1),
/// accumulated as an exact rational. The denominator coefficient is computed
/// once and shared across terms.
pub fn phyper(x: i64, m1: i64, m2: i64, n1: i64) -> Result<f64, DistError> {
    let x = require_count("x", x)?;
    let m1 = require_count("m1", m1)?;
    let m2 = require_count("m2", m2)?;
    let n1 = require_count("n1", n1)?;
    if n1 > m1 + m2 {
        return Err(DistError::EmptySupport {
            population: m1 + m2,
            draws: n1,
        });
    }

    let denominator = binom(m1 + m2, n1);
    let mut cdf = BigRational::zero();
    // Terms past the sample size contribute nothing (x successes cannot
    // exceed n1 draws), so the sum stops there.
    for i in 0..=x.min(n1) {
        let numerator = binom(m1, i) * binom(m2, n1 - i);
        cdf += BigRational::new(numerator, denominator.clone());
    }
    ratio_to_f64(&cdf)
}
