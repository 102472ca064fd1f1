use num::bigint::BigInt;
use num::rational::BigRational;
use num::traits::{One, ToPrimitive, Zero};

use crate::errors::{require_count, DistError};

/// Exact factorial n! via iterative multiplication.
///
/// # Returns
/// `n!` as a `BigInt`; `factorial(0) == 1`.
pub fn factorial(n: u64) -> BigInt {
    let mut result = BigInt::one();
    for i in 2..=n {
        result *= BigInt::from(i);
    }
    result
}

/// Exact binomial coefficient C(n, k).
///
/// Negative `n` or `k` is a domain error; `k > n` yields zero.
///
/// # Returns
/// Exact integer value of `C(n, k)`.
pub fn choose(n: i64, k: i64) -> Result<BigInt, DistError> {
    let n = require_count("n", n)?;
    let k = require_count("k", k)?;
    Ok(binom(n, k))
}

/// The shared coefficient kernel behind `choose` and every distribution.
///
/// Exploits the symmetry C(n,k) = C(n,n-k), then interleaves each
/// multiplication by (n-i) with a division by (i+1). The running product
/// after step i is C(n-k+i+1, i+1), so every intermediate value is an
/// exact integer and no full factorial is ever materialized.
pub(crate) fn binom(n: u64, k: u64) -> BigInt {
    if k > n {
        return BigInt::zero();
    }
    let k = std::cmp::min(k, n - k);
    if k == 0 {
        return BigInt::one();
    }
    let mut result = BigInt::one();
    for i in 0..k {
        result *= BigInt::from(n - i);
        result /= BigInt::from(i + 1);
    }
    result
}

/// Convert a BigInt to f64, failing if the value exceeds f64 range.
pub(crate) fn bigint_to_f64(n: &BigInt) -> Result<f64, DistError> {
    match n.to_f64() {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(DistError::PrecisionOverflow {
            digits: n.to_string().len(),
        }),
    }
}

/// Convert an exact probability ratio to f64 at the API boundary.
pub(crate) fn ratio_to_f64(r: &BigRational) -> Result<f64, DistError> {
    let numer = bigint_to_f64(r.numer())?;
    let denom = bigint_to_f64(r.denom())?;
    Ok(numer / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_small_values() {
        assert_eq!(factorial(0), BigInt::one());
        assert_eq!(factorial(1), BigInt::one());
        assert_eq!(factorial(5), BigInt::from(120));
        assert_eq!(factorial(10), BigInt::from(3_628_800));
    }

    #[test]
    fn factorial_exceeds_machine_integers() {
        // 25! does not fit in u64; exactness must survive that.
        let expected: BigInt = "15511210043330985984000000".parse().unwrap();
        assert_eq!(factorial(25), expected);
    }

    #[test]
    fn choose_basic() {
        assert_eq!(choose(0, 0).unwrap(), BigInt::one());
        assert_eq!(choose(5, 0).unwrap(), BigInt::one());
        assert_eq!(choose(5, 5).unwrap(), BigInt::one());
        assert_eq!(choose(5, 2).unwrap(), BigInt::from(10));
        assert_eq!(choose(10, 3).unwrap(), BigInt::from(120));
    }

    #[test]
    fn choose_is_zero_when_k_exceeds_n() {
        assert_eq!(choose(3, 5).unwrap(), BigInt::zero());
        assert_eq!(choose(0, 1).unwrap(), BigInt::zero());
    }

    #[test]
    fn choose_rejects_negative_arguments() {
        assert!(choose(-1, 0).is_err());
        assert!(choose(5, -2).is_err());
        assert!(matches!(
            choose(-4, -4),
            Err(DistError::InvalidParameter { what: "n", .. })
        ));
    }

    #[test]
    fn choose_large() {
        // C(100,50) = 100891344545564193334812497256
        let expected: BigInt = "100891344545564193334812497256".parse().unwrap();
        assert_eq!(choose(100, 50).unwrap(), expected);
    }

    #[test]
    fn binom_agrees_with_factorial_ratio() {
        // Pins the merged kernel against the independent n!/(k!(n-k)!) definition.
        for n in 0u64..=30 {
            for k in 0..=n {
                let ratio = factorial(n) / (factorial(k) * factorial(n - k));
                assert_eq!(binom(n, k), ratio, "C({n},{k})");
            }
        }
    }

    #[test]
    fn bigint_to_f64_overflow_returns_error() {
        let huge = binom(10000, 5000);
        match bigint_to_f64(&huge) {
            Err(DistError::PrecisionOverflow { digits }) => {
                assert!(digits > 300, "expected many digits, got {digits}");
            }
            other => panic!("expected PrecisionOverflow, got {other:?}"),
        }
    }

    #[test]
    fn bigint_to_f64_succeeds_for_small_values() {
        assert_eq!(bigint_to_f64(&BigInt::from(42)).unwrap(), 42.0);
        assert!(bigint_to_f64(&BigInt::from(u64::MAX)).is_ok());
    }

    #[test]
    fn ratio_to_f64_exact_tenths() {
        let r = BigRational::new(BigInt::from(6), BigInt::from(10));
        assert_eq!(ratio_to_f64(&r).unwrap(), 0.6);
    }

    // ---------------------------------------------------------------
    // Proptest: property-based / randomized tests
    // ---------------------------------------------------------------

    use proptest::prelude::*;
    use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence, RngAlgorithm};

    fn prob_proptest_config() -> ProptestConfig {
        ProptestConfig {
            cases: 64,
            source_file: Some(file!()),
            failure_persistence: Some(Box::new(FileFailurePersistence::WithSource(
                "proptest-regressions",
            ))),
            rng_algorithm: RngAlgorithm::ChaCha,
            ..ProptestConfig::default()
        }
    }

    proptest! {
        #![proptest_config(prob_proptest_config())]

        /// Symmetry: C(n, k) = C(n, n-k).
        #[test]
        fn binom_symmetry(n in 0u64..300, k in 0u64..300) {
            prop_assume!(k <= n);
            prop_assert_eq!(binom(n, k), binom(n, n - k));
        }

        /// Pascal's rule: C(n, k) = C(n-1, k-1) + C(n-1, k).
        #[test]
        fn binom_pascals_rule(n in 1u64..300, k in 1u64..300) {
            prop_assume!(k <= n);
            let lhs = binom(n, k);
            let rhs = binom(n - 1, k - 1) + binom(n - 1, k);
            prop_assert_eq!(lhs, rhs);
        }

        /// C(n, k) = 0 exactly when k > n.
        #[test]
        fn binom_zero_iff_k_exceeds_n(n in 0u64..200, k in 0u64..400) {
            let c = binom(n, k);
            if k > n {
                prop_assert_eq!(c, BigInt::zero());
            } else {
                prop_assert!(c > BigInt::zero());
            }
        }

        /// Row sums: sum of C(n, k) over k is 2^n.
        #[test]
        fn binom_row_sum_is_power_of_two(n in 0u64..120) {
            let mut total = BigInt::zero();
            for k in 0..=n {
                total += binom(n, k);
            }
            prop_assert_eq!(total, BigInt::one() << n);
        }
    }
}
