//! Standard normal distribution (translates
//! `ql/math/distributions/normaldistribution.hpp`).

use ql_core::Real;
use statrs::function::erf::erfc;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// `n(x) = exp(−x²/2) / √(2π)`.
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// `N(x)`, computed as `erfc(−x/√2) / 2` so the lower tail keeps its
/// relative precision.
///
/// Accurate to about `1e-10` absolute, the accuracy of `statrs`' `erfc`
/// (errors near `1e-11` around `|x| = 1`).
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn known_values() {
        assert_abs_diff_eq!(normal_pdf(0.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
        assert_abs_diff_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-15);
        for (x, p) in [
            (1.0, 0.841_344_746_068_542_9),
            (-1.96, 0.024_997_895_148_220_43),
            (0.1, 0.539_827_837_277_028_9),
        ] {
            assert_abs_diff_eq!(normal_cdf(x), p, epsilon = 1e-10);
        }
    }

    #[test]
    fn lower_tail_stays_positive() {
        let p = normal_cdf(-10.0);
        assert!(p > 0.0 && p < 1e-22, "{p}");
        assert_abs_diff_eq!(normal_cdf(10.0), 1.0, epsilon = 1e-15);
    }

    proptest! {
        #[test]
        fn cdf_is_symmetric(x in -8.0f64..8.0) {
            prop_assert!((normal_cdf(x) + normal_cdf(-x) - 1.0).abs() < 1e-12);
        }

        #[test]
        fn cdf_is_increasing(x in -8.0f64..8.0, dx in 1e-3f64..1.0) {
            prop_assert!(normal_cdf(x + dx) >= normal_cdf(x));
        }

        #[test]
        fn pdf_is_cdf_slope(x in -5.0f64..5.0) {
            let h = 1e-4;
            let slope = (normal_cdf(x + h) - normal_cdf(x - h)) / (2.0 * h);
            prop_assert!((slope - normal_pdf(x)).abs() < 1e-6);
        }
    }
}
