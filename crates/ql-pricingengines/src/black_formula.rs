//! Black formula on a forward.
//!
//! Translates `ql/pricingengines/blackformula.hpp` and the parts of
//! `ql/pricingengines/blackcalculator.hpp` the analytic vanilla engines use.
//!
//! ```text
//! d1,2 = ln(F/K)/Σ ± Σ/2
//! value = D · φ · (F·N(φ d1) − K·N(φ d2))
//! ```
//!
//! where `Σ` is the total standard deviation of `ln F(T)` and `D` the
//! discount factor to the payment date.

use ql_core::{DiscountFactor, Real};
use ql_instruments::OptionType;
use ql_math::{normal_cdf, normal_pdf};

/// The undiscounted building blocks of the Black formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackTerms {
    /// `N(φ d1)`.
    pub cdf_d1: Real,
    /// `N(φ d2)`.
    pub cdf_d2: Real,
    /// `n(d1)`; zero when the standard deviation is zero.
    pub pdf_d1: Real,
}

/// Evaluate `N(φ d1)`, `N(φ d2)` and `n(d1)`.
///
/// With `std_dev ≤ 0` the distribution collapses onto the forward: both
/// probabilities are 1 if the option is strictly in the money on the forward
/// and 0 otherwise.
pub fn black_terms(
    option_type: OptionType,
    strike: Real,
    forward: Real,
    std_dev: Real,
) -> BlackTerms {
    let phi = option_type.sign();
    if std_dev <= 0.0 {
        let itm = if phi * (forward - strike) > 0.0 { 1.0 } else { 0.0 };
        return BlackTerms {
            cdf_d1: itm,
            cdf_d2: itm,
            pdf_d1: 0.0,
        };
    }
    let d1 = (forward / strike).ln() / std_dev + 0.5 * std_dev;
    let d2 = d1 - std_dev;
    BlackTerms {
        cdf_d1: normal_cdf(phi * d1),
        cdf_d2: normal_cdf(phi * d2),
        pdf_d1: normal_pdf(d1),
    }
}

/// Black price of a European option paying `max(φ(F(T) − K), 0)`.
///
/// `std_dev ≤ 0` gives `discount · max(φ(F − K), 0)`.
pub fn black_formula(
    option_type: OptionType,
    strike: Real,
    forward: Real,
    std_dev: Real,
    discount: DiscountFactor,
) -> Real {
    let terms = black_terms(option_type, strike, forward, std_dev);
    let value = discount
        * option_type.sign()
        * (forward * terms.cdf_d1 - strike * terms.cdf_d2);
    // rounding can leave a tiny negative number deep out of the money
    value.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn at_the_money_reference() {
        // F = K = 100, Σ = 0.2, D = 1: 100·(2N(0.1) − 1)
        let v = black_formula(OptionType::Call, 100.0, 100.0, 0.2, 1.0);
        assert_abs_diff_eq!(v, 7.965_567_455_405_804, epsilon = 1e-12);
        let p = black_formula(OptionType::Put, 100.0, 100.0, 0.2, 1.0);
        assert_abs_diff_eq!(p, v, epsilon = 1e-12);
    }

    #[test]
    fn zero_std_dev_is_discounted_intrinsic() {
        assert_abs_diff_eq!(
            black_formula(OptionType::Call, 95.0, 100.0, 0.0, 0.9),
            4.5,
            epsilon = 1e-14
        );
        assert_eq!(black_formula(OptionType::Put, 95.0, 100.0, 0.0, 0.9), 0.0);
        assert_eq!(black_formula(OptionType::Call, 100.0, 100.0, 0.0, 0.9), 0.0);
        let terms = black_terms(OptionType::Put, 105.0, 100.0, 0.0);
        assert_eq!(terms, BlackTerms { cdf_d1: 1.0, cdf_d2: 1.0, pdf_d1: 0.0 });
    }

    #[test]
    fn large_std_dev_tends_to_forward() {
        let v = black_formula(OptionType::Call, 100.0, 120.0, 40.0, 1.0);
        assert_abs_diff_eq!(v, 120.0, epsilon = 1e-6);
    }

    proptest! {
        #[test]
        fn put_call_parity(
            strike in 10.0f64..300.0,
            forward in 10.0f64..300.0,
            std_dev in 0.0f64..2.0,
            discount in 0.1f64..1.0,
        ) {
            let c = black_formula(OptionType::Call, strike, forward, std_dev, discount);
            let p = black_formula(OptionType::Put, strike, forward, std_dev, discount);
            prop_assert!((c - p - discount * (forward - strike)).abs() < 1e-9);
        }

        #[test]
        fn bounded_by_no_arbitrage(
            strike in 10.0f64..300.0,
            forward in 10.0f64..300.0,
            std_dev in 0.0f64..2.0,
        ) {
            let c = black_formula(OptionType::Call, strike, forward, std_dev, 1.0);
            prop_assert!(c >= (forward - strike).max(0.0) - 1e-9);
            prop_assert!(c <= forward + 1e-9);
        }
    }
}
