//! `YieldTermStructure`: yield / interest-rate term structures
//! (translates `ql/termstructures/yieldtermstructure.hpp`).
//!
//! Any yield curve provides three related quantities, all continuously
//! compounded:
//!
//! * **discount factor**: `P(0,t)`
//! * **zero rate**: `-ln P(0,t) / t`
//! * **instantaneous forward rate**: `f(0,t) = -∂ ln P(0,t) / ∂t`

use crate::term_structure::TermStructure;
use ql_core::{DiscountFactor, Rate, Time};
use ql_time::Date;

/// Step used for finite-difference forward rates.
const DT: Time = 1.0e-4;

/// A yield (interest-rate) term structure.
///
/// Implementors must provide **at least one** of
/// [`discount_impl`](YieldTermStructure::discount_impl) and
/// [`zero_rate_impl`](YieldTermStructure::zero_rate_impl); each default is
/// expressed through the other.
///
/// Corresponds to `QuantLib::YieldTermStructure`.
pub trait YieldTermStructure: TermStructure {
    /// Discount factor for time `t`.
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        if t == 0.0 {
            return 1.0;
        }
        (-self.zero_rate_impl(t) * t).exp()
    }

    /// Continuously-compounded zero rate for time `t`.
    fn zero_rate_impl(&self, t: Time) -> Rate {
        if t == 0.0 {
            return self.forward_rate_impl(0.0);
        }
        -self.discount_impl(t).ln() / t
    }

    /// Instantaneous forward rate at time `t`.
    ///
    /// Default: central difference of `ln P`, one-sided at `t = 0`.
    fn forward_rate_impl(&self, t: Time) -> Rate {
        let t1 = (t - DT / 2.0).max(0.0);
        let t2 = t1 + DT;
        (self.discount_impl(t1).ln() - self.discount_impl(t2).ln()) / (t2 - t1)
    }

    // ── Public interface ─────────────────────────────────────────────────

    /// Discount factor for a time.
    fn discount(&self, t: Time) -> DiscountFactor {
        self.discount_impl(t)
    }

    /// Discount factor for a date.
    fn discount_date(&self, date: Date) -> DiscountFactor {
        self.discount_impl(self.time_from_reference(date))
    }

    /// Continuously-compounded zero rate for time `t`.
    fn zero_rate(&self, t: Time) -> Rate {
        self.zero_rate_impl(t)
    }

    /// Continuously-compounded forward rate between `t1` and `t2`.
    ///
    /// Collapses to the instantaneous forward when `t1 == t2`.
    fn forward_rate(&self, t1: Time, t2: Time) -> Rate {
        if t1 == t2 {
            return self.forward_rate_impl(t1);
        }
        (self.discount_impl(t1) / self.discount_impl(t2)).ln() / (t2 - t1)
    }
}
