//! Flat yield curve (translates `ql/termstructures/yield/flatforward.hpp`,
//! continuous compounding only).

use crate::term_structure::{impl_term_structure, TermStructureData};
use crate::yield_term_structure::YieldTermStructure;
use ql_core::{DiscountFactor, Rate, Time};
use ql_time::{Calendar, Date, DayCounter};

/// `P(0, t) = exp(−r·t)` for one continuously compounded rate `r`.
#[derive(Debug, Clone)]
pub struct FlatForward {
    data: TermStructureData,
    rate: Rate,
}

impl FlatForward {
    /// A flat curve at the continuously compounded `rate`.
    pub fn new(reference_date: Date, rate: Rate, day_counter: impl DayCounter + 'static) -> Self {
        Self {
            data: TermStructureData::new(reference_date, day_counter),
            rate,
        }
    }

    /// A flat curve quoted as an annually compounded rate, `r = ln(1 + R)`.
    pub fn from_annual_rate(
        reference_date: Date,
        annual_rate: Rate,
        day_counter: impl DayCounter + 'static,
    ) -> Self {
        Self::new(reference_date, annual_rate.ln_1p(), day_counter)
    }

    /// Attach a calendar.
    pub fn with_calendar(self, calendar: impl Calendar + 'static) -> Self {
        Self {
            data: self.data.with_calendar(calendar),
            ..self
        }
    }

    /// `r`.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl_term_structure!(FlatForward);

impl YieldTermStructure for FlatForward {
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        (-self.rate * t).exp()
    }

    fn zero_rate_impl(&self, _t: Time) -> Rate {
        self.rate
    }

    fn forward_rate_impl(&self, _t: Time) -> Rate {
        self.rate
    }
}
