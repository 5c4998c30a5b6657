//! Black volatility surfaces (translates
//! `ql/termstructures/volatility/equityfx/blackvoltermstructure.hpp` and
//! `blackconstantvol.hpp`).

use crate::term_structure::{impl_term_structure, TermStructure, TermStructureData};
use ql_core::{Real, Time, Volatility};
use ql_time::{Calendar, Date, DayCounter};

/// Black implied volatility by expiry and strike.
///
/// Surfaces provide `black_vol_at`; variance and the date-based lookups
/// follow from it through the surface's day counter.
pub trait BlackVolTermStructure: TermStructure {
    /// `σ(t, K)`.
    fn black_vol_at(&self, t: Time, strike: Real) -> Volatility;

    /// `σ(t, K)²·t`; zero for `t ≤ 0`.
    fn black_variance_at(&self, t: Time, strike: Real) -> Real {
        if t <= 0.0 {
            return 0.0;
        }
        let vol = self.black_vol_at(t, strike);
        vol * vol * t
    }

    /// Volatility to `date`.
    fn black_vol(&self, date: Date, strike: Real) -> Volatility {
        self.black_vol_at(self.time_from_reference(date), strike)
    }

    /// Total variance to `date`.
    fn black_variance(&self, date: Date, strike: Real) -> Real {
        self.black_variance_at(self.time_from_reference(date), strike)
    }
}

/// The same volatility for every expiry and strike.
#[derive(Debug, Clone)]
pub struct BlackConstantVol {
    data: TermStructureData,
    volatility: Volatility,
}

impl BlackConstantVol {
    /// A flat surface quoted from `reference_date`.
    pub fn new(
        reference_date: Date,
        volatility: Volatility,
        day_counter: impl DayCounter + 'static,
    ) -> Self {
        Self {
            data: TermStructureData::new(reference_date, day_counter),
            volatility,
        }
    }

    /// Attach a calendar.
    pub fn with_calendar(self, calendar: impl Calendar + 'static) -> Self {
        Self {
            data: self.data.with_calendar(calendar),
            ..self
        }
    }

    /// The quoted volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }
}

impl_term_structure!(BlackConstantVol);

impl BlackVolTermStructure for BlackConstantVol {
    fn black_vol_at(&self, _t: Time, _strike: Real) -> Volatility {
        self.volatility
    }
}
