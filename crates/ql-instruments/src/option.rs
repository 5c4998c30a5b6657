//! Vanilla option (translates `ql/instruments/vanillaoption.hpp` and the
//! argument block of `ql/instruments/oneassetoption.hpp`).

use crate::exercise::Exercise;
use crate::instrument::{Instrument, PricingEngine, PricingResults};
use crate::payoff::{OptionType, PlainVanillaPayoff, StrikedPayoff};
use ql_core::{errors::Result, Real};
use ql_time::Date;
use std::sync::Arc;

/// What an engine sees of a single-asset option: the payoff and when it may
/// be exercised.
#[derive(Debug, Clone)]
pub struct VanillaOptionArguments {
    /// Payoff at exercise.
    pub payoff: Arc<dyn StrikedPayoff>,
    /// Exercise dates.
    pub exercise: Exercise,
}

/// A call or put on one underlying.
///
/// The option holds no market data; pricing hands its
/// [`VanillaOptionArguments`] to an engine.
#[derive(Debug, Clone)]
pub struct VanillaOption {
    args: VanillaOptionArguments,
}

impl VanillaOption {
    /// An option with an arbitrary striked payoff.
    pub fn new(payoff: Arc<dyn StrikedPayoff>, exercise: Exercise) -> Self {
        Self {
            args: VanillaOptionArguments { payoff, exercise },
        }
    }

    /// A plain vanilla European option expiring on `expiry`.
    pub fn european(option_type: OptionType, strike: Real, expiry: Date) -> Self {
        let payoff = PlainVanillaPayoff::new(option_type, strike);
        Self::new(Arc::new(payoff), Exercise::european(expiry))
    }

    /// Strike price.
    pub fn strike(&self) -> Real {
        self.args.payoff.strike()
    }

    /// Call or put.
    pub fn option_type(&self) -> OptionType {
        self.args.payoff.option_type()
    }

    /// Exercise dates.
    pub fn exercise(&self) -> &Exercise {
        &self.args.exercise
    }

    /// A copy of the engine arguments; the payoff is shared.
    pub fn arguments(&self) -> VanillaOptionArguments {
        self.args.clone()
    }

    /// Price with an engine that needs nothing beyond the contract terms.
    pub fn price(
        &self,
        engine: &dyn PricingEngine<VanillaOptionArguments>,
    ) -> Result<PricingResults> {
        engine.calculate(&self.args)
    }
}

impl Instrument for VanillaOption {
    fn maturity_date(&self) -> Date {
        self.args.exercise.last_date()
    }
}
