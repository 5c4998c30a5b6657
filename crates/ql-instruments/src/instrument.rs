//! Instruments, engines and their results (translates `ql/instrument.hpp`
//! and `ql/pricingengine.hpp`).
//!
//! An instrument here only describes a contract. Engines take its arguments
//! and return fresh results on every call; whatever caching happens is up to
//! the engine.

use ql_core::{errors::Result, Error, Real};
use ql_time::Date;
use std::collections::HashMap;

/// NPV plus any named quantities an engine reports alongside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingResults {
    /// Net present value.
    pub npv: Real,
    /// Numerical error estimate; analytic engines leave it `None`.
    pub error_estimate: Option<Real>,
    /// Greeks and diagnostics keyed by name, e.g. `"delta"`.
    pub additional_results: HashMap<String, Real>,
}

impl PricingResults {
    /// Results holding only an NPV.
    pub fn from_npv(npv: Real) -> Self {
        Self {
            npv,
            ..Self::default()
        }
    }

    /// Builder-style insert of a named result.
    pub fn with_result(mut self, key: impl Into<String>, value: Real) -> Self {
        self.additional_results.insert(key.into(), value);
        self
    }

    /// A named result, if the engine produced it.
    pub fn get(&self, key: &str) -> Option<Real> {
        self.additional_results.get(key).copied()
    }

    /// A named result, or [`Error::Runtime`] when it is missing.
    pub fn result(&self, key: &str) -> Result<Real> {
        self.get(key)
            .ok_or_else(|| Error::Runtime(format!("{key} not provided")))
    }
}

/// Prices instruments described by `Args`.
///
/// Corresponds to `QuantLib::PricingEngine`. Engines are shared across
/// threads, so `calculate` takes `&self`.
pub trait PricingEngine<Args>: std::fmt::Debug + Send + Sync {
    /// Price one instrument.
    fn calculate(&self, args: &Args) -> Result<PricingResults>;
}

/// A tradable contract.
pub trait Instrument: std::fmt::Debug + Send + Sync {
    /// Last date on which the contract pays or can be exercised.
    fn maturity_date(&self) -> Date;

    /// Expired once the evaluation date is past maturity; an instrument
    /// maturing today is still alive.
    fn is_expired(&self, evaluation_date: Date) -> bool {
        evaluation_date > self.maturity_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_results() {
        let r = PricingResults::from_npv(42.0)
            .with_result("delta", 0.55)
            .with_result("gamma", 0.02);
        assert_eq!(r.npv, 42.0);
        assert_eq!(r.error_estimate, None);
        assert_eq!(r.get("delta"), Some(0.55));
        assert_eq!(r.result("gamma"), Ok(0.02));
        assert_eq!(r.get("vega"), None);
        assert_eq!(r.result("vega"), Err(Error::Runtime("vega not provided".into())));
    }
}
