//! Strike payoffs (translates `ql/instruments/payoffs.hpp` and
//! `Option::Type` from `ql/option.hpp`).

use ql_core::Real;
use std::fmt;

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// `φ`: `+1` for a call and `-1` for a put.
    pub fn sign(self) -> Real {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A payoff determined by an option type and a strike.
///
/// Engines read `option_type` and `strike`; `value` is the amount paid at
/// exercise for an underlying price, `max(φ(S − K), 0)` unless overridden.
pub trait StrikedPayoff: fmt::Debug + Send + Sync {
    /// Call or put.
    fn option_type(&self) -> OptionType;

    /// Strike price.
    fn strike(&self) -> Real;

    /// Amount paid at exercise when the underlying trades at `price`.
    fn value(&self, price: Real) -> Real {
        (self.option_type().sign() * (price - self.strike())).max(0.0)
    }
}

/// `max(φ(S − K), 0)`.
///
/// Corresponds to `QuantLib::PlainVanillaPayoff`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlainVanillaPayoff {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// A vanilla payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl StrikedPayoff for PlainVanillaPayoff {
    fn option_type(&self) -> OptionType {
        self.option_type
    }

    fn strike(&self) -> Real {
        self.strike
    }
}

impl fmt::Display for PlainVanillaPayoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.option_type, self.strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanilla_values() {
        let call = PlainVanillaPayoff::new(OptionType::Call, 100.0);
        let put = PlainVanillaPayoff::new(OptionType::Put, 100.0);
        let cases = [(110.0, 10.0, 0.0), (90.0, 0.0, 10.0), (100.0, 0.0, 0.0)];
        for (price, call_value, put_value) in cases {
            assert_eq!(call.value(price), call_value);
            assert_eq!(put.value(price), put_value);
        }
    }

    #[test]
    fn display() {
        assert_eq!(PlainVanillaPayoff::new(OptionType::Put, 95.5).to_string(), "Put 95.5");
    }
}
