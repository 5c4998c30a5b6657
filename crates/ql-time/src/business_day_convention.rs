//! Business-day convention (translates `ql/time/businessdayconvention.hpp`).

use std::fmt;

/// Rule for moving a date that is not a business day.
///
/// The `Modified` variants refuse to leave the month: when the plain rule
/// would cross a month boundary they roll the other way instead.
///
/// Corresponds to `QuantLib::BusinessDayConvention`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// Next business day.
    #[default]
    Following,
    /// Next business day, or the previous one if the next is in another month.
    ModifiedFollowing,
    /// Previous business day.
    Preceding,
    /// Previous business day, or the next one if the previous is in another
    /// month.
    ModifiedPreceding,
    /// Leave the date as is.
    Unadjusted,
    /// Closest business day; ties go forward.
    Nearest,
    /// Last business day of the month.
    EndOfMonth,
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Following => "Following",
            Self::ModifiedFollowing => "Modified Following",
            Self::Preceding => "Preceding",
            Self::ModifiedPreceding => "Modified Preceding",
            Self::Unadjusted => "Unadjusted",
            Self::Nearest => "Nearest",
            Self::EndOfMonth => "End of Month",
        })
    }
}
