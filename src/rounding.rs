//! Rounding structures and subroutines

use std::fmt;
use std::str::FromStr;

use crate::error::ContextError;
use num_bigint::Sign;

/// Rule for choosing the retained last digit when digits are discarded
///
/// | mode         |  5.5 |  2.5 |  1.6 |  1.1 | -1.1 | -2.5 |
/// |--------------|------|------|------|------|------|------|
/// | `Up`         |    6 |    3 |    2 |    2 |   -2 |   -3 |
/// | `Down`       |    5 |    2 |    1 |    1 |   -1 |   -2 |
/// | `Ceiling`    |    6 |    3 |    2 |    2 |   -1 |   -2 |
/// | `Floor`      |    5 |    2 |    1 |    1 |   -2 |   -3 |
/// | `HalfUp`     |    6 |    3 |    2 |    1 |   -1 |   -3 |
/// | `HalfDown`   |    5 |    2 |    2 |    1 |   -1 |   -2 |
/// | `HalfEven`   |    6 |    2 |    2 |    1 |   -1 |   -2 |
/// | `ZeroFiveUp` |    6 |    2 |    1 |    1 |   -1 |   -2 |
/// | `Odd`        |    5 |    3 |    1 |    1 |   -1 |   -3 |
///
/// Contexts default to `HalfEven` unless the build sets
/// `RUST_BIGDECIMAL_CONTEXT_DEFAULT_ROUNDING_MODE`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Towards zero (truncation)
    Down,
    /// Towards +∞
    Ceiling,
    /// Towards -∞
    Floor,
    /// To nearest, ties away from zero
    HalfUp,
    /// To nearest, ties towards zero
    HalfDown,
    /// To nearest, ties to an even digit
    HalfEven,
    /// Truncate, then step away from zero if the retained digit is 0 or 5
    /// and something nonzero was discarded
    ZeroFiveUp,
    /// Truncate, then make the retained digit odd if something nonzero
    /// was discarded
    Odd,
}

impl RoundingMode {
    /// All rounding modes, in declaration order
    pub const ALL: [RoundingMode; 9] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::ZeroFiveUp,
        RoundingMode::Odd,
    ];

    /// Retained digit after rounding away the digits past `pair.0`
    ///
    /// `pair` is the last retained digit and the first discarded one
    /// (both below ten); `trailing_zeros` is true if every discarded
    /// digit after `pair.1` is zero. The result may be 10, in which case
    /// the caller carries into the next digit. Only the magnitude is
    /// returned; `sign` matters for the directed modes.
    ///
    /// ```
    /// # use bigdecimal_context::RoundingMode;
    /// # use num_bigint::Sign;
    /// // -0.15 to one place
    /// assert_eq!(RoundingMode::Floor.round_pair(Sign::Minus, (1, 5), true), 2);
    /// assert_eq!(RoundingMode::HalfEven.round_pair(Sign::Minus, (1, 5), true), 2);
    /// assert_eq!(RoundingMode::HalfDown.round_pair(Sign::Minus, (1, 5), true), 1);
    /// ```
    pub fn round_pair(&self, sign: Sign, pair: (u8, u8), trailing_zeros: bool) -> u8 {
        use self::RoundingMode::*;
        use std::cmp::Ordering::*;

        let (retained, discarded) = pair;
        // exact: nothing to round
        if discarded == 0 && trailing_zeros {
            return retained;
        }
        let negative = sign == Sign::Minus;
        let away = retained + 1;
        let toward = retained;
        let half = match discarded.cmp(&5) {
            Equal if !trailing_zeros => Greater,
            ord => ord,
        };
        match (*self, half) {
            (Up, _) => away,
            (Down, _) => toward,
            (Ceiling, _) => if negative { toward } else { away },
            (Floor, _) => if negative { away } else { toward },
            (ZeroFiveUp, _) => if retained % 5 == 0 { away } else { toward },
            (Odd, _) => if retained % 2 == 0 { away } else { toward },
            (_, Less) => toward,
            (_, Greater) => away,
            (HalfUp, Equal) => away,
            (HalfDown, Equal) => toward,
            (HalfEven, Equal) => if retained % 2 == 0 { toward } else { away },
        }
    }

    /// True if an overflowing result under this mode becomes an
    /// infinity (otherwise it becomes the largest finite number)
    pub(crate) fn overflows_to_infinity(&self, sign: Sign) -> bool {
        use self::RoundingMode::*;

        match *self {
            Up | HalfUp | HalfDown | HalfEven => true,
            Down | ZeroFiveUp | Odd => false,
            Ceiling => sign != Sign::Minus,
            Floor => sign == Sign::Minus,
        }
    }

    /// Name of the variant, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        use self::RoundingMode::*;

        match *self {
            Up => "Up",
            Down => "Down",
            Ceiling => "Ceiling",
            Floor => "Floor",
            HalfUp => "HalfUp",
            HalfDown => "HalfDown",
            HalfEven => "HalfEven",
            ZeroFiveUp => "ZeroFiveUp",
            Odd => "Odd",
        }
    }
}

impl Default for RoundingMode {
    fn default() -> RoundingMode {
        RoundingMode::HalfEven
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<RoundingMode, ContextError> {
        let s = s.trim();
        RoundingMode::ALL
            .iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ContextError::InvalidArgument(format!("unknown rounding mode '{}'", s)))
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;

    include!("rounding.tests.rs");
}
