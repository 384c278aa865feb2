//! The decimal value capability consumed by [`spec_ops`](crate::spec_ops)
//!
//! A decimal value is `(-1)^sign × coefficient × 10^exponent`, or one of
//! the special values: a signed infinity, a quiet NaN or a signaling NaN
//! (NaNs carry an optional integer payload in the coefficient).

use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::arithmetic::count_decimal_digits_uint;
use crate::error::TrapError;
use crate::Context;

/// The kind of a decimal value
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Species {
    Finite,
    Infinite,
    QuietNaN,
    SignalingNaN,
}

/// Queries and context-aware operations a decimal type provides
///
/// Arithmetic itself (rounding, addition, division) belongs to the
/// implementing type; the specification-level operations in
/// [`spec_ops`](crate::spec_ops) are written against this trait.
pub trait DecimalValue: Clone {
    fn species(&self) -> Species;

    /// True if the sign bit is set (including -0, -∞ and -NaN)
    fn is_negative(&self) -> bool;

    /// Exponent of a finite value; zero for special values
    fn exponent(&self) -> &BigInt;

    /// Unsigned coefficient of a finite value, payload of a NaN, zero
    /// for infinities
    fn coefficient(&self) -> &BigUint;

    /// Finite value from its parts
    fn from_parts(negative: bool, coefficient: BigUint, exponent: BigInt) -> Self;

    fn infinity(negative: bool) -> Self;

    fn nan(negative: bool, payload: BigUint, signaling: bool) -> Self;

    /// Round under the context, recording conditions in it
    ///
    /// Without a context the value is returned unchanged.
    fn round_to_context(&self, ctx: Option<&mut Context>) -> Result<Self, TrapError<Self>>;

    fn add_with_context(&self, other: &Self, ctx: Option<&mut Context>) -> Result<Self, TrapError<Self>>;

    fn divide_with_context(&self, divisor: &Self, ctx: Option<&mut Context>) -> Result<Self, TrapError<Self>>;

    /// Total ordering of the representations
    ///
    /// Distinguishes signed zeros, exponents of equal values and NaN
    /// payloads; NaNs sort beyond the infinities on their sign's side.
    fn compare_total(&self, other: &Self) -> Ordering;

    /// Number of digits of the coefficient (1 for zero)
    fn digit_count(&self) -> u64 {
        count_decimal_digits_uint(self.coefficient())
    }

    /// `exponent + digit_count - 1`
    fn adjusted_exponent(&self) -> BigInt {
        self.exponent() + BigInt::from(self.digit_count()) - 1
    }

    fn is_finite(&self) -> bool {
        self.species() == Species::Finite
    }

    fn is_infinite(&self) -> bool {
        self.species() == Species::Infinite
    }

    fn is_nan(&self) -> bool {
        matches!(self.species(), Species::QuietNaN | Species::SignalingNaN)
    }

    fn is_quiet_nan(&self) -> bool {
        self.species() == Species::QuietNaN
    }

    fn is_signaling_nan(&self) -> bool {
        self.species() == Species::SignalingNaN
    }

    /// True for a finite value with a zero coefficient (either sign)
    fn is_zero(&self) -> bool {
        self.is_finite() && self.coefficient().is_zero()
    }

    /// Same value with the sign bit set to `negative`
    fn copy_with_sign(&self, negative: bool) -> Self {
        match self.species() {
            Species::Finite => Self::from_parts(negative, self.coefficient().clone(), self.exponent().clone()),
            Species::Infinite => Self::infinity(negative),
            Species::QuietNaN => Self::nan(negative, self.coefficient().clone(), false),
            Species::SignalingNaN => Self::nan(negative, self.coefficient().clone(), true),
        }
    }
}
