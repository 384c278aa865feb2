// \file src/context.rs

//! A `Context` object is the set of parameters that define otherwise
//! ambiguous arithmetical operations.
//!
//! It fixes the precision of results, the rounding mode, the range of
//! exponents and what happens when a result does not fit: which
//! conditions are recorded in the flags register and which of them
//! abort the operation (traps).
//!
//! Contexts are values: every `with_*` method returns a modified copy.
//! The only state ever mutated in place is the flags register, and only
//! when the context was derived with [`Context::with_blank_flags`].

use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};

use crate::arithmetic::{
    count_decimal_digits_of_bit_width, count_decimal_digits_uint, ten_to_the_uint, two_to_the_uint,
};
use crate::error::ContextError;
use crate::{Flags, RoundingMode};

// const DEFAULT_PRECISION: u64 = ${RUST_BIGDECIMAL_CONTEXT_DEFAULT_PRECISION} or 100;
include!(concat!(env!("OUT_DIR"), "/default_precision.rs"));

// const DEFAULT_ROUNDING_MODE: RoundingMode = ${RUST_BIGDECIMAL_CONTEXT_DEFAULT_ROUNDING_MODE} or HalfEven;
include!(concat!(env!("OUT_DIR"), "/default_rounding_mode.rs"));

/// Exponent bounds must have a magnitude below 2^MAX_EXPONENT_BOUND_BITS
pub const MAX_EXPONENT_BOUND_BITS: u64 = 64;

/// Precision, in bits, of the coefficient of a CLI `System.Decimal`
const CLI_DECIMAL_PRECISION_BITS: u64 = 96;

/// Rounding, exponent range and condition signaling parameters of
/// decimal operations
///
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    /// Maximum number of significant digits; zero means unlimited
    precision: BigUint,

    /// Method to round numbers
    rounding: RoundingMode,

    /// Lowest exponent (only meaningful with `has_exponent_range`)
    e_min: BigInt,

    /// Highest exponent (only meaningful with `has_exponent_range`)
    e_max: BigInt,

    has_exponent_range: bool,

    /// Range checks use the adjusted exponent (exponent + digits - 1)
    /// instead of the raw exponent
    adjust_exponent: bool,

    clamp_normal_exponents: bool,

    simplified: bool,

    /// Precision counts binary rather than decimal digits
    precision_in_bits: bool,

    /// `None` when flag tracking is disabled
    flags: Option<Flags>,

    traps: Flags,
}

impl Default for Context {
    fn default() -> Context {
        Context::for_precision_and_rounding(DEFAULT_PRECISION, DEFAULT_ROUNDING_MODE)
    }
}

impl Context {
    /// Create context with the given precision, rounding mode and
    /// exponent range
    ///
    /// Range checks use the adjusted exponent. Fails if `precision` is
    /// negative or if `e_min > e_max`.
    ///
    /// ```
    /// # use bigdecimal_context::{Context, RoundingMode};
    /// let ctx = Context::new(7, RoundingMode::HalfEven, -95, 96, true).unwrap();
    /// assert_eq!(ctx.e_max(), &96.into());
    ///
    /// assert!(Context::new(-1, RoundingMode::HalfEven, 0, 0, false).is_err());
    /// assert!(Context::new(0, RoundingMode::HalfEven, 0, -1, false).is_err());
    /// ```
    pub fn new(
        precision: i64,
        rounding: RoundingMode,
        e_min: i64,
        e_max: i64,
        clamp_normal_exponents: bool,
    ) -> Result<Context, ContextError> {
        Context::new_big(
            &BigInt::from(precision),
            rounding,
            &BigInt::from(e_min),
            &BigInt::from(e_max),
            clamp_normal_exponents,
        )
    }

    /// Create context with arbitrary precision parameters
    ///
    /// Fails like [`Context::new`], and also if the magnitude of either
    /// exponent bound needs more than [`MAX_EXPONENT_BOUND_BITS`] bits.
    pub fn new_big(
        precision: &BigInt,
        rounding: RoundingMode,
        e_min: &BigInt,
        e_max: &BigInt,
        clamp_normal_exponents: bool,
    ) -> Result<Context, ContextError> {
        let precision = checked_precision(precision)?;
        check_exponent_range(e_min, e_max)?;

        Ok(Context {
            precision: precision,
            rounding: rounding,
            e_min: e_min.clone(),
            e_max: e_max.clone(),
            has_exponent_range: true,
            adjust_exponent: true,
            clamp_normal_exponents: clamp_normal_exponents,
            simplified: false,
            precision_in_bits: false,
            flags: None,
            traps: Flags::empty(),
        })
    }

    /// Unlimited precision, unbounded exponents, HalfEven rounding,
    /// no flags and no traps
    pub fn unlimited() -> Context {
        Context {
            precision: BigUint::zero(),
            rounding: RoundingMode::HalfEven,
            e_min: BigInt::zero(),
            e_max: BigInt::zero(),
            has_exponent_range: false,
            adjust_exponent: true,
            clamp_normal_exponents: false,
            simplified: false,
            precision_in_bits: false,
            flags: None,
            traps: Flags::empty(),
        }
    }

    /// Emulates the CLI (.NET) `System.Decimal` type
    ///
    /// 96-bit coefficient, raw exponent in [-28, 0], HalfEven rounding,
    /// clamped. Results beyond ±(2^96 - 1) overflow to infinity.
    pub fn cli_decimal() -> Context {
        Context {
            precision: BigUint::from(CLI_DECIMAL_PRECISION_BITS),
            rounding: RoundingMode::HalfEven,
            e_min: BigInt::from(-28),
            e_max: BigInt::zero(),
            has_exponent_range: true,
            adjust_exponent: false,
            clamp_normal_exponents: true,
            simplified: false,
            precision_in_bits: true,
            flags: None,
            traps: Flags::empty(),
        }
    }

    /// The basic default context of the General Decimal Arithmetic
    /// specification
    ///
    /// Precision 9, HalfUp, exponents in [-999999999, 999999999], every
    /// condition but Inexact, Rounded and Subnormal trapped.
    pub fn basic() -> Context {
        Context {
            precision: BigUint::from(9u8),
            rounding: RoundingMode::HalfUp,
            e_min: BigInt::from(-999_999_999),
            e_max: BigInt::from(999_999_999),
            has_exponent_range: true,
            adjust_exponent: true,
            clamp_normal_exponents: false,
            simplified: false,
            precision_in_bits: false,
            flags: None,
            traps: Flags::INVALID
                | Flags::DIVIDE_BY_ZERO
                | Flags::OVERFLOW
                | Flags::UNDERFLOW
                | Flags::CLAMPED,
        }
    }

    /// IEEE 754-2008 decimal32 interchange format
    pub fn decimal32() -> Context {
        Context::interchange(7, 96)
    }

    /// IEEE 754-2008 decimal64 interchange format
    pub fn decimal64() -> Context {
        Context::interchange(16, 384)
    }

    /// IEEE 754-2008 decimal128 interchange format
    pub fn decimal128() -> Context {
        Context::interchange(34, 6144)
    }

    fn interchange(precision: u64, e_max: i64) -> Context {
        Context {
            precision: BigUint::from(precision),
            rounding: RoundingMode::HalfEven,
            e_min: BigInt::from(1 - e_max),
            e_max: BigInt::from(e_max),
            has_exponent_range: true,
            adjust_exponent: true,
            clamp_normal_exponents: true,
            simplified: false,
            precision_in_bits: false,
            flags: None,
            traps: Flags::empty(),
        }
    }

    /// Unbounded exponents, HalfUp rounding and the given precision
    pub fn for_precision(precision: u64) -> Context {
        Context::for_precision_and_rounding(precision, RoundingMode::HalfUp)
    }

    /// Unlimited precision and exponents with the given rounding mode
    pub fn for_rounding(rounding: RoundingMode) -> Context {
        Context::for_precision_and_rounding(0, rounding)
    }

    /// Unbounded exponents with the given precision and rounding mode
    pub fn for_precision_and_rounding(precision: u64, rounding: RoundingMode) -> Context {
        Context {
            precision: BigUint::from(precision),
            rounding: rounding,
            ..Context::unlimited()
        }
    }

    /// Maximum number of significant digits (bits, if
    /// [`is_precision_in_bits`](Context::is_precision_in_bits)); zero if unlimited
    pub fn precision(&self) -> &BigUint {
        &self.precision
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Lowest exponent; zero when there is no exponent range
    pub fn e_min(&self) -> &BigInt {
        &self.e_min
    }

    /// Highest exponent; zero when there is no exponent range
    pub fn e_max(&self) -> &BigInt {
        &self.e_max
    }

    pub fn has_exponent_range(&self) -> bool {
        self.has_exponent_range
    }

    /// True if exponent range checks use the adjusted exponent
    /// (`exponent + digits - 1`), false if they use the raw exponent
    pub fn adjust_exponent(&self) -> bool {
        self.adjust_exponent
    }

    pub fn clamp_normal_exponents(&self) -> bool {
        self.clamp_normal_exponents
    }

    /// True if this context uses simplified arithmetic: no negative
    /// zero and no subnormal results
    pub fn is_simplified(&self) -> bool {
        self.simplified
    }

    pub fn is_precision_in_bits(&self) -> bool {
        self.precision_in_bits
    }

    /// True if the precision is limited
    pub fn has_max_precision(&self) -> bool {
        !self.precision.is_zero()
    }

    /// True if this context records conditions in a flags register
    pub fn has_flags(&self) -> bool {
        self.flags.is_some()
    }

    pub fn has_flags_or_traps(&self) -> bool {
        self.has_flags() || !self.traps.is_empty()
    }

    /// Current flags register
    ///
    /// Always succeeds; empty when flag tracking is disabled.
    pub fn flags(&self) -> Flags {
        self.flags.unwrap_or_else(Flags::empty)
    }

    /// Overwrite the flags register
    ///
    /// Fails unless the context was derived with
    /// [`with_blank_flags`](Context::with_blank_flags).
    pub fn set_flags(&mut self, flags: Flags) -> Result<(), ContextError> {
        match self.flags.as_mut() {
            Some(register) => {
                *register = flags;
                Ok(())
            }
            None => Err(ContextError::IllegalState(
                "flags can't be set on a context without flag tracking".into(),
            )),
        }
    }

    /// Reset the flags register to blank
    pub fn clear_flags(&mut self) -> Result<(), ContextError> {
        self.set_flags(Flags::empty())
    }

    /// Conditions that abort operations
    pub fn traps(&self) -> Flags {
        self.traps
    }

    /// Add conditions to the flags register, if it is enabled
    pub(crate) fn record_flags(&mut self, conditions: Flags) {
        if let Some(register) = self.flags.as_mut() {
            tracing::trace!(?conditions, "recording decimal conditions");
            *register |= conditions;
        }
    }

    /// True if the exponent is within this context's exponent range
    ///
    /// Always true if the context has no exponent range.
    ///
    /// ```
    /// # use bigdecimal_context::Context;
    /// # use num_bigint::BigInt;
    /// let ctx = Context::unlimited().with_exponent_range(-5, 5).unwrap();
    /// assert!(ctx.exponent_within_range(&BigInt::from(5)));
    /// assert!(!ctx.exponent_within_range(&BigInt::from(-6)));
    /// assert!(Context::unlimited().exponent_within_range(&BigInt::from(1_000_000)));
    /// ```
    pub fn exponent_within_range(&self, exponent: &BigInt) -> bool {
        if !self.has_exponent_range {
            return true;
        }
        &self.e_min <= exponent && exponent <= &self.e_max
    }

    /// The exponent range checks compare against `e_min` and `e_max`
    ///
    /// The adjusted exponent `exponent + digits - 1` in the usual
    /// configuration, the raw exponent otherwise.
    pub fn effective_exponent(&self, exponent: &BigInt, digits: u64) -> BigInt {
        if self.adjust_exponent {
            exponent + BigInt::from(digits) - 1
        } else {
            exponent.clone()
        }
    }

    /// Lowest exponent of a subnormal result
    ///
    /// `e_min - (precision - 1)` when range checks use the adjusted
    /// exponent and the precision is limited, otherwise `e_min`.
    /// `None` without an exponent range.
    pub fn e_tiny(&self) -> Option<BigInt> {
        if !self.has_exponent_range {
            return None;
        }
        match self.digit_limit() {
            Some(digits) if self.adjust_exponent => Some(&self.e_min - BigInt::from(digits - 1)),
            _ => Some(self.e_min.clone()),
        }
    }

    /// Highest exponent a result may carry before it has to be clamped
    pub(crate) fn e_top(&self) -> BigInt {
        match self.digit_limit() {
            Some(digits) if self.adjust_exponent && self.clamp_normal_exponents => {
                &self.e_max - BigInt::from(digits - 1)
            }
            _ => self.e_max.clone(),
        }
    }

    /// Maximum number of decimal digits of a coefficient
    ///
    /// `None` if the precision is unlimited (or too large to matter).
    pub(crate) fn digit_limit(&self) -> Option<u64> {
        if self.precision.is_zero() {
            return None;
        }
        let precision = self.precision.to_u64()?;
        if self.precision_in_bits {
            Some(count_decimal_digits_of_bit_width(precision))
        } else {
            Some(precision)
        }
    }

    /// Whether a coefficient is within the precision
    pub(crate) fn coefficient_fits(&self, coefficient: &BigUint) -> bool {
        if self.precision.is_zero() {
            return true;
        }
        let precision = match self.precision.to_u64() {
            Some(precision) => precision,
            None => return true,
        };
        if self.precision_in_bits {
            // below 2^precision
            coefficient.bits() <= precision
        } else {
            count_decimal_digits_uint(coefficient) <= precision
        }
    }

    /// Largest coefficient allowed by the precision
    ///
    /// Builds the full value; only needed for an overflow result.
    pub(crate) fn max_coefficient(&self) -> Option<BigUint> {
        if self.precision.is_zero() {
            return None;
        }
        let precision = self.precision.to_u64()?;
        let limit = if self.precision_in_bits {
            two_to_the_uint(precision)
        } else {
            ten_to_the_uint(precision)
        };
        Some(limit - 1u8)
    }

    /// Copy with the given precision
    ///
    /// ```
    /// # use bigdecimal_context::Context;
    /// let ctx = Context::unlimited().with_precision(6).unwrap();
    /// assert_eq!(ctx.precision(), &6u8.into());
    /// assert!(Context::unlimited().with_precision(-1).is_err());
    /// ```
    pub fn with_precision(&self, precision: i64) -> Result<Context, ContextError> {
        self.with_big_precision(&BigInt::from(precision))
    }

    /// Copy with the given arbitrary precision
    pub fn with_big_precision(&self, precision: &BigInt) -> Result<Context, ContextError> {
        Ok(Context {
            precision: checked_precision(precision)?,
            ..self.clone()
        })
    }

    pub fn with_rounding(&self, rounding: RoundingMode) -> Context {
        Context {
            rounding: rounding,
            ..self.clone()
        }
    }

    /// Copy with an exponent range
    pub fn with_exponent_range(&self, e_min: i64, e_max: i64) -> Result<Context, ContextError> {
        self.with_big_exponent_range(&BigInt::from(e_min), &BigInt::from(e_max))
    }

    /// Copy with an arbitrary precision exponent range
    ///
    /// Fails if `e_min > e_max` or if the magnitude of a bound needs more
    /// than [`MAX_EXPONENT_BOUND_BITS`] bits.
    pub fn with_big_exponent_range(&self, e_min: &BigInt, e_max: &BigInt) -> Result<Context, ContextError> {
        check_exponent_range(e_min, e_max)?;
        Ok(Context {
            e_min: e_min.clone(),
            e_max: e_max.clone(),
            has_exponent_range: true,
            ..self.clone()
        })
    }

    /// Copy without exponent range, whatever the previous bounds were
    pub fn with_unlimited_exponents(&self) -> Context {
        Context {
            e_min: BigInt::zero(),
            e_max: BigInt::zero(),
            has_exponent_range: false,
            ..self.clone()
        }
    }

    pub fn with_simplified(&self, simplified: bool) -> Context {
        Context {
            simplified: simplified,
            ..self.clone()
        }
    }

    /// Copy with an enabled, blank flags register
    pub fn with_blank_flags(&self) -> Context {
        Context {
            flags: Some(Flags::empty()),
            ..self.clone()
        }
    }

    /// Copy with flag tracking disabled
    pub fn with_no_flags(&self) -> Context {
        Context {
            flags: None,
            ..self.clone()
        }
    }

    pub fn with_traps(&self, traps: Flags) -> Context {
        Context {
            traps: traps,
            ..self.clone()
        }
    }

    pub fn with_adjust_exponent(&self, adjust_exponent: bool) -> Context {
        Context {
            adjust_exponent: adjust_exponent,
            ..self.clone()
        }
    }

    pub fn with_exponent_clamp(&self, clamp_normal_exponents: bool) -> Context {
        Context {
            clamp_normal_exponents: clamp_normal_exponents,
            ..self.clone()
        }
    }

    pub fn with_precision_in_bits(&self, precision_in_bits: bool) -> Context {
        Context {
            precision_in_bits: precision_in_bits,
            ..self.clone()
        }
    }
}

fn checked_precision(precision: &BigInt) -> Result<BigUint, ContextError> {
    precision.to_biguint().ok_or_else(|| {
        ContextError::InvalidArgument(format!("precision ({}) is less than 0", precision))
    })
}

fn check_exponent_range(e_min: &BigInt, e_max: &BigInt) -> Result<(), ContextError> {
    for bound in [e_min, e_max] {
        if bound.magnitude().bits() > MAX_EXPONENT_BOUND_BITS {
            return Err(ContextError::InvalidArgument(format!(
                "exponent bound ({}) does not fit in {} bits", bound, MAX_EXPONENT_BOUND_BITS
            )));
        }
    }
    if e_min > e_max {
        return Err(ContextError::InvalidArgument(format!(
            "e_min ({}) is greater than e_max ({})", e_min, e_max
        )));
    }
    Ok(())
}


#[cfg(test)]
mod test {
    use super::*;

    include!("context.tests.rs");
}
