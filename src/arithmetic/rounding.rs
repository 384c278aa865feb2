//! Rounding a decimal to the precision and exponent range of a context

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use super::{count_decimal_digits_uint, multiply_by_ten_to_the_uint, saturating_to_u64, ten_to_the_uint};
use crate::{Context, Decimal, DecimalValue, Flags, RoundingMode, Species};

/// Round `value` under `ctx`, returning the result and the conditions
/// raised
///
/// Flags are not recorded here; callers pass the conditions on to
/// [`signal`](crate::flags::signal).
pub(crate) fn round(value: &Decimal, ctx: &Context) -> (Decimal, Flags) {
    match value.species {
        Species::Infinite => (value.clone(), Flags::empty()),
        Species::QuietNaN | Species::SignalingNaN => round_nan(value, ctx),
        Species::Finite => round_finite(value.negative, &value.coefficient, &value.exponent, ctx),
    }
}

/// Quiet any signaling NaN and cut the payload to what fits
fn round_nan(value: &Decimal, ctx: &Context) -> (Decimal, Flags) {
    let conditions = if value.species == Species::SignalingNaN {
        Flags::INVALID
    } else {
        Flags::empty()
    };

    let mut payload = value.coefficient.clone();
    if let Some(limit) = ctx.digit_limit() {
        let limit = if ctx.clamp_normal_exponents() { limit - 1 } else { limit };
        if count_decimal_digits_uint(&payload) > limit {
            payload %= ten_to_the_uint(limit);
        }
    }

    (DecimalValue::nan(value.negative, payload, false), conditions)
}

/// Remove the `count` lowest digits of `coefficient`, rounding what
/// remains according to `mode`
///
/// Returns the rounded coefficient and whether any nonzero digit was
/// discarded. The result may carry into one extra digit.
pub(crate) fn discard_digits(
    coefficient: &BigUint,
    count: u64,
    negative: bool,
    mode: RoundingMode,
) -> (BigUint, bool) {
    if count == 0 || coefficient.is_zero() {
        return (coefficient.clone(), false);
    }

    let sign = if negative { Sign::Minus } else { Sign::Plus };

    // every digit goes, and the first discarded digit is a leading zero
    if count > count_decimal_digits_uint(coefficient) {
        let rounded = mode.round_pair(sign, (0, 0), false);
        return (BigUint::from(rounded), true);
    }

    let (high, low) = coefficient.div_rem(&ten_to_the_uint(count));
    if low.is_zero() {
        return (high, false);
    }

    let (first_discarded, rest) = low.div_rem(&ten_to_the_uint(count - 1));
    let lhs = (&high % 10u8).to_u8().unwrap_or(0);
    let rhs = first_discarded.to_u8().unwrap_or(0);
    let rounded = mode.round_pair(sign, (lhs, rhs), rest.is_zero());

    (high - lhs + rounded, true)
}

/// Round a finite value given as parts
pub(crate) fn round_finite(
    negative: bool,
    coefficient: &BigUint,
    exponent: &BigInt,
    ctx: &Context,
) -> (Decimal, Flags) {
    if coefficient.is_zero() {
        return round_zero(negative, exponent, ctx);
    }

    let mode = ctx.rounding();
    let mut conditions = Flags::empty();
    let digits = count_decimal_digits_uint(coefficient);

    let subnormal = ctx.has_exponent_range()
        && &ctx.effective_exponent(exponent, digits) < ctx.e_min();

    if subnormal && ctx.is_simplified() {
        tracing::trace!(%exponent, "flushing subnormal result to zero");
        let zero = Decimal::finite(false, BigUint::zero(), ctx.e_min().clone());
        return (zero, Flags::SUBNORMAL | Flags::UNDERFLOW | Flags::INEXACT | Flags::ROUNDED);
    }

    let mut drop = match ctx.digit_limit() {
        Some(limit) if digits > limit => digits - limit,
        _ => 0,
    };
    if let Some(e_tiny) = ctx.e_tiny() {
        let below_tiny = saturating_to_u64(&(e_tiny - exponent));
        drop = drop.max(below_tiny);
    }

    let (mut coef, mut inexact) = discard_digits(coefficient, drop, negative, mode);
    let mut exp = exponent + BigInt::from(drop);

    if !ctx.coefficient_fits(&coef) {
        if ctx.is_precision_in_bits() {
            // not a power of ten: round the original again one digit shorter
            drop += 1;
            let (c, i) = discard_digits(coefficient, drop, negative, mode);
            coef = c;
            inexact = i;
        } else {
            // carried into 10^precision
            coef /= 10u8;
        }
        exp += 1;
    }

    if drop > 0 {
        conditions |= Flags::ROUNDED;
    }
    if inexact {
        conditions |= Flags::INEXACT;
    }

    if !ctx.has_exponent_range() {
        return (Decimal::finite(negative, coef, exp), conditions);
    }

    if subnormal {
        conditions |= Flags::SUBNORMAL;
        if inexact {
            conditions |= Flags::UNDERFLOW;
        }
        if coef.is_zero() {
            conditions |= Flags::CLAMPED;
            let negative = negative && !ctx.is_simplified();
            return (Decimal::finite(negative, coef, exp), conditions);
        }
    }

    let e_max = ctx.e_max();
    let mut overflow = if ctx.adjust_exponent() {
        &exp + BigInt::from(count_decimal_digits_uint(&coef)) - 1 > *e_max
    } else {
        &exp > e_max && !ctx.clamp_normal_exponents()
    };

    let e_top = ctx.e_top();
    if !overflow && ctx.clamp_normal_exponents() && exp > e_top {
        match pad_coefficient(&coef, &(&exp - &e_top), ctx) {
            Some(padded) => {
                coef = padded;
                exp = e_top;
                conditions |= Flags::CLAMPED;
            }
            None => overflow = true,
        }
    }

    if overflow {
        return overflow_result(negative, ctx, conditions);
    }

    (Decimal::finite(negative, coef, exp), conditions)
}

/// Zeros only need their exponent brought into range
fn round_zero(negative: bool, exponent: &BigInt, ctx: &Context) -> (Decimal, Flags) {
    let negative = negative && !ctx.is_simplified();
    let mut exp = exponent.clone();
    let mut conditions = Flags::empty();

    if let Some(e_tiny) = ctx.e_tiny() {
        let e_top = if ctx.clamp_normal_exponents() {
            ctx.e_top()
        } else {
            ctx.e_max().clone()
        };
        if exp < e_tiny {
            exp = e_tiny;
            conditions |= Flags::CLAMPED;
        } else if exp > e_top {
            exp = e_top;
            conditions |= Flags::CLAMPED;
        }
    }

    (Decimal::finite(negative, BigUint::zero(), exp), conditions)
}

/// Multiply the coefficient by 10^shift if the result still fits the
/// precision
fn pad_coefficient(coef: &BigUint, shift: &BigInt, ctx: &Context) -> Option<BigUint> {
    let shift = shift.to_u64()?;
    if let Some(limit) = ctx.digit_limit() {
        if shift > limit {
            return None;
        }
    }
    let padded = multiply_by_ten_to_the_uint(coef, shift);
    if ctx.coefficient_fits(&padded) {
        Some(padded)
    } else {
        None
    }
}

/// Infinity or the largest finite number, depending on rounding mode
fn overflow_result(negative: bool, ctx: &Context, conditions: Flags) -> (Decimal, Flags) {
    let conditions = conditions | Flags::OVERFLOW | Flags::INEXACT | Flags::ROUNDED;
    let sign = if negative { Sign::Minus } else { Sign::Plus };

    tracing::trace!(negative, rounding = %ctx.rounding(), "decimal overflow");

    let largest = match (ctx.max_coefficient(), ctx.digit_limit()) {
        (Some(max), Some(limit)) if !ctx.rounding().overflows_to_infinity(sign) => {
            let exp = if ctx.adjust_exponent() {
                ctx.e_max() - BigInt::from(limit - 1)
            } else {
                ctx.e_max().clone()
            };
            Some(Decimal::finite(negative, max, exp))
        }
        _ => None,
    };

    match largest {
        Some(largest) => (largest, conditions),
        None => (DecimalValue::infinity(negative), conditions),
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;

    include!("rounding.tests.rs");
}
