//!
//! Division of decimals under a context
//!

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use super::{
    count_decimal_digits_uint, multiply_by_ten_to_the_uint, propagate_nan, round_and_signal,
    strip_trailing_zeros, MAX_WORKING_DIGITS,
};
use crate::error::TrapError;
use crate::{Context, Decimal, DecimalValue, Flags, Species};

/// Divide `a` by `b`, rounding the quotient to the context
///
/// With unlimited precision (or no context) the quotient must be exact;
/// a non-terminating quotient is an invalid operation.
pub(crate) fn divide(a: &Decimal, b: &Decimal, ctx: Option<&mut Context>) -> Result<Decimal, TrapError<Decimal>> {
    if let Some((nan, conditions)) = propagate_nan(a, b) {
        return round_and_signal(nan, conditions, ctx);
    }

    let negative = a.negative != b.negative;

    match (a.species, b.species) {
        (Species::Infinite, Species::Infinite) => {
            return round_and_signal(Decimal::quiet_nan(), Flags::INVALID, ctx);
        }
        (Species::Infinite, _) => {
            return round_and_signal(DecimalValue::infinity(negative), Flags::empty(), ctx);
        }
        (_, Species::Infinite) => {
            // the smallest exponent the context can hold
            let exponent = ctx.as_ref().and_then(|ctx| ctx.e_tiny());
            let conditions = if exponent.is_some() { Flags::CLAMPED } else { Flags::empty() };
            let zero = Decimal::finite(negative, BigUint::zero(), exponent.unwrap_or_default());
            return round_and_signal(zero, conditions, ctx);
        }
        _ => {}
    }

    if b.coefficient.is_zero() {
        if a.coefficient.is_zero() {
            return round_and_signal(Decimal::quiet_nan(), Flags::INVALID, ctx);
        }
        return round_and_signal(DecimalValue::infinity(negative), Flags::DIVIDE_BY_ZERO, ctx);
    }

    let ideal_exponent = &a.exponent - &b.exponent;

    if a.coefficient.is_zero() {
        let zero = Decimal::finite(negative, BigUint::zero(), ideal_exponent);
        return round_and_signal(zero, Flags::empty(), ctx);
    }

    let digit_limit = ctx.as_ref().and_then(|ctx| ctx.digit_limit());
    let quotient = match digit_limit {
        Some(limit) => match divide_to_digits(&a.coefficient, &b.coefficient, ideal_exponent, limit) {
            Some(quotient) => quotient,
            None => {
                tracing::debug!(limit, "quotient needs more digits than can be held");
                return round_and_signal(Decimal::quiet_nan(), Flags::INVALID, ctx);
            }
        },
        None => match divide_exact(&a.coefficient, &b.coefficient, ideal_exponent) {
            Some(quotient) => quotient,
            None => {
                tracing::debug!("quotient does not terminate under unlimited precision");
                return round_and_signal(Decimal::quiet_nan(), Flags::INVALID, ctx);
            }
        },
    };

    let (coefficient, exponent) = quotient;
    round_and_signal(Decimal::finite(negative, coefficient, exponent), Flags::empty(), ctx)
}

/// Quotient with at least `limit + 1` significant digits
///
/// An inexact quotient gets a nonzero sticky digit appended so the later
/// rounding sees the remainder. An exact quotient is brought as close to
/// the ideal exponent as trailing zeros allow.
///
/// When the limit asks for more than [`MAX_WORKING_DIGITS`] digits only an
/// exact quotient that fits the limit can be produced; otherwise `None`.
fn divide_to_digits(a: &BigUint, b: &BigUint, ideal_exponent: BigInt, limit: u64) -> Option<(BigUint, BigInt)> {
    let a_digits = count_decimal_digits_uint(a);
    let b_digits = count_decimal_digits_uint(b);
    let shift = limit.saturating_add(1).saturating_add(b_digits).saturating_sub(a_digits);

    if shift > MAX_WORKING_DIGITS {
        return divide_exact(a, b, ideal_exponent)
            .filter(|(quotient, _)| count_decimal_digits_uint(quotient) <= limit);
    }

    let dividend = multiply_by_ten_to_the_uint(a, shift);
    let (quotient, remainder) = dividend.div_rem(b);
    let exponent = ideal_exponent - BigInt::from(shift);

    if remainder.is_zero() {
        let (quotient, stripped) = strip_trailing_zeros(&quotient, shift);
        Some((quotient, exponent + BigInt::from(stripped)))
    } else {
        Some((quotient * 10u8 + 1u8, exponent - 1))
    }
}

/// Exact quotient, or `None` if it has infinitely many digits
fn divide_exact(a: &BigUint, b: &BigUint, ideal_exponent: BigInt) -> Option<(BigUint, BigInt)> {
    let gcd = a.gcd(b);
    let numerator = a / &gcd;
    let divisor = b / &gcd;
    let mut denominator = divisor.clone();

    // the quotient terminates iff the reduced denominator is 2^x 5^y
    let mut twos = 0u64;
    while denominator.is_even() {
        denominator >>= 1;
        twos += 1;
    }
    let mut fives = 0u64;
    let five = BigUint::from(5u8);
    loop {
        let (q, r) = denominator.div_rem(&five);
        if !r.is_zero() {
            break;
        }
        denominator = q;
        fives += 1;
    }
    if !denominator.is_one() {
        return None;
    }

    let shift = twos.max(fives);
    let scaled = multiply_by_ten_to_the_uint(&numerator, shift);
    let quotient = scaled / divisor;
    let (quotient, stripped) = strip_trailing_zeros(&quotient, shift);
    let exponent = ideal_exponent - BigInt::from(shift) + BigInt::from(stripped);

    Some((quotient, exponent))
}
