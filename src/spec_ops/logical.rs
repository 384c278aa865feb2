//! Digit-wise logical operations
//!
//! A logical operand is a finite, non-negative decimal with a zero
//! exponent whose digits are all `0` or `1`. Its digits are packed into a
//! bit vector, least significant digit in the lowest bit of the first
//! byte; the shorter operand is zero-extended. Results are written back
//! as a decimal whose digits are the bits, with no leading zeros.
//!
//! An operand that is not logical makes the operation invalid; the result
//! is then a quiet NaN.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use super::{invalid_operation, quiet_nan};
use crate::arithmetic::MAX_WORKING_DIGITS;
use crate::error::TrapError;
use crate::{Context, DecimalValue};

/// Bits of a logical operand, `None` if it is not one
fn to_bits<D: DecimalValue>(value: &D) -> Option<Vec<u8>> {
    if !value.is_finite() || value.is_negative() || !value.exponent().is_zero() {
        return None;
    }

    let digits = value.coefficient().to_radix_le(10);
    if digits.iter().any(|&d| d > 1) {
        return None;
    }

    let mut bits = vec![0u8; (digits.len() + 7) / 8];
    for (i, &digit) in digits.iter().enumerate() {
        bits[i / 8] |= digit << (i % 8);
    }
    Some(bits)
}

/// Decimal whose digits are `bits`, most significant set bit first
fn from_bits<D: DecimalValue>(bits: &[u8]) -> D {
    let mut coefficient = BigUint::zero();
    for i in (0..bits.len() * 8).rev() {
        let bit = (bits[i / 8] >> (i % 8)) & 1;
        if coefficient.is_zero() && bit == 0 {
            continue;
        }
        coefficient = coefficient * 10u8 + bit;
    }
    D::from_parts(false, coefficient, BigInt::zero())
}

fn apply<D, F>(a: &D, b: &D, ctx: Option<&mut Context>, op: F) -> Result<D, TrapError<D>>
where
    D: DecimalValue,
    F: Fn(u8, u8) -> u8,
{
    let (mut a, mut b) = match (to_bits(a), to_bits(b)) {
        (Some(a), Some(b)) => (a, b),
        _ => return invalid_operation(quiet_nan(), ctx),
    };

    let len = a.len().max(b.len());
    a.resize(len, 0);
    b.resize(len, 0);

    let result: Vec<u8> = a.iter().zip(b.iter()).map(|(&x, &y)| op(x, y)).collect();
    Ok(from_bits(&result))
}

/// Digit-wise AND of two logical operands
///
/// A non-logical operand (NaNs included) gives a positive quiet NaN
/// without payload, never the operand itself.
///
/// ```
/// # use bigdecimal_context::{spec_ops, Decimal};
/// let a: Decimal = "1100".parse().unwrap();
/// let b: Decimal = "1010".parse().unwrap();
/// assert_eq!(spec_ops::logical_and(&a, &b, None).unwrap().to_string(), "1000");
/// ```
pub fn logical_and<D: DecimalValue>(a: &D, b: &D, ctx: Option<&mut Context>) -> Result<D, TrapError<D>> {
    apply(a, b, ctx, |x, y| x & y)
}

/// Digit-wise inclusive OR of two logical operands
pub fn logical_or<D: DecimalValue>(a: &D, b: &D, ctx: Option<&mut Context>) -> Result<D, TrapError<D>> {
    apply(a, b, ctx, |x, y| x | y)
}

/// Digit-wise exclusive OR of two logical operands
pub fn logical_xor<D: DecimalValue>(a: &D, b: &D, ctx: Option<&mut Context>) -> Result<D, TrapError<D>> {
    apply(a, b, ctx, |x, y| x ^ y)
}

/// Digit-wise complement of a logical operand
///
/// The operand is taken as `precision` digits wide, or as wide as its own
/// digit count if that is larger (or if there is no context or the
/// precision is unlimited).
///
/// ```
/// # use bigdecimal_context::{spec_ops, Context, Decimal};
/// let n: Decimal = "101".parse().unwrap();
/// let ctx = Context::for_precision(5);
/// assert_eq!(spec_ops::logical_invert(&n, Some(&mut ctx.clone())).unwrap().to_string(), "11010");
/// assert_eq!(spec_ops::logical_invert(&n, None).unwrap().to_string(), "10");
/// ```
pub fn logical_invert<D: DecimalValue>(value: &D, ctx: Option<&mut Context>) -> Result<D, TrapError<D>> {
    let mut bits = match to_bits(value) {
        Some(bits) => bits,
        None => return invalid_operation(quiet_nan(), ctx),
    };

    let digits = value.digit_count();
    let width = match ctx.as_ref().and_then(|ctx| ctx.digit_limit()) {
        Some(limit) => limit.max(digits),
        None => digits,
    };
    if width > MAX_WORKING_DIGITS {
        tracing::debug!(width, "logical invert wider than can be held");
        return invalid_operation(quiet_nan(), ctx);
    }
    let width = match usize::try_from(width) {
        Ok(width) => width,
        Err(_) => return invalid_operation(quiet_nan(), ctx),
    };

    bits.resize((width + 7) / 8, 0);
    for i in 0..width {
        bits[i / 8] ^= 1 << (i % 8);
    }
    Ok(from_bits(&bits))
}
