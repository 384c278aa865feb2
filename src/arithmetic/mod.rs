//! arithmetic routines

use std::f64::consts::LOG2_10;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::TrapError;
use crate::flags::signal;
use crate::{Context, Decimal, DecimalValue, Flags, Species};

pub(crate) mod addition;
pub(crate) mod division;
pub(crate) mod rounding;

/// Most digits an intermediate result is built with; operations needing
/// more signal an invalid operation (insufficient storage)
pub(crate) const MAX_WORKING_DIGITS: u64 = 1 << 28;

// bit widths up to this have their digit count computed exactly
const EXACT_BIT_WIDTH_DIGITS: u64 = 1 << 16;

/// Return 10^pow
pub(crate) fn ten_to_the_uint(pow: u64) -> BigUint {
    if pow < 20 {
        return BigUint::from(10u64.pow(pow as u32));
    }

    // linear case of 10^pow = 10^(19 * count + rem)
    if pow < 590 {
        let ten_to_nineteen = 10u64.pow(19);

        // count factors of 19
        let (count, rem) = pow.div_rem(&19);

        let mut res = BigUint::from(ten_to_nineteen);
        for _ in 1..count {
            res *= ten_to_nineteen;
        }
        if rem != 0 {
            res *= 10u64.pow(rem as u32);
        }

        return res;
    }

    // use recursive algorithm where linear case might be too slow
    let (quotient, rem) = pow.div_rem(&16);
    let x = ten_to_the_uint(quotient);

    let x2 = &x * &x;
    let x4 = &x2 * &x2;
    let x8 = &x4 * &x4;
    let res = &x8 * &x8;

    if rem == 0 {
        res
    } else {
        res * 10u64.pow(rem as u32)
    }
}

/// Return 2^pow
pub(crate) fn two_to_the_uint(pow: u64) -> BigUint {
    BigUint::one() << pow
}

/// Return number of decimal digits in unsigned integer
///
/// Zero has one digit.
pub(crate) fn count_decimal_digits_uint(uint: &BigUint) -> u64 {
    if uint.is_zero() {
        return 1;
    }
    let mut digits = (uint.bits() as f64 / LOG2_10) as u64;
    // guess number of digits based on number of bits in UInt
    let mut num = ten_to_the_uint(digits);
    while *uint >= num {
        num *= 10u8;
        digits += 1;
    }
    digits
}

/// Number of decimal digits of 2^bits - 1
///
/// Wide bit counts are estimated from the logarithm instead of building
/// the power: 2^bits is never a power of ten, so the count is
/// floor(bits·log10 2) + 1.
pub(crate) fn count_decimal_digits_of_bit_width(bits: u64) -> u64 {
    if bits == 0 {
        return 1;
    }
    if bits <= EXACT_BIT_WIDTH_DIGITS {
        return count_decimal_digits_uint(&(two_to_the_uint(bits) - 1u8));
    }
    (bits as f64 / LOG2_10) as u64 + 1
}

/// Multiply by 10^pow
pub(crate) fn multiply_by_ten_to_the_uint(n: &BigUint, pow: u64) -> BigUint {
    if n.is_zero() || pow == 0 {
        return n.clone();
    }
    if pow < 20 {
        n * 10u64.pow(pow as u32)
    } else {
        n * ten_to_the_uint(pow)
    }
}

/// Convert non-negative big integer to u64, saturating at u64::MAX
pub(crate) fn saturating_to_u64(n: &BigInt) -> u64 {
    if n.sign() == num_bigint::Sign::Minus {
        return 0;
    }
    n.to_u64().unwrap_or(u64::MAX)
}

/// Split a coefficient into its value with trailing zeros removed and
/// the number of removed zeros, never removing more than `max_count`
pub(crate) fn strip_trailing_zeros(n: &BigUint, max_count: u64) -> (BigUint, u64) {
    if n.is_zero() {
        return (BigUint::zero(), 0);
    }
    let ten = BigUint::from(10u8);
    let mut value = n.clone();
    let mut count = 0;
    while count < max_count {
        let (q, r) = value.div_rem(&ten);
        if !r.is_zero() {
            break;
        }
        value = q;
        count += 1;
    }
    (value, count)
}

/// The NaN resulting from an operation with a NaN operand
///
/// A signaling NaN wins over a quiet one and raises Invalid; otherwise
/// the first NaN is returned.
pub(crate) fn propagate_nan(a: &Decimal, b: &Decimal) -> Option<(Decimal, Flags)> {
    let quieted = |d: &Decimal| -> Decimal { DecimalValue::nan(d.negative, d.coefficient.clone(), false) };

    if a.species == Species::SignalingNaN {
        Some((quieted(a), Flags::INVALID))
    } else if b.species == Species::SignalingNaN {
        Some((quieted(b), Flags::INVALID))
    } else if a.species == Species::QuietNaN {
        Some((a.clone(), Flags::empty()))
    } else if b.species == Species::QuietNaN {
        Some((b.clone(), Flags::empty()))
    } else {
        None
    }
}

/// Round an operation's exact result to the context and signal
/// everything raised on the way
pub(crate) fn round_and_signal(
    result: Decimal,
    conditions: Flags,
    ctx: Option<&mut Context>,
) -> Result<Decimal, TrapError<Decimal>> {
    match ctx {
        None => Ok(result),
        Some(ctx) => {
            let (rounded, raised) = rounding::round(&result, ctx);
            signal(Some(ctx), conditions | raised, rounded)
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ten_to_the_matches_repeated_multiplication() {
        let mut expected = BigUint::one();
        for pow in 0..700u64 {
            assert_eq!(ten_to_the_uint(pow), expected, "10^{}", pow);
            expected *= 10u8;
        }
    }

    #[test]
    fn count_digits() {
        assert_eq!(count_decimal_digits_uint(&BigUint::zero()), 1);
        assert_eq!(count_decimal_digits_uint(&BigUint::from(9u8)), 1);
        assert_eq!(count_decimal_digits_uint(&BigUint::from(10u8)), 2);
        assert_eq!(count_decimal_digits_uint(&(ten_to_the_uint(40) - 1u8)), 40);
        assert_eq!(count_decimal_digits_uint(&ten_to_the_uint(40)), 41);
        assert_eq!(count_decimal_digits_uint(&(two_to_the_uint(96) - 1u8)), 29);
    }

    #[test]
    fn bit_width_digits() {
        assert_eq!(count_decimal_digits_of_bit_width(0), 1);
        assert_eq!(count_decimal_digits_of_bit_width(1), 1);
        assert_eq!(count_decimal_digits_of_bit_width(4), 2);
        assert_eq!(count_decimal_digits_of_bit_width(96), 29);
        for bits in [EXACT_BIT_WIDTH_DIGITS + 1, 100_000] {
            let exact = count_decimal_digits_uint(&(two_to_the_uint(bits) - 1u8));
            assert_eq!(count_decimal_digits_of_bit_width(bits), exact, "{} bits", bits);
        }
        assert!(count_decimal_digits_of_bit_width(u64::MAX) > u64::MAX / 4);
    }

    #[test]
    fn strip_zeros() {
        let n = BigUint::from(1230000u32);
        assert_eq!(strip_trailing_zeros(&n, 10), (BigUint::from(123u8), 4));
        assert_eq!(strip_trailing_zeros(&n, 2), (BigUint::from(12300u32), 2));
        assert_eq!(strip_trailing_zeros(&BigUint::zero(), 5), (BigUint::zero(), 0));
    }

    #[test]
    fn saturating() {
        assert_eq!(saturating_to_u64(&BigInt::from(-4)), 0);
        assert_eq!(saturating_to_u64(&BigInt::from(17)), 17);
        assert_eq!(saturating_to_u64(&(BigInt::from(1) << 70u32)), u64::MAX);
    }
}
