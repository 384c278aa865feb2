//! Arbitrary precision decimal value with special values
//!

use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::arithmetic::{addition, division, rounding};
use crate::error::TrapError;
use crate::flags::signal;
use crate::{Context, DecimalValue, Species};

/// A decimal floating point number of arbitrary precision
///
/// Finite values are `(-1)^sign × coefficient × 10^exponent` with an
/// unbounded exponent. Zero keeps its sign, and the infinities, quiet
/// NaN and signaling NaN are representable. Values are never rounded
/// implicitly: every context-sensitive operation takes a [`Context`].
///
/// ```
/// # use bigdecimal_context::{Decimal, DecimalValue};
/// let n: Decimal = "-1.250E+3".parse().unwrap();
/// assert!(n.is_negative());
/// assert_eq!(n.exponent(), &0.into());
/// assert_eq!(n.coefficient(), &1250u32.into());
/// assert_eq!(n.to_string(), "-1250");
/// ```
#[derive(Clone)]
pub struct Decimal {
    pub(crate) coefficient: BigUint,
    pub(crate) exponent: BigInt,
    pub(crate) negative: bool,
    pub(crate) species: Species,
}

impl Decimal {
    /// Creates a finite `Decimal` from signed digits and an exponent
    ///
    /// The sign is taken from `digits`, so this never produces -0.
    #[inline]
    pub fn new(digits: BigInt, exponent: i64) -> Decimal {
        let (sign, coefficient) = digits.into_parts();
        Decimal::finite(sign == Sign::Minus, coefficient, BigInt::from(exponent))
    }

    /// Creates a finite `Decimal` from sign, coefficient and exponent
    pub fn finite(negative: bool, coefficient: BigUint, exponent: BigInt) -> Decimal {
        Decimal {
            coefficient: coefficient,
            exponent: exponent,
            negative: negative,
            species: Species::Finite,
        }
    }

    /// Positive zero with exponent 0
    pub fn zero() -> Decimal {
        Decimal::finite(false, BigUint::zero(), BigInt::zero())
    }

    pub fn negative_zero() -> Decimal {
        Decimal::finite(true, BigUint::zero(), BigInt::zero())
    }

    pub fn positive_infinity() -> Decimal {
        DecimalValue::infinity(false)
    }

    pub fn negative_infinity() -> Decimal {
        DecimalValue::infinity(true)
    }

    /// Quiet NaN without payload
    pub fn quiet_nan() -> Decimal {
        DecimalValue::nan(false, BigUint::zero(), false)
    }

    /// Signaling NaN without payload
    pub fn signaling_nan() -> Decimal {
        DecimalValue::nan(false, BigUint::zero(), true)
    }

    /// Copy with the sign bit cleared
    pub fn abs(&self) -> Decimal {
        self.copy_with_sign(false)
    }

    /// Copy with the sign bit flipped
    pub fn negate(&self) -> Decimal {
        self.copy_with_sign(!self.negative)
    }

    /// Round with the given context (convenience for
    /// [`DecimalValue::round_to_context`])
    pub fn round(&self, ctx: &mut Context) -> Result<Decimal, TrapError<Decimal>> {
        self.round_to_context(Some(ctx))
    }

    /// Sum rounded with the given context
    pub fn add(&self, other: &Decimal, ctx: &mut Context) -> Result<Decimal, TrapError<Decimal>> {
        addition::add(self, other, Some(ctx))
    }

    /// Quotient rounded with the given context
    ///
    /// ```
    /// # use bigdecimal_context::{Context, Decimal};
    /// let mut ctx = Context::for_precision(5);
    /// let q = Decimal::from(2).divide(&Decimal::from(3), &mut ctx).unwrap();
    /// assert_eq!(q.to_string(), "0.66667");
    /// ```
    pub fn divide(&self, divisor: &Decimal, ctx: &mut Context) -> Result<Decimal, TrapError<Decimal>> {
        division::divide(self, divisor, Some(ctx))
    }

    /// Sign of a finite value as `num_bigint::Sign` (zero of either sign
    /// is `NoSign`)
    pub fn sign(&self) -> Sign {
        if self.coefficient.is_zero() && self.species == Species::Finite {
            Sign::NoSign
        } else if self.negative {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }
}

impl DecimalValue for Decimal {
    fn species(&self) -> Species {
        self.species
    }

    fn is_negative(&self) -> bool {
        self.negative
    }

    fn exponent(&self) -> &BigInt {
        &self.exponent
    }

    fn coefficient(&self) -> &BigUint {
        &self.coefficient
    }

    fn from_parts(negative: bool, coefficient: BigUint, exponent: BigInt) -> Decimal {
        Decimal::finite(negative, coefficient, exponent)
    }

    fn infinity(negative: bool) -> Decimal {
        Decimal {
            coefficient: BigUint::zero(),
            exponent: BigInt::zero(),
            negative: negative,
            species: Species::Infinite,
        }
    }

    fn nan(negative: bool, payload: BigUint, signaling: bool) -> Decimal {
        Decimal {
            coefficient: payload,
            exponent: BigInt::zero(),
            negative: negative,
            species: if signaling { Species::SignalingNaN } else { Species::QuietNaN },
        }
    }

    fn round_to_context(&self, ctx: Option<&mut Context>) -> Result<Decimal, TrapError<Decimal>> {
        match ctx {
            None => Ok(self.clone()),
            Some(ctx) => {
                let (result, conditions) = rounding::round(self, ctx);
                signal(Some(ctx), conditions, result)
            }
        }
    }

    fn add_with_context(&self, other: &Decimal, ctx: Option<&mut Context>) -> Result<Decimal, TrapError<Decimal>> {
        addition::add(self, other, ctx)
    }

    fn divide_with_context(&self, divisor: &Decimal, ctx: Option<&mut Context>) -> Result<Decimal, TrapError<Decimal>> {
        division::divide(self, divisor, ctx)
    }

    fn compare_total(&self, other: &Decimal) -> Ordering {
        crate::impl_cmp::compare_total(self, other)
    }
}

impl Default for Decimal {
    #[inline]
    fn default() -> Decimal {
        Decimal::zero()
    }
}

impl From<BigInt> for Decimal {
    fn from(n: BigInt) -> Decimal {
        Decimal::new(n, 0)
    }
}

impl From<BigUint> for Decimal {
    fn from(n: BigUint) -> Decimal {
        Decimal::finite(false, n, BigInt::zero())
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                #[inline]
                fn from(n: $t) -> Decimal {
                    Decimal::from(BigInt::from(n))
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_takes_sign_from_digits() {
        let n = Decimal::new(BigInt::from(-1234), 2);
        assert!(n.is_negative());
        assert_eq!(n.coefficient(), &BigUint::from(1234u32));
        assert_eq!(n.exponent(), &BigInt::from(2));
        assert_eq!(n.sign(), Sign::Minus);

        let z = Decimal::new(BigInt::zero(), -3);
        assert!(!z.is_negative());
        assert!(z.is_zero());
        assert_eq!(z.sign(), Sign::NoSign);
    }

    #[test]
    fn special_values() {
        let inf = Decimal::negative_infinity();
        assert!(inf.is_infinite());
        assert!(inf.is_negative());
        assert!(!inf.is_zero());
        assert_eq!(inf.sign(), Sign::Minus);

        let nan = Decimal::quiet_nan();
        assert!(nan.is_nan() && nan.is_quiet_nan() && !nan.is_signaling_nan());

        let snan = Decimal::signaling_nan();
        assert!(snan.is_nan() && snan.is_signaling_nan() && !snan.is_quiet_nan());
        assert!(!snan.is_finite());
    }

    #[test]
    fn negative_zero_keeps_sign() {
        let z = Decimal::negative_zero();
        assert!(z.is_zero());
        assert!(z.is_negative());
        assert!(!z.abs().is_negative());
        assert!(!z.negate().is_negative());
    }

    #[test]
    fn digit_count_and_adjusted_exponent() {
        let n = Decimal::new(BigInt::from(12345), -7);
        assert_eq!(n.digit_count(), 5);
        assert_eq!(n.adjusted_exponent(), BigInt::from(-3));

        assert_eq!(Decimal::zero().digit_count(), 1);
    }

    #[test]
    fn copy_with_sign_preserves_payload() {
        let snan: Decimal = DecimalValue::nan(false, BigUint::from(42u8), true);
        let neg = snan.copy_with_sign(true);
        assert!(neg.is_signaling_nan());
        assert!(neg.is_negative());
        assert_eq!(neg.coefficient(), &BigUint::from(42u8));
    }

    #[test]
    fn from_primitives() {
        let n = Decimal::from(-17i32);
        assert!(n.is_negative());
        assert_eq!(n.coefficient(), &BigUint::from(17u8));
        assert_eq!(n.exponent(), &BigInt::zero());

        assert_eq!(Decimal::from(u64::MAX).coefficient(), &BigUint::from(u64::MAX));
    }
}
