//!
//! Addition of decimals under a context
//!

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use super::{multiply_by_ten_to_the_uint, propagate_nan, round_and_signal, saturating_to_u64};
use crate::error::TrapError;
use crate::{Context, Decimal, Flags, RoundingMode, Species};

/// Add two decimals, rounding the exact sum to the context
pub(crate) fn add(a: &Decimal, b: &Decimal, ctx: Option<&mut Context>) -> Result<Decimal, TrapError<Decimal>> {
    if let Some((nan, conditions)) = propagate_nan(a, b) {
        return round_and_signal(nan, conditions, ctx);
    }

    match (a.species, b.species) {
        (Species::Infinite, Species::Infinite) if a.negative != b.negative => {
            return round_and_signal(Decimal::quiet_nan(), Flags::INVALID, ctx);
        }
        (Species::Infinite, _) => return round_and_signal(a.clone(), Flags::empty(), ctx),
        (_, Species::Infinite) => return round_and_signal(b.clone(), Flags::empty(), ctx),
        _ => {}
    }

    let rounding = ctx.as_ref().map(|ctx| ctx.rounding()).unwrap_or_default();
    let sum = add_finite(a, b, rounding);
    round_and_signal(sum, Flags::empty(), ctx)
}

/// Exact sum of two finite decimals
///
/// The exponent of the sum is the smaller of the two exponents. An exact
/// zero sum is negative only if both operands are negative, or if their
/// signs differ and `rounding` is Floor.
pub(crate) fn add_finite(a: &Decimal, b: &Decimal, rounding: RoundingMode) -> Decimal {
    let exponent = (&a.exponent).min(&b.exponent).clone();

    let aligned = |d: &Decimal| {
        let shift = saturating_to_u64(&(&d.exponent - &exponent));
        let sign = if d.negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, multiply_by_ten_to_the_uint(&d.coefficient, shift))
    };

    let sum = aligned(a) + aligned(b);

    let negative = if sum.is_zero() {
        if a.negative == b.negative {
            a.negative
        } else {
            rounding == RoundingMode::Floor
        }
    } else {
        sum.sign() == Sign::Minus
    };

    Decimal::finite(negative, sum.into_parts().1, exponent)
}


#[cfg(test)]
mod test {
    use super::*;

    fn sum(a: &str, b: &str, ctx: Option<&mut Context>) -> String {
        let a: Decimal = a.parse().unwrap();
        let b: Decimal = b.parse().unwrap();
        add(&a, &b, ctx).unwrap().to_string()
    }

    macro_rules! impl_case {
        ($name:ident: $a:literal + $b:literal => $expected:literal) => {
            #[test]
            fn $name() {
                assert_eq!(sum($a, $b, None), $expected);
            }
        };
    }

    impl_case!(case_1_2: "1" + "2" => "3");
    impl_case!(case_aligns_exponents: "1.5" + "0.25" => "1.75");
    impl_case!(case_keeps_trailing_zeros: "1.20" + "1.30" => "2.50");
    impl_case!(case_mixed_signs: "-7.5" + "2.25" => "-5.25");
    impl_case!(case_exact_zero: "1.0" + "-1" => "0.0");
    impl_case!(case_negative_zeros: "-0" + "-0.00" => "-0.00");
    impl_case!(case_infinity: "Infinity" + "-1E+1000" => "Infinity");
    impl_case!(case_signaling_nan_wins: "NaN7" + "sNaN" => "NaN");

    #[test]
    fn floor_gives_negative_zero() {
        let mut ctx = Context::for_rounding(RoundingMode::Floor);
        assert_eq!(sum("1", "-1", Some(&mut ctx)), "-0");
        assert_eq!(sum("1", "-1", None), "0");
    }

    #[test]
    fn opposite_infinities_are_invalid() {
        let mut ctx = Context::unlimited().with_blank_flags();
        assert_eq!(sum("Infinity", "-Infinity", Some(&mut ctx)), "NaN");
        assert_eq!(ctx.flags(), Flags::INVALID);
    }

    #[test]
    fn signaling_nan_is_quieted() {
        let mut ctx = Context::unlimited().with_blank_flags();
        assert_eq!(sum("1", "-sNaN12", Some(&mut ctx)), "-NaN12");
        assert_eq!(ctx.flags(), Flags::INVALID);
    }

    #[test]
    fn rounds_to_context() {
        let mut ctx = Context::for_precision(3).with_blank_flags();
        assert_eq!(sum("999", "1", Some(&mut ctx)), "1.00E+3");
        assert_eq!(ctx.flags(), Flags::ROUNDED);
    }

    #[test]
    fn trap_carries_result() {
        let mut ctx = Context::for_precision(2).with_traps(Flags::INEXACT);
        let a: Decimal = "1.23".parse().unwrap();
        let err = add(&a, &Decimal::zero(), Some(&mut ctx)).unwrap_err();
        assert_eq!(err.flag, Flags::INEXACT);
        assert_eq!(err.result.to_string(), "1.2");
    }
}
