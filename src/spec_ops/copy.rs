//! Sign copies, quantum comparison and total ordering

use std::cmp::Ordering;

use crate::error::TrapError;
use crate::{Context, DecimalValue};

/// Unchanged copy; never signals
pub fn copy<D: DecimalValue>(value: &D) -> D {
    value.clone()
}

/// Every representation is canonical, so this is [`copy`]
pub fn canonical<D: DecimalValue>(value: &D) -> D {
    value.clone()
}

/// Copy with the sign bit cleared, NaNs included
pub fn copy_abs<D: DecimalValue>(value: &D) -> D {
    value.copy_with_sign(false)
}

/// Copy with the sign bit flipped, NaNs included
pub fn copy_negate<D: DecimalValue>(value: &D) -> D {
    value.copy_with_sign(!value.is_negative())
}

/// Copy of `value` carrying the sign bit of `sign_source`
pub fn copy_sign<D: DecimalValue>(value: &D, sign_source: &D) -> D {
    value.copy_with_sign(sign_source.is_negative())
}

/// True if both values have the same exponent, or are both NaN, or are
/// both infinite
///
/// A missing value on either side gives false.
///
/// ```
/// # use bigdecimal_context::{spec_ops, Decimal};
/// let a: Decimal = "2.17".parse().unwrap();
/// let b: Decimal = "0.01".parse().unwrap();
/// let c: Decimal = "0.1".parse().unwrap();
/// assert!(spec_ops::same_quantum(Some(&a), Some(&b)));
/// assert!(!spec_ops::same_quantum(Some(&a), Some(&c)));
/// assert!(!spec_ops::same_quantum(Some(&a), None));
/// ```
pub fn same_quantum<D: DecimalValue>(a: Option<&D>, b: Option<&D>) -> bool {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a.is_infinite() && b.is_infinite();
    }
    a.exponent() == b.exponent()
}

/// Total ordering of `a` and `b`
///
/// When a context is given, finite operands are first rounded under it
/// (which may record conditions or trap); special values are compared
/// as they are.
///
/// ```
/// # use std::cmp::Ordering;
/// # use bigdecimal_context::{spec_ops, Decimal};
/// let a: Decimal = "12.30".parse().unwrap();
/// let b: Decimal = "12.3".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(spec_ops::compare_total(&a, &b, None).unwrap(), Ordering::Less);
/// ```
pub fn compare_total<D: DecimalValue>(a: &D, b: &D, ctx: Option<&mut Context>) -> Result<Ordering, TrapError<D>> {
    let (a, b) = round_operands(a, b, ctx)?;
    Ok(a.compare_total(&b))
}

/// Total ordering of the absolute values of `a` and `b`
///
/// Rounds finite operands under the context like [`compare_total`].
pub fn compare_total_magnitude<D: DecimalValue>(
    a: &D,
    b: &D,
    ctx: Option<&mut Context>,
) -> Result<Ordering, TrapError<D>> {
    let (a, b) = round_operands(a, b, ctx)?;
    Ok(copy_abs(&a).compare_total(&copy_abs(&b)))
}

fn round_operands<D: DecimalValue>(a: &D, b: &D, ctx: Option<&mut Context>) -> Result<(D, D), TrapError<D>> {
    let ctx = match ctx {
        Some(ctx) => ctx,
        None => return Ok((a.clone(), b.clone())),
    };
    let a = round_if_finite(a, ctx)?;
    let b = round_if_finite(b, ctx)?;
    Ok((a, b))
}

fn round_if_finite<D: DecimalValue>(value: &D, ctx: &mut Context) -> Result<D, TrapError<D>> {
    if value.is_finite() {
        value.round_to_context(Some(ctx))
    } else {
        Ok(value.clone())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::{Decimal, Flags};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn sign_copies() {
        assert_eq!(copy_abs(&dec("-2.1")).to_string(), "2.1");
        assert_eq!(copy_abs(&dec("-sNaN4")).to_string(), "sNaN4");
        assert_eq!(copy_negate(&dec("0")).to_string(), "-0");
        assert_eq!(copy_negate(&dec("-Infinity")).to_string(), "Infinity");
        assert_eq!(copy_negate(&dec("NaN")).to_string(), "-NaN");
        assert_eq!(copy_sign(&dec("1.50"), &dec("-7")).to_string(), "-1.50");
        assert_eq!(copy_sign(&dec("-1.50"), &dec("0")).to_string(), "1.50");
        assert_eq!(copy_sign(&dec("1"), &dec("-NaN")).to_string(), "-1");
    }

    #[test]
    fn copies_preserve_representation() {
        for s in ["2.50", "-0E+3", "-Infinity", "sNaN12", "-NaN"] {
            assert_eq!(copy(&dec(s)).to_string(), s);
            assert_eq!(canonical(&dec(s)).to_string(), s);
        }
    }

    mod same_quantum {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $a:literal, $b:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    let a = dec($a);
                    let b = dec($b);
                    assert_eq!(same_quantum(Some(&a), Some(&b)), $expected);
                    assert_eq!(same_quantum(Some(&b), Some(&a)), $expected);
                }
            };
        }

        impl_case!(case_2d17_0d001: "2.17", "0.001" => false);
        impl_case!(case_2d17_0d01: "2.17", "0.01" => true);
        impl_case!(case_2d17_0d1: "2.17", "0.1" => false);
        impl_case!(case_2d17_1: "2.17", "1" => false);
        impl_case!(case_inf_inf: "Infinity", "-Infinity" => true);
        impl_case!(case_nan_snan: "NaN", "sNaN" => true);
        impl_case!(case_nan_one: "NaN", "1" => false);
        impl_case!(case_inf_one: "Infinity", "1" => false);
        impl_case!(case_nan_inf: "NaN", "Infinity" => false);
        impl_case!(case_zeros: "-0E+3", "5E+3" => true);

        #[test]
        fn missing_operand() {
            let one = dec("1");
            assert!(!same_quantum(None, Some(&one)));
            assert!(!same_quantum(Some(&one), None));
            assert!(!same_quantum::<Decimal>(None, None));
        }
    }

    mod total {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $a:literal, $b:literal => $ord:ident) => {
                #[test]
                fn $name() {
                    let a = dec($a);
                    let b = dec($b);
                    assert_eq!(compare_total(&a, &b, None).unwrap(), Ordering::$ord);
                    assert_eq!(compare_total(&b, &a, None).unwrap(), Ordering::$ord.reverse());
                }
            };
        }

        impl_case!(case_12d73_127d9: "12.73", "127.9" => Less);
        impl_case!(case_n127_12: "-127", "12" => Less);
        impl_case!(case_12d30_12d3: "12.30", "12.3" => Less);
        impl_case!(case_12d30_12d30: "12.30", "12.30" => Equal);
        impl_case!(case_12d3_12d300: "12.3", "12.300" => Greater);
        impl_case!(case_12d3_nan: "12.3", "NaN" => Less);
        impl_case!(case_n0_0: "-0", "0" => Less);
        impl_case!(case_nan_snan: "NaN", "sNaN" => Greater);
        impl_case!(case_nnan_ninf: "-NaN", "-Infinity" => Less);

        #[test]
        fn magnitude() {
            let cmp = |a: &str, b: &str| compare_total_magnitude(&dec(a), &dec(b), None).unwrap();
            assert_eq!(cmp("-127", "12"), Ordering::Greater);
            assert_eq!(cmp("-0", "0"), Ordering::Equal);
            assert_eq!(cmp("-12.30", "12.3"), Ordering::Less);
            assert_eq!(cmp("-NaN", "Infinity"), Ordering::Greater);
        }

        #[test]
        fn operands_rounded_under_context() {
            let mut ctx = Context::for_precision(2).with_blank_flags();
            let a = dec("1.23");
            let b = dec("1.2");
            assert_eq!(compare_total(&a, &b, None).unwrap(), Ordering::Greater);
            assert_eq!(compare_total(&a, &b, Some(&mut ctx)).unwrap(), Ordering::Equal);
            assert_eq!(ctx.flags(), Flags::INEXACT | Flags::ROUNDED);
        }

        #[test]
        fn special_operands_not_rounded() {
            let mut ctx = Context::decimal64().with_blank_flags();
            let ord = compare_total(&dec("sNaN"), &dec("Infinity"), Some(&mut ctx)).unwrap();
            assert_eq!(ord, Ordering::Greater);
            assert_eq!(ctx.flags(), Flags::empty());
        }

        #[test]
        fn rounding_traps() {
            let mut ctx = Context::for_precision(2).with_traps(Flags::INEXACT);
            let err = compare_total(&dec("1"), &dec("1.23"), Some(&mut ctx)).unwrap_err();
            assert_eq!(err.flag, Flags::INEXACT);
            assert_eq!(err.result.to_string(), "1.2");
        }
    }
}
