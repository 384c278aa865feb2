//! The logb and scaleb operations

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use super::{invalid_operation, quiet_nan};
use crate::error::TrapError;
use crate::{Context, DecimalValue};

/// Adjusted exponent of `value` as an integral decimal
///
/// * NaN operands are rounded under the context (a signaling NaN raises
///   Invalid there) and returned
/// * infinities give +Infinity
/// * zeros give -Infinity with Division by zero, via `-1 / 0`
///
/// ```
/// # use bigdecimal_context::{spec_ops, Decimal};
/// let n: Decimal = "0.03".parse().unwrap();
/// assert_eq!(spec_ops::logb(&n, None).unwrap().to_string(), "-2");
/// ```
pub fn logb<D: DecimalValue>(value: &D, ctx: Option<&mut Context>) -> Result<D, TrapError<D>> {
    if value.is_nan() {
        return value.round_to_context(ctx);
    }
    if value.is_infinite() {
        return Ok(D::infinity(false));
    }
    if value.is_zero() {
        let minus_one = D::from_parts(true, BigUint::one(), BigInt::zero());
        let zero = D::from_parts(false, BigUint::zero(), BigInt::zero());
        return minus_one.divide_with_context(&zero, ctx);
    }

    let (sign, magnitude) = value.adjusted_exponent().into_parts();
    D::from_parts(sign == Sign::Minus, magnitude, BigInt::zero()).round_to_context(ctx)
}

/// `value × 10^delta`, performed on the exponent
///
/// `delta` must be an integer with a zero exponent (`"3"`, not `"3.0"`
/// or `"3E+0"` written as `"30E-1"`); anything else is an invalid
/// operation. NaN operands propagate as in addition and infinities are
/// returned unchanged. The result is rounded under the context, so it
/// may overflow or underflow.
///
/// ```
/// # use bigdecimal_context::{spec_ops, Decimal};
/// let n: Decimal = "7.50".parse().unwrap();
/// let delta: Decimal = "-2".parse().unwrap();
/// assert_eq!(spec_ops::scaleb(&n, &delta, None).unwrap().to_string(), "0.0750");
/// ```
pub fn scaleb<D: DecimalValue>(value: &D, delta: &D, ctx: Option<&mut Context>) -> Result<D, TrapError<D>> {
    if value.is_nan() || delta.is_nan() {
        return value.add_with_context(delta, ctx);
    }
    if value.is_infinite() {
        return Ok(value.clone());
    }
    if !delta.is_finite() || !delta.exponent().is_zero() {
        return invalid_operation(quiet_nan(), ctx);
    }

    let sign = if delta.is_negative() { Sign::Minus } else { Sign::Plus };
    let shift = BigInt::from_biguint(sign, delta.coefficient().clone());
    let exponent = value.exponent() + shift;
    D::from_parts(value.is_negative(), value.coefficient().clone(), exponent).round_to_context(ctx)
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::{Decimal, Flags};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    mod logb {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $input:literal => $expected:literal, $flags:expr) => {
                #[test]
                fn $name() {
                    let mut ctx = Context::decimal64().with_blank_flags();
                    let result = logb(&dec($input), Some(&mut ctx)).unwrap();
                    assert_eq!(result.to_string(), $expected);
                    assert_eq!(ctx.flags(), $flags);
                }
            };
        }

        impl_case!(case_250: "250" => "2", Flags::empty());
        impl_case!(case_2d50: "2.50" => "0", Flags::empty());
        impl_case!(case_0d03: "0.03" => "-2", Flags::empty());
        impl_case!(case_n1en5: "-1E-5" => "-5", Flags::empty());
        impl_case!(case_12345e10: "12345E+10" => "14", Flags::empty());
        impl_case!(case_inf: "-Infinity" => "Infinity", Flags::empty());
        impl_case!(case_zero: "0" => "-Infinity", Flags::DIVIDE_BY_ZERO);
        impl_case!(case_neg_zero: "-0E+3" => "-Infinity", Flags::DIVIDE_BY_ZERO);
        impl_case!(case_nan: "NaN12" => "NaN12", Flags::empty());
        impl_case!(case_snan: "-sNaN5" => "-NaN5", Flags::INVALID);

        #[test]
        fn result_is_rounded() {
            let mut ctx = Context::for_precision(2).with_blank_flags();
            let result = logb(&dec("1E+1234"), Some(&mut ctx)).unwrap();
            assert_eq!(result.to_string(), "1.2E+3");
            assert_eq!(ctx.flags(), Flags::INEXACT | Flags::ROUNDED);
        }

        #[test]
        fn zero_traps_division_by_zero() {
            let mut ctx = Context::decimal64().with_traps(Flags::DIVIDE_BY_ZERO);
            let err = logb(&dec("0"), Some(&mut ctx)).unwrap_err();
            assert_eq!(err.flag, Flags::DIVIDE_BY_ZERO);
            assert_eq!(err.result.to_string(), "-Infinity");
        }

        #[test]
        fn without_context() {
            assert_eq!(logb(&dec("0"), None).unwrap().to_string(), "-Infinity");
            assert_eq!(logb(&dec("9.99E+999999999999"), None).unwrap().to_string(), "999999999999");
        }
    }

    mod scaleb {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $ctx:expr; $value:literal, $delta:literal => $expected:literal, $flags:expr) => {
                #[test]
                fn $name() {
                    let mut ctx = $ctx.with_blank_flags();
                    let result = scaleb(&dec($value), &dec($delta), Some(&mut ctx)).unwrap();
                    assert_eq!(result.to_string(), $expected);
                    assert_eq!(ctx.flags(), $flags);
                }
            };
            ($name:ident: $value:literal, $delta:literal => $expected:literal, $flags:expr) => {
                impl_case!($name: Context::decimal64(); $value, $delta => $expected, $flags);
            };
        }

        impl_case!(case_7d50_n2: "7.50", "-2" => "0.0750", Flags::empty());
        impl_case!(case_7d50_0: "7.50", "0" => "7.50", Flags::empty());
        impl_case!(case_7d50_3: "7.50", "3" => "7.50E+3", Flags::empty());
        impl_case!(case_neg_zero: "-0", "5" => "-0E+5", Flags::empty());
        impl_case!(case_inf: "-Infinity", "4" => "-Infinity", Flags::empty());
        impl_case!(case_inf_bad_delta: "Infinity", "1.5" => "Infinity", Flags::empty());
        impl_case!(case_nan_value: "NaN7", "2" => "NaN7", Flags::empty());
        impl_case!(case_nan_delta: "1", "NaN3" => "NaN3", Flags::empty());
        impl_case!(case_snan_delta: "1", "sNaN3" => "NaN3", Flags::INVALID);
        impl_case!(case_fractional_delta: "1", "1.5" => "NaN", Flags::INVALID);
        impl_case!(case_scaled_delta: "1", "10E-1" => "NaN", Flags::INVALID);
        impl_case!(case_positive_exp_delta: "1", "1E+1" => "NaN", Flags::INVALID);
        impl_case!(case_infinite_delta: "1", "Infinity" => "NaN", Flags::INVALID);
        impl_case!(case_overflow: Context::decimal32(); "1E+90", "10" => "Infinity",
                   Flags::OVERFLOW | Flags::INEXACT | Flags::ROUNDED);
        impl_case!(case_subnormal: Context::decimal32(); "1E-90", "-10" => "1E-100", Flags::SUBNORMAL);

        #[test]
        fn invalid_delta_traps() {
            let mut ctx = Context::decimal64().with_traps(Flags::INVALID);
            let err = scaleb(&dec("1"), &dec("0.5"), Some(&mut ctx)).unwrap_err();
            assert_eq!(err.flag, Flags::INVALID);
            assert!(err.result.is_quiet_nan());
        }

        #[test]
        fn without_context() {
            let r = scaleb(&dec("123456789"), &dec("-99999999999999999999"), None).unwrap();
            assert_eq!(r.to_string(), "1.23456789E-99999999999999999991");
        }
    }
}
