// Property tests to be included by lib.rs

use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint};

/// Strategy for finite decimals, including signed zeros
fn finite_decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), -400i32..400, any::<bool>()).prop_map(|(digits, exponent, neg_zero)| {
        if digits == 0 && neg_zero {
            Decimal::finite(true, BigUint::from(0u8), BigInt::from(exponent))
        } else {
            Decimal::new(BigInt::from(digits), exponent as i64)
        }
    })
}

/// Strategy for any decimal, special values included
fn any_decimal() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        6 => finite_decimal(),
        1 => any::<bool>().prop_map(|neg| DecimalValue::infinity(neg)),
        1 => (any::<bool>(), 0u32..1000, any::<bool>())
            .prop_map(|(neg, payload, signaling)| DecimalValue::nan(neg, BigUint::from(payload), signaling)),
    ]
}

/// Strategy for logical operands, as digit strings of 0s and 1s
fn logical_decimal() -> impl Strategy<Value = Decimal> {
    "[01]{1,40}".prop_map(|digits| digits.parse::<Decimal>().unwrap())
}

mod logical {
    use super::*;

    proptest! {
        #[test]
        fn and_with_self_is_identity(v in logical_decimal()) {
            let r = spec_ops::logical_and(&v, &v, None).unwrap();
            prop_assert_eq!(r.compare_total(&v), Ordering::Equal);
        }

        #[test]
        fn or_with_self_is_identity(v in logical_decimal()) {
            let r = spec_ops::logical_or(&v, &v, None).unwrap();
            prop_assert_eq!(r.compare_total(&v), Ordering::Equal);
        }

        #[test]
        fn xor_with_self_is_zero(v in logical_decimal()) {
            let r = spec_ops::logical_xor(&v, &v, None).unwrap();
            prop_assert!(r.is_zero());
            prop_assert!(!r.is_negative());
        }

        #[test]
        fn binary_ops_commute(a in logical_decimal(), b in logical_decimal()) {
            let and_ab = spec_ops::logical_and(&a, &b, None).unwrap();
            let and_ba = spec_ops::logical_and(&b, &a, None).unwrap();
            prop_assert_eq!(and_ab.to_string(), and_ba.to_string());

            let xor_ab = spec_ops::logical_xor(&a, &b, None).unwrap();
            let xor_ba = spec_ops::logical_xor(&b, &a, None).unwrap();
            prop_assert_eq!(xor_ab.to_string(), xor_ba.to_string());
        }

        #[test]
        fn double_invert_at_fixed_width(v in logical_decimal()) {
            let mut ctx = Context::for_precision(40);
            let once = spec_ops::logical_invert(&v, Some(&mut ctx)).unwrap();
            let twice = spec_ops::logical_invert(&once, Some(&mut ctx)).unwrap();
            prop_assert_eq!(twice.to_string(), v.to_string());
        }
    }
}

mod total_order {
    use super::*;

    proptest! {
        #[test]
        fn antisymmetric(a in any_decimal(), b in any_decimal()) {
            let ab = spec_ops::compare_total(&a, &b, None).unwrap();
            let ba = spec_ops::compare_total(&b, &a, None).unwrap();
            prop_assert_eq!(ab, ba.reverse());
        }

        #[test]
        fn transitive(a in any_decimal(), b in any_decimal(), c in any_decimal()) {
            let mut v = [a, b, c];
            v.sort_by(|x, y| x.compare_total(y));
            prop_assert_ne!(v[0].compare_total(&v[1]), Ordering::Greater);
            prop_assert_ne!(v[1].compare_total(&v[2]), Ordering::Greater);
            prop_assert_ne!(v[0].compare_total(&v[2]), Ordering::Greater);
        }

        #[test]
        fn equal_only_for_same_representation(a in any_decimal(), b in any_decimal()) {
            let ord = spec_ops::compare_total(&a, &b, None).unwrap();
            prop_assert_eq!(ord == Ordering::Equal, a.to_string() == b.to_string());
        }

        #[test]
        fn signed_zeros_distinct(exponent in -100i64..100) {
            let pos = Decimal::new(BigInt::from(0), exponent);
            let neg = spec_ops::copy_negate(&pos);
            prop_assert_eq!(spec_ops::compare_total(&neg, &pos, None).unwrap(), Ordering::Less);
            prop_assert_eq!(spec_ops::compare_total_magnitude(&neg, &pos, None).unwrap(), Ordering::Equal);
        }

        #[test]
        fn consistent_with_numeric_order(a in finite_decimal(), b in finite_decimal()) {
            let numeric = a.partial_cmp(&b).unwrap();
            let total = a.compare_total(&b);
            if numeric != Ordering::Equal {
                prop_assert_eq!(numeric, total);
            }
        }
    }
}

mod classification {
    use super::*;

    proptest! {
        #[test]
        fn exactly_one_class(v in any_decimal()) {
            let ctx = Context::decimal64();
            let normal = spec_ops::is_normal(&v, Some(&ctx));
            let subnormal = spec_ops::is_subnormal(&v, Some(&ctx));
            prop_assert!(!(normal && subnormal));

            let class = NumberClass::of(&v, Some(&ctx));
            let code = spec_ops::number_class(&v, Some(&ctx));
            prop_assert_eq!(NumberClass::try_from(code).unwrap(), class);
            prop_assert_eq!(normal, matches!(class, NumberClass::PositiveNormal | NumberClass::NegativeNormal));
            prop_assert_eq!(subnormal, matches!(class, NumberClass::PositiveSubnormal | NumberClass::NegativeSubnormal));
        }

        #[test]
        fn rounding_stays_in_range(v in finite_decimal()) {
            let mut ctx = Context::decimal32();
            let r = v.round(&mut ctx).unwrap();
            if r.is_finite() && !r.is_zero() {
                let adjusted = r.adjusted_exponent();
                prop_assert!(&adjusted <= ctx.e_max());
                prop_assert!(ctx.exponent_within_range(&adjusted) || spec_ops::is_subnormal(&r, Some(&ctx)));
                prop_assert!(r.digit_count() <= 7);
            }
        }
    }
}
