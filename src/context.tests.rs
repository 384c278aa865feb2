// Tests for Context, included by context.rs

mod construct {
    use super::*;

    #[test]
    fn negative_precision_is_invalid() {
        let err = Context::new(-1, RoundingMode::HalfEven, 0, 0, false).unwrap_err();
        assert!(matches!(err, ContextError::InvalidArgument(_)));
    }

    #[test]
    fn inverted_exponent_range_is_invalid() {
        let err = Context::new(0, RoundingMode::HalfEven, 0, -1, false).unwrap_err();
        assert!(matches!(err, ContextError::InvalidArgument(_)));
    }

    #[test]
    fn new_has_adjusted_exponent_range() {
        let ctx = Context::new(9, RoundingMode::HalfUp, -99, 99, true).unwrap();
        assert_eq!(ctx.precision(), &BigUint::from(9u8));
        assert_eq!(ctx.rounding(), RoundingMode::HalfUp);
        assert_eq!(ctx.e_min(), &BigInt::from(-99));
        assert_eq!(ctx.e_max(), &BigInt::from(99));
        assert!(ctx.has_exponent_range());
        assert!(ctx.adjust_exponent());
        assert!(ctx.clamp_normal_exponents());
        assert!(!ctx.has_flags());
        assert!(ctx.traps().is_empty());
    }

    #[test]
    fn big_bounds_at_ceiling() {
        let limit = BigInt::from(1) << 64u32;
        let below = &limit - 1;

        assert!(Context::new_big(&BigInt::from(5), RoundingMode::Down, &-&below, &below, false).is_ok());

        let err = Context::new_big(&BigInt::from(5), RoundingMode::Down, &BigInt::from(0), &limit, false).unwrap_err();
        assert!(matches!(err, ContextError::InvalidArgument(_)));

        let err = Context::new_big(&BigInt::from(5), RoundingMode::Down, &-&limit, &BigInt::from(0), false).unwrap_err();
        assert!(matches!(err, ContextError::InvalidArgument(_)));
    }
}

mod presets {
    use super::*;

    #[test]
    fn unlimited() {
        let ctx = Context::unlimited();
        assert!(ctx.precision().is_zero());
        assert!(!ctx.has_max_precision());
        assert!(!ctx.has_exponent_range());
        assert_eq!(ctx.rounding(), RoundingMode::HalfEven);
        assert!(!ctx.has_flags_or_traps());
        assert_eq!(ctx.e_max(), &BigInt::zero());
        assert_eq!(ctx.e_min(), &BigInt::zero());
        assert_eq!(ctx.e_tiny(), None);
    }

    #[test]
    fn cli_decimal() {
        let ctx = Context::cli_decimal();
        assert_eq!(ctx.precision(), &BigUint::from(96u8));
        assert!(ctx.is_precision_in_bits());
        assert_eq!(ctx.e_min(), &BigInt::from(-28));
        assert_eq!(ctx.e_max(), &BigInt::zero());
        assert!(!ctx.adjust_exponent());
        assert!(ctx.clamp_normal_exponents());
        assert_eq!(ctx.rounding(), RoundingMode::HalfEven);
        assert_eq!(ctx.digit_limit(), Some(29));
        assert_eq!(ctx.e_tiny(), Some(BigInt::from(-28)));
        assert_eq!(
            ctx.max_coefficient().unwrap().to_string(),
            "79228162514264337593543950335"
        );
    }

    #[test]
    fn coefficient_fits_precision() {
        let ctx = Context::cli_decimal();
        assert!(ctx.coefficient_fits(&ctx.max_coefficient().unwrap()));
        assert!(!ctx.coefficient_fits(&(BigUint::from(1u8) << 96u32)));

        let ctx = Context::for_precision(3);
        assert!(ctx.coefficient_fits(&BigUint::from(999u32)));
        assert!(!ctx.coefficient_fits(&BigUint::from(1000u32)));

        assert!(Context::unlimited().coefficient_fits(&(BigUint::from(1u8) << 4000u32)));
        assert!(Context::for_precision(u64::MAX).coefficient_fits(&BigUint::from(12345u32)));
    }

    #[test]
    fn huge_bit_precision_digit_limit() {
        let ctx = Context::for_precision(u64::MAX).with_precision_in_bits(true);
        assert!(ctx.digit_limit().unwrap() > u64::MAX / 4);
        assert!(ctx.coefficient_fits(&BigUint::from(u64::MAX)));
    }

    #[test]
    fn basic_traps_everything_but_informational() {
        let ctx = Context::basic();
        assert_eq!(ctx.precision(), &BigUint::from(9u8));
        assert!(ctx.traps().contains(Flags::INVALID | Flags::DIVIDE_BY_ZERO | Flags::OVERFLOW));
        assert!(!ctx.traps().intersects(Flags::INEXACT | Flags::ROUNDED | Flags::SUBNORMAL));
        assert!(ctx.has_flags_or_traps());
    }

    #[test]
    fn interchange_formats() {
        let ctx = Context::decimal64();
        assert_eq!(ctx.precision(), &BigUint::from(16u8));
        assert_eq!(ctx.e_min(), &BigInt::from(-383));
        assert_eq!(ctx.e_max(), &BigInt::from(384));
        assert_eq!(ctx.e_tiny(), Some(BigInt::from(-398)));
        assert_eq!(ctx.e_top(), BigInt::from(369));

        assert_eq!(Context::decimal32().e_tiny(), Some(BigInt::from(-101)));
        assert_eq!(Context::decimal128().e_tiny(), Some(BigInt::from(-6176)));
    }

    #[test]
    fn for_precision_and_rounding() {
        let ctx = Context::for_precision(5);
        assert_eq!(ctx.precision(), &BigUint::from(5u8));
        assert_eq!(ctx.rounding(), RoundingMode::HalfUp);
        assert!(!ctx.has_exponent_range());

        let ctx = Context::for_rounding(RoundingMode::Floor);
        assert!(ctx.precision().is_zero());
        assert_eq!(ctx.rounding(), RoundingMode::Floor);
    }

    #[test]
    fn default_uses_build_time_configuration() {
        let ctx = Context::default();
        assert_eq!(ctx.precision(), &BigUint::from(DEFAULT_PRECISION));
        assert_eq!(ctx.rounding(), DEFAULT_ROUNDING_MODE);
        assert!(!ctx.has_exponent_range());
    }
}

mod exponent_within_range {
    use super::*;

    #[test]
    fn agrees_with_direct_check() {
        let ctx = Context::unlimited().with_exponent_range(-5, 5).unwrap();
        for e in -10..=10 {
            let expected = -5 <= e && e <= 5;
            assert_eq!(ctx.exponent_within_range(&BigInt::from(e)), expected, "{}", e);
        }
    }

    #[test]
    fn always_true_without_range() {
        let ctx = Context::for_precision(3);
        for e in [-1_000_000_000i64, 0, 1_000_000_000] {
            assert!(ctx.exponent_within_range(&BigInt::from(e)));
        }
    }
}

mod derivations {
    use super::*;

    #[test]
    fn exponent_range_bounds() {
        let ctx = Context::unlimited().with_exponent_range(-5, 5).unwrap();
        assert_eq!(ctx.e_max(), &BigInt::from(5));
        assert_eq!(ctx.e_min(), &BigInt::from(-5));
        assert!(ctx.has_exponent_range());

        assert!(Context::unlimited().with_exponent_range(5, -5).is_err());
    }

    #[test]
    fn unlimited_exponents_clears_range() {
        let ctx = Context::decimal64().with_unlimited_exponents();
        assert!(!ctx.has_exponent_range());
        assert_eq!(ctx.e_max(), &BigInt::zero());
        assert_eq!(ctx.e_min(), &BigInt::zero());
        assert_eq!(ctx.precision(), &BigUint::from(16u8));
    }

    #[test]
    fn precision() {
        assert_eq!(Context::unlimited().with_precision(6).unwrap().precision(), &BigUint::from(6u8));

        let err = Context::unlimited().with_precision(-1).unwrap_err();
        assert!(matches!(err, ContextError::InvalidArgument(_)));

        let err = Context::unlimited().with_big_precision(&BigInt::from(-1)).unwrap_err();
        assert!(matches!(err, ContextError::InvalidArgument(_)));

        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        let ctx = Context::unlimited().with_big_precision(&big).unwrap();
        assert_eq!(ctx.precision().to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn each_changes_one_field() {
        let base = Context::decimal32();

        let ctx = base.with_rounding(RoundingMode::Odd);
        assert_eq!(ctx.rounding(), RoundingMode::Odd);
        assert_eq!(ctx.with_rounding(RoundingMode::HalfEven), base);

        assert_eq!(base.with_simplified(true).with_simplified(false), base);
        assert_eq!(base.with_adjust_exponent(false).with_adjust_exponent(true), base);
        assert_eq!(base.with_exponent_clamp(false).with_exponent_clamp(true), base);
        assert_eq!(base.with_precision_in_bits(true).with_precision_in_bits(false), base);
        assert_eq!(base.with_traps(Flags::INVALID).with_traps(Flags::empty()), base);
        assert!(base.with_simplified(true).is_simplified());
    }

    #[test]
    fn derivations_do_not_touch_original() {
        let base = Context::unlimited().with_blank_flags();
        let mut derived = base.with_precision(3).unwrap();
        derived.set_flags(Flags::INEXACT).unwrap();
        assert_eq!(derived.flags(), Flags::INEXACT);
        assert_eq!(base.flags(), Flags::empty());
    }
}

mod flags {
    use super::*;

    #[test]
    fn disabled_register_reads_empty() {
        assert_eq!(Context::unlimited().flags(), Flags::empty());
    }

    #[test]
    fn writing_requires_blank_flags() {
        let mut ctx = Context::unlimited();
        let err = ctx.set_flags(Flags::INEXACT).unwrap_err();
        assert!(matches!(err, ContextError::IllegalState(_)));

        let mut ctx = Context::unlimited().with_blank_flags();
        ctx.set_flags(Flags::INEXACT | Flags::ROUNDED).unwrap();
        assert_eq!(ctx.flags(), Flags::INEXACT | Flags::ROUNDED);
        assert!(ctx.has_flags_or_traps());

        let mut ctx = ctx.with_no_flags();
        assert_eq!(ctx.flags(), Flags::empty());
        assert!(ctx.set_flags(Flags::INEXACT).is_err());
    }

    #[test]
    fn clear_and_record() {
        let mut ctx = Context::unlimited().with_blank_flags();
        ctx.record_flags(Flags::CLAMPED);
        ctx.record_flags(Flags::SUBNORMAL);
        assert_eq!(ctx.flags(), Flags::CLAMPED | Flags::SUBNORMAL);
        ctx.clear_flags().unwrap();
        assert_eq!(ctx.flags(), Flags::empty());

        let mut ctx = Context::unlimited();
        ctx.record_flags(Flags::CLAMPED);
        assert_eq!(ctx.flags(), Flags::empty());
        assert!(ctx.clear_flags().is_err());
    }

    #[test]
    fn blank_flags_resets_existing_register() {
        let mut ctx = Context::unlimited().with_blank_flags();
        ctx.set_flags(Flags::OVERFLOW).unwrap();
        assert_eq!(ctx.with_blank_flags().flags(), Flags::empty());
    }
}
