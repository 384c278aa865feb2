// Tests for context rounding, included by arithmetic/rounding.rs

fn round_str(input: &str, ctx: &Context) -> (String, Flags) {
    let value: Decimal = input.parse().unwrap();
    let (result, flags) = round(&value, ctx);
    (result.to_string(), flags)
}

macro_rules! impl_case {
    ($name:ident: $ctx:expr; $input:literal => $expected:literal, $flags:expr) => {
        #[test]
        fn $name() {
            let ctx = $ctx;
            let (result, flags) = round_str($input, &ctx);
            assert_eq!(result, $expected);
            assert_eq!(flags, $flags);
        }
    };
}

mod discard_digits {
    use super::*;

    fn discard(n: u32, count: u64, mode: RoundingMode) -> (BigUint, bool) {
        super::discard_digits(&BigUint::from(n), count, false, mode)
    }

    #[test]
    fn nothing_to_discard() {
        assert_eq!(discard(1234, 0, RoundingMode::Up), (BigUint::from(1234u32), false));
    }

    #[test]
    fn exact() {
        assert_eq!(discard(1200, 2, RoundingMode::Up), (BigUint::from(12u8), false));
    }

    #[test]
    fn half_even_ties() {
        assert_eq!(discard(1250, 2, RoundingMode::HalfEven), (BigUint::from(12u8), true));
        assert_eq!(discard(1350, 2, RoundingMode::HalfEven), (BigUint::from(14u8), true));
        assert_eq!(discard(1251, 2, RoundingMode::HalfEven), (BigUint::from(13u8), true));
    }

    #[test]
    fn carry() {
        assert_eq!(discard(999, 1, RoundingMode::Up), (BigUint::from(100u8), true));
    }

    #[test]
    fn beyond_every_digit() {
        assert_eq!(discard(5, 3, RoundingMode::Up), (BigUint::from(1u8), true));
        assert_eq!(discard(5, 3, RoundingMode::HalfUp), (BigUint::zero(), true));
        assert_eq!(discard(5, 3, RoundingMode::ZeroFiveUp), (BigUint::from(1u8), true));
    }

    #[test]
    fn sign_directed() {
        let n = BigUint::from(1234u32);
        assert_eq!(super::discard_digits(&n, 1, true, RoundingMode::Floor).0, BigUint::from(124u8));
        assert_eq!(super::discard_digits(&n, 1, false, RoundingMode::Floor).0, BigUint::from(123u8));
    }
}

mod precision {
    use super::*;

    impl_case!(inexact: Context::for_precision(5); "1.23456" => "1.2346", Flags::INEXACT | Flags::ROUNDED);
    impl_case!(discards_zeros: Context::for_precision(5); "12345.0" => "12345", Flags::ROUNDED);
    impl_case!(fits: Context::for_precision(5); "1.2345" => "1.2345", Flags::empty());
    impl_case!(carry_adds_exponent: Context::for_precision(5); "99999.5" => "1.0000E+5", Flags::INEXACT | Flags::ROUNDED);
    impl_case!(negative_floor: Context::for_precision_and_rounding(3, RoundingMode::Floor); "-1.231" => "-1.24", Flags::INEXACT | Flags::ROUNDED);
    impl_case!(unlimited_is_identity: Context::unlimited(); "1.000000000000000000000000000001" => "1.000000000000000000000000000001", Flags::empty());
    impl_case!(huge_exponent_without_range: Context::for_precision(3); "1.2345E+1000000" => "1.23E+1000000", Flags::INEXACT | Flags::ROUNDED);
}

mod cli_decimal {
    use super::*;

    impl_case!(two_to_the_96_overflows: Context::cli_decimal(); "79228162514264337593543950336" => "Infinity", Flags::OVERFLOW | Flags::INEXACT | Flags::ROUNDED);
    impl_case!(negative_two_to_the_96_overflows: Context::cli_decimal(); "-79228162514264337593543950336" => "-Infinity", Flags::OVERFLOW | Flags::INEXACT | Flags::ROUNDED);
    impl_case!(largest_fits: Context::cli_decimal(); "79228162514264337593543950335" => "79228162514264337593543950335", Flags::empty());
    impl_case!(
        fraction_dropped_to_fit_96_bits: Context::cli_decimal();
        "-9344285899206687626894794544.049825" => "-9344285899206687626894794544",
        Flags::INEXACT | Flags::ROUNDED
    );
    impl_case!(positive_exponent_clamped: Context::cli_decimal(); "1E+3" => "1000", Flags::CLAMPED);
}

mod huge_precision {
    use super::*;

    impl_case!(twenty_million_digits: Context::for_precision(20_000_000); "1.5" => "1.5", Flags::empty());
    impl_case!(u64_max_digits: Context::for_precision(u64::MAX); "-123.45E+7" => "-1.2345E+9", Flags::empty());
    impl_case!(
        u64_max_bits: Context::for_precision(u64::MAX).with_precision_in_bits(true);
        "79228162514264337593543950336" => "79228162514264337593543950336", Flags::empty()
    );
    impl_case!(
        with_exponent_range: Context::for_precision(20_000_000).with_exponent_range(-99, 99).unwrap();
        "1.5E-90" => "1.5E-90", Flags::empty()
    );
}

mod exponent_range {
    use super::*;

    impl_case!(subnormal_exact: Context::decimal32(); "1E-101" => "1E-101", Flags::SUBNORMAL);
    impl_case!(
        subnormal_rounded: Context::decimal32(); "1.5E-101" => "2E-101",
        Flags::SUBNORMAL | Flags::UNDERFLOW | Flags::INEXACT | Flags::ROUNDED
    );
    impl_case!(
        underflow_to_zero: Context::decimal32(); "1E-103" => "0E-101",
        Flags::SUBNORMAL | Flags::UNDERFLOW | Flags::INEXACT | Flags::ROUNDED | Flags::CLAMPED
    );
    impl_case!(smallest_normal: Context::decimal32(); "1E-95" => "1E-95", Flags::empty());
    impl_case!(overflow_to_infinity: Context::decimal32(); "1E+97" => "Infinity", Flags::OVERFLOW | Flags::INEXACT | Flags::ROUNDED);
    impl_case!(
        overflow_to_largest: Context::decimal32().with_rounding(RoundingMode::Down); "-1E+97" => "-9.999999E+96",
        Flags::OVERFLOW | Flags::INEXACT | Flags::ROUNDED
    );
    impl_case!(
        ceiling_overflows_negative_to_largest: Context::decimal32().with_rounding(RoundingMode::Ceiling); "-1E+97" => "-9.999999E+96",
        Flags::OVERFLOW | Flags::INEXACT | Flags::ROUNDED
    );
    impl_case!(clamped_padding: Context::decimal32(); "1E+96" => "1.000000E+96", Flags::CLAMPED);
    impl_case!(no_clamp_keeps_exponent: Context::decimal32().with_exponent_clamp(false); "1E+96" => "1E+96", Flags::empty());
    impl_case!(zero_above_range: Context::decimal32(); "0E+100" => "0E+90", Flags::CLAMPED);
    impl_case!(zero_below_range: Context::decimal32(); "-0E-200" => "-0E-101", Flags::CLAMPED);
}

mod special {
    use super::*;

    impl_case!(infinity_unchanged: Context::decimal32(); "-Infinity" => "-Infinity", Flags::empty());
    impl_case!(signaling_nan_quieted: Context::decimal32(); "sNaN123" => "NaN123", Flags::INVALID);
    impl_case!(payload_truncated: Context::decimal32(); "-NaN12345678" => "-NaN345678", Flags::empty());
    impl_case!(payload_kept_without_precision: Context::unlimited(); "NaN12345678" => "NaN12345678", Flags::empty());
}

mod simplified {
    use super::*;

    impl_case!(no_negative_zero: Context::for_precision(3).with_simplified(true); "-0.00" => "0.00", Flags::empty());
    impl_case!(
        subnormal_flushed: Context::decimal32().with_simplified(true); "1E-100" => "0E-95",
        Flags::SUBNORMAL | Flags::UNDERFLOW | Flags::INEXACT | Flags::ROUNDED
    );
}
