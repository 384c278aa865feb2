// Tests for RoundingMode, included by rounding.rs

mod test_round_pair {
    use paste::paste;
    use super::*;

    macro_rules! impl_test {
        ( $($mode:ident),+ => $expected:literal) => {
            $(
                paste! {
                    #[test]
                    fn [< mode_ $mode >]() {
                        let (pair, sign, trailing_zeros) = test_input();
                        let mode = self::RoundingMode::$mode;
                        let result = mode.round_pair(sign, pair, trailing_zeros);
                        assert_eq!(result, $expected);
                    }
                }
            )*
        }
    }

    macro_rules! define_test_input {
        ( - $lhs:literal . $rhs:literal $($t:tt)* ) => {
            define_test_input!(sign=Sign::Minus, pair=($lhs, $rhs), $($t)*);
        };
        ( $lhs:literal . $rhs:literal $($t:tt)*) => {
            define_test_input!(sign=Sign::Plus, pair=($lhs, $rhs), $($t)*);
        };
        ( sign=$sign:expr, pair=$pair:expr, ) => {
            define_test_input!(sign=$sign, pair=$pair, trailing_zeros=true);
        };
        ( sign=$sign:expr, pair=$pair:expr, 000x ) => {
            define_test_input!(sign=$sign, pair=$pair, trailing_zeros=false);
        };
        ( sign=$sign:expr, pair=$pair:expr, trailing_zeros=$trailing_zeros:literal ) => {
            fn test_input() -> ((u8, u8), Sign, bool) { ($pair, $sign, $trailing_zeros) }
        };
    }

    mod case_0_1 {
        use super::*;

        define_test_input!(0 . 1);

        impl_test!(Up, Ceiling, ZeroFiveUp, Odd => 1);
        impl_test!(Down, Floor, HalfUp, HalfDown, HalfEven => 0);
    }

    mod case_neg_0_1 {
        use super::*;

        define_test_input!(-0 . 1);

        impl_test!(Up, Floor, ZeroFiveUp, Odd => 1);
        impl_test!(Down, Ceiling, HalfUp, HalfDown, HalfEven => 0);
    }

    mod case_0_5 {
        use super::*;

        define_test_input!( 0 . 5 );

        impl_test!(Up, Ceiling, HalfUp, ZeroFiveUp, Odd => 1);
        impl_test!(Down, Floor, HalfDown, HalfEven => 0);
    }

    mod case_neg_0_5 {
        use super::*;

        define_test_input!(-0 . 5);

        impl_test!(Up, Floor, HalfUp, ZeroFiveUp, Odd => 1);
        impl_test!(Down, Ceiling, HalfDown, HalfEven => 0);
    }

    mod case_0_5_000x {
        use super::*;

        // ...000x indicates a non-zero trailing digit; affects behavior of rounding N.0 and N.5
        define_test_input!(0 . 5 000x);

        impl_test!(Up, Ceiling, HalfUp, HalfDown, HalfEven, ZeroFiveUp, Odd => 1);
        impl_test!(Down, Floor => 0);
    }

    mod case_neg_4_3_000x {
        use super::*;

        define_test_input!(-4 . 3 000x);

        impl_test!(Up, Floor, Odd => 5);
        impl_test!(Down, Ceiling, HalfUp, HalfDown, HalfEven, ZeroFiveUp => 4);
    }

    mod case_5_2 {
        use super::*;

        define_test_input!(5 . 2);

        impl_test!(Up, Ceiling, ZeroFiveUp => 6);
        impl_test!(Down, Floor, HalfUp, HalfDown, HalfEven, Odd => 5);
    }

    mod case_9_5_000x {
        use super::*;

        define_test_input!(9 . 5 000x);

        impl_test!(Up, Ceiling, HalfDown, HalfUp, HalfEven => 10);
        impl_test!(Down, Floor, ZeroFiveUp, Odd => 9);
    }

    mod case_9_5 {
        use super::*;

        define_test_input!(9 . 5);

        impl_test!(Up, Ceiling, HalfUp, HalfEven => 10);
        impl_test!(Down, Floor, HalfDown, ZeroFiveUp, Odd => 9);
    }

    mod case_8_5 {
        use super::*;

        define_test_input!(8 . 5);

        impl_test!(Up, Ceiling, HalfUp, Odd => 9);
        impl_test!(Down, Floor, HalfDown, HalfEven, ZeroFiveUp => 8);
    }

    mod case_neg_6_5 {
        use super::*;

        define_test_input!(-6 . 5);

        impl_test!(Up, Floor, HalfUp, Odd => 7);
        impl_test!(Down, Ceiling, HalfDown, HalfEven, ZeroFiveUp => 6);
    }

    mod case_3_0 {
        use super::*;

        define_test_input!(3 . 0);

        impl_test!(Up, Down, Ceiling, Floor, HalfUp, HalfDown, HalfEven, ZeroFiveUp, Odd => 3);
    }

    mod case_3_0_000x {
        use super::*;

        define_test_input!(3 . 0 000x);

        impl_test!(Up, Ceiling => 4);
        impl_test!(Down, Floor, HalfUp, HalfDown, HalfEven, ZeroFiveUp, Odd => 3);
    }

    mod case_neg_2_0_000x {
        use super::*;

        define_test_input!(-2 . 0 000x);

        impl_test!(Up, Floor, Odd => 3);
        impl_test!(Down, Ceiling, HalfUp, HalfDown, HalfEven, ZeroFiveUp => 2);
    }

    mod case_0_0_000x {
        use super::*;

        define_test_input!(0 . 0 000x);

        impl_test!(Up, Ceiling, ZeroFiveUp, Odd => 1);
        impl_test!(Down, Floor, HalfUp, HalfDown, HalfEven => 0);
    }
}

mod overflows_to_infinity {
    use super::*;

    #[test]
    fn nearest_and_up_modes() {
        for mode in [RoundingMode::Up, RoundingMode::HalfUp, RoundingMode::HalfDown, RoundingMode::HalfEven] {
            assert!(mode.overflows_to_infinity(Sign::Plus), "{}", mode);
            assert!(mode.overflows_to_infinity(Sign::Minus), "{}", mode);
        }
    }

    #[test]
    fn truncating_modes() {
        for mode in [RoundingMode::Down, RoundingMode::ZeroFiveUp, RoundingMode::Odd] {
            assert!(!mode.overflows_to_infinity(Sign::Plus), "{}", mode);
            assert!(!mode.overflows_to_infinity(Sign::Minus), "{}", mode);
        }
    }

    #[test]
    fn directed_modes() {
        assert!(RoundingMode::Ceiling.overflows_to_infinity(Sign::Plus));
        assert!(!RoundingMode::Ceiling.overflows_to_infinity(Sign::Minus));
        assert!(!RoundingMode::Floor.overflows_to_infinity(Sign::Plus));
        assert!(RoundingMode::Floor.overflows_to_infinity(Sign::Minus));
    }
}

mod from_str {
    use super::*;

    #[test]
    fn every_name_round_trips() {
        for mode in RoundingMode::ALL {
            assert_eq!(mode.name().parse::<RoundingMode>().unwrap(), mode);
            assert_eq!(mode.to_string().to_lowercase().parse::<RoundingMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_name_is_invalid_argument() {
        let err = "Sideways".parse::<RoundingMode>().unwrap_err();
        assert!(matches!(err, ContextError::InvalidArgument(_)));
    }
}
