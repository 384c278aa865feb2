//! Implementation of comparison operations
//!
//! `PartialEq` and `PartialOrd` compare numeric values: `1.0 == 1`,
//! `-0 == 0` and NaN is unordered (and unequal to everything, itself
//! included). The total ordering of representations, which tells all of
//! those apart, is [`DecimalValue::compare_total`].
//!

use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};

use crate::arithmetic::{count_decimal_digits_uint, multiply_by_ten_to_the_uint};
use crate::{Decimal, DecimalValue, Species};

impl PartialEq for Decimal {
    fn eq(&self, rhs: &Decimal) -> bool {
        self.partial_cmp(rhs) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Decimal {
    /// Numeric comparison
    ///
    /// # Example
    ///
    /// ```
    /// # use bigdecimal_context::Decimal;
    /// let a: Decimal = "-1".parse().unwrap();
    /// let b: Decimal = "1".parse().unwrap();
    /// assert!(a < b);
    /// let c: Decimal = "10.0".parse().unwrap();
    /// assert!(c > b);
    /// let nan: Decimal = "NaN".parse().unwrap();
    /// assert_eq!(nan.partial_cmp(&b), None);
    /// ```
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }

        let scmp = signum(self).cmp(&signum(other));
        if scmp != Ordering::Equal || signum(self) == 0 {
            return Some(scmp);
        }

        let magnitude = match (self.species, other.species) {
            (Species::Infinite, Species::Infinite) => Ordering::Equal,
            (Species::Infinite, _) => Ordering::Greater,
            (_, Species::Infinite) => Ordering::Less,
            _ => compare_finite_magnitude(
                &self.coefficient,
                &self.exponent,
                &other.coefficient,
                &other.exponent,
            ),
        };

        Some(if self.negative { magnitude.reverse() } else { magnitude })
    }
}

/// -1, 0 or 1; zero of either sign is 0
fn signum(d: &Decimal) -> i8 {
    if d.is_zero() {
        0
    } else if d.negative {
        -1
    } else {
        1
    }
}

/// Compare `a × 10^ea` with `b × 10^eb`
fn compare_finite_magnitude(a: &BigUint, ea: &BigInt, b: &BigUint, eb: &BigInt) -> Ordering {
    match (a.is_zero(), b.is_zero()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    // position of the leading digit decides unless it is the same
    let a_top = ea + BigInt::from(count_decimal_digits_uint(a));
    let b_top = eb + BigInt::from(count_decimal_digits_uint(b));
    match a_top.cmp(&b_top) {
        Ordering::Equal => {}
        ord => return ord,
    }

    // with equal leading positions the exponent gap is bounded by the
    // digit count, so the shift below is small
    match ea.cmp(eb) {
        Ordering::Equal => a.cmp(b),
        Ordering::Greater => {
            let gap = (ea - eb).to_u64().unwrap_or(u64::MAX);
            compare_scaled_biguints(b, a, gap).reverse()
        }
        Ordering::Less => {
            let gap = (eb - ea).to_u64().unwrap_or(u64::MAX);
            compare_scaled_biguints(a, b, gap)
        }
    }
}

/// Compare `a` with `b × 10^scale_diff`
fn compare_scaled_biguints(a: &BigUint, b: &BigUint, scale_diff: u64) -> Ordering {
    if scale_diff == 0 {
        return a.cmp(b);
    }

    // 10^n > 2^(3n), so a shorter bit length decides early
    let shifted_b_bits = b.bits().saturating_add(scale_diff.saturating_mul(3));
    if a.bits() < shifted_b_bits {
        return Ordering::Less;
    }

    a.cmp(&multiply_by_ten_to_the_uint(b, scale_diff))
}

/// Total ordering of decimal representations
///
/// -NaN < -sNaN < -∞ < negative finites < -0 < +0 < positive finites
/// < +∞ < +sNaN < +NaN. Numerically equal finites are ordered by
/// exponent (lower first when positive) and NaNs of the same kind by
/// payload.
pub(crate) fn compare_total(a: &Decimal, b: &Decimal) -> Ordering {
    match (a.negative, b.negative) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    let magnitude = compare_total_unsigned(a, b);
    if a.negative {
        magnitude.reverse()
    } else {
        magnitude
    }
}

/// Ordering of two representations as if both were positive
fn compare_total_unsigned(a: &Decimal, b: &Decimal) -> Ordering {
    let rank = |d: &Decimal| match d.species {
        Species::Finite => 0,
        Species::Infinite => 1,
        Species::SignalingNaN => 2,
        Species::QuietNaN => 3,
    };

    match rank(a).cmp(&rank(b)) {
        Ordering::Equal => {}
        ord => return ord,
    }

    match a.species {
        Species::Finite => {
            compare_finite_magnitude(&a.coefficient, &a.exponent, &b.coefficient, &b.exponent)
                .then_with(|| a.exponent.cmp(&b.exponent))
        }
        Species::Infinite => Ordering::Equal,
        Species::QuietNaN | Species::SignalingNaN => a.coefficient.cmp(&b.coefficient),
    }
}


#[cfg(test)]
mod test {
    use super::*;

    mod compare_scaled_biguints {
        use super::*;

        macro_rules! impl_test {
            ($name:ident: $a:literal > $b:literal e $e:literal) => {
                impl_test!($name: $a Greater $b e $e);
            };
            ($name:ident: $a:literal < $b:literal e $e:literal) => {
                impl_test!($name: $a Less $b e $e);
            };
            ($name:ident: $a:literal = $b:literal e $e:literal) => {
                impl_test!($name: $a Equal $b e $e);
            };
            ($name:ident: $a:literal $op:ident $b:literal e $e:literal) => {
                #[test]
                fn $name() {
                    let a: BigUint = $a.parse().unwrap();
                    let b: BigUint = $b.parse().unwrap();

                    let result = compare_scaled_biguints(&a, &b, $e);
                    assert_eq!(result, Ordering::$op);
                }
            };
        }

        impl_test!(case_500_51e1: "500" < "51" e 1);
        impl_test!(case_500_44e1: "500" > "44" e 1);
        impl_test!(case_5000_50e2: "5000" = "50" e 2);
        impl_test!(case_1234e9_12345e9: "1234000000000" < "12345" e 9);
        impl_test!(case_1116xx459_759xx717e2: "1116386634271380982470843247639640260491505327092723527088459" < "759522625769651746138617259189939751893902453291243506584717" e 2);
    }

    /// Large-magnitude exponents compare without expanding coefficients
    #[test]
    fn test_cmp_on_exp_boundaries() {
        let a = Decimal::new(1.into(), i64::MAX);
        let z = Decimal::new(1.into(), i64::MIN);
        assert_ne!(a, z);
        assert!(z < a);
        assert_eq!(a, a);
        assert_eq!(z, z);
    }

    mod ord {
        use super::*;

        macro_rules! impl_test {
            ($name:ident: $a:literal < $b:literal) => {
                #[test]
                fn $name() {
                    let a: Decimal = $a.parse().unwrap();
                    let b: Decimal = $b.parse().unwrap();

                    assert!(&a < &b);
                    assert!(&b > &a);
                    assert_ne!(a, b);
                }
            };
        }

        impl_test!(case_diff_signs: "-1" < "1");
        impl_test!(case_n1_0: "-1" < "0");
        impl_test!(case_0_1: "0" < "1");
        impl_test!(case_1d2345_1d2346: "1.2345" < "1.2346");
        impl_test!(case_compare_extremes: "1e-9223372036854775807" < "1e9223372036854775807");
        impl_test!(case_small_difference: "472697816888807260.1604" < "472697816888807260.16040000000000000000001");
        impl_test!(case_very_small_diff: "-1.0000000000000000000000000000000000000000000000000001" < "-1");
        impl_test!(case_ninf_n1: "-Infinity" < "-1E+999999");
        impl_test!(case_1_inf: "1E+999999" < "Infinity");
        impl_test!(case_1_1e39: "1000000000000000000000000000000000000000" < "1e41");
    }

    mod eq {
        use super::*;

        macro_rules! impl_test {
            ($name:ident: $a:literal = $b:literal) => {
                #[test]
                fn $name() {
                    let a: Decimal = $a.parse().unwrap();
                    let b: Decimal = $b.parse().unwrap();

                    assert_eq!(&a, &b);
                    assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
                }
            };
        }

        impl_test!(case_zero: "0" = "0.00");
        impl_test!(case_signed_zeros: "-0" = "0E+5");
        impl_test!(case_1_1d00: "1" = "1.00");
        impl_test!(case_n1_n1000en3: "-1" = "-1000e-3");
        impl_test!(case_0d000034500_345en7: "0.000034500" = "345e-7");
        impl_test!(case_infinities: "-Infinity" = "-Infinity");
    }

    #[test]
    fn nan_is_unordered() {
        let nan: Decimal = "NaN".parse().unwrap();
        let one = Decimal::from(1);
        assert_eq!(nan.partial_cmp(&nan), None);
        assert_ne!(nan, nan);
        assert!(!(nan < one) && !(nan > one));
    }

    mod total {
        use super::*;

        macro_rules! impl_test {
            ($name:ident: $a:literal < $b:literal) => {
                #[test]
                fn $name() {
                    let a: Decimal = $a.parse().unwrap();
                    let b: Decimal = $b.parse().unwrap();

                    assert_eq!(compare_total(&a, &b), Ordering::Less);
                    assert_eq!(compare_total(&b, &a), Ordering::Greater);
                }
            };
            ($name:ident: $a:literal = $b:literal) => {
                #[test]
                fn $name() {
                    let a: Decimal = $a.parse().unwrap();
                    let b: Decimal = $b.parse().unwrap();

                    assert_eq!(compare_total(&a, &b), Ordering::Equal);
                }
            };
        }

        impl_test!(case_nnan_nsnan: "-NaN" < "-sNaN");
        impl_test!(case_nsnan_ninf: "-sNaN" < "-Infinity");
        impl_test!(case_ninf_n1: "-Infinity" < "-1");
        impl_test!(case_n1_n0: "-1" < "-0");
        impl_test!(case_n0_0: "-0" < "0");
        impl_test!(case_0_1: "0" < "1");
        impl_test!(case_1_inf: "1" < "Infinity");
        impl_test!(case_inf_snan: "Infinity" < "sNaN");
        impl_test!(case_snan_nan: "sNaN" < "NaN");
        impl_test!(case_exponent_positive: "1.00" < "1");
        impl_test!(case_exponent_negative: "-1" < "-1.00");
        impl_test!(case_zero_exponents: "0.000" < "0");
        impl_test!(case_negative_zero_exponents: "-0" < "-0.000");
        impl_test!(case_payloads: "NaN5" < "NaN12");
        impl_test!(case_negative_payloads: "-NaN12" < "-NaN5");
        impl_test!(case_signaling_payloads: "sNaN1" < "sNaN2");
        impl_test!(case_same: "12.30" = "12.30");
        impl_test!(case_same_nan: "-NaN3" = "-NaN3");
    }
}
