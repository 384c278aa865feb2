use std::str::FromStr;

use crate::parsing::parse_decimal;
use crate::{Decimal, ParseDecimalError};

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    #[inline]
    fn from_str(s: &str) -> Result<Decimal, ParseDecimalError> {
        // implemented in parsing.rs
        parse_decimal(s)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecimalValue;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $display:literal) => {
            #[test]
            fn $name() {
                let dec = Decimal::from_str($input).unwrap();
                assert_eq!(dec.to_string(), $display);
            }
        };
    }

    impl_case!(case_1331d107: "1331.107" => "1331.107");
    impl_case!(case_2e1: "2e1" => "2E+1");
    impl_case!(case_n1230: "-1230" => "-1230");
    impl_case!(case_1d23ep3: "1.23E+3" => "1.23E+3");
    impl_case!(case_0d00000123: "0.00000123" => "0.00000123");
    impl_case!(case_0d000000123: "0.000000123" => "1.23E-7");
    impl_case!(case_ninfinity: "-infinity" => "-Infinity");
    impl_case!(case_snan: "SNAN08" => "sNaN8");

    #[test]
    fn parse_matches_trait() {
        let n: Decimal = "-0E+2".parse().unwrap();
        assert!(n.is_zero() && n.is_negative());
        assert!("1.2.3".parse::<Decimal>().is_err());
    }
}
