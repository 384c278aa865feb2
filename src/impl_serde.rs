//!
//! Support for serde implementations
//!
//! Decimals serialize as their scientific string. Contexts serialize as
//! a struct whose big-integer fields are decimal strings; deserializing
//! a context goes through the same validation as the constructors.
//!

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use serde::{de, ser, Deserialize, Serialize};

use crate::{Context, ContextError, Decimal, Flags, RoundingMode};

impl ser::Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a Decimal
struct DecimalVisitor;

impl<'de> de::Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer or formatted decimal string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Decimal::from_str(value).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(value))
    }
}

impl<'de> de::Deserialize<'de> for Decimal {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(DecimalVisitor)
    }
}

/// Serialized form of a [`Context`]
#[derive(Serialize, Deserialize)]
struct ContextRepr {
    precision: String,
    rounding: RoundingMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    e_min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    e_max: Option<String>,
    #[serde(default = "default_true")]
    adjust_exponent: bool,
    #[serde(default)]
    clamp_normal_exponents: bool,
    #[serde(default)]
    simplified: bool,
    #[serde(default)]
    precision_in_bits: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    flags: Option<Flags>,
    #[serde(default)]
    traps: Flags,
}

fn default_true() -> bool {
    true
}

impl From<&Context> for ContextRepr {
    fn from(ctx: &Context) -> ContextRepr {
        let (e_min, e_max) = if ctx.has_exponent_range() {
            (Some(ctx.e_min().to_string()), Some(ctx.e_max().to_string()))
        } else {
            (None, None)
        };
        ContextRepr {
            precision: ctx.precision().to_string(),
            rounding: ctx.rounding(),
            e_min: e_min,
            e_max: e_max,
            adjust_exponent: ctx.adjust_exponent(),
            clamp_normal_exponents: ctx.clamp_normal_exponents(),
            simplified: ctx.is_simplified(),
            precision_in_bits: ctx.is_precision_in_bits(),
            flags: if ctx.has_flags() { Some(ctx.flags()) } else { None },
            traps: ctx.traps(),
        }
    }
}

impl ContextRepr {
    /// Build the context, validating like the constructors do
    fn into_context(self) -> Result<Context, ContextError> {
        let precision = parse_bigint("precision", &self.precision)?;
        let mut ctx = Context::unlimited().with_big_precision(&precision)?;

        ctx = match (self.e_min, self.e_max) {
            (None, None) => ctx,
            (Some(e_min), Some(e_max)) => {
                let e_min = parse_bigint("e_min", &e_min)?;
                let e_max = parse_bigint("e_max", &e_max)?;
                ctx.with_big_exponent_range(&e_min, &e_max)?
            }
            _ => {
                return Err(ContextError::InvalidArgument(
                    "e_min and e_max must be given together".into(),
                ))
            }
        };

        ctx = ctx
            .with_rounding(self.rounding)
            .with_adjust_exponent(self.adjust_exponent)
            .with_exponent_clamp(self.clamp_normal_exponents)
            .with_simplified(self.simplified)
            .with_precision_in_bits(self.precision_in_bits)
            .with_traps(self.traps);

        if let Some(flags) = self.flags {
            ctx = ctx.with_blank_flags();
            ctx.set_flags(flags)?;
        }

        Ok(ctx)
    }
}

fn parse_bigint(field: &str, value: &str) -> Result<BigInt, ContextError> {
    BigInt::from_str(value)
        .map_err(|err| ContextError::InvalidArgument(format!("{} ({:?}): {}", field, value, err)))
}

impl ser::Serialize for Context {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        ContextRepr::from(self).serialize(serializer)
    }
}

impl<'de> de::Deserialize<'de> for Context {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let repr = ContextRepr::deserialize(d)?;
        repr.into_context().map_err(de::Error::custom)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    use serde_test::{assert_de_tokens, assert_tokens, Token};

    mod serde_serialize_deserialize_str {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $input:literal => $output:literal) => {
                #[test]
                fn $name() {
                    let expected = Token::Str($output);
                    let decimal: Decimal = $input.parse().unwrap();
                    assert_tokens(&decimal, &[expected]);
                }
            }
        }

        impl_case!(case_1d0: "1.0" => "1.0");
        impl_case!(case_0d5: "0.5" => "0.5");
        impl_case!(case_50000: "50000" => "50000");
        impl_case!(case_1en3: "1e-3" => "0.001");
        impl_case!(case_10e11: "10e11" => "1.0E+12");
        impl_case!(case_40d0010: "40.0010" => "40.0010");
        impl_case!(case_n0: "-0" => "-0");
        impl_case!(case_ninf: "-Infinity" => "-Infinity");
    }

    mod serde_deserialize_int {
        use super::*;

        macro_rules! impl_case {
            ( $( $ttype:ident ),+ : -$input:literal ) => {
                $( paste! { impl_case!([< case_n $input _ $ttype:lower >] : $ttype : -$input); } )*
            };
            ( $( $ttype:ident ),+ : $input:literal ) => {
                $( paste! { impl_case!([< case_ $input _ $ttype:lower >] : $ttype : $input); } )*
            };
            ($name:ident : $type:ident : $input:literal) => {
                #[test]
                fn $name() {
                    let expected = Decimal::from($input);
                    let token = Token::$type($input);
                    assert_de_tokens(&expected, &[token]);
                }
            };
        }

        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 0);
        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 1);
        impl_case!(I8, I16, I32, I64 : -1);
        impl_case!(I64: -99999999999i64);
    }

    mod context_json {
        use super::*;

        #[test]
        fn presets_round_trip() {
            for ctx in [
                Context::unlimited(),
                Context::basic(),
                Context::cli_decimal(),
                Context::decimal128().with_blank_flags(),
                Context::for_precision(7).with_simplified(true),
            ] {
                let json = serde_json::to_string(&ctx).unwrap();
                let parsed: Context = serde_json::from_str(&json).unwrap();
                assert_eq!(parsed, ctx, "{}", json);
            }
        }

        #[test]
        fn serialized_form() {
            let ctx = Context::new(9, RoundingMode::HalfUp, -99, 99, false).unwrap();
            let json = serde_json::to_value(&ctx).unwrap();
            assert_eq!(json["precision"], "9");
            assert_eq!(json["rounding"], "HalfUp");
            assert_eq!(json["e_min"], "-99");
            assert_eq!(json["e_max"], "99");
            assert!(json.get("flags").is_none());
        }

        #[test]
        fn flags_register_restored() {
            let mut ctx = Context::decimal32().with_blank_flags();
            ctx.set_flags(Flags::INEXACT | Flags::ROUNDED).unwrap();
            let json = serde_json::to_string(&ctx).unwrap();
            let parsed: Context = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.flags(), Flags::INEXACT | Flags::ROUNDED);
        }

        #[test]
        fn minimal_document() {
            let ctx: Context = serde_json::from_str(r#"{"precision":"5","rounding":"Floor"}"#).unwrap();
            assert_eq!(ctx, Context::for_precision_and_rounding(5, RoundingMode::Floor));
        }

        #[test]
        fn invalid_documents_rejected() {
            for json in [
                r#"{"precision":"-1","rounding":"HalfEven"}"#,
                r#"{"precision":"x","rounding":"HalfEven"}"#,
                r#"{"precision":"5","rounding":"HalfEven","e_min":"1","e_max":"0"}"#,
                r#"{"precision":"5","rounding":"HalfEven","e_min":"1"}"#,
                r#"{"precision":"5","rounding":"HalfEven","e_min":"-99999999999999999999","e_max":"0"}"#,
                r#"{"precision":"5","rounding":"Sideways"}"#,
            ] {
                assert!(serde_json::from_str::<Context>(json).is_err(), "{}", json);
            }
        }
    }

    mod decimal_json {
        use super::*;

        #[derive(Serialize, Deserialize)]
        struct TestStruct {
            name: String,
            value: Decimal,
        }

        #[test]
        fn test_struct_parsing() {
            let json_src = r#"{ "name": "foo", "value": "-1.50E-9" }"#;
            let my_struct: TestStruct = serde_json::from_str(json_src).unwrap();
            assert_eq!(&my_struct.name, "foo");
            assert_eq!(my_struct.value.to_string(), "-1.50E-9");

            let s = serde_json::to_string(&my_struct).unwrap();
            assert_eq!(s, r#"{"name":"foo","value":"-1.50E-9"}"#);

            let from_int: TestStruct = serde_json::from_str(r#"{"name":"n","value":-42}"#).unwrap();
            assert_eq!(from_int.value, Decimal::from(-42));
        }
    }
}
