//! Routines for parsing strings into Decimals
//!
//! Accepts the numeric string syntax of the General Decimal Arithmetic
//! specification: an optional sign, then either digits with an optional
//! decimal point and exponent (`-12.5E+3`), an infinity (`Inf`,
//! `Infinity`) or a NaN with optional payload (`NaN`, `sNaN123`).
//! Keywords are case-insensitive.

use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::{Decimal, DecimalValue, ParseDecimalError};

pub(crate) fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let (negative, body) = match s.as_bytes().first() {
        None => return Err(ParseDecimalError::Empty),
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        Some(_) => (false, s),
    };
    if body.is_empty() {
        return Err(ParseDecimalError::Empty);
    }

    let lower = body.to_ascii_lowercase();
    if lower == "inf" || lower == "infinity" {
        return Ok(DecimalValue::infinity(negative));
    }
    if let Some(payload) = lower.strip_prefix("snan") {
        return Ok(DecimalValue::nan(negative, parse_payload(payload)?, true));
    }
    if let Some(payload) = lower.strip_prefix("nan") {
        return Ok(DecimalValue::nan(negative, parse_payload(payload)?, false));
    }

    let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
        Some(loc) => (&body[..loc], Some(&body[loc + 1..])),
        None => (body, None),
    };

    let (int_part, frac_part) = match mantissa.find('.') {
        Some(loc) => (&mantissa[..loc], &mantissa[loc + 1..]),
        None => (mantissa, ""),
    };

    let digits = format!("{}{}", int_part, frac_part);
    if digits.is_empty() {
        return Err(ParseDecimalError::Empty);
    }
    check_digits(&digits, s)?;

    let exponent = match exponent {
        Some(exponent) => parse_exponent(exponent)?,
        None => BigInt::zero(),
    };

    let coefficient = BigUint::from_str(&digits)?;
    let exponent = exponent - BigInt::from(frac_part.len());

    Ok(Decimal::finite(negative, coefficient, exponent))
}

fn parse_exponent(s: &str) -> Result<BigInt, ParseDecimalError> {
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if digits.is_empty() {
        return Err(ParseDecimalError::Empty);
    }
    check_digits(digits, s)?;
    let magnitude = BigInt::from_str(digits)?;
    Ok(if s.starts_with('-') { -magnitude } else { magnitude })
}

/// NaN payloads are plain digits, possibly none
fn parse_payload(s: &str) -> Result<BigUint, ParseDecimalError> {
    if s.is_empty() {
        return Ok(BigUint::zero());
    }
    check_digits(s, s)?;
    Ok(BigUint::from_str(s)?)
}

fn check_digits(digits: &str, source: &str) -> Result<(), ParseDecimalError> {
    match digits.chars().find(|c| !c.is_ascii_digit()) {
        None => Ok(()),
        Some(c) => Err(ParseDecimalError::Other(format!(
            "invalid digit '{}' in \"{}\"", c, source
        ))),
    }
}
