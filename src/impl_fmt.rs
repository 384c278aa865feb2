//! Implementation of std::fmt traits & other stringification functions
//!

use std::fmt;
use std::fmt::Write;

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::{Decimal, DecimalValue, Species};

/// Adjusted exponents below this are always written in exponential form
const LEAST_PLAIN_ADJUSTED_EXPONENT: i64 = -6;

impl fmt::Display for Decimal {
    /// Scientific string form
    ///
    /// Plain notation when the exponent is not positive and the adjusted
    /// exponent is at least -6, exponential notation (`E+n`/`E-n`)
    /// otherwise.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_scientific_string(self, f)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Decimal(\"{}\")", self)
    }
}

impl Decimal {
    /// Digits with a decimal point and no exponent
    ///
    /// ```
    /// # use bigdecimal_context::Decimal;
    /// let n: Decimal = "1.5E+3".parse().unwrap();
    /// assert_eq!(n.to_string(), "1.5E+3");
    /// assert_eq!(n.to_plain_string(), "1500");
    /// ```
    pub fn to_plain_string(&self) -> String {
        let mut s = String::new();
        // writing to a String cannot fail
        let _ = write_plain_string(self, &mut s);
        s
    }
}

/// Sign and special value names, shared by both string forms
///
/// Returns false if nothing more needs to be written.
fn write_prefix<W: Write>(n: &Decimal, w: &mut W) -> Result<bool, fmt::Error> {
    if n.negative {
        w.write_char('-')?;
    }
    match n.species {
        Species::Finite => Ok(true),
        Species::Infinite => w.write_str("Infinity").map(|_| false),
        Species::QuietNaN | Species::SignalingNaN => {
            if n.species == Species::SignalingNaN {
                w.write_char('s')?;
            }
            w.write_str("NaN")?;
            if !n.coefficient.is_zero() {
                write!(w, "{}", n.coefficient)?;
            }
            Ok(false)
        }
    }
}

pub(crate) fn write_scientific_string<W: Write>(n: &Decimal, w: &mut W) -> fmt::Result {
    if !write_prefix(n, w)? {
        return Ok(());
    }

    let digits = n.coefficient.to_str_radix(10);
    let adjusted = n.adjusted_exponent();

    let plain = n.exponent <= BigInt::zero()
        && adjusted >= BigInt::from(LEAST_PLAIN_ADJUSTED_EXPONENT);

    if plain {
        // bounded by the adjusted exponent test above
        let exponent = n.exponent.to_i64().unwrap_or(0);
        return write_with_point(&digits, exponent, w);
    }

    let (first_digit, remaining_digits) = digits.split_at(1);
    w.write_str(first_digit)?;
    if !remaining_digits.is_empty() {
        w.write_char('.')?;
        w.write_str(remaining_digits)?;
    }
    if adjusted >= BigInt::zero() {
        write!(w, "E+{}", adjusted)
    } else {
        write!(w, "E{}", adjusted)
    }
}

fn write_plain_string<W: Write>(n: &Decimal, w: &mut W) -> fmt::Result {
    if !write_prefix(n, w)? {
        return Ok(());
    }

    let digits = n.coefficient.to_str_radix(10);

    if n.exponent >= BigInt::zero() {
        w.write_str(&digits)?;
        if !n.coefficient.is_zero() {
            for _ in 0..n.exponent.to_u64().unwrap_or(0) {
                w.write_char('0')?;
            }
        }
        return Ok(());
    }

    match n.exponent.to_i64() {
        Some(exponent) => write_with_point(&digits, exponent, w),
        None => Err(fmt::Error),
    }
}

/// Write `digits × 10^exponent` for a non-positive exponent
fn write_with_point<W: Write>(digits: &str, exponent: i64, w: &mut W) -> fmt::Result {
    if exponent == 0 {
        return w.write_str(digits);
    }

    let point = digits.len() as i64 + exponent;
    if point > 0 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        w.write_str(int_part)?;
        w.write_char('.')?;
        w.write_str(frac_part)
    } else {
        w.write_str("0.")?;
        for _ in 0..-point {
            w.write_char('0')?;
        }
        w.write_str(digits)
    }
}
