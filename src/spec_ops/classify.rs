//! Species predicates and number classes

use std::fmt;

use crate::error::ContextError;
use crate::{Context, DecimalValue, Species};

pub fn is_finite<D: DecimalValue>(value: &D) -> bool {
    value.is_finite()
}

pub fn is_infinite<D: DecimalValue>(value: &D) -> bool {
    value.is_infinite()
}

/// True for a quiet or signaling NaN; false for a missing value
pub fn is_nan<D: DecimalValue>(value: Option<&D>) -> bool {
    value.map_or(false, |v| v.is_nan())
}

pub fn is_qnan<D: DecimalValue>(value: &D) -> bool {
    value.is_quiet_nan()
}

/// True for a signaling NaN; false for a missing value
pub fn is_snan<D: DecimalValue>(value: Option<&D>) -> bool {
    value.map_or(false, |v| v.is_signaling_nan())
}

/// True if the sign bit is set, including -0, -∞ and negative NaNs
pub fn is_signed<D: DecimalValue>(value: &D) -> bool {
    value.is_negative()
}

/// True for a zero of either sign; false for a missing value
pub fn is_zero<D: DecimalValue>(value: Option<&D>) -> bool {
    value.map_or(false, |v| v.is_zero())
}

/// True if `value` is finite, nonzero and below the context's normal
/// range
///
/// The exponent compared against `e_min` is the adjusted exponent or the
/// raw exponent, as selected by [`Context::adjust_exponent`]. Without a
/// context or exponent range nothing is subnormal.
///
/// ```
/// # use bigdecimal_context::{spec_ops, Context, Decimal};
/// let ctx = Context::decimal32();
/// let tiny: Decimal = "1.5E-96".parse().unwrap();
/// assert!(spec_ops::is_subnormal(&tiny, Some(&ctx)));
/// assert!(!spec_ops::is_subnormal(&tiny, None));
///
/// let n: Decimal = "12E-96".parse().unwrap();
/// assert!(!spec_ops::is_subnormal(&n, Some(&ctx)));
/// let raw = ctx.with_adjust_exponent(false);
/// assert!(spec_ops::is_subnormal(&n, Some(&raw)));
/// ```
pub fn is_subnormal<D: DecimalValue>(value: &D, ctx: Option<&Context>) -> bool {
    let ctx = match ctx {
        Some(ctx) if ctx.has_exponent_range() => ctx,
        _ => return false,
    };
    if !value.is_finite() || value.is_zero() {
        return false;
    }
    &ctx.effective_exponent(value.exponent(), value.digit_count()) < ctx.e_min()
}

/// True if `value` is finite, nonzero and not subnormal
pub fn is_normal<D: DecimalValue>(value: &D, ctx: Option<&Context>) -> bool {
    value.is_finite() && !value.is_zero() && !is_subnormal(value, ctx)
}

/// The ten classes of the `class` operation
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum NumberClass {
    PositiveNormal = 0,
    NegativeNormal = 1,
    PositiveSubnormal = 2,
    NegativeSubnormal = 3,
    PositiveZero = 4,
    NegativeZero = 5,
    PositiveInfinity = 6,
    NegativeInfinity = 7,
    QuietNaN = 8,
    SignalingNaN = 9,
}

impl NumberClass {
    /// All classes, ordered by code
    pub const ALL: [NumberClass; 10] = [
        NumberClass::PositiveNormal,
        NumberClass::NegativeNormal,
        NumberClass::PositiveSubnormal,
        NumberClass::NegativeSubnormal,
        NumberClass::PositiveZero,
        NumberClass::NegativeZero,
        NumberClass::PositiveInfinity,
        NumberClass::NegativeInfinity,
        NumberClass::QuietNaN,
        NumberClass::SignalingNaN,
    ];

    /// Classify `value`; subnormal detection follows [`is_subnormal`]
    pub fn of<D: DecimalValue>(value: &D, ctx: Option<&Context>) -> NumberClass {
        use self::NumberClass::*;

        let negative = value.is_negative();
        let pick = |positive, negative_class| if negative { negative_class } else { positive };

        match value.species() {
            Species::QuietNaN => QuietNaN,
            Species::SignalingNaN => SignalingNaN,
            Species::Infinite => pick(PositiveInfinity, NegativeInfinity),
            Species::Finite if value.is_zero() => pick(PositiveZero, NegativeZero),
            Species::Finite if is_subnormal(value, ctx) => pick(PositiveSubnormal, NegativeSubnormal),
            Species::Finite => pick(PositiveNormal, NegativeNormal),
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Specification label, e.g. `"+Normal"` or `"sNaN"`
    pub fn label(self) -> &'static str {
        use self::NumberClass::*;

        match self {
            PositiveNormal => "+Normal",
            NegativeNormal => "-Normal",
            PositiveSubnormal => "+Subnormal",
            NegativeSubnormal => "-Subnormal",
            PositiveZero => "+Zero",
            NegativeZero => "-Zero",
            PositiveInfinity => "+Infinity",
            NegativeInfinity => "-Infinity",
            QuietNaN => "NaN",
            SignalingNaN => "sNaN",
        }
    }
}

impl fmt::Display for NumberClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<i32> for NumberClass {
    type Error = ContextError;

    fn try_from(code: i32) -> Result<NumberClass, ContextError> {
        usize::try_from(code)
            .ok()
            .and_then(|index| NumberClass::ALL.get(index).copied())
            .ok_or_else(|| ContextError::InvalidArgument(format!("number class code ({}) is not in 0..=9", code)))
    }
}

/// Class code (0 to 9) of `value`, see [`NumberClass`]
pub fn number_class<D: DecimalValue>(value: &D, ctx: Option<&Context>) -> i32 {
    NumberClass::of(value, ctx).code()
}

/// Label of a class code
///
/// ```
/// # use bigdecimal_context::spec_ops::number_class_string;
/// assert_eq!(number_class_string(3).unwrap(), "-Subnormal");
/// assert!(number_class_string(10).is_err());
/// ```
pub fn number_class_string(code: i32) -> Result<&'static str, ContextError> {
    NumberClass::try_from(code).map(NumberClass::label)
}
