//! Specification-level operations on decimal values
//!
//! Classification, total ordering, sign copies, exponent queries and the
//! digit-wise logical operations of the General Decimal Arithmetic
//! specification. Everything here is generic over [`DecimalValue`] and
//! consults an optional [`Context`]:
//!
//! * operations that only read the context take `Option<&Context>`,
//! * operations that may signal a condition take `Option<&mut Context>`
//!   and return `Err(TrapError)` when the condition is trapped.
//!
//! Without a context nothing is recorded and nothing traps.
//!
//! ```
//! # use bigdecimal_context::{spec_ops, Context, Decimal, Flags};
//! let mut ctx = Context::decimal64().with_blank_flags();
//! let a: Decimal = "1101".parse().unwrap();
//! let b: Decimal = "111".parse().unwrap();
//! let x = spec_ops::logical_xor(&a, &b, Some(&mut ctx)).unwrap();
//! assert_eq!(x.to_string(), "1010");
//!
//! let bad: Decimal = "12".parse().unwrap();
//! let nan = spec_ops::logical_and(&a, &bad, Some(&mut ctx)).unwrap();
//! assert!(spec_ops::is_qnan(&nan));
//! assert_eq!(ctx.flags(), Flags::INVALID);
//! ```

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::TrapError;
use crate::flags::signal;
use crate::{Context, DecimalValue, Flags};

mod classify;
mod copy;
mod exponent;
mod logical;

pub use self::classify::{
    is_finite, is_infinite, is_nan, is_normal, is_qnan, is_signed, is_snan, is_subnormal,
    is_zero, number_class, number_class_string, NumberClass,
};
pub use self::copy::{
    canonical, compare_total, compare_total_magnitude, copy, copy_abs, copy_negate, copy_sign,
    same_quantum,
};
pub use self::exponent::{logb, scaleb};
pub use self::logical::{logical_and, logical_invert, logical_or, logical_xor};

/// Signal an invalid operation
///
/// Records Invalid in the context's flags (if enabled), then either
/// traps (if Invalid is in the trap mask) or returns `fallback`.
pub fn invalid_operation<D: DecimalValue>(fallback: D, ctx: Option<&mut Context>) -> Result<D, TrapError<D>> {
    signal(ctx, Flags::INVALID, fallback)
}

/// Positive quiet NaN without payload, the usual fallback result
fn quiet_nan<D: DecimalValue>() -> D {
    D::nan(false, BigUint::zero(), false)
}
