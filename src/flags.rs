//! Condition flags and the signaling chokepoint
//!

use bitflags::bitflags;

use crate::error::TrapError;
use crate::Context;

/// A set of exceptional conditions raised by an operation
///
/// Used both as the flags register of a [`Context`] and as its trap mask.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Flags(u32);

bitflags! {
    impl Flags: u32 {
        /// The result was rounded and digits that were discarded were
        /// not all zero.
        const INEXACT = 0x1;
        /// The result was rounded (digits were discarded, possibly all
        /// zero).
        const ROUNDED = 0x2;
        /// The adjusted exponent of the result, before rounding, was
        /// less than the minimum exponent.
        const SUBNORMAL = 0x4;
        /// The result was both subnormal and inexact.
        const UNDERFLOW = 0x8;
        /// The exponent of the result, after rounding, was greater than
        /// the maximum exponent.
        const OVERFLOW = 0x10;
        /// The exponent of the result was altered to fit the exponent
        /// range.
        const CLAMPED = 0x20;
        /// The operation has no defined result (signaling NaN operand,
        /// ∞ − ∞, 0/0, an operand that is not a logical operand, ...).
        const INVALID = 0x40;
        /// A finite nonzero number was divided by zero.
        const DIVIDE_BY_ZERO = 0x80;
    }
}

/// Order in which trapped conditions are reported
const TRAP_PRIORITY: [Flags; 8] = [
    Flags::INVALID,
    Flags::DIVIDE_BY_ZERO,
    Flags::OVERFLOW,
    Flags::UNDERFLOW,
    Flags::SUBNORMAL,
    Flags::INEXACT,
    Flags::ROUNDED,
    Flags::CLAMPED,
];

impl Flags {
    /// The single most severe condition in this set
    pub fn most_severe(&self) -> Option<Flags> {
        TRAP_PRIORITY.iter().copied().find(|flag| self.contains(*flag))
    }
}

/// Record `conditions` in the context and decide between returning
/// `result` and trapping
///
/// Flags are always recorded first (when the context tracks them). If
/// any of the conditions is in the context's trap mask the operation
/// fails with a [`TrapError`] carrying the most severe trapped condition.
/// A missing context records nothing and never traps.
pub(crate) fn signal<D>(
    ctx: Option<&mut Context>,
    conditions: Flags,
    result: D,
) -> Result<D, TrapError<D>> {
    let ctx = match ctx {
        Some(ctx) if !conditions.is_empty() => ctx,
        _ => return Ok(result),
    };

    ctx.record_flags(conditions);

    let trapped = conditions & ctx.traps();
    match trapped.most_severe() {
        None => Ok(result),
        Some(flag) => {
            tracing::debug!(?flag, ?conditions, "decimal condition trapped");
            Err(TrapError {
                flag: flag,
                errors: conditions,
                context: ctx.clone(),
                result: result,
            })
        }
    }
}
