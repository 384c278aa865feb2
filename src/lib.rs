// Copyright 2016 Adam Sunderland
//           2016-2023 Andrew Kubera
//           2017 Ruben De Smet
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decimal rounding contexts and specification operations
//!
//! A [`Context`] describes how results of decimal arithmetic are rounded:
//! a precision (in digits or bits), a [`RoundingMode`], an optional
//! exponent range, the subnormal/clamping behavior of the IEEE 754
//! interchange formats, and a register of condition [`Flags`] with a
//! matching trap mask. Operations record the conditions they raise in
//! the register and fail with a [`TrapError`] when one of them is
//! trapped.
//!
//! [`Decimal`] is an arbitrary precision decimal with signed zeros,
//! infinities and NaNs that rounds, adds and divides under a context.
//! The [`spec_ops`] module implements the classification, total
//! ordering, exponent and logical operations of the General Decimal
//! Arithmetic specification for any type implementing [`DecimalValue`].
//!
//! # Example
//!
//! ```
//! use bigdecimal_context::{spec_ops, Context, Decimal, Flags};
//!
//! let mut ctx = Context::decimal32().with_blank_flags();
//!
//! let third = Decimal::from(1).divide(&Decimal::from(3), &mut ctx).unwrap();
//! assert_eq!(third.to_string(), "0.3333333");
//! assert_eq!(ctx.flags(), Flags::INEXACT | Flags::ROUNDED);
//!
//! let tiny: Decimal = "1E-100".parse().unwrap();
//! assert_eq!(spec_ops::number_class(&tiny, Some(&ctx)), 2);
//! assert_eq!(spec_ops::number_class_string(2).unwrap(), "+Subnormal");
//! ```
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(test)]
extern crate paste;

mod arithmetic;

// condition flags and the signal/trap routine
mod flags;
pub use flags::Flags;

mod error;
pub use error::{ContextError, ParseDecimalError, TrapError};

pub mod rounding;
pub use rounding::RoundingMode;

// Mathematical context
mod context;
pub use context::{Context, MAX_EXPONENT_BOUND_BITS};

mod value;
pub use value::{DecimalValue, Species};

mod decimal;
pub use decimal::Decimal;

// PartialEq, PartialOrd, total ordering
mod impl_cmp;

// Display, Debug
mod impl_fmt;

mod parsing;
mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;

pub mod spec_ops;
pub use spec_ops::NumberClass;


#[cfg(test)]
extern crate proptest;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
