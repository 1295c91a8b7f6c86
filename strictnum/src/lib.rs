// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! strictnum is a library of range-checked numeric types for Rust.
//!
//! # Introduction
//!
//! Machine integers silently wrap, saturate, or panic when an operation
//! leaves their domain, and integer division silently discards the
//! remainder. strictnum provides value types whose legal domain is a closed
//! interval `[MIN_VALUE, MAX_VALUE]`, enforced at construction and after
//! every arithmetic operation. An operation either produces a valid value or
//! returns an error that says what went wrong:
//!
//!  * a [`RangeError`] when a raw value is outside the range of its type;
//!  * an [`ArithmeticError`] when a result overflows or underflows the
//!    range, when a divisor is zero, or when an integer division is not
//!    exact.
//!
//! # Details
//!
//! Each concrete type is a generic engine instantiated with a range policy:
//!
//!  * [`NativeInt`] computes with checked `i64` arithmetic and serves
//!    [`Int8`], [`Int16`], [`Int32`], [`UInt8`], [`UInt16`], and [`UInt32`].
//!
//!  * [`BigInt`] computes exactly in [`Wide`], a sign-magnitude integer that
//!    holds every `i128` and every `u128`, and serves [`Int64`], [`UInt64`],
//!    [`Int128`], and [`UInt128`].
//!
//!  * [`BoundedFloat`] wraps an `f64` and serves [`Float32`] and [`Float64`].
//!    Construction is range-checked; arithmetic follows IEEE 754 but refuses
//!    to divide by zero.
//!
//! The engines share the [`BoundedNumeric`] contract, and the integer engines
//! additionally implement [`BoundedInteger`], so generic code behaves the
//! same whichever width it is given. Custom ranges are declared with
//! [`native_range!`], [`big_range!`], and [`float_range!`].
//!
//! # Examples
//!
//! ```
//! use strictnum::{ErrorKind, Int128, Int16, UInt8};
//!
//! let x = Int16::new(5)?;
//! assert_eq!(x.div(Int16::new(2)?).unwrap_err().kind(), ErrorKind::NonIntegralResult);
//!
//! let y = UInt8::new(5)?;
//! assert_eq!(y.sub(UInt8::new(10)?).unwrap_err().kind(), ErrorKind::Underflow);
//!
//! let z: Int128 = "170141183460469231731687303715884105727".parse()?;
//! assert_eq!(z.add(Int128::new(1)?).unwrap_err().kind(), ErrorKind::Overflow);
//!
//! # Ok::<_, strictnum::Error>(())
//! ```
//!
//! # Features
//!
//!  * `serde` implements `Serialize` and `Deserialize` for every bounded
//!    type. Deserialization validates the range.
//!  * `num-traits` implements `Bounded`, `ToPrimitive`, and `FromPrimitive`
//!    from the [num-traits] crate.
//!
//! [num-traits]: https://docs.rs/num-traits

#![deny(missing_debug_implementations, missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

mod big;
mod conv;
mod decimal;
mod error;
mod float;
mod native;
#[cfg(feature = "num-traits")]
mod num;
mod numeric;
mod ordered;
mod range;
#[cfg(feature = "serde")]
mod serialize;
mod wide;
mod widths;

pub use big::BigInt;
pub use error::{
    ArithmeticError, Error, ErrorKind, Operation, ParseError, RangeError, TryFromBoundedError,
};
pub use float::BoundedFloat;
pub use native::NativeInt;
pub use numeric::{BoundedInteger, BoundedNumeric};
pub use ordered::OrderedBounded;
pub use range::{BigRange, FloatRange, NativeRange};
pub use wide::Wide;
pub use widths::*;

#[doc(hidden)]
pub mod __private {
    pub use paste;
    pub use static_assertions;
}
