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

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::{ArithmeticError, Error, ParseError, RangeError};

/// The operations shared by every bounded numeric type.
///
/// Generic code written against `BoundedNumeric` behaves identically whether
/// the concrete type is backed by the native engine ([`NativeInt`]), the big
/// engine ([`BigInt`]), or the float engine ([`BoundedFloat`]). Operands must
/// have the same type; combining two different widths is a compile-time
/// error.
///
/// ```
/// use strictnum::{BoundedNumeric, ErrorKind, Int128, Int8};
///
/// fn double<T: BoundedNumeric>(x: T) -> Result<T, strictnum::ArithmeticError> {
///     x.add(x)
/// }
///
/// assert_eq!(double(Int8::new(50)?)?, Int8::new(100)?);
/// assert_eq!(double(Int8::new(100)?).unwrap_err().kind(), ErrorKind::Overflow);
/// assert_eq!(double(Int128::new(1u8)?)?, Int128::new(2u8)?);
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
///
/// [`NativeInt`]: crate::NativeInt
/// [`BigInt`]: crate::BigInt
/// [`BoundedFloat`]: crate::BoundedFloat
pub trait BoundedNumeric:
    Copy
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ParseError>
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
{
    /// The primitive representation of a value.
    type Value: Copy + fmt::Debug + fmt::Display + PartialOrd;

    /// The name of the type, as it appears in error messages.
    const TYPE_NAME: &'static str;

    /// The smallest legal value, inclusive.
    const MIN_VALUE: Self::Value;

    /// The largest legal value, inclusive.
    const MAX_VALUE: Self::Value;

    /// Constructs a bounded value, failing if `value` is outside of
    /// `[MIN_VALUE, MAX_VALUE]`.
    fn from_value(value: Self::Value) -> Result<Self, RangeError>;

    /// Returns the primitive representation of the value.
    fn value(self) -> Self::Value;

    /// Returns the smallest value of the type.
    fn minimum() -> Self;

    /// Returns the largest value of the type.
    fn maximum() -> Self;

    /// Adds `rhs` to `self`.
    fn add(self, rhs: Self) -> Result<Self, ArithmeticError>;

    /// Subtracts `rhs` from `self`.
    fn sub(self, rhs: Self) -> Result<Self, ArithmeticError>;

    /// Multiplies `self` by `rhs`.
    fn mul(self, rhs: Self) -> Result<Self, ArithmeticError>;

    /// Divides `self` by `rhs`.
    ///
    /// Integer types only perform exact division.
    fn div(self, rhs: Self) -> Result<Self, ArithmeticError>;

    /// Computes the remainder of dividing `self` by `rhs`.
    fn rem(self, rhs: Self) -> Result<Self, ArithmeticError>;

    /// Reports whether `self` and `other` hold the same value.
    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Reports whether `self` is strictly greater than `other`.
    fn is_greater_than(&self, other: &Self) -> bool {
        self > other
    }

    /// Reports whether `self` is strictly less than `other`.
    fn is_less_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Adds up the values produced by `iter`, failing at the first operation
    /// that fails.
    ///
    /// The sum of an empty iterator is zero, which is itself subject to the
    /// range of the type.
    fn try_sum<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Self>,
    {
        try_fold(iter, "0", Self::add)
    }

    /// Multiplies the values produced by `iter`, failing at the first
    /// operation that fails.
    ///
    /// The product of an empty iterator is one, which is itself subject to the
    /// range of the type.
    fn try_product<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Self>,
    {
        try_fold(iter, "1", Self::mul)
    }
}

fn try_fold<T, I, F>(iter: I, identity: &str, f: F) -> Result<T, Error>
where
    T: BoundedNumeric,
    I: IntoIterator<Item = T>,
    F: Fn(T, T) -> Result<T, ArithmeticError>,
{
    let mut iter = iter.into_iter();
    let mut acc = match iter.next() {
        Some(first) => first,
        None => return Ok(identity.parse()?),
    };
    for n in iter {
        acc = f(acc, n)?;
    }
    Ok(acc)
}

/// The operations shared by bounded integer types.
///
/// Integers, unlike floats, have a total order.
pub trait BoundedInteger: BoundedNumeric + Eq + Ord + Hash {
    /// Determines the ordering of `self` relative to `other`.
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Reports whether the value is zero.
    fn is_zero(self) -> bool;
}
