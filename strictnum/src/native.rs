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
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::decimal;
use crate::error::{ArithmeticError, Operation, ParseError, RangeError};
use crate::numeric::{BoundedInteger, BoundedNumeric};
use crate::range::{NativeRange, Spill};
use crate::wide::Wide;

/// An integer confined to the range `R`, backed by an `i64`.
///
/// Intermediate results are computed with checked `i64` arithmetic, so any
/// range whose bounds fit in an `i64` can use this engine. Each operation
/// either produces a value inside `[R::MIN_VALUE, R::MAX_VALUE]` or fails;
/// nothing wraps or saturates.
///
/// Concrete types are declared with [`native_range!`](crate::native_range),
/// e.g. [`Int8`](crate::Int8) or [`UInt32`](crate::UInt32).
///
/// ```
/// use strictnum::{ErrorKind, Int8};
///
/// let a = Int8::new(100)?;
/// let b = Int8::new(27)?;
/// assert_eq!(a.add(b)?, Int8::MAX);
/// assert_eq!(a.add(Int8::new(28)?).unwrap_err().kind(), ErrorKind::Overflow);
/// assert_eq!(Int8::new(128).unwrap_err().kind(), ErrorKind::Range);
/// # Ok::<_, strictnum::Error>(())
/// ```
pub struct NativeInt<R> {
    value: i64,
    _range: PhantomData<fn() -> R>,
}

impl<R: NativeRange> NativeInt<R> {
    /// The smallest value of the type.
    pub const MIN: NativeInt<R> = NativeInt::from_raw(R::MIN_VALUE);

    /// The largest value of the type.
    pub const MAX: NativeInt<R> = NativeInt::from_raw(R::MAX_VALUE);

    const fn from_raw(value: i64) -> NativeInt<R> {
        NativeInt {
            value,
            _range: PhantomData,
        }
    }

    /// Constructs a value, failing if `value` is outside of the range.
    pub fn new(value: i64) -> Result<NativeInt<R>, RangeError> {
        if value < R::MIN_VALUE || value > R::MAX_VALUE {
            return Err(Self::out_of_range(value));
        }
        Ok(NativeInt::from_raw(value))
    }

    fn out_of_range<V: fmt::Display>(value: V) -> RangeError {
        RangeError::new(R::NAME, value, R::MIN_VALUE, R::MAX_VALUE)
    }

    /// Returns the value as an `i64`.
    pub fn value(self) -> i64 {
        self.value
    }

    /// Reports whether the value is zero.
    pub fn is_zero(self) -> bool {
        self.value == 0
    }

    /// Reports whether the value is less than zero.
    pub fn is_negative(self) -> bool {
        self.value < 0
    }

    /// Adds `rhs` to `self`.
    pub fn add(self, rhs: NativeInt<R>) -> Result<NativeInt<R>, ArithmeticError> {
        let exact = self
            .value
            .checked_add(rhs.value)
            .ok_or_else(|| Spill::of_sign(self.value < 0));
        self.settle(Operation::Add, rhs, exact)
    }

    /// Subtracts `rhs` from `self`.
    pub fn sub(self, rhs: NativeInt<R>) -> Result<NativeInt<R>, ArithmeticError> {
        // An i64 subtraction only overflows when the operands have opposite
        // signs, in which case the sign of `self` is the sign of the result.
        let exact = self
            .value
            .checked_sub(rhs.value)
            .ok_or_else(|| Spill::of_sign(self.value < 0));
        self.settle(Operation::Subtract, rhs, exact)
    }

    /// Multiplies `self` by `rhs`.
    pub fn mul(self, rhs: NativeInt<R>) -> Result<NativeInt<R>, ArithmeticError> {
        let exact = self
            .value
            .checked_mul(rhs.value)
            .ok_or_else(|| Spill::of_sign((self.value < 0) != (rhs.value < 0)));
        self.settle(Operation::Multiply, rhs, exact)
    }

    /// Divides `self` by `rhs`.
    ///
    /// Only exact division is supported: if `rhs` does not evenly divide
    /// `self`, the operation fails with
    /// [`NonIntegralResult`](ArithmeticError::NonIntegralResult) rather than
    /// truncating.
    pub fn div(self, rhs: NativeInt<R>) -> Result<NativeInt<R>, ArithmeticError> {
        if rhs.value == 0 {
            return Err(self.division_by_zero(Operation::Divide));
        }
        // `checked_rem` is `None` only for `i64::MIN % -1`, which is zero.
        let remainder = self.value.checked_rem(rhs.value).unwrap_or(0);
        if remainder != 0 {
            return Err(ArithmeticError::non_integral(
                R::NAME,
                self.value,
                rhs.value,
                remainder,
            ));
        }
        let exact = self.value.checked_div(rhs.value).ok_or(Spill::Above);
        self.settle(Operation::Divide, rhs, exact)
    }

    /// Computes the remainder of the truncating division of `self` by `rhs`.
    ///
    /// The result has the sign of `self`.
    pub fn rem(self, rhs: NativeInt<R>) -> Result<NativeInt<R>, ArithmeticError> {
        if rhs.value == 0 {
            return Err(self.division_by_zero(Operation::Remainder));
        }
        let exact = Ok(self.value.checked_rem(rhs.value).unwrap_or(0));
        self.settle(Operation::Remainder, rhs, exact)
    }

    fn division_by_zero(self, op: Operation) -> ArithmeticError {
        ArithmeticError::division_by_zero(R::NAME, op, self.value)
    }

    /// Validates the exact result of `self op rhs` against the range.
    fn settle(
        self,
        op: Operation,
        rhs: NativeInt<R>,
        exact: Result<i64, Spill>,
    ) -> Result<NativeInt<R>, ArithmeticError> {
        let spill = match exact {
            Ok(n) if n > R::MAX_VALUE => Spill::Above,
            Ok(n) if n < R::MIN_VALUE => Spill::Below,
            Ok(n) => return Ok(NativeInt::from_raw(n)),
            Err(spill) => spill,
        };
        Err(ArithmeticError::spilled(
            R::NAME,
            op,
            self.value,
            rhs.value,
            spill,
            R::MIN_VALUE,
            R::MAX_VALUE,
        ))
    }
}

impl<R> Clone for NativeInt<R> {
    fn clone(&self) -> NativeInt<R> {
        *self
    }
}

impl<R> Copy for NativeInt<R> {}

impl<R> PartialEq for NativeInt<R> {
    fn eq(&self, other: &NativeInt<R>) -> bool {
        self.value == other.value
    }
}

impl<R> Eq for NativeInt<R> {}

impl<R> PartialOrd for NativeInt<R> {
    fn partial_cmp(&self, other: &NativeInt<R>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R> Ord for NativeInt<R> {
    fn cmp(&self, other: &NativeInt<R>) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<R> Hash for NativeInt<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<R: NativeRange> Default for NativeInt<R> {
    /// Returns zero if zero is in range, and otherwise the bound closest to
    /// zero.
    fn default() -> NativeInt<R> {
        NativeInt::from_raw(0_i64.clamp(R::MIN_VALUE, R::MAX_VALUE))
    }
}

impl<R: NativeRange> fmt::Debug for NativeInt<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", R::NAME, self.value)
    }
}

impl<R> fmt::Display for NativeInt<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<R: NativeRange> FromStr for NativeInt<R> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<NativeInt<R>, ParseError> {
        let c = decimal::canonicalize(s).ok_or_else(|| ParseError::syntax(R::NAME, s))?;
        match Wide::from_canonical(&c).ok().and_then(Wide::to_i64) {
            Some(value) => Ok(NativeInt::new(value)?),
            None => Err(Self::out_of_range(&c).into()),
        }
    }
}

impl<R: NativeRange> BoundedNumeric for NativeInt<R> {
    type Value = i64;

    const TYPE_NAME: &'static str = R::NAME;
    const MIN_VALUE: i64 = R::MIN_VALUE;
    const MAX_VALUE: i64 = R::MAX_VALUE;

    fn from_value(value: i64) -> Result<NativeInt<R>, RangeError> {
        NativeInt::new(value)
    }

    fn value(self) -> i64 {
        self.value
    }

    fn minimum() -> NativeInt<R> {
        NativeInt::MIN
    }

    fn maximum() -> NativeInt<R> {
        NativeInt::MAX
    }

    fn add(self, rhs: NativeInt<R>) -> Result<NativeInt<R>, ArithmeticError> {
        NativeInt::add(self, rhs)
    }

    fn sub(self, rhs: NativeInt<R>) -> Result<NativeInt<R>, ArithmeticError> {
        NativeInt::sub(self, rhs)
    }

    fn mul(self, rhs: NativeInt<R>) -> Result<NativeInt<R>, ArithmeticError> {
        NativeInt::mul(self, rhs)
    }

    fn div(self, rhs: NativeInt<R>) -> Result<NativeInt<R>, ArithmeticError> {
        NativeInt::div(self, rhs)
    }

    fn rem(self, rhs: NativeInt<R>) -> Result<NativeInt<R>, ArithmeticError> {
        NativeInt::rem(self, rhs)
    }
}

impl<R: NativeRange> BoundedInteger for NativeInt<R> {
    fn is_zero(self) -> bool {
        NativeInt::is_zero(self)
    }
}
