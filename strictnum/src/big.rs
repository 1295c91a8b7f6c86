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
use crate::range::{BigRange, Spill};
use crate::wide::Wide;

/// An integer confined to the range `R`, backed by a [`Wide`].
///
/// The big engine serves ranges whose bounds, or whose intermediate results,
/// do not fit in an `i64`. Exact results are computed in the domain of
/// `Wide`, which spans every `i128` and every `u128`, and are then checked
/// against the range. A result too large even for `Wide` is reported in the
/// direction its sign implies.
///
/// ```
/// use strictnum::{ErrorKind, UInt64};
///
/// let max = UInt64::new(u64::MAX)?;
/// assert_eq!(max.add(UInt64::new(1u8)?).unwrap_err().kind(), ErrorKind::Overflow);
/// assert_eq!(max.to_string(), "18446744073709551615");
/// # Ok::<_, strictnum::Error>(())
/// ```
pub struct BigInt<R> {
    value: Wide,
    _range: PhantomData<fn() -> R>,
}

impl<R: BigRange> BigInt<R> {
    /// The smallest value of the type.
    pub const MIN: BigInt<R> = BigInt::from_raw(R::MIN_VALUE);

    /// The largest value of the type.
    pub const MAX: BigInt<R> = BigInt::from_raw(R::MAX_VALUE);

    const fn from_raw(value: Wide) -> BigInt<R> {
        BigInt {
            value,
            _range: PhantomData,
        }
    }

    /// Constructs a value, failing if `value` is outside of the range.
    ///
    /// Any primitive integer, as well as a [`Wide`], is accepted.
    pub fn new<V>(value: V) -> Result<BigInt<R>, RangeError>
    where
        V: Into<Wide>,
    {
        let value = value.into();
        if value < R::MIN_VALUE || value > R::MAX_VALUE {
            return Err(Self::out_of_range(value));
        }
        Ok(BigInt::from_raw(value))
    }

    fn out_of_range<V: fmt::Display>(value: V) -> RangeError {
        RangeError::new(R::NAME, value, R::MIN_VALUE, R::MAX_VALUE)
    }

    /// Returns the value.
    pub fn value(self) -> Wide {
        self.value
    }

    /// Returns the value as a canonical decimal string, suitable for
    /// embedding in documents whose numbers cannot hold 64 or more bits.
    ///
    /// Parsing the string yields an equal value.
    pub fn to_decimal_string(self) -> String {
        self.value.to_string()
    }

    /// Reports whether the value is zero.
    pub fn is_zero(self) -> bool {
        self.value.is_zero()
    }

    /// Reports whether the value is less than zero.
    pub fn is_negative(self) -> bool {
        self.value.is_negative()
    }

    /// Adds `rhs` to `self`.
    pub fn add(self, rhs: BigInt<R>) -> Result<BigInt<R>, ArithmeticError> {
        self.settle(Operation::Add, rhs, self.value.exact_add(rhs.value))
    }

    /// Subtracts `rhs` from `self`.
    pub fn sub(self, rhs: BigInt<R>) -> Result<BigInt<R>, ArithmeticError> {
        self.settle(Operation::Subtract, rhs, self.value.exact_sub(rhs.value))
    }

    /// Multiplies `self` by `rhs`.
    pub fn mul(self, rhs: BigInt<R>) -> Result<BigInt<R>, ArithmeticError> {
        self.settle(Operation::Multiply, rhs, self.value.exact_mul(rhs.value))
    }

    /// Divides `self` by `rhs`.
    ///
    /// As with [`NativeInt::div`](crate::NativeInt::div), only exact division
    /// is supported.
    pub fn div(self, rhs: BigInt<R>) -> Result<BigInt<R>, ArithmeticError> {
        let (quotient, remainder) = self
            .value
            .div_rem(rhs.value)
            .ok_or_else(|| self.division_by_zero(Operation::Divide))?;
        if !remainder.is_zero() {
            return Err(ArithmeticError::non_integral(
                R::NAME,
                self.value,
                rhs.value,
                remainder,
            ));
        }
        self.settle(Operation::Divide, rhs, Ok(quotient))
    }

    /// Computes the remainder of the truncating division of `self` by `rhs`.
    ///
    /// The result has the sign of `self`.
    pub fn rem(self, rhs: BigInt<R>) -> Result<BigInt<R>, ArithmeticError> {
        let (_, remainder) = self
            .value
            .div_rem(rhs.value)
            .ok_or_else(|| self.division_by_zero(Operation::Remainder))?;
        self.settle(Operation::Remainder, rhs, Ok(remainder))
    }

    fn division_by_zero(self, op: Operation) -> ArithmeticError {
        ArithmeticError::division_by_zero(R::NAME, op, self.value)
    }

    fn settle(
        self,
        op: Operation,
        rhs: BigInt<R>,
        exact: Result<Wide, Spill>,
    ) -> Result<BigInt<R>, ArithmeticError> {
        let spill = match exact {
            Ok(n) if n > R::MAX_VALUE => Spill::Above,
            Ok(n) if n < R::MIN_VALUE => Spill::Below,
            Ok(n) => return Ok(BigInt::from_raw(n)),
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

impl<R> Clone for BigInt<R> {
    fn clone(&self) -> BigInt<R> {
        *self
    }
}

impl<R> Copy for BigInt<R> {}

impl<R> PartialEq for BigInt<R> {
    fn eq(&self, other: &BigInt<R>) -> bool {
        self.value == other.value
    }
}

impl<R> Eq for BigInt<R> {}

impl<R> PartialOrd for BigInt<R> {
    fn partial_cmp(&self, other: &BigInt<R>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R> Ord for BigInt<R> {
    fn cmp(&self, other: &BigInt<R>) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<R> Hash for BigInt<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<R: BigRange> Default for BigInt<R> {
    /// Returns zero if zero is in range, and otherwise the bound closest to
    /// zero.
    fn default() -> BigInt<R> {
        BigInt::from_raw(Wide::ZERO.clamp(R::MIN_VALUE, R::MAX_VALUE))
    }
}

impl<R: BigRange> fmt::Debug for BigInt<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", R::NAME, self.value)
    }
}

impl<R> fmt::Display for BigInt<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<R: BigRange> FromStr for BigInt<R> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<BigInt<R>, ParseError> {
        let c = decimal::canonicalize(s).ok_or_else(|| ParseError::syntax(R::NAME, s))?;
        match Wide::from_canonical(&c) {
            Ok(value) => Ok(BigInt::new(value)?),
            Err(_) => Err(Self::out_of_range(&c).into()),
        }
    }
}

impl<R: BigRange> BoundedNumeric for BigInt<R> {
    type Value = Wide;

    const TYPE_NAME: &'static str = R::NAME;
    const MIN_VALUE: Wide = R::MIN_VALUE;
    const MAX_VALUE: Wide = R::MAX_VALUE;

    fn from_value(value: Wide) -> Result<BigInt<R>, RangeError> {
        BigInt::new(value)
    }

    fn value(self) -> Wide {
        self.value
    }

    fn minimum() -> BigInt<R> {
        BigInt::MIN
    }

    fn maximum() -> BigInt<R> {
        BigInt::MAX
    }

    fn add(self, rhs: BigInt<R>) -> Result<BigInt<R>, ArithmeticError> {
        BigInt::add(self, rhs)
    }

    fn sub(self, rhs: BigInt<R>) -> Result<BigInt<R>, ArithmeticError> {
        BigInt::sub(self, rhs)
    }

    fn mul(self, rhs: BigInt<R>) -> Result<BigInt<R>, ArithmeticError> {
        BigInt::mul(self, rhs)
    }

    fn div(self, rhs: BigInt<R>) -> Result<BigInt<R>, ArithmeticError> {
        BigInt::div(self, rhs)
    }

    fn rem(self, rhs: BigInt<R>) -> Result<BigInt<R>, ArithmeticError> {
        BigInt::rem(self, rhs)
    }
}

impl<R: BigRange> BoundedInteger for BigInt<R> {
    fn is_zero(self) -> bool {
        BigInt::is_zero(self)
    }
}
