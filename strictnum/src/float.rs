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
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::{ArithmeticError, Operation, ParseError, RangeError};
use crate::numeric::BoundedNumeric;
use crate::range::FloatRange;

/// A binary floating-point number whose construction is confined to the
/// range `R`, backed by an `f64`.
///
/// Construction rejects infinities and finite values outside of
/// `[R::MIN_VALUE, R::MAX_VALUE]`, but accepts NaN. Arithmetic follows
/// IEEE 754 except that dividing by zero, or taking the remainder modulo zero,
/// fails with [`DivisionByZero`](ArithmeticError::DivisionByZero).
///
/// The results of [`add`](BoundedFloat::add), [`sub`](BoundedFloat::sub), and
/// [`mul`](BoundedFloat::mul) are not checked against the range, and so may be
/// out of range or infinite. Use [`is_in_range`](BoundedFloat::is_in_range)
/// or [`BoundedFloat::new`] to revalidate when that matters.
///
/// ```
/// use strictnum::{ErrorKind, Float32};
///
/// let x = Float32::new(1.5)?;
/// assert_eq!(x.mul(Float32::new(2.0)?)?.value(), 3.0);
/// assert!(Float32::new(f64::NAN)?.is_nan());
/// assert_eq!(Float32::new(f64::INFINITY).unwrap_err().kind(), ErrorKind::Range);
/// assert_eq!(
///     x.div(Float32::new(0.0)?).unwrap_err().kind(),
///     ErrorKind::DivisionByZero,
/// );
/// # Ok::<_, strictnum::Error>(())
/// ```
pub struct BoundedFloat<R> {
    value: f64,
    _range: PhantomData<fn() -> R>,
}

impl<R: FloatRange> BoundedFloat<R> {
    /// The smallest finite value of the type.
    pub const MIN: BoundedFloat<R> = BoundedFloat::from_raw(R::MIN_VALUE);

    /// The largest finite value of the type.
    pub const MAX: BoundedFloat<R> = BoundedFloat::from_raw(R::MAX_VALUE);

    /// Not a number.
    pub const NAN: BoundedFloat<R> = BoundedFloat::from_raw(f64::NAN);

    const fn from_raw(value: f64) -> BoundedFloat<R> {
        BoundedFloat {
            value,
            _range: PhantomData,
        }
    }

    /// Constructs a value, failing if `value` is infinite or is a finite
    /// number outside of the range. NaN is accepted.
    pub fn new(value: f64) -> Result<BoundedFloat<R>, RangeError> {
        if value.is_nan() {
            return Ok(BoundedFloat::from_raw(value));
        }
        if value.is_infinite() || value < R::MIN_VALUE || value > R::MAX_VALUE {
            return Err(Self::out_of_range(value));
        }
        Ok(BoundedFloat::from_raw(value))
    }

    fn out_of_range<V: fmt::Display>(value: V) -> RangeError {
        RangeError::new(R::NAME, value, R::MIN_VALUE, R::MAX_VALUE)
    }

    /// Returns the value as an `f64`.
    pub fn value(self) -> f64 {
        self.value
    }

    /// Reports whether the value is NaN.
    pub fn is_nan(self) -> bool {
        self.value.is_nan()
    }

    /// Reports whether the value is zero of either sign.
    pub fn is_zero(self) -> bool {
        self.value == 0.0
    }

    /// Reports whether the value is NaN or a finite number within the range.
    ///
    /// This is the condition that [`BoundedFloat::new`] enforces. Values
    /// produced by arithmetic need not satisfy it.
    pub fn is_in_range(self) -> bool {
        self.value.is_nan() || (R::MIN_VALUE <= self.value && self.value <= R::MAX_VALUE)
    }

    /// Adds `rhs` to `self`.
    pub fn add(self, rhs: BoundedFloat<R>) -> Result<BoundedFloat<R>, ArithmeticError> {
        Ok(BoundedFloat::from_raw(self.value + rhs.value))
    }

    /// Subtracts `rhs` from `self`.
    pub fn sub(self, rhs: BoundedFloat<R>) -> Result<BoundedFloat<R>, ArithmeticError> {
        Ok(BoundedFloat::from_raw(self.value - rhs.value))
    }

    /// Multiplies `self` by `rhs`.
    pub fn mul(self, rhs: BoundedFloat<R>) -> Result<BoundedFloat<R>, ArithmeticError> {
        Ok(BoundedFloat::from_raw(self.value * rhs.value))
    }

    /// Divides `self` by `rhs`, failing if `rhs` is zero of either sign.
    pub fn div(self, rhs: BoundedFloat<R>) -> Result<BoundedFloat<R>, ArithmeticError> {
        if rhs.is_zero() {
            return Err(self.division_by_zero(Operation::Divide));
        }
        Ok(BoundedFloat::from_raw(self.value / rhs.value))
    }

    /// Computes the remainder of the truncating division of `self` by
    /// `rhs`, failing if `rhs` is zero of either sign.
    pub fn rem(self, rhs: BoundedFloat<R>) -> Result<BoundedFloat<R>, ArithmeticError> {
        if rhs.is_zero() {
            return Err(self.division_by_zero(Operation::Remainder));
        }
        Ok(BoundedFloat::from_raw(self.value % rhs.value))
    }

    fn division_by_zero(self, op: Operation) -> ArithmeticError {
        ArithmeticError::division_by_zero(R::NAME, op, self.value)
    }
}

impl<R> Clone for BoundedFloat<R> {
    fn clone(&self) -> BoundedFloat<R> {
        *self
    }
}

impl<R> Copy for BoundedFloat<R> {}

impl<R> PartialEq for BoundedFloat<R> {
    fn eq(&self, other: &BoundedFloat<R>) -> bool {
        self.value == other.value
    }
}

impl<R> PartialOrd for BoundedFloat<R> {
    fn partial_cmp(&self, other: &BoundedFloat<R>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<R: FloatRange> Default for BoundedFloat<R> {
    /// Returns zero if zero is in range, and otherwise the bound closest to
    /// zero.
    fn default() -> BoundedFloat<R> {
        BoundedFloat::from_raw(0.0_f64.clamp(R::MIN_VALUE, R::MAX_VALUE))
    }
}

impl<R: FloatRange> fmt::Debug for BoundedFloat<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({:?})", R::NAME, self.value)
    }
}

impl<R> fmt::Display for BoundedFloat<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<R: FloatRange> FromStr for BoundedFloat<R> {
    type Err = ParseError;

    /// Parses any string accepted by `f64`'s `FromStr` implementation, then
    /// validates the result as [`BoundedFloat::new`] does.
    fn from_str(s: &str) -> Result<BoundedFloat<R>, ParseError> {
        let value = s
            .parse::<f64>()
            .map_err(|_| ParseError::syntax(R::NAME, s))?;
        Ok(BoundedFloat::new(value)?)
    }
}

impl<R: FloatRange> BoundedNumeric for BoundedFloat<R> {
    type Value = f64;

    const TYPE_NAME: &'static str = R::NAME;
    const MIN_VALUE: f64 = R::MIN_VALUE;
    const MAX_VALUE: f64 = R::MAX_VALUE;

    fn from_value(value: f64) -> Result<BoundedFloat<R>, RangeError> {
        BoundedFloat::new(value)
    }

    fn value(self) -> f64 {
        self.value
    }

    fn minimum() -> BoundedFloat<R> {
        BoundedFloat::MIN
    }

    fn maximum() -> BoundedFloat<R> {
        BoundedFloat::MAX
    }

    fn add(self, rhs: BoundedFloat<R>) -> Result<BoundedFloat<R>, ArithmeticError> {
        BoundedFloat::add(self, rhs)
    }

    fn sub(self, rhs: BoundedFloat<R>) -> Result<BoundedFloat<R>, ArithmeticError> {
        BoundedFloat::sub(self, rhs)
    }

    fn mul(self, rhs: BoundedFloat<R>) -> Result<BoundedFloat<R>, ArithmeticError> {
        BoundedFloat::mul(self, rhs)
    }

    fn div(self, rhs: BoundedFloat<R>) -> Result<BoundedFloat<R>, ArithmeticError> {
        BoundedFloat::div(self, rhs)
    }

    fn rem(self, rhs: BoundedFloat<R>) -> Result<BoundedFloat<R>, ArithmeticError> {
        BoundedFloat::rem(self, rhs)
    }
}
