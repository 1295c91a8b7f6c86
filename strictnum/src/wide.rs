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
use std::ops::Neg;
use std::str::FromStr;

use crate::decimal::{self, Canonical};
use crate::error::{ParseError, RangeError};
use crate::range::Spill;

/// A sign-magnitude integer wide enough to hold every `i128` and every
/// `u128`.
///
/// `Wide` is the value representation of the big engine,
/// [`BigInt`](crate::BigInt). Its domain is `[-u128::MAX, u128::MAX]`, which
/// strictly contains the range of every bounded integer type, so the exact
/// result of an operation on two in-range values is either representable or
/// known to lie beyond every bound in a known direction.
///
/// Zero is never negative.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wide {
    negative: bool,
    magnitude: u128,
}

impl Wide {
    /// The value zero.
    pub const ZERO: Wide = Wide::from_u128(0);

    /// The value one.
    pub const ONE: Wide = Wide::from_u128(1);

    /// The smallest representable value, `-u128::MAX`.
    pub const MIN: Wide = Wide {
        negative: true,
        magnitude: u128::MAX,
    };

    /// The largest representable value, `u128::MAX`.
    pub const MAX: Wide = Wide::from_u128(u128::MAX);

    /// Creates a number from an `i64`.
    pub const fn from_i64(n: i64) -> Wide {
        Wide::with_sign(n < 0, n.unsigned_abs() as u128)
    }

    /// Creates a number from a `u64`.
    pub const fn from_u64(n: u64) -> Wide {
        Wide::with_sign(false, n as u128)
    }

    /// Creates a number from an `i128`.
    pub const fn from_i128(n: i128) -> Wide {
        Wide::with_sign(n < 0, n.unsigned_abs())
    }

    /// Creates a number from a `u128`.
    pub const fn from_u128(n: u128) -> Wide {
        Wide::with_sign(false, n)
    }

    const fn with_sign(negative: bool, magnitude: u128) -> Wide {
        Wide {
            negative: negative && magnitude != 0,
            magnitude,
        }
    }

    /// Reports whether the number is less than zero.
    pub const fn is_negative(self) -> bool {
        self.negative
    }

    /// Reports whether the number is zero.
    pub const fn is_zero(self) -> bool {
        self.magnitude == 0
    }

    /// Returns the absolute value of the number.
    pub const fn magnitude(self) -> u128 {
        self.magnitude
    }

    /// Reports whether `self <= other`.
    ///
    /// Equivalent to the `PartialOrd` comparison, but usable in constant
    /// expressions.
    pub const fn is_at_most(self, other: Wide) -> bool {
        match (self.negative, other.negative) {
            (true, false) => true,
            (false, true) => false,
            (false, false) => self.magnitude <= other.magnitude,
            (true, true) => self.magnitude >= other.magnitude,
        }
    }

    /// Converts the number to an `i64`, if it fits.
    pub fn to_i64(self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }

    /// Converts the number to a `u64`, if it fits.
    pub fn to_u64(self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    /// Converts the number to an `i128`, if it fits.
    pub fn to_i128(self) -> Option<i128> {
        if !self.negative {
            i128::try_from(self.magnitude).ok()
        } else if self.magnitude <= i128::MIN.unsigned_abs() {
            // Also correct for a magnitude of 2^127, which wraps to i128::MIN.
            Some((self.magnitude as i128).wrapping_neg())
        } else {
            None
        }
    }

    /// Converts the number to a `u128`, if it fits.
    pub fn to_u128(self) -> Option<u128> {
        if self.negative {
            None
        } else {
            Some(self.magnitude)
        }
    }

    /// Adds `rhs` to the number, returning `None` if the result leaves the
    /// domain of `Wide`.
    pub fn checked_add(self, rhs: Wide) -> Option<Wide> {
        self.exact_add(rhs).ok()
    }

    /// Subtracts `rhs` from the number, returning `None` if the result leaves
    /// the domain of `Wide`.
    pub fn checked_sub(self, rhs: Wide) -> Option<Wide> {
        self.exact_sub(rhs).ok()
    }

    /// Multiplies the number by `rhs`, returning `None` if the result leaves
    /// the domain of `Wide`.
    pub fn checked_mul(self, rhs: Wide) -> Option<Wide> {
        self.exact_mul(rhs).ok()
    }

    /// Divides the number by `rhs`, returning the quotient truncated towards
    /// zero and the remainder, which has the sign of the dividend.
    ///
    /// Returns `None` if `rhs` is zero.
    pub fn div_rem(self, rhs: Wide) -> Option<(Wide, Wide)> {
        if rhs.is_zero() {
            return None;
        }
        let quotient = Wide::with_sign(
            self.negative != rhs.negative,
            self.magnitude / rhs.magnitude,
        );
        let remainder = Wide::with_sign(self.negative, self.magnitude % rhs.magnitude);
        Some((quotient, remainder))
    }

    pub(crate) fn exact_add(self, rhs: Wide) -> Result<Wide, Spill> {
        if self.negative == rhs.negative {
            match self.magnitude.checked_add(rhs.magnitude) {
                Some(magnitude) => Ok(Wide::with_sign(self.negative, magnitude)),
                None => Err(Spill::of_sign(self.negative)),
            }
        } else if self.magnitude >= rhs.magnitude {
            Ok(Wide::with_sign(
                self.negative,
                self.magnitude - rhs.magnitude,
            ))
        } else {
            Ok(Wide::with_sign(rhs.negative, rhs.magnitude - self.magnitude))
        }
    }

    pub(crate) fn exact_sub(self, rhs: Wide) -> Result<Wide, Spill> {
        self.exact_add(-rhs)
    }

    pub(crate) fn exact_mul(self, rhs: Wide) -> Result<Wide, Spill> {
        let negative = self.negative != rhs.negative;
        match self.magnitude.checked_mul(rhs.magnitude) {
            Some(magnitude) => Ok(Wide::with_sign(negative, magnitude)),
            None => Err(Spill::of_sign(negative)),
        }
    }

    /// Converts a canonical decimal string, reporting the direction in which
    /// it leaves the domain if it is too large.
    pub(crate) fn from_canonical(c: &Canonical) -> Result<Wide, Spill> {
        let spill = Spill::of_sign(c.is_negative());
        let mut magnitude: u128 = 0;
        for b in c.digits().bytes() {
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(u128::from(b - b'0')))
                .ok_or(spill)?;
        }
        Ok(Wide::with_sign(c.is_negative(), magnitude))
    }
}

impl Default for Wide {
    fn default() -> Wide {
        Wide::ZERO
    }
}

impl fmt::Debug for Wide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Wide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude.to_string())
    }
}

impl FromStr for Wide {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Wide, ParseError> {
        let c = decimal::canonicalize(s).ok_or_else(|| ParseError::syntax("Wide", s))?;
        Wide::from_canonical(&c)
            .map_err(|_| RangeError::new("Wide", &c, Wide::MIN, Wide::MAX).into())
    }
}

impl PartialOrd for Wide {
    fn partial_cmp(&self, other: &Wide) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Wide {
    fn cmp(&self, other: &Wide) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl Neg for Wide {
    type Output = Wide;

    fn neg(self) -> Wide {
        Wide::with_sign(!self.negative, self.magnitude)
    }
}

macro_rules! wide_from_int {
    ($ctor:ident: $($t:ty),*) => {
        $(
            impl From<$t> for Wide {
                fn from(n: $t) -> Wide {
                    Wide::$ctor(n.into())
                }
            }
        )*
    };
}

wide_from_int!(from_i64: i8, i16, i32, i64);
wide_from_int!(from_u64: u8, u16, u32, u64);
wide_from_int!(from_i128: i128);
wide_from_int!(from_u128: u128);

impl From<isize> for Wide {
    fn from(n: isize) -> Wide {
        Wide::from_i64(n as i64)
    }
}

impl From<usize> for Wide {
    fn from(n: usize) -> Wide {
        Wide::from_u64(n as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_unsigned() {
        assert_eq!(-Wide::ZERO, Wide::ZERO);
        assert!(!(-Wide::ZERO).is_negative());
        assert_eq!(Wide::from(-5).exact_add(Wide::from(5)), Ok(Wide::ZERO));
        assert_eq!(Wide::from(-5).exact_mul(Wide::ZERO), Ok(Wide::ZERO));
        assert_eq!("-0".parse::<Wide>(), Ok(Wide::ZERO));
    }

    #[test]
    fn test_primitive_round_trip() {
        for n in &[0, 1, -1, i128::MAX, i128::MIN, i128::from(i64::MIN)] {
            assert_eq!(Wide::from(*n).to_i128(), Some(*n));
            assert_eq!(Wide::from(*n).to_string(), n.to_string());
        }
        assert_eq!(Wide::from(u128::MAX).to_u128(), Some(u128::MAX));
        assert_eq!(Wide::from(u128::MAX).to_i128(), None);
        assert_eq!(Wide::from(-1).to_u128(), None);
        assert_eq!(Wide::from(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(Wide::from(i128::from(i64::MIN) - 1).to_i64(), None);
        assert_eq!(Wide::from(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(Wide::from(-(i128::MAX) - 1), Wide::from(i128::MIN));
    }

    #[test]
    fn test_spill() {
        assert_eq!(Wide::MAX.exact_add(Wide::ONE), Err(Spill::Above));
        assert_eq!(Wide::MIN.exact_sub(Wide::ONE), Err(Spill::Below));
        assert_eq!(Wide::MAX.exact_mul(Wide::from(-2)), Err(Spill::Below));
        assert_eq!(Wide::MIN.exact_mul(Wide::from(-2)), Err(Spill::Above));
        assert_eq!(Wide::MAX.exact_add(Wide::MIN), Ok(Wide::ZERO));
        assert_eq!(Wide::MAX.checked_add(Wide::ONE), None);
    }

    #[test]
    fn test_mixed_sign_add() {
        assert_eq!(Wide::from(3).exact_add(Wide::from(-5)), Ok(Wide::from(-2)));
        assert_eq!(Wide::from(-3).exact_add(Wide::from(5)), Ok(Wide::from(2)));
        assert_eq!(Wide::from(3).exact_sub(Wide::from(5)), Ok(Wide::from(-2)));
        assert_eq!(Wide::from(-3).exact_sub(Wide::from(-5)), Ok(Wide::from(2)));
    }

    #[test]
    fn test_div_rem() {
        for &(a, b) in &[(7i128, 2i128), (-7, 2), (7, -2), (-7, -2), (6, 3), (0, 5)] {
            let (q, r) = Wide::from(a).div_rem(Wide::from(b)).unwrap();
            assert_eq!(q, Wide::from(a / b), "{} / {}", a, b);
            assert_eq!(r, Wide::from(a % b), "{} % {}", a, b);
        }
        assert_eq!(Wide::ONE.div_rem(Wide::ZERO), None);
    }

    #[test]
    fn test_ordering() {
        let mut values: Vec<Wide> = [5i128, -3, 0, i128::MIN, -4, 2]
            .iter()
            .map(|n| Wide::from(*n))
            .collect();
        values.push(Wide::MAX);
        values.push(Wide::MIN);
        values.sort();
        let strings: Vec<String> = values.iter().map(|w| w.to_string()).collect();
        assert_eq!(
            strings,
            vec![
                Wide::MIN.to_string(),
                i128::MIN.to_string(),
                "-4".into(),
                "-3".into(),
                "0".into(),
                "2".into(),
                "5".into(),
                u128::MAX.to_string(),
            ]
        );
        for pair in values.windows(2) {
            assert!(pair[0].is_at_most(pair[1]));
        }
        assert!(!Wide::ONE.is_at_most(Wide::ZERO));
    }

    #[test]
    fn test_parse() {
        assert_eq!("-00042".parse::<Wide>(), Ok(Wide::from(-42)));
        assert_eq!(
            "340282366920938463463374607431768211455".parse::<Wide>(),
            Ok(Wide::MAX)
        );
        let e = "340282366920938463463374607431768211456"
            .parse::<Wide>()
            .unwrap_err();
        assert_eq!(e.kind(), crate::ErrorKind::Range);
        assert_eq!(
            "12abc".parse::<Wide>().unwrap_err().kind(),
            crate::ErrorKind::Syntax
        );
    }

    #[test]
    fn test_format_padding() {
        assert_eq!(format!("{:>5}", Wide::from(-42)), "  -42");
        assert_eq!(format!("{:+}", Wide::from(42)), "+42");
    }
}
