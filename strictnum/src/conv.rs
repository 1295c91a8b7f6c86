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

//! Conversions between bounded values and primitives.

use crate::big::BigInt;
use crate::error::{RangeError, TryFromBoundedError};
use crate::float::BoundedFloat;
use crate::native::NativeInt;
use crate::range::{BigRange, FloatRange, NativeRange};
use crate::wide::Wide;

/// Implements `TryFrom<$t>` for `NativeInt<R>` for each primitive integer
/// `$t`.
macro_rules! native_try_from_primitive {
    ($($t:ty),*) => {
        $(
            impl<R: NativeRange> TryFrom<$t> for NativeInt<R> {
                type Error = RangeError;

                fn try_from(n: $t) -> Result<NativeInt<R>, RangeError> {
                    match i64::try_from(n) {
                        Ok(n) => NativeInt::new(n),
                        Err(_) => Err(RangeError::new(R::NAME, n, R::MIN_VALUE, R::MAX_VALUE)),
                    }
                }
            }
        )*
    };
}

/// Implements `TryFrom<NativeInt<R>>` for each primitive integer `$t` that
/// cannot hold every `i64`.
macro_rules! primitive_try_from_native {
    ($($t:ty),*) => {
        $(
            impl<R: NativeRange> TryFrom<NativeInt<R>> for $t {
                type Error = TryFromBoundedError;

                fn try_from(n: NativeInt<R>) -> Result<$t, TryFromBoundedError> {
                    <$t>::try_from(n.value()).map_err(|_| TryFromBoundedError {
                        value: n.to_string(),
                        target: stringify!($t),
                    })
                }
            }
        )*
    };
}

/// Implements `TryFrom<$t>` for `BigInt<R>` for each primitive integer `$t`.
macro_rules! big_try_from_primitive {
    ($($t:ty),*) => {
        $(
            impl<R: BigRange> TryFrom<$t> for BigInt<R> {
                type Error = RangeError;

                fn try_from(n: $t) -> Result<BigInt<R>, RangeError> {
                    BigInt::new(n)
                }
            }
        )*
    };
}

/// Implements `TryFrom<BigInt<R>>` for each primitive integer `$t`, by way of
/// the `Wide` conversion `$to`.
macro_rules! primitive_try_from_big {
    ($($t:ty: $to:ident),*) => {
        $(
            impl<R: BigRange> TryFrom<BigInt<R>> for $t {
                type Error = TryFromBoundedError;

                fn try_from(n: BigInt<R>) -> Result<$t, TryFromBoundedError> {
                    n.value().$to().ok_or_else(|| TryFromBoundedError {
                        value: n.to_string(),
                        target: stringify!($t),
                    })
                }
            }
        )*
    };
}

native_try_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
primitive_try_from_native!(i8, i16, i32, isize, u8, u16, u32, u64, u128, usize);

big_try_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, Wide);
primitive_try_from_big!(i64: to_i64, u64: to_u64, i128: to_i128, u128: to_u128);

impl<R: NativeRange> From<NativeInt<R>> for i64 {
    fn from(n: NativeInt<R>) -> i64 {
        n.value()
    }
}

impl<R: NativeRange> From<NativeInt<R>> for i128 {
    fn from(n: NativeInt<R>) -> i128 {
        i128::from(n.value())
    }
}

impl<R: BigRange> From<BigInt<R>> for Wide {
    fn from(n: BigInt<R>) -> Wide {
        n.value()
    }
}

impl<R: FloatRange> TryFrom<f64> for BoundedFloat<R> {
    type Error = RangeError;

    fn try_from(n: f64) -> Result<BoundedFloat<R>, RangeError> {
        BoundedFloat::new(n)
    }
}

impl<R: FloatRange> TryFrom<f32> for BoundedFloat<R> {
    type Error = RangeError;

    fn try_from(n: f32) -> Result<BoundedFloat<R>, RangeError> {
        BoundedFloat::new(f64::from(n))
    }
}

impl<R: FloatRange> From<BoundedFloat<R>> for f64 {
    fn from(n: BoundedFloat<R>) -> f64 {
        n.value()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::wide::Wide;
    use crate::{Float32, Int128, Int16, Int8, UInt64, UInt8};

    #[test]
    fn test_native_conversions() {
        assert_eq!(Int8::try_from(-128i32), Ok(Int8::MIN));
        assert_eq!(Int8::try_from(300u16).unwrap_err().kind(), ErrorKind::Range);
        let e = UInt8::try_from(u128::MAX).unwrap_err();
        assert_eq!(e.value(), u128::MAX.to_string());
        assert_eq!(i64::from(Int16::MIN), -32768);
        assert_eq!(i128::from(Int16::MAX), 32767);
        assert_eq!(u8::try_from(UInt8::MAX), Ok(255));
        let e = u8::try_from(Int8::MIN).unwrap_err();
        assert_eq!(e.to_string(), "-128 cannot be expressed as u8");
    }

    #[test]
    fn test_big_conversions() {
        assert_eq!(UInt64::try_from(u64::MAX), Ok(UInt64::MAX));
        assert_eq!(UInt64::try_from(-1i8).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(Int128::try_from(Wide::MIN).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(Wide::from(UInt64::MAX), Wide::from(u64::MAX));
        assert_eq!(u64::try_from(UInt64::MAX), Ok(u64::MAX));
        assert_eq!(i128::try_from(Int128::MIN), Ok(i128::MIN));
        let e = i64::try_from(UInt64::MAX).unwrap_err();
        assert_eq!(e.to_string(), "18446744073709551615 cannot be expressed as i64");
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(Float32::try_from(1.5f32).map(f64::from), Ok(1.5));
        assert_eq!(Float32::try_from(1e300_f64).unwrap_err().kind(), ErrorKind::Range);
    }
}
