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

//! Implementations of num-traits traits.

use num_traits::{Bounded, FromPrimitive, ToPrimitive};

use crate::big::BigInt;
use crate::float::BoundedFloat;
use crate::native::NativeInt;
use crate::range::{BigRange, FloatRange, NativeRange};

impl<R: NativeRange> Bounded for NativeInt<R> {
    fn min_value() -> Self {
        NativeInt::MIN
    }

    fn max_value() -> Self {
        NativeInt::MAX
    }
}

impl<R: NativeRange> ToPrimitive for NativeInt<R> {
    fn to_i64(&self) -> Option<i64> {
        Some(self.value())
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.value()).ok()
    }
}

impl<R: NativeRange> FromPrimitive for NativeInt<R> {
    fn from_i64(n: i64) -> Option<Self> {
        NativeInt::new(n).ok()
    }

    fn from_u64(n: u64) -> Option<Self> {
        NativeInt::try_from(n).ok()
    }

    fn from_i128(n: i128) -> Option<Self> {
        NativeInt::try_from(n).ok()
    }

    fn from_u128(n: u128) -> Option<Self> {
        NativeInt::try_from(n).ok()
    }
}

impl<R: BigRange> Bounded for BigInt<R> {
    fn min_value() -> Self {
        BigInt::MIN
    }

    fn max_value() -> Self {
        BigInt::MAX
    }
}

impl<R: BigRange> ToPrimitive for BigInt<R> {
    fn to_i64(&self) -> Option<i64> {
        self.value().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.value().to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.value().to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.value().to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        let value = self.value();
        let magnitude = value.magnitude() as f64;
        Some(if value.is_negative() {
            -magnitude
        } else {
            magnitude
        })
    }
}

impl<R: BigRange> FromPrimitive for BigInt<R> {
    fn from_i64(n: i64) -> Option<Self> {
        BigInt::new(n).ok()
    }

    fn from_u64(n: u64) -> Option<Self> {
        BigInt::new(n).ok()
    }

    fn from_i128(n: i128) -> Option<Self> {
        BigInt::new(n).ok()
    }

    fn from_u128(n: u128) -> Option<Self> {
        BigInt::new(n).ok()
    }
}

impl<R: FloatRange> Bounded for BoundedFloat<R> {
    fn min_value() -> Self {
        BoundedFloat::MIN
    }

    fn max_value() -> Self {
        BoundedFloat::MAX
    }
}

impl<R: FloatRange> ToPrimitive for BoundedFloat<R> {
    fn to_i64(&self) -> Option<i64> {
        self.value().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.value().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.value())
    }
}

impl<R: FloatRange> FromPrimitive for BoundedFloat<R> {
    fn from_i64(n: i64) -> Option<Self> {
        BoundedFloat::new(n as f64).ok()
    }

    fn from_u64(n: u64) -> Option<Self> {
        BoundedFloat::new(n as f64).ok()
    }

    fn from_f64(n: f64) -> Option<Self> {
        BoundedFloat::new(n).ok()
    }
}
