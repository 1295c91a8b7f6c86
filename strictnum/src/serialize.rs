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

//! Serde support.
//!
//! Native widths serialize as `i64` and float widths as `f64`. Big widths
//! serialize as canonical decimal strings, since many formats cannot hold
//! 64-bit or wider integers losslessly, and deserialize from either a string
//! or an integer. Formats that read integers beyond 64 bits as floating
//! point, like JSON, must carry such values as strings. Every deserialized
//! value is validated against its range.
//!
//! NaN floats serialize as `f64::NAN`, which JSON writes as `null`; a `null`
//! or unit read back by a self-describing format is NaN.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::big::BigInt;
use crate::float::BoundedFloat;
use crate::native::NativeInt;
use crate::ordered::OrderedBounded;
use crate::range::{BigRange, FloatRange, NativeRange};

impl<R: NativeRange> Serialize for NativeInt<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.value())
    }
}

impl<'de, R: NativeRange> Deserialize<'de> for NativeInt<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = i64::deserialize(deserializer)?;
        NativeInt::new(n).map_err(de::Error::custom)
    }
}

impl<R: BigRange> Serialize for BigInt<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor<R>(PhantomData<fn() -> R>);

impl<'de, R: BigRange> Visitor<'de> for BigIntVisitor<R> {
    type Value = BigInt<R>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a {} as a decimal string or an integer", R::NAME)
    }

    fn visit_str<E>(self, s: &str) -> Result<BigInt<R>, E>
    where
        E: de::Error,
    {
        s.parse().map_err(E::custom)
    }

    fn visit_i64<E>(self, n: i64) -> Result<BigInt<R>, E>
    where
        E: de::Error,
    {
        BigInt::new(n).map_err(E::custom)
    }

    fn visit_u64<E>(self, n: u64) -> Result<BigInt<R>, E>
    where
        E: de::Error,
    {
        BigInt::new(n).map_err(E::custom)
    }

    fn visit_i128<E>(self, n: i128) -> Result<BigInt<R>, E>
    where
        E: de::Error,
    {
        BigInt::new(n).map_err(E::custom)
    }

    fn visit_u128<E>(self, n: u128) -> Result<BigInt<R>, E>
    where
        E: de::Error,
    {
        BigInt::new(n).map_err(E::custom)
    }

    fn visit_f64<E>(self, n: f64) -> Result<BigInt<R>, E>
    where
        E: de::Error,
    {
        if n.is_finite() && n.fract() == 0.0 {
            return Err(E::custom(format_args!(
                "{} value {} was read as floating point and may have lost precision; \
                 send it as a decimal string",
                R::NAME,
                n
            )));
        }
        Err(E::invalid_type(Unexpected::Float(n), &self))
    }
}

impl<'de, R: BigRange> Deserialize<'de> for BigInt<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor(PhantomData))
    }
}

impl<R: FloatRange> Serialize for BoundedFloat<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

struct BoundedFloatVisitor<R>(PhantomData<fn() -> R>);

impl<'de, R: FloatRange> Visitor<'de> for BoundedFloatVisitor<R> {
    type Value = BoundedFloat<R>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a {} as a number, or null for NaN", R::NAME)
    }

    fn visit_f64<E>(self, n: f64) -> Result<BoundedFloat<R>, E>
    where
        E: de::Error,
    {
        BoundedFloat::new(n).map_err(E::custom)
    }

    fn visit_i64<E>(self, n: i64) -> Result<BoundedFloat<R>, E>
    where
        E: de::Error,
    {
        self.visit_f64(n as f64)
    }

    fn visit_u64<E>(self, n: u64) -> Result<BoundedFloat<R>, E>
    where
        E: de::Error,
    {
        self.visit_f64(n as f64)
    }

    fn visit_unit<E>(self) -> Result<BoundedFloat<R>, E>
    where
        E: de::Error,
    {
        Ok(BoundedFloat::NAN)
    }

    fn visit_none<E>(self) -> Result<BoundedFloat<R>, E>
    where
        E: de::Error,
    {
        Ok(BoundedFloat::NAN)
    }
}

impl<'de, R: FloatRange> Deserialize<'de> for BoundedFloat<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let visitor = BoundedFloatVisitor(PhantomData);
        // Binary formats cannot drive `deserialize_any`.
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(visitor)
        } else {
            deserializer.deserialize_f64(visitor)
        }
    }
}

impl<F: Serialize> Serialize for OrderedBounded<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, F: Deserialize<'de>> Deserialize<'de> for OrderedBounded<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        F::deserialize(deserializer).map(OrderedBounded)
    }
}
