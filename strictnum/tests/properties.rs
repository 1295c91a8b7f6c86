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

//! Property tests for the range, exactness, round-trip, and engine parity
//! guarantees.

use proptest::prelude::*;

use strictnum::{
    ErrorKind, Float32, Int128, Int16, Int32, Int64, Int8, UInt128, UInt32, UInt64, UInt8, Wide,
};

/// The kind of failure that an exact result `n` implies for a type with the
/// range `[min, max]`.
fn expected_kind(n: i128, min: i128, max: i128) -> Option<ErrorKind> {
    if n > max {
        Some(ErrorKind::Overflow)
    } else if n < min {
        Some(ErrorKind::Underflow)
    } else {
        None
    }
}

proptest! {
    #[test]
    fn native_construction_matches_range(n in any::<i64>()) {
        let in_range = i64::from(i8::MIN) <= n && n <= i64::from(i8::MAX);
        match Int8::new(n) {
            Ok(v) => {
                prop_assert!(in_range);
                prop_assert_eq!(v.value(), n);
            }
            Err(e) => {
                prop_assert!(!in_range);
                prop_assert_eq!(e.kind(), ErrorKind::Range);
            }
        }
    }

    #[test]
    fn big_construction_matches_range(n in any::<i128>()) {
        let in_range = i128::from(u64::MIN) <= n && n <= i128::from(u64::MAX);
        prop_assert_eq!(UInt64::new(n).is_ok(), in_range);
    }

    #[test]
    fn float_construction_matches_range(n in any::<f64>()) {
        let in_range = n.is_nan() || (n.abs() <= f64::from(f32::MAX));
        prop_assert_eq!(Float32::new(n).is_ok(), in_range);
    }

    #[test]
    fn native_arithmetic_is_exact(a in any::<i16>(), b in any::<i16>()) {
        let (x, y) = (Int16::new(a.into()).unwrap(), Int16::new(b.into()).unwrap());
        let (min, max) = (i128::from(i16::MIN), i128::from(i16::MAX));
        let (a, b) = (i128::from(a), i128::from(b));
        for (result, exact) in [(x.add(y), a + b), (x.sub(y), a - b), (x.mul(y), a * b)] {
            match expected_kind(exact, min, max) {
                None => prop_assert_eq!(i128::from(result.unwrap().value()), exact),
                Some(kind) => prop_assert_eq!(result.unwrap_err().kind(), kind),
            }
        }
    }

    #[test]
    fn unsigned_arithmetic_is_exact(a in any::<u32>(), b in any::<u32>()) {
        let (x, y) = (UInt32::new(a.into()).unwrap(), UInt32::new(b.into()).unwrap());
        let (min, max) = (0, i128::from(u32::MAX));
        let (a, b) = (i128::from(a), i128::from(b));
        for (result, exact) in [(x.add(y), a + b), (x.sub(y), a - b), (x.mul(y), a * b)] {
            match expected_kind(exact, min, max) {
                None => prop_assert_eq!(i128::from(result.unwrap().value()), exact),
                Some(kind) => prop_assert_eq!(result.unwrap_err().kind(), kind),
            }
        }
    }

    #[test]
    fn big_arithmetic_is_exact(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (Int64::new(a).unwrap(), Int64::new(b).unwrap());
        let (min, max) = (i128::from(i64::MIN), i128::from(i64::MAX));
        let (a, b) = (i128::from(a), i128::from(b));
        for (result, exact) in [(x.add(y), a + b), (x.sub(y), a - b), (x.mul(y), a * b)] {
            match expected_kind(exact, min, max) {
                None => prop_assert_eq!(result.unwrap().value(), Wide::from(exact)),
                Some(kind) => prop_assert_eq!(result.unwrap_err().kind(), kind),
            }
        }
    }

    #[test]
    fn division_is_exact(a in any::<i32>(), b in any::<i32>()) {
        let (x, y) = (Int32::new(a.into()).unwrap(), Int32::new(b.into()).unwrap());
        match x.div(y) {
            Ok(q) => {
                prop_assert!(b != 0);
                prop_assert_eq!(i64::from(a) % i64::from(b), 0);
                prop_assert_eq!(q.value(), i64::from(a) / i64::from(b));
            }
            Err(e) if b == 0 => prop_assert_eq!(e.kind(), ErrorKind::DivisionByZero),
            Err(e) if i64::from(a) % i64::from(b) != 0 => {
                prop_assert_eq!(e.kind(), ErrorKind::NonIntegralResult)
            }
            // i32::MIN / -1
            Err(e) => prop_assert_eq!(e.kind(), ErrorKind::Overflow),
        }
    }

    #[test]
    fn division_by_multiple_succeeds(a in any::<i64>(), b in 1i64..1_000_000) {
        let product = i128::from(a) * i128::from(b);
        let x = Int128::new(product).unwrap();
        let y = Int128::new(b).unwrap();
        prop_assert_eq!(x.div(y).unwrap(), Int128::new(a).unwrap());
        prop_assert_eq!(x.rem(y).unwrap(), Int128::new(0).unwrap());
    }

    #[test]
    fn integers_round_trip(a in any::<i128>(), b in any::<u128>(), c in any::<u8>()) {
        let x = Int128::new(a).unwrap();
        prop_assert_eq!(x.to_string().parse::<Int128>().unwrap(), x);
        let y = UInt128::new(b).unwrap();
        prop_assert_eq!(y.to_string().parse::<UInt128>().unwrap(), y);
        let z = UInt8::new(c.into()).unwrap();
        prop_assert_eq!(z.to_string().parse::<UInt8>().unwrap(), z);
    }

    #[test]
    fn engines_agree(a in any::<i8>(), b in any::<i8>()) {
        // The same operation on the same values, scaled to each width's own
        // bounds, must fail in the same way on both engines.
        let scale = |n: i8| i128::from(n) << 120;
        let (n1, n2) = (Int8::new(a.into()).unwrap(), Int8::new(b.into()).unwrap());
        let (w1, w2) = (Int128::new(scale(a)).unwrap(), Int128::new(scale(b)).unwrap());
        prop_assert_eq!(
            n1.add(n2).map_err(|e| e.kind()).err(),
            w1.add(w2).map_err(|e| e.kind()).err()
        );
        prop_assert_eq!(
            n1.sub(n2).map_err(|e| e.kind()).err(),
            w1.sub(w2).map_err(|e| e.kind()).err()
        );
        if let (Ok(n), Ok(w)) = (n1.add(n2), w1.add(w2)) {
            prop_assert_eq!(scale(n.value() as i8), w.value().to_i128().unwrap());
        }
        if let (Ok(n), Ok(w)) = (n1.sub(n2), w1.sub(w2)) {
            prop_assert_eq!(scale(n.value() as i8), w.value().to_i128().unwrap());
        }
    }

    #[test]
    fn engines_agree_on_small_values(a in -100i64..100, b in -100i64..100) {
        let (n1, n2) = (Int32::new(a).unwrap(), Int32::new(b).unwrap());
        let (w1, w2) = (Int64::new(a).unwrap(), Int64::new(b).unwrap());
        prop_assert_eq!(
            n1.mul(n2).unwrap().value(),
            w1.mul(w2).unwrap().value().to_i64().unwrap()
        );
        prop_assert_eq!(
            n1.div(n2).map(|q| q.value()).map_err(|e| e.kind()),
            w1.div(w2).map(|q| q.value().to_i64().unwrap()).map_err(|e| e.kind())
        );
        prop_assert_eq!(
            n1.rem(n2).map(|r| r.value()).map_err(|e| e.kind()),
            w1.rem(w2).map(|r| r.value().to_i64().unwrap()).map_err(|e| e.kind())
        );
    }
}
