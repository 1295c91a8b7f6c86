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
use std::collections::HashSet;
use std::error::Error;

use strictnum::{
    big_range, bounded, float_range, native_range, BoundedInteger, BoundedNumeric, ErrorKind,
    Float32, Float64, Int128, Int16, Int32, Int64, Int8, UInt128, UInt16, UInt32, UInt64, UInt8,
};

native_range!(
    /// A whole percentage.
    Percent: 0, 100
);
native_range!(Celsius: -273, 10_000);
big_range!(Nanos: u128, 1, 10u128.pow(30));
float_range!(Unit: -1.0, 1.0);

#[test]
fn test_scenarios() -> Result<(), Box<dyn Error>> {
    assert_eq!(Int8::new(100)?.add(Int8::new(27)?)?, Int8::new(127)?);

    let e = Int8::new(100)?.add(Int8::new(28)?).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Overflow);
    assert_eq!(
        e.to_string(),
        "Int8 overflow: 100 + 28 exceeds the maximum value 127"
    );

    let e = UInt8::new(5)?.sub(UInt8::new(10)?).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Underflow);
    assert_eq!(
        e.to_string(),
        "UInt8 underflow: 5 - 10 is below the minimum value 0"
    );

    let max: Int128 = "170141183460469231731687303715884105727".parse()?;
    let e = max.add("1".parse()?).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Overflow);

    let e = Float32::new(5.0)?.div(Float32::new(0.0)?).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::DivisionByZero);
    assert_eq!(e.to_string(), "Float32 division by zero: 5 / 0");

    let e = Int16::new(5)?.div(Int16::new(2)?).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::NonIntegralResult);
    assert_eq!(
        e.to_string(),
        "Int16 division is not exact: 5 / 2 leaves remainder 1"
    );
    Ok(())
}

fn check_boundaries<T>() -> Result<(), Box<dyn Error>>
where
    T: BoundedInteger,
{
    let one: T = "1".parse()?;
    assert_eq!(T::maximum().add(one).unwrap_err().kind(), ErrorKind::Overflow);
    assert_eq!(T::minimum().sub(one).unwrap_err().kind(), ErrorKind::Underflow);
    assert_eq!(T::maximum().sub(one)?.add(one)?, T::maximum());
    assert_eq!(T::minimum().add(one)?.sub(one)?, T::minimum());
    assert_eq!(T::maximum().compare(&T::minimum()), Ordering::Greater);
    if let Ok(neg_one) = "-1".parse::<T>() {
        assert_eq!(T::minimum().add(neg_one).unwrap_err().kind(), ErrorKind::Underflow);
        assert_eq!(T::maximum().sub(neg_one).unwrap_err().kind(), ErrorKind::Overflow);
    }
    Ok(())
}

#[test]
fn test_boundaries() -> Result<(), Box<dyn Error>> {
    check_boundaries::<Int8>()?;
    check_boundaries::<Int16>()?;
    check_boundaries::<Int32>()?;
    check_boundaries::<UInt8>()?;
    check_boundaries::<UInt16>()?;
    check_boundaries::<UInt32>()?;
    check_boundaries::<Int64>()?;
    check_boundaries::<UInt64>()?;
    check_boundaries::<Int128>()?;
    check_boundaries::<UInt128>()?;
    check_boundaries::<Percent>()?;
    check_boundaries::<Celsius>()?;
    check_boundaries::<Nanos>()?;
    Ok(())
}

fn check_round_trip<T>(inputs: &[&str]) -> Result<(), Box<dyn Error>>
where
    T: BoundedNumeric,
{
    for input in inputs {
        let n: T = input.parse()?;
        let back: T = n.to_string().parse()?;
        assert!(back.equals(&n), "{} did not round trip through {}", input, n);
    }
    Ok(())
}

#[test]
fn test_round_trip() -> Result<(), Box<dyn Error>> {
    check_round_trip::<Int8>(&["-128", "0", "127", "-0", "007"])?;
    check_round_trip::<UInt32>(&["0", "4294967295"])?;
    check_round_trip::<Int64>(&["-9223372036854775808", "9223372036854775807"])?;
    check_round_trip::<UInt128>(&["340282366920938463463374607431768211455"])?;
    check_round_trip::<Float32>(&["3.4028234663852886e38", "-1.5", "1e-45"])?;
    check_round_trip::<Float64>(&["0.1", "-1.7976931348623157e308", "5e-324"])?;
    Ok(())
}

#[test]
fn test_custom_ranges() -> Result<(), Box<dyn Error>> {
    assert_eq!(
        Percent::new(101).unwrap_err().to_string(),
        "101 is out of range for Percent: expected a value in [0, 100]"
    );
    let e = Percent::new(60)?.add(Percent::new(41)?).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Overflow);
    assert_eq!(Celsius::MIN.value(), -273);
    assert_eq!(Celsius::default(), Celsius::new(0)?);
    assert_eq!(Nanos::default(), Nanos::MIN);
    assert_eq!(Nanos::new(0u8).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(Nanos::MAX.to_string(), format!("1{}", "0".repeat(30)));
    assert_eq!(Unit::new(1.5).unwrap_err().kind(), ErrorKind::Range);
    assert!(!Unit::new(0.75)?.add(Unit::new(0.75)?)?.is_in_range());
    Ok(())
}

#[test]
fn test_equality_and_ordering() -> Result<(), Box<dyn Error>> {
    let a = Int32::new(-5)?;
    let b = Int32::new(7)?;
    assert!(a.is_less_than(&b));
    assert!(b.is_greater_than(&a));
    assert!(!a.equals(&b));
    assert!(a.equals(&Int32::new(-5)?));
    assert_eq!(a.compare(&b), Ordering::Less);

    let set: HashSet<UInt64> = ["1", "01", "1.0", "2"]
        .iter()
        .map(|s| s.parse())
        .collect::<Result<_, _>>()?;
    assert_eq!(set.len(), 2);

    let nan = Float64::NAN;
    assert!(!nan.equals(&nan));
    assert!(!nan.is_less_than(&Float64::MAX));
    assert!(!nan.is_greater_than(&Float64::MIN));
    Ok(())
}

#[test]
fn test_fold() -> Result<(), Box<dyn Error>> {
    let values = [10, 20, 30]
        .iter()
        .map(|n| Int8::new(*n))
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(Int8::try_sum(values.iter().copied())?, Int8::new(60)?);
    let e = Int8::try_product(values.iter().copied()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Overflow);
    assert_eq!(Int128::try_sum(Vec::new())?, Int128::new(0)?);
    assert_eq!(UInt16::try_product(Vec::new())?, UInt16::new(1)?);
    assert_eq!(Nanos::try_sum(Vec::new()).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(
        Float64::try_product(vec![Float64::new(0.5)?, Float64::new(4.0)?])?,
        Float64::new(2.0)?
    );
    Ok(())
}

#[test]
fn test_bounded_macro() {
    assert_eq!(bounded!(Int8, -128), Int8::MIN);
    assert_eq!(bounded!(UInt64, 18446744073709551615), UInt64::MAX);
    assert_eq!(bounded!(Percent, 42).value(), 42);
    assert!(bounded!(Float32, 0.25).equals(&Float32::new(0.25).unwrap()));
}

#[test]
#[should_panic(expected = "256 is out of range for UInt8")]
fn test_bounded_macro_panics() {
    bounded!(UInt8, 256);
}

#[test]
fn test_error_umbrella() {
    fn parse_and_double(s: &str) -> Result<Int16, strictnum::Error> {
        let n: Int16 = s.parse()?;
        Ok(n.mul(Int16::new(2)?)?)
    }

    assert_eq!(parse_and_double("21").map(|n| n.value()), Ok(42));
    assert_eq!(parse_and_double("x").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(parse_and_double("40000").unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(parse_and_double("20000").unwrap_err().kind(), ErrorKind::Overflow);
    assert_eq!(parse_and_double("-20000").unwrap_err().kind(), ErrorKind::Underflow);
}
