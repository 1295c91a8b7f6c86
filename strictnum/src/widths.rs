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

//! The standard widths.

native_range!(
    /// An 8-bit signed integer.
    pub Int8: i8::MIN as i64, i8::MAX as i64
);
native_range!(
    /// A 16-bit signed integer.
    pub Int16: i16::MIN as i64, i16::MAX as i64
);
native_range!(
    /// A 32-bit signed integer.
    pub Int32: i32::MIN as i64, i32::MAX as i64
);
native_range!(
    /// An 8-bit unsigned integer.
    pub UInt8: 0, u8::MAX as i64
);
native_range!(
    /// A 16-bit unsigned integer.
    pub UInt16: 0, u16::MAX as i64
);
native_range!(
    /// A 32-bit unsigned integer.
    pub UInt32: 0, u32::MAX as i64
);

big_range!(
    /// A 64-bit signed integer.
    pub Int64: i64, i64::MIN, i64::MAX
);
big_range!(
    /// A 64-bit unsigned integer.
    pub UInt64: u64, 0, u64::MAX
);
big_range!(
    /// A 128-bit signed integer.
    pub Int128: i128, i128::MIN, i128::MAX
);
big_range!(
    /// A 128-bit unsigned integer.
    pub UInt128: u128, 0, u128::MAX
);

float_range!(
    /// A single-precision float.
    ///
    /// Values are held as `f64`; the range is that of `f32`'s finite values.
    pub Float32: f32::MIN as f64, f32::MAX as f64
);
float_range!(
    /// A double-precision float.
    pub Float64: f64::MIN, f64::MAX
);
