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
use std::str::FromStr;

use crate::error::ParseError;
use crate::float::BoundedFloat;
use crate::range::FloatRange;

/// A wrapper for a bounded float that provides an implementation of [`Ord`]
/// and [`Hash`].
///
/// Like the [`OrderedFloat`] type provided by the [`ordered_float`] crate, but
/// for [`BoundedFloat`].
///
/// NaN is treated as equal to itself and greater than all non-NaN values.
/// Negative zero is equal to positive zero. All other values are compared via
/// their `PartialOrd` implementation.
///
/// [`OrderedFloat`]: https://docs.rs/ordered-float/2.0.1/ordered_float/struct.OrderedFloat.html
/// [`ordered_float`]: https://crates.io/crates/ordered-float
#[derive(Debug, Clone, Copy)]
pub struct OrderedBounded<F>(pub F);

impl<F> OrderedBounded<F> {
    /// Consumes the wrapper, returning the value within.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F> fmt::Display for OrderedBounded<F>
where
    F: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<F> PartialOrd for OrderedBounded<F>
where
    Self: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F> PartialEq for OrderedBounded<F>
where
    Self: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F> Eq for OrderedBounded<F> where Self: Ord {}

impl<R: FloatRange> Ord for OrderedBounded<BoundedFloat<R>> {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.0.value();
        let rhs = other.0.value();
        match lhs.partial_cmp(&rhs) {
            Some(ordering) => ordering,
            None => {
                if lhs.is_nan() {
                    if rhs.is_nan() {
                        Ordering::Equal
                    } else {
                        Ordering::Greater
                    }
                } else {
                    Ordering::Less
                }
            }
        }
    }
}

impl<R: FloatRange> Hash for OrderedBounded<BoundedFloat<R>> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        let n = if self.0.is_nan() {
            f64::NAN
        } else if self.0.is_zero() {
            0.0
        } else {
            self.0.value()
        };
        n.to_bits().hash(state)
    }
}

impl<F> From<F> for OrderedBounded<F> {
    fn from(f: F) -> OrderedBounded<F> {
        OrderedBounded(f)
    }
}

impl<R: FloatRange> FromStr for OrderedBounded<BoundedFloat<R>> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Ok(OrderedBounded(s.parse()?))
    }
}

impl<R: FloatRange> Default for OrderedBounded<BoundedFloat<R>> {
    fn default() -> Self {
        OrderedBounded(BoundedFloat::default())
    }
}
