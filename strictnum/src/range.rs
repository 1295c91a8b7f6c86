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

//! Range policies.
//!
//! A range policy is a type-level pair of constants, `MIN_VALUE` and
//! `MAX_VALUE`, that defines the legal domain of a bounded type. The policy is
//! the single source of truth consulted at construction and after every
//! arithmetic operation.
//!
//! Policies are usually declared with the [`native_range!`], [`big_range!`],
//! and [`float_range!`] macros rather than implemented by hand.
//!
//! [`native_range!`]: crate::native_range
//! [`big_range!`]: crate::big_range
//! [`float_range!`]: crate::float_range

use crate::wide::Wide;

/// The range of a type backed by the native engine,
/// [`NativeInt`](crate::NativeInt).
///
/// Both bounds must fit in an `i64`.
pub trait NativeRange: 'static {
    /// The name of the bounded type, used in error messages.
    const NAME: &'static str;
    /// The smallest legal value, inclusive.
    const MIN_VALUE: i64;
    /// The largest legal value, inclusive.
    const MAX_VALUE: i64;
}

/// The range of a type backed by the big engine, [`BigInt`](crate::BigInt).
pub trait BigRange: 'static {
    /// The name of the bounded type, used in error messages.
    const NAME: &'static str;
    /// The smallest legal value, inclusive.
    const MIN_VALUE: Wide;
    /// The largest legal value, inclusive.
    const MAX_VALUE: Wide;
}

/// The range of a [`BoundedFloat`](crate::BoundedFloat).
///
/// Both bounds must be finite.
pub trait FloatRange: 'static {
    /// The name of the bounded type, used in error messages.
    const NAME: &'static str;
    /// The smallest legal value, inclusive.
    const MIN_VALUE: f64;
    /// The largest legal value, inclusive.
    const MAX_VALUE: f64;
}

/// The direction in which an intermediate result left the domain of its
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Spill {
    Above,
    Below,
}

impl Spill {
    /// The spill direction of a value whose sign is `negative` and whose
    /// magnitude is too large to represent.
    pub(crate) fn of_sign(negative: bool) -> Spill {
        if negative {
            Spill::Below
        } else {
            Spill::Above
        }
    }
}
