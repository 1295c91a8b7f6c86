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

//! Canonical decimal integer strings.
//!
//! The canonical form of an integer has no leading zeros (except for `0`
//! itself), an explicit `-` for negative values, no `+`, and no decimal
//! point.

use std::fmt;

/// A decimal integer string in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Canonical<'a> {
    negative: bool,
    digits: &'a str,
}

impl<'a> Canonical<'a> {
    /// Reports whether the number is less than zero.
    pub(crate) fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the magnitude digits, most significant first.
    pub(crate) fn digits(&self) -> &'a str {
        self.digits
    }
}

impl fmt::Display for Canonical<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(self.digits)
    }
}

/// Canonicalizes a decimal integer string.
///
/// Accepts an optional sign, at least one digit, and an optional fractional
/// part made up only of zeros. Returns `None` for anything else.
pub(crate) fn canonicalize(s: &str) -> Option<Canonical<'_>> {
    let (negative, unsigned) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let (integral, fraction) = match unsigned.split_once('.') {
        Some((integral, fraction)) => (integral, fraction),
        None => (unsigned, ""),
    };
    if integral.is_empty() || !integral.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !fraction.bytes().all(|b| b == b'0') {
        return None;
    }
    let digits = integral.trim_start_matches('0');
    if digits.is_empty() {
        return Some(Canonical {
            negative: false,
            digits: "0",
        });
    }
    Some(Canonical { negative, digits })
}
