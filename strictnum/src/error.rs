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

use std::fmt;

use thiserror::Error;
use tracing::trace;

use crate::range::Spill;

/// The category of a failure, independent of the concrete error type that
/// carries it.
///
/// Every error in this crate reports its kind via a `kind` method, so callers
/// can branch on the failure without matching on message contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A raw value was outside the declared range of the target type, or was
    /// an infinity destined for a float type.
    Range,
    /// An arithmetic result exceeded the maximum value of its type.
    Overflow,
    /// An arithmetic result fell below the minimum value of its type.
    Underflow,
    /// The divisor of a division or remainder was zero.
    DivisionByZero,
    /// An integer division left a non-zero remainder.
    NonIntegralResult,
    /// A string was not a valid number for the target type.
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Range => "range",
            ErrorKind::Overflow => "overflow",
            ErrorKind::Underflow => "underflow",
            ErrorKind::DivisionByZero => "division by zero",
            ErrorKind::NonIntegralResult => "non-integral result",
            ErrorKind::Syntax => "syntax",
        })
    }
}

/// An arithmetic operation, as reported in an [`ArithmeticError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Exact division.
    Divide,
    /// Remainder of truncating division.
    Remainder,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Remainder => "%",
        })
    }
}

/// An error indicating that a raw value cannot be represented by a bounded
/// type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value} is out of range for {type_name}: expected a value in [{min}, {max}]")]
pub struct RangeError {
    type_name: &'static str,
    value: String,
    min: String,
    max: String,
}

impl RangeError {
    pub(crate) fn new<V, B>(type_name: &'static str, value: V, min: B, max: B) -> RangeError
    where
        V: fmt::Display,
        B: fmt::Display,
    {
        let value = value.to_string();
        trace!(type_name, %value, "value out of range");
        RangeError {
            type_name,
            value,
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Returns the name of the type that rejected the value.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the rejected value, formatted as a decimal string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the minimum value of the target type.
    pub fn min(&self) -> &str {
        &self.min
    }

    /// Returns the maximum value of the target type.
    pub fn max(&self) -> &str {
        &self.max
    }

    /// Returns [`ErrorKind::Range`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Range
    }
}

/// An error produced by an arithmetic operation on bounded values.
///
/// No partial result accompanies the error: an operation either produces a
/// valid value or fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The result exceeded the maximum value of the type.
    #[error("{type_name} overflow: {lhs} {op} {rhs} exceeds the maximum value {max}")]
    Overflow {
        /// The name of the type.
        type_name: &'static str,
        /// The operation that overflowed.
        op: Operation,
        /// The left operand.
        lhs: String,
        /// The right operand.
        rhs: String,
        /// The maximum value of the type.
        max: String,
    },

    /// The result fell below the minimum value of the type.
    #[error("{type_name} underflow: {lhs} {op} {rhs} is below the minimum value {min}")]
    Underflow {
        /// The name of the type.
        type_name: &'static str,
        /// The operation that underflowed.
        op: Operation,
        /// The left operand.
        lhs: String,
        /// The right operand.
        rhs: String,
        /// The minimum value of the type.
        min: String,
    },

    /// The divisor was zero.
    #[error("{type_name} division by zero: {lhs} {op} 0")]
    DivisionByZero {
        /// The name of the type.
        type_name: &'static str,
        /// Either [`Operation::Divide`] or [`Operation::Remainder`].
        op: Operation,
        /// The dividend.
        lhs: String,
    },

    /// The dividend was not evenly divisible by the divisor.
    #[error("{type_name} division is not exact: {lhs} / {rhs} leaves remainder {remainder}")]
    NonIntegralResult {
        /// The name of the type.
        type_name: &'static str,
        /// The dividend.
        lhs: String,
        /// The divisor.
        rhs: String,
        /// The non-zero remainder.
        remainder: String,
    },
}

impl ArithmeticError {
    /// Reports a result that left `[min, max]` in the direction of `spill`.
    pub(crate) fn spilled<V, B>(
        type_name: &'static str,
        op: Operation,
        lhs: V,
        rhs: V,
        spill: Spill,
        min: B,
        max: B,
    ) -> ArithmeticError
    where
        V: fmt::Display,
        B: fmt::Display,
    {
        let e = match spill {
            Spill::Above => ArithmeticError::Overflow {
                type_name,
                op,
                lhs: lhs.to_string(),
                rhs: rhs.to_string(),
                max: max.to_string(),
            },
            Spill::Below => ArithmeticError::Underflow {
                type_name,
                op,
                lhs: lhs.to_string(),
                rhs: rhs.to_string(),
                min: min.to_string(),
            },
        };
        trace!(type_name, %op, kind = %e.kind(), "arithmetic failed");
        e
    }

    pub(crate) fn division_by_zero<V>(
        type_name: &'static str,
        op: Operation,
        lhs: V,
    ) -> ArithmeticError
    where
        V: fmt::Display,
    {
        trace!(type_name, %op, %lhs, "division by zero");
        ArithmeticError::DivisionByZero {
            type_name,
            op,
            lhs: lhs.to_string(),
        }
    }

    pub(crate) fn non_integral<V>(
        type_name: &'static str,
        lhs: V,
        rhs: V,
        remainder: V,
    ) -> ArithmeticError
    where
        V: fmt::Display,
    {
        trace!(type_name, %lhs, %rhs, %remainder, "inexact division");
        ArithmeticError::NonIntegralResult {
            type_name,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            remainder: remainder.to_string(),
        }
    }

    /// Returns the kind of the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArithmeticError::Overflow { .. } => ErrorKind::Overflow,
            ArithmeticError::Underflow { .. } => ErrorKind::Underflow,
            ArithmeticError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            ArithmeticError::NonIntegralResult { .. } => ErrorKind::NonIntegralResult,
        }
    }

    /// Returns the name of the type whose operation failed.
    pub fn type_name(&self) -> &'static str {
        match self {
            ArithmeticError::Overflow { type_name, .. }
            | ArithmeticError::Underflow { type_name, .. }
            | ArithmeticError::DivisionByZero { type_name, .. }
            | ArithmeticError::NonIntegralResult { type_name, .. } => type_name,
        }
    }
}

/// An error indicating that a string cannot be converted to a bounded value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The string is not a number of the expected form.
    #[error("invalid {type_name} syntax: {input:?}")]
    Syntax {
        /// The name of the target type.
        type_name: &'static str,
        /// The rejected input.
        input: String,
    },
    /// The string is a well-formed number outside the range of the type.
    #[error(transparent)]
    Range(#[from] RangeError),
}

impl ParseError {
    pub(crate) fn syntax(type_name: &'static str, input: &str) -> ParseError {
        ParseError::Syntax {
            type_name,
            input: input.to_owned(),
        }
    }

    /// Returns [`ErrorKind::Syntax`] or [`ErrorKind::Range`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Syntax { .. } => ErrorKind::Syntax,
            ParseError::Range(_) => ErrorKind::Range,
        }
    }
}

/// An error indicating that a bounded value cannot be cast to a primitive
/// type, because the value does not fit into the target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value} cannot be expressed as {target}")]
pub struct TryFromBoundedError {
    pub(crate) value: String,
    pub(crate) target: &'static str,
}

impl TryFromBoundedError {
    /// Returns [`ErrorKind::Range`]; the target type's range is what was
    /// exceeded.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Range
    }
}

/// Any error produced by this crate.
///
/// Useful as the error type of functions that mix construction, parsing, and
/// arithmetic with the `?` operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// See [`RangeError`].
    #[error(transparent)]
    Range(#[from] RangeError),
    /// See [`ArithmeticError`].
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// See [`TryFromBoundedError`].
    #[error(transparent)]
    TryFrom(#[from] TryFromBoundedError),
}

impl Error {
    /// Returns the kind of the underlying failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Range(e) => e.kind(),
            Error::Arithmetic(e) => e.kind(),
            Error::Parse(e) => e.kind(),
            Error::TryFrom(e) => e.kind(),
        }
    }
}
