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
use std::path::PathBuf;

use strictnum::ErrorKind;

use crate::backend::Width;

#[derive(Debug)]
pub struct File {
    pub path: PathBuf,
    pub lines: Vec<Line>,
}

#[derive(Debug)]
pub enum Line {
    Directive(Directive),
    Test(Test),
}

#[derive(Debug)]
pub enum Directive {
    /// Selects the width that subsequent tests run against.
    Type(Width),
    Include(File),
    Version(String),
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Directive::Type(width) => write!(f, "type: {}", width),
            Directive::Include(file) => write!(f, "include: {}", file.path.display()),
            Directive::Version(v) => write!(f, "version: {}", v),
        }
    }
}

#[derive(Debug)]
pub struct Test {
    pub id: String,
    pub operation: Operation,
    pub result: String,
    pub conditions: Vec<Condition>,
}

impl Test {
    /// Reports whether the test expects its operation to fail.
    pub fn expects_failure(&self) -> bool {
        self.result == "?"
    }
}

#[derive(Debug)]
pub enum Operation {
    Add(String, String),
    Apply(String),
    Compare(String, String),
    Divide(String, String),
    Multiply(String, String),
    Remainder(String, String),
    Subtract(String, String),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Add(lhs, rhs) => write!(f, "add {} {}", lhs, rhs),
            Operation::Apply(n) => write!(f, "apply {}", n),
            Operation::Compare(lhs, rhs) => write!(f, "compare {} {}", lhs, rhs),
            Operation::Divide(lhs, rhs) => write!(f, "divide {} {}", lhs, rhs),
            Operation::Multiply(lhs, rhs) => write!(f, "multiply {} {}", lhs, rhs),
            Operation::Remainder(lhs, rhs) => write!(f, "remainder {} {}", lhs, rhs),
            Operation::Subtract(lhs, rhs) => write!(f, "subtract {} {}", lhs, rhs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    ConversionSyntax,
    DivisionByZero,
    NonIntegralResult,
    Overflow,
    Range,
    Underflow,
}

impl Condition {
    /// The error kind that a failing operation must report to satisfy this
    /// condition.
    pub fn kind(self) -> ErrorKind {
        match self {
            Condition::ConversionSyntax => ErrorKind::Syntax,
            Condition::DivisionByZero => ErrorKind::DivisionByZero,
            Condition::NonIntegralResult => ErrorKind::NonIntegralResult,
            Condition::Overflow => ErrorKind::Overflow,
            Condition::Range => ErrorKind::Range,
            Condition::Underflow => ErrorKind::Underflow,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Condition::ConversionSyntax => "conversion_syntax",
            Condition::DivisionByZero => "division_by_zero",
            Condition::NonIntegralResult => "non_integral_result",
            Condition::Overflow => "overflow",
            Condition::Range => "range",
            Condition::Underflow => "underflow",
        })
    }
}
