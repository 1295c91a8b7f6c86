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

//! Dispatch from a width named in a script to the bounded type it denotes.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use strictnum::{
    BoundedNumeric, Float32, Float64, Int128, Int16, Int32, Int64, Int8, UInt128, UInt16, UInt32,
    UInt64, UInt8,
};

pub enum BackendError {
    Unsupported,
    Failure { cause: Box<dyn Error> },
}

impl BackendError {
    pub fn failure<S>(message: S) -> BackendError
    where
        S: Into<String>,
    {
        let message = message.into();
        BackendError::Failure {
            cause: message.into(),
        }
    }
}

impl<E> From<E> for BackendError
where
    E: Error + 'static,
{
    fn from(cause: E) -> BackendError {
        BackendError::Failure {
            cause: cause.into(),
        }
    }
}

pub type BackendResult<T> = Result<T, BackendError>;

/// One of the concrete bounded types provided by strictnum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Int8,
    Int16,
    Int32,
    UInt8,
    UInt16,
    UInt32,
    Int64,
    UInt64,
    Int128,
    UInt128,
    Float32,
    Float64,
}

impl Width {
    pub const ALL: [Width; 12] = [
        Width::Int8,
        Width::Int16,
        Width::Int32,
        Width::UInt8,
        Width::UInt16,
        Width::UInt32,
        Width::Int64,
        Width::UInt64,
        Width::Int128,
        Width::UInt128,
        Width::Float32,
        Width::Float64,
    ];

    /// Calls `visitor` with the bounded type this width denotes.
    pub fn visit<V>(self, visitor: V) -> V::Output
    where
        V: WidthVisitor,
    {
        match self {
            Width::Int8 => visitor.visit::<Int8>(),
            Width::Int16 => visitor.visit::<Int16>(),
            Width::Int32 => visitor.visit::<Int32>(),
            Width::UInt8 => visitor.visit::<UInt8>(),
            Width::UInt16 => visitor.visit::<UInt16>(),
            Width::UInt32 => visitor.visit::<UInt32>(),
            Width::Int64 => visitor.visit::<Int64>(),
            Width::UInt64 => visitor.visit::<UInt64>(),
            Width::Int128 => visitor.visit::<Int128>(),
            Width::UInt128 => visitor.visit::<UInt128>(),
            Width::Float32 => visitor.visit::<Float32>(),
            Width::Float64 => visitor.visit::<Float64>(),
        }
    }

    pub fn name(self) -> &'static str {
        struct NameVisitor;

        impl WidthVisitor for NameVisitor {
            type Output = &'static str;

            fn visit<N: BoundedNumeric>(self) -> &'static str {
                N::TYPE_NAME
            }
        }

        self.visit(NameVisitor)
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Width {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Width, Box<dyn Error>> {
        Width::ALL
            .iter()
            .copied()
            .find(|width| width.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown type \"{}\"", s).into())
    }
}

/// An operation that is generic over the bounded type of a [`Width`].
pub trait WidthVisitor {
    type Output;

    fn visit<N: BoundedNumeric>(self) -> Self::Output;
}
