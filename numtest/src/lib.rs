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

//! A conformance runner for strictnum.
//!
//! A `.numtest` script is a sequence of directives and tests, one per line.
//! Text after `--` is a comment, and tokens may be quoted with `'` or `"`.
//!
//! ```text
//! version: 1
//! type: Int8
//!
//! add001 add 100 27 -> 127
//! add002 add 100 28 -> ? overflow
//! cmp001 compare -1 1 -> -1
//! include: common.numtest
//! ```
//!
//! A result of `?` means that the operation must fail with the error named
//! by the single condition that follows it.

pub mod ast;
pub mod backend;
pub mod lex;
pub mod parse;
pub mod run;
