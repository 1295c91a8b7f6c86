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

//! A cursor over a single script line.

pub struct LexBuf<'a> {
    s: &'a str,
}

impl<'a> LexBuf<'a> {
    pub fn new(s: &'a str) -> LexBuf<'a> {
        LexBuf { s }
    }

    pub fn peek(&self) -> Option<char> {
        self.s.chars().next()
    }

    /// Consumes `prefix` if the remaining input starts with it.
    pub fn consume(&mut self, prefix: &str) -> bool {
        match self.s.strip_prefix(prefix) {
            Some(rest) => {
                self.s = rest;
                true
            }
            None => false,
        }
    }

    pub fn skip_whitespace(&mut self) {
        self.s = self.s.trim_start_matches(|ch: char| ch == ' ' || ch == '\t');
    }

    /// Discards the rest of the line.
    pub fn skip_line(&mut self) {
        self.s = "";
    }
}

impl Iterator for LexBuf<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.s = &self.s[ch.len_utf8()..];
        Some(ch)
    }
}
