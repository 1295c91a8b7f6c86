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

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::ast;
use crate::lex::LexBuf;

struct Context<'a> {
    path: &'a Path,
    /// The canonical paths of the files being parsed, outermost first.
    including: &'a [PathBuf],
}

pub fn parse_file(path: &Path) -> Result<ast::File, Box<dyn Error>> {
    parse_included_file(path, &[])
}

fn parse_included_file(path: &Path, including: &[PathBuf]) -> Result<ast::File, Box<dyn Error>> {
    let f = BufReader::new(File::open(path)?);
    let canonical = path.canonicalize()?;
    if including.contains(&canonical) {
        return Err(format!("include cycle through {}", path.display()).into());
    }
    let mut chain = including.to_vec();
    chain.push(canonical);
    let cx = &Context {
        path,
        including: &chain,
    };
    let mut lines = vec![];
    for (i, line) in f.lines().enumerate() {
        let line = line?;
        let mut buf = LexBuf::new(&line);
        match parse_line(cx, &mut buf) {
            Ok(None) => (),
            Ok(Some(line)) => lines.push(line),
            Err(e) => return Err(format!("parsing line {}: {}", i + 1, e).into()),
        }
    }
    Ok(ast::File {
        path: path.to_path_buf(),
        lines,
    })
}

fn parse_line(cx: &Context, buf: &mut LexBuf) -> Result<Option<ast::Line>, Box<dyn Error>> {
    let token = match parse_token(buf) {
        None => return Ok(None),
        Some(token) => token,
    };
    if let Some(keyword) = token.strip_suffix(':') {
        let value = require_token(buf, "value")?;
        let directive = parse_directive(cx, keyword, value)?;
        return Ok(Some(ast::Line::Directive(directive)));
    }

    let id = token;
    let operation = parse_operation(buf)?;
    if require_token(buf, "->")? != "->" {
        return Err("missing \"->\" token".into());
    }
    let result = require_token(buf, "result")?;
    let mut conditions = vec![];
    while let Some(condition) = parse_token(buf) {
        conditions.push(condition.parse()?);
    }
    if result == "?" && conditions.len() != 1 {
        let n = conditions.len();
        return Err(format!("test {} expects a failure but names {} conditions", id, n).into());
    }
    if result != "?" && !conditions.is_empty() {
        return Err(format!("test {} expects a result but names a condition", id).into());
    }
    Ok(Some(ast::Line::Test(ast::Test {
        id,
        operation,
        result,
        conditions,
    })))
}

fn require_token(buf: &mut LexBuf, name: &str) -> Result<String, Box<dyn Error>> {
    parse_token(buf).ok_or_else(|| format!("missing \"{}\" token", name).into())
}

fn parse_token(buf: &mut LexBuf) -> Option<String> {
    buf.skip_whitespace();

    if buf.consume("--") {
        buf.skip_line();
        return None;
    }

    match buf.peek() {
        Some(quote @ '\'') | Some(quote @ '"') => {
            buf.next();
            Some(parse_quoted_token(buf, quote))
        }
        _ => parse_unquoted_token(buf),
    }
}

fn parse_unquoted_token(buf: &mut LexBuf) -> Option<String> {
    let mut token = String::new();
    while let Some(ch) = buf.peek() {
        if ch == ' ' || ch == '\t' {
            break;
        }
        token.push(ch);
        buf.next();
    }
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Parses a token up to the closing `quote`, where a doubled quote stands
/// for a literal one.
fn parse_quoted_token(buf: &mut LexBuf, quote: char) -> String {
    let mut token = String::new();
    while let Some(ch) = buf.next() {
        if ch != quote {
            token.push(ch);
        } else if buf.peek() == Some(quote) {
            token.push(quote);
            buf.next();
        } else {
            break;
        }
    }
    token
}

fn parse_directive(
    cx: &Context,
    keyword: &str,
    value: String,
) -> Result<ast::Directive, Box<dyn Error>> {
    match keyword.to_lowercase().as_str() {
        "include" => {
            let path = cx.path.with_file_name(value);
            let file = parse_included_file(&path, cx.including)
                .map_err(|e| format!("opening {}: {}", path.display(), e))?;
            Ok(ast::Directive::Include(file))
        }
        "type" => Ok(ast::Directive::Type(value.parse()?)),
        "version" => Ok(ast::Directive::Version(value)),
        _ => Err(format!("unknown directive \"{}\"", keyword).into()),
    }
}

fn parse_operation(buf: &mut LexBuf) -> Result<ast::Operation, Box<dyn Error>> {
    let operation = require_token(buf, "operation")?;
    let mut op = || require_token(buf, "operand");
    match operation.to_lowercase().as_str() {
        "add" => Ok(ast::Operation::Add(op()?, op()?)),
        "apply" => Ok(ast::Operation::Apply(op()?)),
        "compare" => Ok(ast::Operation::Compare(op()?, op()?)),
        "divide" => Ok(ast::Operation::Divide(op()?, op()?)),
        "multiply" => Ok(ast::Operation::Multiply(op()?, op()?)),
        "remainder" => Ok(ast::Operation::Remainder(op()?, op()?)),
        "subtract" => Ok(ast::Operation::Subtract(op()?, op()?)),
        _ => Err(format!("unknown operation \"{}\"", operation).into()),
    }
}

impl FromStr for ast::Condition {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<ast::Condition, Box<dyn Error>> {
        match s.to_lowercase().as_str() {
            "conversion_syntax" => Ok(ast::Condition::ConversionSyntax),
            "division_by_zero" => Ok(ast::Condition::DivisionByZero),
            "non_integral_result" => Ok(ast::Condition::NonIntegralResult),
            "overflow" => Ok(ast::Condition::Overflow),
            "range" => Ok(ast::Condition::Range),
            "underflow" => Ok(ast::Condition::Underflow),
            _ => Err(format!("unknown condition \"{}\"", s).into()),
        }
    }
}
