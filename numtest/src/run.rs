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
use std::error::Error;

use strictnum::{ArithmeticError, BoundedNumeric, ErrorKind};
use tracing::debug;

use crate::ast;
use crate::backend::{BackendError, BackendResult, Width, WidthVisitor};

pub enum Outcome {
    Passed,
    Failed { cause: Box<dyn Error> },
    Skipped,
}

pub trait Report {
    fn start_file(&mut self, file: &ast::File);
    fn finish_file(&mut self);
    fn start_test(&mut self, test: &ast::Test);
    fn finish_test(&mut self, outcome: Outcome);
}

/// Runs every test in `file`, starting out with tests run against `width`.
///
/// A `type` directive changes the width for the remainder of the file it
/// appears in. Included files start out with the width in effect at the
/// point of inclusion.
pub fn run_file<R>(reporter: &mut R, file: &ast::File, width: Width) -> Result<(), Box<dyn Error>>
where
    R: Report,
{
    reporter.start_file(file);
    let mut width = width;
    for line in &file.lines {
        match line {
            ast::Line::Directive(directive) => run_directive(&mut width, reporter, directive)?,
            ast::Line::Test(test) => run_test(width, reporter, test),
        }
    }
    reporter.finish_file();
    Ok(())
}

fn run_directive<R>(
    width: &mut Width,
    reporter: &mut R,
    directive: &ast::Directive,
) -> Result<(), Box<dyn Error>>
where
    R: Report,
{
    debug!(%directive, "running directive");
    match directive {
        ast::Directive::Type(w) => *width = *w,
        ast::Directive::Include(file) => run_file(reporter, file, *width)?,
        ast::Directive::Version(_) => (),
    }
    Ok(())
}

fn run_test<R>(width: Width, reporter: &mut R, test: &ast::Test)
where
    R: Report,
{
    reporter.start_test(test);
    debug!(id = %test.id, %width, operation = %test.operation, "running test");
    let outcome = match width.visit(TestVisitor { test }) {
        Ok(()) => Outcome::Passed,
        Err(BackendError::Failure { cause }) => Outcome::Failed { cause },
        Err(BackendError::Unsupported) => Outcome::Skipped,
    };
    reporter.finish_test(outcome);
}

struct TestVisitor<'a> {
    test: &'a ast::Test,
}

impl WidthVisitor for TestVisitor<'_> {
    type Output = BackendResult<()>;

    fn visit<N: BoundedNumeric>(self) -> BackendResult<()> {
        run_test_inner::<N>(self.test)
    }
}

/// The canonical form of a computed value, or the kind of error that
/// prevented computing it.
type Evaluation = Result<String, ErrorKind>;

fn run_test_inner<N>(test: &ast::Test) -> BackendResult<()>
where
    N: BoundedNumeric,
{
    let actual = match &test.operation {
        ast::Operation::Add(lhs, rhs) => evaluate::<N>(lhs, rhs, N::add)?,
        ast::Operation::Apply(n) => parse_operand::<N>(n)?.map(|n| n.to_string()),
        ast::Operation::Compare(lhs, rhs) => {
            let lhs = parse_operand::<N>(lhs)?;
            let rhs = parse_operand::<N>(rhs)?;
            lhs.and_then(|lhs| {
                let ordering = match lhs.partial_cmp(&rhs?) {
                    None => "NaN",
                    Some(Ordering::Less) => "-1",
                    Some(Ordering::Equal) => "0",
                    Some(Ordering::Greater) => "1",
                };
                Ok(ordering.to_string())
            })
        }
        ast::Operation::Divide(lhs, rhs) => evaluate::<N>(lhs, rhs, N::div)?,
        ast::Operation::Multiply(lhs, rhs) => evaluate::<N>(lhs, rhs, N::mul)?,
        ast::Operation::Remainder(lhs, rhs) => evaluate::<N>(lhs, rhs, N::rem)?,
        ast::Operation::Subtract(lhs, rhs) => evaluate::<N>(lhs, rhs, N::sub)?,
    };
    check_result::<N>(test, actual)
}

/// Parses an operand. The operand `#` stands for a value that the width
/// cannot express, which skips the test.
fn parse_operand<N>(s: &str) -> BackendResult<Result<N, ErrorKind>>
where
    N: BoundedNumeric,
{
    if s == "#" {
        return Err(BackendError::Unsupported);
    }
    Ok(s.parse::<N>().map_err(|e| e.kind()))
}

fn evaluate<N>(
    lhs: &str,
    rhs: &str,
    op: fn(N, N) -> Result<N, ArithmeticError>,
) -> BackendResult<Evaluation>
where
    N: BoundedNumeric,
{
    let lhs = parse_operand::<N>(lhs)?;
    let rhs = parse_operand::<N>(rhs)?;
    Ok(lhs
        .and_then(|lhs| op(lhs, rhs?).map_err(|e| e.kind()))
        .map(|n| n.to_string()))
}

fn check_result<N>(test: &ast::Test, actual: Evaluation) -> BackendResult<()>
where
    N: BoundedNumeric,
{
    match (test.conditions.first(), actual) {
        (Some(condition), Err(kind)) if condition.kind() == kind => Ok(()),
        (Some(condition), Err(kind)) => Err(BackendError::failure(format!(
            "failed with {} but expected {}",
            kind,
            condition.kind()
        ))),
        (Some(condition), Ok(actual)) => Err(BackendError::failure(format!(
            "got {} but expected failure with {}",
            actual,
            condition.kind()
        ))),
        (None, Err(kind)) => Err(BackendError::failure(format!(
            "failed with {} but expected {}",
            kind, test.result
        ))),
        (None, Ok(actual)) => check_result_str(&canonicalize::<N>(&test.result), &actual),
    }
}

/// Returns the canonical form of an expected result, if it is a value of
/// the width. Other results, like the `-1` of a comparison on an unsigned
/// width, are compared verbatim.
fn canonicalize<N>(expected: &str) -> String
where
    N: BoundedNumeric,
{
    match expected.parse::<N>() {
        Ok(n) => n.to_string(),
        Err(_) => expected.to_owned(),
    }
}

fn check_result_str(expected: &str, actual: &str) -> BackendResult<()> {
    if expected != actual {
        return Err(BackendError::failure(format!(
            "got {} but expected {}",
            actual, expected
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{run_file, Outcome, Report};
    use crate::ast::{Condition, Directive, File, Line, Operation, Test};
    use crate::backend::Width;

    #[derive(Default)]
    struct Tally {
        passed: Vec<String>,
        failed: Vec<String>,
        skipped: Vec<String>,
        current: Option<String>,
        files: usize,
    }

    impl Report for Tally {
        fn start_file(&mut self, _: &File) {
            self.files += 1;
        }

        fn finish_file(&mut self) {}

        fn start_test(&mut self, test: &Test) {
            self.current = Some(test.id.clone());
        }

        fn finish_test(&mut self, outcome: Outcome) {
            let id = self.current.take().unwrap();
            match outcome {
                Outcome::Passed => self.passed.push(id),
                Outcome::Failed { cause } => self.failed.push(format!("{}: {}", id, cause)),
                Outcome::Skipped => self.skipped.push(id),
            }
        }
    }

    fn test(id: &str, operation: Operation, result: &str, conditions: &[Condition]) -> Line {
        Line::Test(Test {
            id: id.into(),
            operation,
            result: result.into(),
            conditions: conditions.to_vec(),
        })
    }

    fn file(lines: Vec<Line>) -> File {
        File {
            path: PathBuf::from("test.numtest"),
            lines,
        }
    }

    #[test]
    fn test_run_file() {
        let included = file(vec![
            test("inc1", Operation::Add("100".into(), "28".into()), "?", &[Condition::Overflow]),
            Line::Directive(Directive::Type(Width::Int16)),
            test("inc2", Operation::Add("100".into(), "28".into()), "128", &[]),
        ]);
        let main = file(vec![
            Line::Directive(Directive::Type(Width::Int8)),
            Line::Directive(Directive::Include(included)),
            test("t1", Operation::Add("100".into(), "28".into()), "?", &[Condition::Overflow]),
            test("t2", Operation::Apply("007".into()), "7", &[]),
            test("t3", Operation::Compare("1".into(), "2".into()), "-1", &[]),
            test("t4", Operation::Divide("5".into(), "2".into()), "2", &[]),
            test("t5", Operation::Divide("x".into(), "2".into()), "?", &[Condition::Underflow]),
            test("t6", Operation::Subtract("#".into(), "1".into()), "0", &[]),
            test("t7", Operation::Multiply("-64".into(), "2".into()), "-128.0", &[]),
        ]);

        let mut tally = Tally::default();
        run_file(&mut tally, &main, Width::Float64).unwrap();
        assert_eq!(tally.files, 2);
        assert_eq!(tally.passed, vec!["inc1", "inc2", "t1", "t2", "t3", "t7"]);
        assert_eq!(
            tally.failed,
            vec![
                "t4: failed with non-integral result but expected 2",
                "t5: failed with syntax but expected underflow",
            ]
        );
        assert_eq!(tally.skipped, vec!["t6"]);
    }

    #[test]
    fn test_run_float() {
        let main = file(vec![
            test("f1", Operation::Compare("NaN".into(), "1".into()), "NaN", &[]),
            test("f2", Operation::Add("0.5".into(), "0.25".into()), "0.75", &[]),
            test("f3", Operation::Divide("1".into(), "-0".into()), "?", &[Condition::DivisionByZero]),
            test("f4", Operation::Apply("1e39".into()), "?", &[Condition::Range]),
            test("f5", Operation::Apply("1.5".into()), "?", &[Condition::Range]),
        ]);

        let mut tally = Tally::default();
        run_file(&mut tally, &main, Width::Float32).unwrap();
        assert_eq!(tally.passed, vec!["f1", "f2", "f3", "f4"]);
        assert_eq!(tally.failed, vec!["f5: got 1.5 but expected failure with range"]);
    }
}
