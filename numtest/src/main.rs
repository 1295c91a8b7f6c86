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

use std::env;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process;

use tracing::Level;

use numtest::ast;
use numtest::backend::Width;
use numtest::parse;
use numtest::run::{self, Outcome, Report};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut paths = vec![];
    let mut verbose = false;
    let mut width = Width::Int32;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" => verbose = true,
            "-t" => match args.next() {
                None => return Err("-t flag requires a value".into()),
                Some(t) => width = t.parse()?,
            },
            _ => paths.push(PathBuf::from(arg)),
        }
    }
    if paths.is_empty() {
        return Err("usage: numtest [-v] [-t TYPE] <FILE>...".into());
    }

    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_writer(io::stderr)
            .init();
    }

    let mut reporter = ConsoleReporter::new(verbose);

    for path in paths {
        let file = parse::parse_file(&path)?;
        run::run_file(&mut reporter, &file, width)?;
    }

    println!("PASS {}", reporter.passes);
    println!("FAIL {}", reporter.failures);
    println!("SKIP {}", reporter.skips);

    if reporter.failures > 0 {
        process::exit(1)
    }
    Ok(())
}

struct ConsoleReporter {
    failures: usize,
    passes: usize,
    skips: usize,
    verbose: bool,
}

impl ConsoleReporter {
    fn new(verbose: bool) -> ConsoleReporter {
        ConsoleReporter {
            failures: 0,
            passes: 0,
            skips: 0,
            verbose,
        }
    }
}

impl Report for ConsoleReporter {
    fn start_file(&mut self, file: &ast::File) {
        println!("==> {}", file.path.display())
    }

    fn finish_file(&mut self) {}

    fn start_test(&mut self, test: &ast::Test) {
        if self.verbose {
            print!("{} {} -> {}", test.id, test.operation, test.result);
            if let Some(condition) = test.conditions.first() {
                print!(" ({})", condition);
            }
            println!();
        } else {
            print!("{} ", test.id);
        }
    }

    fn finish_test(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Passed => {
                self.passes += 1;
                println!("PASS");
            }
            Outcome::Failed { cause } => {
                self.failures += 1;
                println!("FAIL: {}", cause);
            }
            Outcome::Skipped => {
                self.skips += 1;
                println!("SKIP");
            }
        }
        if self.verbose {
            println!()
        }
    }
}
