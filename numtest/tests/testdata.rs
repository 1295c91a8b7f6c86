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
use std::fs;
use std::path::{Path, PathBuf};

use numtest::ast;
use numtest::backend::Width;
use numtest::parse;
use numtest::run::{self, Outcome, Report};

#[derive(Default)]
struct Collector {
    file: Vec<PathBuf>,
    test: Option<String>,
    passes: usize,
    failures: Vec<String>,
}

impl Report for Collector {
    fn start_file(&mut self, file: &ast::File) {
        self.file.push(file.path.clone());
    }

    fn finish_file(&mut self) {
        self.file.pop();
    }

    fn start_test(&mut self, test: &ast::Test) {
        self.test = Some(format!("{} {} -> {}", test.id, test.operation, test.result));
    }

    fn finish_test(&mut self, outcome: Outcome) {
        let test = self.test.take().unwrap_or_default();
        match outcome {
            Outcome::Passed => self.passes += 1,
            Outcome::Failed { cause } => {
                let file = self.file.last().map(|f| f.display().to_string());
                self.failures
                    .push(format!("{}: {}: {}", file.unwrap_or_default(), test, cause));
            }
            Outcome::Skipped => (),
        }
    }
}

fn scripts() -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata");
    let mut paths = vec![];
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().map_or(false, |ext| ext == "numtest") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

#[test]
fn test_testdata() -> Result<(), Box<dyn Error>> {
    let paths = scripts()?;
    assert_eq!(paths.len(), 13);

    let mut collector = Collector::default();
    for path in &paths {
        let file = parse::parse_file(path)?;
        run::run_file(&mut collector, &file, Width::Int32)?;
    }
    assert!(
        collector.failures.is_empty(),
        "{} failures:\n{}",
        collector.failures.len(),
        collector.failures.join("\n")
    );
    assert!(collector.passes > 500, "only {} tests passed", collector.passes);
    Ok(())
}
