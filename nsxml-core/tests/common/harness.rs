//! Test harness for running fixtures with stochastic chunk splits

use nsxml_core::{Chunk, Entry, ErrorKind, WriteError, Writer, WriterConfig};

use crate::common::{Gen, TestCase};

/// Result of running a test
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub chunks: Vec<usize>,
    pub expected: String,
    pub actual: String,
    pub seed: u64,
}

/// Serialize entries as a single chunk, including the final newline.
pub fn render(entries: &[Entry]) -> Result<String, WriteError> {
    render_chunks(vec![Chunk::from(entries.to_vec())], WriterConfig::default())
}

/// Serialize a chunk sequence with `config`, including the final newline.
pub fn render_chunks(chunks: Vec<Chunk>, config: WriterConfig) -> Result<String, WriteError> {
    let mut writer = Writer::with_config(config);
    let mut xml = String::new();
    for chunk in &chunks {
        xml.push_str(&writer.feed(chunk)?);
    }
    xml.push_str(&writer.finish()?);
    Ok(xml)
}

fn config(case: &TestCase) -> WriterConfig {
    WriterConfig {
        max_depth: case.max_depth,
        escape: case.escape,
    }
}

fn outcome(result: Result<String, WriteError>) -> String {
    match result {
        Ok(xml) => xml,
        Err(err) => format!("error {:?}: {}", kind_name(err.kind()), err),
    }
}

fn kind_name(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Structural => "Structural",
        ErrorKind::Sequencing => "Sequencing",
        ErrorKind::Configuration => "Configuration",
    }
}

fn expected(case: &TestCase) -> String {
    match (&case.xml, &case.error) {
        (Some(xml), None) => xml.clone(),
        (None, Some(kind)) => format!("error {:?}", kind),
        _ => panic!("{}: exactly one of `xml` or `error` must be set", case.id),
    }
}

fn matches(case: &TestCase, actual: &str, expected: &str) -> bool {
    if case.error.is_some() {
        actual.starts_with(expected)
    } else {
        actual == expected
    }
}

/// Run a single test case as one chunk
pub fn run_test(case: &TestCase) -> TestResult {
    let entries = case.entries();
    let chunk = Chunk::from(entries.clone());
    let actual = outcome(render_chunks(vec![chunk], config(case)));
    let expected = expected(case);

    TestResult {
        passed: matches(case, &actual, &expected),
        chunks: vec![entries.len()],
        expected,
        actual,
        seed: 0,
    }
}

/// Run a test case split into random chunks; output must not change
pub fn run_with_splits(case: &TestCase, gen: &mut Gen) -> TestResult {
    let chunks = gen.split(&case.entries());
    let sizes = chunks.iter().map(Chunk::len).collect();
    let actual = outcome(render_chunks(chunks, config(case)));
    let expected = expected(case);

    TestResult {
        passed: matches(case, &actual, &expected),
        chunks: sizes,
        expected,
        actual,
        seed: gen.seed,
    }
}

impl TestResult {
    /// Print detailed failure info
    pub fn print_failure(&self, case_id: &str) {
        eprintln!("\n=== FAILED: {} ===", case_id);
        eprintln!("Seed: {} (set NSXML_TEST_SEED={} to reproduce)", self.seed, self.seed);
        eprintln!("Chunk sizes: {:?}", self.chunks);
        eprintln!("\nExpected:\n{:?}", self.expected);
        eprintln!("\nActual:\n{:?}", self.actual);
    }
}
