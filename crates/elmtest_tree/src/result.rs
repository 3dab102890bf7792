//! Test result types.

use elmtest_labels::{ErrorLocation, LabelPath};
use std::time::Duration;

/// Outcome of a single elm-test test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TestOutcome {
    /// `pass`
    Passed,
    /// `fail`, with the first failure's message and comparison values.
    Failed {
        message: String,
        expected: Option<String>,
        actual: Option<String>,
    },
    /// `todo`, with the todo comment.
    Todo(String),
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TestOutcome::Failed { .. })
    }

    pub fn is_todo(&self) -> bool {
        matches!(self, TestOutcome::Todo(_))
    }
}

/// Result of one completed test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestResult {
    /// Module, enclosing describe labels, test label.
    pub path: LabelPath,
    pub outcome: TestOutcome,
    pub duration: Duration,
}

impl TestResult {
    /// Create a passed test result.
    pub fn passed(path: LabelPath, duration: Duration) -> Self {
        TestResult {
            path,
            outcome: TestOutcome::Passed,
            duration,
        }
    }

    /// Create a failed test result.
    #[cold]
    pub fn failed(path: LabelPath, message: impl Into<String>, duration: Duration) -> Self {
        TestResult {
            path,
            outcome: TestOutcome::Failed {
                message: message.into(),
                expected: None,
                actual: None,
            },
            duration,
        }
    }

    /// Create a failed result carrying the compared values.
    #[cold]
    pub fn failed_comparison(
        path: LabelPath,
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
        duration: Duration,
    ) -> Self {
        TestResult {
            path,
            outcome: TestOutcome::Failed {
                message: message.into(),
                expected: Some(expected.into()),
                actual: Some(actual.into()),
            },
            duration,
        }
    }

    /// Create a todo result.
    #[cold]
    pub fn todo(path: LabelPath, comment: impl Into<String>) -> Self {
        TestResult {
            path,
            outcome: TestOutcome::Todo(comment.into()),
            duration: Duration::ZERO,
        }
    }
}

/// A compiler error reported instead of test results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileError {
    pub title: String,
    /// Plain-text rendering of the compiler message.
    pub message: String,
    /// Where the compiler points, if it does.
    pub location: Option<ErrorLocation>,
}

/// Overall summary of one test run.
#[derive(Clone, Debug, Default)]
pub struct TestSummary {
    /// Total tests passed.
    pub passed: usize,
    /// Total tests failed.
    pub failed: usize,
    /// Total `Test.todo` entries.
    pub todo: usize,
    /// Compiler errors reported in place of results.
    pub compile_errors: usize,
    /// Sum of the reported test durations.
    pub duration: Duration,
}

impl TestSummary {
    pub fn new() -> Self {
        TestSummary::default()
    }

    pub fn add_result(&mut self, result: &TestResult) {
        match &result.outcome {
            TestOutcome::Passed => self.passed += 1,
            TestOutcome::Failed { .. } => self.failed += 1,
            TestOutcome::Todo(_) => self.todo += 1,
        }
        self.duration += result.duration;
    }

    pub fn add_compile_error(&mut self) {
        self.compile_errors += 1;
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.todo
    }

    /// Returns true if any test failed or the tests did not compile.
    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.compile_errors > 0
    }

    /// Get exit code: 0 = all pass, 1 = failures (tests or compile errors), 2 = no tests found.
    pub fn exit_code(&self) -> i32 {
        if self.total() == 0 && self.compile_errors == 0 {
            2
        } else {
            i32::from(self.has_failures())
        }
    }
}
