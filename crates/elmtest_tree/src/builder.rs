//! Incremental test-tree construction.
//!
//! elm-test reports each test once it completes, carrying its full label
//! path but no suite start or end markers. The IDE tree however wants a
//! suite node to be started before its children and finished after them.
//!
//! [`TreeBuilder`] remembers only the chain of suites currently open. For
//! every result it finishes the open suites that are not ancestors of the
//! new test (deepest first), starts the missing ones (root first), and then
//! emits the test itself. Results from one suite arrive contiguously, so a
//! finished suite is not reopened in practice; if it is, it simply shows up
//! as a second node with the same id.

use std::time::Duration;

use elmtest_labels::{
    path_string, to_suite_location_url, to_test_location_url, ErrorLocation, LabelPath,
};

use crate::{CompileError, TestOutcome, TestResult, TestSummary};

/// One change to the IDE test tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeEvent {
    SuiteStarted {
        id: String,
        parent_id: Option<String>,
        name: String,
        location_url: String,
    },
    SuiteFinished {
        id: String,
        name: String,
    },
    TestStarted {
        id: String,
        parent_id: Option<String>,
        name: String,
        location_url: Option<String>,
    },
    TestFinished {
        id: String,
        name: String,
        duration: Duration,
    },
    TestFailed {
        id: String,
        name: String,
        message: String,
        expected: Option<String>,
        actual: Option<String>,
        /// Compiler error rather than a failing assertion.
        test_error: bool,
    },
    TestIgnored {
        id: String,
        name: String,
        comment: String,
    },
}

impl TreeEvent {
    /// Node id the event applies to.
    pub fn id(&self) -> &str {
        match self {
            TreeEvent::SuiteStarted { id, .. }
            | TreeEvent::SuiteFinished { id, .. }
            | TreeEvent::TestStarted { id, .. }
            | TreeEvent::TestFinished { id, .. }
            | TreeEvent::TestFailed { id, .. }
            | TreeEvent::TestIgnored { id, .. } => id,
        }
    }
}

/// Node id of a path: its unescaped rendering.
fn node_id(path: &LabelPath) -> String {
    path_string(path)
}

fn node_name(path: &LabelPath) -> String {
    path.name().unwrap_or_default().to_owned()
}

/// Id of the enclosing node, `None` at top level.
fn parent_id(path: &LabelPath) -> Option<String> {
    path.parent()
        .filter(|parent| !parent.is_root())
        .map(|parent| node_id(&parent))
}

/// Turns completed test results into ordered tree events.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    /// Deepest open suite; every prefix of it is open too.
    open: LabelPath,
    summary: TestSummary,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder::default()
    }

    /// Suites currently open, deepest last.
    pub fn open_suites(&self) -> impl Iterator<Item = LabelPath> + '_ {
        self.open
            .sub_parents(&LabelPath::ROOT)
            .chain((!self.open.is_root()).then(|| self.open.clone()))
    }

    pub fn summary(&self) -> &TestSummary {
        &self.summary
    }

    /// Events for one completed test.
    pub fn accept(&mut self, result: &TestResult) -> Vec<TreeEvent> {
        let path = &result.path;
        let suite = path.parent().unwrap_or(LabelPath::ROOT);
        let common = self.open.common_parent(&suite);

        let mut events = Vec::new();
        self.finish_until(&common, &mut events);
        for opened in path.sub_parents(&common) {
            tracing::debug!(suite = %opened, "starting suite");
            events.push(TreeEvent::SuiteStarted {
                id: node_id(&opened),
                parent_id: parent_id(&opened),
                name: node_name(&opened),
                location_url: to_suite_location_url(&opened),
            });
        }
        self.open = suite;

        let id = node_id(path);
        let name = node_name(path);
        events.push(TreeEvent::TestStarted {
            id: id.clone(),
            parent_id: parent_id(path),
            name: name.clone(),
            location_url: Some(to_test_location_url(path)),
        });
        events.push(match &result.outcome {
            TestOutcome::Passed => TreeEvent::TestFinished {
                id,
                name,
                duration: result.duration,
            },
            TestOutcome::Failed {
                message,
                expected,
                actual,
            } => TreeEvent::TestFailed {
                id,
                name,
                message: message.clone(),
                expected: expected.clone(),
                actual: actual.clone(),
                test_error: false,
            },
            TestOutcome::Todo(comment) => TreeEvent::TestIgnored {
                id,
                name,
                comment: comment.clone(),
            },
        });

        self.summary.add_result(result);
        events
    }

    /// Events for a compiler error reported in place of test results.
    ///
    /// The error becomes a failed top-level node pointing at the compiler's
    /// source position, when one is known.
    pub fn accept_compile_error(&mut self, error: &CompileError) -> Vec<TreeEvent> {
        let mut events = Vec::new();
        self.finish_until(&LabelPath::ROOT, &mut events);

        let location_url = error.location.as_ref().map(ErrorLocation::to_url);
        if location_url.is_none() {
            tracing::debug!(title = %error.title, "compile error without source location");
        }
        events.push(TreeEvent::TestStarted {
            id: error.title.clone(),
            parent_id: None,
            name: error.title.clone(),
            location_url,
        });
        events.push(TreeEvent::TestFailed {
            id: error.title.clone(),
            name: error.title.clone(),
            message: error.message.clone(),
            expected: None,
            actual: None,
            test_error: true,
        });

        self.summary.add_compile_error();
        events
    }

    /// Finish every suite still open.
    pub fn finish(&mut self) -> Vec<TreeEvent> {
        let mut events = Vec::new();
        self.finish_until(&LabelPath::ROOT, &mut events);
        events
    }

    /// Finish open suites, deepest first, until `ancestor` is the deepest.
    fn finish_until(&mut self, ancestor: &LabelPath, events: &mut Vec<TreeEvent>) {
        while self.open.len() > ancestor.len() {
            tracing::debug!(suite = %self.open, "finishing suite");
            events.push(TreeEvent::SuiteFinished {
                id: node_id(&self.open),
                name: node_name(&self.open),
            });
            self.open = self.open.parent().unwrap_or(LabelPath::ROOT);
        }
    }
}
