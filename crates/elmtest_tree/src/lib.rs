//! Test-tree events for streamed elm-test results.
//!
//! This crate sits between the elm-test result stream and an IDE test tree:
//!
//! - **result**: completed tests, compiler errors and the run summary
//! - **builder**: [`TreeBuilder`], which materializes describe suites lazily
//!   from each result's label path and attaches location URLs to every node
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use elmtest_labels::to_path;
//! use elmtest_tree::{TestResult, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new();
//! let mut events = builder.accept(&TestResult::passed(
//!     to_path(["Module", "suite", "test"]),
//!     Duration::from_millis(2),
//! ));
//! events.extend(builder.finish());
//! assert_eq!(events.len(), 6);
//! assert_eq!(builder.summary().exit_code(), 0);
//! ```

mod builder;
mod result;

pub use builder::{TreeBuilder, TreeEvent};
pub use result::{CompileError, TestOutcome, TestResult, TestSummary};
