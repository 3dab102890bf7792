//! elm-test label paths and location URLs.
//!
//! This crate maps between the hierarchical identity of an elm-test result
//! (module, nested `describe` suites, test) and the flat URL strings an IDE
//! test tree uses as navigation keys:
//!
//! - [`LabelPath`]: module-first sequence of labels, with
//!   [`LabelPath::common_parent`] and [`LabelPath::sub_parents`] for building
//!   the tree incrementally
//! - [`LabelEscape`]: the one reversible escape for labels inside URLs
//! - [`Location`]: decoded `elmTestTest`, `elmTestDescribe` and
//!   `elmTestError` URLs
//! - [`LocatorConfig`]: module name to source file mapping
//!
//! # Example
//!
//! ```
//! use elmtest_labels::{from_location_url_path, to_path, to_test_location_url};
//!
//! let path = to_path(["Nested.Module", "suite", "test / stuff"]);
//! let url = to_test_location_url(&path);
//! assert_eq!(url, "elmTestTest://Nested.Module/suite/test+%2F+stuff");
//!
//! let (file, test_path) = from_location_url_path(&url["elmTestTest://".len()..]).unwrap();
//! assert_eq!(file, "tests/Nested/Module.elm");
//! assert_eq!(test_path, "suite/test / stuff");
//! ```
//!
//! Everything here is a pure function over owned or borrowed values; there is
//! no shared state, so all of it can be used from any thread.

mod config;
mod error;
mod escape;
mod location;
mod path;

pub use config::LocatorConfig;
pub use error::LabelError;
pub use escape::{decode_label, LabelEscape};
pub use location::{
    decode_location_path, from_error_location_url_path, from_location_url_path, is_elm_test_url,
    to_error_location_url, to_suite_location_url, to_test_location_url, ErrorLocation, Location,
    LocationScheme, ELM_TEST_PROTOCOL, POSITION_SEPARATOR, SCHEME_SEPARATOR,
};
pub use path::{common_parent, path_string, sub_parents, to_path, LabelPath, SubParents};
