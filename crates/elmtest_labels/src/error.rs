//! Errors raised while building paths or decoding location URLs.

use thiserror::Error;

/// Failure to build a label path or decode a location URL.
///
/// Every variant is a deterministic parse failure on one input. Callers treat
/// the affected result as having no navigable location and keep going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// A label path needs at least the module segment.
    #[error("label path must contain at least a module name")]
    EmptyPath,

    /// The URL has no `://` between scheme and payload.
    #[error("location url `{0}` has no scheme separator")]
    MissingScheme(String),

    /// The scheme is not one of `elmTestTest`, `elmTestDescribe`, `elmTestError`.
    #[error("unrecognized location scheme `{0}`")]
    UnrecognizedScheme(String),

    /// A segment holds a percent sequence that does not decode to UTF-8.
    #[error("label segment `{0}` is not a valid escaped label")]
    InvalidEscape(String),

    /// An error location payload is not `file::line::column`.
    #[error("error location `{0}` is not of the form file::line::column")]
    MalformedErrorLocation(String),

    /// The line or column of an error location is not an integer.
    #[error("invalid {field} `{value}` in error location")]
    InvalidPosition { field: &'static str, value: String },
}
