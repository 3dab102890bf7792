//! Location URLs for the IDE test tree.
//!
//! The test tree identifies every node by an opaque URL and hands it back on
//! navigation. Three schemes are used:
//!
//! - `elmTestTest://Module/suite/test` for tests
//! - `elmTestDescribe://Module/suite` for describe suites
//! - `elmTestError://path/to/File.elm::12::5` for compiler errors
//!
//! Test and suite URLs carry the escaped label path (see [`LabelEscape`]).
//! Error URLs carry the file verbatim, so a file name containing `::` cannot
//! be represented and is rejected on decode.

use std::fmt;
use std::str::FromStr;

use crate::{LabelError, LabelEscape, LabelPath, LocatorConfig};

/// Separator between scheme and payload.
pub const SCHEME_SEPARATOR: &str = "://";

/// Separator between file, line and column in error locations.
pub const POSITION_SEPARATOR: &str = "::";

/// Common prefix of all elm-test schemes.
pub const ELM_TEST_PROTOCOL: &str = "elmTest";

/// True if `url` uses one of the elm-test schemes (or a sibling of them).
///
/// URLs of other test frameworks are left to their own locators.
pub fn is_elm_test_url(url: &str) -> bool {
    url.starts_with(ELM_TEST_PROTOCOL)
}

/// URL scheme of a location.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LocationScheme {
    /// `elmTestTest`
    Test,
    /// `elmTestDescribe`
    Describe,
    /// `elmTestError`
    Error,
}

impl LocationScheme {
    pub const ALL: [LocationScheme; 3] = [
        LocationScheme::Test,
        LocationScheme::Describe,
        LocationScheme::Error,
    ];

    /// Scheme string, byte-exact as the IDE expects it.
    pub const fn as_str(self) -> &'static str {
        match self {
            LocationScheme::Test => "elmTestTest",
            LocationScheme::Describe => "elmTestDescribe",
            LocationScheme::Error => "elmTestError",
        }
    }
}

impl fmt::Display for LocationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationScheme {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocationScheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| LabelError::UnrecognizedScheme(s.to_owned()))
    }
}

/// Join the escaped segments of `path` under `scheme`.
fn to_location_url(scheme: LocationScheme, path: &LabelPath) -> String {
    let encoded: Vec<String> = path
        .segments()
        .iter()
        .map(|segment| LabelEscape::encode(segment))
        .collect();
    format!("{scheme}{SCHEME_SEPARATOR}{}", encoded.join("/"))
}

/// URL of a test node: `elmTestTest://Module/suite/test`.
pub fn to_test_location_url(path: &LabelPath) -> String {
    to_location_url(LocationScheme::Test, path)
}

/// URL of a describe node: `elmTestDescribe://Module/suite`.
pub fn to_suite_location_url(path: &LabelPath) -> String {
    to_location_url(LocationScheme::Describe, path)
}

/// Decode the part of a test or suite URL after `scheme://` into a label path.
pub fn decode_location_path(url_path: &str) -> Result<LabelPath, LabelError> {
    if url_path.is_empty() {
        return Err(LabelError::EmptyPath);
    }
    let segments = url_path
        .split('/')
        .map(LabelEscape::decode)
        .collect::<Result<Vec<_>, _>>()?;
    LabelPath::try_new(segments)
}

/// Split the part of a test or suite URL after `scheme://` into the module's
/// source file and the `/`-joined test path, using the default layout.
///
/// `Nested.Module/suite/test` gives `("tests/Nested/Module.elm", "suite/test")`.
pub fn from_location_url_path(url_path: &str) -> Result<(String, String), LabelError> {
    LocatorConfig::default().from_location_url_path(url_path)
}

impl LocatorConfig {
    /// Split a test or suite url path into source file and test path.
    ///
    /// The test path is empty for a module-only URL.
    pub fn from_location_url_path(&self, url_path: &str) -> Result<(String, String), LabelError> {
        let path = decode_location_path(url_path)?;
        let module = path.module().ok_or(LabelError::EmptyPath)?;
        Ok((self.module_file(module), path.labels().join("/")))
    }
}

/// Source position of a compiler error, 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ErrorLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl ErrorLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        ErrorLocation {
            file: file.into(),
            line,
            column,
        }
    }

    /// `elmTestError://<file>::<line>::<column>`, file unescaped.
    pub fn to_url(&self) -> String {
        format!(
            "{}{SCHEME_SEPARATOR}{}{POSITION_SEPARATOR}{}{POSITION_SEPARATOR}{}",
            LocationScheme::Error,
            self.file,
            self.line,
            self.column
        )
    }

    /// Parse the part of an error URL after `scheme://`.
    ///
    /// Exactly two `::` separators are accepted, so files whose name
    /// contains `::` are reported as malformed.
    pub fn from_url_path(url_path: &str) -> Result<Self, LabelError> {
        let parts: Vec<&str> = url_path.split(POSITION_SEPARATOR).collect();
        let [file, line, column] = parts.as_slice() else {
            return Err(LabelError::MalformedErrorLocation(url_path.to_owned()));
        };
        Ok(ErrorLocation {
            file: (*file).to_owned(),
            line: parse_position("line", line)?,
            column: parse_position("column", column)?,
        })
    }
}

fn parse_position(field: &'static str, value: &str) -> Result<u32, LabelError> {
    value.parse().map_err(|_| LabelError::InvalidPosition {
        field,
        value: value.to_owned(),
    })
}

/// `elmTestError://<file>::<line>::<column>`.
pub fn to_error_location_url(file: &str, line: u32, column: u32) -> String {
    ErrorLocation::new(file, line, column).to_url()
}

/// Inverse of [`to_error_location_url`], given the part after `scheme://`.
pub fn from_error_location_url_path(url_path: &str) -> Result<(String, (u32, u32)), LabelError> {
    let ErrorLocation { file, line, column } = ErrorLocation::from_url_path(url_path)?;
    Ok((file, (line, column)))
}

/// A fully decoded location URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Test(LabelPath),
    Suite(LabelPath),
    Error(ErrorLocation),
}

impl Location {
    /// Decode a complete URL, dispatching on its scheme.
    pub fn parse(url: &str) -> Result<Self, LabelError> {
        let (scheme, url_path) = url
            .split_once(SCHEME_SEPARATOR)
            .ok_or_else(|| LabelError::MissingScheme(url.to_owned()))?;
        match scheme.parse()? {
            LocationScheme::Test => decode_location_path(url_path).map(Location::Test),
            LocationScheme::Describe => decode_location_path(url_path).map(Location::Suite),
            LocationScheme::Error => ErrorLocation::from_url_path(url_path).map(Location::Error),
        }
    }

    pub fn scheme(&self) -> LocationScheme {
        match self {
            Location::Test(_) => LocationScheme::Test,
            Location::Suite(_) => LocationScheme::Describe,
            Location::Error(_) => LocationScheme::Error,
        }
    }

    /// Encode back into the URL this location was parsed from.
    pub fn to_url(&self) -> String {
        match self {
            Location::Test(path) => to_test_location_url(path),
            Location::Suite(path) => to_suite_location_url(path),
            Location::Error(error) => error.to_url(),
        }
    }

    /// Source file the location points into.
    pub fn source_file(&self, config: &LocatorConfig) -> Option<String> {
        match self {
            Location::Test(path) | Location::Suite(path) => {
                path.module().map(|module| config.module_file(module))
            }
            Location::Error(error) => Some(error.file.clone()),
        }
    }

    /// Unescaped `/`-joined labels below the module; `None` for errors.
    pub fn test_path(&self) -> Option<String> {
        match self {
            Location::Test(path) | Location::Suite(path) => Some(path.labels().join("/")),
            Location::Error(_) => None,
        }
    }
}

impl FromStr for Location {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::parse(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}
