//! Reversible escaping of single label segments.
//!
//! Test and describe labels are free text. Inside a location URL the segments
//! are joined with `/`, so each one is form-url-encoded first: `/` becomes
//! `%2F` and a space becomes `+`. A label such as `"test / stuff"` therefore
//! appears as `test+%2F+stuff`, and re-splitting the joined string on `/`
//! yields the original segment boundaries.

use std::borrow::Cow;

use crate::LabelError;

/// Substitutions applied on top of plain percent-encoding, as
/// `(percent form, url form)` pairs.
///
/// `encode` rewrites left to right, `decode` right to left. Both directions
/// read this one table.
const SUBSTITUTIONS: &[(&str, &str)] = &[("%20", "+")];

/// Escape / unescape pair for label segments.
#[derive(Copy, Clone, Debug, Default)]
pub struct LabelEscape;

impl LabelEscape {
    /// Escape a single segment for use inside a location URL.
    pub fn encode(label: &str) -> String {
        let mut encoded = urlencoding::encode(label).into_owned();
        for (percent, url) in SUBSTITUTIONS {
            encoded = encoded.replace(percent, url);
        }
        encoded
    }

    /// Undo [`LabelEscape::encode`].
    pub fn decode(encoded: &str) -> Result<String, LabelError> {
        let mut percent = Cow::Borrowed(encoded);
        for (percent_form, url) in SUBSTITUTIONS {
            if percent.contains(url) {
                percent = Cow::Owned(percent.replace(url, percent_form));
            }
        }
        urlencoding::decode(&percent)
            .map(Cow::into_owned)
            .map_err(|_| LabelError::InvalidEscape(encoded.to_owned()))
    }
}

/// Unescape one segment taken from a location URL.
pub fn decode_label(encoded: &str) -> Result<String, LabelError> {
    LabelEscape::decode(encoded)
}
