//! Hierarchical label paths.
//!
//! A [`LabelPath`] identifies a module, a describe suite or a test:
//! the module name first, then every nested `describe` label, then the test
//! label. The test tree is built from these paths as results stream in,
//! using [`LabelPath::common_parent`] to find the nearest open suite and
//! [`LabelPath::sub_parents`] to materialize the suites in between.

use std::fmt;
use std::iter::FusedIterator;

use crate::LabelError;

/// Ordered sequence of label segments, module first.
///
/// Non-empty except for [`LabelPath::ROOT`], the sentinel returned by
/// [`LabelPath::common_parent`] for paths in different modules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelPath {
    segments: Vec<String>,
}

#[allow(clippy::len_without_is_empty, reason = "emptiness is spelled `is_root`")]
impl LabelPath {
    /// Sentinel above every module. Renders as `""`.
    pub const ROOT: LabelPath = LabelPath {
        segments: Vec::new(),
    };

    /// Build a path from raw segments, module first.
    ///
    /// Returns [`LabelError::EmptyPath`] when `segments` is empty.
    pub fn try_new<I, S>(segments: I) -> Result<Self, LabelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(LabelError::EmptyPath);
        }
        Ok(LabelPath { segments })
    }

    /// Build a path from raw segments, module first.
    ///
    /// # Panics
    /// Panics if `segments` is empty. The result stream always carries a
    /// module name, so an empty label list is a caller bug.
    /// Use `try_new` for fallible construction.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::try_new(segments).unwrap_or_else(|e| panic!("{}", e))
    }

    /// All segments, module first.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True only for [`LabelPath::ROOT`].
    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The module name, `None` for the root.
    pub fn module(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Suite and test labels below the module.
    pub fn labels(&self) -> &[String] {
        self.segments.get(1..).unwrap_or_default()
    }

    /// Last segment: the test or suite display name.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Path one level up. The parent of a module is the root; the root has none.
    pub fn parent(&self) -> Option<LabelPath> {
        let (_, init) = self.segments.split_last()?;
        Some(LabelPath {
            segments: init.to_vec(),
        })
    }

    /// Extend this path by one label.
    #[must_use]
    pub fn child(&self, label: impl Into<String>) -> LabelPath {
        let mut segments = self.segments.clone();
        segments.push(label.into());
        LabelPath { segments }
    }

    /// The first `len` segments.
    fn prefix(&self, len: usize) -> LabelPath {
        LabelPath {
            segments: self.segments[..len].to_vec(),
        }
    }

    /// Length of the longest shared prefix.
    fn common_len(&self, other: &LabelPath) -> usize {
        self.segments
            .iter()
            .zip(&other.segments)
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// True if `self` is a prefix of `other` (every path is its own ancestor).
    pub fn is_ancestor_of(&self, other: &LabelPath) -> bool {
        other.segments.starts_with(&self.segments)
    }

    /// Longest common prefix of both paths.
    ///
    /// Returns [`LabelPath::ROOT`] when the module segments already differ.
    /// Symmetric in its arguments.
    #[must_use]
    pub fn common_parent(&self, other: &LabelPath) -> LabelPath {
        self.prefix(self.common_len(other))
    }

    /// Every proper prefix of `self` longer than `ancestor`, root to leaf.
    ///
    /// Neither `ancestor` nor `self` is yielded. If `ancestor` is not a prefix
    /// of `self`, iteration starts below their common parent.
    pub fn sub_parents(&self, ancestor: &LabelPath) -> SubParents<'_> {
        SubParents {
            path: self,
            next: self.common_len(ancestor) + 1,
        }
    }
}

impl fmt::Display for LabelPath {
    /// Segments joined by `/`, unescaped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Lazy iterator returned by [`LabelPath::sub_parents`].
///
/// Holds only a borrowed path and a cursor, so a fresh call always starts over.
#[derive(Clone, Debug)]
pub struct SubParents<'a> {
    path: &'a LabelPath,
    /// Length of the next prefix to yield.
    next: usize,
}

impl Iterator for SubParents<'_> {
    type Item = LabelPath;

    fn next(&mut self) -> Option<LabelPath> {
        if self.next >= self.path.len() {
            return None;
        }
        let prefix = self.path.prefix(self.next);
        self.next += 1;
        Some(prefix)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.path.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SubParents<'_> {}

impl FusedIterator for SubParents<'_> {}

/// Build a path from raw segments, module first. See [`LabelPath::new`].
pub fn to_path<I, S>(segments: I) -> LabelPath
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    LabelPath::new(segments)
}

/// Render `path` as its segments joined by `/`, without escaping.
pub fn path_string(path: &LabelPath) -> String {
    path.to_string()
}

/// Longest common prefix of `a` and `b`. See [`LabelPath::common_parent`].
pub fn common_parent(a: &LabelPath, b: &LabelPath) -> LabelPath {
    a.common_parent(b)
}

/// Intermediate paths between `ancestor` and `path`. See [`LabelPath::sub_parents`].
pub fn sub_parents<'a>(path: &'a LabelPath, ancestor: &LabelPath) -> SubParents<'a> {
    path.sub_parents(ancestor)
}
