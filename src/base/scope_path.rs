//! Scope paths and qualified-name helpers.
//!
//! Qualified names are flat `Arc<str>` values joined with `::` throughout
//! the crate; [`ScopePath`] is the structured form used at the input
//! boundary, where the extraction layer hands us an ordered segment list.

use std::fmt;
use std::sync::Arc;

use super::SCOPE_SEPARATOR;

/// An ordered sequence of scope segments, e.g. `["example", "detail"]`.
///
/// The empty path is the root namespace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScopePath {
    segments: Vec<Arc<str>>,
}

impl ScopePath {
    /// The root (global) scope.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from an iterator of segments.
    pub fn new(segments: impl IntoIterator<Item = impl Into<Arc<str>>>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a `::`-joined qualified name into a path.
    ///
    /// An empty string parses to the root path.
    pub fn parse(qualified: &str) -> Self {
        if qualified.is_empty() {
            return Self::root();
        }
        Self {
            segments: qualified.split(SCOPE_SEPARATOR).map(Arc::from).collect(),
        }
    }

    /// The path one level deeper.
    pub fn child(&self, name: impl Into<Arc<str>>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// The enclosing path, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    pub fn segments(&self) -> &[Arc<str>] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The `::`-joined qualified form. The root path renders as `""`.
    pub fn qualified(&self) -> Arc<str> {
        Arc::from(self.to_string())
    }

    /// Qualified name of a member declared directly in this scope.
    pub fn member(&self, name: &str) -> Arc<str> {
        Arc::from(join_scope(&self.to_string(), name))
    }
}

impl fmt::Display for ScopePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(SCOPE_SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Join a scope prefix and a simple name into a qualified name.
///
/// The root scope (`""`) contributes no prefix.
pub fn join_scope(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}{SCOPE_SEPARATOR}{name}")
    }
}

/// The enclosing scope of a qualified name, or `None` for root-level names.
///
/// `parent_scope("a::b::c")` is `Some("a::b")`; `parent_scope("a")` is `None`.
pub fn parent_scope(qualified: &str) -> Option<&str> {
    qualified.rsplit_once(SCOPE_SEPARATOR).map(|(scope, _)| scope)
}

/// The last segment of a qualified name.
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit_once(SCOPE_SEPARATOR)
        .map_or(qualified, |(_, name)| name)
}
