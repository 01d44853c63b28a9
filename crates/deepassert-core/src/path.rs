// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::{self, Write as _};

use smallvec::SmallVec;

/// One step from a container to a child
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Mapping key
    Key(String),
    /// List index
    Index(usize),
}

/// Location of a node relative to the compared roots
///
/// Renders as `root['users'][0]['name']`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: SmallVec<[PathSegment; 8]>,
}

impl Path {
    /// The root path
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a top-level mapping key
    #[must_use]
    pub fn top_level_key(key: impl Into<String>) -> Self {
        let mut path = Self::root();
        path.push(PathSegment::Key(key.into()));
        path
    }

    /// Descend into a child
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Return to the parent
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// Segments from the root down
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the root path
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) => {
                    f.write_str("['")?;
                    for c in key.chars() {
                        if c == '\'' || c == '\\' {
                            f.write_char('\\')?;
                        }
                        f.write_char(c)?;
                    }
                    f.write_str("']")?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
