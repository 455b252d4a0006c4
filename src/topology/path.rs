use crate::error::{OperationError, Result};

use super::cluster::CurveEnd;

/// A curve used in a path, with its traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathSegment {
    /// Index of the curve in the input slice the path was built from.
    pub curve: usize,
    /// If `true`, the curve is traversed from its native end to its start.
    pub flipped: bool,
}

impl PathSegment {
    /// Creates a new path segment.
    #[must_use]
    pub fn new(curve: usize, flipped: bool) -> Self {
        Self { curve, flipped }
    }

    /// The native end the traversal starts from.
    #[must_use]
    pub fn entry_end(self) -> CurveEnd {
        if self.flipped {
            CurveEnd::End
        } else {
            CurveEnd::Start
        }
    }

    /// The native end the traversal leaves through.
    #[must_use]
    pub fn exit_end(self) -> CurveEnd {
        self.entry_end().opposite()
    }

    /// Returns the same curve traversed the other way.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self::new(self.curve, !self.flipped)
    }
}

/// An ordered, direction-consistent chain of curves.
///
/// Consecutive segments share an endpoint cluster. A closed path also
/// returns to the cluster it started from. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<PathSegment>,
    closed: bool,
}

impl Path {
    /// Creates a path from ordered segments.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyInput` if `segments` is empty.
    pub fn new(segments: Vec<PathSegment>, closed: bool) -> Result<Self> {
        if segments.is_empty() {
            return Err(OperationError::EmptyInput.into());
        }
        Ok(Self { segments, closed })
    }

    /// Returns the ordered segments.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns whether the path forms a closed loop.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of segments; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether the path has no segments.
    ///
    /// [`Path::new`] rejects empty input, so this is `false` for every
    /// constructed path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Curve indices in traversal order.
    pub fn curves(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments.iter().map(|s| s.curve)
    }

    /// Returns the path traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            segments: self.segments.iter().rev().map(|s| s.reversed()).collect(),
            closed: self.closed,
        }
    }
}

/// A path with no direction jump at any interior joint.
///
/// Only produced by [`SplitTangent`](crate::operations::segment::SplitTangent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TangentPath(Path);

impl TangentPath {
    pub(crate) fn new(path: Path) -> Self {
        Self(path)
    }

    /// Returns the underlying path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Consumes the tangent path, returning the underlying path.
    #[must_use]
    pub fn into_path(self) -> Path {
        self.0
    }

    /// Returns the ordered segments.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        self.0.segments()
    }

    /// Returns whether the tangent path forms a smooth closed loop.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.0.is_closed()
    }
}
