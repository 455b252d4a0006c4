use crate::error::Result;
use crate::geometry::query::GeometryQuery;
use crate::topology::Path;

use super::locate::segment_lengths;

/// Computes the total length of a path.
#[derive(Debug)]
pub struct PathLength<'a, C> {
    curves: &'a [C],
    path: &'a Path,
}

impl<'a, C: Copy> PathLength<'a, C> {
    /// Creates a new length query over `path`, whose segments index `curves`.
    #[must_use]
    pub fn new(curves: &'a [C], path: &'a Path) -> Self {
        Self { curves, path }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if a curve reports a negative or
    /// non-finite length, `TopologyError::EntityNotFound` if a segment names
    /// a curve outside `curves`, or any error raised by the geometry query.
    pub fn execute<Q>(&self, query: &Q) -> Result<f64>
    where
        Q: GeometryQuery<Curve = C>,
    {
        Ok(segment_lengths(query, self.curves, self.path)?.iter().sum())
    }
}
