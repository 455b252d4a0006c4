pub mod cluster;
pub mod path;

pub use cluster::{CurveEnd, EndpointCluster, EndpointClustering, EndpointSample};
pub use path::{Path, PathSegment, TangentPath};

use crate::error::{Result, TopologyError};
use crate::geometry::curve::{Arc, Circle, Curve, LineSegment};
use crate::geometry::query::{CurveFrame, GeometryQuery};
use crate::math::Point3;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Unique identifier for a curve in the curve store.
    pub struct CurveId;
}

/// The geometric curve stored under a [`CurveId`].
#[derive(Debug, Clone)]
pub enum EdgeCurve {
    /// A straight segment.
    Segment(LineSegment),
    /// A circular arc.
    Arc(Arc),
    /// A full circle.
    Circle(Circle),
}

impl EdgeCurve {
    fn as_curve(&self) -> &dyn Curve {
        match self {
            Self::Segment(c) => c,
            Self::Arc(c) => c,
            Self::Circle(c) => c,
        }
    }
}

impl From<LineSegment> for EdgeCurve {
    fn from(c: LineSegment) -> Self {
        Self::Segment(c)
    }
}

impl From<Arc> for EdgeCurve {
    fn from(c: Arc) -> Self {
        Self::Arc(c)
    }
}

impl From<Circle> for EdgeCurve {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

/// In-memory arena of curves that answers geometry queries.
///
/// Curves are referenced via typed IDs (generational indices), so handles
/// held by callers stay valid while other curves are added or removed.
#[derive(Debug, Default)]
pub struct CurveStore {
    curves: SlotMap<CurveId, EdgeCurve>,
}

impl CurveStore {
    /// Creates a new, empty curve store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a curve and returns its ID.
    pub fn add(&mut self, curve: impl Into<EdgeCurve>) -> CurveId {
        self.curves.insert(curve.into())
    }

    /// Inserts a straight segment between two points.
    pub fn add_segment(&mut self, start: Point3, end: Point3) -> CurveId {
        self.add(LineSegment::new(start, end))
    }

    /// Removes a curve, returning it if it was present.
    pub fn remove(&mut self, id: CurveId) -> Option<EdgeCurve> {
        self.curves.remove(id)
    }

    /// Returns a reference to the curve, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn curve(&self, id: CurveId) -> Result<&EdgeCurve> {
        self.curves
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("curve".into()).into())
    }

    /// Number of stored curves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns whether the store holds no curves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl GeometryQuery for CurveStore {
    type Curve = CurveId;

    fn endpoints(&self, curve: CurveId) -> Result<[CurveFrame; 2]> {
        let c = self.curve(curve)?.as_curve();
        Ok([c.frame_at(0.0)?, c.frame_at(1.0)?])
    }

    fn length(&self, curve: CurveId) -> Result<f64> {
        Ok(self.curve(curve)?.as_curve().length())
    }

    fn evaluate(&self, curve: CurveId, t: f64) -> Result<CurveFrame> {
        self.curve(curve)?.as_curve().frame_at(t)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PathweaveError;
    use crate::math::Vector3;

    #[test]
    fn segment_endpoints() {
        let mut store = CurveStore::new();
        let id = store.add_segment(Point3::origin(), Point3::new(3.0, 4.0, 0.0));
        let [s, e] = store.endpoints(id).unwrap();
        assert!((s.position - Point3::origin()).norm() < 1e-12);
        assert!((e.position - Point3::new(3.0, 4.0, 0.0)).norm() < 1e-12);
        assert!((store.length(id).unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn circle_evaluate_half() {
        let mut store = CurveStore::new();
        let id = store.add(Circle::xy(Point3::origin(), 1.0).unwrap());
        let f = store.evaluate(id, 0.5).unwrap();
        assert!((f.position - Point3::new(-1.0, 0.0, 0.0)).norm() < 1e-9);
        assert!((f.tangent + Vector3::y()).norm() < 1e-9);
    }

    #[test]
    fn removed_curve_not_found() {
        let mut store = CurveStore::new();
        let id = store.add_segment(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(store.len(), 1);
        store.remove(id);
        assert!(store.is_empty());
        assert!(matches!(
            store.length(id),
            Err(PathweaveError::Topology(TopologyError::EntityNotFound(_)))
        ));
    }
}
