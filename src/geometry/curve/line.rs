use crate::error::Result;
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A straight segment between two points.
///
/// The parametric form is: `P(t) = start + t * direction` for
/// `t` in `[0, length]`, where `direction` is the unit vector from start
/// to end. Zero-length segments are allowed and have a zero tangent.
#[derive(Debug, Clone)]
pub struct LineSegment {
    start: Point3,
    end: Point3,
}

impl LineSegment {
    /// Creates a new segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    fn direction(&self) -> Vector3 {
        let d = self.end - self.start;
        let len = d.norm();
        if len < TOLERANCE {
            Vector3::zeros()
        } else {
            d / len
        }
    }
}

impl Curve for LineSegment {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(self.start + self.direction() * t)
    }

    fn tangent(&self, _t: f64) -> Result<Vector3> {
        Ok(self.direction())
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.length())
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn length_3_4_5() {
        let seg = LineSegment::new(Point3::origin(), Point3::new(3.0, 4.0, 0.0));
        assert!((seg.length() - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn frame_at_midpoint() {
        let seg = LineSegment::new(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 2.0, 0.0));
        let f = seg.frame_at(0.5).unwrap();
        assert!((f.position - Point3::new(1.0, 1.0, 0.0)).norm() < TOLERANCE);
        assert!((f.tangent - Vector3::y()).norm() < TOLERANCE);
    }

    #[test]
    fn frame_at_end_hits_end_point() {
        let seg = LineSegment::new(Point3::origin(), Point3::new(2.0, 2.0, 1.0));
        let f = seg.frame_at(1.0).unwrap();
        assert!((f.position - seg.end()).norm() < 1e-12);
    }

    #[test]
    fn zero_length_has_zero_tangent() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let seg = LineSegment::new(p, p);
        assert!(seg.length().abs() < TOLERANCE);
        assert_eq!(seg.tangent(0.0).unwrap(), Vector3::zeros());
        assert!((seg.frame_at(1.0).unwrap().position - p).norm() < TOLERANCE);
    }

    #[test]
    fn fraction_out_of_range() {
        let seg = LineSegment::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        assert!(seg.frame_at(1.5).is_err());
        assert!(seg.frame_at(-0.1).is_err());
    }
}
