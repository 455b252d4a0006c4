use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::{Point3, Vector3};

use super::disc::Disc;
use super::{Curve, CurveDomain};

/// A full circle, starting and ending at angle 0 on its reference direction.
///
/// Start and end coincide, so every circle is a self-closed curve.
#[derive(Debug, Clone)]
pub struct Circle {
    disc: Disc,
}

impl Circle {
    /// Creates a circle about `normal`, starting along `ref_dir`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for a non-positive radius or a
    /// `ref_dir` that is not perpendicular to `normal`, and
    /// `GeometryError::ZeroVector` if either axis has no length.
    pub fn new(center: Point3, radius: f64, normal: Vector3, ref_dir: Vector3) -> Result<Self> {
        Ok(Self {
            disc: Disc::new(center, radius, normal, ref_dir)?,
        })
    }

    /// Creates a counter-clockwise circle in the XY plane starting on +X.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for a non-positive radius.
    pub fn xy(center: Point3, radius: f64) -> Result<Self> {
        Self::new(center, radius, Vector3::z(), Vector3::x())
    }

    /// Center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.disc.center
    }

    /// Radius, always positive.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.disc.radius
    }

    /// Unit axis the circle turns counter-clockwise about.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.disc.normal()
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(self.disc.point(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        Ok(self.disc.direction(t))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn length(&self) -> f64 {
        TAU * self.disc.radius
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn closes_on_itself() {
        let c = Circle::xy(Point3::new(1.0, 2.0, 3.0), 1.5).unwrap();
        let [s, e] = [c.frame_at(0.0).unwrap(), c.frame_at(1.0).unwrap()];
        assert_relative_eq!(s.position, e.position, epsilon = 1e-9);
        assert_relative_eq!(s.tangent, e.tangent, epsilon = 1e-9);
        assert!(c.is_closed());
    }

    #[test]
    fn quarter_turn() {
        let c = Circle::xy(Point3::origin(), 2.0).unwrap();
        let f = c.frame_at(0.25).unwrap();
        assert_relative_eq!(f.position, Point3::new(0.0, 2.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(f.tangent, -Vector3::x(), epsilon = 1e-9);
    }

    #[test]
    fn tilted_plane() {
        let c = Circle::new(Point3::origin(), 1.0, Vector3::x(), Vector3::y()).unwrap();
        assert_relative_eq!(c.normal(), Vector3::x(), epsilon = 1e-12);
        let f = c.frame_at(0.25).unwrap();
        assert_relative_eq!(f.position, Point3::new(0.0, 0.0, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn circumference() {
        let c = Circle::xy(Point3::origin(), 0.5).unwrap();
        assert_relative_eq!(c.length(), 0.5 * TAU);
    }

    #[test]
    fn rejects_bad_axes() {
        assert!(Circle::new(Point3::origin(), 1.0, Vector3::z(), Vector3::new(1.0, 0.0, 1.0)).is_err());
        assert!(Circle::new(Point3::origin(), 1.0, Vector3::zeros(), Vector3::x()).is_err());
        assert!(Circle::xy(Point3::origin(), -1.0).is_err());
    }
}
