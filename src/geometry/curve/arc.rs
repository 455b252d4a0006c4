use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::disc::Disc;
use super::{Curve, CurveDomain};

/// A circular arc travelled from `start_angle` to `end_angle`.
///
/// Angles are radians counter-clockwise about the normal, measured from the
/// reference direction. An `end_angle` below `start_angle` runs clockwise.
#[derive(Debug, Clone)]
pub struct Arc {
    disc: Disc,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates an arc on the circle about `normal` whose angle 0 is `ref_dir`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for a non-positive radius, a zero
    /// sweep or a `ref_dir` that is not perpendicular to `normal`, and
    /// `GeometryError::ZeroVector` if either axis has no length.
    pub fn new(
        center: Point3,
        radius: f64,
        normal: Vector3,
        ref_dir: Vector3,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if (end_angle - start_angle).abs() < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "arc from {start_angle} to {end_angle} has no sweep"
            ))
            .into());
        }
        Ok(Self {
            disc: Disc::new(center, radius, normal, ref_dir)?,
            start_angle,
            end_angle,
        })
    }

    /// Creates an arc in the XY plane, with angles measured from +X.
    ///
    /// # Errors
    ///
    /// Same as [`Arc::new`].
    pub fn xy(center: Point3, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        Self::new(center, radius, Vector3::z(), Vector3::x(), start_angle, end_angle)
    }

    /// Center of the supporting circle.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.disc.center
    }

    /// Radius, always positive.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.disc.radius
    }

    /// Signed sweep; negative for clockwise arcs.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(self.disc.point(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        Ok(self.disc.direction(t) * self.sweep().signum())
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }

    fn is_closed(&self) -> bool {
        (self.sweep().abs() - TAU).abs() < TOLERANCE
    }

    fn length(&self) -> f64 {
        self.disc.radius * self.sweep().abs()
    }
}
