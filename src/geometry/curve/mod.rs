mod arc;
mod circle;
mod disc;
mod line;

pub use arc::Arc;
pub use circle::Circle;
pub use line::LineSegment;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

use super::query::CurveFrame;

/// Parameter domain for a curve.
///
/// `t_max` may be smaller than `t_min` for curves whose native parameter
/// decreases along their direction of travel (clockwise arcs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Parameter at the start of the curve.
    pub t_min: f64,
    /// Parameter at the end of the curve.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Maps a normalized fraction in `[0, 1]` onto this domain.
    #[must_use]
    pub fn lerp(&self, s: f64) -> f64 {
        self.t_min + (self.t_max - self.t_min) * s
    }
}

/// Trait for bounded parametric curves in 3D space.
///
/// Implementations must be parameterized proportionally to arc length, so
/// that a normalized fraction of the domain is also a fraction of length.
pub trait Curve {
    /// Evaluates the curve at native parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Computes the unit tangent at native parameter `t`, oriented from the
    /// curve's start towards its end.
    ///
    /// Degenerate curves return a zero vector rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn tangent(&self, t: f64) -> Result<Vector3>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;

    /// Returns the arc length of the curve.
    fn length(&self) -> f64;

    /// Evaluates position and tangent at the normalized fraction `s`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `s` is outside `[0, 1]`.
    fn frame_at(&self, s: f64) -> Result<CurveFrame> {
        if !(0.0..=1.0).contains(&s) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "s",
                value: s,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        let t = self.domain().lerp(s);
        Ok(CurveFrame::new(self.evaluate(t)?, self.tangent(t)?))
    }
}
