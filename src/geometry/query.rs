use std::fmt::Debug;

use crate::error::Result;
use crate::math::{Point3, Vector3};

/// Position and tangent of a curve at one parameter.
///
/// The tangent points along the curve's native direction. It is not required
/// to be unit length and may be zero where the host cannot define a direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFrame {
    /// Point on the curve.
    pub position: Point3,
    /// Tangent in the curve's native direction.
    pub tangent: Vector3,
}

impl CurveFrame {
    /// Creates a new frame.
    #[must_use]
    pub fn new(position: Point3, tangent: Vector3) -> Self {
        Self { position, tangent }
    }
}

/// The geometry a host kernel must expose for path assembly.
///
/// Handles are opaque and owned by the host; every query is a synchronous,
/// side-effect-free read and must return the same answer for the same curve.
pub trait GeometryQuery {
    /// Opaque curve handle.
    type Curve: Copy + Eq + Debug;

    /// Returns the start and end frames of `curve`, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot evaluate the curve.
    fn endpoints(&self, curve: Self::Curve) -> Result<[CurveFrame; 2]>;

    /// Returns the arc length of `curve`. Zero is a valid answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot evaluate the curve.
    fn length(&self, curve: Self::Curve) -> Result<f64>;

    /// Evaluates `curve` at the arc-length-normalized parameter `t` in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot evaluate the curve.
    fn evaluate(&self, curve: Self::Curve, t: f64) -> Result<CurveFrame>;
}
