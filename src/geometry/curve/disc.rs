use crate::error::{GeometryError, Result};
use crate::math::direction::unit;
use crate::math::{Point3, Vector3, TOLERANCE};

/// Center, radius and in-plane axes shared by circles and arcs.
///
/// Angle 0 lies along `u`; angles grow counter-clockwise about `u x v`.
#[derive(Debug, Clone)]
pub(super) struct Disc {
    pub(super) center: Point3,
    pub(super) radius: f64,
    u: Vector3,
    v: Vector3,
}

impl Disc {
    pub(super) fn new(center: Point3, radius: f64, normal: Vector3, ref_dir: Vector3) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate(format!("radius {radius} is not positive")).into());
        }
        let n = unit(&normal).ok_or(GeometryError::ZeroVector)?;
        let u = unit(&ref_dir).ok_or(GeometryError::ZeroVector)?;
        if n.dot(&u).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "reference direction is not in the plane of the normal".into(),
            )
            .into());
        }
        Ok(Self {
            center,
            radius,
            u,
            v: n.cross(&u),
        })
    }

    pub(super) fn normal(&self) -> Vector3 {
        self.u.cross(&self.v)
    }

    pub(super) fn point(&self, angle: f64) -> Point3 {
        let (sin, cos) = angle.sin_cos();
        self.center + (self.u * cos + self.v * sin) * self.radius
    }

    /// Unit derivative direction at `angle`, counter-clockwise.
    pub(super) fn direction(&self, angle: f64) -> Vector3 {
        let (sin, cos) = angle.sin_cos();
        self.v * cos - self.u * sin
    }
}
