use super::{Vector3, TOLERANCE};

/// Normalizes `v`, or returns `None` when it is too short to carry a direction.
#[must_use]
pub fn unit(v: &Vector3) -> Option<Vector3> {
    let len = v.norm();
    if len < TOLERANCE || !len.is_finite() {
        return None;
    }
    Some(v / len)
}

/// Angle in radians between two unit vectors, in `[0, pi]`.
///
/// Uses `atan2(|a x b|, a . b)`, which stays accurate for nearly parallel
/// inputs where `acos` loses precision.
#[must_use]
pub fn angle_between(a: &Vector3, b: &Vector3) -> f64 {
    a.cross(b).norm().atan2(a.dot(b))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn unit_rejects_zero() {
        assert!(unit(&Vector3::zeros()).is_none());
        assert!(unit(&Vector3::new(1e-12, 0.0, 0.0)).is_none());
    }

    #[test]
    fn unit_normalizes() {
        let u = unit(&Vector3::new(3.0, 4.0, 0.0)).unwrap();
        assert!((u.norm() - 1.0).abs() < 1e-12);
        assert!((u.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn angle_between_axes() {
        assert!((angle_between(&Vector3::x(), &Vector3::y()) - FRAC_PI_2).abs() < 1e-12);
        assert!((angle_between(&Vector3::x(), &-Vector3::x()) - PI).abs() < 1e-12);
        assert!(angle_between(&Vector3::z(), &Vector3::z()).abs() < 1e-12);
    }

    #[test]
    fn tiny_angle_is_resolved() {
        let a = Vector3::x();
        let b = unit(&Vector3::new(1.0, 1e-7, 0.0)).unwrap();
        assert!((angle_between(&a, &b) - 1e-7).abs() < 1e-12);
    }
}
