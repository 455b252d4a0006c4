pub mod direction;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default distance under which two curve endpoints are the same vertex.
pub const ENDPOINT_TOLERANCE: f64 = 1e-6;

/// Default angle (radians) under which two directions count as tangent.
pub const ANGLE_TOLERANCE: f64 = 1e-3;
