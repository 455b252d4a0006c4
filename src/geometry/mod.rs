pub mod curve;
pub mod query;

pub use curve::{Arc, Circle, Curve, CurveDomain, LineSegment};
pub use query::{CurveFrame, GeometryQuery};
