//! Read-only queries over assembled paths.

mod evaluate_at;
mod is_valid;
mod length;
mod locate;

pub use evaluate_at::{EvaluateAt, TangentSample};
pub use is_valid::IsValidPath;
pub use length::PathLength;
pub use locate::{LocateOnPath, PathLocation};
