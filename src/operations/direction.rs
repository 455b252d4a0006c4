use tracing::warn;

use crate::error::{GeometryError, Result};
use crate::geometry::query::{CurveFrame, GeometryQuery};
use crate::math::{direction, Vector3};
use crate::topology::PathSegment;

use super::DirectionPolicy;

/// Normalizes `v`, applying `policy` when it carries no direction.
pub(crate) fn resolve(v: &Vector3, policy: DirectionPolicy) -> Result<Vector3> {
    if let Some(u) = direction::unit(v) {
        return Ok(u);
    }
    match policy {
        DirectionPolicy::Fail => Err(GeometryError::ZeroVector.into()),
        DirectionPolicy::UseFallback(fallback) => {
            warn!(?fallback, "tangent undefined, substituting fallback direction");
            direction::unit(&fallback).ok_or_else(|| GeometryError::ZeroVector.into())
        }
    }
}

/// Unit travel directions of `segment` where the walk enters and leaves it.
pub(crate) fn travel_directions<Q: GeometryQuery>(
    query: &Q,
    curve: Q::Curve,
    segment: PathSegment,
    policy: DirectionPolicy,
) -> Result<(Vector3, Vector3)> {
    let ends = query.endpoints(curve)?;
    let entry = oriented(&ends[segment.entry_end().index()], segment.flipped);
    let exit = oriented(&ends[segment.exit_end().index()], segment.flipped);
    Ok((resolve(&entry, policy)?, resolve(&exit, policy)?))
}

/// Native tangent of `frame`, reversed for flipped traversal.
pub(crate) fn oriented(frame: &CurveFrame, flipped: bool) -> Vector3 {
    if flipped {
        -frame.tangent
    } else {
        frame.tangent
    }
}
