use tracing::debug;

use crate::error::Result;
use crate::geometry::query::GeometryQuery;
use crate::math::{Point3, Vector3};
use crate::operations::direction::{oriented, resolve};
use crate::operations::{curve_at, DirectionPolicy, ParameterMode, PathParams};
use crate::topology::Path;

use super::locate::{check_parameters, ParameterMap};

/// Position and unit travel direction at one point of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentSample {
    /// Point on the path.
    pub position: Point3,
    /// Unit tangent, oriented along the path's direction of travel.
    pub direction: Vector3,
}

/// Evaluates positions and tangents along a whole path by global parameter.
#[derive(Debug)]
pub struct EvaluateAt<'a, C> {
    curves: &'a [C],
    path: &'a Path,
    parameters: &'a [f64],
    mode: ParameterMode,
    direction_policy: DirectionPolicy,
}

impl<'a, C: Copy> EvaluateAt<'a, C> {
    /// Creates a new evaluation over `path`, whose segments index `curves`.
    #[must_use]
    pub fn new(curves: &'a [C], path: &'a Path, parameters: &'a [f64]) -> Self {
        let params = PathParams::default();
        Self {
            curves,
            path,
            parameters,
            mode: params.parameter_mode,
            direction_policy: params.direction_policy,
        }
    }

    /// Takes the parameter mode and direction policy from `params`.
    #[must_use]
    pub fn with_params(mut self, params: &PathParams) -> Self {
        self.mode = params.parameter_mode;
        self.direction_policy = params.direction_policy;
        self
    }

    /// Executes the evaluation, returning one sample per parameter.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` for a parameter outside
    /// `[0, 1]`, `GeometryError::Degenerate` if the path has zero length in
    /// arc-length mode, `GeometryError::ZeroVector` for an undefined tangent
    /// under `DirectionPolicy::Fail`, `TopologyError::EntityNotFound` if a
    /// segment names a curve outside `curves`, or any error raised by the
    /// geometry query.
    pub fn execute<Q>(&self, query: &Q) -> Result<Vec<TangentSample>>
    where
        Q: GeometryQuery<Curve = C>,
    {
        check_parameters(self.parameters)?;
        let map = ParameterMap::build(query, self.curves, self.path, self.mode)?;
        let segments = self.path.segments();

        let samples = self
            .parameters
            .iter()
            .map(|&g| -> Result<TangentSample> {
                let loc = map.locate(self.path, g);
                let curve = curve_at(self.curves, segments[loc.segment].curve)?;
                let frame = query.evaluate(curve, loc.curve_parameter())?;
                Ok(TangentSample {
                    position: frame.position,
                    direction: resolve(&oriented(&frame, loc.flipped), self.direction_policy)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            segments = segments.len(),
            samples = samples.len(),
            mode = ?self.mode,
            "evaluated path"
        );
        Ok(samples)
    }
}
