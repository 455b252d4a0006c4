pub mod assemble;
pub mod cluster;
mod direction;
pub mod query;
pub mod segment;

use crate::error::{Result, TopologyError};
use crate::math::{Vector3, ANGLE_TOLERANCE, ENDPOINT_TOLERANCE};

/// How endpoint samples are grouped into clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClusterPolicy {
    /// A sample joins the first cluster whose representative point is within
    /// tolerance. Chained near-duplicates may end up in different clusters.
    #[default]
    Representative,
    /// Like `Representative`, then clusters that share a sample within
    /// tolerance of both representatives are merged (transitive closure).
    Merge,
}

/// What to do when a tangent direction cannot be determined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DirectionPolicy {
    /// Return an error.
    #[default]
    Fail,
    /// Substitute the given direction (normalized before use).
    UseFallback(Vector3),
}

/// How a global parameter is spread over the segments of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterMode {
    /// Proportional to arc length.
    #[default]
    ArcLength,
    /// Every segment spans an equal share, regardless of length.
    SegmentCount,
}

/// Tolerances and policies shared by all path operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathParams {
    /// Distance under which two endpoints are the same vertex.
    pub endpoint_tolerance: f64,
    /// Angle (radians) under which two directions count as tangent.
    pub angle_tolerance: f64,
    /// Endpoint clustering policy.
    pub cluster_policy: ClusterPolicy,
    /// Handling of undefined tangent directions.
    pub direction_policy: DirectionPolicy,
    /// Global parameter mapping.
    pub parameter_mode: ParameterMode,
    /// Maximum number of branch expansions a single walk may try.
    pub max_branch_steps: usize,
}

impl Default for PathParams {
    fn default() -> Self {
        Self {
            endpoint_tolerance: ENDPOINT_TOLERANCE,
            angle_tolerance: ANGLE_TOLERANCE,
            cluster_policy: ClusterPolicy::default(),
            direction_policy: DirectionPolicy::default(),
            parameter_mode: ParameterMode::default(),
            max_branch_steps: 100_000,
        }
    }
}

impl PathParams {
    /// Returns a copy with the given endpoint tolerance.
    #[must_use]
    pub fn with_endpoint_tolerance(mut self, tolerance: f64) -> Self {
        self.endpoint_tolerance = tolerance;
        self
    }

    /// Returns a copy with the given angle tolerance.
    #[must_use]
    pub fn with_angle_tolerance(mut self, tolerance: f64) -> Self {
        self.angle_tolerance = tolerance;
        self
    }

    /// Returns a copy with the given clustering policy.
    #[must_use]
    pub fn with_cluster_policy(mut self, policy: ClusterPolicy) -> Self {
        self.cluster_policy = policy;
        self
    }

    /// Returns a copy with the given direction policy.
    #[must_use]
    pub fn with_direction_policy(mut self, policy: DirectionPolicy) -> Self {
        self.direction_policy = policy;
        self
    }

    /// Returns a copy with the given parameter mode.
    #[must_use]
    pub fn with_parameter_mode(mut self, mode: ParameterMode) -> Self {
        self.parameter_mode = mode;
        self
    }

    /// Returns a copy with the given branch step budget.
    #[must_use]
    pub fn with_max_branch_steps(mut self, steps: usize) -> Self {
        self.max_branch_steps = steps;
        self
    }
}

/// Looks up the curve a path segment refers to.
pub(crate) fn curve_at<C: Copy>(curves: &[C], index: usize) -> Result<C> {
    curves.get(index).copied().ok_or_else(|| {
        TopologyError::EntityNotFound(format!(
            "curve index {index} (path built over {} curves)",
            curves.len()
        ))
        .into()
    })
}
