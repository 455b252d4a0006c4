use thiserror::Error;

/// Top-level error type for path assembly and evaluation.
#[derive(Debug, Error)]
pub enum PathweaveError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Why a curve set could not be partitioned into paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TopologyFault {
    /// Every branch out of a junction ended away from a free endpoint.
    #[error("walk dead-ends at a branch point")]
    DeadEnd,

    /// The backtracking search gave up after its step budget.
    #[error("branch search exceeded {0} steps")]
    BranchLimit(usize),
}

/// Errors related to path topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology at cluster {cluster} (curve {curve}): {fault}")]
    InvalidTopology {
        cluster: usize,
        curve: usize,
        fault: TopologyFault,
    },
}

/// Errors related to operation inputs.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("no curves supplied")]
    EmptyInput,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PathweaveError`].
pub type Result<T> = std::result::Result<T, PathweaveError>;
