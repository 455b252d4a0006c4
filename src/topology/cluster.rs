use crate::math::Point3;

use super::path::PathSegment;

/// Which end of a curve a sample was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveEnd {
    /// The curve's native start (parameter 0).
    Start,
    /// The curve's native end (parameter 1).
    End,
}

impl CurveEnd {
    /// Returns the other end of the curve.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Start => 0,
            Self::End => 1,
        }
    }
}

/// One evaluated curve endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointSample {
    /// Evaluated position.
    pub position: Point3,
    /// Index of the curve in the input slice.
    pub curve: usize,
    /// Which end of the curve.
    pub end: CurveEnd,
}

/// A set of endpoint samples treated as one topological vertex.
#[derive(Debug, Clone)]
pub struct EndpointCluster {
    /// Point every member was compared against.
    pub representative: Point3,
    /// Member samples, in the order they joined.
    pub members: Vec<EndpointSample>,
}

impl EndpointCluster {
    /// Number of curve endpoints in this cluster; a self-loop counts twice.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.members.len()
    }
}

/// The partition of all curve endpoints of one input set into clusters.
///
/// Cluster ids are dense indices in first-seen order.
#[derive(Debug, Clone)]
pub struct EndpointClustering {
    clusters: Vec<EndpointCluster>,
    ends: Vec<[usize; 2]>,
    self_closed: Vec<usize>,
}

impl EndpointClustering {
    pub(crate) fn new(
        clusters: Vec<EndpointCluster>,
        ends: Vec<[usize; 2]>,
        self_closed: Vec<usize>,
    ) -> Self {
        Self {
            clusters,
            ends,
            self_closed,
        }
    }

    /// Returns all clusters, indexed by cluster id.
    #[must_use]
    pub fn clusters(&self) -> &[EndpointCluster] {
        &self.clusters
    }

    /// Number of curves this clustering was built from.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.ends.len()
    }

    /// Cluster id holding the given end of `curve`.
    ///
    /// # Panics
    ///
    /// Panics if `curve` is not an index of the clustered input.
    #[must_use]
    pub fn cluster_of(&self, curve: usize, end: CurveEnd) -> usize {
        self.ends[curve][end.index()]
    }

    /// Total degree of a cluster.
    #[must_use]
    pub fn degree(&self, cluster: usize) -> usize {
        self.clusters[cluster].degree()
    }

    /// Curves whose two endpoints fell within tolerance of each other,
    /// in ascending input order.
    #[must_use]
    pub fn self_closed(&self) -> &[usize] {
        &self.self_closed
    }

    /// Returns whether `curve` was detected as self-closed.
    #[must_use]
    pub fn is_self_closed(&self, curve: usize) -> bool {
        self.self_closed.binary_search(&curve).is_ok()
    }

    /// Cluster a traversal of `segment` enters from.
    #[must_use]
    pub fn entry_cluster(&self, segment: PathSegment) -> usize {
        self.cluster_of(segment.curve, segment.entry_end())
    }

    /// Cluster a traversal of `segment` leaves through.
    #[must_use]
    pub fn exit_cluster(&self, segment: PathSegment) -> usize {
        self.cluster_of(segment.curve, segment.exit_end())
    }
}
