mod merge;

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::query::GeometryQuery;
use crate::math::Point3;
use crate::topology::{CurveEnd, EndpointCluster, EndpointClustering, EndpointSample};

use super::ClusterPolicy;

/// Groups the endpoints of a curve set into topological vertices.
///
/// Each curve's start then end is sampled in input order. A sample joins the
/// first existing cluster whose representative lies within `tolerance`,
/// otherwise it founds a new cluster. A curve whose two endpoints are within
/// tolerance of each other is recorded as self-closed and both its samples
/// land in the same cluster.
#[derive(Debug)]
pub struct ClusterEndpoints<'a, C> {
    curves: &'a [C],
    tolerance: f64,
    policy: ClusterPolicy,
}

impl<'a, C: Copy> ClusterEndpoints<'a, C> {
    /// Creates a new clustering operation with the default policy.
    #[must_use]
    pub fn new(curves: &'a [C], tolerance: f64) -> Self {
        Self {
            curves,
            tolerance,
            policy: ClusterPolicy::default(),
        }
    }

    /// Sets the clustering policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ClusterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Executes the clustering.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyInput` if no curves were supplied,
    /// `OperationError::InvalidInput` if the tolerance is not a positive
    /// finite number, or any error raised by the geometry query.
    pub fn execute<Q>(&self, query: &Q) -> Result<EndpointClustering>
    where
        Q: GeometryQuery<Curve = C>,
    {
        if self.curves.is_empty() {
            return Err(OperationError::EmptyInput.into());
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "clustering tolerance must be positive, got {}",
                self.tolerance
            ))
            .into());
        }

        let mut clusters: Vec<EndpointCluster> = Vec::new();
        let mut ends: Vec<[usize; 2]> = Vec::with_capacity(self.curves.len());
        let mut self_closed: Vec<usize> = Vec::new();

        for (index, &curve) in self.curves.iter().enumerate() {
            let [start, end] = query.endpoints(curve)?;
            let start_sample = EndpointSample {
                position: start.position,
                curve: index,
                end: CurveEnd::Start,
            };
            let end_sample = EndpointSample {
                position: end.position,
                curve: index,
                end: CurveEnd::End,
            };

            let si = self.place(&mut clusters, start_sample);
            let ei = if (end.position - start.position).norm() <= self.tolerance {
                self_closed.push(index);
                clusters[si].members.push(end_sample);
                si
            } else {
                self.place(&mut clusters, end_sample)
            };
            ends.push([si, ei]);
        }

        if self.policy == ClusterPolicy::Merge {
            let (merged, remap) = merge::merge_chained(clusters, self.tolerance);
            for pair in &mut ends {
                *pair = [remap[pair[0]], remap[pair[1]]];
            }
            clusters = merged;
        }

        debug!(
            curves = self.curves.len(),
            clusters = clusters.len(),
            self_closed = self_closed.len(),
            policy = ?self.policy,
            "clustered curve endpoints"
        );

        Ok(EndpointClustering::new(clusters, ends, self_closed))
    }

    /// Adds `sample` to the first cluster within tolerance, or starts a new one.
    fn place(&self, clusters: &mut Vec<EndpointCluster>, sample: EndpointSample) -> usize {
        if let Some(i) = find_near(clusters, &sample.position, self.tolerance) {
            clusters[i].members.push(sample);
            return i;
        }
        clusters.push(EndpointCluster {
            representative: sample.position,
            members: vec![sample],
        });
        clusters.len() - 1
    }
}

fn find_near(clusters: &[EndpointCluster], p: &Point3, tolerance: f64) -> Option<usize> {
    clusters
        .iter()
        .position(|c| (c.representative - p).norm() <= tolerance)
}
