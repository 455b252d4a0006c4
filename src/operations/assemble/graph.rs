use crate::topology::{CurveEnd, EndpointClustering, PathSegment};

/// Curve-endpoint incidence over the clusters of one clustering.
///
/// Each cluster lists its incident curve ends in input order. A self-loop
/// (both ends in the same cluster) is listed once, by its start.
pub(super) struct CurveGraph<'a> {
    clustering: &'a EndpointClustering,
    incident: Vec<Vec<(usize, CurveEnd)>>,
}

impl<'a> CurveGraph<'a> {
    pub(super) fn new(clustering: &'a EndpointClustering) -> Self {
        let mut incident = vec![Vec::new(); clustering.clusters().len()];
        for curve in 0..clustering.curve_count() {
            let s = clustering.cluster_of(curve, CurveEnd::Start);
            let e = clustering.cluster_of(curve, CurveEnd::End);
            incident[s].push((curve, CurveEnd::Start));
            if e != s {
                incident[e].push((curve, CurveEnd::End));
            }
        }
        Self {
            clustering,
            incident,
        }
    }

    pub(super) fn clustering(&self) -> &EndpointClustering {
        self.clustering
    }

    /// Whether both ends of `curve` lie in one cluster.
    pub(super) fn is_loop(&self, curve: usize) -> bool {
        self.clustering.cluster_of(curve, CurveEnd::Start)
            == self.clustering.cluster_of(curve, CurveEnd::End)
    }

    /// Unused segments that can leave `cluster`, oriented outwards.
    pub(super) fn candidates(&self, cluster: usize, used: &[bool]) -> Vec<PathSegment> {
        self.incident[cluster]
            .iter()
            .filter(|(curve, _)| !used[*curve])
            .map(|&(curve, end)| PathSegment::new(curve, end == CurveEnd::End))
            .collect()
    }

    /// Number of unused curve endpoints in `cluster`.
    pub(super) fn remaining_degree(&self, cluster: usize, used: &[bool]) -> usize {
        self.incident[cluster]
            .iter()
            .filter(|(curve, _)| !used[*curve])
            .map(|(curve, _)| if self.is_loop(*curve) { 2 } else { 1 })
            .sum()
    }

    /// Number of non-loop curves touching `cluster`, used or not.
    ///
    /// A cluster with strand degree 1 is a free end even when self-loops
    /// hang off it.
    pub(super) fn strand_degree(&self, cluster: usize) -> usize {
        self.incident[cluster]
            .iter()
            .filter(|(curve, _)| !self.is_loop(*curve))
            .count()
    }
}
