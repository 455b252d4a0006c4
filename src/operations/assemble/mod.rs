mod graph;
mod walk;

use tracing::debug;

use crate::error::Result;
use crate::geometry::query::GeometryQuery;
use crate::topology::{CurveEnd, EndpointClustering, Path, PathSegment};

use self::graph::CurveGraph;
use self::walk::Walker;

use super::cluster::ClusterEndpoints;
use super::PathParams;

/// Reconstructs ordered paths from a clustered curve set.
///
/// Every curve ends up in exactly one path. Self-closed curves that touch
/// nothing else become single-segment closed paths; the rest are walked from
/// free endpoints first, then from any unused curve, with backtracking at
/// branch points. Paths are returned ordered by their lowest curve index.
#[derive(Debug)]
pub struct BuildPaths<'a> {
    clustering: &'a EndpointClustering,
    max_branch_steps: usize,
}

impl<'a> BuildPaths<'a> {
    /// Creates a new path-building operation.
    #[must_use]
    pub fn new(clustering: &'a EndpointClustering) -> Self {
        Self {
            clustering,
            max_branch_steps: PathParams::default().max_branch_steps,
        }
    }

    /// Sets the number of branch expansions a single walk may try.
    #[must_use]
    pub fn with_max_branch_steps(mut self, steps: usize) -> Self {
        self.max_branch_steps = steps;
        self
    }

    /// Executes the path reconstruction.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if the curves cannot be
    /// partitioned into paths that each start and end at free endpoints or
    /// close on themselves.
    pub fn execute(&self) -> Result<Vec<Path>> {
        let graph = CurveGraph::new(self.clustering);
        let walker = Walker::new(&graph, self.max_branch_steps);
        let mut used = vec![false; self.clustering.curve_count()];
        let mut paths: Vec<(usize, Path)> = Vec::new();

        for &curve in self.clustering.self_closed() {
            let cluster = self.clustering.cluster_of(curve, CurveEnd::Start);
            if self.clustering.degree(cluster) == 2 {
                used[curve] = true;
                paths.push((curve, Path::new(vec![PathSegment::new(curve, false)], true)?));
            }
        }

        while let Some(seed) = pick_seed(&graph, &used) {
            let path = walker.walk(seed, &mut used)?;
            let first = path.curves().min().unwrap_or(seed.curve);
            paths.push((first, path));
        }

        paths.sort_by_key(|(first, _)| *first);

        debug!(
            curves = self.clustering.curve_count(),
            paths = paths.len(),
            closed = paths.iter().filter(|(_, p)| p.is_closed()).count(),
            "built paths"
        );

        Ok(paths.into_iter().map(|(_, p)| p).collect())
    }
}

/// Chooses where the next walk starts.
///
/// Preference order, each scanning non-loop curves in input order: an end
/// at a free end (strand degree 1), then any end whose cluster has one
/// unused curve left. Failing both, the first unused curve in its native
/// direction.
fn pick_seed(graph: &CurveGraph<'_>, used: &[bool]) -> Option<PathSegment> {
    let clustering = graph.clustering();
    let unused = || (0..used.len()).filter(|&c| !used[c]);
    let strands = || unused().filter(|&c| !graph.is_loop(c));

    let outward = |curve: usize, end: CurveEnd| PathSegment::new(curve, end == CurveEnd::End);
    let ends = [CurveEnd::Start, CurveEnd::End];

    for curve in strands() {
        for end in ends {
            if graph.strand_degree(clustering.cluster_of(curve, end)) == 1 {
                return Some(outward(curve, end));
            }
        }
    }
    for curve in strands() {
        for end in ends {
            if graph.remaining_degree(clustering.cluster_of(curve, end), used) == 1 {
                return Some(outward(curve, end));
            }
        }
    }
    unused().next().map(|curve| PathSegment::new(curve, false))
}

/// Result of [`AssemblePaths`]: the clustering and the paths built from it.
#[derive(Debug, Clone)]
pub struct Assembly {
    /// Endpoint clustering of the input curves.
    pub clustering: EndpointClustering,
    /// Reconstructed paths.
    pub paths: Vec<Path>,
}

/// Clusters a curve set and builds its paths in one step.
#[derive(Debug)]
pub struct AssemblePaths<'a, C> {
    curves: &'a [C],
    params: PathParams,
}

impl<'a, C: Copy> AssemblePaths<'a, C> {
    /// Creates a new assembly operation.
    #[must_use]
    pub fn new(curves: &'a [C], params: PathParams) -> Self {
        Self { curves, params }
    }

    /// Executes clustering and path reconstruction.
    ///
    /// # Errors
    ///
    /// Returns any error from [`ClusterEndpoints`] or [`BuildPaths`].
    pub fn execute<Q>(&self, query: &Q) -> Result<Assembly>
    where
        Q: GeometryQuery<Curve = C>,
    {
        let clustering = ClusterEndpoints::new(self.curves, self.params.endpoint_tolerance)
            .with_policy(self.params.cluster_policy)
            .execute(query)?;
        let paths = BuildPaths::new(&clustering)
            .with_max_branch_steps(self.params.max_branch_steps)
            .execute()?;
        Ok(Assembly { clustering, paths })
    }
}
