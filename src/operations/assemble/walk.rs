use tracing::trace;

use crate::error::{Result, TopologyError, TopologyFault};
use crate::topology::{Path, PathSegment};

use super::graph::CurveGraph;

/// A cluster reached by the walk and the untried ways out of it.
struct Frame {
    cluster: usize,
    candidates: Vec<PathSegment>,
    next: usize,
}

/// Depth-first path walker with explicit backtracking.
///
/// Frame `k` sits at the exit cluster of path segment `k`. Pushing a segment
/// marks its curve used; popping a frame unmarks it, so a failed branch
/// never leaves marks behind.
pub(super) struct Walker<'g, 'a> {
    graph: &'g CurveGraph<'a>,
    max_steps: usize,
}

impl<'g, 'a> Walker<'g, 'a> {
    pub(super) fn new(graph: &'g CurveGraph<'a>, max_steps: usize) -> Self {
        Self { graph, max_steps }
    }

    /// Walks outwards from `seed` until the path closes or reaches a free end.
    ///
    /// A walk may stop only where every unused curve left at the cluster is
    /// a self-loop; those loops are left for later walks. Stopping is
    /// accepted when the cluster is the walk's own start (closed path), or
    /// when both the start and the stop are free ends (strand degree 1).
    /// Anything else is a dead end and the walk backtracks to the most
    /// recent branch with an untried candidate.
    pub(super) fn walk(&self, seed: PathSegment, used: &mut [bool]) -> Result<Path> {
        let clustering = self.graph.clustering();
        let start = clustering.entry_cluster(seed);
        let open_allowed = self.graph.strand_degree(start) == 1;

        let mut path = vec![seed];
        used[seed.curve] = true;
        let mut frames = vec![self.frame_after(seed, used)];
        let mut dead_end: Option<(usize, usize)> = None;
        let mut steps = 0_usize;

        while let Some(top) = frames.len().checked_sub(1) {
            let frame = &frames[top];
            if frame.next == 0 && frame.candidates.iter().all(|s| self.graph.is_loop(s.curve)) {
                let cluster = frame.cluster;
                let closed = cluster == start;
                if closed || (open_allowed && self.graph.strand_degree(cluster) == 1) {
                    return Path::new(path, closed);
                }
                if frame.candidates.is_empty() {
                    let curve = path.last().map_or(seed.curve, |s| s.curve);
                    trace!(cluster, curve, "walk dead-ends, backtracking");
                    dead_end.get_or_insert((cluster, curve));
                    Self::backtrack(&mut frames, &mut path, used);
                    continue;
                }
            }

            if frames[top].next < frames[top].candidates.len() {
                let segment = frames[top].candidates[frames[top].next];
                frames[top].next += 1;

                steps += 1;
                if steps > self.max_steps {
                    Self::unwind(&mut path, used);
                    return Err(TopologyError::InvalidTopology {
                        cluster: frames[top].cluster,
                        curve: segment.curve,
                        fault: TopologyFault::BranchLimit(self.max_steps),
                    }
                    .into());
                }

                used[segment.curve] = true;
                path.push(segment);
                frames.push(self.frame_after(segment, used));
            } else {
                Self::backtrack(&mut frames, &mut path, used);
            }
        }

        let (cluster, curve) = dead_end.unwrap_or((start, seed.curve));
        Err(TopologyError::InvalidTopology {
            cluster,
            curve,
            fault: TopologyFault::DeadEnd,
        }
        .into())
    }

    fn frame_after(&self, segment: PathSegment, used: &[bool]) -> Frame {
        let cluster = self.graph.clustering().exit_cluster(segment);
        Frame {
            cluster,
            candidates: self.graph.candidates(cluster, used),
            next: 0,
        }
    }

    fn backtrack(frames: &mut Vec<Frame>, path: &mut Vec<PathSegment>, used: &mut [bool]) {
        frames.pop();
        if let Some(segment) = path.pop() {
            used[segment.curve] = false;
        }
    }

    fn unwind(path: &mut Vec<PathSegment>, used: &mut [bool]) {
        for segment in path.drain(..) {
            used[segment.curve] = false;
        }
    }
}
