use tracing::debug;

use crate::error::Result;
use crate::geometry::query::GeometryQuery;
use crate::math::direction::angle_between;
use crate::math::Vector3;
use crate::topology::{Path, PathSegment, TangentPath};

use super::direction::travel_directions;
use super::{curve_at, DirectionPolicy, PathParams};

/// Splits a path into runs with no tangent break at any interior joint.
///
/// A joint breaks when the angle between the exit direction of one segment
/// and the entry direction of the next exceeds the angle tolerance. Runs
/// keep the path's segment order. For a closed path the wrap-around joint
/// is also checked: a path that is smooth everywhere, wrap included, yields
/// one closed run, and a smooth wrap between two breaks joins the last run
/// onto the first, so the runs then start after the last break.
#[derive(Debug)]
pub struct SplitTangent<'a, C> {
    curves: &'a [C],
    path: &'a Path,
    force_split_all: bool,
    angle_tolerance: f64,
    direction_policy: DirectionPolicy,
}

impl<'a, C: Copy> SplitTangent<'a, C> {
    /// Creates a new split operation over `path`, whose segments index `curves`.
    #[must_use]
    pub fn new(curves: &'a [C], path: &'a Path) -> Self {
        let params = PathParams::default();
        Self {
            curves,
            path,
            force_split_all: false,
            angle_tolerance: params.angle_tolerance,
            direction_policy: params.direction_policy,
        }
    }

    /// When set, every segment becomes its own run.
    #[must_use]
    pub fn with_force_split_all(mut self, force: bool) -> Self {
        self.force_split_all = force;
        self
    }

    /// Takes the angle tolerance and direction policy from `params`.
    #[must_use]
    pub fn with_params(mut self, params: &PathParams) -> Self {
        self.angle_tolerance = params.angle_tolerance;
        self.direction_policy = params.direction_policy;
        self
    }

    /// Executes the split.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if a joint direction is undefined
    /// and the direction policy is `Fail`, `TopologyError::EntityNotFound`
    /// if a segment names a curve outside `curves`, or any error raised by
    /// the geometry query.
    pub fn execute<Q>(&self, query: &Q) -> Result<Vec<TangentPath>>
    where
        Q: GeometryQuery<Curve = C>,
    {
        let segments = self.path.segments();

        if self.force_split_all {
            let single_loop = segments.len() == 1 && self.path.is_closed();
            return segments
                .iter()
                .map(|&s| -> Result<TangentPath> {
                    Ok(TangentPath::new(Path::new(vec![s], single_loop)?))
                })
                .collect();
        }

        let directions: Vec<(Vector3, Vector3)> = segments
            .iter()
            .map(|&s| -> Result<(Vector3, Vector3)> {
                travel_directions(query, curve_at(self.curves, s.curve)?, s, self.direction_policy)
            })
            .collect::<Result<_>>()?;

        let smooth = |from: usize, to: usize| {
            angle_between(&directions[from].1, &directions[to].0) <= self.angle_tolerance
        };

        let mut runs: Vec<Vec<PathSegment>> = vec![vec![segments[0]]];
        for i in 1..segments.len() {
            if !smooth(i - 1, i) {
                runs.push(Vec::new());
            }
            if let Some(run) = runs.last_mut() {
                run.push(segments[i]);
            }
        }

        let wrap_smooth = self.path.is_closed() && smooth(segments.len() - 1, 0);
        let closes = wrap_smooth && runs.len() == 1;
        if wrap_smooth && runs.len() > 1 {
            // Continue the last run through the wrap joint into the first.
            if let Some(mut tail) = runs.pop() {
                tail.append(&mut runs[0]);
                runs[0] = tail;
            }
        }

        debug!(
            segments = segments.len(),
            runs = runs.len(),
            closed = closes,
            "split path at tangent breaks"
        );

        runs.into_iter()
            .map(|run| -> Result<TangentPath> { Ok(TangentPath::new(Path::new(run, closes)?)) })
            .collect()
    }
}
