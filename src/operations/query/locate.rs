use crate::error::{GeometryError, Result};
use crate::geometry::query::GeometryQuery;
use crate::math::TOLERANCE;
use crate::topology::Path;

use crate::operations::{curve_at, ParameterMode};

/// Where a global parameter falls on a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathLocation {
    /// Index into the path's segments.
    pub segment: usize,
    /// Fraction along the segment in the direction of travel, in `[0, 1]`.
    pub local: f64,
    /// Whether the segment is traversed against its native direction.
    pub flipped: bool,
}

impl PathLocation {
    /// The parameter to evaluate on the underlying curve.
    #[must_use]
    pub fn curve_parameter(&self) -> f64 {
        if self.flipped {
            1.0 - self.local
        } else {
            self.local
        }
    }
}

/// Cumulative span ends of each segment, normalized to `[0, 1]`.
#[derive(Debug)]
pub(crate) struct ParameterMap {
    ends: Vec<f64>,
}

impl ParameterMap {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn build<Q: GeometryQuery>(
        query: &Q,
        curves: &[Q::Curve],
        path: &Path,
        mode: ParameterMode,
    ) -> Result<Self> {
        let n = path.len();
        let mut ends = match mode {
            ParameterMode::ArcLength => {
                let lengths = segment_lengths(query, curves, path)?;
                let total: f64 = lengths.iter().sum();
                if total < TOLERANCE {
                    return Err(
                        GeometryError::Degenerate("path has zero total length".into()).into(),
                    );
                }
                let mut acc = 0.0;
                lengths
                    .iter()
                    .map(|l| {
                        acc += l;
                        acc / total
                    })
                    .collect::<Vec<_>>()
            }
            ParameterMode::SegmentCount => (1..=n).map(|i| i as f64 / n as f64).collect(),
        };
        if let Some(last) = ends.last_mut() {
            *last = 1.0;
        }
        Ok(Self { ends })
    }

    fn is_empty_span(&self, segment: usize) -> bool {
        let (start, end) = self.span(segment);
        end <= start
    }

    fn span(&self, segment: usize) -> (f64, f64) {
        let start = if segment == 0 { 0.0 } else { self.ends[segment - 1] };
        (start, self.ends[segment])
    }

    /// Maps `g` to a segment. A parameter on a boundary belongs to the
    /// earlier segment; zero-length segments are never selected.
    pub(crate) fn locate(&self, path: &Path, g: f64) -> PathLocation {
        let last = self.ends.len() - 1;
        let mut segment = self.ends.partition_point(|&e| e < g).min(last);
        while segment < last && self.is_empty_span(segment) {
            segment += 1;
        }
        let (start, end) = self.span(segment);
        let local = if end > start {
            ((g - start) / (end - start)).clamp(0.0, 1.0)
        } else {
            1.0
        };
        PathLocation {
            segment,
            local,
            flipped: path.segments()[segment].flipped,
        }
    }
}

/// Lengths of the path's segments, in path order.
pub(crate) fn segment_lengths<Q: GeometryQuery>(
    query: &Q,
    curves: &[Q::Curve],
    path: &Path,
) -> Result<Vec<f64>> {
    path.segments()
        .iter()
        .map(|s| {
            let len = query.length(curve_at(curves, s.curve)?)?;
            if len.is_finite() && len >= 0.0 {
                Ok(len)
            } else {
                Err(GeometryError::Degenerate(format!(
                    "curve {} reports invalid length {len}",
                    s.curve
                ))
                .into())
            }
        })
        .collect()
}

/// Rejects any parameter outside `[0, 1]`.
pub(crate) fn check_parameters(parameters: &[f64]) -> Result<()> {
    match parameters.iter().find(|g| !(0.0..=1.0).contains(*g)) {
        Some(&value) => Err(GeometryError::ParameterOutOfRange {
            parameter: "global parameter",
            value,
            min: 0.0,
            max: 1.0,
        }
        .into()),
        None => Ok(()),
    }
}

/// Maps global parameters to segment locations without evaluating geometry.
#[derive(Debug)]
pub struct LocateOnPath<'a, C> {
    curves: &'a [C],
    path: &'a Path,
    parameters: &'a [f64],
    mode: ParameterMode,
}

impl<'a, C: Copy> LocateOnPath<'a, C> {
    /// Creates a new locate query in arc-length mode.
    #[must_use]
    pub fn new(curves: &'a [C], path: &'a Path, parameters: &'a [f64]) -> Self {
        Self {
            curves,
            path,
            parameters,
            mode: ParameterMode::default(),
        }
    }

    /// Sets the parameter mapping mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ParameterMode) -> Self {
        self.mode = mode;
        self
    }

    /// Executes the query, returning one location per parameter.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` for a parameter outside
    /// `[0, 1]`, `GeometryError::Degenerate` if the path has zero length in
    /// arc-length mode, `TopologyError::EntityNotFound` if a segment names a
    /// curve outside `curves`, or any error raised by the geometry query.
    pub fn execute<Q>(&self, query: &Q) -> Result<Vec<PathLocation>>
    where
        Q: GeometryQuery<Curve = C>,
    {
        check_parameters(self.parameters)?;
        let map = ParameterMap::build(query, self.curves, self.path, self.mode)?;
        Ok(self
            .parameters
            .iter()
            .map(|&g| map.locate(self.path, g))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{PathweaveError, TopologyError};
    use crate::operations::test_support::segments;
    use crate::topology::{CurveStore, PathSegment};
    use approx::assert_relative_eq;

    fn straight(store: &mut CurveStore, lengths: &[f64]) -> Vec<crate::topology::CurveId> {
        let mut x = 0.0;
        let pairs: Vec<_> = lengths
            .iter()
            .map(|l| {
                let p = ((x, 0.0), (x + l, 0.0));
                x += l;
                p
            })
            .collect();
        segments(store, &pairs)
    }

    fn forward(n: usize) -> Path {
        Path::new((0..n).map(|i| PathSegment::new(i, false)).collect(), false).unwrap()
    }

    #[test]
    fn arc_length_spans() {
        let mut store = CurveStore::new();
        let curves = straight(&mut store, &[1.0, 3.0]);
        let path = forward(2);
        let locs = LocateOnPath::new(&curves, &path, &[0.0, 0.125, 0.25, 0.625, 1.0])
            .execute(&store)
            .unwrap();
        assert_eq!(locs.iter().map(|l| l.segment).collect::<Vec<_>>(), vec![0, 0, 0, 1, 1]);
        assert_relative_eq!(locs[0].local, 0.0);
        assert_relative_eq!(locs[1].local, 0.5);
        // Boundary resolves to the end of the earlier segment.
        assert_relative_eq!(locs[2].local, 1.0);
        assert_relative_eq!(locs[3].local, 0.5);
        assert_relative_eq!(locs[4].local, 1.0);
    }

    #[test]
    fn uniform_spans_ignore_length() {
        let mut store = CurveStore::new();
        let curves = straight(&mut store, &[1.0, 3.0]);
        let path = forward(2);
        let locs = LocateOnPath::new(&curves, &path, &[0.25, 0.5, 0.75])
            .with_mode(ParameterMode::SegmentCount)
            .execute(&store)
            .unwrap();
        assert_eq!(locs[0].segment, 0);
        assert_relative_eq!(locs[0].local, 0.5);
        assert_eq!(locs[1].segment, 0);
        assert_relative_eq!(locs[1].local, 1.0);
        assert_eq!(locs[2].segment, 1);
        assert_relative_eq!(locs[2].local, 0.5);
    }

    #[test]
    fn zero_length_segments_are_skipped() {
        let mut store = CurveStore::new();
        let curves = segments(
            &mut store,
            &[
                ((0.0, 0.0), (0.0, 0.0)),
                ((0.0, 0.0), (1.0, 0.0)),
                ((1.0, 0.0), (1.0, 0.0)),
                ((1.0, 0.0), (2.0, 0.0)),
            ],
        );
        let path = forward(4);
        let locs = LocateOnPath::new(&curves, &path, &[0.0, 0.5, 1.0])
            .execute(&store)
            .unwrap();
        assert_eq!(locs[0].segment, 1);
        assert_relative_eq!(locs[0].local, 0.0);
        assert_eq!(locs[1].segment, 1);
        assert_relative_eq!(locs[1].local, 1.0);
        assert_eq!(locs[2].segment, 3);
        assert_relative_eq!(locs[2].local, 1.0);
    }

    #[test]
    fn flipped_segment_reverses_curve_parameter() {
        let mut store = CurveStore::new();
        let curves = straight(&mut store, &[2.0]);
        let path = Path::new(vec![PathSegment::new(0, true)], false).unwrap();
        let locs = LocateOnPath::new(&curves, &path, &[0.25]).execute(&store).unwrap();
        assert!(locs[0].flipped);
        assert_relative_eq!(locs[0].curve_parameter(), 0.75);
    }

    #[test]
    fn out_of_range_parameter() {
        let mut store = CurveStore::new();
        let curves = straight(&mut store, &[1.0]);
        let path = forward(1);
        for bad in [-0.01, 1.01, f64::NAN] {
            let err = LocateOnPath::new(&curves, &path, &[0.5, bad])
                .execute(&store)
                .unwrap_err();
            assert!(matches!(
                err,
                PathweaveError::Geometry(GeometryError::ParameterOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn zero_total_length_is_degenerate() {
        let mut store = CurveStore::new();
        let curves = segments(&mut store, &[((1.0, 1.0), (1.0, 1.0))]);
        let path = forward(1);
        let err = LocateOnPath::new(&curves, &path, &[0.5]).execute(&store).unwrap_err();
        assert!(matches!(err, PathweaveError::Geometry(GeometryError::Degenerate(_))));

        let uniform = LocateOnPath::new(&curves, &path, &[0.5])
            .with_mode(ParameterMode::SegmentCount)
            .execute(&store)
            .unwrap();
        assert_eq!(uniform[0].segment, 0);
    }

    #[test]
    fn unknown_curve_index() {
        let mut store = CurveStore::new();
        let curves = straight(&mut store, &[1.0]);
        let path = forward(2);
        let err = LocateOnPath::new(&curves, &path, &[0.5]).execute(&store).unwrap_err();
        assert!(matches!(
            err,
            PathweaveError::Topology(TopologyError::EntityNotFound(_))
        ));
    }
}
