use crate::topology::{EndpointClustering, Path};

/// Checks that a path is consistent with an endpoint clustering.
///
/// A valid path references only clustered curves, uses each curve at most
/// once, leaves every segment through the cluster the next one enters from,
/// and is marked closed exactly when its last exit meets its first entry.
#[derive(Debug)]
pub struct IsValidPath<'a> {
    path: &'a Path,
    clustering: &'a EndpointClustering,
}

impl<'a> IsValidPath<'a> {
    /// Creates a new validity check.
    #[must_use]
    pub fn new(path: &'a Path, clustering: &'a EndpointClustering) -> Self {
        Self { path, clustering }
    }

    /// Executes the check.
    #[must_use]
    pub fn execute(&self) -> bool {
        let segments = self.path.segments();
        let count = self.clustering.curve_count();

        let mut seen = vec![false; count];
        for s in segments {
            if s.curve >= count || seen[s.curve] {
                return false;
            }
            seen[s.curve] = true;
        }

        let linked = segments.windows(2).all(|pair| {
            self.clustering.exit_cluster(pair[0]) == self.clustering.entry_cluster(pair[1])
        });

        let (Some(&first), Some(&last)) = (segments.first(), segments.last()) else {
            return false;
        };
        let meets =
            self.clustering.exit_cluster(last) == self.clustering.entry_cluster(first);

        linked && meets == self.path.is_closed()
    }
}
