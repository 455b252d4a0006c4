use petgraph::unionfind::UnionFind;

use crate::topology::EndpointCluster;

/// Merges clusters that are chained through a shared sample.
///
/// Two clusters are joined when a member of one lies within `tolerance` of
/// the other's representative. Returns the merged clusters (ids renumbered
/// in first-seen order) and the old-to-new id map.
pub(super) fn merge_chained(
    clusters: Vec<EndpointCluster>,
    tolerance: f64,
) -> (Vec<EndpointCluster>, Vec<usize>) {
    let n = clusters.len();
    let mut sets = UnionFind::<usize>::new(n);

    for (i, cluster) in clusters.iter().enumerate() {
        for (j, other) in clusters.iter().enumerate() {
            if i == j {
                continue;
            }
            let touches = cluster
                .members
                .iter()
                .any(|m| (m.position - other.representative).norm() <= tolerance);
            if touches {
                sets.union(i, j);
            }
        }
    }

    // The first cluster of each set in index order keeps its representative.
    let mut slot_of_root = vec![usize::MAX; n];
    let mut remap = vec![usize::MAX; n];
    let mut merged: Vec<EndpointCluster> = Vec::new();
    for (i, cluster) in clusters.into_iter().enumerate() {
        let root = sets.find_mut(i);
        if slot_of_root[root] == usize::MAX {
            slot_of_root[root] = merged.len();
            merged.push(cluster);
        } else {
            merged[slot_of_root[root]].members.extend(cluster.members);
        }
        remap[i] = slot_of_root[root];
    }

    for cluster in &mut merged {
        cluster.members.sort_by_key(|m| (m.curve, m.end.index()));
    }

    (merged, remap)
}
