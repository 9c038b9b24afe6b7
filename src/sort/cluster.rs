//! Two-level cluster sort.
//!
//! Colours are bucketed into equal-width bands along a primary criterion,
//! then ordered inside each bucket by a secondary criterion.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{ThemeError, Result};
use crate::types::{SampleId, SampledList};

use super::Criterion;

/// Where a sample landed: its bucket and its rank inside that bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClusterPosition {
    pub cluster: usize,
    pub rank: usize,
}

/// Result of a cluster sort, keyed by sample handle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterAssignment {
    clusters: Vec<Vec<SampleId>>,
    positions: HashMap<SampleId, ClusterPosition>,
}

impl ClusterAssignment {
    /// Position of a sample, if it was part of the sorted list.
    pub fn position(&self, id: SampleId) -> Option<ClusterPosition> {
        self.positions.get(&id).copied()
    }

    /// All buckets, in cluster order. Buckets may be empty.
    pub fn clusters(&self) -> &[Vec<SampleId>] {
        &self.clusters
    }

    pub fn cluster(&self, index: usize) -> Option<&[SampleId]> {
        self.clusters.get(index).map(Vec::as_slice)
    }

    pub fn num_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Size of the fullest bucket.
    pub fn largest_cluster(&self) -> usize {
        self.clusters.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of assigned samples.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Handles in bucket-major, rank-minor order.
    pub fn sorted_ids(&self) -> impl Iterator<Item = SampleId> + '_ {
        self.clusters.iter().flatten().copied()
    }
}

/// Partition `list` into `num_clusters` buckets by `primary`, each ordered by `secondary`.
///
/// Bucket `i` covers `[min + i*w, min + (i+1)*w)` of the observed primary range;
/// the maximum lands in the last bucket. When every colour shares the same
/// primary key, all of them go to bucket 0. Ties on the secondary key keep
/// their order from `list`.
pub fn cluster_sort(
    list: &SampledList,
    primary: &Criterion,
    secondary: &Criterion,
    num_clusters: usize,
) -> Result<ClusterAssignment> {
    if num_clusters == 0 {
        return Err(ThemeError::InvalidClusterCount { count: num_clusters });
    }

    let primary_keys: Vec<f32> = list.colours().iter().map(|c| primary.key(c)).collect();
    let (min, max) = primary_keys
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &k| {
            (lo.min(k), hi.max(k))
        });
    let span = max as f64 - min as f64;

    let mut buckets: Vec<Vec<(SampleId, f32)>> = vec![Vec::new(); num_clusters];
    for ((id, colour), key) in list.iter().zip(&primary_keys) {
        let bucket = if span > 0.0 {
            let scaled = (*key as f64 - min as f64) / span * num_clusters as f64;
            (scaled.floor() as usize).min(num_clusters - 1)
        } else {
            0
        };
        buckets[bucket].push((id, secondary.key(&colour)));
    }

    let mut positions = HashMap::with_capacity(list.len());
    let clusters = buckets
        .into_iter()
        .enumerate()
        .map(|(cluster, mut members)| {
            // sort_by is stable, so equal keys keep list order
            members.sort_by(|a, b| a.1.total_cmp(&b.1));
            members
                .into_iter()
                .enumerate()
                .map(|(rank, (id, _))| {
                    positions.insert(id, ClusterPosition { cluster, rank });
                    id
                })
                .collect()
        })
        .collect();

    Ok(ClusterAssignment {
        clusters,
        positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::criteria::resolve;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;

    fn ids(raw: &[usize]) -> Vec<SampleId> {
        raw.iter().map(|&i| SampleId::new(i)).collect()
    }

    #[test]
    fn test_invalid_cluster_count() {
        let list = SampledList::new(vec![Colour::WHITE]);
        let hue = resolve("HUE").unwrap();
        let err = cluster_sort(&list, &hue, &hue, 0).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidClusterCount { count: 0 }));
    }

    #[test]
    fn test_empty_list() {
        let hue = resolve("HUE").unwrap();
        let assignment = cluster_sort(&SampledList::default(), &hue, &hue, 4).unwrap();
        assert!(assignment.is_empty());
        assert_eq!(assignment.num_clusters(), 4);
        assert_eq!(assignment.largest_cluster(), 0);
    }

    #[test]
    fn test_even_spread_with_boundary_clamp() {
        // brightness 0, 1/8, ..., 1
        let colours = (0..9)
            .map(|i| Colour::hsv(0.0, 0.0, i as f32 / 8.0))
            .collect();
        let list = SampledList::new(colours);
        let brightness = resolve("BRIGHTNESS").unwrap();

        let assignment = cluster_sort(&list, &brightness, &brightness, 3).unwrap();

        assert_eq!(assignment.cluster(0).unwrap(), ids(&[0, 1, 2]).as_slice());
        assert_eq!(assignment.cluster(1).unwrap(), ids(&[3, 4, 5]).as_slice());
        assert_eq!(assignment.cluster(2).unwrap(), ids(&[6, 7, 8]).as_slice());
        assert_eq!(
            assignment.position(SampleId::new(8)),
            Some(ClusterPosition { cluster: 2, rank: 2 })
        );
    }

    #[test]
    fn test_secondary_orders_within_bucket() {
        let list = SampledList::new(vec![
            Colour::hsv(0.1, 0.0, 0.9),
            Colour::hsv(0.1, 0.0, 0.2),
            Colour::hsv(0.9, 0.0, 0.5),
            Colour::hsv(0.9, 0.0, 0.1),
        ]);
        let hue = resolve("HUE").unwrap();
        let brightness = resolve("BRIGHTNESS").unwrap();

        let assignment = cluster_sort(&list, &hue, &brightness, 2).unwrap();

        assert_eq!(assignment.clusters(), &[ids(&[1, 0]), ids(&[3, 2])]);
        assert_eq!(
            assignment.position(SampleId::new(0)),
            Some(ClusterPosition { cluster: 0, rank: 1 })
        );
    }

    #[test]
    fn test_stable_for_equal_secondary_keys() {
        // Same brightness everywhere; hues spread over two buckets
        let hues = [0.0, 0.9, 0.1, 0.8, 0.2, 1.0, 0.3];
        let list = SampledList::new(hues.iter().map(|&h| Colour::hsv(h, 0.5, 0.5)).collect());
        let hue = resolve("HUE").unwrap();
        let brightness = resolve("BRIGHTNESS").unwrap();

        let assignment = cluster_sort(&list, &hue, &brightness, 2).unwrap();

        assert_eq!(assignment.cluster(0).unwrap(), ids(&[0, 2, 4, 6]).as_slice());
        assert_eq!(assignment.cluster(1).unwrap(), ids(&[1, 3, 5]).as_slice());
    }

    #[test]
    fn test_degenerate_primary_range() {
        let list = SampledList::new(vec![
            Colour::hsv(0.4, 0.1, 0.9),
            Colour::hsv(0.4, 0.2, 0.1),
            Colour::hsv(0.4, 0.3, 0.5),
        ]);
        let hue = resolve("HUE").unwrap();
        let brightness = resolve("BRIGHTNESS").unwrap();

        let assignment = cluster_sort(&list, &hue, &brightness, 5).unwrap();

        assert_eq!(assignment.cluster(0).unwrap(), ids(&[1, 2, 0]).as_slice());
        assert!(assignment.clusters()[1..].iter().all(Vec::is_empty));
    }

    #[test]
    fn test_every_sample_assigned_once() {
        let list = SampledList::new(
            (0..40)
                .map(|i| Colour::hsv((i * 7 % 40) as f32 / 40.0, 0.5, (i % 5) as f32 / 5.0))
                .collect(),
        );
        let hue = resolve("HUE").unwrap();
        let brightness = resolve("BRIGHTNESS").unwrap();

        let assignment = cluster_sort(&list, &hue, &brightness, 6).unwrap();

        let mut seen: Vec<_> = assignment.sorted_ids().collect();
        seen.sort();
        assert_eq!(seen, list.ids().collect::<Vec<_>>());
        for id in list.ids() {
            let pos = assignment.position(id).unwrap();
            assert!(pos.cluster < 6);
            assert_eq!(assignment.cluster(pos.cluster).unwrap()[pos.rank], id);
        }
    }

    #[test]
    fn test_more_clusters_than_colours() {
        let list = SampledList::new(vec![Colour::hsv(0.0, 1.0, 1.0), Colour::hsv(0.5, 1.0, 1.0)]);
        let hue = resolve("HUE").unwrap();

        let assignment = cluster_sort(&list, &hue, &hue, 10).unwrap();

        assert_eq!(assignment.num_clusters(), 10);
        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.cluster(0).unwrap(), ids(&[0]).as_slice());
        assert_eq!(assignment.cluster(9).unwrap(), ids(&[1]).as_slice());
        assert_eq!(assignment.largest_cluster(), 1);
    }

    #[test]
    fn test_sorting_leaves_list_order_untouched() {
        let list = SampledList::new(vec![
            Colour::hsv(0.7, 0.5, 0.5),
            Colour::hsv(0.1, 0.5, 0.5),
            Colour::hsv(0.4, 0.5, 0.5),
        ]);
        let before = list.clone();
        let hue = resolve("HUE").unwrap();

        let first = cluster_sort(&list, &hue, &hue, 3).unwrap();
        let second = cluster_sort(&list, &hue, &hue, 3).unwrap();

        assert_eq!(list, before);
        assert_eq!(first, second);
    }
}
