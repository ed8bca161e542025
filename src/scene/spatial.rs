//! Spatial indexing for direct-hit lookup
//!
//! R-tree over item footprints. Each entry carries the item's stacking index,
//! so a point query returns candidates that the caller then orders by stack.

use super::item::Item;
use super::types::Point;
use rstar::{Envelope, RTree, RTreeObject, AABB};

/// Footprint wrapper for R-tree spatial indexing
#[derive(Clone, Debug)]
pub struct IndexedFootprint {
    /// Position of the item in stacking order
    pub stack_index: usize,
    pub bounds: AABB<[f64; 2]>,
}

impl IndexedFootprint {
    pub fn new(stack_index: usize, item: &Item) -> Self {
        let footprint = item.footprint();
        let bounds = AABB::from_corners(footprint.top_left.as_f64(), footprint.bottom_right.as_f64());
        Self { stack_index, bounds }
    }
}

impl RTreeObject for IndexedFootprint {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.bounds
    }
}

impl rstar::PointDistance for IndexedFootprint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.bounds.distance_2(point)
    }

    fn contains_point(&self, point: &[f64; 2]) -> bool {
        self.bounds.contains_point(point)
    }
}

/// Build the index for items given in stacking order
pub fn build_index<'a>(items: impl Iterator<Item = &'a Item>) -> RTree<IndexedFootprint> {
    let entries: Vec<IndexedFootprint> = items
        .enumerate()
        .map(|(i, item)| IndexedFootprint::new(i, item))
        .collect();
    RTree::bulk_load(entries)
}

/// Stacking indices whose footprint envelope contains `p`.
///
/// Envelopes are normalized by the R-tree, so this is a superset of the items
/// that really contain `p`; filter with `Item::contains_point`.
pub fn candidates_at_point(tree: &RTree<IndexedFootprint>, p: &Point) -> Vec<usize> {
    let point = p.as_f64();
    tree.locate_all_at_point(&point)
        .map(|entry| entry.stack_index)
        .collect()
}
