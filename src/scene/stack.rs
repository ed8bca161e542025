//! Scene: items in stacking order
//!
//! Index 0 is painted first (bottom-most), the last item is painted on top.
//! Names are unique; the `IndexMap` keeps insertion order as stacking order.

use super::item::Item;
use super::spatial::{self, IndexedFootprint};
use super::types::Point;
use indexmap::IndexMap;
use rstar::RTree;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("duplicate item name: {0}")]
    DuplicateName(String),
}

/// Ordered, name-unique collection of items with a footprint index
pub struct Scene {
    items: IndexMap<String, Item>,
    spatial_index: RTree<IndexedFootprint>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            spatial_index: RTree::new(),
        }
    }

    /// Build a scene from items listed bottom to top, bulk loading the index
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self, SceneError> {
        let mut map = IndexMap::new();
        for item in items {
            if map.contains_key(item.name()) {
                return Err(SceneError::DuplicateName(item.name().to_string()));
            }
            map.insert(item.name().to_string(), item);
        }
        let spatial_index = spatial::build_index(map.values());
        Ok(Self { items: map, spatial_index })
    }

    /// Place `item` on top of everything already in the scene
    pub fn push(&mut self, item: Item) -> Result<usize, SceneError> {
        if self.items.contains_key(item.name()) {
            return Err(SceneError::DuplicateName(item.name().to_string()));
        }
        let index = self.items.len();
        self.spatial_index.insert(IndexedFootprint::new(index, &item));
        self.items.insert(item.name().to_string(), item);
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get_index(index).map(|(_, item)| item)
    }

    /// Stacking index and item for `name`
    pub fn find(&self, name: &str) -> Option<(usize, &Item)> {
        self.items.get_full(name).map(|(i, _, item)| (i, item))
    }

    /// Items bottom to top
    pub fn items(&self) -> impl DoubleEndedIterator<Item = &Item> + ExactSizeIterator {
        self.items.values()
    }

    /// Items strictly above `index`, in stacking order
    pub fn items_above(&self, index: usize) -> impl Iterator<Item = &Item> {
        self.items.values().skip(index.saturating_add(1))
    }

    /// Stacking indices whose footprint may contain `p`, unordered
    pub fn candidates_at_point(&self, p: &Point) -> Vec<usize> {
        spatial::candidates_at_point(&self.spatial_index, p)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("items", &self.items.values().collect::<Vec<_>>())
            .finish()
    }
}
