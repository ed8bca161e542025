//! Scene model for click selection
//!
//! # Submodules
//! - `types` - Geometry primitives (Point, Rect)
//! - `item` - Selectable items (Icon, Region)
//! - `spatial` - R-tree footprint index for direct-hit lookup
//! - `stack` - The stacking-ordered Scene

mod types;
mod item;
mod spatial;
mod stack;

pub use types::{Point, Rect};

pub use item::{Icon, Item, ItemKind, Region};

pub use spatial::IndexedFootprint;

pub use stack::{Scene, SceneError};
