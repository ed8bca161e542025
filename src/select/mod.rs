//! Selection engine
//!
//! # Submodules
//! - `occlusion` - Visibility of an item given everything stacked above it
//! - `engine` - Direct hit test and nearest-visible fallback

mod occlusion;
mod engine;

pub use occlusion::{covered_by, is_visible};

pub use engine::{
    direct_hit,
    nearest_visible,
    select,
    select_all,
    select_each,
    Selection,
    SelectionPhase,
};
