//! Handler module declarations and re-exports

pub mod scene;
pub mod selection;

pub use scene::*;
pub use selection::*;
