//! Spatial partitioning data structures
//!
//! Provides the broad-phase index used by collision detection in the 2D
//! play field.

mod quadtree;
mod spatial_index;

pub use quadtree::{
    entity_bounds, Quadtree, QuadtreeConfig, QuadtreeEntry, QuadtreeNode, BOTTOM_LEFT,
    BOTTOM_RIGHT, FALLBACK_HALF_EXTENT, TOP_LEFT, TOP_RIGHT,
};
pub use spatial_index::SpatialIndex;
