//! Physics module for collision detection
//!
//! Broad phase through the quadtree in [`crate::spatial`], tag filtering
//! through [`CollisionMatrix`], exact box/circle tests in [`collision`], and
//! pair tracking with enter/stay/exit notifications in [`CollisionSystem`].

pub mod collision;
pub mod collision_matrix;
pub mod collision_system;

#[cfg(test)]
mod tests;

pub use collision::{Collider, ColliderKind, ColliderShape, Rect, WorldCollider};
pub use collision_matrix::{CollisionMatrix, MAX_TAGS};
pub use collision_system::{
    CollisionEvent, CollisionPair, CollisionPhase, CollisionSystem, FrameStats,
};
