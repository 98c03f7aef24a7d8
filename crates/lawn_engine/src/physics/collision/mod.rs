//! Collision geometry
//!
//! # Module Organization
//!
//! - [`primitives`] - Axis-aligned rectangles for broad-phase placement
//! - [`shape`] - Entity colliders and exact shape-vs-shape tests
//!
//! # Key Types
//!
//! - [`Rect`] - Strict-overlap rectangle used by the spatial index
//! - [`Collider`] - Local-space box/circle attached to an entity
//! - [`WorldCollider`] - Temporary world-space shape for testing

pub mod primitives;
pub mod shape;

pub use primitives::Rect;
pub use shape::{Collider, ColliderKind, ColliderShape, Detached, OwnerTransforms, WorldCollider};
