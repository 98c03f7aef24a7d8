//! Game object registry
//!
//! Entities are generational handles into a [`World`] that owns boxed
//! [`GameObject`]s. The collision engine only ever stores handles and
//! resolves them through the world when it needs an object.

pub mod body;
pub mod entity;
pub mod game_object;
pub mod tag;
pub mod world;

pub use body::{Body, CollisionState};
pub use entity::Entity;
pub use game_object::{AsAny, GameObject};
pub use tag::{Tag, TagError};
pub use world::World;
