//! Capability trait for anything the collision engine can process

use super::{Entity, Tag};
use crate::foundation::math::Transform2D;
use crate::physics::collision::Collider;
use std::any::Any;

/// Downcast support for boxed game objects
///
/// Implemented for every `'static` type, so game objects get it for free.
pub trait AsAny: Any {
    /// Downcast to Any for type-specific access
    fn as_any(&self) -> &dyn Any;

    /// Downcast to Any for mutable type-specific access
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A game object registered in the [`super::World`]
///
/// The engine reads `is_active`, `tag`, `transform` and `collider` while
/// detecting collisions, and calls the notification hooks when a pair of
/// objects starts touching, keeps touching, or separates. Hooks have empty
/// default bodies so objects only override what they react to.
pub trait GameObject: AsAny {
    /// Inactive objects are skipped entirely (no indexing, no tests)
    fn is_active(&self) -> bool {
        true
    }

    /// Category used by the collision matrix
    fn tag(&self) -> Tag;

    /// World transform; only the position is used by the engine
    fn transform(&self) -> &Transform2D;

    /// Mutable world transform, for whoever moves the object between ticks
    fn transform_mut(&mut self) -> &mut Transform2D;

    /// Attached collider, if any
    fn collider(&self) -> Option<&Collider>;

    /// Mutable access to the attached collider
    fn collider_mut(&mut self) -> Option<&mut Collider>;

    /// Called once at the start of every collision tick that processes this object
    fn on_collision_frame_start(&mut self) {}

    /// `other` started touching this object this tick
    fn on_collision_enter(&mut self, _other: Entity) {}

    /// `other` was touching last tick and still is
    fn on_collision_stay(&mut self, _other: Entity) {}

    /// `other` was touching last tick and no longer is
    fn on_collision_exit(&mut self, _other: Entity) {}
}
