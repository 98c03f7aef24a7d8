//! Ready-made game object that records its collision notifications

use super::{Entity, GameObject, Tag};
use crate::foundation::math::{Transform2D, Vec2};
use crate::physics::collision::Collider;
use std::collections::HashSet;

/// Collision notifications received by an object
///
/// Updated through the notification hooks while the collision system runs.
/// The per-tick lists are cleared at the start of every tick; the colliding
/// set persists until an exit arrives.
#[derive(Debug, Default, Clone)]
pub struct CollisionState {
    /// All entities we're currently colliding with
    pub colliding_with: HashSet<Entity>,

    /// Entities we started colliding with this tick
    pub collision_entered: Vec<Entity>,

    /// Entities we were colliding with last tick and still are
    pub collision_stayed: Vec<Entity>,

    /// Entities we stopped colliding with this tick
    pub collision_exited: Vec<Entity>,
}

impl CollisionState {
    /// Check if we're currently colliding with any entity
    pub fn is_colliding(&self) -> bool {
        !self.colliding_with.is_empty()
    }

    /// Check if we're colliding with a specific entity
    pub fn is_colliding_with(&self, entity: Entity) -> bool {
        self.colliding_with.contains(&entity)
    }

    /// Get the number of entities we're colliding with
    pub fn collision_count(&self) -> usize {
        self.colliding_with.len()
    }

    /// Check if we just started colliding with a specific entity this tick
    pub fn just_collided_with(&self, entity: Entity) -> bool {
        self.collision_entered.contains(&entity)
    }

    /// Check if we just stopped colliding with a specific entity this tick
    pub fn just_stopped_colliding_with(&self, entity: Entity) -> bool {
        self.collision_exited.contains(&entity)
    }

    /// Clear per-tick lists
    pub fn clear_frame_data(&mut self) {
        self.collision_entered.clear();
        self.collision_stayed.clear();
        self.collision_exited.clear();
    }

    fn record_enter(&mut self, other: Entity) {
        self.colliding_with.insert(other);
        self.collision_entered.push(other);
    }

    fn record_stay(&mut self, other: Entity) {
        self.colliding_with.insert(other);
        self.collision_stayed.push(other);
    }

    fn record_exit(&mut self, other: Entity) {
        self.colliding_with.remove(&other);
        self.collision_exited.push(other);
    }
}

/// Plain game object: a tag, a transform, an optional collider
#[derive(Debug, Clone)]
pub struct Body {
    tag: Tag,
    transform: Transform2D,
    collider: Option<Collider>,
    active: bool,
    state: CollisionState,
}

impl Body {
    /// Create an active body without a collider
    pub fn new(tag: Tag, position: Vec2) -> Self {
        Self {
            tag,
            transform: Transform2D::from_position(position),
            collider: None,
            active: true,
            state: CollisionState::default(),
        }
    }

    /// Attach a collider
    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    /// Move the body
    pub fn set_position(&mut self, position: Vec2) {
        self.transform.set_position(position);
    }

    /// Activate or deactivate the body
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Notifications received so far
    pub fn state(&self) -> &CollisionState {
        &self.state
    }
}

impl GameObject for Body {
    fn is_active(&self) -> bool {
        self.active
    }

    fn tag(&self) -> Tag {
        self.tag
    }

    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    fn collider_mut(&mut self) -> Option<&mut Collider> {
        self.collider.as_mut()
    }

    fn on_collision_frame_start(&mut self) {
        self.state.clear_frame_data();
    }

    fn on_collision_enter(&mut self, other: Entity) {
        self.state.record_enter(other);
    }

    fn on_collision_stay(&mut self, other: Entity) {
        self.state.record_stay(other);
    }

    fn on_collision_exit(&mut self, other: Entity) {
        self.state.record_exit(other);
    }
}
