//! Entity colliders and narrow-phase intersection
//!
//! A [`Collider`] lives in its owner's local space: a shape plus an offset
//! from the owner's transform. It keeps only the owner's [`Entity`] handle and
//! resolves the owner position through [`OwnerTransforms`] when a test runs.
//! Tests are performed on a temporary [`WorldCollider`], a tagged variant
//! matched exhaustively per shape pair.

use crate::ecs::Entity;
use crate::foundation::math::{clamp_symmetric, Vec2};
use super::primitives::Rect;
use serde::{Deserialize, Serialize};

/// Shape discriminant of a collider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderKind {
    /// Axis-aligned box
    Box,
    /// Circle
    Circle,
}

/// Collider geometry in the owner's local space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Axis-aligned box centered on the collider position (full width and height)
    Box {
        /// Full width
        width: f32,
        /// Full height
        height: f32,
    },
    /// Circle centered on the collider position
    Circle {
        /// Radius
        radius: f32,
    },
}

impl ColliderShape {
    /// Shape discriminant
    pub fn kind(&self) -> ColliderKind {
        match self {
            Self::Box { .. } => ColliderKind::Box,
            Self::Circle { .. } => ColliderKind::Circle,
        }
    }
}

/// Resolves the world position of a collider's owner
///
/// Implemented by [`crate::ecs::World`]. `None` means the owner no longer
/// exists; the collider then behaves as if it had no owner.
pub trait OwnerTransforms {
    /// World position of `owner`, if it is still alive
    fn owner_position(&self, owner: Entity) -> Option<Vec2>;
}

/// Owner lookup for colliders that are not attached to any registry
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl OwnerTransforms for Detached {
    fn owner_position(&self, _owner: Entity) -> Option<Vec2> {
        None
    }
}

/// Per-entity collision shape descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    shape: ColliderShape,
    offset: Vec2,
    enabled: bool,
    trigger: bool,
    owner: Option<Entity>,
}

impl Collider {
    /// Create a collider with the given shape, enabled, not a trigger, no offset
    pub fn new(shape: ColliderShape) -> Self {
        Self {
            shape,
            offset: Vec2::zeros(),
            enabled: true,
            trigger: false,
            owner: None,
        }
    }

    /// Create a box collider with full `width` and `height`
    pub fn boxed(width: f32, height: f32) -> Self {
        Self::new(ColliderShape::Box { width, height })
    }

    /// Create a circle collider
    pub fn circle(radius: f32) -> Self {
        Self::new(ColliderShape::Circle { radius })
    }

    /// Set the offset from the owner's position
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Mark this as a trigger volume
    pub fn as_trigger(mut self) -> Self {
        self.trigger = true;
        self
    }

    /// Shape discriminant
    pub fn kind(&self) -> ColliderKind {
        self.shape.kind()
    }

    /// Local geometry
    pub fn shape(&self) -> &ColliderShape {
        &self.shape
    }

    /// Replace the local geometry
    pub fn set_shape(&mut self, shape: ColliderShape) {
        self.shape = shape;
    }

    /// Resize a box collider; circles are left untouched
    pub fn set_size(&mut self, width: f32, height: f32) {
        if let ColliderShape::Box { width: w, height: h } = &mut self.shape {
            *w = width;
            *h = height;
        }
    }

    /// Change a circle collider's radius; boxes are left untouched
    pub fn set_radius(&mut self, radius: f32) {
        if let ColliderShape::Circle { radius: r } = &mut self.shape {
            *r = radius;
        }
    }

    /// Offset from the owner's position
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Change the offset from the owner's position
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Whether this collider takes part in collision detection
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable collision detection for this collider
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Trigger hint for whoever reacts to notifications
    ///
    /// Detection ignores this flag.
    pub fn is_trigger(&self) -> bool {
        self.trigger
    }

    /// Set the trigger hint
    pub fn set_trigger(&mut self, trigger: bool) {
        self.trigger = trigger;
    }

    /// Handle of the owning entity, if attached
    pub fn owner(&self) -> Option<Entity> {
        self.owner
    }

    /// Attach to (or detach from) an owning entity
    pub fn set_owner(&mut self, owner: Option<Entity>) {
        self.owner = owner;
    }

    /// World position: owner position plus offset, or the offset alone when
    /// there is no live owner
    pub fn world_position<T: OwnerTransforms + ?Sized>(&self, transforms: &T) -> Vec2 {
        match self.owner.and_then(|owner| transforms.owner_position(owner)) {
            Some(position) => position + self.offset,
            None => self.offset,
        }
    }

    /// Transform this collider to world space for testing
    pub fn to_world_space<T: OwnerTransforms + ?Sized>(&self, transforms: &T) -> WorldCollider {
        let center = self.world_position(transforms);
        match self.shape {
            ColliderShape::Box { width, height } => WorldCollider::Box {
                center,
                half_extents: Vec2::new(width * 0.5, height * 0.5),
            },
            ColliderShape::Circle { radius } => WorldCollider::Circle { center, radius },
        }
    }

    /// World-space top-left corner of a box collider
    pub fn min<T: OwnerTransforms + ?Sized>(&self, transforms: &T) -> Option<Vec2> {
        match self.to_world_space(transforms) {
            WorldCollider::Box { center, half_extents } => Some(center - half_extents),
            WorldCollider::Circle { .. } => None,
        }
    }

    /// World-space bottom-right corner of a box collider
    pub fn max<T: OwnerTransforms + ?Sized>(&self, transforms: &T) -> Option<Vec2> {
        match self.to_world_space(transforms) {
            WorldCollider::Box { center, half_extents } => Some(center + half_extents),
            WorldCollider::Circle { .. } => None,
        }
    }

    /// World-space bounding rectangle used for quadtree placement
    pub fn bounding_rect<T: OwnerTransforms + ?Sized>(&self, transforms: &T) -> Rect {
        self.to_world_space(transforms).bounding_rect()
    }

    /// Test whether this collider overlaps `other`
    ///
    /// Always false when either collider is disabled.
    pub fn intersects<T: OwnerTransforms + ?Sized>(&self, other: &Collider, transforms: &T) -> bool {
        if !self.enabled || !other.enabled {
            return false;
        }

        self.to_world_space(transforms)
            .intersects(&other.to_world_space(transforms))
    }
}

/// World-space collider (temporary, for testing only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldCollider {
    /// World-space box
    Box {
        /// Box center
        center: Vec2,
        /// Half width and half height
        half_extents: Vec2,
    },
    /// World-space circle
    Circle {
        /// Circle center
        center: Vec2,
        /// Radius
        radius: f32,
    },
}

impl WorldCollider {
    /// Center position
    pub fn center(&self) -> Vec2 {
        match self {
            Self::Box { center, .. } | Self::Circle { center, .. } => *center,
        }
    }

    /// Smallest rectangle enclosing the shape
    pub fn bounding_rect(&self) -> Rect {
        match *self {
            Self::Box { center, half_extents } => Rect::from_center_half_extents(center, half_extents),
            Self::Circle { center, radius } => {
                Rect::from_center_half_extents(center, Vec2::new(radius, radius))
            }
        }
    }

    /// Test if this shape intersects with another shape
    pub fn intersects(&self, other: &WorldCollider) -> bool {
        match (*self, *other) {
            (
                Self::Box { center: c1, half_extents: h1 },
                Self::Box { center: c2, half_extents: h2 },
            ) => box_intersects_box(c1, h1, c2, h2),

            (
                Self::Box { center: box_center, half_extents },
                Self::Circle { center: circle_center, radius },
            )
            | (
                Self::Circle { center: circle_center, radius },
                Self::Box { center: box_center, half_extents },
            ) => box_intersects_circle(box_center, half_extents, circle_center, radius),

            (
                Self::Circle { center: c1, radius: r1 },
                Self::Circle { center: c2, radius: r2 },
            ) => circle_intersects_circle(c1, r1, c2, r2),
        }
    }
}

/// Box-box overlap with inclusive bounds: boxes sharing an edge intersect
fn box_intersects_box(c1: Vec2, h1: Vec2, c2: Vec2, h2: Vec2) -> bool {
    let (min1, max1) = (c1 - h1, c1 + h1);
    let (min2, max2) = (c2 - h2, c2 + h2);

    min1.x <= max2.x && max1.x >= min2.x && min1.y <= max2.y && max1.y >= min2.y
}

/// Closest point on the box to the circle center, then squared distance vs radius
///
/// Negative or NaN half extents never intersect.
fn box_intersects_circle(box_center: Vec2, half_extents: Vec2, circle_center: Vec2, radius: f32) -> bool {
    if !(half_extents.x >= 0.0 && half_extents.y >= 0.0) {
        return false;
    }

    let closest = box_center + clamp_symmetric(circle_center - box_center, half_extents);
    (circle_center - closest).norm_squared() <= radius * radius
}

fn circle_intersects_circle(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    let radius_sum = r1 + r2;
    (c2 - c1).norm_squared() <= radius_sum * radius_sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use slotmap::SlotMap;
    use std::collections::HashMap;

    struct Positions(HashMap<Entity, Vec2>);

    impl OwnerTransforms for Positions {
        fn owner_position(&self, owner: Entity) -> Option<Vec2> {
            self.0.get(&owner).copied()
        }
    }

    fn at(collider: Collider, x: f32, y: f32) -> Collider {
        collider.with_offset(Vec2::new(x, y))
    }

    #[test]
    fn test_world_position_without_owner_is_offset() {
        let collider = at(Collider::circle(1.0), 3.0, 4.0);
        assert_relative_eq!(collider.world_position(&Detached), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_world_position_adds_owner_position() {
        let mut keys: SlotMap<Entity, ()> = SlotMap::with_key();
        let owner = keys.insert(());
        let positions = Positions(HashMap::from([(owner, Vec2::new(100.0, 50.0))]));

        let mut collider = at(Collider::boxed(2.0, 2.0), 5.0, -5.0);
        collider.set_owner(Some(owner));

        assert_relative_eq!(collider.world_position(&positions), Vec2::new(105.0, 45.0));
    }

    #[test]
    fn test_stale_owner_falls_back_to_offset() {
        let mut keys: SlotMap<Entity, ()> = SlotMap::with_key();
        let owner = keys.insert(());
        keys.remove(owner);
        let positions = Positions(HashMap::new());

        let mut collider = at(Collider::circle(1.0), 7.0, 0.0);
        collider.set_owner(Some(owner));

        assert_relative_eq!(collider.world_position(&positions), Vec2::new(7.0, 0.0));
    }

    #[test]
    fn test_box_box_shared_edge_intersects() {
        // max1.x == min2.x: the precise test is inclusive
        let a = at(Collider::boxed(10.0, 10.0), 0.0, 0.0);
        let b = at(Collider::boxed(10.0, 10.0), 10.0, 0.0);

        assert!(a.intersects(&b, &Detached));
        assert!(b.intersects(&a, &Detached));

        // The bounding rectangles of the same boxes do not intersect
        assert!(!a.bounding_rect(&Detached).intersects(&b.bounding_rect(&Detached)));
    }

    #[test]
    fn test_box_box_separated() {
        let a = at(Collider::boxed(10.0, 10.0), 0.0, 0.0);
        let b = at(Collider::boxed(10.0, 10.0), 10.5, 0.0);

        assert!(!a.intersects(&b, &Detached));
    }

    #[test]
    fn test_circle_circle() {
        let a = at(Collider::circle(10.0), 0.0, 0.0);

        assert!(a.intersects(&at(Collider::circle(10.0), 15.0, 0.0), &Detached));
        assert!(a.intersects(&at(Collider::circle(10.0), 20.0, 0.0), &Detached));
        assert!(!a.intersects(&at(Collider::circle(10.0), 25.0, 0.0), &Detached));
    }

    #[test]
    fn test_box_circle_uses_closest_point() {
        let boxed = at(Collider::boxed(10.0, 10.0), 0.0, 0.0);

        // Circle near the corner: center-to-corner distance is sqrt(2) * 2 ~ 2.83
        let near_corner = at(Collider::circle(3.0), 7.0, 7.0);
        let off_corner = at(Collider::circle(2.5), 7.0, 7.0);

        assert!(boxed.intersects(&near_corner, &Detached));
        assert!(!boxed.intersects(&off_corner, &Detached));

        // Circle center inside the box
        assert!(boxed.intersects(&at(Collider::circle(0.5), 1.0, 1.0), &Detached));
    }

    #[test]
    fn test_circle_box_matches_box_circle() {
        let boxed = at(Collider::boxed(4.0, 8.0), 0.0, 0.0);
        let circles = [
            at(Collider::circle(1.0), 3.0, 0.0),
            at(Collider::circle(1.0), 3.5, 0.0),
            at(Collider::circle(2.0), 3.0, 5.0),
            at(Collider::circle(0.1), 0.0, 0.0),
        ];

        for circle in &circles {
            assert_eq!(
                boxed.intersects(circle, &Detached),
                circle.intersects(&boxed, &Detached),
            );
        }
    }

    #[test]
    fn test_disabled_collider_never_collides() {
        let a = at(Collider::circle(10.0), 0.0, 0.0);
        let b = at(Collider::boxed(10.0, 10.0), 5.0, 0.0);
        assert!(a.intersects(&b, &Detached));

        let mut disabled_a = a.clone();
        disabled_a.set_enabled(false);
        assert!(!disabled_a.intersects(&b, &Detached));
        assert!(!b.intersects(&disabled_a, &Detached));

        let mut disabled_b = b.clone();
        disabled_b.set_enabled(false);
        assert!(!a.intersects(&disabled_b, &Detached));
        assert!(!disabled_b.intersects(&a, &Detached));
    }

    #[test]
    fn test_malformed_box_never_collides_with_circle() {
        let circle = at(Collider::circle(10.0), 0.0, 0.0);
        let negative = at(Collider::boxed(-10.0, 10.0), 5.0, 0.0);
        let nan = at(Collider::boxed(f32::NAN, 10.0), 5.0, 0.0);

        assert!(!negative.intersects(&circle, &Detached));
        assert!(!circle.intersects(&negative, &Detached));
        assert!(!nan.intersects(&Collider::circle(1.0), &Detached));
        assert!(!Collider::circle(1.0).intersects(&nan, &Detached));
    }

    #[test]
    fn test_box_circle_tangent_intersects() {
        let boxed = at(Collider::boxed(10.0, 10.0), 0.0, 0.0);

        // Right face at x = 5, circle edge reaches exactly x = 5
        assert!(boxed.intersects(&at(Collider::circle(3.0), 8.0, 0.0), &Detached));
        assert!(at(Collider::circle(3.0), 8.0, 0.0).intersects(&boxed, &Detached));
        assert!(!boxed.intersects(&at(Collider::circle(3.0), 8.5, 0.0), &Detached));
    }

    #[test]
    fn test_trigger_does_not_change_detection() {
        let a = at(Collider::circle(5.0), 0.0, 0.0).as_trigger();
        let b = at(Collider::circle(5.0), 6.0, 0.0);

        assert!(a.is_trigger());
        assert!(a.intersects(&b, &Detached));
    }

    #[test]
    fn test_bounding_rects() {
        let boxed = at(Collider::boxed(4.0, 6.0), 10.0, 10.0);
        let rect = boxed.bounding_rect(&Detached);
        assert_relative_eq!(rect.min, Vec2::new(8.0, 7.0));
        assert_relative_eq!(rect.max, Vec2::new(12.0, 13.0));
        assert_eq!(boxed.min(&Detached), Some(rect.min));
        assert_eq!(boxed.max(&Detached), Some(rect.max));

        let circle = at(Collider::circle(2.0), -1.0, 1.0);
        let rect = circle.bounding_rect(&Detached);
        assert_relative_eq!(rect.min, Vec2::new(-3.0, -1.0));
        assert_relative_eq!(rect.max, Vec2::new(1.0, 3.0));
    }

    #[test]
    fn test_resize_respects_kind() {
        let mut circle = Collider::circle(1.0);
        circle.set_size(5.0, 5.0);
        assert_eq!(*circle.shape(), ColliderShape::Circle { radius: 1.0 });
        circle.set_radius(3.0);
        assert_eq!(*circle.shape(), ColliderShape::Circle { radius: 3.0 });

        let mut boxed = Collider::boxed(1.0, 1.0);
        boxed.set_radius(9.0);
        boxed.set_size(2.0, 3.0);
        assert_eq!(*boxed.shape(), ColliderShape::Box { width: 2.0, height: 3.0 });
        assert_eq!(boxed.kind(), ColliderKind::Box);
    }
}
