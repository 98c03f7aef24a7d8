//! # Lawn Engine
//!
//! The collision core of a 2D lane-defense game.
//!
//! ## Features
//!
//! - **Quadtree Broad-Phase**: Spatial index rebuilt from scratch every tick
//! - **Tag Filtering**: Symmetric collision matrix keyed by entity category
//! - **Box/Circle Colliders**: Exhaustive narrow-phase over a tagged shape variant
//! - **Transition Events**: Enter/stay/exit notifications derived by pair diffing
//! - **Debug Overlay**: Quadtree and collider outlines for a renderer to draw
//!
//! ## Quick Start
//!
//! ```rust
//! use lawn_engine::prelude::*;
//!
//! let mut world = World::new();
//! let pea = world.spawn(Body::new(Tag::Projectile, Vec2::new(0.0, 0.0))
//!     .with_collider(Collider::circle(10.0)));
//! let zombie = world.spawn(Body::new(Tag::Zombie, Vec2::new(15.0, 0.0))
//!     .with_collider(Collider::circle(10.0)));
//!
//! let mut collisions = CollisionSystem::new(Rect::from_xywh(-100.0, -100.0, 200.0, 200.0));
//! collisions.update(&mut world);
//!
//! assert!(collisions.current_collisions().contains(&CollisionPair::new(pea, zombie)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod ecs;
pub mod physics;
pub mod spatial;
pub mod debug;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, CollisionConfig},
        foundation::math::{Vec2, Vec4, Transform2D},
        ecs::{World, Entity, GameObject, Body, Tag},
        physics::{
            Rect, Collider, ColliderKind, WorldCollider,
            CollisionMatrix, CollisionSystem, CollisionPair, CollisionEvent, CollisionPhase,
            FrameStats,
        },
        debug::{DebugDrawSystem, DebugShape},
        spatial::{Quadtree, QuadtreeConfig, SpatialIndex},
    };
}
