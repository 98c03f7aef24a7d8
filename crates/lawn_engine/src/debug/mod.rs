//! Debug visualization
//!
//! Shape queues and the collision overlay handed to an external renderer.

pub mod collision_debug;
pub mod draw;

pub use collision_debug::{CollisionDebugColors, CollisionDebugVisualizer};
pub use draw::{DebugDrawSystem, DebugShape, DebugShapeId};
