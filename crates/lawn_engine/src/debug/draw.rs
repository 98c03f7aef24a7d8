//! Debug drawing primitives and queue
//!
//! The engine never renders anything itself. It produces [`DebugShape`]s and
//! a renderer collaborator drains them from a [`DebugDrawSystem`].

use crate::foundation::math::Vec4;
use crate::physics::collision::Rect;
use std::collections::HashMap;

/// Unique identifier for persistent debug shapes
pub type DebugShapeId = String;

/// Debug shape primitives that can be rendered for visualization
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Axis-aligned rectangle in world space
    Rect {
        /// Rectangle to draw
        bounds: Rect,
        /// RGBA color
        color: Vec4,
        /// Outline width in pixels (ignored when filled)
        thickness: f32,
        /// Fill instead of outlining
        filled: bool,
    },
}

impl DebugShape {
    /// Rectangle outline
    pub fn outline(bounds: Rect, color: Vec4, thickness: f32) -> Self {
        DebugShape::Rect {
            bounds,
            color,
            thickness,
            filled: false,
        }
    }

    /// Filled rectangle
    pub fn filled(bounds: Rect, color: Vec4) -> Self {
        DebugShape::Rect {
            bounds,
            color,
            thickness: 1.0,
            filled: true,
        }
    }

    /// Color of the shape
    pub fn color(&self) -> Vec4 {
        match self {
            DebugShape::Rect { color, .. } => *color,
        }
    }
}

/// Shape with the time it has left on screen
#[derive(Clone, Debug)]
struct TimedShape {
    shape: DebugShape,
    remaining: f32,
}

/// Queue of debug shapes handed to the renderer
///
/// Temporary shapes expire after their duration; a duration of zero keeps
/// a shape for exactly one [`DebugDrawSystem::update`]. Persistent shapes
/// stay for the lifetime of the system; drawing again under the same id
/// replaces the shape.
pub struct DebugDrawSystem {
    /// Temporary shapes that expire after their duration
    temporary_shapes: Vec<TimedShape>,

    /// Persistent shapes keyed by id
    persistent_shapes: HashMap<DebugShapeId, DebugShape>,

    /// Master enable/disable flag
    pub enabled: bool,
}

impl DebugDrawSystem {
    /// Create a new debug draw system
    pub fn new() -> Self {
        Self {
            temporary_shapes: Vec::new(),
            persistent_shapes: HashMap::new(),
            enabled: true,
        }
    }

    /// Queue any shape (temporary)
    pub fn draw(&mut self, shape: DebugShape, duration: f32) {
        if !self.enabled {
            return;
        }

        self.temporary_shapes.push(TimedShape {
            shape,
            remaining: duration,
        });
    }

    /// Queue a rectangle outline (temporary)
    pub fn draw_rect(&mut self, bounds: Rect, color: Vec4, thickness: f32, duration: f32) {
        self.draw(DebugShape::outline(bounds, color, thickness), duration);
    }

    /// Queue a filled rectangle (temporary)
    pub fn fill_rect(&mut self, bounds: Rect, color: Vec4, duration: f32) {
        self.draw(DebugShape::filled(bounds, color), duration);
    }

    /// Queue a batch of shapes with a shared duration
    pub fn submit(&mut self, shapes: impl IntoIterator<Item = DebugShape>, duration: f32) {
        for shape in shapes {
            self.draw(shape, duration);
        }
    }

    /// Draw a shape that never expires, replacing any shape with the same id
    pub fn draw_persistent(&mut self, id: impl Into<String>, shape: DebugShape) {
        if !self.enabled {
            return;
        }

        self.persistent_shapes.insert(id.into(), shape);
    }

    /// Advance shape lifetimes and remove expired temporary shapes
    pub fn update(&mut self, delta_time: f32) {
        if !self.enabled {
            return;
        }

        self.temporary_shapes.retain_mut(|timed| {
            timed.remaining -= delta_time;
            timed.remaining > 0.0
        });
    }

    /// Get all shapes for rendering (both temporary and persistent)
    pub fn shapes(&self) -> Vec<&DebugShape> {
        if !self.enabled {
            return Vec::new();
        }

        self.temporary_shapes
            .iter()
            .map(|timed| &timed.shape)
            .chain(self.persistent_shapes.values())
            .collect()
    }

    /// Get the number of queued shapes
    pub fn shape_count(&self) -> usize {
        self.temporary_shapes.len() + self.persistent_shapes.len()
    }
}

impl Default for DebugDrawSystem {
    fn default() -> Self {
        Self::new()
    }
}
