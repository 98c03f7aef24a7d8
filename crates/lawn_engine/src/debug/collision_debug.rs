//! Collision-specific debug visualization
//!
//! Outlines every quadtree cell (fading with depth) and every active,
//! enabled collider in a color per tag. Circles are drawn as their bounding
//! square plus a filled cross through the center.

use crate::debug::draw::DebugShape;
use crate::ecs::{Tag, World};
use crate::foundation::math::Vec4;
use crate::physics::collision::{Rect, WorldCollider};
use crate::spatial::SpatialIndex;

/// Color scheme for collision visualization
#[derive(Clone, Debug)]
pub struct CollisionDebugColors {
    /// Base color for partition cells; alpha is replaced per depth
    pub node: Vec4,

    /// Color for tags without a dedicated color
    pub fallback: Vec4,
}

impl Default for CollisionDebugColors {
    fn default() -> Self {
        Self {
            node: Vec4::new(0.0, 1.0, 1.0, 0.3),
            fallback: Vec4::new(1.0, 1.0, 1.0, 0.7),
        }
    }
}

impl CollisionDebugColors {
    /// Cell color at `depth`: alpha 0.3 at the root, minus 0.1 per level,
    /// never below 0.1
    pub fn node_color(&self, depth: u32) -> Vec4 {
        let alpha = (0.3 - 0.1 * depth as f32).max(0.1);
        Vec4::new(self.node.x, self.node.y, self.node.z, alpha)
    }

    /// Collider color for a tag
    pub fn tag_color(&self, tag: Tag) -> Vec4 {
        match tag {
            Tag::Plant => Vec4::new(0.0, 1.0, 0.0, 0.7),
            Tag::Zombie => Vec4::new(1.0, 0.0, 0.0, 0.7),
            Tag::Projectile => Vec4::new(1.0, 1.0, 0.0, 0.7),
            Tag::Sun => Vec4::new(1.0, 0.8, 0.0, 0.7),
            Tag::Coin => Vec4::new(1.0, 0.843, 0.0, 0.7),
            Tag::None | Tag::Ambient => self.fallback,
        }
    }
}

/// Builds debug overlay shapes for the collision engine
#[derive(Clone, Debug)]
pub struct CollisionDebugVisualizer {
    colors: CollisionDebugColors,

    /// Outline spatial index cells
    pub show_index: bool,

    /// Outline colliders
    pub show_colliders: bool,
}

impl CollisionDebugVisualizer {
    /// Outline width of partition cells
    pub const NODE_THICKNESS: f32 = 1.0;
    /// Outline width of colliders
    pub const COLLIDER_THICKNESS: f32 = 2.0;
    /// Half width of the bars crossing a circle's center
    pub const CROSS_HALF_WIDTH: f32 = 1.0;

    /// Create a visualizer with the default colors, everything shown
    pub fn new() -> Self {
        Self {
            colors: CollisionDebugColors::default(),
            show_index: true,
            show_colliders: true,
        }
    }

    /// Set custom color scheme
    pub fn with_colors(mut self, colors: CollisionDebugColors) -> Self {
        self.colors = colors;
        self
    }

    /// Color scheme in use
    pub fn colors(&self) -> &CollisionDebugColors {
        &self.colors
    }

    /// One outline per partition cell, parents first
    pub fn index_shapes(&self, index: &dyn SpatialIndex) -> Vec<DebugShape> {
        let mut shapes = Vec::new();
        if !self.show_index {
            return shapes;
        }

        index.visit_nodes(&mut |bounds, depth| {
            shapes.push(DebugShape::outline(
                *bounds,
                self.colors.node_color(depth),
                Self::NODE_THICKNESS,
            ));
        });
        shapes
    }

    /// Outlines for every indexed object that is still active with an
    /// enabled collider
    pub fn collider_shapes(&self, index: &dyn SpatialIndex, world: &World) -> Vec<DebugShape> {
        let mut shapes = Vec::new();
        if !self.show_colliders {
            return shapes;
        }

        for entity in index.all_entities() {
            let Some(object) = world.get(entity) else {
                continue;
            };
            if !object.is_active() {
                continue;
            }
            let Some(collider) = object.collider().filter(|collider| collider.is_enabled()) else {
                continue;
            };

            let color = self.colors.tag_color(object.tag());
            let world_collider = collider.to_world_space(world);
            shapes.push(DebugShape::outline(
                world_collider.bounding_rect(),
                color,
                Self::COLLIDER_THICKNESS,
            ));

            if let WorldCollider::Circle { center, radius } = world_collider {
                let bar = Self::CROSS_HALF_WIDTH;
                shapes.push(DebugShape::filled(
                    Rect::new(center.x - radius, center.y - bar, center.x + radius, center.y + bar),
                    color,
                ));
                shapes.push(DebugShape::filled(
                    Rect::new(center.x - bar, center.y - radius, center.x + bar, center.y + radius),
                    color,
                ));
            }
        }
        shapes
    }
}

impl Default for CollisionDebugVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::Body;
    use crate::foundation::math::Vec2;
    use crate::physics::collision::Collider;
    use crate::spatial::{entity_bounds, Quadtree, QuadtreeConfig};
    use approx::assert_relative_eq;

    #[test]
    fn test_node_alpha_fades_with_depth() {
        let colors = CollisionDebugColors::default();

        assert_relative_eq!(colors.node_color(0).w, 0.3);
        assert_relative_eq!(colors.node_color(1).w, 0.2);
        assert_relative_eq!(colors.node_color(2).w, 0.1, epsilon = 1e-6);
        assert_relative_eq!(colors.node_color(4).w, 0.1);
        assert_relative_eq!(colors.node_color(3).x, 0.0);
    }

    #[test]
    fn test_index_shapes_cover_every_node() {
        let mut world = World::new();
        let config = QuadtreeConfig {
            max_entities_per_node: 1,
            max_depth: 3,
        };
        let mut quadtree = Quadtree::new(Rect::from_xywh(0.0, 0.0, 100.0, 100.0), config);
        quadtree.insert(world.spawn(Body::new(Tag::Plant, Vec2::zeros())), Rect::from_xywh(10.0, 10.0, 1.0, 1.0));
        quadtree.insert(world.spawn(Body::new(Tag::Plant, Vec2::zeros())), Rect::from_xywh(80.0, 80.0, 1.0, 1.0));

        let shapes = CollisionDebugVisualizer::new().index_shapes(&quadtree);
        assert_eq!(shapes.len(), quadtree.node_count());
        assert_eq!(
            shapes[0],
            DebugShape::outline(Rect::from_xywh(0.0, 0.0, 100.0, 100.0), Vec4::new(0.0, 1.0, 1.0, 0.3), 1.0)
        );
    }

    #[test]
    fn test_collider_shapes_per_kind() {
        let mut world = World::new();
        let zombie = world.spawn(Body::new(Tag::Zombie, Vec2::new(10.0, 10.0)).with_collider(Collider::boxed(4.0, 6.0)));
        let pea = world.spawn(Body::new(Tag::Projectile, Vec2::new(50.0, 50.0)).with_collider(Collider::circle(5.0)));
        let mut hidden = Body::new(Tag::Plant, Vec2::zeros()).with_collider(Collider::circle(1.0));
        hidden.set_active(false);
        let hidden = world.spawn(hidden);
        // Registered but never indexed
        world.spawn(Body::new(Tag::Zombie, Vec2::new(80.0, 80.0)).with_collider(Collider::boxed(4.0, 4.0)));

        let mut quadtree = Quadtree::new(Rect::from_xywh(0.0, 0.0, 100.0, 100.0), QuadtreeConfig::default());
        for entity in [zombie, pea, hidden] {
            if let Some(object) = world.get(entity) {
                quadtree.insert(entity, entity_bounds(object, &world));
            }
        }

        let visualizer = CollisionDebugVisualizer::new();
        let shapes = visualizer.collider_shapes(&quadtree, &world);

        // box outline, circle outline, two center bars
        assert_eq!(shapes.len(), 4);
        assert_eq!(
            shapes[0],
            DebugShape::outline(Rect::new(8.0, 7.0, 12.0, 13.0), visualizer.colors().tag_color(Tag::Zombie), 2.0)
        );
        assert_eq!(
            shapes[2],
            DebugShape::filled(Rect::new(45.0, 49.0, 55.0, 51.0), visualizer.colors().tag_color(Tag::Projectile))
        );
    }

    #[test]
    fn test_hidden_layers() {
        let mut world = World::new();
        world.spawn(Body::new(Tag::Coin, Vec2::zeros()).with_collider(Collider::boxed(1.0, 1.0)));
        let quadtree = Quadtree::new(Rect::from_xywh(0.0, 0.0, 10.0, 10.0), QuadtreeConfig::default());

        let mut visualizer = CollisionDebugVisualizer::new();
        visualizer.show_index = false;
        visualizer.show_colliders = false;

        assert!(visualizer.index_shapes(&quadtree).is_empty());
        assert!(visualizer.collider_shapes(&quadtree, &world).is_empty());
    }
}
