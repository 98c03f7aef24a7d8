//! Abstract broad-phase interface
//!
//! The collision system only needs to insert bounds, ask for candidates and
//! reset between ticks. Keeping that behind a trait lets another partitioning
//! scheme (uniform grid, sweep and prune) stand in for the quadtree.

use crate::ecs::Entity;
use crate::physics::collision::Rect;
use crate::spatial::Quadtree;

/// Broad-phase spatial index rebuilt every tick
pub trait SpatialIndex {
    /// Insert an entity with its world-space bounds
    fn insert(&mut self, entity: Entity, bounds: Rect);

    /// Append every candidate that could overlap `bounds` to `results`
    ///
    /// Implementations may return false positives and the querying entity
    /// itself, but must never omit an entity whose bounds overlap or touch
    /// `bounds`.
    fn retrieve(&self, bounds: &Rect, results: &mut Vec<Entity>);

    /// Remove everything
    fn clear(&mut self);

    /// Number of stored entities
    fn entity_count(&self) -> usize;

    /// Every stored entity
    fn all_entities(&self) -> Vec<Entity>;

    /// Call `visitor` with the bounds and depth of every partition cell,
    /// parents first
    fn visit_nodes(&self, visitor: &mut dyn FnMut(&Rect, u32));
}

impl SpatialIndex for Quadtree {
    fn insert(&mut self, entity: Entity, bounds: Rect) {
        Quadtree::insert(self, entity, bounds);
    }

    fn retrieve(&self, bounds: &Rect, results: &mut Vec<Entity>) {
        self.retrieve_into(bounds, results);
    }

    fn clear(&mut self) {
        Quadtree::clear(self);
    }

    fn entity_count(&self) -> usize {
        Quadtree::entity_count(self)
    }

    fn all_entities(&self) -> Vec<Entity> {
        Quadtree::all_entities(self)
    }

    fn visit_nodes(&self, visitor: &mut dyn FnMut(&Rect, u32)) {
        self.root().visit(&mut |node| visitor(&node.bounds, node.depth));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use crate::spatial::QuadtreeConfig;
    use slotmap::SlotMap;

    fn node_bounds(index: &dyn SpatialIndex) -> Vec<(Rect, u32)> {
        let mut nodes = Vec::new();
        index.visit_nodes(&mut |bounds, depth| nodes.push((*bounds, depth)));
        nodes
    }

    fn boxed_index() -> Box<dyn SpatialIndex> {
        Box::new(Quadtree::new(
            Rect::from_xywh(0.0, 0.0, 64.0, 64.0),
            QuadtreeConfig {
                max_entities_per_node: 1,
                max_depth: 2,
            },
        ))
    }

    #[test]
    fn test_quadtree_through_trait_object() {
        let mut keys: SlotMap<Entity, ()> = SlotMap::with_key();
        let mut index = boxed_index();

        let a = keys.insert(());
        let b = keys.insert(());
        index.insert(a, Rect::from_center_half_extents(Vec2::new(8.0, 8.0), Vec2::new(1.0, 1.0)));
        index.insert(b, Rect::from_center_half_extents(Vec2::new(56.0, 56.0), Vec2::new(1.0, 1.0)));

        let mut results = Vec::new();
        index.retrieve(&Rect::from_xywh(4.0, 4.0, 8.0, 8.0), &mut results);
        assert_eq!(results, vec![a]);

        assert_eq!(index.entity_count(), 2);
        assert_eq!(index.all_entities().len(), 2);
        assert_eq!(node_bounds(index.as_ref()).len(), 5);

        index.clear();
        assert_eq!(index.entity_count(), 0);
        assert_eq!(node_bounds(index.as_ref()), vec![(Rect::from_xywh(0.0, 0.0, 64.0, 64.0), 0)]);
    }

    #[test]
    fn test_retrieve_appends_to_existing_results() {
        let mut keys: SlotMap<Entity, ()> = SlotMap::with_key();
        let mut index = boxed_index();
        let existing = keys.insert(());
        let stored = keys.insert(());
        index.insert(stored, Rect::from_xywh(1.0, 1.0, 2.0, 2.0));

        let mut results = vec![existing];
        index.retrieve(&Rect::from_xywh(0.0, 0.0, 4.0, 4.0), &mut results);

        assert_eq!(results, vec![existing, stored]);
    }
}
