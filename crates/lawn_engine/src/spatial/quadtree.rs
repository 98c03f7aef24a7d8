//! Quadtree spatial partitioning structure
//!
//! Divides the world rectangle into hierarchical quadrants for broad-phase
//! queries. A node splits into 4 children once it holds more than
//! `max_entities_per_node` entries and is above `max_depth`. Entries whose
//! bounds straddle a node's midlines stay at that node; everything else is
//! pushed down into the single child quadrant that contains it.
//!
//! The tree is meant to be cleared and rebuilt every tick, so there is no
//! removal or update path.

use crate::ecs::{Entity, GameObject};
use crate::foundation::math::Vec2;
use crate::physics::collision::{OwnerTransforms, Rect};
use serde::{Deserialize, Serialize};

/// Quadrant holding entries right of the vertical midline and above the horizontal one
pub const TOP_RIGHT: usize = 0;
/// Quadrant left of the vertical midline and above the horizontal one
pub const TOP_LEFT: usize = 1;
/// Quadrant left of the vertical midline and below the horizontal one
pub const BOTTOM_LEFT: usize = 2;
/// Quadrant right of the vertical midline and below the horizontal one
pub const BOTTOM_RIGHT: usize = 3;

/// Half size of the square used for objects without a collider
pub const FALLBACK_HALF_EXTENT: f32 = 0.5;

/// Configuration for quadtree behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadtreeConfig {
    /// Maximum entries held directly by a leaf before it splits
    pub max_entities_per_node: usize,

    /// Maximum subdivision depth (root is depth 0)
    pub max_depth: u32,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            max_entities_per_node: 10,
            max_depth: 5,
        }
    }
}

/// Entity stored in the quadtree with its bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadtreeEntry {
    /// Stored entity
    pub entity: Entity,
    /// World-space bounds used for placement
    pub bounds: Rect,
}

/// Single node in the quadtree hierarchy
#[derive(Debug, Clone)]
pub struct QuadtreeNode {
    /// World-space bounds of this node
    pub bounds: Rect,

    /// Entries stored directly at this node
    pub entries: Vec<QuadtreeEntry>,

    /// Child nodes indexed by quadrant, `None` for a leaf
    pub children: Option<Box<[QuadtreeNode; 4]>>,

    /// Depth in the tree (0 = root)
    pub depth: u32,
}

impl QuadtreeNode {
    /// Create a new leaf node
    pub fn new(bounds: Rect, depth: u32) -> Self {
        Self {
            bounds,
            entries: Vec::new(),
            children: None,
            depth,
        }
    }

    /// Check if this node is a leaf (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Bounds of one of this node's quadrants
    ///
    /// Must agree with [`QuadtreeNode::quadrant_index`], which uses the same
    /// constants for classification.
    pub fn quadrant_bounds(&self, quadrant: usize) -> Rect {
        let half = self.bounds.size() * 0.5;
        let min = self.bounds.min;

        let origin = match quadrant {
            TOP_RIGHT => Vec2::new(min.x + half.x, min.y),
            TOP_LEFT => min,
            BOTTOM_LEFT => Vec2::new(min.x, min.y + half.y),
            _ => min + half,
        };

        Rect::from_min_max(origin, origin + half)
    }

    /// Quadrant that fully contains `rect`, or `None` if it touches or
    /// crosses either midline
    pub fn quadrant_index(&self, rect: &Rect) -> Option<usize> {
        let mid = self.bounds.center();

        let left = rect.max.x < mid.x;
        let right = rect.min.x > mid.x;
        let top = rect.max.y < mid.y;
        let bottom = rect.min.y > mid.y;

        match (left, right, top, bottom) {
            (false, true, true, false) => Some(TOP_RIGHT),
            (true, false, true, false) => Some(TOP_LEFT),
            (true, false, false, true) => Some(BOTTOM_LEFT),
            (false, true, false, true) => Some(BOTTOM_RIGHT),
            _ => None,
        }
    }

    /// Subdivide this node into 4 children and push down every entry that
    /// now fits a single quadrant
    fn split(&mut self, config: &QuadtreeConfig) {
        if self.children.is_some() {
            return;
        }

        let children: [QuadtreeNode; 4] = std::array::from_fn(|quadrant| {
            QuadtreeNode::new(self.quadrant_bounds(quadrant), self.depth + 1)
        });
        self.children = Some(Box::new(children));

        log::trace!(
            "Quadtree node at depth {} split with {} entries",
            self.depth,
            self.entries.len()
        );

        for entry in std::mem::take(&mut self.entries) {
            let quadrant = self.quadrant_index(&entry.bounds);
            match (quadrant, self.children.as_mut()) {
                (Some(q), Some(children)) => children[q].insert(entry, config),
                _ => self.entries.push(entry),
            }
        }
    }

    /// Insert an entry into this node or one of its descendants
    pub fn insert(&mut self, entry: QuadtreeEntry, config: &QuadtreeConfig) {
        let quadrant = self.quadrant_index(&entry.bounds);
        if let (Some(q), Some(children)) = (quadrant, self.children.as_mut()) {
            children[q].insert(entry, config);
            return;
        }

        self.entries.push(entry);

        if self.is_leaf()
            && self.entries.len() > config.max_entities_per_node
            && self.depth < config.max_depth
        {
            self.split(config);
        }
    }

    /// Collect candidates for `bounds` into `results`
    ///
    /// Descends into the one quadrant that contains `bounds` (or into every
    /// child if none does) and always appends this node's own entries.
    pub fn retrieve(&self, bounds: &Rect, results: &mut Vec<Entity>) {
        if let Some(children) = &self.children {
            match self.quadrant_index(bounds) {
                Some(q) => children[q].retrieve(bounds, results),
                None => {
                    for child in children.iter() {
                        child.retrieve(bounds, results);
                    }
                }
            }
        }

        results.extend(self.entries.iter().map(|entry| entry.entity));
    }

    /// Collect every entity in this node and all children
    pub fn collect_entities(&self, results: &mut Vec<Entity>) {
        results.extend(self.entries.iter().map(|entry| entry.entity));

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_entities(results);
            }
        }
    }

    /// Visit this node and all descendants, parents first
    pub fn visit(&self, visitor: &mut dyn FnMut(&QuadtreeNode)) {
        visitor(self);

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.visit(visitor);
            }
        }
    }

    /// Count total entities in this node and all children
    pub fn count_entities(&self) -> usize {
        let mut count = self.entries.len();

        if let Some(children) = &self.children {
            for child in children.iter() {
                count += child.count_entities();
            }
        }

        count
    }
}

/// Quadtree spatial partitioning structure
#[derive(Debug, Clone)]
pub struct Quadtree {
    /// Root node covering the whole world
    root: QuadtreeNode,

    /// Configuration
    config: QuadtreeConfig,
}

impl Quadtree {
    /// Create a new quadtree with given world bounds
    pub fn new(world_bounds: Rect, config: QuadtreeConfig) -> Self {
        Self {
            root: QuadtreeNode::new(world_bounds, 0),
            config,
        }
    }

    /// Insert an entity with its world-space bounds
    ///
    /// Entities outside the world bounds are still accepted; they are
    /// classified against the midlines like any other entry.
    pub fn insert(&mut self, entity: Entity, bounds: Rect) {
        self.root.insert(QuadtreeEntry { entity, bounds }, &self.config);
    }

    /// Broad-phase candidates for `bounds`
    ///
    /// A superset of every stored entity whose bounds could overlap `bounds`;
    /// may contain the querying entity itself and non-overlapping entries.
    pub fn retrieve(&self, bounds: &Rect) -> Vec<Entity> {
        let mut results = Vec::new();
        self.root.retrieve(bounds, &mut results);
        results
    }

    /// Same as [`Quadtree::retrieve`] but appends into an existing buffer
    pub fn retrieve_into(&self, bounds: &Rect, results: &mut Vec<Entity>) {
        self.root.retrieve(bounds, results);
    }

    /// Drop every entry and child node
    pub fn clear(&mut self) {
        self.root = QuadtreeNode::new(self.root.bounds, 0);
    }

    /// Every stored entity, parents first
    pub fn all_entities(&self) -> Vec<Entity> {
        let mut results = Vec::new();
        self.root.collect_entities(&mut results);
        results
    }

    /// Get total entity count
    pub fn entity_count(&self) -> usize {
        self.root.count_entities()
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.visit(&mut |_| count += 1);
        count
    }

    /// Deepest node depth currently in the tree
    pub fn depth(&self) -> u32 {
        let mut depth = 0;
        self.root.visit(&mut |node| depth = depth.max(node.depth));
        depth
    }

    /// World bounds covered by the root
    pub fn bounds(&self) -> Rect {
        self.root.bounds
    }

    /// Root node (for visualization)
    pub fn root(&self) -> &QuadtreeNode {
        &self.root
    }

    /// Configuration
    pub fn config(&self) -> &QuadtreeConfig {
        &self.config
    }
}

/// Bounding rectangle used to place an object in the quadtree
///
/// Box colliders use their world min/max corners, circles use center ± radius
/// on both axes, and objects without a collider get a small square centered on
/// their transform position. Only placement uses this; the precise test is
/// always re-derived from the collider.
pub fn entity_bounds<T: OwnerTransforms + ?Sized>(object: &dyn GameObject, transforms: &T) -> Rect {
    match object.collider() {
        Some(collider) => collider.bounding_rect(transforms),
        None => Rect::from_center_half_extents(
            object.transform().position(),
            Vec2::new(FALLBACK_HALF_EXTENT, FALLBACK_HALF_EXTENT),
        ),
    }
}
