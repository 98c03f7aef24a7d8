//! Per-tick collision orchestrator
//!
//! Every tick the spatial index is rebuilt from scratch, each collidable
//! entity queries it for broad-phase candidates, candidates are filtered by
//! [`CollisionSystem::should_collide`] and tested precisely, and the resulting
//! pair set is diffed against the previous tick to derive enter, stay and
//! exit notifications.
//!
//! Nothing on this path returns an error: stale handles, missing colliders
//! and forbidden tag pairs all degrade to "no collision" for this tick.

use crate::config::{CollisionConfig, ConfigError};
use crate::debug::{CollisionDebugVisualizer, DebugShape};
use crate::ecs::{Entity, GameObject, World};
use crate::physics::collision::Rect;
use crate::physics::CollisionMatrix;
use crate::spatial::{entity_bounds, Quadtree, QuadtreeConfig, SpatialIndex};
use std::collections::HashSet;
use std::fmt;

/// Unordered pair of colliding entities
///
/// The smaller handle is always stored first, so `(a, b)` and `(b, a)`
/// compare and hash identically. Pairs order by their first handle, then
/// their second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    /// Smaller handle of the two
    pub entity_a: Entity,
    /// Larger handle of the two
    pub entity_b: Entity,
}

impl CollisionPair {
    /// Create a new collision pair in canonical order
    pub fn new(entity_a: Entity, entity_b: Entity) -> Self {
        if entity_a <= entity_b {
            Self { entity_a, entity_b }
        } else {
            Self {
                entity_a: entity_b,
                entity_b: entity_a,
            }
        }
    }

    /// Check whether `entity` is one side of the pair
    pub fn contains(&self, entity: Entity) -> bool {
        self.entity_a == entity || self.entity_b == entity
    }

    /// The side that is not `entity`, if `entity` belongs to the pair
    pub fn other(&self, entity: Entity) -> Option<Entity> {
        if entity == self.entity_a {
            Some(self.entity_b)
        } else if entity == self.entity_b {
            Some(self.entity_a)
        } else {
            None
        }
    }
}

/// Transition reported for a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionPhase {
    /// Started touching this tick
    Enter,
    /// Touching last tick and this tick
    Stay,
    /// Touching last tick, not anymore
    Exit,
}

impl fmt::Display for CollisionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A notification delivered to `entity` about `other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionEvent {
    /// Transition
    pub phase: CollisionPhase,
    /// Receiver of the notification
    pub entity: Entity,
    /// The other side of the pair
    pub other: Entity,
}

/// Counters from the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Entities inserted into the spatial index
    pub indexed_entities: usize,
    /// Broad-phase candidates returned, self and duplicates included
    pub candidates: usize,
    /// Precise intersection tests run
    pub narrow_phase_tests: usize,
    /// Pairs touching at the end of the tick
    pub pairs: usize,
    /// Notifications delivered
    pub events: usize,
}

/// Broad-phase + narrow-phase collision detection with pair tracking
pub struct CollisionSystem {
    /// Broad-phase index, rebuilt each tick
    index: Box<dyn SpatialIndex>,

    /// Which tag pairs may collide
    matrix: CollisionMatrix,

    /// Pairs touching this tick
    current_pairs: HashSet<CollisionPair>,

    /// Pairs touching last tick
    previous_pairs: HashSet<CollisionPair>,

    /// Pairs already evaluated this tick
    visited: HashSet<CollisionPair>,

    /// Notifications delivered during the last tick, in delivery order
    events: Vec<CollisionEvent>,

    stats: FrameStats,

    /// Scratch buffer for broad-phase queries
    candidates: Vec<Entity>,

    debug_render: bool,
}

impl CollisionSystem {
    /// Create a system over `world_bounds` with the default quadtree settings
    /// and the default collision matrix
    pub fn new(world_bounds: Rect) -> Self {
        Self::with_quadtree_config(world_bounds, QuadtreeConfig::default())
    }

    /// Create a system with explicit quadtree settings
    pub fn with_quadtree_config(world_bounds: Rect, config: QuadtreeConfig) -> Self {
        Self::with_index(Box::new(Quadtree::new(world_bounds, config)))
    }

    /// Create a system over any spatial index
    pub fn with_index(index: Box<dyn SpatialIndex>) -> Self {
        Self {
            index,
            matrix: CollisionMatrix::new(),
            current_pairs: HashSet::new(),
            previous_pairs: HashSet::new(),
            visited: HashSet::new(),
            events: Vec::new(),
            stats: FrameStats::default(),
            candidates: Vec::new(),
            debug_render: false,
        }
    }

    /// Build a system from validated configuration
    pub fn from_config(config: &CollisionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut system = Self::with_quadtree_config(config.world_bounds, config.quadtree);
        system.matrix = CollisionMatrix::from_pairs(config.enabled_pairs.iter().copied());
        system.debug_render = config.debug_render;

        log::debug!(
            "Collision system created: bounds {:?}, {} enabled tag pairs",
            config.world_bounds,
            config.enabled_pairs.len()
        );
        Ok(system)
    }

    /// Run one tick over every entity in the world
    pub fn update(&mut self, world: &mut World) {
        let entities = world.entities();
        self.update_entities(world, &entities);
    }

    /// Run one tick over the given entities
    ///
    /// Entities not in `entities` are neither indexed nor notified, but
    /// pairs from the previous tick that are no longer found still exit.
    pub fn update_entities(&mut self, world: &mut World, entities: &[Entity]) {
        std::mem::swap(&mut self.current_pairs, &mut self.previous_pairs);
        self.current_pairs.clear();
        self.visited.clear();
        self.events.clear();
        self.stats = FrameStats::default();

        for &entity in entities {
            if let Some(object) = world.get_mut(entity) {
                object.on_collision_frame_start();
            }
        }

        self.rebuild_index(world, entities);

        let mut candidates = std::mem::take(&mut self.candidates);
        for &entity in entities {
            let bounds = match world.get(entity) {
                Some(object) if is_collidable(object) => entity_bounds(object, &*world),
                _ => continue,
            };

            candidates.clear();
            self.index.retrieve(&bounds, &mut candidates);
            self.stats.candidates += candidates.len();

            for &other in &candidates {
                if other == entity {
                    continue;
                }

                // Each unordered pair is evaluated once per tick
                let pair = CollisionPair::new(entity, other);
                if !self.visited.insert(pair) {
                    continue;
                }

                if !self.should_collide(world, entity, other) {
                    continue;
                }

                self.stats.narrow_phase_tests += 1;
                if !precise_intersect(world, entity, other) {
                    continue;
                }

                self.current_pairs.insert(pair);
                let phase = if self.previous_pairs.contains(&pair) {
                    CollisionPhase::Stay
                } else {
                    CollisionPhase::Enter
                };
                log::trace!("{} {:?} <-> {:?}", phase, entity, other);
                self.notify(world, phase, entity, other);
            }
        }
        self.candidates = candidates;

        for pair in self.collision_exited() {
            log::trace!("Exit {:?} <-> {:?}", pair.entity_a, pair.entity_b);
            self.notify(world, CollisionPhase::Exit, pair.entity_a, pair.entity_b);
        }

        self.stats.pairs = self.current_pairs.len();
        self.stats.events = self.events.len();

        log::debug!(
            "Collision tick: {} indexed, {} candidates, {} tests, {} pairs, {} events",
            self.stats.indexed_entities,
            self.stats.candidates,
            self.stats.narrow_phase_tests,
            self.stats.pairs,
            self.stats.events
        );
    }

    /// Clear the index and insert every active entity with an enabled collider
    fn rebuild_index(&mut self, world: &World, entities: &[Entity]) {
        self.index.clear();

        for &entity in entities {
            let Some(object) = world.get(entity) else {
                log::warn!("Skipping stale entity {:?} in collision update", entity);
                continue;
            };

            if is_collidable(object) {
                self.index.insert(entity, entity_bounds(object, world));
                self.stats.indexed_entities += 1;
            }
        }
    }

    /// Deliver `phase` to both sides of a pair
    ///
    /// A side whose handle no longer resolves is skipped.
    fn notify(&mut self, world: &mut World, phase: CollisionPhase, a: Entity, b: Entity) {
        for (entity, other) in [(a, b), (b, a)] {
            let Some(object) = world.get_mut(entity) else {
                log::debug!("{} for {:?} skipped: entity no longer exists", phase, entity);
                continue;
            };

            match phase {
                CollisionPhase::Enter => object.on_collision_enter(other),
                CollisionPhase::Stay => object.on_collision_stay(other),
                CollisionPhase::Exit => object.on_collision_exit(other),
            }
            self.events.push(CollisionEvent { phase, entity, other });
        }
    }

    /// Whether two entities are allowed to collide at all
    ///
    /// False if the handles are equal or stale, either object is inactive,
    /// either lacks a collider or has it disabled, or the matrix forbids
    /// their tags.
    pub fn should_collide(&self, world: &World, a: Entity, b: Entity) -> bool {
        if a == b {
            return false;
        }

        let (Some(object_a), Some(object_b)) = (world.get(a), world.get(b)) else {
            return false;
        };

        if !is_collidable(object_a) || !is_collidable(object_b) {
            return false;
        }

        self.matrix.can_collide(object_a.tag(), object_b.tag())
    }

    /// Tag filter
    pub fn matrix(&self) -> &CollisionMatrix {
        &self.matrix
    }

    /// Mutable tag filter
    pub fn matrix_mut(&mut self) -> &mut CollisionMatrix {
        &mut self.matrix
    }

    /// Replace the tag filter
    pub fn set_matrix(&mut self, matrix: CollisionMatrix) {
        self.matrix = matrix;
    }

    /// Broad-phase index as rebuilt by the last tick
    pub fn index(&self) -> &dyn SpatialIndex {
        self.index.as_ref()
    }

    /// Notifications delivered during the last tick
    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    /// Pairs that started touching during the last tick, sorted
    pub fn collision_entered(&self) -> Vec<CollisionPair> {
        let mut pairs: Vec<CollisionPair> = self
            .current_pairs
            .difference(&self.previous_pairs)
            .copied()
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// Pairs that stopped touching during the last tick, sorted
    pub fn collision_exited(&self) -> Vec<CollisionPair> {
        let mut pairs: Vec<CollisionPair> = self
            .previous_pairs
            .difference(&self.current_pairs)
            .copied()
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// Pairs touching after the last tick
    pub fn current_collisions(&self) -> &HashSet<CollisionPair> {
        &self.current_pairs
    }

    /// Check whether two entities were touching after the last tick
    pub fn is_colliding(&self, a: Entity, b: Entity) -> bool {
        self.current_pairs.contains(&CollisionPair::new(a, b))
    }

    /// Counters from the last tick
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Forget every pair and event, e.g. on level reload
    ///
    /// The next tick reports every touching pair as entering.
    pub fn reset(&mut self) {
        self.index.clear();
        self.current_pairs.clear();
        self.previous_pairs.clear();
        self.visited.clear();
        self.events.clear();
        self.stats = FrameStats::default();
    }

    /// Enable or disable the debug overlay
    pub fn set_debug_render_enabled(&mut self, enabled: bool) {
        self.debug_render = enabled;
    }

    /// Whether the debug overlay is enabled
    pub fn is_debug_render_enabled(&self) -> bool {
        self.debug_render
    }

    /// Overlay shapes for the renderer: quadtree cells and colliders
    ///
    /// Empty while the overlay is disabled.
    pub fn debug_shapes(&self, world: &World) -> Vec<DebugShape> {
        if !self.debug_render {
            return Vec::new();
        }

        let visualizer = CollisionDebugVisualizer::new();
        let mut shapes = visualizer.index_shapes(self.index.as_ref());
        shapes.extend(visualizer.collider_shapes(self.index.as_ref(), world));
        shapes
    }
}

/// Active with an enabled collider
fn is_collidable(object: &dyn GameObject) -> bool {
    object.is_active() && object.collider().is_some_and(|collider| collider.is_enabled())
}

fn precise_intersect(world: &World, a: Entity, b: Entity) -> bool {
    let collider_a = world.get(a).and_then(|object| object.collider());
    let collider_b = world.get(b).and_then(|object| object.collider());

    match (collider_a, collider_b) {
        (Some(collider_a), Some(collider_b)) => collider_a.intersects(collider_b, world),
        _ => false,
    }
}
