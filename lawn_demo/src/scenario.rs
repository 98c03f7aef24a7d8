//! Scripted lane-defense round
//!
//! Plants sit at the left of each lane and fire peas on a fixed interval,
//! zombies walk in from beyond the right edge. All gameplay reactions are
//! driven by the collision events of each tick.

use crate::config::DemoConfig;
use crate::units::{Unit, UnitKind, BITE_DAMAGE, PEA_DAMAGE};
use lawn_engine::config::ConfigError;
use lawn_engine::debug::{DebugDrawSystem, DebugShape};
use lawn_engine::ecs::{Entity, GameObject, World};
use lawn_engine::foundation::math::{Vec2, Vec4};
use lawn_engine::physics::{CollisionPhase, CollisionSystem, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Horizontal distance between plant columns
const PLANT_SPACING: f32 = 80.0;
/// Horizontal distance between queued zombies
const ZOMBIE_SPACING: f32 = 150.0;
/// Horizontal distance from a plant to the pea it fires
const MUZZLE_OFFSET: f32 = 30.0;
/// Seconds a defeat marker stays in the debug overlay
const MARKER_SECONDS: f32 = 1.0;
/// Half size of a defeat marker
const MARKER_HALF_EXTENT: f32 = 30.0;

/// Counters collected over a round
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Ticks simulated
    pub ticks: u32,
    /// Peas spawned
    pub peas_fired: u32,
    /// Zombies brought to zero health
    pub zombies_killed: u32,
    /// Plants brought to zero health
    pub plants_eaten: u32,
    /// Enter notifications delivered
    pub enters: u32,
    /// Stay notifications delivered
    pub stays: u32,
    /// Exit notifications delivered
    pub exits: u32,
    /// Objects removed from the world
    pub despawned: usize,
    /// Most pairs touching in a single tick
    pub peak_pairs: usize,
    /// Zombies still on the lawn at the end
    pub zombies_left: usize,
    /// Plants still standing at the end
    pub plants_left: usize,
}

/// One lawn with its units and collision engine
pub struct Lawn {
    config: DemoConfig,
    bounds: Rect,
    world: World,
    collisions: CollisionSystem,
    debug_draw: DebugDrawSystem,
    plants: Vec<Entity>,
    rng: StdRng,
    summary: Summary,
}

impl Lawn {
    /// Validate the configuration and place every plant and zombie
    pub fn new(config: DemoConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let collisions = CollisionSystem::from_config(&config.collision)?;
        let mut lawn = Self {
            bounds: config.collision.world_bounds,
            rng: StdRng::seed_from_u64(config.seed),
            config,
            world: World::new(),
            collisions,
            debug_draw: DebugDrawSystem::new(),
            plants: Vec::new(),
            summary: Summary::default(),
        };
        lawn.debug_draw.enabled = lawn.collisions.is_debug_render_enabled();
        lawn.debug_draw.draw_persistent(
            "world_bounds",
            DebugShape::outline(lawn.bounds, Vec4::new(1.0, 1.0, 1.0, 0.5), 1.0),
        );
        lawn.populate();
        Ok(lawn)
    }

    fn lane_y(&self, lane: u32) -> f32 {
        let lane_height = self.bounds.height() / self.config.lanes as f32;
        self.bounds.min.y + (lane as f32 + 0.5) * lane_height
    }

    fn populate(&mut self) {
        for lane in 0..self.config.lanes {
            let y = self.lane_y(lane);

            for column in 0..self.config.plants_per_lane {
                let x = self.bounds.min.x + PLANT_SPACING * (column as f32 + 1.0);
                let plant = self.world.spawn(Unit::plant(Vec2::new(x, y)));
                self.plants.push(plant);
            }

            for queued in 0..self.config.zombies_per_lane {
                let x = self.bounds.max.x + 60.0 + ZOMBIE_SPACING * queued as f32 + self.rng.gen_range(0.0..40.0);
                let speed = self.rng.gen_range(15.0..30.0);
                self.world.spawn(Unit::zombie(Vec2::new(x, y), speed));
            }
        }

        log::info!(
            "Lawn ready: {} lanes, {} plants, {} objects",
            self.config.lanes,
            self.plants.len(),
            self.world.len()
        );
    }

    /// Run every configured tick
    pub fn run(&mut self) -> &Summary {
        for _ in 0..self.config.ticks {
            self.step();
        }

        self.summary.zombies_left = self.count(UnitKind::Zombie);
        self.summary.plants_left = self.count(UnitKind::Plant);
        &self.summary
    }

    /// Advance the round by one tick
    pub fn step(&mut self) {
        self.summary.ticks += 1;
        let dt = self.config.tick_seconds;

        self.move_units(dt);
        if self.summary.ticks % self.config.fire_interval_ticks == 0 {
            self.fire();
        }

        self.collisions.update(&mut self.world);
        self.summary.peak_pairs = self.summary.peak_pairs.max(self.collisions.stats().pairs);
        self.react();
        self.retire_units();

        if self.collisions.is_debug_render_enabled() {
            self.debug_draw.update(dt);
            self.debug_draw.submit(self.collisions.debug_shapes(&self.world), 0.0);
            log::trace!("{} debug shapes queued", self.debug_draw.shape_count());
        }
    }

    fn move_units(&mut self, dt: f32) {
        let right_edge = self.bounds.max.x;
        for entity in self.world.entities() {
            let Some(unit) = self.world.get_as_mut::<Unit>(entity) else {
                continue;
            };

            unit.advance(dt);
            if unit.kind() == UnitKind::Pea && unit.transform().position().x > right_edge {
                unit.deactivate();
            }
        }
    }

    fn fire(&mut self) {
        let muzzles: Vec<Vec2> = self
            .plants
            .iter()
            .filter_map(|&plant| self.world.get(plant))
            .filter(|plant| plant.is_active())
            .map(|plant| plant.transform().position() + Vec2::new(MUZZLE_OFFSET, 0.0))
            .collect();

        for muzzle in muzzles {
            self.world.spawn(Unit::pea(muzzle));
            self.summary.peas_fired += 1;
        }
    }

    fn react(&mut self) {
        for event in self.collisions.events() {
            match event.phase {
                CollisionPhase::Enter => self.summary.enters += 1,
                CollisionPhase::Stay => self.summary.stays += 1,
                CollisionPhase::Exit => self.summary.exits += 1,
            }

            let Some(kind) = kind_of(&self.world, event.entity) else {
                continue;
            };
            let other_kind = kind_of(&self.world, event.other);
            let Some(unit) = self.world.get_as_mut::<Unit>(event.entity) else {
                continue;
            };
            let marker = Rect::from_center_half_extents(
                unit.transform().position(),
                Vec2::new(MARKER_HALF_EXTENT, MARKER_HALF_EXTENT),
            );

            match (kind, other_kind, event.phase) {
                // The plant may already be gone, so unblock on any exit
                (UnitKind::Zombie, _, CollisionPhase::Exit) => unit.unblock(event.other),
                (UnitKind::Zombie, Some(UnitKind::Plant), _) => unit.block(event.other),
                (UnitKind::Zombie, Some(UnitKind::Pea), CollisionPhase::Enter) => {
                    if unit.damage(PEA_DAMAGE) {
                        log::info!("Zombie {:?} defeated", event.entity);
                        self.summary.zombies_killed += 1;
                        self.debug_draw
                            .draw_rect(marker, Vec4::new(1.0, 0.0, 0.0, 1.0), 2.0, MARKER_SECONDS);
                    }
                }
                (UnitKind::Pea, Some(UnitKind::Zombie), CollisionPhase::Enter) => unit.deactivate(),
                (UnitKind::Plant, Some(UnitKind::Zombie), CollisionPhase::Enter | CollisionPhase::Stay) => {
                    if unit.damage(BITE_DAMAGE) {
                        log::info!("Plant {:?} eaten", event.entity);
                        self.summary.plants_eaten += 1;
                        self.debug_draw
                            .fill_rect(marker, Vec4::new(0.0, 1.0, 0.0, 0.4), MARKER_SECONDS);
                    }
                }
                _ => {}
            }
        }
    }

    fn retire_units(&mut self) {
        for (entity, object) in self.world.iter() {
            if object.is_active() {
                continue;
            }
            if let Some(unit) = self.world.get_as::<Unit>(entity) {
                log::debug!(
                    "Retiring {:?} {:?} (health {:.0}, {} enters, {} stays, {} exits)",
                    unit.kind(),
                    entity,
                    unit.health(),
                    unit.enters,
                    unit.stays,
                    unit.exits
                );
            }
        }

        self.summary.despawned += self.world.despawn_inactive();
        let world = &self.world;
        self.plants.retain(|&plant| world.contains(plant));
    }

    fn count(&self, kind: UnitKind) -> usize {
        self.world
            .entities()
            .into_iter()
            .filter(|&entity| kind_of(&self.world, entity) == Some(kind))
            .count()
    }

    /// Registered objects
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Counters so far
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Overlay shapes for a renderer
    pub fn debug_draw(&self) -> &DebugDrawSystem {
        &self.debug_draw
    }
}

fn kind_of(world: &World, entity: Entity) -> Option<UnitKind> {
    world.get_as::<Unit>(entity).map(Unit::kind)
}
