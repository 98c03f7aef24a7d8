//! Lawn units: plants, zombies and the peas plants shoot

use lawn_engine::ecs::{Entity, GameObject, Tag};
use lawn_engine::foundation::math::{Transform2D, Vec2};
use lawn_engine::physics::Collider;
use std::collections::HashSet;

/// Hit points of a freshly planted plant
pub const PLANT_HEALTH: f32 = 300.0;
/// Hit points of a zombie
pub const ZOMBIE_HEALTH: f32 = 100.0;
/// Damage one pea deals to a zombie
pub const PEA_DAMAGE: f32 = 20.0;
/// Damage a zombie deals to a plant per tick of contact
pub const BITE_DAMAGE: f32 = 1.0;
/// Horizontal pea speed in pixels per second
pub const PEA_SPEED: f32 = 300.0;

/// What a unit is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Stationary shooter
    Plant,
    /// Walks left, eats plants
    Zombie,
    /// Flies right until it hits a zombie
    Pea,
}

impl UnitKind {
    /// Collision category
    pub fn tag(self) -> Tag {
        match self {
            UnitKind::Plant => Tag::Plant,
            UnitKind::Zombie => Tag::Zombie,
            UnitKind::Pea => Tag::Projectile,
        }
    }
}

/// A unit on the lawn
#[derive(Debug, Clone)]
pub struct Unit {
    kind: UnitKind,
    transform: Transform2D,
    collider: Collider,
    velocity: Vec2,
    health: f32,
    active: bool,

    /// Plants this zombie is currently chewing on
    blockers: HashSet<Entity>,

    /// Notifications received, by phase
    pub enters: u32,
    /// Stay notifications received
    pub stays: u32,
    /// Exit notifications received
    pub exits: u32,
}

impl Unit {
    fn new(kind: UnitKind, position: Vec2, collider: Collider, velocity: Vec2, health: f32) -> Self {
        Self {
            kind,
            transform: Transform2D::from_position(position),
            collider,
            velocity,
            health,
            active: true,
            blockers: HashSet::new(),
            enters: 0,
            stays: 0,
            exits: 0,
        }
    }

    /// Plant occupying one lawn tile
    pub fn plant(position: Vec2) -> Self {
        Self::new(UnitKind::Plant, position, Collider::boxed(60.0, 60.0), Vec2::zeros(), PLANT_HEALTH)
    }

    /// Zombie walking left at `speed` pixels per second
    pub fn zombie(position: Vec2, speed: f32) -> Self {
        Self::new(
            UnitKind::Zombie,
            position,
            Collider::boxed(40.0, 60.0).with_offset(Vec2::new(0.0, -5.0)),
            Vec2::new(-speed, 0.0),
            ZOMBIE_HEALTH,
        )
    }

    /// Pea fired to the right
    pub fn pea(position: Vec2) -> Self {
        Self::new(
            UnitKind::Pea,
            position,
            Collider::circle(8.0).as_trigger(),
            Vec2::new(PEA_SPEED, 0.0),
            1.0,
        )
    }

    /// What this unit is
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Remaining hit points
    pub fn health(&self) -> f32 {
        self.health
    }

    /// Move by one tick; zombies stand still while blocked by a plant
    pub fn advance(&mut self, dt: f32) {
        if !self.active || !self.blockers.is_empty() {
            return;
        }
        self.transform.translate(self.velocity * dt);
    }

    /// Lose hit points, deactivating at zero; true if this killed the unit
    pub fn damage(&mut self, amount: f32) -> bool {
        if !self.active {
            return false;
        }

        self.health -= amount;
        if self.health <= 0.0 {
            self.active = false;
            return true;
        }
        false
    }

    /// Take the unit out of play
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// A plant started or kept blocking this zombie
    pub fn block(&mut self, plant: Entity) {
        self.blockers.insert(plant);
    }

    /// A plant stopped blocking this zombie
    pub fn unblock(&mut self, plant: Entity) {
        self.blockers.remove(&plant);
    }

    /// Whether a plant is in the way
    pub fn is_blocked(&self) -> bool {
        !self.blockers.is_empty()
    }
}

impl GameObject for Unit {
    fn is_active(&self) -> bool {
        self.active
    }

    fn tag(&self) -> Tag {
        self.kind.tag()
    }

    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    fn collider(&self) -> Option<&Collider> {
        Some(&self.collider)
    }

    fn collider_mut(&mut self) -> Option<&mut Collider> {
        Some(&mut self.collider)
    }

    fn on_collision_enter(&mut self, other: Entity) {
        log::trace!("{:?} touched {:?}", self.kind, other);
        self.enters += 1;
    }

    fn on_collision_stay(&mut self, _other: Entity) {
        self.stays += 1;
    }

    fn on_collision_exit(&mut self, other: Entity) {
        log::trace!("{:?} separated from {:?}", self.kind, other);
        self.exits += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawn_engine::ecs::World;

    #[test]
    fn test_blocked_zombie_stands_still() {
        let mut zombie = Unit::zombie(Vec2::new(100.0, 0.0), 30.0);
        zombie.advance(1.0);
        assert_eq!(zombie.transform().position(), Vec2::new(70.0, 0.0));

        let mut world = World::new();
        let plant = world.spawn(Unit::plant(Vec2::zeros()));
        zombie.block(plant);
        zombie.advance(1.0);
        assert_eq!(zombie.transform().position(), Vec2::new(70.0, 0.0));

        zombie.unblock(plant);
        assert!(!zombie.is_blocked());
    }

    #[test]
    fn test_damage_kills_once() {
        let mut zombie = Unit::zombie(Vec2::zeros(), 10.0);
        for _ in 0..4 {
            assert!(!zombie.damage(PEA_DAMAGE));
        }
        assert!(zombie.damage(PEA_DAMAGE));
        assert!(!zombie.is_active());
        assert!(!zombie.damage(PEA_DAMAGE));
    }

    #[test]
    fn test_unit_tags() {
        assert_eq!(Unit::plant(Vec2::zeros()).tag(), Tag::Plant);
        assert_eq!(Unit::pea(Vec2::zeros()).tag(), Tag::Projectile);
        assert!(Unit::pea(Vec2::zeros()).collider().is_some_and(Collider::is_trigger));
    }
}
