//! Multi-tick collision scenarios driven through the public system API

mod filtering;

use crate::ecs::{Entity, GameObject, Tag, World};
use crate::foundation::math::{Transform2D, Vec2};
use crate::physics::collision::{Collider, Rect};
use crate::physics::CollisionPhase;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Notification log shared by every probe in a scenario
pub(super) type Log = Rc<RefCell<Vec<(&'static str, CollisionPhase, Entity)>>>;

/// Game object that records every notification it receives
pub(super) struct Probe {
    name: &'static str,
    tag: Tag,
    transform: Transform2D,
    collider: Option<Collider>,
    active: Rc<Cell<bool>>,
    deactivate_on_enter: bool,
    log: Log,
}

impl Probe {
    pub(super) fn new(name: &'static str, tag: Tag, position: Vec2, collider: Collider, log: &Log) -> Self {
        Self {
            name,
            tag,
            transform: Transform2D::from_position(position),
            collider: Some(collider),
            active: Rc::new(Cell::new(true)),
            deactivate_on_enter: false,
            log: Rc::clone(log),
        }
    }

    /// Switch used to deactivate the probe from outside once it is spawned
    pub(super) fn active_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.active)
    }

    /// Deactivate on the first enter, like a projectile that is spent on hit
    pub(super) fn spent_on_hit(mut self) -> Self {
        self.deactivate_on_enter = true;
        self
    }

    fn record(&self, phase: CollisionPhase, other: Entity) {
        self.log.borrow_mut().push((self.name, phase, other));
    }
}

impl GameObject for Probe {
    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn tag(&self) -> Tag {
        self.tag
    }

    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform2D {
        &mut self.transform
    }

    fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    fn collider_mut(&mut self) -> Option<&mut Collider> {
        self.collider.as_mut()
    }

    fn on_collision_enter(&mut self, other: Entity) {
        self.record(CollisionPhase::Enter, other);
        if self.deactivate_on_enter {
            self.active.set(false);
        }
    }

    fn on_collision_stay(&mut self, other: Entity) {
        self.record(CollisionPhase::Stay, other);
    }

    fn on_collision_exit(&mut self, other: Entity) {
        self.record(CollisionPhase::Exit, other);
    }
}

pub(super) fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Drain the log
pub(super) fn take(log: &Log) -> Vec<(&'static str, CollisionPhase, Entity)> {
    std::mem::take(&mut *log.borrow_mut())
}

pub(super) fn move_to(world: &mut World, entity: Entity, x: f32, y: f32) {
    if let Some(object) = world.get_mut(entity) {
        object.transform_mut().set_position(Vec2::new(x, y));
    }
}

pub(super) fn lawn() -> Rect {
    Rect::from_xywh(-100.0, -100.0, 200.0, 200.0)
}
