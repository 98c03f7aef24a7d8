//! Registry of live game objects

use super::{Entity, GameObject};
use crate::foundation::math::Vec2;
use crate::physics::collision::OwnerTransforms;
use slotmap::SlotMap;

/// Owns every game object and hands out generational [`Entity`] handles
///
/// A despawned handle never resolves again, so the collision system can keep
/// handles from previous ticks and find out cheaply which objects are gone.
#[derive(Default)]
pub struct World {
    objects: SlotMap<Entity, Box<dyn GameObject>>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object and attach its collider (if any) to the new entity
    pub fn spawn(&mut self, object: impl GameObject + 'static) -> Entity {
        self.spawn_boxed(Box::new(object))
    }

    /// Register an already boxed object
    pub fn spawn_boxed(&mut self, mut object: Box<dyn GameObject>) -> Entity {
        self.objects.insert_with_key(|entity| {
            if let Some(collider) = object.collider_mut() {
                collider.set_owner(Some(entity));
            }
            object
        })
    }

    /// Remove an object, returning it if the handle was live
    pub fn despawn(&mut self, entity: Entity) -> Option<Box<dyn GameObject>> {
        let object = self.objects.remove(entity);
        if object.is_none() {
            log::warn!("Despawn of unknown entity {:?}", entity);
        }
        object
    }

    /// Remove every inactive object, returning how many were removed
    pub fn despawn_inactive(&mut self) -> usize {
        let before = self.objects.len();
        self.objects.retain(|_, object| object.is_active());
        before - self.objects.len()
    }

    /// Look up an object
    pub fn get(&self, entity: Entity) -> Option<&dyn GameObject> {
        self.objects.get(entity).map(|object| object.as_ref())
    }

    /// Look up an object mutably
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut dyn GameObject> {
        match self.objects.get_mut(entity) {
            Some(object) => Some(object.as_mut()),
            None => None,
        }
    }

    /// Look up an object as its concrete type
    pub fn get_as<T: GameObject>(&self, entity: Entity) -> Option<&T> {
        let object = self.objects.get(entity)?;
        (**object).as_any().downcast_ref::<T>()
    }

    /// Look up an object mutably as its concrete type
    pub fn get_as_mut<T: GameObject>(&mut self, entity: Entity) -> Option<&mut T> {
        let object = self.objects.get_mut(entity)?;
        (**object).as_any_mut().downcast_mut::<T>()
    }

    /// Check whether a handle still refers to a live object
    pub fn contains(&self, entity: Entity) -> bool {
        self.objects.contains_key(entity)
    }

    /// Handles of every live object, in slot order
    pub fn entities(&self) -> Vec<Entity> {
        self.objects.keys().collect()
    }

    /// Iterate over live objects
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &dyn GameObject)> {
        self.objects.iter().map(|(entity, object)| (entity, object.as_ref()))
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when no objects are registered
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl OwnerTransforms for World {
    fn owner_position(&self, owner: Entity) -> Option<Vec2> {
        self.objects.get(owner).map(|object| object.transform().position())
    }
}
