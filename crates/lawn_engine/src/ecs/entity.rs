//! Entity implementation

use slotmap::{new_key_type, Key};

new_key_type! {
    /// Entity identifier
    ///
    /// A generational arena index: once an entity is despawned its handle
    /// never resolves again, even if the slot is reused. The engine keeps
    /// these handles across ticks for pair tracking and resolves them
    /// through [`super::World`] whenever it needs the object behind them.
    pub struct Entity;
}

impl Entity {
    /// Get the raw entity ID (slot index and generation packed together)
    pub fn id(&self) -> u64 {
        self.data().as_ffi()
    }
}
