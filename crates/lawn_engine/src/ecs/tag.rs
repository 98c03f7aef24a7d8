//! Entity categories used for collision filtering

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a game object
///
/// Tags only feed the [`crate::physics::CollisionMatrix`]; they carry no
/// other behavior inside the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tag {
    /// Uncategorized object
    #[default]
    None = 0,
    /// Defender placed on the lawn
    Plant = 1,
    /// Attacker walking down a lane
    Zombie = 2,
    /// Shot fired by a plant
    Projectile = 3,
    /// Decoration (fog, bushes)
    Ambient = 4,
    /// Falling sun pickup
    Sun = 5,
    /// Dropped coin pickup
    Coin = 6,
}

/// Error converting a raw value into a [`Tag`]
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    /// Value does not name any tag
    #[error("Unknown tag value: {0}")]
    Unknown(u8),
}

impl Tag {
    /// Every tag, in index order
    pub const ALL: [Tag; 7] = [
        Tag::None,
        Tag::Plant,
        Tag::Zombie,
        Tag::Projectile,
        Tag::Ambient,
        Tag::Sun,
        Tag::Coin,
    ];
    
    /// Number of tags
    pub const COUNT: usize = Self::ALL.len();
    
    /// Row/column of this tag in the collision matrix
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Tag {
    type Error = TagError;
    
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(TagError::Unknown(value))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
