//! Tag-based collision filtering
//!
//! Categories of objects decide whether they may interact at all before any
//! geometry is tested. The matrix is a fixed square table indexed by
//! [`Tag::index`], kept symmetric by writing both cells on every change.

use crate::ecs::Tag;

/// Side length of the collision table
pub const MAX_TAGS: usize = 8;

/// Symmetric "can these two categories collide" table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMatrix {
    matrix: [[bool; MAX_TAGS]; MAX_TAGS],
}

impl CollisionMatrix {
    /// Pairs enabled by [`CollisionMatrix::new`]
    pub const DEFAULT_PAIRS: [(Tag, Tag); 3] = [
        (Tag::Projectile, Tag::Zombie),
        (Tag::Zombie, Tag::Plant),
        (Tag::Plant, Tag::Projectile),
    ];

    /// Create the default matrix: projectiles hit zombies, zombies eat
    /// plants, plants meet projectiles; everything else is disabled
    pub fn new() -> Self {
        Self::from_pairs(Self::DEFAULT_PAIRS)
    }

    /// Create a matrix where nothing collides
    pub fn empty() -> Self {
        Self {
            matrix: [[false; MAX_TAGS]; MAX_TAGS],
        }
    }

    /// Create a matrix enabling exactly the given pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Tag, Tag)>) -> Self {
        let mut matrix = Self::empty();
        for (a, b) in pairs {
            matrix.enable_collision(a, b);
        }
        matrix
    }

    /// Check if two categories may collide (order does not matter)
    pub fn can_collide(&self, tag_a: Tag, tag_b: Tag) -> bool {
        self.can_collide_indices(tag_a.index(), tag_b.index())
    }

    /// Raw table lookup; indices outside the table never collide
    pub fn can_collide_indices(&self, index_a: usize, index_b: usize) -> bool {
        if index_a >= MAX_TAGS || index_b >= MAX_TAGS {
            return false;
        }

        self.matrix[index_a][index_b]
    }

    /// Allow or forbid collisions between two categories
    ///
    /// Writes both `(a, b)` and `(b, a)`.
    pub fn set_collision(&mut self, tag_a: Tag, tag_b: Tag, allowed: bool) {
        let (a, b) = (tag_a.index(), tag_b.index());
        if a >= MAX_TAGS || b >= MAX_TAGS {
            return;
        }

        self.matrix[a][b] = allowed;
        self.matrix[b][a] = allowed;
    }

    /// Allow collisions between two categories
    pub fn enable_collision(&mut self, tag_a: Tag, tag_b: Tag) {
        self.set_collision(tag_a, tag_b, true);
    }

    /// Forbid collisions between two categories
    pub fn disable_collision(&mut self, tag_a: Tag, tag_b: Tag) {
        self.set_collision(tag_a, tag_b, false);
    }

    /// Forbid every pair
    pub fn clear(&mut self) {
        self.matrix = [[false; MAX_TAGS]; MAX_TAGS];
    }

    /// All enabled pairs, each listed once with the lower index first
    pub fn enabled_pairs(&self) -> Vec<(Tag, Tag)> {
        let mut pairs = Vec::new();
        for (i, &a) in Tag::ALL.iter().enumerate() {
            for &b in &Tag::ALL[i..] {
                if self.can_collide(a, b) {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }
}

impl Default for CollisionMatrix {
    fn default() -> Self {
        Self::new()
    }
}
