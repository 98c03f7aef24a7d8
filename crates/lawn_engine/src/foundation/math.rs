//! Math utilities and types
//!
//! The engine is strictly 2D; positions use screen convention (y grows downward).

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type (RGBA colors for debug output)
pub type Vec4 = Vector4<f32>;

/// 2D transform representing position, rotation, and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    /// Position in world space
    pub position: Vec2,
    
    /// Scale factors
    pub scale: Vec2,
    
    /// Rotation in radians (ignored by collision, colliders are axis-aligned)
    pub rotation: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
        }
    }
}

impl Transform2D {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }
    
    /// Create a transform with only position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
    
    /// Current world position
    pub fn position(&self) -> Vec2 {
        self.position
    }
    
    /// Move to an absolute position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
    
    /// Move by a relative offset
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

/// Clamp each component of `value` to `[-limit, limit]`
///
/// Never panics: a negative limit is taken by magnitude and a NaN limit
/// leaves the component unclamped.
pub fn clamp_symmetric(value: Vec2, limit: Vec2) -> Vec2 {
    let limit = limit.abs();
    Vec2::new(
        value.x.max(-limit.x).min(limit.x),
        value.y.max(-limit.y).min(limit.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    
    #[test]
    fn test_translate_accumulates() {
        let mut transform = Transform2D::from_position(Vec2::new(1.0, 2.0));
        transform.translate(Vec2::new(0.5, -1.0));
        transform.translate(Vec2::new(0.5, -1.0));
        
        assert_relative_eq!(transform.position(), Vec2::new(2.0, 0.0));
    }
    
    #[test]
    fn test_clamp_symmetric() {
        let clamped = clamp_symmetric(Vec2::new(12.0, -7.0), Vec2::new(5.0, 5.0));
        assert_relative_eq!(clamped, Vec2::new(5.0, -5.0));
        
        let inside = clamp_symmetric(Vec2::new(1.0, -2.0), Vec2::new(5.0, 5.0));
        assert_relative_eq!(inside, Vec2::new(1.0, -2.0));
    }

    #[test]
    fn test_clamp_symmetric_malformed_limit() {
        let negative = clamp_symmetric(Vec2::new(12.0, -7.0), Vec2::new(-5.0, -5.0));
        assert_relative_eq!(negative, Vec2::new(5.0, -5.0));

        let nan = clamp_symmetric(Vec2::new(3.0, 1.0), Vec2::new(f32::NAN, 5.0));
        assert!(nan.x.is_finite());
        assert_relative_eq!(nan.y, 1.0);
    }
}
