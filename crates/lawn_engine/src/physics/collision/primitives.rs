//! Primitive geometry for broad-phase placement
//!
//! [`Rect`] is the axis-aligned rectangle used for quadtree node bounds and
//! entity bounding boxes. Its intersection test is strict: rectangles that
//! only share an edge do not intersect. The precise collider test in
//! [`super::shape`] is inclusive instead, so two boxes touching at an edge
//! do collide even though their bounding rectangles do not intersect.

use crate::foundation::math::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle defined by its min/max corners
///
/// `min.x <= max.x` and `min.y <= max.y` are maintained by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner (smallest coordinates)
    pub min: Vec2,
    /// Bottom-right corner (largest coordinates)
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from its four edges
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            max: Vec2::new(right, bottom),
        }
    }
    
    /// Create a rectangle from a top-left corner and a size
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }
    
    /// Create a rectangle from min/max corners
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }
    
    /// Create a rectangle centered on `center` spanning `half_extents` each way
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }
    
    /// Left edge
    pub fn x(&self) -> f32 {
        self.min.x
    }
    
    /// Top edge
    pub fn y(&self) -> f32 {
        self.min.y
    }
    
    /// Horizontal extent
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }
    
    /// Vertical extent
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
    
    /// Width and height as a vector
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
    
    /// Midpoint of the rectangle
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
    
    /// Check if a point lies inside the rectangle (edges included)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
    
    /// Check if this rectangle overlaps another
    ///
    /// Strict comparison: rectangles that merely touch along an edge or at a
    /// corner are not intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    
    #[test]
    fn test_from_xywh_corners() {
        let rect = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);
        
        assert_relative_eq!(rect.min, Vec2::new(10.0, 20.0));
        assert_relative_eq!(rect.max, Vec2::new(40.0, 60.0));
        assert_relative_eq!(rect.width(), 30.0);
        assert_relative_eq!(rect.height(), 40.0);
        assert_relative_eq!(rect.center(), Vec2::new(25.0, 40.0));
    }
    
    #[test]
    fn test_contains_includes_edges() {
        let rect = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        
        assert!(rect.contains(Vec2::new(5.0, 5.0)));
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains(Vec2::new(10.01, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, -0.01)));
    }
    
    #[test]
    fn test_intersects_overlap() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(5.0, 5.0, 10.0, 10.0);
        
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }
    
    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let right = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);
        let below = Rect::from_xywh(0.0, 10.0, 10.0, 10.0);
        let corner = Rect::from_xywh(10.0, 10.0, 5.0, 5.0);
        
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));
    }
    
    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::from_center_half_extents(Vec2::new(50.0, 50.0), Vec2::new(1.0, 1.0));
        
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }
}
