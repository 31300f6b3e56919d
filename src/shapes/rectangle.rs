use crate::math::{Aabb, Vector2};
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// An axis-aligned rectangle shape.
///
/// The body position is the center of the rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Rectangle {
    /// Full width and height of the rectangle
    pub size: Vector2,
}

impl Rectangle {
    /// Creates a new rectangle with the given full size
    pub fn new(size: Vector2) -> Self {
        Self {
            size: Vector2::new(size.x.max(0.0), size.y.max(0.0)),
        }
    }

    /// Creates a new rectangle from a width and a height
    pub fn new_with_dimensions(width: f32, height: f32) -> Self {
        Self::new(Vector2::new(width, height))
    }

    /// Returns the full size of the rectangle
    pub fn get_size(&self) -> Vector2 {
        self.size
    }

    /// Returns half of the size on each axis
    pub fn get_half_extents(&self) -> Vector2 {
        self.size * 0.5
    }

    /// Returns the top left and bottom right corners of the rectangle placed at `position`
    pub fn corners(&self, position: Vector2) -> (Vector2, Vector2) {
        let half = self.get_half_extents();
        (position - half, position + half)
    }

    /// Returns the bounding box of the rectangle placed at `position`
    pub fn get_world_bounds(&self, position: Vector2) -> Aabb {
        Aabb::from_center_size(position, self.size)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rectangle: width {}, height: {}", self.size.x, self.size.y)
    }
}
