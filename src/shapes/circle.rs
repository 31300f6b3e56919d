use crate::math::{Aabb, Vector2};
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A circular collision shape centered on the body position
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Circle {
    /// The radius of the circle
    pub radius: f32,
}

impl Circle {
    /// Creates a new circle with the given radius
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }

    /// Returns the radius of the circle
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Returns the bounding box of the circle placed at `position`
    pub fn get_world_bounds(&self, position: Vector2) -> Aabb {
        let half_size = Vector2::new(self.radius, self.radius);

        Aabb::new(position - half_size, position + half_size)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Circle: radius: {}", self.radius)
    }
}
