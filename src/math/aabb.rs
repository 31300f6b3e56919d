use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-Aligned Bounding Box (AABB) in the plane
///
/// `min` is the top left corner and `max` the bottom right corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner of the AABB
    pub min: Vector2,

    /// Maximum corner of the AABB
    pub max: Vector2,
}

impl Aabb {
    /// Creates a new AABB from minimum and maximum points
    #[inline]
    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    /// Creates an AABB centered at a position with the given full size
    #[inline]
    pub fn from_center_size(center: Vector2, size: Vector2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Returns the center of the AABB
    #[inline]
    pub fn center(&self) -> Vector2 {
        self.min + self.size() * 0.5
    }

    /// Returns the full width and height of the AABB
    #[inline]
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }

    /// Returns the size and center of the AABB, in that order
    #[inline]
    pub fn to_size_position(&self) -> (Vector2, Vector2) {
        (self.size(), self.center())
    }

    /// Checks if this AABB contains a point (boundaries included)
    #[inline]
    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y
    }

    /// Checks if this AABB intersects with another AABB (touching counts)
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y
    }

    /// Returns the smallest AABB enclosing both boxes
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Vector2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vector2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Splits the box into its four equal quadrants.
    ///
    /// The order is top left, top right, bottom left, bottom right.
    pub fn quadrants(&self) -> [Aabb; 4] {
        let half = self.size() * 0.5;
        let mid = self.min + half;

        [
            Aabb::new(self.min, mid),
            Aabb::new(Vector2::new(mid.x, self.min.y), Vector2::new(self.max.x, mid.y)),
            Aabb::new(Vector2::new(self.min.x, mid.y), Vector2::new(mid.x, self.max.y)),
            Aabb::new(mid, self.max),
        ]
    }
}
