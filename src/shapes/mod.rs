mod circle;
mod rectangle;

pub use self::circle::Circle;
pub use self::rectangle::Rectangle;

use crate::math::{Aabb, Vector2};
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The tag of a shape, used by the collision dispatch tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A circle
    Circle,

    /// An axis-aligned rectangle
    Rectangle,
}

impl ShapeType {
    /// Returns the name of the shape type
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Circle => "circle",
            ShapeType::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collision shape of a body. The position of the shape is always its center.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(tag = "type", rename_all = "lowercase"))]
pub enum Shape {
    /// A circle shape
    Circle(Circle),

    /// An axis-aligned rectangle shape
    Rectangle(Rectangle),
}

impl Shape {
    /// Creates a circle shape
    pub fn circle(radius: f32) -> Self {
        Shape::Circle(Circle::new(radius))
    }

    /// Creates a rectangle shape from its full width and height
    pub fn rectangle(width: f32, height: f32) -> Self {
        Shape::Rectangle(Rectangle::new_with_dimensions(width, height))
    }

    /// Returns the type tag of the shape
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Rectangle(_) => ShapeType::Rectangle,
        }
    }

    /// Returns the axis-aligned bounding box of the shape in world space
    pub fn get_world_bounds(&self, position: Vector2) -> Aabb {
        match self {
            Shape::Circle(circle) => circle.get_world_bounds(position),
            Shape::Rectangle(rect) => rect.get_world_bounds(position),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Shape::Circle(circle) => circle.fmt(f),
            Shape::Rectangle(rect) => rect.fmt(f),
        }
    }
}
