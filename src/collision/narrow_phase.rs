//! Exact overlap tests between pairs of shapes.
//!
//! All tests are inclusive: shapes that only touch on their boundary collide.

use crate::math::{Aabb, Vector2};
use crate::shapes::{Rectangle, Shape};

/// Returns whether two circles overlap
pub fn circle_circle(
    radius_a: f32,
    position_a: Vector2,
    radius_b: f32,
    position_b: Vector2,
) -> bool {
    position_a.distance(&position_b) <= radius_a + radius_b
}

/// Returns whether two axis-aligned rectangles overlap.
///
/// Sizes are full extents and positions are centers.
pub fn rectangle_rectangle(
    size_a: Vector2,
    position_a: Vector2,
    size_b: Vector2,
    position_b: Vector2,
) -> bool {
    let a = Aabb::from_center_size(position_a, size_a);
    let b = Aabb::from_center_size(position_b, size_b);

    a.intersects(&b)
}

/// Returns whether a circle and an axis-aligned rectangle overlap
pub fn circle_rectangle(
    radius: f32,
    circle_position: Vector2,
    rect_size: Vector2,
    rect_position: Vector2,
) -> bool {
    let dist = Vector2::new(
        (circle_position.x - rect_position.x).abs(),
        (circle_position.y - rect_position.y).abs(),
    );
    let half = rect_size * 0.5;

    if dist.x > half.x + radius || dist.y > half.y + radius {
        return false;
    }

    if dist.x <= half.x || dist.y <= half.y {
        return true;
    }

    // Only the corner region is left
    dist.distance_squared(&half) <= radius * radius
}

/// Dispatches the overlap test on the shape pair
pub fn shapes_collide(
    shape_a: &Shape,
    position_a: Vector2,
    shape_b: &Shape,
    position_b: Vector2,
) -> bool {
    match (shape_a, shape_b) {
        (Shape::Circle(a), Shape::Circle(b)) => {
            circle_circle(a.radius, position_a, b.radius, position_b)
        }
        (Shape::Rectangle(a), Shape::Rectangle(b)) => {
            rectangle_rectangle(a.size, position_a, b.size, position_b)
        }
        (Shape::Circle(circle), Shape::Rectangle(rect)) => {
            circle_rectangle(circle.radius, position_a, rect.size, position_b)
        }
        (Shape::Rectangle(rect), Shape::Circle(circle)) => {
            circle_rectangle(circle.radius, position_b, rect.size, position_a)
        }
    }
}

/// Returns whether a shape placed at `position` overlaps a region of space
pub fn shape_overlaps_region(shape: &Shape, position: Vector2, region: &Aabb) -> bool {
    let (region_size, region_position) = region.to_size_position();
    let region_shape = Shape::Rectangle(Rectangle::new(region_size));

    shapes_collide(shape, position, &region_shape, region_position)
}
