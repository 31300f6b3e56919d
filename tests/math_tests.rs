use phys2d::math::{Aabb, Vector2};
use std::f32::consts::PI;
use approx::assert_relative_eq;

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(4.0, 6.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum, Vector2::new(5.0, 8.0));

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff, Vector2::new(3.0, 4.0));

    // Scalar multiplication from both sides
    assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(2.0 * v1, Vector2::new(2.0, 4.0));
    assert_eq!(v1.scale(3.0), Vector2::new(3.0, 6.0));

    // Element wise multiplication
    assert_eq!(v1.element_mul(&v2), Vector2::new(4.0, 12.0));

    // Division and negation
    assert_eq!(v2 / 2.0, Vector2::new(2.0, 3.0));
    assert_eq!(-v1, Vector2::new(-1.0, -2.0));

    // Dot product
    assert_eq!(v1.dot(&v2), 1.0 * 4.0 + 2.0 * 6.0);

    // Length
    assert_relative_eq!(diff.length(), 5.0);
    assert_relative_eq!(diff.length_squared(), 25.0);

    // Distance
    assert_relative_eq!(v1.distance(&v2), 5.0);
    assert_relative_eq!(v1.distance_squared(&v2), 25.0);

    // Compound assignment
    let mut v = v1;
    v += v2;
    v -= Vector2::new(1.0, 1.0);
    v *= 2.0;
    assert_eq!(v, Vector2::new(8.0, 14.0));
}

#[test]
fn test_vector2_normalize() {
    let n = Vector2::new(3.0, 4.0).normalize();
    assert_relative_eq!(n.x, 0.6);
    assert_relative_eq!(n.y, 0.8);
    assert_relative_eq!(n.length(), 1.0);

    // The zero vector has no direction
    let zero = Vector2::zero();
    assert!(zero.is_zero());
    let n = zero.normalize();
    assert!(n.x.is_nan() && n.y.is_nan());
}

#[test]
fn test_vector2_from_angle() {
    let v = Vector2::from_angle(PI / 2.0, 2.0);
    assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(v.y, 2.0);

    let v = Vector2::from_angle(PI, 1.0);
    assert_relative_eq!(v.x, -1.0);
    assert_relative_eq!(v.y, 0.0, epsilon = 1e-6);
}

#[test]
fn test_vector2_midpoint_and_clamp() {
    let mid = Vector2::midpoint(Vector2::new(-2.0, 4.0), Vector2::new(2.0, 8.0));
    assert_eq!(mid, Vector2::new(0.0, 6.0));

    let bounds = Aabb::new(Vector2::new(-1.0, -1.0), Vector2::new(1.0, 1.0));
    assert_eq!(Vector2::new(5.0, 0.5).clamp(&bounds), Vector2::new(1.0, 0.5));
    assert_eq!(Vector2::new(-5.0, -5.0).clamp(&bounds), Vector2::new(-1.0, -1.0));
}

#[test]
fn test_vector2_conversions() {
    let v = Vector2::new(1.5, -2.5);

    let na_vec = v.to_nalgebra();
    assert_eq!(na_vec.x, 1.5);
    assert_eq!(na_vec.y, -2.5);
    assert_eq!(Vector2::from_nalgebra(&na_vec), v);

    let na_vec: nalgebra::Vector2<f32> = v.into();
    assert_eq!(Vector2::from(na_vec), v);

    let array: [f32; 2] = v.into();
    assert_eq!(array, [1.5, -2.5]);
    assert_eq!(Vector2::from([1.5, -2.5]), v);

    assert_eq!(v.to_string(), "(1.5, -2.5)");
}

#[test]
fn test_aabb() {
    let aabb = Aabb::from_center_size(Vector2::new(1.0, 1.0), Vector2::new(4.0, 2.0));
    assert_eq!(aabb.min, Vector2::new(-1.0, 0.0));
    assert_eq!(aabb.max, Vector2::new(3.0, 2.0));
    assert_eq!(aabb.center(), Vector2::new(1.0, 1.0));
    assert_eq!(aabb.size(), Vector2::new(4.0, 2.0));
    assert_eq!(aabb.to_size_position(), (Vector2::new(4.0, 2.0), Vector2::new(1.0, 1.0)));

    // Boundaries are inclusive
    assert!(aabb.contains_point(Vector2::new(3.0, 2.0)));
    assert!(!aabb.contains_point(Vector2::new(3.1, 2.0)));

    let touching = Aabb::new(Vector2::new(3.0, 0.0), Vector2::new(5.0, 1.0));
    let apart = Aabb::new(Vector2::new(3.5, 0.0), Vector2::new(5.0, 1.0));
    assert!(aabb.intersects(&touching));
    assert!(!aabb.intersects(&apart));

    let union = aabb.union(&apart);
    assert_eq!(union.min, Vector2::new(-1.0, 0.0));
    assert_eq!(union.max, Vector2::new(5.0, 2.0));
}

#[test]
fn test_aabb_quadrants() {
    let aabb = Aabb::new(Vector2::new(0.0, 0.0), Vector2::new(4.0, 2.0));
    let [top_left, top_right, bottom_left, bottom_right] = aabb.quadrants();

    assert_eq!(top_left, Aabb::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 1.0)));
    assert_eq!(top_right, Aabb::new(Vector2::new(2.0, 0.0), Vector2::new(4.0, 1.0)));
    assert_eq!(bottom_left, Aabb::new(Vector2::new(0.0, 1.0), Vector2::new(2.0, 2.0)));
    assert_eq!(bottom_right, Aabb::new(Vector2::new(2.0, 1.0), Vector2::new(4.0, 2.0)));
}
