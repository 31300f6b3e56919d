use crate::bodies::Body;
use crate::collision::collision_pair::CollisionPair;
use crate::core::BodyStorage;
use crate::math::Vector2;
use crate::shapes::Shape;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Pushes overlapping bodies apart along their minimum penetration axis.
///
/// One pass does not guarantee that every overlap is gone, separating one
/// pair can push a body into another. The world alternates resolution and
/// detection up to its iteration cap.
#[derive(Debug, Clone)]
pub struct PositionResolver {
    /// Source of the direction used when two circle centers coincide
    rng: StdRng,
}

impl PositionResolver {
    /// Creates a resolver drawing tie-break directions from `rng`
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Creates a resolver with a seeded random source
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Separates every pair in `collisions`.
    ///
    /// Pairs of two static bodies and pairs involving a sensor are skipped.
    pub fn resolve(&mut self, collisions: &[CollisionPair], bodies: &mut BodyStorage) {
        for pair in collisions {
            let (a, b) = match bodies.get_pair_mut(pair.body_a, pair.body_b) {
                Some(bodies) => bodies,
                None => continue,
            };

            if (a.is_static() && b.is_static()) || a.is_sensor() || b.is_sensor() {
                continue;
            }

            match (*a.get_shape(), *b.get_shape()) {
                (Shape::Circle(ca), Shape::Circle(cb)) => {
                    self.resolve_circle_circle(a, ca.radius, b, cb.radius);
                }
                (Shape::Rectangle(ra), Shape::Rectangle(rb)) => {
                    let overlap = (ra.size + rb.size) * 0.5;
                    resolve_along_axis(a, b, overlap);
                }
                (Shape::Circle(circle), Shape::Rectangle(rect)) => {
                    let overlap = rect.size * 0.5 + Vector2::new(circle.radius, circle.radius);
                    resolve_along_axis(a, b, overlap);
                }
                (Shape::Rectangle(rect), Shape::Circle(circle)) => {
                    let overlap = rect.size * 0.5 + Vector2::new(circle.radius, circle.radius);
                    resolve_along_axis(b, a, overlap);
                }
            }
        }
    }

    fn resolve_circle_circle(&mut self, a: &mut Body, radius_a: f32, b: &mut Body, radius_b: f32) {
        let penetration = radius_a + radius_b - a.get_position().distance(&b.get_position());
        if penetration <= 0.0 {
            return;
        }

        let offset = b.get_position() - a.get_position();
        let direction = if offset.is_zero() {
            let angle = self.rng.gen::<f32>() * TAU;
            Vector2::from_angle(angle, 1.0)
        } else {
            offset.normalize()
        };

        separate(a, b, direction * penetration);
    }
}

impl Default for PositionResolver {
    fn default() -> Self {
        Self::seeded(0)
    }
}

/// Resolves a box-like overlap along the axis with the smaller penetration.
///
/// `reach` is the center distance on each axis at which the shapes just touch.
fn resolve_along_axis(a: &mut Body, b: &mut Body, reach: Vector2) {
    let pa = a.get_position();
    let pb = b.get_position();
    let x_overlap = reach.x - (pa.x - pb.x).abs();
    let y_overlap = reach.y - (pa.y - pb.y).abs();

    // An earlier correction in the same pass may already have separated them
    if x_overlap <= 0.0 || y_overlap <= 0.0 {
        return;
    }

    let push = if x_overlap < y_overlap {
        let sign = if pa.x < pb.x { 1.0 } else { -1.0 };
        Vector2::new(sign * x_overlap, 0.0)
    } else {
        let sign = if pa.y < pb.y { 1.0 } else { -1.0 };
        Vector2::new(0.0, sign * y_overlap)
    };

    separate(a, b, push);
}

/// Moves `b` by `push` and `a` by `-push`, split evenly between two dynamic
/// bodies. A static body stays put and the other one takes the full amount.
fn separate(a: &mut Body, b: &mut Body, push: Vector2) {
    if a.is_static() {
        b.set_position(b.get_position() + push);
    } else if b.is_static() {
        a.set_position(a.get_position() - push);
    } else {
        let half = push * 0.5;
        a.set_position(a.get_position() - half);
        b.set_position(b.get_position() + half);
    }
}
