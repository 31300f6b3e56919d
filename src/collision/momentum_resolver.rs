use crate::collision::collision_pair::CollisionPair;
use crate::core::BodyStorage;
use crate::math::Vector2;

/// Updates velocities after a collision, treating it as perfectly elastic.
#[derive(Debug, Clone, Copy, Default)]
pub struct MomentumResolver;

impl MomentumResolver {
    /// Creates a new momentum resolver
    pub fn new() -> Self {
        Self
    }

    /// Applies the velocity exchange for every pair in `collisions`.
    ///
    /// A dynamic body hitting a static one stops instead of bouncing off.
    pub fn apply(&self, collisions: &[CollisionPair], bodies: &mut BodyStorage) {
        for pair in collisions {
            let (a, b) = match bodies.get_pair_mut(pair.body_a, pair.body_b) {
                Some(bodies) => bodies,
                None => continue,
            };

            if a.is_sensor() || b.is_sensor() || (a.is_static() && b.is_static()) {
                continue;
            }

            // Coincident centers leave no line of impact
            if a.get_position().distance_squared(&b.get_position()) == 0.0 {
                continue;
            }

            if a.is_static() {
                b.set_velocity(Vector2::zero());
            } else if b.is_static() {
                a.set_velocity(Vector2::zero());
            } else {
                let (va, vb) = elastic_exchange(
                    a.get_mass(),
                    a.get_position(),
                    a.get_velocity(),
                    b.get_mass(),
                    b.get_position(),
                    b.get_velocity(),
                );
                a.set_velocity(va);
                b.set_velocity(vb);
            }
        }
    }
}

/// Two dimensional elastic collision of two moving bodies.
///
/// The exchange happens along the line joining the centers. For a head-on
/// impact this reduces to `v1' = v1 (m1 - m2) / (m1 + m2) + v2 2 m2 / (m1 + m2)`.
/// The centers must not coincide.
pub fn elastic_exchange(
    mass_a: f32,
    position_a: Vector2,
    velocity_a: Vector2,
    mass_b: f32,
    position_b: Vector2,
    velocity_b: Vector2,
) -> (Vector2, Vector2) {
    let total_mass = mass_a + mass_b;
    let offset = position_a - position_b;
    let distance_squared = offset.length_squared();

    let factor_a = (velocity_a - velocity_b).dot(&offset) / distance_squared * 2.0 * mass_b / total_mass;
    let factor_b = (velocity_b - velocity_a).dot(&-offset) / distance_squared * 2.0 * mass_a / total_mass;

    (
        velocity_a - offset * factor_a,
        velocity_b + offset * factor_b,
    )
}
