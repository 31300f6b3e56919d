use crate::bodies::BodyFlags;
use crate::core::{BodyId, WorldId};
use crate::error::PhysicsError;
use crate::math::{Aabb, Vector2};
use crate::shapes::Shape;
use crate::Result;

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A body for physics simulation
///
/// A body is created standalone with an unassigned id and receives a
/// positive id when it is added to a [`World`](crate::World).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Body {
    /// The id of the body inside its world, unassigned until inserted
    id: BodyId,

    /// The body's collision shape
    shape: Shape,

    /// The body's mass, always finite and positive
    #[cfg_attr(feature = "serialize", serde(deserialize_with = "deserialize_mass"))]
    mass: f32,

    /// The center of the body in world space
    position: Vector2,

    /// Velocity in units per second
    velocity: Vector2,

    /// Acceleration in units per second squared
    acceleration: Vector2,

    /// How strongly the world's air resistance affects this body
    drag_coefficient: f32,

    /// The body's flags
    flags: BodyFlags,

    /// Bodies this body touched during the current tick
    #[cfg_attr(feature = "serialize", serde(skip))]
    colliding_with: BTreeSet<BodyId>,

    /// The world this body currently belongs to
    #[cfg_attr(feature = "serialize", serde(skip))]
    world: Option<WorldId>,
}

impl Body {
    /// Creates a new dynamic body with the given shape at the origin
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            id: BodyId::UNASSIGNED,
            shape: shape.into(),
            mass: 1.0,
            position: Vector2::zero(),
            velocity: Vector2::zero(),
            acceleration: Vector2::zero(),
            drag_coefficient: 1.0,
            flags: BodyFlags::empty(),
            colliding_with: BTreeSet::new(),
            world: None,
        }
    }

    /// Creates a new dynamic body with the given shape and position
    pub fn new_dynamic(shape: impl Into<Shape>, position: Vector2) -> Self {
        Self::new(shape).with_position(position)
    }

    /// Creates a new static body with the given shape and position
    pub fn new_static(shape: impl Into<Shape>, position: Vector2) -> Self {
        let mut body = Self::new_dynamic(shape, position);
        body.flags.insert(BodyFlags::STATIC);
        body
    }

    /// Creates a sensor (pass-through) body with the given shape and position
    pub fn new_sensor(shape: impl Into<Shape>, position: Vector2) -> Self {
        let mut body = Self::new_dynamic(shape, position);
        body.flags.insert(BodyFlags::SENSOR);
        body
    }

    /// Sets the position, builder style
    pub fn with_position(mut self, position: Vector2) -> Self {
        self.position = position;
        self
    }

    /// Sets the velocity, builder style
    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the acceleration, builder style
    pub fn with_acceleration(mut self, acceleration: Vector2) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Sets the mass, builder style
    pub fn with_mass(mut self, mass: f32) -> Result<Self> {
        self.set_mass(mass)?;
        Ok(self)
    }

    /// Sets the drag coefficient, builder style
    pub fn with_drag_coefficient(mut self, drag_coefficient: f32) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    /// Returns the id of the body. Unassigned until the body is added to a world.
    pub fn id(&self) -> BodyId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: BodyId) {
        self.id = id;
    }

    /// Returns the world the body is attached to, if any
    pub fn get_world(&self) -> Option<WorldId> {
        self.world
    }

    pub(crate) fn set_world(&mut self, world: Option<WorldId>) {
        self.world = world;
    }

    /// Returns the body's shape
    pub fn get_shape(&self) -> &Shape {
        &self.shape
    }

    /// Sets the body's shape
    pub fn set_shape(&mut self, shape: impl Into<Shape>) {
        self.shape = shape.into();
    }

    /// Returns the bounding box of the body's shape in world space
    pub fn get_world_bounds(&self) -> Aabb {
        self.shape.get_world_bounds(self.position)
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Sets the body's mass. The mass divides the momentum exchange so it
    /// must be finite and positive.
    pub fn set_mass(&mut self, mass: f32) -> Result<()> {
        self.mass = validate_mass(mass)?;
        Ok(())
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Sets the body's position
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Returns the body's velocity
    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the body's velocity
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Returns the body's acceleration
    pub fn get_acceleration(&self) -> Vector2 {
        self.acceleration
    }

    /// Sets the body's acceleration
    pub fn set_acceleration(&mut self, acceleration: Vector2) {
        self.acceleration = acceleration;
    }

    /// Returns the body's drag coefficient
    pub fn get_drag_coefficient(&self) -> f32 {
        self.drag_coefficient
    }

    /// Sets the body's drag coefficient
    pub fn set_drag_coefficient(&mut self, drag_coefficient: f32) {
        self.drag_coefficient = drag_coefficient;
    }

    /// Returns the body's flags
    pub fn get_flags(&self) -> BodyFlags {
        self.flags
    }

    /// Returns whether the body is static
    pub fn is_static(&self) -> bool {
        self.flags.contains(BodyFlags::STATIC)
    }

    /// Marks the body as static or dynamic
    pub fn set_static(&mut self, is_static: bool) {
        self.flags.set(BodyFlags::STATIC, is_static);
    }

    /// Returns whether the body is a sensor
    pub fn is_sensor(&self) -> bool {
        self.flags.contains(BodyFlags::SENSOR)
    }

    /// Marks the body as a sensor or a solid body
    pub fn set_sensor(&mut self, sensor: bool) {
        self.flags.set(BodyFlags::SENSOR, sensor);
    }

    /// Returns whether the body touched `other` during the current tick
    pub fn is_colliding_with(&self, other: BodyId) -> bool {
        self.colliding_with.contains(&other)
    }

    /// Returns the ids of every body touched during the current tick
    pub fn get_colliding_with(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.colliding_with.iter().copied()
    }

    pub(crate) fn add_colliding_with(&mut self, other: BodyId) {
        self.colliding_with.insert(other);
    }

    pub(crate) fn clear_colliding_with(&mut self) {
        self.colliding_with.clear();
    }

    /// Steps the body forward by `delta` seconds.
    ///
    /// Static bodies are never integrated.
    pub fn step(&mut self, delta: f32, gravity: Vector2, air_resistance: f32) {
        if self.is_static() {
            return;
        }

        self.velocity += self.acceleration * delta;

        if !gravity.is_zero() {
            self.velocity += gravity * delta;
        }

        if air_resistance != 0.0 && !self.velocity.is_zero() {
            let resist = self.drag_coefficient * air_resistance * delta;

            // Resistance may slow a body down to rest but never reverse it
            if self.velocity.length_squared() < resist * resist {
                self.velocity = Vector2::zero();
            } else {
                self.velocity -= self.velocity.normalize() * resist;
            }
        }

        self.position += self.velocity * delta;
    }
}

fn validate_mass(mass: f32) -> Result<f32> {
    if mass <= 0.0 || !mass.is_finite() {
        return Err(PhysicsError::InvalidParameter(format!(
            "body mass must be finite and positive, got {}",
            mass
        )));
    }

    Ok(mass)
}

#[cfg(feature = "serialize")]
fn deserialize_mass<'de, D>(deserializer: D) -> std::result::Result<f32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let mass = f32::deserialize(deserializer)?;
    validate_mass(mass).map_err(serde::de::Error::custom)
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{ id: {}, shape: {}, position: {}, velocity: {}, acceleration: {} }}",
            self.id, self.shape, self.position, self.velocity, self.acceleration
        )
    }
}
