use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The default occupancy at which a quadtree leaf splits
pub const DEFAULT_SPLIT_AMOUNT: usize = 5;

/// The default depth past which quadtree nodes stop splitting
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Configuration parameters for the physics world
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct WorldConfig {
    /// Constant acceleration applied to every dynamic body
    pub gravity: Vector2,

    /// Magnitude of the deceleration applied to every moving body each
    /// second, scaled by the body's drag coefficient
    pub air_resistance: f32,

    /// The maximum number of resolve/re-detect passes in one step
    pub max_resolution_iterations: u32,

    /// The number of bodies a quadtree leaf holds before splitting, must be greater than one
    pub split_amount: usize,

    /// The quadtree depth past which nodes keep accepting bodies without splitting
    pub max_depth: usize,

    /// Seed of the random source used to separate bodies with coincident centers
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vector2::zero(),
            air_resistance: 10.0,
            max_resolution_iterations: 5,
            split_amount: DEFAULT_SPLIT_AMOUNT,
            max_depth: DEFAULT_MAX_DEPTH,
            seed: 0,
        }
    }
}

impl WorldConfig {
    /// Sets the gravity
    pub fn with_gravity(mut self, gravity: Vector2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sets the air resistance
    pub fn with_air_resistance(mut self, air_resistance: f32) -> Self {
        self.air_resistance = air_resistance;
        self
    }

    /// Sets the resolution iteration cap
    pub fn with_max_resolution_iterations(mut self, iterations: u32) -> Self {
        self.max_resolution_iterations = iterations;
        self
    }

    /// Sets the quadtree split amount and maximum depth
    pub fn with_quadtree(mut self, split_amount: usize, max_depth: usize) -> Self {
        self.split_amount = split_amount;
        self.max_depth = max_depth;
        self
    }

    /// Sets the seed of the resolution random source
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
