pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;

/// Re-export common types for easier usage
pub use crate::core::{World, WorldConfig, BodyId, StepReport, FrameRate};
pub use crate::bodies::{Body, BodyFlags};
pub use crate::shapes::{Shape, Circle, Rectangle};
pub use crate::collision::QuadTree;
pub use crate::math::{Vector2, Aabb};

/// Error types for the physics engine
pub mod error {
    use crate::core::BodyId;
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Body {0} is already in the world")]
        DuplicateBody(BodyId),

        #[error("Event listener failed: {0}")]
        Listener(String),

        #[error("Simulation error: {0}")]
        SimulationError(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
