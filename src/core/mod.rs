pub mod world;
pub mod config;
pub mod storage;
pub mod events;
pub mod runner;

pub use self::world::{World, StepReport};
pub use self::config::WorldConfig;
pub use self::storage::BodyStorage;
pub use self::events::{EventQueue, EventListener, PhysicsEvent, CollisionEvent, BodyEvent, BodyEventType, WorldEvent};
pub use self::runner::{FrameRate, StopHandle, CommandSender, WorldCommand};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A unique identifier for a body in the physics world.
///
/// Id `0` is never handed out and marks a body that has not been inserted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(transparent))]
pub struct BodyId(pub(crate) u32);

impl BodyId {
    /// The id of a body that is not part of any world
    pub const UNASSIGNED: BodyId = BodyId(0);

    /// Returns the raw integer value of the id
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Returns whether the id was assigned by a world
    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a world instance. Bodies keep it as their back-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldId(u64);

impl WorldId {
    pub(crate) fn next() -> Self {
        static NEXT_WORLD_ID: AtomicU64 = AtomicU64::new(1);
        WorldId(NEXT_WORLD_ID.fetch_add(1, Ordering::Relaxed))
    }
}
