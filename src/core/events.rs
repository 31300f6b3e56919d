use crate::core::BodyId;
use crate::Result;
use std::collections::VecDeque;

/// A collision seen from one participating body.
///
/// Every collision produces two events, one for each body, each naming the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    /// The body receiving the notification
    pub body: BodyId,

    /// The body it collided with
    pub other: BodyId,
}

/// Types of body events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEventType {
    /// A body has been added to the world
    Added,

    /// A body has been removed from the world
    Removed,
}

/// An event related to a single body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyEvent {
    /// The type of body event
    pub event_type: BodyEventType,

    /// The body that the event refers to
    pub body: BodyId,
}

/// Events raised by the world itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    /// Bodies were integrated and collision detection is about to run
    BeforeCollisionDetection,

    /// A step has finished
    StepEnd,
}

/// Any event raised by the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsEvent {
    /// A per-body collision notification
    Collision(CollisionEvent),

    /// A body was added or removed
    Body(BodyEvent),

    /// A world lifecycle notification
    World(WorldEvent),
}

/// Receives events from a world after each step.
///
/// Errors are handed back to the caller of [`World::step`](crate::World::step)
/// and never interrupt the step itself.
pub trait EventListener: Send {
    /// Called once for every event raised during a step
    fn on_event(&mut self, event: &PhysicsEvent) -> Result<()>;
}

impl<F> EventListener for F
where
    F: FnMut(&PhysicsEvent) -> Result<()> + Send,
{
    fn on_event(&mut self, event: &PhysicsEvent) -> Result<()> {
        self(event)
    }
}

/// An ordered queue of physics events
#[derive(Debug, Default, Clone)]
pub struct EventQueue {
    events: VecDeque<PhysicsEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Adds a collision event to the queue
    pub fn add_collision_event(&mut self, event: CollisionEvent) {
        self.events.push_back(PhysicsEvent::Collision(event));
    }

    /// Adds a body event to the queue
    pub fn add_body_event(&mut self, event: BodyEvent) {
        self.events.push_back(PhysicsEvent::Body(event));
    }

    /// Adds a world event to the queue
    pub fn add_world_event(&mut self, event: WorldEvent) {
        self.events.push_back(PhysicsEvent::World(event));
    }

    /// Takes the oldest event from the queue
    pub fn next_event(&mut self) -> Option<PhysicsEvent> {
        self.events.pop_front()
    }

    /// Iterates over all queued events in the order they were raised
    pub fn iter(&self) -> impl Iterator<Item = &PhysicsEvent> {
        self.events.iter()
    }

    /// Iterates over the queued collision events
    pub fn collision_events(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.events.iter().filter_map(|e| match e {
            PhysicsEvent::Collision(event) => Some(event),
            _ => None,
        })
    }

    /// Iterates over the queued body events
    pub fn body_events(&self) -> impl Iterator<Item = &BodyEvent> {
        self.events.iter().filter_map(|e| match e {
            PhysicsEvent::Body(event) => Some(event),
            _ => None,
        })
    }

    /// Iterates over the queued world events
    pub fn world_events(&self) -> impl Iterator<Item = &WorldEvent> {
        self.events.iter().filter_map(|e| match e {
            PhysicsEvent::World(event) => Some(event),
            _ => None,
        })
    }

    /// Gets all collision notifications delivered to a specific body
    pub fn get_collision_events_for_body(&self, body: BodyId) -> Vec<&CollisionEvent> {
        self.collision_events()
            .filter(|e| e.body == body)
            .collect()
    }

    /// Returns whether there are any collision events in the queue
    pub fn has_collision_events(&self) -> bool {
        self.collision_events().next().is_some()
    }

    /// Returns the number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drops the `count` oldest events
    pub fn drain_front(&mut self, count: usize) {
        let count = count.min(self.events.len());
        self.events.drain(..count);
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
