use crate::core::{
    BodyId, WorldId, WorldConfig, EventQueue, EventListener, BodyEvent, BodyEventType,
    WorldEvent, BodyStorage, WorldCommand,
};
use crate::bodies::Body;
use crate::collision::{CollisionDetector, CollisionPair, MomentumResolver, PositionResolver, QuadTree};
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

use std::sync::atomic::AtomicBool;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use tracing::{debug, warn};

/// Summary of a single call to [`World::step`]
#[derive(Debug, Default)]
pub struct StepReport {
    /// Number of distinct pairs that touched during the step
    pub collisions: usize,

    /// Number of detection passes that ran
    pub detection_passes: u32,

    /// Number of resolve/re-detect passes that ran
    pub resolution_iterations: u32,

    /// Number of pairs still touching after the last detection pass
    pub remaining_collisions: usize,

    /// Queued commands that could not be applied
    pub command_errors: Vec<PhysicsError>,

    /// Errors returned by event listeners
    pub listener_errors: Vec<PhysicsError>,
}

/// The physics world owns every body and advances them through time
pub struct World {
    /// Identity used as the back-reference stored in attached bodies
    id: WorldId,

    /// All bodies in the world
    bodies: BodyStorage,

    /// Configuration for the simulation
    config: WorldConfig,

    /// Broad and narrow phase detection
    detector: CollisionDetector,

    /// Separates overlapping bodies
    position_resolver: PositionResolver,

    /// Exchanges velocities between colliding bodies
    momentum_resolver: MomentumResolver,

    /// Events raised since the previous step
    events: EventQueue,

    /// Number of events at the front of the queue already handed to listeners
    dispatched: usize,

    /// Subscribers invoked once a step has finished
    listeners: Vec<Box<dyn EventListener>>,

    /// The total elapsed simulation time in seconds
    time: f32,

    /// Set while `run` is looping, cleared to stop it
    pub(crate) running: Arc<AtomicBool>,

    /// Commands queued from other threads, drained at the start of every step
    commands: Receiver<WorldCommand>,

    /// Sending side handed out through `command_sender`
    pub(crate) command_tx: Sender<WorldCommand>,
}

impl World {
    /// Creates a new physics world with default settings
    pub fn new() -> Self {
        Self::build(WorldConfig::default(), CollisionDetector::default())
    }

    /// Creates a new physics world with the given configuration.
    ///
    /// Fails when the quadtree settings could never terminate.
    pub fn with_config(config: WorldConfig) -> Result<Self> {
        let detector = CollisionDetector::new(config.split_amount, config.max_depth)?;
        Ok(Self::build(config, detector))
    }

    fn build(config: WorldConfig, detector: CollisionDetector) -> Self {
        let (command_tx, commands) = mpsc::channel();

        Self {
            id: WorldId::next(),
            bodies: BodyStorage::new(),
            position_resolver: PositionResolver::seeded(config.seed),
            momentum_resolver: MomentumResolver::new(),
            config,
            detector,
            events: EventQueue::new(),
            dispatched: 0,
            listeners: Vec::new(),
            time: 0.0,
            running: Arc::new(AtomicBool::new(false)),
            commands,
            command_tx,
        }
    }

    /// Returns the identity of this world
    pub fn id(&self) -> WorldId {
        self.id
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &WorldConfig {
        &self.config
    }

    /// Sets the gravity for the simulation
    pub fn set_gravity(&mut self, gravity: Vector2) {
        self.config.gravity = gravity;
    }

    /// Gets the current gravity
    pub fn get_gravity(&self) -> Vector2 {
        self.config.gravity
    }

    /// Sets the air resistance for the simulation
    pub fn set_air_resistance(&mut self, air_resistance: f32) {
        self.config.air_resistance = air_resistance;
    }

    /// Sets how many resolve/re-detect passes a step may run
    pub fn set_max_resolution_iterations(&mut self, iterations: u32) {
        self.config.max_resolution_iterations = iterations;
    }

    /// Adds a body to the world and returns its newly assigned id.
    ///
    /// Re-inserting a body whose id is already present is a usage error.
    pub fn add_body(&mut self, body: Body) -> Result<BodyId> {
        let id = self.bodies.add(body)?;

        if let Some(body) = self.bodies.get_mut(id) {
            body.set_world(Some(self.id));
        }

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Added,
            body: id,
        });

        Ok(id)
    }

    /// Removes a body from the world. Returns `None` if it is not present.
    ///
    /// The returned body keeps its id but no longer belongs to any world.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let mut body = self.bodies.remove(id)?;
        body.set_world(None);

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Removed,
            body: id,
        });

        Some(body)
    }

    /// Gets a reference to a body by its id
    pub fn get_body(&self, id: BodyId) -> Result<&Body> {
        self.bodies.get_body(id)
    }

    /// Gets a mutable reference to a body by its id
    pub fn get_body_mut(&mut self, id: BodyId) -> Result<&mut Body> {
        self.bodies.get_body_mut(id)
    }

    /// Iterates over all bodies in id order
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().map(|(_, body)| body)
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Registers a listener receiving every event once a step has finished
    pub fn add_listener(&mut self, listener: impl EventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns a reference to the event queue
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns a mutable reference to the event queue
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Builds the quadtree for the current body positions, for debugging overlays
    pub fn quadtree(&self) -> QuadTree {
        self.detector.build_quadtree(&self.bodies)
    }

    /// Runs one detection pass and returns the touching pairs
    pub fn detect_collisions(&mut self) -> Vec<CollisionPair> {
        self.detector.detect(&mut self.bodies, &mut self.events)
    }

    /// Runs one positional resolution pass over `collisions`
    pub fn resolve_positions(&mut self, collisions: &[CollisionPair]) {
        self.position_resolver.resolve(collisions, &mut self.bodies);
    }

    /// Applies the momentum exchange to `collisions`
    pub fn apply_momentum(&mut self, collisions: &[CollisionPair]) {
        self.momentum_resolver.apply(collisions, &mut self.bodies);
    }

    /// Advances the simulation by `delta` seconds.
    ///
    /// Momentum is exchanged once, after positional resolution, for every
    /// distinct pair detected by any pass of this step.
    pub fn step(&mut self, delta: f32) -> StepReport {
        let mut report = StepReport::default();

        // Events delivered by the previous step are done with
        self.events.drain_front(self.dispatched);
        self.dispatched = 0;

        self.apply_commands(&mut report);
        self.detector.begin_tick();

        let gravity = self.config.gravity;
        let air_resistance = self.config.air_resistance;
        for (_, body) in self.bodies.iter_mut() {
            body.clear_colliding_with();
            body.step(delta, gravity, air_resistance);
        }

        self.events.add_world_event(WorldEvent::BeforeCollisionDetection);
        let mut collisions = self.detect_collisions();

        while !collisions.is_empty() && report.resolution_iterations < self.config.max_resolution_iterations {
            self.resolve_positions(&collisions);
            collisions = self.detect_collisions();
            report.resolution_iterations += 1;
        }

        self.momentum_resolver.apply(self.detector.tick_contacts(), &mut self.bodies);

        self.time += delta;
        self.events.add_world_event(WorldEvent::StepEnd);

        report.collisions = self.detector.tick_contacts().len();
        report.detection_passes = report.resolution_iterations + 1;
        report.remaining_collisions = collisions.len();
        report.listener_errors = self.dispatch_events();

        debug!(
            delta = delta,
            bodies = self.bodies.len(),
            collisions = report.collisions,
            passes = report.detection_passes,
            iterations = report.resolution_iterations,
            remaining = report.remaining_collisions,
            "world step finished"
        );

        report
    }

    /// Applies every command queued through a [`CommandSender`](crate::core::CommandSender)
    fn apply_commands(&mut self, report: &mut StepReport) {
        while let Ok(command) = self.commands.try_recv() {
            match command {
                WorldCommand::AddBody(body) => {
                    if let Err(err) = self.add_body(body) {
                        warn!(error = %err, "queued body could not be added");
                        report.command_errors.push(err);
                    }
                }
                WorldCommand::RemoveBody(id) => {
                    if self.remove_body(id).is_none() {
                        debug!(body = %id, "queued removal of a body that is not in the world");
                    }
                }
                WorldCommand::Stop => self.stop(),
            }
        }
    }

    /// Hands every undelivered event to the listeners and collects their errors
    fn dispatch_events(&mut self) -> Vec<PhysicsError> {
        let mut errors = Vec::new();

        for event in self.events.iter().skip(self.dispatched) {
            for listener in self.listeners.iter_mut() {
                if let Err(err) = listener.on_event(event) {
                    warn!(error = %err, ?event, "event listener failed");
                    errors.push(err);
                }
            }
        }

        self.dispatched = self.events.len();
        errors
    }

    /// Clears the world of all bodies and events. Ids are still never reused.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.events.clear();
        self.dispatched = 0;
        self.time = 0.0;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for World {
    /// Deep copies every body with its id into a new, stopped world.
    ///
    /// Listeners and pending events are not carried over.
    fn clone(&self) -> Self {
        let mut world = Self::build(self.config.clone(), self.detector.clone());
        world.position_resolver = self.position_resolver.clone();
        world.time = self.time;
        world.bodies = self.bodies.clone();

        let id = world.id;
        for (_, body) in world.bodies.iter_mut() {
            body.set_world(Some(id));
        }

        world
    }
}
