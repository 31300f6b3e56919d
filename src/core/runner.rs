use crate::bodies::Body;
use crate::core::{BodyId, World};
use crate::error::PhysicsError;
use crate::Result;

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How often a running world steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRate {
    /// At most this many steps per second
    Limited(u32),

    /// Step as fast as possible
    Unlimited,
}

impl FrameRate {
    /// Converts a frames per second setting, where zero or a negative value means unlimited
    pub fn from_fps(fps: i32) -> Self {
        if fps <= 0 {
            FrameRate::Unlimited
        } else {
            FrameRate::Limited(fps as u32)
        }
    }

    /// Returns the minimum duration of one frame, if limited
    pub fn frame_duration(&self) -> Option<Duration> {
        match self {
            FrameRate::Limited(fps) => Some(Duration::from_secs_f64(1.0 / f64::from(*fps))),
            FrameRate::Unlimited => None,
        }
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FrameRate::Limited(fps) => write!(f, "{} fps", fps),
            FrameRate::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// Stops a running world from any thread
#[derive(Debug, Clone)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl StopHandle {
    /// Asks the world to stop. The loop exits after its current step.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Returns whether the world is currently running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// A mutation queued for a world from another thread
#[derive(Debug)]
pub enum WorldCommand {
    /// Insert a body
    AddBody(Body),

    /// Remove the body with this id
    RemoveBody(BodyId),

    /// Stop the run loop
    Stop,
}

/// Queues commands that the world applies at the start of its next step
#[derive(Debug, Clone)]
pub struct CommandSender {
    sender: Sender<WorldCommand>,
}

impl CommandSender {
    /// Queues a command
    pub fn send(&self, command: WorldCommand) -> Result<()> {
        self.sender
            .send(command)
            .map_err(|_| PhysicsError::SimulationError("world has been dropped".to_string()))
    }

    /// Queues a body for insertion
    pub fn add_body(&self, body: Body) -> Result<()> {
        self.send(WorldCommand::AddBody(body))
    }

    /// Queues a body for removal
    pub fn remove_body(&self, id: BodyId) -> Result<()> {
        self.send(WorldCommand::RemoveBody(id))
    }

    /// Queues a stop request
    pub fn stop(&self) -> Result<()> {
        self.send(WorldCommand::Stop)
    }
}

impl World {
    /// Steps the world continuously until it is stopped.
    ///
    /// Each step is fed the wall-clock time since the previous one. With a
    /// limited frame rate the loop sleeps out the rest of each frame. Calling
    /// this on a world that is already running does nothing.
    pub fn run(&mut self, frame_rate: FrameRate) {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("can't run world as it is already running");
            return;
        }

        info!(world = ?self.id(), %frame_rate, bodies = self.body_count(), "world running");

        let frame_duration = frame_rate.frame_duration();
        let mut last = Instant::now();
        let mut steps: u64 = 0;

        while self.running.load(Ordering::SeqCst) {
            let frame_start = Instant::now();
            let delta = frame_start.duration_since(last);
            last = frame_start;

            self.step(delta.as_secs_f32());
            steps += 1;

            if let Some(remaining) = frame_duration.and_then(|d| d.checked_sub(frame_start.elapsed())) {
                thread::sleep(remaining);
            }
        }

        info!(world = ?self.id(), steps = steps, time = self.get_time(), "world stopped");
    }

    /// Stops the run loop after its current step
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Returns whether the run loop is active
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Returns a handle that can stop this world from another thread
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Returns a sender for queuing commands from other threads
    pub fn command_sender(&self) -> CommandSender {
        CommandSender {
            sender: self.command_tx.clone(),
        }
    }
}
