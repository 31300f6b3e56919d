use crate::collision::{
    collision_pair::CollisionPair,
    narrow_phase::shapes_collide,
    quadtree::QuadTree,
};
use crate::core::config::{DEFAULT_MAX_DEPTH, DEFAULT_SPLIT_AMOUNT};
use crate::core::{BodyStorage, CollisionEvent, EventQueue};
use crate::math::Aabb;
use crate::Result;

use std::collections::BTreeSet;

/// Finds touching bodies using a quadtree broad phase and exact shape tests.
///
/// Besides the pairs of each pass, the detector keeps the distinct pairs seen
/// since the tick began for the momentum exchange.
#[derive(Debug, Clone)]
pub struct CollisionDetector {
    /// Occupancy threshold handed to every quadtree
    split_amount: usize,

    /// Depth cap handed to every quadtree
    max_depth: usize,

    /// Every distinct pair detected since the tick began, in detection order
    tick_contacts: Vec<CollisionPair>,

    /// Lookup set mirroring `tick_contacts`
    seen: BTreeSet<CollisionPair>,
}

impl CollisionDetector {
    /// Creates a new collision detector, validating the quadtree settings
    pub fn new(split_amount: usize, max_depth: usize) -> Result<Self> {
        // Validate the settings by building an empty tree
        QuadTree::new(Aabb::default(), split_amount, max_depth)?;

        Ok(Self {
            split_amount,
            max_depth,
            tick_contacts: Vec::new(),
            seen: BTreeSet::new(),
        })
    }

    /// Forgets the pairs reported during the previous tick
    pub fn begin_tick(&mut self) {
        self.tick_contacts.clear();
        self.seen.clear();
    }

    /// Returns every distinct pair detected since the tick began
    pub fn tick_contacts(&self) -> &[CollisionPair] {
        &self.tick_contacts
    }

    /// Builds the quadtree the detector would use for the current body positions
    pub fn build_quadtree(&self, bodies: &BodyStorage) -> QuadTree {
        let mut tree = QuadTree::new_unchecked(Aabb::default(), self.split_amount, self.max_depth);
        tree.rebuild(bodies.iter().map(|(_, body)| body));
        tree
    }

    /// Runs one detection pass over all bodies and returns the touching pairs.
    ///
    /// Each body's `colliding_with` set is rebuilt for this pass. Every pair
    /// found raises one collision event per body, on every pass.
    pub fn detect(&mut self, bodies: &mut BodyStorage, events: &mut EventQueue) -> Vec<CollisionPair> {
        for (_, body) in bodies.iter_mut() {
            body.clear_colliding_with();
        }

        let tree = self.build_quadtree(bodies);
        let mut collisions = Vec::new();

        for id in bodies.ids() {
            for other in tree.neighbours(id) {
                let (body, other_body) = match (bodies.get(id), bodies.get(other)) {
                    (Some(body), Some(other_body)) => (body, other_body),
                    _ => continue,
                };

                // Already handled from the other side
                if body.is_colliding_with(other) || other_body.is_colliding_with(id) {
                    continue;
                }

                if !shapes_collide(
                    body.get_shape(),
                    body.get_position(),
                    other_body.get_shape(),
                    other_body.get_position(),
                ) {
                    continue;
                }

                if let Some((a, b)) = bodies.get_pair_mut(id, other) {
                    a.add_colliding_with(other);
                    b.add_colliding_with(id);
                }

                let pair = CollisionPair::new(id, other);
                collisions.push(pair);
                events.add_collision_event(CollisionEvent { body: id, other });
                events.add_collision_event(CollisionEvent { body: other, other: id });

                if self.seen.insert(pair) {
                    self.tick_contacts.push(pair);
                }
            }
        }

        collisions
    }
}

impl Default for CollisionDetector {
    fn default() -> Self {
        Self {
            split_amount: DEFAULT_SPLIT_AMOUNT,
            max_depth: DEFAULT_MAX_DEPTH,
            tick_contacts: Vec::new(),
            seen: BTreeSet::new(),
        }
    }
}
