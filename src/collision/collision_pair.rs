use crate::core::BodyId;

/// An unordered pair of bodies found to be touching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    /// The body with the smaller id
    pub body_a: BodyId,

    /// The body with the larger id
    pub body_b: BodyId,
}

impl CollisionPair {
    /// Creates a new collision pair
    pub fn new(body_a: BodyId, body_b: BodyId) -> Self {
        // Always sort the ids so (a, b) and (b, a) are the same pair
        if body_a <= body_b {
            Self { body_a, body_b }
        } else {
            Self { body_a: body_b, body_b: body_a }
        }
    }

    /// Checks if this collision pair contains the specified body
    pub fn contains(&self, body: BodyId) -> bool {
        self.body_a == body || self.body_b == body
    }

    /// Returns the other body in the pair
    pub fn other(&self, body: BodyId) -> Option<BodyId> {
        if self.body_a == body {
            Some(self.body_b)
        } else if self.body_b == body {
            Some(self.body_a)
        } else {
            None
        }
    }
}
