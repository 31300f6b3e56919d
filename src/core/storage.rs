use std::collections::BTreeMap;
use crate::bodies::Body;
use crate::core::BodyId;
use crate::error::PhysicsError;
use crate::Result;

/// Arena of bodies keyed by id.
///
/// Ids are handed out monotonically and never reused. Iteration is ordered
/// by id so a simulation replays identically for identical inputs.
#[derive(Debug, Clone)]
pub struct BodyStorage {
    items: BTreeMap<BodyId, Body>,
    next_id: u32,
}

impl Default for BodyStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyStorage {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1, // Start at 1, so 0 can represent an unassigned body
        }
    }

    /// Adds a body to the storage, assigns it a fresh id and returns that id
    pub fn add(&mut self, mut body: Body) -> Result<BodyId> {
        if self.items.contains_key(&body.id()) {
            return Err(PhysicsError::DuplicateBody(body.id()));
        }

        let id = BodyId(self.next_id);
        self.next_id += 1;
        body.set_id(id);
        self.items.insert(id, body);
        Ok(id)
    }

    /// Gets a reference to a body by its id
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.items.get(&id)
    }

    /// Gets a mutable reference to a body by its id
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.items.get_mut(&id)
    }

    /// Gets a body by its id, returning an error if not found
    pub fn get_body(&self, id: BodyId) -> Result<&Body> {
        self.get(id)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with id {} not found", id)))
    }

    /// Gets a mutable reference to a body by its id, returning an error if not found
    pub fn get_body_mut(&mut self, id: BodyId) -> Result<&mut Body> {
        self.get_mut(id)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with id {} not found", id)))
    }

    /// Gets mutable references to two distinct bodies at once
    pub fn get_pair_mut(&mut self, a: BodyId, b: BodyId) -> Option<(&mut Body, &mut Body)> {
        if a == b {
            return None;
        }

        let (low, high) = if a < b { (a, b) } else { (b, a) };

        // Both ends of the range are distinct entries
        let mut range = self.items.range_mut(low..=high);
        let (first_id, first) = range.next()?;
        let (last_id, last) = range.next_back()?;
        if *first_id != low || *last_id != high {
            return None;
        }

        if a < b {
            Some((first, last))
        } else {
            Some((last, first))
        }
    }

    /// Removes a body from the storage
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        self.items.remove(&id)
    }

    /// Returns whether a body with the given id is stored
    pub fn contains(&self, id: BodyId) -> bool {
        self.items.contains_key(&id)
    }

    /// Returns the number of bodies in the storage
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all bodies from the storage. Ids are still never reused.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns all ids in ascending order
    pub fn ids(&self) -> Vec<BodyId> {
        self.items.keys().copied().collect()
    }

    /// Returns an iterator over all bodies in id order
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.items.iter().map(|(id, body)| (*id, body))
    }

    /// Returns a mutable iterator over all bodies in id order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyId, &mut Body)> + '_ {
        self.items.iter_mut().map(|(id, body)| (*id, body))
    }
}
