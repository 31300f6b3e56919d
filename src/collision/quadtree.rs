use crate::bodies::Body;
use crate::collision::narrow_phase::shape_overlaps_region;
use crate::core::BodyId;
use crate::error::PhysicsError;
use crate::math::{Aabb, Vector2};
use crate::shapes::Shape;
use crate::Result;

use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::trace;

const ROOT: usize = 0;

/// A node of the quadtree. Only leaves hold bodies, a split node just routes.
#[derive(Debug, Clone)]
struct QuadTreeNode {
    /// The region covered by the node
    region: Aabb,

    /// Depth of the node, the root is at depth 0
    depth: usize,

    /// Bodies overlapping the region, empty once the node has split
    bodies: BTreeSet<BodyId>,

    /// Top left, top right, bottom left and bottom right children
    children: Option<[usize; 4]>,
}

impl QuadTreeNode {
    fn new(region: Aabb, depth: usize) -> Self {
        Self {
            region,
            depth,
            bodies: BTreeSet::new(),
            children: None,
        }
    }
}

/// Quadtree broad phase.
///
/// The tree is built from scratch for every detection pass and answers which
/// bodies share a leaf with a given body. A body straddling a split boundary
/// lives in several leaves.
#[derive(Debug, Clone)]
pub struct QuadTree {
    /// Node arena, the root is at index 0
    nodes: Vec<QuadTreeNode>,

    /// The number of bodies a leaf may hold before it splits
    split_amount: usize,

    /// Nodes at this depth or deeper never split
    max_depth: usize,

    /// Shape and position of every inserted body
    colliders: HashMap<BodyId, (Shape, Vector2)>,

    /// Leaves each body currently occupies
    body_leaves: HashMap<BodyId, BTreeSet<usize>>,
}

impl QuadTree {
    /// Creates an empty quadtree over `region`.
    ///
    /// A split amount of one or less would split forever and a max depth of
    /// zero leaves no room for the root, both are rejected.
    pub fn new(region: Aabb, split_amount: usize, max_depth: usize) -> Result<Self> {
        if split_amount <= 1 {
            return Err(PhysicsError::InvalidParameter(format!(
                "quadtree split amount must be greater than 1, got {}",
                split_amount
            )));
        }

        if max_depth == 0 {
            return Err(PhysicsError::InvalidParameter(
                "quadtree max depth must be at least 1".to_string(),
            ));
        }

        Ok(Self::new_unchecked(region, split_amount, max_depth))
    }

    /// Creates an empty tree without validating settings already checked by the caller
    pub(crate) fn new_unchecked(region: Aabb, split_amount: usize, max_depth: usize) -> Self {
        Self {
            nodes: vec![QuadTreeNode::new(region, 0)],
            split_amount,
            max_depth,
            colliders: HashMap::new(),
            body_leaves: HashMap::new(),
        }
    }

    /// Builds a quadtree whose region is the smallest box enclosing every body.
    ///
    /// Bodies are tracked by id, so every body must belong to a world and
    /// appear only once.
    pub fn from_bodies<'a, I>(bodies: I, split_amount: usize, max_depth: usize) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Body>,
    {
        let mut tree = Self::new(Aabb::default(), split_amount, max_depth)?;
        let bodies: Vec<&Body> = bodies.into_iter().collect();

        let mut ids = HashSet::with_capacity(bodies.len());
        for body in &bodies {
            check_assigned(body)?;
            if !ids.insert(body.id()) {
                return Err(PhysicsError::DuplicateBody(body.id()));
            }
        }

        tree.rebuild(bodies);
        Ok(tree)
    }

    /// Drops every body and node, resizes the root to enclose the given
    /// bodies and inserts them all
    pub(crate) fn rebuild<'a, I>(&mut self, bodies: I)
    where
        I: IntoIterator<Item = &'a Body>,
    {
        let bodies: Vec<&Body> = bodies.into_iter().collect();

        let region = bodies
            .iter()
            .map(|body| body.get_world_bounds())
            .reduce(|acc, bounds| acc.union(&bounds))
            .unwrap_or_default();

        *self = Self::new_unchecked(region, self.split_amount, self.max_depth);
        for body in bodies {
            self.insert_collider(body);
        }
    }

    /// Inserts a body into every leaf its shape overlaps.
    ///
    /// Fails for a body that was never added to a world, or one whose id is
    /// already in the tree.
    pub fn insert(&mut self, body: &Body) -> Result<()> {
        check_assigned(body)?;
        if self.colliders.contains_key(&body.id()) {
            return Err(PhysicsError::DuplicateBody(body.id()));
        }

        self.insert_collider(body);
        Ok(())
    }

    fn insert_collider(&mut self, body: &Body) {
        let id = body.id();
        self.colliders.insert(id, (*body.get_shape(), body.get_position()));
        self.insert_into(ROOT, id);
    }

    fn insert_into(&mut self, node: usize, id: BodyId) {
        let (shape, position) = match self.colliders.get(&id) {
            Some(collider) => *collider,
            None => return,
        };

        if !shape_overlaps_region(&shape, position, &self.nodes[node].region) {
            return;
        }

        let should_split = {
            let n = &self.nodes[node];
            n.children.is_none()
                && n.bodies.len() + 1 >= self.split_amount
                && n.depth + 1 < self.max_depth
        };
        if should_split && self.split_separates(node, id) {
            self.split(node);
        }

        match self.nodes[node].children {
            Some(children) => {
                for child in children {
                    self.insert_into(child, id);
                }
            }
            None => {
                self.nodes[node].bodies.insert(id);
                self.body_leaves.entry(id).or_default().insert(node);
            }
        }
    }

    /// Returns whether splitting `node` would separate any of its bodies.
    /// When the held bodies and `incoming` all overlap the same quadrants,
    /// every non-empty child would hold all of them again.
    fn split_separates(&self, node: usize, incoming: BodyId) -> bool {
        let quadrants = self.nodes[node].region.quadrants();
        let quadrant_mask = |id: BodyId| {
            self.colliders.get(&id).map(|(shape, position)| {
                quadrants
                    .iter()
                    .enumerate()
                    .filter(|(_, quadrant)| shape_overlaps_region(shape, *position, quadrant))
                    .fold(0u8, |mask, (i, _)| mask | 1 << i)
            })
        };

        let mut masks = self.nodes[node]
            .bodies
            .iter()
            .copied()
            .chain(std::iter::once(incoming))
            .filter_map(quadrant_mask);

        match masks.next() {
            Some(first) => masks.any(|mask| mask != first),
            None => false,
        }
    }

    /// Turns a leaf into a router with four equal children and hands its
    /// bodies down to them
    fn split(&mut self, node: usize) {
        if self.nodes[node].children.is_some() {
            return;
        }

        let depth = self.nodes[node].depth + 1;
        let quadrants = self.nodes[node].region.quadrants();
        let first = self.nodes.len();
        for region in quadrants {
            self.nodes.push(QuadTreeNode::new(region, depth));
        }
        let children = [first, first + 1, first + 2, first + 3];
        self.nodes[node].children = Some(children);

        trace!(node = node, depth = depth, "splitting quadtree node");

        let bodies = std::mem::take(&mut self.nodes[node].bodies);
        for id in bodies {
            if let Some(leaves) = self.body_leaves.get_mut(&id) {
                leaves.remove(&node);
            }

            for child in children {
                self.insert_into(child, id);
            }
        }
    }

    /// Returns every other body sharing at least one leaf with `id`, in id order
    pub fn neighbours(&self, id: BodyId) -> Vec<BodyId> {
        let leaves = match self.body_leaves.get(&id) {
            Some(leaves) => leaves,
            None => return Vec::new(),
        };

        let mut neighbours = BTreeSet::new();
        for &leaf in leaves {
            neighbours.extend(self.nodes[leaf].bodies.iter().copied().filter(|other| *other != id));
        }

        neighbours.into_iter().collect()
    }

    /// Returns the regions of the leaves a body occupies
    pub fn leaves_of(&self, id: BodyId) -> Vec<Aabb> {
        self.body_leaves
            .get(&id)
            .map(|leaves| leaves.iter().map(|&leaf| self.nodes[leaf].region).collect())
            .unwrap_or_default()
    }

    /// Returns the regions of all leaves, useful for debug overlays
    pub fn leaf_regions(&self) -> Vec<Aabb> {
        self.nodes
            .iter()
            .filter(|node| node.children.is_none())
            .map(|node| node.region)
            .collect()
    }

    /// Returns the region covered by the whole tree
    pub fn region(&self) -> Aabb {
        self.nodes[ROOT].region
    }

    /// Returns the depth of the deepest node
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// Returns the number of bodies inserted into the tree
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Returns whether no body was inserted
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Returns the occupancy threshold of the leaves
    pub fn split_amount(&self) -> usize {
        self.split_amount
    }

    /// Returns the depth cap of the tree
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

fn check_assigned(body: &Body) -> Result<()> {
    if body.id().is_assigned() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidParameter(
            "quadtree bodies must be added to a world first".to_string(),
        ))
    }
}
