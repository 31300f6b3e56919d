use phys2d::{
    World, Body, BodyId, QuadTree,
    shapes::Shape,
    math::{Aabb, Vector2},
    collision::narrow_phase::shapes_collide,
    error::PhysicsError,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn add(world: &mut World, shape: Shape, x: f32, y: f32) -> BodyId {
    world
        .add_body(Body::new_dynamic(shape, Vector2::new(x, y)))
        .unwrap()
}

#[test]
fn test_quadtree_rejects_bad_settings() {
    let region = Aabb::new(Vector2::zero(), Vector2::new(3000.0, 3000.0));

    assert!(matches!(
        QuadTree::new(region, 1, 20),
        Err(PhysicsError::InvalidParameter(_))
    ));
    assert!(matches!(
        QuadTree::new(region, 0, 20),
        Err(PhysicsError::InvalidParameter(_))
    ));
    assert!(matches!(
        QuadTree::new(region, 5, 0),
        Err(PhysicsError::InvalidParameter(_))
    ));

    let tree = QuadTree::new(region, 2, 2).unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.region(), region);
    assert_eq!(tree.split_amount(), 2);
    assert_eq!(tree.max_depth(), 2);
}

#[test]
fn test_quadtree_insert_into_fixed_region() {
    let mut world = World::new();
    let a = add(&mut world, Shape::circle(4.0), 4.0, 4.0);
    let b = add(&mut world, Shape::circle(4.0), 0.0, 0.0);
    let c = add(&mut world, Shape::circle(4.0), 2000.0, 2000.0);

    let region = Aabb::new(Vector2::zero(), Vector2::new(3000.0, 3000.0));
    let mut tree = QuadTree::new(region, 2, 2).unwrap();
    for body in world.bodies() {
        tree.insert(body).unwrap();
    }

    // The first two share the top left quadrant so only the third splits the root
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.leaf_regions().len(), 4);
    assert_eq!(tree.neighbours(a), vec![b]);
    assert_eq!(tree.neighbours(b), vec![a]);
    assert!(tree.neighbours(c).is_empty());
}

#[test]
fn test_quadtree_rejects_standalone_bodies() {
    let bodies: Vec<Body> = (0..3)
        .map(|i| Body::new_dynamic(Shape::circle(1.0), Vector2::new(i as f32, 0.0)))
        .collect();

    assert!(matches!(
        QuadTree::from_bodies(&bodies, 5, 20),
        Err(PhysicsError::InvalidParameter(_))
    ));

    let region = Aabb::new(Vector2::zero(), Vector2::new(10.0, 10.0));
    let mut tree = QuadTree::new(region, 5, 20).unwrap();
    assert!(matches!(
        tree.insert(&bodies[0]),
        Err(PhysicsError::InvalidParameter(_))
    ));
    assert!(tree.is_empty());
}

#[test]
fn test_quadtree_rejects_duplicate_ids() {
    let mut world = World::new();
    let id = add(&mut world, Shape::circle(1.0), 1.0, 1.0);
    let body = world.get_body(id).unwrap();

    let region = Aabb::new(Vector2::zero(), Vector2::new(10.0, 10.0));
    let mut tree = QuadTree::new(region, 5, 20).unwrap();
    tree.insert(body).unwrap();
    assert!(matches!(tree.insert(body), Err(PhysicsError::DuplicateBody(dup)) if dup == id));
    assert_eq!(tree.len(), 1);

    assert!(matches!(
        QuadTree::from_bodies([body, body], 5, 20),
        Err(PhysicsError::DuplicateBody(_))
    ));
}

#[test]
fn test_quadtree_region_is_minimal() {
    let mut world = World::new();
    add(&mut world, Shape::circle(1.0), 10.0, 10.0);
    add(&mut world, Shape::rectangle(4.0, 2.0), 20.0, 20.0);

    let tree = QuadTree::from_bodies(world.bodies(), 5, 20).unwrap();

    // Does not stretch to include the origin
    assert_eq!(tree.region(), Aabb::new(Vector2::new(9.0, 9.0), Vector2::new(22.0, 21.0)));
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_quadtree_empty() {
    let world = World::new();
    let tree = QuadTree::from_bodies(world.bodies(), 5, 20).unwrap();

    assert!(tree.is_empty());
    assert_eq!(tree.region(), Aabb::default());
    assert!(tree.neighbours(BodyId::UNASSIGNED).is_empty());
}

#[test]
fn test_quadtree_separate_corners() {
    let mut world = World::new();
    let ids = [
        add(&mut world, Shape::circle(1.0), 0.0, 0.0),
        add(&mut world, Shape::circle(1.0), 100.0, 0.0),
        add(&mut world, Shape::circle(1.0), 0.0, 100.0),
        add(&mut world, Shape::circle(1.0), 100.0, 100.0),
    ];

    let tree = QuadTree::from_bodies(world.bodies(), 2, 3).unwrap();

    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.leaf_regions().len(), 4);
    for id in ids {
        assert!(tree.neighbours(id).is_empty());
        assert_eq!(tree.leaves_of(id).len(), 1);
    }

    // The first body sits in the top left quadrant
    let [top_left, ..] = tree.region().quadrants();
    assert_eq!(tree.leaves_of(ids[0]), vec![top_left]);
}

#[test]
fn test_quadtree_straddling_body_in_several_leaves() {
    let mut world = World::new();
    add(&mut world, Shape::circle(1.0), 0.0, 0.0);
    add(&mut world, Shape::circle(1.0), 100.0, 100.0);
    let middle = add(&mut world, Shape::circle(5.0), 50.0, 50.0);

    let tree = QuadTree::from_bodies(world.bodies(), 2, 2).unwrap();

    assert_eq!(tree.leaves_of(middle).len(), 4);
    assert_eq!(tree.neighbours(middle).len(), 2);
}

#[test]
fn test_quadtree_coincident_bodies_do_not_split() {
    let mut world = World::new();
    let ids: Vec<BodyId> = (0..8).map(|_| add(&mut world, Shape::circle(1.0), 3.0, 3.0)).collect();

    let tree = QuadTree::from_bodies(world.bodies(), 5, 20).unwrap();

    // A split could never tell them apart
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.leaf_regions().len(), 1);
    assert_eq!(tree.neighbours(ids[0]).len(), 7);
}

#[test]
fn test_quadtree_coincident_cluster_among_spread_bodies() {
    let mut world = World::new();
    for (x, y) in [(-500.0, -500.0), (500.0, -500.0), (-500.0, 500.0), (500.0, 500.0)] {
        add(&mut world, Shape::circle(1.0), x, y);
    }
    let cluster: Vec<BodyId> = (0..6).map(|_| add(&mut world, Shape::circle(1.0), 123.0, 77.0)).collect();

    let tree = QuadTree::from_bodies(world.bodies(), 5, 20).unwrap();

    // The cluster is split away from the corner body once, then its leaf
    // stops splitting even though it holds more than the split amount
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.leaf_regions().len(), 7);
    let leaf = tree.leaves_of(cluster[0]);
    for id in &cluster {
        assert_eq!(tree.leaves_of(*id), leaf);
        assert_eq!(tree.neighbours(*id).len(), 5);
    }
}

#[test]
fn test_step_with_coincident_bodies_finishes() {
    let mut world = World::new();
    let ids: Vec<BodyId> = (0..5).map(|_| add(&mut world, Shape::circle(1.0), 3.0, 3.0)).collect();

    let report = world.step(0.016);

    assert_eq!(report.collisions, 10);
    assert!(report.detection_passes >= 1);

    // The tie-break pushed them away from the shared center
    let moved = ids
        .iter()
        .filter(|id| world.get_body(**id).unwrap().get_position() != Vector2::new(3.0, 3.0))
        .count();
    assert!(moved >= 4);
}

#[test]
fn test_quadtree_huge_overlapping_bodies_terminate() {
    let mut world = World::new();
    let b1 = add(&mut world, Shape::circle(30.0), 15.342564, 25.779948);
    let b2 = add(&mut world, Shape::rectangle(2500.0, 2500.0), 15.342564, 25.779948);
    add(&mut world, Shape::circle(30.0), -15.342564, -25.779948);
    let b4 = add(&mut world, Shape::rectangle(2500.0, 2500.0), -15.342564, -25.779948);
    add(&mut world, Shape::rectangle(2500.0, 2500.0), 0.0, 0.0);

    let tree = QuadTree::from_bodies(world.bodies(), 4, 20).unwrap();

    assert_eq!(tree.len(), 5);
    assert!(tree.depth() < 20);
    assert!(tree.neighbours(b2).contains(&b4));
    assert!(tree.neighbours(b1).contains(&b2));
}

#[test]
fn test_quadtree_neighbours_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut world = World::new();

    for _ in 0..80 {
        let shape = if rng.gen_bool(0.5) {
            Shape::circle(rng.gen_range(1.0..8.0))
        } else {
            Shape::rectangle(rng.gen_range(1.0..16.0), rng.gen_range(1.0..16.0))
        };
        add(&mut world, shape, rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
    }

    let tree = QuadTree::from_bodies(world.bodies(), 3, 8).unwrap();
    let bodies: Vec<&Body> = world.bodies().collect();
    assert!(tree.depth() > 0);

    for a in &bodies {
        let leaves = tree.leaves_of(a.id());
        assert!(!leaves.is_empty(), "body {} is in no leaf", a.id());

        let expected: Vec<BodyId> = bodies
            .iter()
            .filter(|b| b.id() != a.id())
            .filter(|b| tree.leaves_of(b.id()).iter().any(|leaf| leaves.contains(leaf)))
            .map(|b| b.id())
            .collect();
        assert_eq!(tree.neighbours(a.id()), expected, "neighbours of {}", a.id());

        // Touching bodies always share a leaf
        for b in &bodies {
            if b.id() != a.id()
                && shapes_collide(a.get_shape(), a.get_position(), b.get_shape(), b.get_position())
            {
                assert!(
                    expected.contains(&b.id()),
                    "bodies {} and {} touch but share no leaf",
                    a.id(),
                    b.id()
                );
            }
        }
    }
}
