use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use phys2d::{math::Vector2, shapes::Shape, Body, QuadTree, World, WorldConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn populated_world(count: usize) -> World {
    let mut rng = StdRng::seed_from_u64(1);
    let config = WorldConfig::default().with_gravity(Vector2::new(0.0, 9.81));
    let mut world = World::with_config(config).unwrap();

    for _ in 0..count {
        let shape = if rng.gen_bool(0.5) {
            Shape::circle(rng.gen_range(0.5..2.0))
        } else {
            Shape::rectangle(rng.gen_range(1.0..4.0), rng.gen_range(1.0..4.0))
        };
        let body = Body::new_dynamic(
            shape,
            Vector2::new(rng.gen_range(0.0..200.0), rng.gen_range(0.0..200.0)),
        )
        .with_velocity(Vector2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)));
        world.add_body(body).unwrap();
    }

    world
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_step");
    for count in [100, 500, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut world = populated_world(count);
            b.iter(|| world.step(black_box(1.0 / 60.0)));
        });
    }
    group.finish();
}

fn bench_quadtree(c: &mut Criterion) {
    let world = populated_world(1000);
    c.bench_function("quadtree_build_1000", |b| {
        b.iter(|| QuadTree::from_bodies(black_box(world.bodies()), 5, 20).unwrap())
    });
}

criterion_group!(benches, bench_step, bench_quadtree);
criterion_main!(benches);
