use phys2d::{
    core::{PhysicsEvent, CollisionEvent},
    math::Vector2, shapes::Shape, Body, World, WorldConfig,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

// Simple ASCII visualization of balls falling onto a floor.
// Screen coordinates: x grows to the right, y grows downwards.
fn main() -> phys2d::Result<()> {
    let width = 80;
    let height = 24;

    let config = WorldConfig::default()
        .with_gravity(Vector2::new(0.0, 20.0))
        .with_air_resistance(0.5);
    let mut world = World::with_config(config)?;

    // Floor and walls
    world.add_body(Body::new_static(
        Shape::rectangle(width as f32, 2.0),
        Vector2::new(width as f32 / 2.0, height as f32),
    ))?;
    world.add_body(Body::new_static(
        Shape::rectangle(2.0, height as f32 * 2.0),
        Vector2::new(-1.0, height as f32 / 2.0),
    ))?;
    world.add_body(Body::new_static(
        Shape::rectangle(2.0, height as f32 * 2.0),
        Vector2::new(width as f32, height as f32 / 2.0),
    ))?;

    // Balls
    let mut balls = Vec::new();
    for i in 0..6 {
        let x = 8.0 + i as f32 * 12.0;
        let y = 2.0 + (i % 3) as f32 * 3.0;
        let vx = (i as f32 * 2.0) - 5.0;

        let ball = Body::new_dynamic(Shape::circle(1.0), Vector2::new(x, y))
            .with_velocity(Vector2::new(vx, 0.0))
            .with_mass(1.0 + i as f32 * 0.5)?;
        balls.push(world.add_body(ball)?);
    }

    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    world.add_listener(move |event: &PhysicsEvent| -> phys2d::Result<()> {
        if let PhysicsEvent::Collision(CollisionEvent { .. }) = event {
            counter.fetch_add(1, Ordering::Relaxed);
        }
        Ok(())
    });

    let frame_time = 1.0 / 30.0;
    for frame in 0..300 {
        let report = world.step(frame_time);

        // Clear screen
        print!("\x1B[2J\x1B[1;1H");

        let mut grid = vec![vec![' '; width]; height];
        for x in 0..width {
            grid[height - 1][x] = '=';
        }

        for (i, id) in balls.iter().enumerate() {
            let ball = world.get_body(*id)?;
            let pos = ball.get_position();
            let vel = ball.get_velocity();

            if pos.x >= 0.0 && pos.y >= 0.0 {
                let grid_x = pos.x.round() as usize;
                let grid_y = pos.y.round() as usize;

                if grid_x < width && grid_y < height - 1 {
                    grid[grid_y][grid_x] = if vel.length() > 8.0 { '@' } else { 'o' };
                }
            }

            println!("Ball {}: pos={} vel=({:.1},{:.1})", i + 1, pos, vel.x, vel.y);
        }

        for row in &grid {
            let line: String = row.iter().collect();
            println!("{}", line);
        }

        println!(
            "frame {} collisions {} passes {} total hits {}",
            frame,
            report.collisions,
            report.resolution_iterations,
            hits.load(Ordering::Relaxed)
        );

        sleep(Duration::from_millis((frame_time * 1000.0) as u64));
    }

    Ok(())
}
