#![cfg(feature = "serialize")]

use phys2d::{Body, World, WorldConfig, shapes::Shape, math::Vector2};

#[test]
fn test_body_snapshot() {
    let mut world = World::new();
    let id = world
        .add_body(
            Body::new_static(Shape::rectangle(4.0, 2.0), Vector2::new(1.0, 2.0))
                .with_velocity(Vector2::new(0.5, 0.0)),
        )
        .unwrap();

    let json = serde_json::to_string(world.get_body(id).unwrap()).unwrap();
    assert!(json.contains("\"type\":\"rectangle\""));

    let restored: Body = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.id(), id);
    assert!(restored.is_static());
    assert_eq!(restored.get_position(), Vector2::new(1.0, 2.0));
    assert_eq!(restored.get_velocity(), Vector2::new(0.5, 0.0));

    // Snapshots are detached from any world
    assert!(restored.get_world().is_none());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "gravity": { "x": 0.0, "y": 9.81 },
        "air_resistance": 0.0,
        "max_resolution_iterations": 8,
        "split_amount": 6,
        "max_depth": 12,
        "seed": 3
    }"#;

    let config: WorldConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.max_resolution_iterations, 8);
    assert_eq!(config.gravity, Vector2::new(0.0, 9.81));

    let world = World::with_config(config).unwrap();
    assert_eq!(world.get_config().split_amount, 6);
}

#[test]
fn test_body_snapshot_rejects_bad_mass() {
    let body = Body::new_dynamic(Shape::circle(1.0), Vector2::new(1.0, 2.0));
    let json = serde_json::to_string(&body).unwrap();
    assert!(json.contains("\"mass\":1.0"));

    for bad in ["0.0", "-3.0"] {
        let tampered = json.replace("\"mass\":1.0", &format!("\"mass\":{}", bad));
        let err = serde_json::from_str::<Body>(&tampered).unwrap_err();
        assert!(err.to_string().contains("mass"), "unexpected error: {}", err);
    }

    let restored: Body = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.get_mass(), 1.0);
}
