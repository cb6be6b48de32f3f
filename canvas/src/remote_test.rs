use super::*;

fn player(key: &str, x: f64, y: f64, z: f64) -> PlayerRecord {
    PlayerRecord { key: key.into(), x, y, z }
}

fn triangle(id: &str) -> CreateShape {
    CreateShape {
        shape_id: id.into(),
        points: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0]],
        position: [0.0, 0.01, 0.0],
        rotation: [0.0, 0.0, 0.0],
    }
}

#[test]
fn add_player_creates_one_box_at_reported_position() {
    let mut scene = Scene::stage();
    let mut remote = RemoteEntities::new();
    let id = remote.add_player(&mut scene, &player("p1", 2.0, 0.0, 3.0));

    assert_eq!(remote.len(), 1);
    let entity = remote.get("p1").expect("p1");
    assert_eq!(entity.kind, EntityKind::Player);
    assert_eq!(entity.position, Vec3::new(2.0, 0.0, 3.0));

    let mesh = scene.get(&id).expect("mesh");
    assert_eq!(mesh.name, "player_p1");
    assert_eq!(mesh.kind, MeshKind::Box);
    assert_eq!(mesh.position, Vec3::new(2.0, 0.0, 3.0));
    assert!(!mesh.pickable);
    assert_eq!(scene.len(), 2);
}

#[test]
fn duplicate_add_refreshes_without_second_mesh() {
    let mut scene = Scene::stage();
    let mut remote = RemoteEntities::new();
    let first = remote.add_player(&mut scene, &player("p1", 2.0, 0.0, 3.0));
    let second = remote.add_player(&mut scene, &player("p1", 5.0, 0.0, 5.0));

    assert_eq!(first, second);
    assert_eq!(remote.len(), 1);
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.get(&first).expect("mesh").position, Vec3::new(5.0, 0.0, 5.0));
}

#[test]
fn apply_move_updates_entity_and_mesh_in_place() {
    let mut scene = Scene::stage();
    let mut remote = RemoteEntities::new();
    let id = remote.add_player(&mut scene, &player("p1", 2.0, 0.0, 3.0));

    let moved = remote.apply_move(&mut scene, "p1", Vec3::new(4.0, 0.0, 1.0), Vec3::new(0.0, 1.5, 0.0));
    assert!(moved);
    assert_eq!(remote.len(), 1);
    let entity = remote.get("p1").expect("p1");
    assert_eq!(entity.position, Vec3::new(4.0, 0.0, 1.0));
    assert_eq!(entity.rotation, Vec3::new(0.0, 1.5, 0.0));
    let mesh = scene.get(&id).expect("mesh");
    assert_eq!(mesh.position, Vec3::new(4.0, 0.0, 1.0));
    assert_eq!(mesh.rotation, Vec3::new(0.0, 1.5, 0.0));
}

#[test]
fn apply_move_for_unknown_key_changes_nothing() {
    let mut scene = Scene::stage();
    let mut remote = RemoteEntities::new();
    remote.add_player(&mut scene, &player("p1", 2.0, 0.0, 3.0));

    let moved = remote.apply_move(&mut scene, "ghost", Vec3::new(9.0, 9.0, 9.0), Vec3::ZERO);
    assert!(!moved);
    assert_eq!(remote.len(), 1);
    assert!(!remote.contains("ghost"));
    assert_eq!(remote.get("p1").expect("p1").position, Vec3::new(2.0, 0.0, 3.0));
    assert_eq!(scene.len(), 2);
}

#[test]
fn add_shape_extrudes_remote_polyline() {
    let mut scene = Scene::stage();
    let mut remote = RemoteEntities::new();
    let id = remote.add_shape(&mut scene, &triangle("s1"));

    let entity = remote.get("s1").expect("s1");
    assert_eq!(entity.kind, EntityKind::Shape);
    let mesh = scene.get(&id).expect("mesh");
    assert_eq!(mesh.kind, MeshKind::Extruded);
    assert_eq!(mesh.position, Vec3::new(0.0, 0.01, 0.0));
    assert!(!mesh.geometry.is_empty());
}

#[test]
fn remove_releases_mesh() {
    let mut scene = Scene::stage();
    let mut remote = RemoteEntities::new();
    let id = remote.add_player(&mut scene, &player("p1", 0.0, 0.0, 0.0));

    let removed = remote.remove(&mut scene, "p1").expect("removed");
    assert_eq!(removed.mesh, id);
    assert!(remote.is_empty());
    assert!(scene.get(&id).is_none());
    assert!(remote.remove(&mut scene, "p1").is_none());
}

#[test]
fn clear_releases_everything_but_the_stage() {
    let mut scene = Scene::stage();
    let mut remote = RemoteEntities::new();
    remote.add_player(&mut scene, &player("p1", 0.0, 0.0, 0.0));
    remote.add_player(&mut scene, &player("p2", 1.0, 0.0, 0.0));
    remote.add_shape(&mut scene, &triangle("s1"));
    assert_eq!(scene.len(), 4);

    remote.clear(&mut scene);
    assert!(remote.is_empty());
    assert_eq!(scene.len(), 1);
    assert!(scene.find_by_name("ground").is_some());
}

#[test]
fn keys_filter_by_kind() {
    let mut scene = Scene::stage();
    let mut remote = RemoteEntities::new();
    remote.add_player(&mut scene, &player("p1", 0.0, 0.0, 0.0));
    remote.add_shape(&mut scene, &triangle("s1"));

    let players: Vec<&str> = remote.keys(EntityKind::Player).collect();
    let shapes: Vec<&str> = remote.keys(EntityKind::Shape).collect();
    assert_eq!(players, vec!["p1"]);
    assert_eq!(shapes, vec!["s1"]);
}
