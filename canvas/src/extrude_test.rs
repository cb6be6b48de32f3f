use super::*;

fn pts(raw: &[[f64; 3]]) -> Vec<Vec3> {
    raw.iter().copied().map(Vec3::from_array).collect()
}

#[test]
fn three_points_give_two_walls() {
    let geom = extrude_polyline(pts(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0]]));
    assert_eq!(geom.vertices.len(), 6);
    assert_eq!(geom.triangles.len(), 4);
}

#[test]
fn profile_is_lifted_and_path_is_unit_height() {
    let geom = extrude_polyline(pts(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]]));
    let (lo, hi) = geom.bounds().expect("bounds");
    assert!((lo.y - 0.1).abs() < 1e-12);
    assert!((hi.y - 1.1).abs() < 1e-12);
    assert_eq!(lo.x, 0.0);
    assert_eq!(hi.x, 2.0);
}

#[test]
fn lower_ring_precedes_upper_ring() {
    let geom = extrude_polyline(pts(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]));
    assert_eq!(geom.vertices[0], Vec3::new(0.0, 0.1, 0.0));
    assert_eq!(geom.vertices[1], Vec3::new(1.0, 0.1, 0.0));
    assert_eq!(geom.vertices[2], Vec3::new(0.0, 1.1, 0.0));
    assert_eq!(geom.vertices[3], Vec3::new(1.0, 1.1, 0.0));
    assert_eq!(geom.triangles, vec![[0, 2, 1], [1, 2, 3]]);
}

#[test]
fn closed_polyline_walls_wrap_around() {
    let square = pts(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, 0.0],
    ]);
    let geom = extrude_polyline(square);
    assert_eq!(geom.triangles.len(), 8);
}

#[test]
fn triangle_indices_stay_in_range() {
    let geom = extrude_polyline(pts(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [3.0, 0.0, 2.0]]));
    assert!(geom.triangles.iter().flatten().all(|&i| i < geom.vertices.len()));
}

#[test]
fn single_point_yields_nothing() {
    assert!(extrude_polyline(pts(&[[0.0, 0.0, 0.0]])).is_empty());
}

#[test]
fn sweep_needs_two_path_nodes() {
    let profile = pts(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
    assert!(sweep(&profile, &[Vec3::ZERO]).is_empty());
}

#[test]
fn multi_node_path_stacks_rings() {
    let profile = pts(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
    let path = [Vec3::ZERO, Vec3::UP, Vec3::UP * 2.0];
    let geom = sweep(&profile, &path);
    assert_eq!(geom.vertices.len(), 6);
    assert_eq!(geom.triangles.len(), 4);
}

#[test]
fn polyline_counts_segments() {
    assert_eq!(Polyline::new(Vec::new()).segment_count(), 0);
    assert_eq!(Polyline::new(pts(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]])).segment_count(), 2);
}
