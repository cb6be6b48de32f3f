use super::*;

const EPS: f64 = 1e-9;

fn approx(a: Vec3, b: Vec3) -> bool {
    a.distance(b) < EPS
}

#[test]
fn cross_of_x_and_y_is_z() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn normalize_yields_unit_length() {
    let v = Vec3::new(3.0, 0.0, 4.0).normalize();
    assert!((v.length() - 1.0).abs() < EPS);
    assert!(approx(v, Vec3::new(0.6, 0.0, 0.8)));
}

#[test]
fn normalize_leaves_zero_vector_alone() {
    assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
}

#[test]
fn array_conversion_keeps_component_order() {
    let v = Vec3::from_array([1.0, 2.0, 3.0]);
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
}

#[test]
fn zero_rotation_is_identity() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert!(approx(v.rotate_euler(Vec3::ZERO), v));
}

#[test]
fn quarter_yaw_turns_x_into_negative_z() {
    let v = Vec3::new(1.0, 0.0, 0.0).rotate_euler(Vec3::new(0.0, std::f64::consts::FRAC_PI_2, 0.0));
    assert!(approx(v, Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn operators_are_componentwise() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(0.5, 0.5, 0.5);
    assert_eq!(a + b, Vec3::new(1.5, 2.5, 3.5));
    assert_eq!(a - b, Vec3::new(0.5, 1.5, 2.5));
    assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
}
