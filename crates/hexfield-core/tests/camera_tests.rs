// Host-side tests for camera math and spherical coordinates.

use glam::{DVec3, Mat4, Vec4};
use hexfield_core::constants::{POLE_EPS, VIEW_CAMERA_Z};
use hexfield_core::*;
use std::f64::consts::PI;

#[test]
fn look_at_from_positive_z_is_identity() {
    let mut camera = Camera::perspective(50.0, 1.0, 0.1, 100.0);
    camera.position = DVec3::new(0.0, 0.0, 5.0);
    camera.look_at(DVec3::ZERO);
    assert!(camera.quaternion.angle_between(glam::DQuat::IDENTITY) < 1e-9);
    assert!(camera.right().distance(DVec3::X) < 1e-9);
    assert!(camera.local_up().distance(DVec3::Y) < 1e-9);
}

#[test]
fn look_at_straight_down_the_up_axis_stays_finite() {
    let mut camera = Camera::perspective(50.0, 1.0, 0.1, 100.0);
    camera.position = DVec3::new(0.0, 5.0, 0.0);
    camera.look_at(DVec3::ZERO);
    assert!(camera.quaternion.is_finite());
    let forward = camera.quaternion * DVec3::NEG_Z;
    assert!(forward.dot(DVec3::NEG_Y) > 0.999);
}

#[test]
fn focal_length_sets_field_of_view() {
    let mut square = Camera::perspective(50.0, 1.0, 0.1, 100.0);
    square.set_focal_length(50.0);
    let expected = (2.0 * (17.5f64 / 50.0).atan()).to_degrees();
    assert!((square.fov_deg().unwrap() - expected).abs() < 1e-9);

    // landscape: the film height is divided by the aspect
    let mut wide = Camera::perspective(50.0, 2.0, 0.1, 100.0);
    wide.set_focal_length(50.0);
    let expected = (2.0 * (8.75f64 / 50.0).atan()).to_degrees();
    assert!((wide.fov_deg().unwrap() - expected).abs() < 1e-9);
}

#[test]
fn perspective_zoom_narrows_the_projection() {
    let mut camera = Camera::perspective(60.0, 1.0, 0.1, 100.0);
    let base = camera.projection_matrix().y_axis.y;
    camera.set_zoom(2.0);
    let zoomed = camera.projection_matrix().y_axis.y;
    assert!((zoomed - 2.0 * base).abs() < 1e-9);
}

#[test]
fn orthographic_zoom_shrinks_the_frustum() {
    let mut camera = Camera::orthographic(-2.0, 2.0, 1.0, -1.0, 0.1, 100.0);
    let base = camera.projection_matrix().x_axis.x;
    camera.set_zoom(4.0);
    assert!((camera.projection_matrix().x_axis.x - 4.0 * base).abs() < 1e-9);
}

#[test]
fn custom_projection_has_no_zoom() {
    let mut camera = Camera::custom(glam::DMat4::IDENTITY);
    assert_eq!(camera.zoom(), None);
    camera.set_zoom(3.0);
    assert_eq!(camera.zoom(), None);
    assert!(!camera.is_perspective());
    assert!(!camera.is_orthographic());
}

#[test]
fn unproject_inverts_projection() {
    let mut camera = Camera::perspective(50.0, 1.5, 0.1, 100.0);
    camera.position = DVec3::new(1.0, 2.0, 10.0);
    camera.look_at(DVec3::new(0.0, 0.0, 0.0));
    let world = DVec3::new(0.3, -0.4, 1.0);
    let clip = camera.projection_matrix() * camera.view_matrix() * world.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    let back = camera.unproject(ndc);
    assert!(back.distance(world) < 1e-9);
}

#[test]
fn view_proj_maps_near_and_far_to_webgpu_depth() {
    let camera = Camera::perspective(50.0, 1.0, 0.5, 100.0);
    let m = Mat4::from_cols_array_2d(&camera.view_proj_f32());
    let near = m * Vec4::new(0.0, 0.0, -0.5, 1.0);
    let far = m * Vec4::new(0.0, 0.0, -100.0, 1.0);
    assert!((near.z / near.w).abs() < 1e-5);
    assert!((far.z / far.w - 1.0).abs() < 1e-4);
}

#[test]
fn view_camera_sits_just_in_front_of_the_grid() {
    let camera = view_camera(1280.0, 720.0);
    assert_eq!(camera.position, DVec3::new(0.0, 0.0, VIEW_CAMERA_Z));
    assert!(camera.is_perspective());
    assert!(camera.fov_deg().unwrap() < 50.0);
}

#[test]
fn spherical_from_vec3_on_the_z_axis() {
    let s = Spherical::from_vec3(DVec3::new(0.0, 0.0, 5.0));
    assert!((s.radius - 5.0).abs() < 1e-12);
    assert!((s.phi - PI / 2.0).abs() < 1e-12);
    assert!(s.theta.abs() < 1e-12);
}

#[test]
fn spherical_round_trips_through_cartesian() {
    let v = DVec3::new(1.5, -2.0, 0.7);
    let back = Spherical::from_vec3(v).to_vec3();
    assert!(back.distance(v) < 1e-12);
}

#[test]
fn spherical_of_the_origin_is_zero() {
    assert_eq!(Spherical::from_vec3(DVec3::ZERO), Spherical::default());
}

#[test]
fn make_safe_pulls_phi_off_the_poles() {
    let mut s = Spherical::new(1.0, 0.0, 0.0);
    s.make_safe();
    assert_eq!(s.phi, POLE_EPS);
    let mut s = Spherical::new(1.0, PI, 0.0);
    s.make_safe();
    assert_eq!(s.phi, PI - POLE_EPS);
}
