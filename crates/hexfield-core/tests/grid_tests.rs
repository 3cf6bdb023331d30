// Host-side tests for the hex grid layout and its blueprint.

use glam::{DVec2, DVec3};
use hexfield_core::blueprint::{layout_camera, screen_points, screen_to_ndc};
use hexfield_core::constants::{
    BLUEPRINT_VERTICES, CAMERA_NEAR, GRID_COLS, GRID_INSTANCE_COUNT, GRID_ROWS, LAYOUT_CAMERA_Z,
    VIEW_CAMERA_Z,
};
use hexfield_core::grid::{instance_at, side_length};
use hexfield_core::*;
use std::f64::consts::PI;

const W: f64 = 1280.0;
const H: f64 = 720.0;

// f32 storage of an f64 layout value
fn close(a: f32, b: f64) -> bool {
    (a as f64 - b).abs() <= 1e-6 * b.abs() + 1e-12
}

fn grid() -> (Blueprint, HexGrid) {
    let blueprint = Blueprint::for_window(W, H);
    let grid = HexGrid::build(&blueprint.coords, GRID_INSTANCE_COUNT, blueprint.screen_ratio)
        .expect("grid builds");
    (blueprint, grid)
}

#[test]
fn grid_has_one_entry_per_instance() {
    let (_, grid) = grid();
    assert_eq!(GRID_INSTANCE_COUNT, 7200);
    assert_eq!(grid.instance_count(), 7200);
    assert_eq!(grid.translations().len(), 7200 * 3);
    assert_eq!(grid.uv_offsets().len(), 7200 * 2);
    assert_eq!(grid.uv_scales().len(), 7200 * 2);
    assert_eq!(grid.vertices.len(), BLUEPRINT_VERTICES);
}

#[test]
fn even_row_follows_the_layout_formula() {
    let (blueprint, grid) = grid();
    let sr = blueprint.screen_ratio;
    let s = grid.side_length;
    let h = (PI / 3.0).sin() * s;
    let margin = (sr.x * 2.0 - 2.0 * h * 60.0).abs() / 2.0;
    let y0 = -s * 60.0 + (-sr.y * 2.0 - s * 60.0).abs() / 2.0;

    for j in [0usize, 1, 29, 59] {
        let inst = grid.instances[j];
        let jf = j as f64;
        assert!(close(inst.translation[0], 2.0 * h * jf - margin));
        assert!(close(inst.translation[1], y0));
        assert_eq!(inst.translation[2], 0.0);
        assert!(close(inst.uv_offset[0], jf / 60.0));
        assert!(close(inst.uv_offset[1], 0.0));
        assert_eq!(inst.uv_scale, [1.0 / 60.0, 1.0 / 60.0]);
    }
}

#[test]
fn odd_row_is_shifted_by_half_a_tile() {
    let (blueprint, grid) = grid();
    let sr = blueprint.screen_ratio;
    let s = grid.side_length;
    let h = (PI / 3.0).sin() * s;
    let margin = (sr.x * 2.0 - 2.0 * h * 60.0).abs() / 2.0;
    let y1 = s / 2.0 - s * 60.0 + (-sr.y * 2.0 - s * 60.0).abs() / 2.0;

    for j in [0usize, 7, 59] {
        let inst = grid.instances[GRID_COLS + j];
        let jf = j as f64;
        assert!(close(inst.translation[0], 2.0 * h * jf + h - margin));
        assert!(close(inst.translation[1], y1));
        assert!(close(inst.uv_offset[0], jf / 60.0 + 0.5 / 6.0));
        assert!(close(inst.uv_offset[1], 0.36 / 60.0));
    }
}

#[test]
fn instances_are_row_major() {
    let (blueprint, grid) = grid();
    let row = 17;
    let col = 42;
    let expected = instance_at(row, col, grid.side_length, blueprint.screen_ratio);
    assert_eq!(grid.instances[row * GRID_COLS + col], expected);
    let last = instance_at(GRID_ROWS - 1, GRID_COLS - 1, grid.side_length, blueprint.screen_ratio);
    assert_eq!(grid.instances[GRID_INSTANCE_COUNT - 1], last);
}

#[test]
fn rows_climb_by_half_a_side() {
    let (_, grid) = grid();
    let step = grid.instances[GRID_COLS].translation[1] as f64
        - grid.instances[0].translation[1] as f64;
    assert!((step - grid.side_length / 2.0).abs() < 1e-3 * grid.side_length);
}

#[test]
fn side_length_is_the_first_edge() {
    let b = [0.0, 0.0, 0.0, 3.0, 4.0, 0.0];
    assert_eq!(side_length(&b), 5.0);
}

#[test]
fn build_rejects_bad_input() {
    let sr = DVec3::new(1.0, -1.0, 0.0);
    assert_eq!(
        HexGrid::build(&[0.0; 3], GRID_INSTANCE_COUNT, sr).unwrap_err(),
        GridError::BlueprintTooShort(3)
    );
    assert_eq!(
        HexGrid::build(&[0.0; 7], GRID_INSTANCE_COUNT, sr).unwrap_err(),
        GridError::BlueprintNotVec3(7)
    );
    assert_eq!(
        HexGrid::build(&[0.0; 18], 100, sr).unwrap_err(),
        GridError::CountMismatch {
            count: 100,
            rows: GRID_ROWS,
            cols: GRID_COLS
        }
    );
}

#[test]
fn build_scene_uses_the_full_layout() {
    let grid = build_scene(W, H).expect("scene builds");
    assert_eq!(grid.instance_count(), GRID_INSTANCE_COUNT);
    assert!(grid.side_length > 0.0);
}

#[test]
fn screen_points_scale_with_window_width() {
    let pts = screen_points(600.0);
    let r = 10.0;
    assert_eq!(pts[0], DVec2::new(-r, 0.0));
    assert_eq!(pts[4], DVec2::new(2.0 * r, 0.0));
    assert!((pts[1].x - 5.0).abs() < 1e-9);
    assert!((pts[1].y - 75f64.sqrt()).abs() < 1e-9);
    assert!((pts[2].x - 5.0).abs() < 1e-9);
    assert!((pts[2].y + 75f64.sqrt()).abs() < 1e-9);
    assert_eq!(pts[1], pts[3]);
    assert_eq!(pts[2], pts[5]);
}

#[test]
fn screen_corners_map_to_ndc_corners() {
    assert_eq!(screen_to_ndc(DVec2::ZERO, W, H), DVec3::new(-1.0, 1.0, -1.0));
    assert_eq!(screen_to_ndc(DVec2::new(W, H), W, H), DVec3::new(1.0, -1.0, -1.0));
}

#[test]
fn blueprint_lies_on_the_near_plane() {
    let blueprint = Blueprint::for_window(W, H);
    assert_eq!(blueprint.coords.len(), 18);
    // the layout camera's placement is not applied
    let plane_z = -CAMERA_NEAR;
    for z in blueprint.coords.iter().skip(2).step_by(3) {
        assert!(close(*z, plane_z));
    }
    assert!((blueprint.screen_ratio.z - plane_z).abs() < 1e-9);
}

#[test]
fn tiles_sit_in_front_of_the_view_camera() {
    let camera = view_camera(W, H);
    let grid = build_scene(W, H).expect("scene");
    let tile_z = grid.vertices[0].position[2] as f64 + grid.instances[0].translation[2] as f64;
    let distance = camera.position.z - tile_z;
    assert!((distance - (VIEW_CAMERA_Z + CAMERA_NEAR)).abs() < 1e-6);
    assert!(distance > CAMERA_NEAR);
}

#[test]
fn screen_ratio_matches_window_aspect() {
    let blueprint = Blueprint::for_window(W, H);
    let sr = blueprint.screen_ratio;
    assert!(sr.x > 0.0);
    assert!(sr.y < 0.0);
    assert!((sr.x / -sr.y - W / H).abs() < 1e-9);
}

#[test]
fn layout_camera_uses_the_fixed_lens() {
    let camera = layout_camera(W, H);
    assert_eq!(camera.position, DVec3::new(0.0, 0.0, LAYOUT_CAMERA_Z));
    let film_height = 35.0 / (W / H);
    let expected = (2.0 * (0.5 * film_height / 50.0f64).atan()).to_degrees();
    assert!((camera.fov_deg().unwrap() - expected).abs() < 1e-9);
}
