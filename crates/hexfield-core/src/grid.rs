//! Instanced hexagonal grid.
//!
//! A single tile (the blueprint) is drawn once per instance. Rows alternate
//! between two offset formulas so the tiles interlock like bricks. The
//! formulas are the artwork's layout table, reproduced from its constants.

use crate::constants::{
    BLUEPRINT_UVS, GRID_COLS, GRID_ROWS, GRID_UV_ODD_SHIFT, GRID_UV_ROW_PITCH, GRID_UV_SCALE,
};
use crate::error::GridError;
use glam::DVec3;
use std::f64::consts::PI;

/// Per-instance attributes, laid out for a wgpu instance-step vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GridInstance {
    pub translation: [f32; 3],
    pub uv_offset: [f32; 2],
    pub uv_scale: [f32; 2],
}

/// Base tile vertex: position and uv.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TileVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug)]
pub struct HexGrid {
    pub side_length: f64,
    pub vertices: Vec<TileVertex>,
    pub instances: Vec<GridInstance>,
}

impl HexGrid {
    /// Lay out `count` instances of the tile described by `blueprint`
    /// (flat xyz triplets). `screen_ratio` is the world-space position of the
    /// bottom-right screen corner and centres the grid on screen.
    pub fn build(blueprint: &[f32], count: usize, screen_ratio: DVec3) -> Result<Self, GridError> {
        if blueprint.len() < 6 {
            return Err(GridError::BlueprintTooShort(blueprint.len()));
        }
        if blueprint.len() % 3 != 0 {
            return Err(GridError::BlueprintNotVec3(blueprint.len()));
        }
        if count != GRID_ROWS * GRID_COLS {
            return Err(GridError::CountMismatch {
                count,
                rows: GRID_ROWS,
                cols: GRID_COLS,
            });
        }

        let side_length = side_length(blueprint);
        let vertices = blueprint
            .chunks_exact(3)
            .enumerate()
            .map(|(k, p)| TileVertex {
                position: [p[0], p[1], p[2]],
                uv: [
                    BLUEPRINT_UVS.get(2 * k).copied().unwrap_or(0.0),
                    BLUEPRINT_UVS.get(2 * k + 1).copied().unwrap_or(0.0),
                ],
            })
            .collect();

        let mut instances = Vec::with_capacity(count);
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                instances.push(instance_at(row, col, side_length, screen_ratio));
            }
        }
        log::info!(
            "[grid] built {} instances, side length {:.5}",
            instances.len(),
            side_length
        );

        Ok(Self {
            side_length,
            vertices,
            instances,
        })
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Flat `[x, y, z, x, y, z, ...]` translations.
    pub fn translations(&self) -> Vec<f32> {
        self.instances.iter().flat_map(|i| i.translation).collect()
    }

    /// Flat `[u, v, u, v, ...]` uv offsets.
    pub fn uv_offsets(&self) -> Vec<f32> {
        self.instances.iter().flat_map(|i| i.uv_offset).collect()
    }

    pub fn uv_scales(&self) -> Vec<f32> {
        self.instances.iter().flat_map(|i| i.uv_scale).collect()
    }
}

/// Distance between the first two blueprint vertices, in the xy plane.
pub fn side_length(blueprint: &[f32]) -> f64 {
    let dx = blueprint[0] as f64 - blueprint[3] as f64;
    let dy = blueprint[1] as f64 - blueprint[4] as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Attributes of the tile at `row`, `col`.
pub fn instance_at(row: usize, col: usize, side: f64, screen_ratio: DVec3) -> GridInstance {
    let cols = GRID_COLS as f64;
    let (i, j) = (row as f64, col as f64);
    let half_width = (PI / 3.0).sin() * side;
    let uv_cell = 1.0 / cols;

    let x_margin = (screen_ratio.x * 2.0 - 2.0 * half_width * cols).abs() / 2.0;
    let y = i * side / 2.0 - side * cols + (-screen_ratio.y * 2.0 - side * cols).abs() / 2.0;
    let uv_v = GRID_UV_ROW_PITCH * i * uv_cell;

    let (x, uv_u) = if row % 2 == 0 {
        (2.0 * half_width * j - x_margin, j * uv_cell)
    } else {
        (
            2.0 * half_width * j + half_width - x_margin,
            j * uv_cell + GRID_UV_ODD_SHIFT,
        )
    };

    GridInstance {
        translation: [x as f32, y as f32, 0.0],
        uv_offset: [uv_u as f32, uv_v as f32],
        uv_scale: [GRID_UV_SCALE, GRID_UV_SCALE],
    }
}
