//! Ground height sampling from the scene's tile height grid.
//!
//! Each tile corner has a height; a point inside a tile is bilinearly
//! interpolated between its four corners in integer fixed point. Tiles
//! flagged as bridges are drawn one plane up, so their height is read from
//! the plane above.

use log::debug;

use crate::coords::{
    LocalPoint, SceneBase, WorldPoint, LOCAL_COORD_BITS, LOCAL_TILE_SIZE, MAX_Z, SCENE_SIZE,
};
use crate::error::GridError;

/// Settings bit marking a tile rendered at the plane above.
pub const TILE_FLAG_BRIDGE: u8 = 2;

/// Corner samples per axis: one more than the scene size.
const HEIGHT_SAMPLES: usize = SCENE_SIZE as usize + 1;

/// Validated height and settings grids, both indexed `[plane][x][y]`.
#[derive(Clone, Debug)]
pub struct TileHeights {
    heights: Vec<Vec<Vec<i32>>>,
    settings: Vec<Vec<Vec<u8>>>,
}

impl TileHeights {
    /// Takes ownership of the grids after checking their shape.
    ///
    /// Heights need `105 x 105` corner samples per plane, settings need
    /// `104 x 104` tiles, and both must have the same number of planes.
    pub fn new(
        heights: Vec<Vec<Vec<i32>>>,
        settings: Vec<Vec<Vec<u8>>>,
    ) -> Result<Self, GridError> {
        if heights.is_empty() || heights.len() > MAX_Z as usize {
            return Err(fail(GridError::PlaneCount {
                grid: "height",
                planes: heights.len(),
            }));
        }
        if heights.len() != settings.len() {
            return Err(fail(GridError::PlaneMismatch {
                heights: heights.len(),
                settings: settings.len(),
            }));
        }
        for (plane, grid) in heights.iter().enumerate() {
            check_plane("height", plane, grid, HEIGHT_SAMPLES)?;
        }
        for (plane, grid) in settings.iter().enumerate() {
            check_plane("settings", plane, grid, SCENE_SIZE as usize)?;
        }
        Ok(Self { heights, settings })
    }

    pub fn planes(&self) -> usize {
        self.heights.len()
    }

    /// Height of the ground under `point` on `plane`.
    ///
    /// Returns 0 (ground level) for points outside the scene or planes that
    /// are not in the grid.
    pub fn tile_height(&self, point: LocalPoint, plane: i32) -> i32 {
        let scene_x = point.scene_x();
        let scene_y = point.scene_y();
        if scene_x < 0
            || scene_y < 0
            || scene_x >= SCENE_SIZE
            || scene_y >= SCENE_SIZE
            || plane < 0
            || plane as usize >= self.heights.len()
        {
            return 0;
        }
        let (sx, sy) = (scene_x as usize, scene_y as usize);

        let mut z = plane as usize;
        if plane < MAX_Z - 1 && self.is_bridge(z + 1, sx, sy) {
            z += 1;
        }
        let grid = &self.heights[z];

        let x = point.x & (LOCAL_TILE_SIZE - 1);
        let y = point.y & (LOCAL_TILE_SIZE - 1);
        let south = lerp(grid[sx][sy], grid[sx + 1][sy], x);
        let north = lerp(grid[sx][sy + 1], grid[sx + 1][sy + 1], x);
        lerp(south, north, y)
    }

    /// Height at the center of world tile `point`, or 0 when the tile is not
    /// in the loaded scene.
    pub fn height_at_world(&self, base: SceneBase, plane: i32, point: &WorldPoint) -> i32 {
        LocalPoint::from_world(base, point.x, point.y)
            .map(|local| self.tile_height(local, plane))
            .unwrap_or(0)
    }

    fn is_bridge(&self, plane: usize, x: usize, y: usize) -> bool {
        self.settings
            .get(plane)
            .map(|grid| grid[x][y] & TILE_FLAG_BRIDGE == TILE_FLAG_BRIDGE)
            .unwrap_or(false)
    }
}

/// `(a * (128 - t) + b * t) >> 7`, wrapping like the client's 32-bit math.
#[inline]
fn lerp(a: i32, b: i32, t: i32) -> i32 {
    a.wrapping_mul(LOCAL_TILE_SIZE - t)
        .wrapping_add(b.wrapping_mul(t))
        >> LOCAL_COORD_BITS
}

fn check_plane<T>(
    grid: &'static str,
    plane: usize,
    rows: &[Vec<T>],
    required: usize,
) -> Result<(), GridError> {
    let narrowest = rows.iter().map(Vec::len).min().unwrap_or(0).min(rows.len());
    if narrowest < required {
        return Err(fail(GridError::TooSmall {
            grid,
            plane,
            required,
            actual: narrowest,
        }));
    }
    Ok(())
}

fn fail(err: GridError) -> GridError {
    debug!("rejected scene grid: {err}");
    err
}
