use super::{SceneBase, WorldPoint, LOCAL_COORD_BITS, LOCAL_HALF_TILE_SIZE};

/// A point in the local coordinate space of the loaded scene.
///
/// The unit is 1/128th of a tile. Local points are only meaningful for the
/// scene they were computed in; recompute them after every scene load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalPoint {
    pub x: i32,
    pub y: i32,
}

impl LocalPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Local point at the visual center of scene tile `(x, y)`.
    pub fn from_scene(x: i32, y: i32) -> Self {
        let center = LOCAL_HALF_TILE_SIZE - 1;
        Self {
            x: (x << LOCAL_COORD_BITS).wrapping_add(center),
            y: (y << LOCAL_COORD_BITS).wrapping_add(center),
        }
    }

    /// Center of world tile `(x, y)`, or `None` if it is outside the scene.
    pub fn from_world(base: SceneBase, x: i32, y: i32) -> Option<Self> {
        if !base.contains(x, y) {
            return None;
        }
        Some(Self::from_scene(x - base.x, y - base.y))
    }

    /// Like [`LocalPoint::from_world`], but also rejects points on a plane
    /// other than the current one.
    pub fn from_world_point(base: SceneBase, plane: i32, world: &WorldPoint) -> Option<Self> {
        if world.plane != plane {
            return None;
        }
        Self::from_world(base, world.x, world.y)
    }

    /// Scene tile x. Uses an unsigned shift, so negative coordinates map far
    /// outside the scene instead of onto it.
    pub fn scene_x(&self) -> i32 {
        ((self.x as u32) >> LOCAL_COORD_BITS) as i32
    }

    /// Scene tile y. See [`LocalPoint::scene_x`].
    pub fn scene_y(&self) -> i32 {
        ((self.y as u32) >> LOCAL_COORD_BITS) as i32
    }

    /// Straight-line distance in local units, truncated.
    pub fn distance_to(&self, other: &LocalPoint) -> i32 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        dx.hypot(dy) as i32
    }
}
