//! Nested coordinate systems of the tile world.
//!
//! - **Local**: 1/128 tile units relative to the loaded scene. Only valid
//!   until the next scene load.
//! - **Scene**: whole tiles relative to the loaded scene, `0..104`.
//! - **World**: absolute tiles plus a plane (floor) index.
//! - **Region**: 64x64 tile blocks packed into a region id.
//! - **Instance**: 8x8 tile chunks of the scene remapped, possibly rotated,
//!   onto template chunks elsewhere in the world.

mod instance;
mod local;
mod world;

pub use instance::{InstanceTemplates, TemplateChunk};
pub use local::LocalPoint;
pub use world::WorldPoint;

/// Bits of sub-tile precision in a local coordinate.
pub const LOCAL_COORD_BITS: u32 = 7;
/// Size of a tile in local units (128).
pub const LOCAL_TILE_SIZE: i32 = 1 << LOCAL_COORD_BITS;
pub const LOCAL_HALF_TILE_SIZE: i32 = LOCAL_TILE_SIZE / 2;
/// Width and length of the loaded scene, in tiles.
pub const SCENE_SIZE: i32 = 104;
/// Number of planes.
pub const MAX_Z: i32 = 4;
/// Width and length of an instance chunk, in tiles.
pub const CHUNK_SIZE: i32 = 8;
/// Width and length of a map region, in tiles.
pub const REGION_SIZE: i32 = 64;
/// Number of instance chunks along each scene axis.
pub const INSTANCE_CHUNKS: i32 = 13;

/// World tile at the scene's local origin.
///
/// Supplied by the world-state owner every frame; it changes on each scene
/// load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneBase {
    pub x: i32,
    pub y: i32,
}

impl SceneBase {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether world tile `(x, y)` falls inside the loaded scene.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let within =
            |v: i32, start: i32| (0..SCENE_SIZE as i64).contains(&(v as i64 - start as i64));
        within(x, self.x) && within(y, self.y)
    }
}
