use log::trace;

use super::{
    InstanceTemplates, LocalPoint, SceneBase, CHUNK_SIZE, INSTANCE_CHUNKS, LOCAL_COORD_BITS,
    REGION_SIZE,
};

/// The coordinate of a tile in the world.
///
/// World points are values: the offset methods return new points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    /// Floor level, `0..MAX_Z`.
    pub plane: i32,
}

impl WorldPoint {
    pub const fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    pub fn dx(&self, dx: i32) -> Self {
        Self::new(self.x.wrapping_add(dx), self.y, self.plane)
    }

    pub fn dy(&self, dy: i32) -> Self {
        Self::new(self.x, self.y.wrapping_add(dy), self.plane)
    }

    pub fn dz(&self, dz: i32) -> Self {
        Self::new(self.x, self.y, self.plane.wrapping_add(dz))
    }

    /// Whether this tile is on `plane` and inside the loaded scene.
    pub fn is_in_scene(&self, base: SceneBase, plane: i32) -> bool {
        self.plane == plane && base.contains(self.x, self.y)
    }

    // =========================================================================
    // Distances
    // =========================================================================

    /// Chebyshev distance, or `i32::MAX` when the planes differ.
    pub fn distance_to(&self, other: &WorldPoint) -> i32 {
        if other.plane != self.plane {
            return i32::MAX;
        }
        self.distance_to_2d(other)
    }

    /// Chebyshev distance ignoring the plane.
    pub fn distance_to_2d(&self, other: &WorldPoint) -> i32 {
        let dx = self.x.wrapping_sub(other.x).wrapping_abs();
        let dy = self.y.wrapping_sub(other.y).wrapping_abs();
        dx.max(dy)
    }

    /// Straight-line distance, or `f32::MAX` when the planes differ.
    pub fn distance_to_hypotenuse(&self, other: &WorldPoint) -> f32 {
        if other.plane != self.plane {
            return f32::MAX;
        }
        self.distance_to_2d_hypotenuse(other)
    }

    /// Straight-line distance ignoring the plane.
    pub fn distance_to_2d_hypotenuse(&self, other: &WorldPoint) -> f32 {
        (self.x as f64 - other.x as f64).hypot(self.y as f64 - other.y as f64) as f32
    }

    // =========================================================================
    // Regions
    // =========================================================================

    /// Id of the 64x64 region containing this tile.
    pub fn region_id(&self) -> i32 {
        (self.x >> 6) << 8 | (self.y >> 6)
    }

    pub fn region_x(&self) -> i32 {
        self.x & (REGION_SIZE - 1)
    }

    pub fn region_y(&self) -> i32 {
        self.y & (REGION_SIZE - 1)
    }

    /// Inverse of [`WorldPoint::region_id`] plus the region-local offsets.
    pub fn from_region(region_id: i32, region_x: i32, region_y: i32, plane: i32) -> Self {
        Self::new(
            (((region_id as u32) >> 8) << 6) as i32 + region_x,
            ((region_id & 0xFF) << 6) + region_y,
            plane,
        )
    }

    // =========================================================================
    // Scene conversions
    // =========================================================================

    /// Tile containing `local`.
    pub fn from_local(base: SceneBase, local: LocalPoint, plane: i32) -> Self {
        Self::new(
            local.scene_x().wrapping_add(base.x),
            local.scene_y().wrapping_add(base.y),
            plane,
        )
    }

    /// World tile of scene tile `(x, y)`.
    pub fn from_scene(base: SceneBase, x: i32, y: i32, plane: i32) -> Self {
        Self::new(x.wrapping_add(base.x), y.wrapping_add(base.y), plane)
    }

    /// Template world tile shown at `local` in an instanced scene.
    ///
    /// Returns `None` when the point's chunk is outside the 13x13 instance
    /// grid or has no template entry.
    pub fn from_local_instance(
        templates: &InstanceTemplates,
        local: LocalPoint,
        plane: i32,
    ) -> Option<Self> {
        let scene_x = local.scene_x();
        let scene_y = local.scene_y();
        let chunk_x = scene_x / CHUNK_SIZE;
        let chunk_y = scene_y / CHUNK_SIZE;
        if chunk_x >= INSTANCE_CHUNKS || chunk_y >= INSTANCE_CHUNKS {
            trace!("chunk ({chunk_x}, {chunk_y}) outside instance grid");
            return None;
        }

        let template = templates.get(plane, chunk_x, chunk_y)?;
        let x = template.origin_x() + (scene_x & (CHUNK_SIZE - 1));
        let y = template.origin_y() + (scene_y & (CHUNK_SIZE - 1));
        let point = Self::new(x, y, template.plane());
        // undo the chunk's rotation to land in the template's frame
        Some(point.rotate_in_chunk((4 - template.rotation()) & 3))
    }

    /// Every scene tile displaying this template tile.
    ///
    /// Outside an instance this is just the point itself. Inside one, the
    /// same template chunk may be placed several times, so any number of
    /// tiles can match.
    pub fn to_local_instance(
        &self,
        base: SceneBase,
        templates: Option<&InstanceTemplates>,
    ) -> Vec<WorldPoint> {
        let Some(templates) = templates else {
            return vec![*self];
        };

        templates
            .plane_chunks(self.plane)
            .filter(|(_, _, template)| template.covers(self.x, self.y))
            .map(|(chunk_x, chunk_y, template)| {
                Self::new(
                    base.x + chunk_x * CHUNK_SIZE + (self.x & (CHUNK_SIZE - 1)),
                    base.y + chunk_y * CHUNK_SIZE + (self.y & (CHUNK_SIZE - 1)),
                    self.plane,
                )
                .rotate_in_chunk(template.rotation())
            })
            .collect()
    }

    /// Rotates this tile inside its own 8x8 chunk by `rotation` quarter
    /// turns. The chunk origin never moves; rotations outside `1..=3` leave
    /// the point unchanged.
    pub fn rotate_in_chunk(&self, rotation: i32) -> Self {
        let chunk_x = self.x & !(CHUNK_SIZE - 1);
        let chunk_y = self.y & !(CHUNK_SIZE - 1);
        let x = self.x & (CHUNK_SIZE - 1);
        let y = self.y & (CHUNK_SIZE - 1);
        let last = CHUNK_SIZE - 1;
        match rotation {
            1 => Self::new(chunk_x + y, chunk_y + (last - x), self.plane),
            2 => Self::new(chunk_x + (last - x), chunk_y + (last - y), self.plane),
            3 => Self::new(chunk_x + (last - y), chunk_y + x, self.plane),
            _ => *self,
        }
    }

    /// Whether `point` is inside the inclusive box spanned by `lower` and
    /// `upper`, planes included.
    pub fn is_in_zone(lower: &WorldPoint, upper: &WorldPoint, point: &WorldPoint) -> bool {
        point.x >= lower.x
            && point.x <= upper.x
            && point.y >= lower.y
            && point.y <= upper.y
            && point.plane >= lower.plane
            && point.plane <= upper.plane
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::TemplateChunk;
    use approx::assert_relative_eq;

    #[test]
    fn offsets_return_new_points() {
        let p = WorldPoint::new(10, 20, 1);
        assert_eq!(p.dx(5), WorldPoint::new(15, 20, 1));
        assert_eq!(p.dy(-5), WorldPoint::new(10, 15, 1));
        assert_eq!(p.dz(1), WorldPoint::new(10, 20, 2));
        assert_eq!(p, WorldPoint::new(10, 20, 1));
    }

    #[test]
    fn offsets_and_distances_wrap_at_integer_limits() {
        let p = WorldPoint::new(i32::MAX, i32::MIN, i32::MAX);
        assert_eq!(p.dx(1), WorldPoint::new(i32::MIN, i32::MIN, i32::MAX));
        assert_eq!(p.dy(-1), WorldPoint::new(i32::MAX, i32::MAX, i32::MAX));
        assert_eq!(p.dz(1).plane, i32::MIN);

        let origin = WorldPoint::new(0, 0, 0);
        // MAX - MIN wraps to -1
        let far_east = WorldPoint::new(i32::MAX, 0, 0);
        assert_eq!(far_east.distance_to_2d(&WorldPoint::new(i32::MIN, 0, 0)), 1);
        assert_eq!(origin.distance_to_2d(&WorldPoint::new(i32::MIN + 1, 5, 0)), i32::MAX);
        assert_eq!(
            WorldPoint::from_scene(SceneBase::new(i32::MAX, 0), 1, 2, 0),
            WorldPoint::new(i32::MIN, 2, 0)
        );
    }

    #[test]
    fn distances() {
        let a = WorldPoint::new(0, 0, 0);
        let b = WorldPoint::new(3, 4, 0);
        assert_eq!(a.distance_to(&b), 4);
        assert_relative_eq!(a.distance_to_hypotenuse(&b), 5.0);

        let upstairs = b.dz(1);
        assert_eq!(a.distance_to(&upstairs), i32::MAX);
        assert_eq!(a.distance_to_2d(&upstairs), 4);
        assert_eq!(a.distance_to_hypotenuse(&upstairs), f32::MAX);
        assert_relative_eq!(a.distance_to_2d_hypotenuse(&upstairs), 5.0);
    }

    #[test]
    fn region_fields() {
        let p = WorldPoint::new(3222, 3218, 0);
        assert_eq!(p.region_id(), 12850);
        assert_eq!(p.region_x(), 22);
        assert_eq!(p.region_y(), 18);
    }

    #[test]
    fn from_region_round_trips_every_offset() {
        for region_id in [0, 12850, 0x3FFF, 0xFFFF] {
            for rx in 0..REGION_SIZE {
                for ry in 0..REGION_SIZE {
                    let p = WorldPoint::from_region(region_id, rx, ry, 2);
                    assert_eq!((p.region_id(), p.region_x(), p.region_y()), (region_id, rx, ry));
                    assert_eq!(p.plane, 2);
                }
            }
        }
    }

    #[test]
    fn scene_conversions() {
        let base = SceneBase::new(3136, 3136);
        let local = LocalPoint::from_scene(5, 7);
        assert_eq!(WorldPoint::from_local(base, local, 1), WorldPoint::new(3141, 3143, 1));
        assert_eq!(WorldPoint::from_scene(base, 5, 7, 1), WorldPoint::new(3141, 3143, 1));
        assert!(WorldPoint::new(3141, 3143, 1).is_in_scene(base, 1));
        assert!(!WorldPoint::new(3141, 3143, 1).is_in_scene(base, 0));
        assert!(!WorldPoint::new(3240, 3143, 1).is_in_scene(base, 1));
    }

    #[test]
    fn rotate_four_quarter_turns_is_identity() {
        for x in 0..CHUNK_SIZE {
            for y in 0..CHUNK_SIZE {
                let p = WorldPoint::new(3200 + x, 3208 + y, 0);
                let mut q = p;
                for _ in 0..4 {
                    q = q.rotate_in_chunk(1);
                }
                assert_eq!(q, p);
            }
        }
    }

    #[test]
    fn rotate_keeps_chunk_origin() {
        let p = WorldPoint::new(3201, 3210, 0);
        assert_eq!(p.rotate_in_chunk(1), WorldPoint::new(3202, 3214, 0));
        assert_eq!(p.rotate_in_chunk(2), WorldPoint::new(3206, 3213, 0));
        assert_eq!(p.rotate_in_chunk(3), WorldPoint::new(3205, 3209, 0));
        assert_eq!(p.rotate_in_chunk(0), p);
    }

    #[test]
    fn rotations_compose() {
        let p = WorldPoint::new(3201, 3210, 0);
        assert_eq!(p.rotate_in_chunk(1).rotate_in_chunk(2), p.rotate_in_chunk(3));
        assert_eq!(p.rotate_in_chunk(3).rotate_in_chunk(1), p);
    }

    #[test]
    fn zone_is_inclusive_on_all_axes() {
        let lower = WorldPoint::new(10, 10, 0);
        let upper = WorldPoint::new(20, 20, 1);
        assert!(WorldPoint::is_in_zone(&lower, &upper, &WorldPoint::new(10, 20, 1)));
        assert!(!WorldPoint::is_in_zone(&lower, &upper, &WorldPoint::new(21, 15, 0)));
        assert!(!WorldPoint::is_in_zone(&lower, &upper, &WorldPoint::new(15, 15, 2)));
    }

    fn single_chunk_instance(chunk_x: usize, chunk_y: usize, template: TemplateChunk) -> InstanceTemplates {
        let mut plane = vec![vec![0; INSTANCE_CHUNKS as usize]; INSTANCE_CHUNKS as usize];
        plane[chunk_x][chunk_y] = template.0;
        InstanceTemplates::new(vec![plane])
    }

    #[test]
    fn from_local_instance_maps_to_template() {
        // scene chunk (2, 3) shows template chunk (400, 401) unrotated on plane 1
        let templates = single_chunk_instance(2, 3, TemplateChunk::pack(0, 400, 401, 1));
        let local = LocalPoint::from_scene(2 * 8 + 5, 3 * 8 + 6);
        assert_eq!(
            WorldPoint::from_local_instance(&templates, local, 0),
            Some(WorldPoint::new(3205, 3214, 1))
        );
    }

    #[test]
    fn from_local_instance_reverses_rotation() {
        let templates = single_chunk_instance(0, 0, TemplateChunk::pack(1, 400, 400, 0));
        let local = LocalPoint::from_scene(1, 2);
        // un-rotated: (3201, 3202); undo one quarter turn with three more
        let expected = WorldPoint::new(3201, 3202, 0).rotate_in_chunk(3);
        assert_eq!(WorldPoint::from_local_instance(&templates, local, 0), Some(expected));
    }

    #[test]
    fn from_local_instance_rejects_chunks_past_grid() {
        let templates = single_chunk_instance(0, 0, TemplateChunk::pack(0, 400, 400, 0));
        let local = LocalPoint::from_scene(13 * 8, 0);
        assert_eq!(WorldPoint::from_local_instance(&templates, local, 0), None);
        // missing plane in the table
        let local = LocalPoint::from_scene(0, 0);
        assert_eq!(WorldPoint::from_local_instance(&templates, local, 2), None);
    }

    #[test]
    fn to_local_instance_outside_instance_is_identity() {
        let p = WorldPoint::new(3222, 3218, 0);
        assert_eq!(p.to_local_instance(SceneBase::new(3136, 3136), None), vec![p]);
    }

    #[test]
    fn to_local_instance_finds_every_copy() {
        let template = TemplateChunk::pack(0, 400, 400, 0);
        let mut plane = vec![vec![0; 13]; 13];
        plane[1][1] = template.0;
        plane[4][2] = template.0;
        let templates = InstanceTemplates::new(vec![plane]);
        let base = SceneBase::new(6400, 6400);

        let found = WorldPoint::new(3203, 3205, 0).to_local_instance(base, Some(&templates));
        assert_eq!(
            found,
            vec![WorldPoint::new(6411, 6413, 0), WorldPoint::new(6435, 6421, 0)]
        );
    }

    #[test]
    fn instance_round_trip_through_rotated_chunk() {
        let base = SceneBase::new(6400, 6400);
        for rotation in 0..4 {
            let templates = single_chunk_instance(3, 5, TemplateChunk::pack(rotation, 400, 400, 0));
            let template_tile = WorldPoint::new(3202, 3206, 0);

            let shown = template_tile.to_local_instance(base, Some(&templates));
            assert_eq!(shown.len(), 1, "rotation {rotation}");

            let scene = shown[0];
            let local = LocalPoint::from_scene(scene.x - base.x, scene.y - base.y);
            assert_eq!(
                WorldPoint::from_local_instance(&templates, local, 0),
                Some(template_tile),
                "rotation {rotation}"
            );
        }
    }
}
