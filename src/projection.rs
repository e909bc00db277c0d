//! Fixed-point perspective projection of scene points onto the screen.
//!
//! The [`Projector`] reproduces the client's own integer pipeline bit for
//! bit: object spin, camera translation, yaw, pitch, near-plane cull and
//! perspective divide, each rotation scaled by the 16.16 trig table and
//! shifted back down by 16. Overlays compare these coordinates against the
//! client's, so every step wraps on overflow exactly like 32-bit integers.

use crate::camera::Camera;
use crate::math::vec2::Point;
use crate::math::vec3::Vec3i;
use crate::trig::TrigTable;

/// Points closer than this depth are culled instead of projected.
pub const NEAR_PLANE: i32 = 50;

/// Legacy screen coordinate written for culled points.
pub const CULLED: i32 = i32::MIN;

/// Viewport geometry the scene is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Width in pixels.
    width: i32,
    /// Height in pixels.
    height: i32,
    /// Pixel offset of the viewport inside the canvas.
    offset_x: i32,
    offset_y: i32,
    /// Scale from depth-divided units to pixels.
    zoom: i32,
}

impl Viewport {
    /// Creates a viewport at canvas offset `(0, 0)`.
    pub fn new(width: i32, height: i32, zoom: i32) -> Self {
        Self {
            width,
            height,
            offset_x: 0,
            offset_y: 0,
            zoom,
        }
    }

    /// Returns the viewport moved to canvas offset `(x, y)`.
    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }

    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    /// Updates the size (typically called on window resize).
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    pub fn set_zoom(&mut self, zoom: i32) {
        self.zoom = zoom;
    }
}

impl Default for Viewport {
    /// The client's fixed-size game view.
    fn default() -> Self {
        Self::new(512, 334, 512)
    }
}

/// Result of projecting one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenPoint {
    Projected { x: i32, y: i32 },
    /// Too close to, or behind, the camera.
    Culled,
}

impl ScreenPoint {
    /// Decodes a legacy coordinate pair, where `i32::MIN` marks a cull.
    pub fn from_legacy(x: i32, y: i32) -> Self {
        if x == CULLED {
            ScreenPoint::Culled
        } else {
            ScreenPoint::Projected { x, y }
        }
    }

    /// Encodes as a legacy coordinate pair.
    pub fn to_legacy(self) -> (i32, i32) {
        match self {
            ScreenPoint::Projected { x, y } => (x, y),
            ScreenPoint::Culled => (CULLED, CULLED),
        }
    }

    pub fn is_culled(&self) -> bool {
        matches!(self, ScreenPoint::Culled)
    }

    pub fn point(&self) -> Option<Point> {
        match *self {
            ScreenPoint::Projected { x, y } => Some(Point::new(x, y)),
            ScreenPoint::Culled => None,
        }
    }
}

/// Projects scene points for one camera pose and viewport.
///
/// Cheap to build; make one per frame.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    camera: Vec3i,
    viewport: Viewport,
    pitch_sin: i32,
    pitch_cos: i32,
    yaw_sin: i32,
    yaw_cos: i32,
}

impl Projector {
    pub fn new(camera: &Camera, viewport: Viewport) -> Self {
        let trig = TrigTable::get();
        Self {
            camera: camera.position(),
            viewport,
            pitch_sin: trig.sin(camera.pitch()),
            pitch_cos: trig.cos(camera.pitch()),
            yaw_sin: trig.sin(camera.yaw()),
            yaw_cos: trig.cos(camera.yaw()),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Projects a single model point.
    ///
    /// `center` is the model's position in the scene and `rotation` its spin
    /// about the vertical axis, in angle units (`[0, 2048)`).
    pub fn project_point(&self, center: Vec3i, rotation: i32, point: Vec3i) -> ScreenPoint {
        self.transform(center - self.camera, spin(rotation), point)
    }

    /// Projects parallel coordinate arrays into caller-provided buffers.
    ///
    /// Handles `min(count, xs, ys, zs, out_x, out_y)` points and returns that
    /// number; longer inputs are clamped, never rejected. Culled points are
    /// written as [`CULLED`] on both axes. Does not allocate.
    #[allow(clippy::too_many_arguments)]
    pub fn project_into(
        &self,
        center: Vec3i,
        rotation: i32,
        xs: &[i32],
        ys: &[i32],
        zs: &[i32],
        count: usize,
        out_x: &mut [i32],
        out_y: &mut [i32],
    ) -> usize {
        let n = count
            .min(xs.len())
            .min(ys.len())
            .min(zs.len())
            .min(out_x.len())
            .min(out_y.len());

        let offset = center - self.camera;
        let spin = spin(rotation);
        for i in 0..n {
            let projected = self.transform(offset, spin, Vec3i::new(xs[i], ys[i], zs[i]));
            (out_x[i], out_y[i]) = projected.to_legacy();
        }
        n
    }

    /// Projects parallel coordinate arrays, returning new screen arrays.
    ///
    /// Same clamping and sentinel rules as [`Projector::project_into`].
    pub fn project(
        &self,
        center: Vec3i,
        rotation: i32,
        xs: &[i32],
        ys: &[i32],
        zs: &[i32],
        count: usize,
    ) -> (Vec<i32>, Vec<i32>) {
        let n = count.min(xs.len()).min(ys.len()).min(zs.len());
        let mut out_x = vec![0; n];
        let mut out_y = vec![0; n];
        self.project_into(center, rotation, xs, ys, zs, n, &mut out_x, &mut out_y);
        (out_x, out_y)
    }

    /// Projects points, returning tagged results.
    pub fn project_points(&self, center: Vec3i, rotation: i32, points: &[Vec3i]) -> Vec<ScreenPoint> {
        let offset = center - self.camera;
        let spin = spin(rotation);
        points
            .iter()
            .map(|&p| self.transform(offset, spin, p))
            .collect()
    }

    #[inline]
    fn transform(&self, offset: Vec3i, spin: Option<(i32, i32)>, point: Vec3i) -> ScreenPoint {
        let Vec3i { mut x, mut y, z } = point;
        if let Some((sin, cos)) = spin {
            let x0 = x;
            x = fixed_dot(x0, cos, y, sin);
            y = fixed_dot(y, cos, x0, sin.wrapping_neg());
        }
        let x = x.wrapping_add(offset.x);
        let y = y.wrapping_add(offset.y);
        let z = z.wrapping_add(offset.z);

        // yaw
        let x1 = fixed_dot(x, self.yaw_cos, y, self.yaw_sin);
        let y1 = fixed_dot(y, self.yaw_cos, x, self.yaw_sin.wrapping_neg());
        // pitch
        let y2 = fixed_dot(z, self.pitch_cos, y1, self.pitch_sin.wrapping_neg());
        let z1 = fixed_dot(y1, self.pitch_cos, z, self.pitch_sin);

        if z1 < NEAR_PLANE {
            return ScreenPoint::Culled;
        }

        let vp = &self.viewport;
        ScreenPoint::Projected {
            x: (vp.width / 2)
                .wrapping_add(x1.wrapping_mul(vp.zoom) / z1)
                .wrapping_add(vp.offset_x),
            y: (vp.height / 2)
                .wrapping_add(y2.wrapping_mul(vp.zoom) / z1)
                .wrapping_add(vp.offset_y),
        }
    }
}

fn spin(rotation: i32) -> Option<(i32, i32)> {
    if rotation == 0 {
        return None;
    }
    let trig = TrigTable::get();
    Some((trig.sin(rotation), trig.cos(rotation)))
}

/// `(a * ca + b * cb) >> 16` in wrapping 32-bit arithmetic.
#[inline]
fn fixed_dot(a: i32, ca: i32, b: i32, cb: i32) -> i32 {
    a.wrapping_mul(ca).wrapping_add(b.wrapping_mul(cb)) >> 16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_north() -> Projector {
        Projector::new(&Camera::default(), Viewport::default())
    }

    #[test]
    fn projects_point_in_front_of_camera() {
        let p = looking_north().project_point(Vec3i::ZERO, 0, Vec3i::new(100, 1000, 50));
        assert_eq!(p, ScreenPoint::Projected { x: 307, y: 192 });
    }

    #[test]
    fn near_plane_culls_both_axes() {
        let projector = looking_north();
        let near = projector.project_point(Vec3i::ZERO, 0, Vec3i::new(0, 49, 0));
        assert_eq!(near, ScreenPoint::Culled);
        assert_eq!(near.to_legacy(), (i32::MIN, i32::MIN));

        let edge = projector.project_point(Vec3i::ZERO, 0, Vec3i::new(0, 50, 0));
        assert_eq!(edge, ScreenPoint::Projected { x: 256, y: 167 });

        let behind = projector.project_point(Vec3i::ZERO, 0, Vec3i::new(0, -1000, 0));
        assert!(behind.is_culled());
    }

    #[test]
    fn zero_depth_is_culled_not_divided() {
        let projector = looking_north();
        assert!(projector.project_point(Vec3i::ZERO, 0, Vec3i::new(500, 0, 0)).is_culled());
    }

    #[test]
    fn yaw_quarter_turn() {
        let camera = Camera::new(Vec3i::ZERO, 512, 0);
        let projector = Projector::new(&camera, Viewport::default());
        let p = projector.project_point(Vec3i::ZERO, 0, Vec3i::new(-1000, 0, 0));
        assert_eq!(p, ScreenPoint::Projected { x: 256, y: 167 });
        assert!(projector.project_point(Vec3i::ZERO, 0, Vec3i::new(1000, 0, 0)).is_culled());
    }

    #[test]
    fn pitch_looking_down_uses_height_as_depth() {
        let camera = Camera::new(Vec3i::ZERO, 0, 512);
        let projector = Projector::new(&camera, Viewport::default());
        // -51200 / 1000 truncates toward zero
        let p = projector.project_point(Vec3i::ZERO, 0, Vec3i::new(0, 100, 1000));
        assert_eq!(p, ScreenPoint::Projected { x: 256, y: 116 });
    }

    #[test]
    fn object_center_is_relative_to_camera() {
        let camera = Camera::new(Vec3i::new(1000, 1000, 0), 0, 0);
        let projector = Projector::new(&camera, Viewport::default());
        let p = projector.project_point(Vec3i::new(1000, 2000, 0), 0, Vec3i::ZERO);
        assert_eq!(p, ScreenPoint::Projected { x: 256, y: 167 });
    }

    #[test]
    fn object_rotation_spins_model_first() {
        let projector = looking_north();
        // spins (0, 1000) onto (1000, 0) before moving to the center
        let p = projector.project_point(Vec3i::new(0, 2000, 0), 512, Vec3i::new(0, 1000, 0));
        assert_eq!(p, ScreenPoint::Projected { x: 512, y: 167 });
    }

    #[test]
    fn viewport_offset_shifts_output() {
        let projector = Projector::new(&Camera::default(), Viewport::default().with_offset(4, 8));
        let p = projector.project_point(Vec3i::ZERO, 0, Vec3i::new(0, 1000, 0));
        assert_eq!(p, ScreenPoint::Projected { x: 260, y: 175 });
    }

    #[test]
    fn overflow_wraps_like_32_bit_client() {
        let p = looking_north().project_point(Vec3i::ZERO, 0, Vec3i::new(i32::MAX, 1000, 0));
        // i32::MAX * 65536 wraps to -65536, so x1 == -1
        assert_eq!(p, ScreenPoint::Projected { x: 256, y: 167 });
    }

    #[test]
    fn batch_is_clamped_to_shortest_input() {
        let projector = looking_north();
        let xs = [0, 100, 200];
        let ys = [1000, 40];
        let zs = [0, 0, 0, 0, 0];
        let (sx, sy) = projector.project(Vec3i::ZERO, 0, &xs, &ys, &zs, 10);
        assert_eq!(sx, vec![256, CULLED]);
        assert_eq!(sy, vec![167, CULLED]);

        let (sx, _) = projector.project(Vec3i::ZERO, 0, &xs, &ys, &zs, 1);
        assert_eq!(sx.len(), 1);
    }

    #[test]
    fn project_into_respects_output_length() {
        let projector = looking_north();
        let xs = [0; 4];
        let ys = [1000; 4];
        let zs = [0; 4];
        let mut out_x = [7; 2];
        let mut out_y = [7; 2];
        let n = projector.project_into(Vec3i::ZERO, 0, &xs, &ys, &zs, 4, &mut out_x, &mut out_y);
        assert_eq!(n, 2);
        assert_eq!(out_x, [256, 256]);
    }

    #[test]
    fn tagged_and_legacy_outputs_agree() {
        let projector = looking_north();
        let points = [Vec3i::new(10, 900, 20), Vec3i::new(0, 10, 0), Vec3i::new(-300, 2000, -40)];
        let tagged = projector.project_points(Vec3i::ZERO, 0, &points);

        let xs: Vec<i32> = points.iter().map(|p| p.x).collect();
        let ys: Vec<i32> = points.iter().map(|p| p.y).collect();
        let zs: Vec<i32> = points.iter().map(|p| p.z).collect();
        let (sx, sy) = projector.project(Vec3i::ZERO, 0, &xs, &ys, &zs, usize::MAX);

        for (i, t) in tagged.iter().enumerate() {
            assert_eq!(*t, ScreenPoint::from_legacy(sx[i], sy[i]));
        }
        assert!(tagged[1].is_culled());
    }
}
