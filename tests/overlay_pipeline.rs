// End-to-end overlay path: world tile -> local point -> ground height ->
// projected outline -> hull -> clip -> backend path.

use tilescape::clipper::clip_to_convex;
use tilescape::coords::{LOCAL_HALF_TILE_SIZE, SCENE_SIZE};
use tilescape::prelude::*;

const GROUND: i32 = -40;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn flat_scene() -> TileHeights {
    let samples = SCENE_SIZE as usize + 1;
    let tiles = SCENE_SIZE as usize;
    TileHeights::new(
        vec![vec![vec![GROUND; samples]; samples]; 4],
        vec![vec![vec![0; tiles]; tiles]; 4],
    )
    .expect("well-formed grids")
}

/// Screen corners of the tile at `world`, seen from 1000 units south and
/// 200 units above the ground.
fn project_tile(world: WorldPoint) -> (Vec<i32>, Vec<i32>) {
    let base = SceneBase::new(3200, 3200);
    let heights = flat_scene();
    let local = LocalPoint::from_world_point(base, 0, &world).expect("tile in scene");
    let ground = heights.tile_height(local, world.plane);
    assert_eq!(ground, GROUND);

    let camera = Camera::new(Vec3i::new(local.x, local.y - 1000, ground - 200), 0, 0);
    let projector = Projector::new(&camera, Viewport::default());

    let h = LOCAL_HALF_TILE_SIZE;
    let xs = [-h, h, h, -h];
    let ys = [-h, -h, h, h];
    let zs = [0; 4];
    projector.project(Vec3i::new(local.x, local.y, ground), 0, &xs, &ys, &zs, 4)
}

#[test]
fn tile_outline_projects_to_trapezoid() {
    init_logging();
    let (xs, ys) = project_tile(WorldPoint::new(3210, 3215, 0));
    // near edge is wider and lower on screen than the far edge
    assert_eq!(xs, vec![221, 291, 286, 226]);
    assert_eq!(ys, vec![276, 276, 263, 263]);
}

#[test]
fn hull_clip_and_outline() {
    init_logging();
    let (xs, ys) = project_tile(WorldPoint::new(3210, 3215, 0));

    let hull = convex_hull(&xs, &ys).expect("four visible corners");
    assert_eq!(hull.len(), 4);
    assert!(hull.contains(Point::new(256, 270)));
    assert!(!hull.contains(Point::new(256, 200)));

    // keep the left half of the viewport
    let left_half = SimplePolygon::from_arrays(&[0, 256, 256, 0], &[0, 0, 334, 334]);
    let clipped = clip_to_convex(&hull, &left_half);
    let mut corners = clipped.to_points();
    corners.sort_unstable_by_key(|p| (p.x, p.y));
    assert_eq!(
        corners,
        vec![
            Point::new(221, 276),
            Point::new(226, 263),
            Point::new(256, 263),
            Point::new(256, 276),
        ]
    );
    assert_eq!(clipped.bounds(), Bounds::new(221, 263, 35, 13));

    let to_canvas = AffineTransform::translation(100.0, 50.0);
    let path: Vec<PathSegment> = clipped.outline(Some(to_canvas)).collect();
    assert_eq!(path.len(), clipped.len() + 1);
    let last = clipped.get(clipped.len() - 1).expect("non-empty");
    assert_eq!(
        path[0],
        PathSegment::MoveTo {
            x: last.x as f64 + 100.0,
            y: last.y as f64 + 50.0
        }
    );
    assert!(path[1..]
        .iter()
        .all(|s| matches!(s, PathSegment::LineTo { .. })));
}

#[test]
fn camera_facing_away_culls_everything() {
    init_logging();
    let base = SceneBase::new(3200, 3200);
    let local = LocalPoint::from_world(base, 3210, 3215).expect("tile in scene");
    // half a turn: looking south, away from the tile
    let camera = Camera::new(Vec3i::new(local.x, local.y - 1000, -200), 1024, 0);
    let projector = Projector::new(&camera, Viewport::default());

    let corners = [
        Vec3i::new(-64, -64, 0),
        Vec3i::new(64, -64, 0),
        Vec3i::new(64, 64, 0),
    ];
    let projected = projector.project_points(Vec3i::new(local.x, local.y, 0), 0, &corners);
    assert!(projected.iter().all(ScreenPoint::is_culled));
    assert!(convex_hull_screen(&projected).is_none());
}

#[test]
fn world_tile_round_trips_through_scene() {
    let base = SceneBase::new(3200, 3200);
    let world = WorldPoint::new(3210, 3215, 1);
    let local = LocalPoint::from_world_point(base, 1, &world).expect("tile in scene");
    assert_eq!(WorldPoint::from_local(base, local, 1), world);
    assert!(LocalPoint::from_world_point(base, 0, &world).is_none());
}
