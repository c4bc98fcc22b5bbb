// Synthetic floor plans for end-to-end pipeline tests.
//
// A `RowPlan` is a row of equal rooms along +x. Each room is furnished with
// four objects at the corners of its footprint plus a placeholder
// ("Unknown") object that the pipeline must discard. Between consecutive
// rooms is a wall whose doorway is described by a `Doorway`:
//
//   room 0 | room 1 | room 2 ...
//   x: 0 .. 6 .. 12 .. 18          (walls at x = 6, 12, ...)
//
// The plan produces both the semantic scene and a matching floor-grid
// navmesh, so the real construction pipeline can run against the reference
// oracle with no hand-scripted paths.
//
// See also: `tests/full_pipeline.rs` for the scenarios and
// `benches/construct_graph.rs` for the benchmark built on the same plans.

use glam::Vec3;
use scene_graph_core::scene::{RawObject, Region, SemanticScene};
use scene_graph_nav::{FloorGrid, NavMesh, NavMeshOracle, build_floor_grid};

/// Width of each room along x (wall to wall).
pub const ROOM_WIDTH: f32 = 6.0;
/// Depth of the row along z.
pub const ROOM_DEPTH: f32 = 4.0;
/// Height of the walkable floor.
pub const FLOOR_Y: f32 = -1.5;
/// Navmesh grid spacing.
pub const GRID_SPACING: f32 = 0.5;
/// Query points farther than this from the floor grid resolve to nothing.
pub const MAX_SNAP_DISTANCE: f32 = 1.0;

/// Furniture labels, cycled per room.
const FURNITURE: [&str; 4] = ["bed", "sofa", "table", "cabinet"];

/// What connects two neighboring rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Doorway {
    /// An open gap in the wall, with no annotated door.
    Gap,
    /// An open gap with a "door frame" annotated in the left room.
    FramedGap,
    /// A closed door: annotated in the left room, but the wall is solid so
    /// the two sides are separate navmesh islands.
    ClosedDoor,
}

impl Doorway {
    fn is_passable(self) -> bool {
        !matches!(self, Doorway::ClosedDoor)
    }

    fn has_frame(self) -> bool {
        !matches!(self, Doorway::Gap)
    }
}

/// A row of rooms separated by doorways.
#[derive(Clone, Debug)]
pub struct RowPlan {
    /// `doorways[i]` sits between room `i` and room `i + 1`.
    pub doorways: Vec<Doorway>,
}

impl RowPlan {
    pub fn new(doorways: Vec<Doorway>) -> Self {
        Self { doorways }
    }

    /// `rooms` rooms joined by plain gaps.
    pub fn open(rooms: usize) -> Self {
        Self::new(vec![Doorway::Gap; rooms.saturating_sub(1)])
    }

    pub fn room_count(&self) -> usize {
        self.doorways.len() + 1
    }

    /// Center of room `i`'s footprint at y = 0.
    pub fn room_center(&self, i: usize) -> Vec3 {
        Vec3::new((i as f32 + 0.5) * ROOM_WIDTH, 0.0, ROOM_DEPTH / 2.0)
    }

    /// x of the wall on the right of room `i`.
    pub fn wall_x(&self, i: usize) -> f32 {
        (i + 1) as f32 * ROOM_WIDTH
    }

    /// One region per room, in room order.
    pub fn scene(&self) -> SemanticScene {
        let regions = (0..self.room_count())
            .map(|i| Region {
                objects: self.room_objects(i),
            })
            .collect();
        SemanticScene { regions }
    }

    fn room_objects(&self, i: usize) -> Vec<RawObject> {
        let c = self.room_center(i);
        let size = Vec3::splat(0.5);
        let label = |k: usize| FURNITURE[(i + k) % FURNITURE.len()];
        let mut objects = vec![
            RawObject::new(label(0), c + Vec3::new(-2.5, -1.0, -1.5), size),
            RawObject::new(label(1), c + Vec3::new(2.5, 1.0, 1.5), size),
            RawObject::new(label(2), c + Vec3::new(-2.5, 0.0, 1.5), size),
            RawObject::new(label(3), c + Vec3::new(2.5, 0.0, -1.5), size),
            RawObject::new("Unknown", c, size),
        ];
        if self.doorways.get(i).is_some_and(|d| d.has_frame()) {
            objects.push(RawObject::new(
                "door frame",
                Vec3::new(self.wall_x(i), 0.0, c.z),
                Vec3::new(0.2, 2.0, 1.0),
            ));
        }
        objects
    }

    /// Floor grid covering the whole row.
    pub fn grid(&self) -> FloorGrid {
        let cells_x = (self.room_count() as f32 * ROOM_WIDTH / GRID_SPACING) as u32 + 1;
        let cells_z = (ROOM_DEPTH / GRID_SPACING) as u32 + 1;
        FloorGrid::new(Vec3::new(0.0, FLOOR_Y, 0.0), cells_x, cells_z, GRID_SPACING)
    }

    /// Whether a grid cell is open floor. Wall cells are blocked except for
    /// the one-meter doorway around the middle of a passable wall.
    pub fn is_walkable(&self, p: Vec3) -> bool {
        self.doorways.iter().enumerate().all(|(i, doorway)| {
            let on_wall = (p.x - self.wall_x(i)).abs() < 1e-3;
            !on_wall || (doorway.is_passable() && (p.z - ROOM_DEPTH / 2.0).abs() <= 0.5)
        })
    }

    pub fn navmesh(&self) -> NavMesh {
        build_floor_grid(&self.grid(), |p| self.is_walkable(p))
    }

    pub fn oracle(&self) -> NavMeshOracle {
        NavMeshOracle::new(self.navmesh()).with_max_snap_distance(MAX_SNAP_DISTANCE)
    }
}

/// Install a test-writer tracing subscriber (once per process).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
