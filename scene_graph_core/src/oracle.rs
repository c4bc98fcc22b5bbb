// The navmesh capability consumed by graph construction.
//
// Graph construction never looks at navmesh geometry directly. Everything it
// needs (island enumeration, snapping, shortest paths, and a vertex snapshot
// for diagnostics) goes through the `PathOracle` trait, so the builder can run
// against a real navmesh, the reference graph oracle in `scene_graph_nav`, or
// a scripted test double.
//
// All methods take `&self`: queries are expected to be idempotent and free of
// side effects. "Not found" is always `None` (or an empty list), never an
// error.

use crate::types::IslandId;
use glam::Vec3;

/// Island partitioning, snapping and shortest paths over a navmesh.
pub trait PathOracle {
    /// Number of disconnected navmesh islands. Island ids are
    /// `0..island_count()`.
    fn island_count(&self) -> u32;

    /// The island closest to `point`, if any.
    fn get_island(&self, point: Vec3) -> Option<IslandId>;

    /// The navigable point on `island` closest to `point`, if any.
    fn snap_point(&self, point: Vec3, island: IslandId) -> Option<Vec3>;

    /// Shortest navigable path from `start` to `end`, endpoints included.
    fn find_shortest_path(&self, start: Vec3, end: Vec3) -> Option<Vec<Vec3>>;

    /// Vertices of one island, for visualization.
    fn build_navmesh_vertices(&self, island: IslandId) -> Vec<Vec3>;
}

/// A resolved room-to-room route from `PathOracle` queries.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutedPath {
    /// Densified path from `start` to `target`.
    pub points: Vec<Vec3>,
    /// Source room anchor, snapped onto the island.
    pub start: Vec3,
    /// Target room anchor, snapped onto the island.
    pub target: Vec3,
}
