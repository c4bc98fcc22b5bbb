// scene_graph_nav: an in-memory navmesh implementing `PathOracle`.
//
// `scene_graph_core` only needs a navmesh through its `PathOracle` trait.
// This crate supplies a small reference implementation: a point graph with
// Euclidean edges, connected-component islands, and A* search. It does not
// derive walkable surfaces from scene geometry; meshes are built by hand or
// from a floor grid with a walkability predicate. Integration tests and
// benchmarks use it to drive the full construction pipeline.
//
// Module overview:
// - `nav.rs`:         NavMesh, NavNode, NavEdge, island labeling.
// - `pathfinding.rs`: A* search (min-heap, straight-line heuristic).
// - `grid.rs`:        FloorGrid and `build_floor_grid`.
// - `oracle.rs`:      NavMeshOracle, the `PathOracle` implementation.

pub mod grid;
pub mod nav;
pub mod oracle;
pub mod pathfinding;

pub use grid::{FloorGrid, build_floor_grid};
pub use nav::{IslandMap, NavMesh, NavNodeId};
pub use oracle::NavMeshOracle;
pub use pathfinding::{PathResult, astar};
