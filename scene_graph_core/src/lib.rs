// scene_graph_core: room-adjacency graphs from labeled 3D scenes.
//
// Takes an annotated scene (regions of labeled object boxes) and a navmesh
// path oracle, and produces a topological graph: which rooms are directly
// reachable from which, and by what floor-level route. The navmesh itself,
// scene loading, and rendering all live outside this crate; the only coupling
// to a navmesh is the `PathOracle` trait.
//
// Module overview:
// - `types.rs`:       RoomId, IslandId, RoomPair (ordered connection key).
// - `geometry.rs`:    Box corners, extents, centroid statistics, path length
//                     and path densification.
// - `scene.rs`:       SemanticScene / Region / RawObject, the input boundary.
// - `object.rs`:      SpatialObject, immutable labeled box per annotation.
// - `room.rs`:        Room: an object cluster with its centroid box,
//                     containment test and outlier filtering.
// - `oracle.rs`:      PathOracle trait + RoutedPath.
// - `connections.rs`: ConnectionTable of pair-keyed paths; symmetrization.
// - `graph.rs`:       SceneGraph, the construction pipeline and adjacency
//                     predicates.
// - `export.rs`:      1-indexed serialized views (full and release forms).
// - `config.rs`:      GraphConfig holding every tunable; JSON-loadable.
// - `error.rs`:       GraphError for parsing/serialization failures.
//
// The reference navmesh oracle lives in the sibling crate `scene_graph_nav`.
//
// Construction is deterministic: rooms keep region order, the connection
// table is a `BTreeMap`, and no step depends on hashing or wall-clock time.

pub mod config;
pub mod connections;
pub mod error;
pub mod export;
pub mod geometry;
pub mod graph;
pub mod object;
pub mod oracle;
pub mod room;
pub mod scene;
#[cfg(test)]
mod test_oracle;
pub mod types;

pub use config::{ContainmentBand, GraphConfig};
pub use error::GraphError;
pub use graph::{DoorProbe, ProbeSide, SceneGraph};
pub use oracle::{PathOracle, RoutedPath};
pub use types::{IslandId, RoomId, RoomPair};
