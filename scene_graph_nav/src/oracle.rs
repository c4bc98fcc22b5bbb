// `PathOracle` over an in-memory `NavMesh`.
//
// Island ids come from `NavMesh::islands()` and are fixed when the oracle is
// built. Point queries resolve to the nearest mesh node; an optional
// `max_snap_distance` rejects points that are too far from any node, which
// is how probes placed outside the walkable floor come back as `None`.
//
// Shortest paths are A* node paths bracketed by the exact requested
// endpoints (an endpoint already sitting on its node is not duplicated).

use crate::nav::{IslandMap, NavMesh, NavNodeId};
use crate::pathfinding::astar;
use glam::Vec3;
use scene_graph_core::{IslandId, PathOracle};
use std::iter;

#[derive(Clone, Debug)]
pub struct NavMeshOracle {
    mesh: NavMesh,
    islands: IslandMap,
    max_snap_distance: Option<f32>,
}

impl NavMeshOracle {
    pub fn new(mesh: NavMesh) -> Self {
        let islands = mesh.islands();
        tracing::debug!(
            nodes = mesh.node_count(),
            islands = islands.count(),
            "navmesh oracle ready"
        );
        Self {
            mesh,
            islands,
            max_snap_distance: None,
        }
    }

    /// Reject query points farther than `distance` from their nearest node.
    pub fn with_max_snap_distance(mut self, distance: f32) -> Self {
        self.max_snap_distance = Some(distance);
        self
    }

    pub fn mesh(&self) -> &NavMesh {
        &self.mesh
    }

    pub fn islands(&self) -> &IslandMap {
        &self.islands
    }

    /// Nearest node to `point` (optionally on `island`) within snap range.
    fn resolve(&self, point: Vec3, island: Option<IslandId>) -> Option<NavNodeId> {
        let node = self.mesh.find_nearest_node_where(point, |n| {
            island.is_none_or(|island| self.islands.island_of(n.id) == island)
        })?;
        let distance = self.mesh.node(node).position.distance(point);
        match self.max_snap_distance {
            Some(max) if distance > max => None,
            _ => Some(node),
        }
    }
}

impl PathOracle for NavMeshOracle {
    fn island_count(&self) -> u32 {
        self.islands.count()
    }

    fn get_island(&self, point: Vec3) -> Option<IslandId> {
        self.resolve(point, None)
            .map(|node| self.islands.island_of(node))
    }

    fn snap_point(&self, point: Vec3, island: IslandId) -> Option<Vec3> {
        if island.0 >= self.islands.count() {
            return None;
        }
        self.resolve(point, Some(island))
            .map(|node| self.mesh.node(node).position)
    }

    fn find_shortest_path(&self, start: Vec3, end: Vec3) -> Option<Vec<Vec3>> {
        let from = self.resolve(start, None)?;
        let to = self.resolve(end, None)?;
        if self.islands.island_of(from) != self.islands.island_of(to) {
            tracing::trace!(%start, %end, "endpoints on different islands");
            return None;
        }
        let nodes = astar(&self.mesh, from, to)?.points(&self.mesh);

        let mut points = Vec::with_capacity(nodes.len() + 2);
        for pos in iter::once(start).chain(nodes).chain(iter::once(end)) {
            if points.last() != Some(&pos) {
                points.push(pos);
            }
        }
        Some(points)
    }

    fn build_navmesh_vertices(&self, island: IslandId) -> Vec<Vec3> {
        self.islands
            .nodes_on(island)
            .map(|node| self.mesh.node(node).position)
            .collect()
    }
}
