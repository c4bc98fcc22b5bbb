// Floor-grid navmesh construction.
//
// Lays a regular grid of nodes over a rectangle of the floor at a fixed
// height and links each walkable cell to its walkable +x and +z neighbors
// (4-connected). Cells rejected by the caller's predicate (walls, closed
// doors, furniture) get no node, which is how separate islands arise.
//
// Nodes are created row by row (z outer, x inner), so ids and therefore
// island numbering are deterministic for a given grid and predicate.

use crate::nav::{NavMesh, NavNodeId};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A rectangular floor grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloorGrid {
    /// Position of cell (0, 0). Its `y` is the floor height of every node.
    pub origin: Vec3,
    pub cells_x: u32,
    pub cells_z: u32,
    /// Distance between adjacent cells.
    pub spacing: f32,
}

impl FloorGrid {
    pub fn new(origin: Vec3, cells_x: u32, cells_z: u32, spacing: f32) -> Self {
        Self {
            origin,
            cells_x,
            cells_z,
            spacing,
        }
    }

    /// World position of cell `(ix, iz)`.
    pub fn cell_position(&self, ix: u32, iz: u32) -> Vec3 {
        self.origin + Vec3::new(ix as f32 * self.spacing, 0.0, iz as f32 * self.spacing)
    }
}

/// Build a navmesh over `grid`, placing a node on every cell whose position
/// passes `walkable`.
pub fn build_floor_grid(grid: &FloorGrid, walkable: impl Fn(Vec3) -> bool) -> NavMesh {
    let mut mesh = NavMesh::new();
    let width = grid.cells_x as usize;
    let mut cells: Vec<Option<NavNodeId>> = Vec::with_capacity(width * grid.cells_z as usize);

    for iz in 0..grid.cells_z {
        for ix in 0..grid.cells_x {
            let pos = grid.cell_position(ix, iz);
            let node = walkable(pos).then(|| mesh.add_node(pos));
            let idx = cells.len();
            cells.push(node);

            let Some(node) = node else { continue };
            let left = (ix > 0).then(|| cells[idx - 1]).flatten();
            let below = (iz > 0).then(|| cells[idx - width]).flatten();
            for neighbor in [left, below].into_iter().flatten() {
                mesh.add_edge(neighbor, node);
            }
        }
    }

    tracing::debug!(
        nodes = mesh.node_count(),
        edges = mesh.edges.len() / 2,
        "built floor grid"
    );
    mesh
}
