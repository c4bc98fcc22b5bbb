// Navigation mesh for floor-level path queries.
//
// The mesh is a set of `NavNode`s (walkable floor positions) connected by
// `NavEdge`s weighted with their Euclidean length. It is built by
// `grid.rs` from a floor plan (or by hand in tests) and searched by
// `pathfinding.rs`. Islands are the connected components of the mesh.
//
// All storage uses `Vec` indexed by `NavNodeId` / edge index for O(1)
// lookup and deterministic iteration order. No `HashMap`.
//
// See also: `oracle.rs`, which wraps a mesh and its island labels behind the
// `PathOracle` trait that `scene_graph_core` consumes.
//
// **Determinism.** Node ids are sequential in insertion order, and island
// ids are assigned in ascending order of each island's lowest node id.

use glam::Vec3;
use scene_graph_core::IslandId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Index of a node in `NavMesh.nodes`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NavNodeId(pub u32);

/// A walkable position on the floor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavNode {
    pub id: NavNodeId,
    pub position: Vec3,
    /// Indices into `NavMesh.edges` for edges that originate from this node.
    pub edge_indices: SmallVec<[usize; 4]>,
}

/// A directed edge. Every `add_edge` call creates a forward/reverse pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavEdge {
    pub from: NavNodeId,
    pub to: NavNodeId,
    /// Euclidean distance between the endpoints.
    pub cost: f32,
}

/// The navigation mesh container.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NavMesh {
    pub nodes: Vec<NavNode>,
    pub edges: Vec<NavEdge>,
}

impl NavMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at the given position. Returns its ID.
    pub fn add_node(&mut self, position: Vec3) -> NavNodeId {
        let id = NavNodeId(self.nodes.len() as u32);
        self.nodes.push(NavNode {
            id,
            position,
            edge_indices: SmallVec::new(),
        });
        id
    }

    /// Add a bidirectional edge between two nodes, costed by their distance.
    /// Returns the index of the forward (from -> to) edge.
    pub fn add_edge(&mut self, from: NavNodeId, to: NavNodeId) -> usize {
        let cost = self
            .node(from)
            .position
            .distance(self.node(to).position);

        let forward_idx = self.edges.len();
        self.edges.push(NavEdge { from, to, cost });
        let reverse_idx = self.edges.len();
        self.edges.push(NavEdge {
            from: to,
            to: from,
            cost,
        });

        self.nodes[from.0 as usize].edge_indices.push(forward_idx);
        self.nodes[to.0 as usize].edge_indices.push(reverse_idx);

        forward_idx
    }

    /// Get all edges originating from a node.
    pub fn neighbors(&self, node: NavNodeId) -> &[usize] {
        &self.nodes[node.0 as usize].edge_indices
    }

    /// Get a node by ID.
    pub fn node(&self, id: NavNodeId) -> &NavNode {
        &self.nodes[id.0 as usize]
    }

    /// Get an edge by index.
    pub fn edge(&self, idx: usize) -> &NavEdge {
        &self.edges[idx]
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Find the nearest node to a given position (Euclidean). Ties go to the
    /// lower id. Returns `None` if the mesh is empty.
    pub fn find_nearest_node(&self, pos: Vec3) -> Option<NavNodeId> {
        self.find_nearest_node_where(pos, |_| true)
    }

    /// Like `find_nearest_node`, restricted to nodes passing `accept`.
    pub fn find_nearest_node_where(
        &self,
        pos: Vec3,
        accept: impl Fn(&NavNode) -> bool,
    ) -> Option<NavNodeId> {
        self.nodes
            .iter()
            .filter(|n| accept(n))
            .min_by(|a, b| {
                a.position
                    .distance_squared(pos)
                    .total_cmp(&b.position.distance_squared(pos))
            })
            .map(|n| n.id)
    }

    /// Label every node with its connected component.
    pub fn islands(&self) -> IslandMap {
        let mut labels: Vec<Option<IslandId>> = vec![None; self.node_count()];
        let mut count = 0u32;
        let mut queue = VecDeque::new();

        for seed in 0..self.node_count() {
            if labels[seed].is_some() {
                continue;
            }
            let island = IslandId(count);
            count += 1;
            labels[seed] = Some(island);
            queue.push_back(NavNodeId(seed as u32));

            while let Some(current) = queue.pop_front() {
                for &edge_idx in self.neighbors(current) {
                    let next = self.edge(edge_idx).to;
                    let slot = &mut labels[next.0 as usize];
                    if slot.is_none() {
                        *slot = Some(island);
                        queue.push_back(next);
                    }
                }
            }
        }

        IslandMap {
            labels: labels.into_iter().flatten().collect(),
            count,
        }
    }
}

/// Connected-component labels for a `NavMesh`, indexed by `NavNodeId`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IslandMap {
    labels: Vec<IslandId>,
    count: u32,
}

impl IslandMap {
    pub fn island_of(&self, node: NavNodeId) -> IslandId {
        self.labels[node.0 as usize]
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Node ids on `island`, ascending.
    pub fn nodes_on(&self, island: IslandId) -> impl Iterator<Item = NavNodeId> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter(move |&(_, &label)| label == island)
            .map(|(i, _)| NavNodeId(i as u32))
    }
}
