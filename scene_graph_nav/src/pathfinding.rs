// A* search over the navigation mesh.
//
// The open set is a `BinaryHeap` of `Reverse((Cost, NavNodeId))`, so the
// cheapest estimate pops first and equal estimates pop in node id order.
// Per-node scores and parent links live in one `Vec` indexed by
// `NavNodeId`; no `HashMap`, so the search is deterministic.
//
// Edge costs are Euclidean lengths and the heuristic is the straight-line
// distance to the goal, which is admissible.
//
// See also: `nav.rs` for the mesh being searched, `oracle.rs` which wraps
// node paths with the caller's exact endpoints.

use crate::nav::{NavMesh, NavNodeId};
use glam::Vec3;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::iter;

/// The result of a successful A* search.
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Sequence of node IDs from start to goal (inclusive).
    pub nodes: Vec<NavNodeId>,
    /// Sum of edge lengths along `nodes`.
    pub total_cost: f32,
}

impl PathResult {
    /// Node positions along the path.
    pub fn points(&self, mesh: &NavMesh) -> Vec<Vec3> {
        self.nodes.iter().map(|&n| mesh.node(n).position).collect()
    }
}

/// A path cost with a total order, so it can key the open set.
#[derive(Clone, Copy, Debug)]
struct Cost(f32);

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Per-node search bookkeeping.
#[derive(Clone, Copy)]
struct NodeState {
    /// Cheapest known cost from the start.
    g: f32,
    parent: Option<NavNodeId>,
    settled: bool,
}

/// Find the shortest path from `start` to `goal` using A*.
///
/// The open set pops the lowest estimated total, ties broken by the lower
/// node id. Returns `None` if no path exists or if the mesh is empty.
pub fn astar(mesh: &NavMesh, start: NavNodeId, goal: NavNodeId) -> Option<PathResult> {
    if mesh.node_count() == 0 {
        return None;
    }
    let goal_pos = mesh.node(goal).position;
    let estimate = |node: NavNodeId| mesh.node(node).position.distance(goal_pos);

    let mut state = vec![
        NodeState {
            g: f32::INFINITY,
            parent: None,
            settled: false,
        };
        mesh.node_count()
    ];
    state[start.0 as usize].g = 0.0;

    let mut open = BinaryHeap::new();
    open.push(Reverse((Cost(estimate(start)), start)));

    while let Some(Reverse((_, current))) = open.pop() {
        if current == goal {
            return Some(trace_back(&state, goal));
        }
        let here = &mut state[current.0 as usize];
        if here.settled {
            continue;
        }
        here.settled = true;
        let g = here.g;

        for &edge_idx in mesh.neighbors(current) {
            let edge = mesh.edge(edge_idx);
            let next = &mut state[edge.to.0 as usize];
            let candidate = g + edge.cost;
            if next.settled || candidate >= next.g {
                continue;
            }
            next.g = candidate;
            next.parent = Some(current);
            open.push(Reverse((Cost(candidate + estimate(edge.to)), edge.to)));
        }
    }

    None
}

/// Walk parent links back from `goal` to the start.
fn trace_back(state: &[NodeState], goal: NavNodeId) -> PathResult {
    let mut nodes: Vec<NavNodeId> =
        iter::successors(Some(goal), |n| state[n.0 as usize].parent).collect();
    nodes.reverse();
    PathResult {
        nodes,
        total_cost: state[goal.0 as usize].g,
    }
}
