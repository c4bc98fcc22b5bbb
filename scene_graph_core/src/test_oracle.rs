// Scripted `PathOracle` for unit tests.
//
// Islands are plain vertex lists; `get_island`/`snap_point` pick the nearest
// vertex (lowest index wins ties). Shortest paths are canned: a query
// succeeds only when its endpoints match the ends of a registered path,
// in either direction.

use crate::oracle::PathOracle;
use crate::types::IslandId;
use glam::Vec3;

const MATCH_EPSILON: f32 = 1e-4;

#[derive(Clone, Debug, Default)]
pub(crate) struct ScriptedOracle {
    islands: Vec<Vec<Vec3>>,
    paths: Vec<Vec<Vec3>>,
}

impl ScriptedOracle {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add an island with the given vertices. Ids are assigned in order.
    pub(crate) fn with_island(mut self, vertices: Vec<Vec3>) -> Self {
        self.islands.push(vertices);
        self
    }

    /// Register a canned shortest path (answered in both directions).
    pub(crate) fn with_path(mut self, path: Vec<Vec3>) -> Self {
        self.paths.push(path);
        self
    }

    fn nearest(vertices: &[Vec3], point: Vec3) -> Option<(usize, f32)> {
        vertices
            .iter()
            .map(|v| v.distance_squared(point))
            .enumerate()
            .fold(None, |best, (i, d)| match best {
                Some((_, best_d)) if best_d <= d => best,
                _ => Some((i, d)),
            })
    }
}

impl PathOracle for ScriptedOracle {
    fn island_count(&self) -> u32 {
        self.islands.len() as u32
    }

    fn get_island(&self, point: Vec3) -> Option<IslandId> {
        self.islands
            .iter()
            .enumerate()
            .filter_map(|(k, verts)| Self::nearest(verts, point).map(|(_, d)| (k, d)))
            .fold(None, |best: Option<(usize, f32)>, (k, d)| match best {
                Some((_, best_d)) if best_d <= d => best,
                _ => Some((k, d)),
            })
            .map(|(k, _)| IslandId(k as u32))
    }

    fn snap_point(&self, point: Vec3, island: IslandId) -> Option<Vec3> {
        let verts = self.islands.get(island.0 as usize)?;
        Self::nearest(verts, point).map(|(i, _)| verts[i])
    }

    fn find_shortest_path(&self, start: Vec3, end: Vec3) -> Option<Vec<Vec3>> {
        let close = |a: Vec3, b: Vec3| a.distance(b) < MATCH_EPSILON;
        self.paths.iter().find_map(|path| {
            let (&first, &last) = (path.first()?, path.last()?);
            if close(first, start) && close(last, end) {
                Some(path.clone())
            } else if close(first, end) && close(last, start) {
                Some(path.iter().rev().copied().collect())
            } else {
                None
            }
        })
    }

    fn build_navmesh_vertices(&self, island: IslandId) -> Vec<Vec3> {
        self.islands
            .get(island.0 as usize)
            .cloned()
            .unwrap_or_default()
    }
}
