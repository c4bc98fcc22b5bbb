// Room-adjacency graph construction.
//
// `SceneGraph::construct()` turns a `SemanticScene` into rooms plus a
// symmetric table of room-to-room paths by querying a `PathOracle`. The
// pipeline runs once, in this order, each phase relying on the previous one:
//
//   1. `populate_rooms`: one `Room` per region with valid objects.
//   2. `filter_outlier_objects`: drop mis-assigned objects, recompute boxes,
//      drop rooms that collapse. Room indices are final after this phase.
//   3. `connect_rooms`: direct adjacency. For every ordered room pair and
//      every island, route floor anchor to floor anchor; keep routes that
//      stay inside the two rooms, resolving pass-through conflicts by path
//      length.
//   4. `connect_rooms_through_closed_doors`: for each door frame, probe both
//      sides. If the probes land on different islands the door is closed,
//      and a two-leg path through it links the room to the room beyond.
//   5. `make_connections_symmetric`: add reversed paths for one-way entries.
//   6. `snapshot_navmesh`: copy island vertices for visualization.
//
// Oracle misses are never errors: a `None` from the oracle simply means "no
// connection along this route".
//
// See also: `room.rs` for the containment test every predicate is built on,
// `connections.rs` for the pair-keyed table, `export.rs` for the serialized
// form, `oracle.rs` for the `PathOracle` trait.

use crate::config::GraphConfig;
use crate::connections::ConnectionTable;
use crate::geometry::{densify, path_length};
use crate::object::SpatialObject;
use crate::oracle::{PathOracle, RoutedPath};
use crate::room::Room;
use crate::scene::SemanticScene;
use crate::types::{IslandId, RoomId, RoomPair};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, trace};

/// Which side of a door frame a probe was taken on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeSide {
    /// Past the frame, away from the room that owns the door.
    Exterior,
    /// Inside the room that owns the door.
    Interior,
}

/// One door probe, kept for diagnostics whether or not it produced a
/// connection. `island`/`point` are `None` when the oracle couldn't place the
/// probe.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoorProbe {
    pub room: RoomId,
    pub side: ProbeSide,
    pub island: Option<IslandId>,
    pub point: Option<Vec3>,
}

/// A path through a closed door, ready to be recorded.
struct DoorRoute {
    path: Vec<Vec3>,
    room_anchor: Vec3,
    target_anchor: Vec3,
}

/// Rooms and the paths connecting them.
#[derive(Clone, Debug)]
pub struct SceneGraph {
    config: GraphConfig,
    rooms: Vec<Room>,
    connections: ConnectionTable,
    snapped_points: BTreeMap<(RoomId, IslandId), Vec3>,
    navmesh_islands: Vec<Vec<Vec3>>,
    door_probes: Vec<DoorProbe>,
}

impl SceneGraph {
    /// An empty graph. Use `construct()` to build one from a scene.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            rooms: Vec::new(),
            connections: ConnectionTable::new(),
            snapped_points: BTreeMap::new(),
            navmesh_islands: Vec::new(),
            door_probes: Vec::new(),
        }
    }

    /// Run the full construction pipeline.
    pub fn construct(scene: &SemanticScene, oracle: &dyn PathOracle, config: GraphConfig) -> Self {
        let mut graph = Self::new(config);
        graph.populate_rooms(scene);
        graph.filter_outlier_objects();
        graph.connect_rooms(oracle);
        graph.connect_rooms_through_closed_doors(oracle);
        graph.make_connections_symmetric();
        graph.snapshot_navmesh(oracle);
        info!(
            rooms = graph.rooms.len(),
            connections = graph.connections.len(),
            islands = graph.navmesh_islands.len(),
            "scene graph constructed"
        );
        graph
    }

    // -----------------------------------------------------------------------
    // Read-only views
    // -----------------------------------------------------------------------

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn connections(&self) -> &ConnectionTable {
        &self.connections
    }

    /// Navmesh anchor used for each (room, island) pair.
    pub fn snapped_points(&self) -> &BTreeMap<(RoomId, IslandId), Vec3> {
        &self.snapped_points
    }

    pub fn navmesh_islands(&self) -> &[Vec<Vec3>] {
        &self.navmesh_islands
    }

    /// Door probes in the order they were taken: exterior then interior for
    /// each door.
    pub fn door_probes(&self) -> &[DoorProbe] {
        &self.door_probes
    }

    /// Attach a semantic label to a room. Returns `false` for an unknown id.
    pub fn set_room_label(&mut self, id: RoomId, label: impl Into<String>) -> bool {
        match self.rooms.get_mut(id.index()) {
            Some(room) => {
                room.set_label(label);
                true
            }
            None => false,
        }
    }

    fn room_ids(&self) -> impl Iterator<Item = RoomId> + use<> {
        (0..self.rooms.len() as u32).map(RoomId)
    }

    // -----------------------------------------------------------------------
    // Phase 1-2: rooms
    // -----------------------------------------------------------------------

    fn populate_rooms(&mut self, scene: &SemanticScene) {
        for (region_index, region) in scene.regions.iter().enumerate() {
            let objects: Vec<SpatialObject> = region
                .objects
                .iter()
                .filter_map(|raw| SpatialObject::from_raw(raw, &self.config))
                .collect();
            let discarded = region.objects.len() - objects.len();
            if discarded > 0 {
                debug!(region = region_index, discarded, "discarded placeholder objects");
            }
            match Room::new(objects, self.config.min_room_dimension) {
                Some(room) => self.rooms.push(room),
                None => debug!(region = region_index, "region yields no room"),
            }
        }
        info!(
            regions = scene.regions.len(),
            rooms = self.rooms.len(),
            "populated rooms"
        );
    }

    fn filter_outlier_objects(&mut self) {
        let factor = self.config.outlier_std_dev_factor;
        let removed: usize = self
            .rooms
            .iter_mut()
            .map(|room| room.filter_outliers(factor))
            .sum();

        let min_dimension = self.config.min_room_dimension;
        let before = self.rooms.len();
        self.rooms.retain(|room| room.has_volume(min_dimension));
        let collapsed = before - self.rooms.len();
        if collapsed > 0 {
            debug!(collapsed, "dropped rooms that collapsed after filtering");
        }
        info!(removed, rooms = self.rooms.len(), "filtered outlier objects");
    }

    // -----------------------------------------------------------------------
    // Phase 3: direct adjacency
    // -----------------------------------------------------------------------

    fn connect_rooms(&mut self, oracle: &dyn PathOracle) {
        let island_count = oracle.island_count();
        for source in self.room_ids() {
            for target in self.room_ids() {
                if source == target {
                    continue;
                }
                for island in (0..island_count).map(IslandId) {
                    let Some(route) = self.compute_path(source, target, island, oracle) else {
                        continue;
                    };
                    if !self.is_adjacent(source, target, &route.points) {
                        trace!(%source, %target, %island, "route crosses a third room");
                        continue;
                    }
                    self.snapped_points.insert((source, island), route.start);
                    self.record_candidate(RoomPair::new(source, target), route.points);
                }
            }
        }
        info!(connections = self.connections.len(), "connected adjacent rooms");
    }

    /// Offer a direct-adjacency candidate to the table.
    ///
    /// Ignored if the two rooms are already connected either way. If the path
    /// runs through a room the source is already connected to, only the
    /// shorter of the two connections survives. Returns whether the candidate
    /// was recorded.
    fn record_candidate(&mut self, pair: RoomPair, path: Vec<Vec3>) -> bool {
        if self.connections.contains_either(pair) {
            return false;
        }
        match self.passes_through_adjacent_room(pair.from, pair.to, &path) {
            None => {
                self.connections.insert(pair, path);
                true
            }
            Some(conflict) => {
                let candidate_length = path_length(&path);
                let existing_length = self
                    .connections
                    .get(conflict)
                    .map_or(f32::INFINITY, path_length);
                if candidate_length < existing_length {
                    debug!(
                        %pair, %conflict, candidate_length, existing_length,
                        "shorter connection replaces pass-through conflict"
                    );
                    self.connections.remove(conflict);
                    self.connections.insert(pair, path);
                    true
                } else {
                    trace!(%pair, %conflict, "pass-through candidate is not shorter");
                    false
                }
            }
        }
    }

    /// Route between the floor anchors of two rooms on one island.
    ///
    /// Both anchors are snapped onto `island` and must still lie inside their
    /// own room (snapping drifts through walls where the navmesh is sparse).
    /// On success the oracle's path is densified
    /// `config.direct_interpolation_passes` times.
    pub fn compute_path(
        &self,
        source: RoomId,
        target: RoomId,
        island: IslandId,
        oracle: &dyn PathOracle,
    ) -> Option<RoutedPath> {
        let band = &self.config.containment;
        let source_room = self.room(source)?;
        let target_room = self.room(target)?;

        let start = oracle.snap_point(source_room.floor_point(), island)?;
        let end = oracle.snap_point(target_room.floor_point(), island)?;
        if !source_room.contains_point(start, band) || !target_room.contains_point(end, band) {
            trace!(%source, %target, %island, "snapped anchor outside its room");
            return None;
        }

        let raw = oracle.find_shortest_path(start, end)?;
        if raw.is_empty() {
            return None;
        }
        Some(RoutedPath {
            points: densify(&raw, self.config.direct_interpolation_passes),
            start,
            target: end,
        })
    }

    /// Whether `path` stays out of every room other than `source` and
    /// `target`. Points inside a third room are tolerated when they are also
    /// inside the source or target (overlapping boxes around doorways).
    pub fn is_adjacent(&self, source: RoomId, target: RoomId, path: &[Vec3]) -> bool {
        let band = &self.config.containment;
        let (Some(source_room), Some(target_room)) = (self.room(source), self.room(target)) else {
            return false;
        };
        let third_rooms: Vec<&Room> = self
            .room_ids()
            .filter(|&id| id != source && id != target)
            .map(|id| &self.rooms[id.index()])
            .collect();

        !path.iter().any(|&point| {
            !source_room.contains_point(point, band)
                && !target_room.contains_point(point, band)
                && third_rooms.iter().any(|room| room.contains_point(point, band))
        })
    }

    /// Find an existing connection of `source` (to any room but `target`)
    /// whose far room `path` passes through. Connections are scanned in key
    /// order; the first hit is returned.
    pub fn passes_through_adjacent_room(
        &self,
        source: RoomId,
        target: RoomId,
        path: &[Vec3],
    ) -> Option<RoomPair> {
        let band = &self.config.containment;
        self.connections
            .touching(source)
            .filter(|&(_, other)| other != target)
            .find(|&(_, other)| {
                self.room(other)
                    .is_some_and(|room| path.iter().any(|&p| room.contains_point(p, band)))
            })
            .map(|(pair, _)| pair)
    }

    // -----------------------------------------------------------------------
    // Phase 4: door-mediated adjacency
    // -----------------------------------------------------------------------

    fn connect_rooms_through_closed_doors(&mut self, oracle: &dyn PathOracle) {
        let before = self.connections.len();
        for source in self.room_ids() {
            let doors: Vec<SpatialObject> = self.rooms[source.index()]
                .objects()
                .iter()
                .filter(|obj| obj.label() == self.config.door_label)
                .cloned()
                .collect();
            for door in &doors {
                self.connect_through_door(source, door, oracle);
            }
        }
        info!(
            probes = self.door_probes.len(),
            new_connections = self.connections.len().saturating_sub(before),
            "probed door frames"
        );
    }

    fn connect_through_door(&mut self, source: RoomId, door: &SpatialObject, oracle: &dyn PathOracle) {
        let room = &self.rooms[source.index()];
        let axis = door.thinnest_axis();
        let delta = door.centroid()[axis] - room.centroid()[axis];
        if delta == 0.0 {
            debug!(%source, axis, "door is level with the room centroid; no outward direction");
            for side in [ProbeSide::Exterior, ProbeSide::Interior] {
                self.door_probes.push(DoorProbe {
                    room: source,
                    side,
                    island: None,
                    point: None,
                });
            }
            return;
        }
        let outward = delta.signum();

        let mut exterior_offset = Vec3::ZERO;
        exterior_offset[axis] = outward * self.config.door_exterior_offset;
        exterior_offset.y = -door.dims().y / 2.0;
        let mut interior_offset = Vec3::ZERO;
        interior_offset[axis] = -outward * self.config.door_interior_offset;
        interior_offset.y = -room.dims().y / 2.0;

        let exterior = self.place_probe(source, ProbeSide::Exterior, door.centroid() + exterior_offset, oracle);
        let interior = self.place_probe(source, ProbeSide::Interior, door.centroid() + interior_offset, oracle);

        let (
            DoorProbe { island: Some(exterior_island), point: Some(exterior_point), .. },
            DoorProbe { island: Some(interior_island), point: Some(interior_point), .. },
        ) = (exterior, interior)
        else {
            debug!(%source, "door probe could not be placed on the navmesh");
            return;
        };
        if exterior_island == interior_island {
            trace!(%source, island = %exterior_island, "door is open; both sides share an island");
            return;
        }

        // Every other room holding the exterior probe is reachable through
        // this door; overlapping rooms each get their own route.
        let band = self.config.containment;
        let targets: Vec<RoomId> = self
            .room_ids()
            .filter(|&id| id != source && self.rooms[id.index()].contains_point(exterior_point, &band))
            .collect();
        for target in targets {
            let Some(route) = self.door_route(
                source,
                target,
                (interior_island, interior_point),
                (exterior_island, exterior_point),
                oracle,
            ) else {
                continue;
            };
            debug!(%source, %target, "connected rooms through closed door");
            self.connections.insert(RoomPair::new(source, target), route.path);
            self.snapped_points
                .insert((source, interior_island), route.room_anchor);
            self.snapped_points
                .insert((target, exterior_island), route.target_anchor);
        }
    }

    /// Snap a probe point onto its nearest island and record it.
    fn place_probe(
        &mut self,
        room: RoomId,
        side: ProbeSide,
        point: Vec3,
        oracle: &dyn PathOracle,
    ) -> DoorProbe {
        let island = oracle.get_island(point);
        let snapped = island.and_then(|k| oracle.snap_point(point, k));
        let probe = DoorProbe {
            room,
            side,
            island,
            point: snapped,
        };
        self.door_probes.push(probe);
        probe
    }

    /// Build the two-leg path from `source` through a closed door to
    /// `target`, the room holding the exterior probe.
    fn door_route(
        &self,
        source: RoomId,
        target: RoomId,
        (interior_island, interior_point): (IslandId, Vec3),
        (exterior_island, exterior_point): (IslandId, Vec3),
        oracle: &dyn PathOracle,
    ) -> Option<DoorRoute> {
        let room_anchor = oracle.snap_point(self.rooms[source.index()].floor_point(), interior_island)?;
        let target_anchor =
            oracle.snap_point(self.rooms[target.index()].floor_point(), exterior_island)?;

        let leg_a = oracle.find_shortest_path(room_anchor, interior_point)?;
        let leg_b = oracle.find_shortest_path(exterior_point, target_anchor)?;

        let passes = self.config.door_interpolation_passes;
        let mut path = densify(&leg_a, passes);
        path.extend(densify(&leg_b, passes));

        Some(DoorRoute {
            path,
            room_anchor,
            target_anchor,
        })
    }

    // -----------------------------------------------------------------------
    // Phase 5-6
    // -----------------------------------------------------------------------

    fn make_connections_symmetric(&mut self) {
        self.connections = self.connections.symmetrized();
    }

    fn snapshot_navmesh(&mut self, oracle: &dyn PathOracle) {
        self.navmesh_islands = (0..oracle.island_count())
            .map(|k| oracle.build_navmesh_vertices(IslandId(k)))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{RawObject, Region};
    use crate::test_oracle::ScriptedOracle;

    fn raw(label: &str, x: f32, y: f32, z: f32) -> RawObject {
        RawObject::new(label, Vec3::new(x, y, z), Vec3::splat(0.5))
    }

    /// A region whose room box is centered at `center` with size `dims`.
    fn box_region(center: Vec3, dims: Vec3) -> Region {
        let half = dims / 2.0;
        Region {
            objects: vec![
                RawObject::new("cabinet", center - half, Vec3::splat(0.5)),
                RawObject::new("shelf", center + half, Vec3::splat(0.5)),
            ],
        }
    }

    fn box_room(center: Vec3, dims: Vec3) -> Room {
        let half = dims / 2.0;
        Room::new(
            vec![
                SpatialObject::new("cabinet", center - half, Vec3::splat(0.5)),
                SpatialObject::new("shelf", center + half, Vec3::splat(0.5)),
            ],
            0.1,
        )
        .unwrap()
    }

    fn graph_with_rooms(rooms: Vec<Room>) -> SceneGraph {
        let mut graph = SceneGraph::new(GraphConfig::default());
        graph.rooms = rooms;
        graph
    }

    fn pair(a: u32, b: u32) -> RoomPair {
        RoomPair::new(RoomId(a), RoomId(b))
    }

    const ROOM_DIMS: Vec3 = Vec3::new(4.0, 3.0, 4.0);

    #[test]
    fn populate_skips_empty_and_degenerate_regions() {
        let scene = SemanticScene {
            regions: vec![
                box_region(Vec3::new(0.0, 0.0, 0.0), ROOM_DIMS),
                // Only placeholders.
                Region {
                    objects: vec![
                        raw("Unknown", 1.0, 1.0, 1.0),
                        RawObject::new("chair", Vec3::ZERO, Vec3::ONE),
                    ],
                },
                // Flat: every centroid at the same height.
                Region {
                    objects: vec![raw("rug", 1.0, 0.0, 1.0), raw("mat", 3.0, 0.0, 3.0)],
                },
                box_region(Vec3::new(6.0, 0.0, 0.0), ROOM_DIMS),
            ],
        };
        let graph = SceneGraph::construct(&scene, &ScriptedOracle::new(), GraphConfig::default());
        assert_eq!(graph.rooms().len(), 2);
        assert_eq!(graph.rooms()[1].centroid(), Vec3::new(6.0, 0.0, 0.0));
        for room in graph.rooms() {
            assert!(room.dims().cmpgt(Vec3::splat(0.1)).all());
        }
    }

    #[test]
    fn room_collapsing_after_filtering_is_dropped() {
        // Twelve objects on one horizontal plane plus one high outlier: the
        // room has height only because of the outlier.
        let mut objects: Vec<RawObject> = (0..12)
            .map(|i| raw("chair", 1.0 + (i % 4) as f32, 1.0, 1.0 + (i / 4) as f32))
            .collect();
        objects.push(raw("ceiling fan", 2.0, 30.0, 2.0));
        let scene = SemanticScene {
            regions: vec![Region { objects }],
        };
        let graph = SceneGraph::construct(&scene, &ScriptedOracle::new(), GraphConfig::default());
        assert!(graph.rooms().is_empty());
    }

    #[test]
    fn is_adjacent_rejects_path_through_third_room() {
        let graph = graph_with_rooms(vec![
            box_room(Vec3::new(0.0, 0.0, 0.0), ROOM_DIMS),
            box_room(Vec3::new(6.0, 0.0, 0.0), ROOM_DIMS),
            box_room(Vec3::new(12.0, 0.0, 0.0), ROOM_DIMS),
        ]);
        let through_middle = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
            Vec3::new(12.0, 0.0, 0.0),
        ];
        assert!(!graph.is_adjacent(RoomId(0), RoomId(2), &through_middle));

        let direct = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
        ];
        assert!(graph.is_adjacent(RoomId(0), RoomId(1), &direct));
    }

    #[test]
    fn is_adjacent_tolerates_overlap_with_endpoint_rooms() {
        // Room 1 overlaps room 0 for x in [1, 2].
        let graph = graph_with_rooms(vec![
            box_room(Vec3::new(0.0, 0.0, 0.0), ROOM_DIMS),
            box_room(Vec3::new(3.0, 0.0, 0.0), ROOM_DIMS),
            box_room(Vec3::new(0.0, 0.0, 6.0), ROOM_DIMS),
        ]);
        // Passes x = 1.5 (inside rooms 0 and 1) on the way to room 2.
        let path = [
            Vec3::new(1.5, 0.0, 0.0),
            Vec3::new(1.5, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 6.0),
        ];
        assert!(graph.is_adjacent(RoomId(0), RoomId(2), &path));
    }

    #[test]
    fn two_rooms_with_direct_path_connect_both_ways() {
        let scene = SemanticScene {
            regions: vec![
                box_region(Vec3::new(0.0, 0.0, 0.0), ROOM_DIMS),
                box_region(Vec3::new(6.0, 0.0, 0.0), ROOM_DIMS),
            ],
        };
        let path = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
        ];
        let oracle = ScriptedOracle::new()
            .with_island(path.clone())
            .with_path(path);
        let graph = SceneGraph::construct(&scene, &oracle, GraphConfig::default());

        let connections = graph.connections();
        assert_eq!(connections.len(), 2);
        assert!(connections.is_symmetric());
        let forward = connections.get(pair(0, 1)).unwrap();
        let backward = connections.get(pair(1, 0)).unwrap();
        // Two interpolation passes: 3 -> 5 -> 9 points.
        assert_eq!(forward.len(), 9);
        assert_eq!(forward[0], Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(forward[8], Vec3::new(6.0, 0.0, 0.0));
        let mut reversed = forward.to_vec();
        reversed.reverse();
        assert_eq!(backward, reversed.as_slice());

        // Both rooms anchored on island 0.
        assert_eq!(
            graph.snapped_points().get(&(RoomId(0), IslandId(0))),
            Some(&Vec3::new(0.0, 0.0, 0.0))
        );
        assert_eq!(
            graph.snapped_points().get(&(RoomId(1), IslandId(0))),
            Some(&Vec3::new(6.0, 0.0, 0.0))
        );
        assert_eq!(graph.navmesh_islands().len(), 1);
        assert_eq!(graph.navmesh_islands()[0].len(), 3);
    }

    #[test]
    fn compute_path_rejects_anchor_snapped_outside_room() {
        let graph = graph_with_rooms(vec![
            box_room(Vec3::new(0.0, 0.0, 0.0), ROOM_DIMS),
            box_room(Vec3::new(6.0, 0.0, 0.0), ROOM_DIMS),
        ]);
        // The island only reaches the gap between the rooms.
        let island = vec![Vec3::new(3.0, 0.0, 0.0)];
        let oracle = ScriptedOracle::new().with_island(island);
        assert!(
            graph
                .compute_path(RoomId(0), RoomId(1), IslandId(0), &oracle)
                .is_none()
        );
    }

    #[test]
    fn compute_path_without_oracle_path_is_none() {
        let graph = graph_with_rooms(vec![
            box_room(Vec3::new(0.0, 0.0, 0.0), ROOM_DIMS),
            box_room(Vec3::new(6.0, 0.0, 0.0), ROOM_DIMS),
        ]);
        let oracle = ScriptedOracle::new()
            .with_island(vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(6.0, 0.0, 0.0)]);
        assert!(
            graph
                .compute_path(RoomId(0), RoomId(1), IslandId(0), &oracle)
                .is_none()
        );
    }

    /// Rooms 0 and 2 are far apart; room 1 overlaps room 0 on x in [1, 2].
    fn pass_through_rooms() -> SceneGraph {
        graph_with_rooms(vec![
            box_room(Vec3::new(0.0, 0.0, 0.0), ROOM_DIMS),
            box_room(Vec3::new(3.0, 0.0, 0.0), ROOM_DIMS),
            box_room(Vec3::new(6.0, 0.0, 0.0), ROOM_DIMS),
        ])
    }

    #[test]
    fn shorter_candidate_replaces_pass_through_conflict() {
        let mut graph = pass_through_rooms();
        // Existing (0, 1), length 5.
        graph.connections.insert(
            pair(0, 1),
            vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 4.0)],
        );
        // Candidate (0, 2), length 3, passing x = 1.5 (inside room 1).
        let candidate = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.5, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        ];
        assert_eq!(
            graph.passes_through_adjacent_room(RoomId(0), RoomId(2), &candidate),
            Some(pair(0, 1))
        );
        assert!(graph.record_candidate(pair(0, 2), candidate));
        assert!(!graph.connections.contains(pair(0, 1)));
        assert!(graph.connections.contains(pair(0, 2)));
    }

    #[test]
    fn longer_candidate_loses_pass_through_conflict() {
        let mut graph = pass_through_rooms();
        graph.connections.insert(
            pair(1, 0),
            vec![Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0)],
        );
        let candidate = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.5, 0.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
        ];
        assert!(!graph.record_candidate(pair(0, 2), candidate));
        assert!(graph.connections.contains(pair(1, 0)));
        assert!(!graph.connections.contains(pair(0, 2)));
    }

    #[test]
    fn candidate_for_connected_pair_is_ignored() {
        let mut graph = pass_through_rooms();
        let existing = vec![Vec3::new(6.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0)];
        graph.connections.insert(pair(2, 0), existing.clone());
        assert!(!graph.record_candidate(pair(0, 2), vec![Vec3::ZERO, Vec3::X]));
        assert_eq!(graph.connections.get(pair(2, 0)), Some(existing.as_slice()));
        assert_eq!(graph.connections.len(), 1);
    }

    #[test]
    fn pass_through_ignores_connections_to_target() {
        let mut graph = pass_through_rooms();
        graph
            .connections
            .insert(pair(0, 1), vec![Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)]);
        let candidate = [Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)];
        assert_eq!(
            graph.passes_through_adjacent_room(RoomId(0), RoomId(1), &candidate),
            None
        );
    }

    /// Room 0 with a door frame on its +x wall, room 1 beyond it, each on its
    /// own navmesh island.
    fn door_scene() -> SemanticScene {
        let mut room_a = box_region(Vec3::new(0.0, 0.0, 0.0), ROOM_DIMS);
        room_a.objects.push(RawObject::new(
            "door frame",
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.2, 2.0, 1.0),
        ));
        SemanticScene {
            regions: vec![room_a, box_region(Vec3::new(5.0, 0.0, 0.0), ROOM_DIMS)],
        }
    }

    #[test]
    fn closed_door_connects_rooms_on_separate_islands() {
        let oracle = ScriptedOracle::new()
            .with_island(vec![Vec3::new(0.0, -1.5, 0.0), Vec3::new(1.0, -1.5, 0.0)])
            .with_island(vec![Vec3::new(3.0, -1.5, 0.0), Vec3::new(5.0, -1.5, 0.0)])
            .with_path(vec![Vec3::new(0.0, -1.5, 0.0), Vec3::new(1.0, -1.5, 0.0)])
            .with_path(vec![Vec3::new(3.0, -1.5, 0.0), Vec3::new(5.0, -1.5, 0.0)]);
        let graph = SceneGraph::construct(&door_scene(), &oracle, GraphConfig::default());

        // Exterior probe first, then interior.
        let probes = graph.door_probes();
        assert_eq!(probes.len(), 2);
        assert_eq!(probes[0].side, ProbeSide::Exterior);
        assert_eq!(probes[0].island, Some(IslandId(1)));
        assert_eq!(probes[0].point, Some(Vec3::new(3.0, -1.5, 0.0)));
        assert_eq!(probes[1].side, ProbeSide::Interior);
        assert_eq!(probes[1].island, Some(IslandId(0)));
        assert_eq!(probes[1].point, Some(Vec3::new(1.0, -1.5, 0.0)));

        let forward = graph.connections().get(pair(0, 1)).unwrap();
        // One interpolation pass per 2-point leg: 3 + 3 points.
        assert_eq!(
            forward,
            &[
                Vec3::new(0.0, -1.5, 0.0),
                Vec3::new(0.5, -1.5, 0.0),
                Vec3::new(1.0, -1.5, 0.0),
                Vec3::new(3.0, -1.5, 0.0),
                Vec3::new(4.0, -1.5, 0.0),
                Vec3::new(5.0, -1.5, 0.0),
            ]
        );
        assert!(graph.connections().is_symmetric());
        assert_eq!(graph.connections().len(), 2);
        assert_eq!(
            graph.snapped_points().get(&(RoomId(0), IslandId(0))),
            Some(&Vec3::new(0.0, -1.5, 0.0))
        );
        assert_eq!(
            graph.snapped_points().get(&(RoomId(1), IslandId(1))),
            Some(&Vec3::new(5.0, -1.5, 0.0))
        );
    }

    #[test]
    fn closed_door_connects_every_room_beyond_it() {
        // Rooms 1 and 2 overlap and both hold the exterior probe (3,-1.5,0).
        let mut scene = door_scene();
        scene
            .regions
            .push(box_region(Vec3::new(5.0, 0.0, 1.0), ROOM_DIMS));
        let oracle = ScriptedOracle::new()
            .with_island(vec![Vec3::new(0.0, -1.5, 0.0), Vec3::new(1.0, -1.5, 0.0)])
            .with_island(vec![Vec3::new(3.0, -1.5, 0.0), Vec3::new(5.0, -1.5, 0.0)])
            .with_path(vec![Vec3::new(0.0, -1.5, 0.0), Vec3::new(1.0, -1.5, 0.0)])
            .with_path(vec![Vec3::new(3.0, -1.5, 0.0), Vec3::new(5.0, -1.5, 0.0)]);
        let graph = SceneGraph::construct(&scene, &oracle, GraphConfig::default());

        assert_eq!(graph.door_probes().len(), 2);
        let pairs: Vec<_> = graph.connections().pairs().collect();
        assert_eq!(pairs, vec![pair(0, 1), pair(0, 2), pair(1, 0), pair(2, 0)]);
        assert_eq!(
            graph.connections().get(pair(0, 2)),
            graph.connections().get(pair(0, 1))
        );
        assert_eq!(
            graph.snapped_points().get(&(RoomId(2), IslandId(1))),
            Some(&Vec3::new(5.0, -1.5, 0.0))
        );
    }

    #[test]
    fn door_level_with_room_centroid_records_absent_probes() {
        // Thinnest axis is x and the door sits on the room's x centroid.
        let mut room = box_region(Vec3::new(0.0, 0.0, 0.0), ROOM_DIMS);
        room.objects.push(RawObject::new(
            "door frame",
            Vec3::new(0.0, 0.0, 1.5),
            Vec3::new(0.2, 2.0, 1.0),
        ));
        let scene = SemanticScene {
            regions: vec![room],
        };
        let oracle = ScriptedOracle::new().with_island(vec![Vec3::new(0.0, -1.5, 0.0)]);
        let graph = SceneGraph::construct(&scene, &oracle, GraphConfig::default());

        let probes = graph.door_probes();
        assert_eq!(probes.len(), 2);
        assert_eq!(probes[0].side, ProbeSide::Exterior);
        assert_eq!(probes[1].side, ProbeSide::Interior);
        assert!(probes.iter().all(|p| p.room == RoomId(0)));
        assert!(probes.iter().all(|p| p.island.is_none() && p.point.is_none()));
        assert!(graph.connections().is_empty());
    }

    #[test]
    fn open_door_records_probes_but_no_connection() {
        // One island spanning both rooms, but no canned room-to-room path.
        let oracle = ScriptedOracle::new().with_island(vec![
            Vec3::new(0.0, -1.5, 0.0),
            Vec3::new(1.0, -1.5, 0.0),
            Vec3::new(3.0, -1.5, 0.0),
            Vec3::new(5.0, -1.5, 0.0),
        ]);
        let graph = SceneGraph::construct(&door_scene(), &oracle, GraphConfig::default());
        assert_eq!(graph.door_probes().len(), 2);
        assert!(
            graph
                .door_probes()
                .iter()
                .all(|p| p.island == Some(IslandId(0)))
        );
        assert!(graph.connections().is_empty());
    }

    #[test]
    fn closed_door_without_leg_path_records_nothing() {
        // Islands as in the closed-door case, but leg B has no path.
        let oracle = ScriptedOracle::new()
            .with_island(vec![Vec3::new(0.0, -1.5, 0.0), Vec3::new(1.0, -1.5, 0.0)])
            .with_island(vec![Vec3::new(3.0, -1.5, 0.0), Vec3::new(5.0, -1.5, 0.0)])
            .with_path(vec![Vec3::new(0.0, -1.5, 0.0), Vec3::new(1.0, -1.5, 0.0)]);
        let graph = SceneGraph::construct(&door_scene(), &oracle, GraphConfig::default());
        assert_eq!(graph.door_probes().len(), 2);
        assert!(graph.connections().is_empty());
        assert!(graph.snapped_points().is_empty());
    }

    #[test]
    fn door_probe_off_navmesh_is_recorded_as_absent() {
        let graph = SceneGraph::construct(&door_scene(), &ScriptedOracle::new(), GraphConfig::default());
        assert_eq!(graph.door_probes().len(), 2);
        assert!(
            graph
                .door_probes()
                .iter()
                .all(|p| p.island.is_none() && p.point.is_none())
        );
    }

    #[test]
    fn set_room_label_by_id() {
        let mut graph = pass_through_rooms();
        assert!(graph.set_room_label(RoomId(1), "kitchen"));
        assert_eq!(graph.rooms()[1].label(), Some("kitchen"));
        assert!(!graph.set_room_label(RoomId(9), "attic"));
    }
}
