// Serialized form of a finished scene graph.
//
// Rooms are keyed `room_1`, `room_2`, ... (1-indexed, in room order) and
// connections are listed as 1-indexed `[from, to]` pairs in key order. The
// full export carries each room's member object labels; the release export
// drops them and keeps only label, centroid and dims.
//
// Room keys are `RoomKey`s: numbers ordered numerically that serialize as
// their `room_<n>` string, so `room_10` follows `room_9`.
//
// Vectors are written as `{x, y, z}` objects rather than glam's default
// `[x, y, z]` arrays so the files stay readable by hand.

use crate::error::GraphError;
use crate::graph::SceneGraph;
use crate::object::SpatialObject;
use crate::room::Room;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A vector as a named-field object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for Xyz {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Xyz> for Vec3 {
    fn from(v: Xyz) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// 1-indexed export key of a room, written as `room_<n>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RoomKey(pub u32);

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room_{}", self.0)
    }
}

impl FromStr for RoomKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("room_")
            .and_then(|n| n.parse().ok())
            .map(RoomKey)
            .ok_or_else(|| format!("not a room key: {s:?}"))
    }
}

impl From<RoomKey> for String {
    fn from(key: RoomKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for RoomKey {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// One exported room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomExport {
    pub label: Option<String>,
    pub centroid: Xyz,
    pub dims: Xyz,
    /// Member object labels. Absent in the release export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<String>>,
}

impl RoomExport {
    fn from_room(room: &Room, with_objects: bool) -> Self {
        Self {
            label: room.label().map(str::to_string),
            centroid: room.centroid().into(),
            dims: room.dims().into(),
            objects: with_objects.then(|| {
                room.object_labels()
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            }),
        }
    }
}

/// One exported object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectExport {
    pub label: String,
    pub centroid: Xyz,
    pub dims: Xyz,
}

impl From<&SpatialObject> for ObjectExport {
    fn from(obj: &SpatialObject) -> Self {
        Self {
            label: obj.label().to_string(),
            centroid: obj.centroid().into(),
            dims: obj.dims().into(),
        }
    }
}

/// The exported graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    /// Rooms keyed `room_<n>`, 1-indexed, in room order.
    pub rooms: BTreeMap<RoomKey, RoomExport>,
    /// Connected room numbers (1-indexed), in key order.
    pub connections: Vec<[u32; 2]>,
}

impl GraphExport {
    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Export key of the room at zero-based `index`.
pub fn room_key(index: usize) -> RoomKey {
    RoomKey(index as u32 + 1)
}

impl SceneGraph {
    /// Full export: rooms with member object labels, plus connections.
    pub fn to_export(&self) -> GraphExport {
        self.export_with(true)
    }

    /// Release export: rooms without member objects, plus connections.
    pub fn to_release_export(&self) -> GraphExport {
        self.export_with(false)
    }

    /// Full export as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GraphError> {
        self.to_export().to_json()
    }

    fn export_with(&self, with_objects: bool) -> GraphExport {
        let rooms = self
            .rooms()
            .iter()
            .enumerate()
            .map(|(i, room)| (room_key(i), RoomExport::from_room(room, with_objects)))
            .collect();
        let connections = self
            .connections()
            .pairs()
            .map(|pair| [pair.from.0 + 1, pair.to.0 + 1])
            .collect();
        GraphExport { rooms, connections }
    }
}
