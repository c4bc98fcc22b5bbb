// Core identifier types shared across graph construction.
//
// Rooms and navmesh islands are addressed by plain sequential indices wrapped
// in newtypes (`RoomId`, `IslandId`) so the two can't be mixed up. A room's
// index is its position in `SceneGraph::rooms` once outlier filtering has
// finished, and stays fixed for the rest of construction.
//
// `RoomPair` is the key of the connection table. It is an *ordered* pair:
// `(a, b)` and `(b, a)` are distinct keys because detection runs
// source→target and the table is only symmetrized at the very end.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a room in `SceneGraph::rooms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u32);

impl RoomId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

/// Index of a connected navmesh component, as reported by the path oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IslandId(pub u32);

impl fmt::Display for IslandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "island#{}", self.0)
    }
}

/// Ordered (source, target) key into the connection table.
///
/// Ordering is row-major: by `from`, then by `to`. This is the export order
/// of the finished graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomPair {
    pub from: RoomId,
    pub to: RoomId,
}

impl RoomPair {
    pub const fn new(from: RoomId, to: RoomId) -> Self {
        Self { from, to }
    }

    /// The same two rooms with source and target swapped.
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// If `room` is one endpoint of this pair, return the other endpoint.
    pub fn other(self, room: RoomId) -> Option<RoomId> {
        if self.from == room {
            Some(self.to)
        } else if self.to == room {
            Some(self.from)
        } else {
            None
        }
    }
}

impl fmt::Display for RoomPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.from.0, self.to.0)
    }
}
