// The connection table: ordered room pairs to paths.
//
// Keys are `RoomPair`s, so `(a, b)` and `(b, a)` are separate entries.
// Detection is directional and fills the table one way; `symmetrized()`
// then adds the missing reverse entries. Backed by a `BTreeMap` so iteration
// (conflict scans and export) is in key order.

use crate::types::{RoomId, RoomPair};
use glam::Vec3;
use std::collections::BTreeMap;

/// Paths between rooms keyed by ordered (source, target) pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectionTable {
    paths: BTreeMap<RoomPair, Vec<Vec3>>,
}

impl ConnectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Insert or overwrite the path for `pair`.
    pub fn insert(&mut self, pair: RoomPair, path: Vec<Vec3>) {
        self.paths.insert(pair, path);
    }

    pub fn remove(&mut self, pair: RoomPair) -> Option<Vec<Vec3>> {
        self.paths.remove(&pair)
    }

    pub fn get(&self, pair: RoomPair) -> Option<&[Vec3]> {
        self.paths.get(&pair).map(Vec::as_slice)
    }

    pub fn contains(&self, pair: RoomPair) -> bool {
        self.paths.contains_key(&pair)
    }

    /// Whether the two rooms are connected in either direction.
    pub fn contains_either(&self, pair: RoomPair) -> bool {
        self.contains(pair) || self.contains(pair.reversed())
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomPair, &[Vec3])> + '_ {
        self.paths.iter().map(|(&k, v)| (k, v.as_slice()))
    }

    pub fn pairs(&self) -> impl Iterator<Item = RoomPair> + '_ {
        self.paths.keys().copied()
    }

    /// Entries with `room` as one endpoint, paired with the other endpoint.
    pub fn touching(&self, room: RoomId) -> impl Iterator<Item = (RoomPair, RoomId)> + '_ {
        self.pairs()
            .filter_map(move |pair| pair.other(room).map(|other| (pair, other)))
    }

    /// A copy where every `(a, b)` also has `(b, a)`. Missing reverse entries
    /// get the point-reversed path; existing ones are kept as they are.
    pub fn symmetrized(&self) -> Self {
        let mut paths = self.paths.clone();
        for (&pair, path) in &self.paths {
            let reverse = pair.reversed();
            if !self.paths.contains_key(&reverse) {
                let reversed: Vec<Vec3> = path.iter().rev().copied().collect();
                debug_assert_eq!(reversed.len(), path.len());
                paths.insert(reverse, reversed);
            }
        }
        Self { paths }
    }

    /// Whether every entry has its reverse.
    pub fn is_symmetric(&self) -> bool {
        self.pairs().all(|pair| self.contains(pair.reversed()))
    }
}
