//! Bucketed coordinate index that owns every entity placed on a map.

use tile_quest_core::Position;

use crate::{Entity, WorldError};

/// Prime bucket count used by every registry map.
pub const DEFAULT_BUCKETS: usize = 97;

/// Map-local key derived from a position and the owning map's width.
///
/// Keys from different maps must never be compared; the same `(x, y)` in two
/// maps produces the same raw key against two different indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey(i64);

impl CellKey {
    /// Computes `x + y * width`.
    #[must_use]
    pub const fn from_position(position: Position, width: u32) -> Self {
        Self(position.x as i64 + position.y as i64 * width as i64)
    }

    /// Raw numeric key.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

/// Observable state of a single key inside the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileState<'a> {
    /// A live entity occupies the key.
    Occupied(&'a Entity),
    /// The key held an entity that was explicitly erased and has not been
    /// read since.
    Cleared,
    /// Nothing was ever placed at the key, or the cleared marker was
    /// already collapsed by a directional read.
    Vacant,
}

#[derive(Clone, Debug)]
enum Slot {
    Occupied(Entity),
    Cleared,
}

impl Slot {
    fn into_entity(self) -> Option<Entity> {
        match self {
            Self::Occupied(entity) => Some(entity),
            Self::Cleared => None,
        }
    }
}

#[derive(Clone, Debug)]
struct Entry {
    key: CellKey,
    slot: Slot,
}

/// Chained hash index from [`CellKey`] to an exclusively owned [`Entity`].
///
/// Buckets are chosen with `key mod bucket_count`. Each key holds at most one
/// entry: writing to an occupied key overwrites the slot in place and hands
/// the displaced entity back to the caller. Dropping the index drops every
/// entity it still owns.
#[derive(Clone, Debug)]
pub struct SpatialIndex {
    buckets: Vec<Vec<Entry>>,
    len: usize,
}

impl SpatialIndex {
    /// Creates an empty index with a fixed number of buckets.
    ///
    /// A zero bucket count is a configuration error.
    pub fn with_buckets(bucket_count: usize) -> Result<Self, WorldError> {
        if bucket_count == 0 {
            return Err(WorldError::ZeroBuckets);
        }

        Ok(Self {
            buckets: vec![Vec::new(); bucket_count],
            len: 0,
        })
    }

    /// Number of buckets chosen at construction.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of keys holding either a live entity or a cleared marker.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Reports whether the index holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `entity` at `key`, returning whatever live entity it displaced.
    pub fn insert(&mut self, key: CellKey, entity: Entity) -> Option<Entity> {
        self.put(key, Slot::Occupied(entity))
    }

    /// Replaces the slot at `key` with the cleared marker.
    ///
    /// The marker is written even when the key was never occupied. Returns
    /// the live entity that was displaced, if any.
    pub fn clear(&mut self, key: CellKey) -> Option<Entity> {
        self.put(key, Slot::Cleared)
    }

    /// Returns the live entity stored at `key`.
    #[must_use]
    pub fn lookup(&self, key: CellKey) -> Option<&Entity> {
        match self.state(key) {
            TileState::Occupied(entity) => Some(entity),
            TileState::Cleared | TileState::Vacant => None,
        }
    }

    /// Describes the slot at `key` without modifying it.
    #[must_use]
    pub fn state(&self, key: CellKey) -> TileState<'_> {
        let bucket = &self.buckets[self.bucket_of(key)];
        match bucket.iter().rev().find(|entry| entry.key == key) {
            Some(Entry {
                slot: Slot::Occupied(entity),
                ..
            }) => TileState::Occupied(entity),
            Some(Entry {
                slot: Slot::Cleared,
                ..
            }) => TileState::Cleared,
            None => TileState::Vacant,
        }
    }

    /// Reports whether any entry, live or cleared, exists at `key`.
    #[must_use]
    pub fn contains_key(&self, key: CellKey) -> bool {
        !matches!(self.state(key), TileState::Vacant)
    }

    /// Unlinks the entry at `key` and returns ownership of its entity.
    ///
    /// Removing a cleared marker unlinks it and yields `None`.
    pub fn remove(&mut self, key: CellKey) -> Option<Entity> {
        let bucket_index = self.bucket_of(key);
        let bucket = &mut self.buckets[bucket_index];
        let position = bucket.iter().rposition(|entry| entry.key == key)?;
        let entry = bucket.remove(position);
        self.len -= 1;
        entry.slot.into_entity()
    }

    /// Iterates over the live entities in bucket order.
    pub fn entities(&self) -> impl Iterator<Item = (CellKey, &Entity)> {
        self.buckets.iter().flat_map(|bucket| {
            bucket.iter().rev().filter_map(|entry| match &entry.slot {
                Slot::Occupied(entity) => Some((entry.key, entity)),
                Slot::Cleared => None,
            })
        })
    }

    fn put(&mut self, key: CellKey, slot: Slot) -> Option<Entity> {
        let bucket_index = self.bucket_of(key);
        let bucket = &mut self.buckets[bucket_index];
        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            return std::mem::replace(&mut entry.slot, slot).into_entity();
        }

        bucket.push(Entry { key, slot });
        self.len += 1;
        None
    }

    fn bucket_of(&self, key: CellKey) -> usize {
        let count = self.buckets.len() as i64;
        key.get().rem_euclid(count) as usize
    }
}
