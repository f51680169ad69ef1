//! Record storage and leaderboard queries.
//!
//! `RecordStore` is the seam the HTTP layer programs against; `MemStore`
//! is the in-memory implementation. Records are kept in insertion order
//! (which is creation order) with a hash index for id lookup.

use rustc_hash::FxHashMap;

use super::record::{HanoiRecord, NewHanoiRecord, RecordId};
use crate::core::state::now_ms;

/// Default result cap for list queries.
pub const DEFAULT_LIMIT: usize = 50;

/// Storage seam for finished-game records.
pub trait RecordStore {
    /// Persist a new record, assigning id and creation time.
    fn create(&mut self, record: NewHanoiRecord) -> HanoiRecord;

    /// Look up a record by id.
    fn get(&self, id: &RecordId) -> Option<&HanoiRecord>;

    /// Most recent records first, capped at `limit`.
    fn recent(&self, limit: usize) -> Vec<HanoiRecord>;

    /// Records whose player id contains `query`, or whose player name
    /// contains it case-insensitively. Most recent first.
    fn search(&self, query: &str) -> Vec<HanoiRecord>;

    /// Best results for a disk count: fewest moves first, ties broken by
    /// fewest seconds, capped at `limit`.
    fn leaderboard(&self, disks: u8, limit: usize) -> Vec<HanoiRecord>;
}

/// In-memory record store.
#[derive(Clone, Debug, Default)]
pub struct MemStore {
    records: Vec<HanoiRecord>,
    by_id: FxHashMap<RecordId, usize>,
}

impl MemStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemStore {
    fn create(&mut self, record: NewHanoiRecord) -> HanoiRecord {
        let stored = HanoiRecord {
            id: RecordId::generate(),
            player_id: record.player_id,
            player_name: record.player_name,
            disks: record.disks,
            moves: record.moves,
            seconds: record.seconds,
            created_at_ms: now_ms(),
        };
        self.by_id.insert(stored.id.clone(), self.records.len());
        self.records.push(stored.clone());
        stored
    }

    fn get(&self, id: &RecordId) -> Option<&HanoiRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    fn recent(&self, limit: usize) -> Vec<HanoiRecord> {
        self.records.iter().rev().take(limit).cloned().collect()
    }

    fn search(&self, query: &str) -> Vec<HanoiRecord> {
        let lowered = query.to_lowercase();
        self.records
            .iter()
            .rev()
            .filter(|r| {
                r.player_id.contains(query) || r.player_name.to_lowercase().contains(&lowered)
            })
            .cloned()
            .collect()
    }

    fn leaderboard(&self, disks: u8, limit: usize) -> Vec<HanoiRecord> {
        let mut rows: Vec<HanoiRecord> = self
            .records
            .iter()
            .filter(|r| r.disks == disks)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.moves.cmp(&b.moves).then(a.seconds.cmp(&b.seconds)));
        rows.truncate(limit);
        rows
    }
}
