//! Finished-game records and the leaderboard store.
//!
//! When a game completes, the surrounding application submits the engine's
//! completion snapshot here. The store is in-memory (durability is the
//! backend's concern, not this crate's) and answers the leaderboard
//! queries: recent results, player search, and best-by-disk-count.

pub mod record;
pub mod store;

pub use record::{HanoiRecord, NewHanoiRecord, RecordId};
pub use store::{MemStore, RecordStore, DEFAULT_LIMIT};
