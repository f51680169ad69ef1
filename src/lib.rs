//! # hanoi-engine
//!
//! A Tower of Hanoi puzzle engine: three-peg state, move legality, undo
//! history, win detection, derived statistics, and an in-memory record
//! store for the leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Closed peg set**: pegs are a three-variant enum, so an invalid
//!    fourth peg cannot be represented.
//!
//! 2. **Atomic transitions**: every mutating operation fully commits
//!    (towers, counter, history, flags together) or fully no-ops. No
//!    partial state is ever observable.
//!
//! 3. **Boolean rejection, error configuration**: illegal moves and empty
//!    undos are routine gameplay and return `false`; only a malformed disk
//!    count raises [`ConfigError`].
//!
//! 4. **Persistent snapshots**: towers and history use `im` structures, so
//!    captured snapshots stay valid as play continues.
//!
//! ## Modules
//!
//! - `core`: pegs, towers, game state, clock, statistics
//! - `engine`: the session object the UI shell drives
//! - `records`: finished-game records and leaderboard queries

pub mod core;
pub mod engine;
pub mod records;

// Re-export commonly used types
pub use crate::core::{
    min_moves, ConfigError, GameState, GameStats, MoveRecord, ParsePegError, Peg, TowerState,
    MAX_DISKS, MIN_DISKS,
};

pub use crate::engine::HanoiEngine;

pub use crate::records::{HanoiRecord, MemStore, NewHanoiRecord, RecordId, RecordStore};
