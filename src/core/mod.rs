//! Core puzzle types: pegs, towers, game state, clock, statistics.
//!
//! Everything here is pure data plus synchronous operations; there is no
//! I/O and no internal concurrency. The engine in [`crate::engine`] is the
//! public mutation surface.

pub mod clock;
pub mod peg;
pub mod state;
pub mod stats;
pub mod towers;

pub use clock::GameClock;
pub use peg::{ParsePegError, Peg};
pub use state::{ConfigError, GameState, MoveRecord, MAX_DISKS, MIN_DISKS};
pub use stats::{min_moves, GameStats};
pub use towers::TowerState;
