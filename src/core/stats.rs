//! Derived game statistics.
//!
//! Stats are recomputed from `GameState` on demand, never stored, so they
//! cannot drift from the state they describe.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Theoretical minimum number of moves for an `n`-disk game: 2^n - 1.
///
/// ```
/// use hanoi_engine::core::min_moves;
///
/// assert_eq!(min_moves(3), 7);
/// assert_eq!(min_moves(10), 1023);
/// ```
#[must_use]
pub const fn min_moves(n: u8) -> u64 {
    (1u64 << n) - 1
}

/// Snapshot of derived statistics for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Moves made so far.
    pub moves: u32,

    /// Whole seconds elapsed.
    pub seconds_elapsed: u64,

    /// Theoretical minimum for this disk count.
    pub min_moves: u64,

    /// `round(min_moves / moves * 100)`; 100 before the first move.
    pub efficiency: u32,

    /// Disk count of the game.
    pub disks: u8,
}

impl GameStats {
    /// Compute current stats for a game. Pure; never mutates the state.
    #[must_use]
    pub fn for_state(state: &GameState) -> Self {
        let min = min_moves(state.disks());
        let moves = state.moves();
        let efficiency = if moves == 0 {
            100
        } else {
            (min as f64 / moves as f64 * 100.0).round() as u32
        };

        Self {
            moves,
            seconds_elapsed: state.seconds_elapsed(),
            min_moves: min,
            efficiency,
            disks: state.disks(),
        }
    }
}
