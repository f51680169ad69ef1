//! Game state: one player's Tower of Hanoi session.
//!
//! `GameState` is the single unit of mutation - every mutating operation
//! either fully commits (towers + counter + history + flags together) or
//! fully no-ops. Mutators build the next tower/history values first and
//! assign them only once nothing can fail, so no partial state is ever
//! observable.
//!
//! Rejected operations (illegal move, move while inactive, undo with empty
//! history) return `false` and change nothing; they are routine gameplay,
//! not errors. Only a malformed disk count at initialization raises
//! [`ConfigError`].

use im::Vector;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::clock::GameClock;
use super::peg::Peg;
use super::towers::TowerState;

/// Smallest disk count the surrounding UI offers.
pub const MIN_DISKS: u8 = 3;

/// Largest disk count the surrounding UI offers.
pub const MAX_DISKS: u8 = 10;

/// Error raised for a malformed initialization. Gameplay mistakes never
/// produce this; they are signaled by boolean returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Disk count outside the supported range.
    InvalidDiskCount(u8),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidDiskCount(n) => {
                write!(f, "invalid disk count {n}, expected 1..={MAX_DISKS}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// One historical move: which disk went from where to where, and when.
///
/// Append-only during play; undo pops the most recent entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Source peg.
    pub from: Peg,

    /// Destination peg.
    pub to: Peg,

    /// Size of the disk that moved.
    pub disk: u8,

    /// Wall-clock milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

/// Complete state of one game session.
///
/// Fields with invariants (towers, counter, history, flags) are private;
/// they change only through [`apply_move`](Self::apply_move) and
/// [`undo_last`](Self::undo_last), which keep them consistent as a unit.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Player identifier (opaque to the engine).
    pub player_id: String,

    /// Player display name.
    pub player_name: String,

    disks: u8,
    towers: TowerState,
    moves: u32,
    clock: GameClock,
    history: Vector<MoveRecord>,
    completed: bool,
    active: bool,
}

impl GameState {
    /// Start a fresh game: all `disks` disks on peg A, counters and history
    /// reset, clock running.
    ///
    /// The engine validates defensively here; the input-collection layer is
    /// expected to only offer [`MIN_DISKS`]..=[`MAX_DISKS`].
    pub fn new(
        player_id: impl Into<String>,
        player_name: impl Into<String>,
        disks: u8,
    ) -> Result<Self, ConfigError> {
        if disks < 1 || disks > MAX_DISKS {
            return Err(ConfigError::InvalidDiskCount(disks));
        }

        Ok(Self {
            player_id: player_id.into(),
            player_name: player_name.into(),
            disks,
            towers: TowerState::seeded(disks),
            moves: 0,
            clock: GameClock::start(),
            history: Vector::new(),
            completed: false,
            active: true,
        })
    }

    // === Read access ===

    /// Number of disks in this game.
    #[must_use]
    pub fn disks(&self) -> u8 {
        self.disks
    }

    /// Current tower state.
    #[must_use]
    pub fn towers(&self) -> &TowerState {
        &self.towers
    }

    /// Moves made so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Move history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Whether all disks have reached peg C.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the game accepts moves.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whole seconds elapsed; frozen while completed.
    #[must_use]
    pub fn seconds_elapsed(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    // === Mutation (crate-internal; the engine is the public surface) ===

    /// Apply one move if legal. Returns `false` with no state change when
    /// the game is inactive or completed, or the move is illegal.
    ///
    /// On success the towers, counter, and history change together; if the
    /// move fills peg C the game completes in the same commit and the clock
    /// freezes.
    pub(crate) fn apply_move(&mut self, from: Peg, to: Peg) -> bool {
        if !self.active || self.completed {
            return false;
        }
        if !self.towers.can_move(from, to) {
            return false;
        }

        // can_move guarantees a top disk exists on `from`
        let Some((towers, disk)) = self.towers.transfer(from, to) else {
            return false;
        };
        let mut history = self.history.clone();
        history.push_back(MoveRecord {
            from,
            to,
            disk,
            timestamp_ms: now_ms(),
        });
        let won = towers.height(Peg::C) == self.disks as usize;

        self.towers = towers;
        self.moves += 1;
        self.history = history;
        if won {
            self.completed = true;
            self.active = false;
            self.clock.freeze();
        }

        debug_assert!(self.towers.is_conserved(self.disks));
        debug_assert!(self.towers.is_ordered());
        true
    }

    /// Reverse the most recent move. Returns `false` with no state change
    /// when the history is empty.
    ///
    /// The inverse bypasses the legality predicate: it exactly reverses a
    /// previously legal move, so it is always legal. Undoing out of a
    /// completed game reopens it and resumes the clock from the banked
    /// total; there is no redo stack.
    pub(crate) fn undo_last(&mut self) -> bool {
        let Some(last) = self.history.last().cloned() else {
            return false;
        };
        let Some((towers, _)) = self.towers.transfer(last.to, last.from) else {
            return false;
        };
        let mut history = self.history.clone();
        history.pop_back();

        self.towers = towers;
        self.moves = self.moves.saturating_sub(1);
        self.history = history;
        if self.completed {
            self.completed = false;
            self.active = true;
            self.clock.resume();
        }

        debug_assert!(self.towers.is_conserved(self.disks));
        debug_assert!(self.towers.is_ordered());
        true
    }
}

/// Wall-clock milliseconds since the Unix epoch (0 if the system clock is
/// before the epoch).
pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
