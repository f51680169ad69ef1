//! One game session and its operations.
//!
//! `HanoiEngine` owns a single [`GameState`] and is the only mutation
//! surface the UI shell talks to. Every operation runs to completion on
//! the caller's thread; nothing here suspends, blocks, or touches I/O.
//! Callers sharing an engine across threads must wrap the whole engine in
//! their own mutual exclusion - sub-fields are never updated independently.
//!
//! Rejections (illegal move, move after the win, undo with nothing to
//! undo) come back as `false` so the shell can pick the right sound or
//! announcement; only a bad disk count at initialization is an error.

use smallvec::SmallVec;

use crate::core::{ConfigError, GameState, GameStats, Peg};
use crate::records::NewHanoiRecord;

/// A running Tower of Hanoi session.
///
/// ```
/// use hanoi_engine::core::Peg;
/// use hanoi_engine::engine::HanoiEngine;
///
/// let mut engine = HanoiEngine::new("s-01", "Ada", 3).unwrap();
///
/// assert!(engine.can_move(Peg::A, Peg::C));
/// assert!(engine.move_disk(Peg::A, Peg::C));
/// assert!(engine.undo_move());
/// assert_eq!(engine.state().moves(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct HanoiEngine {
    state: GameState,
}

impl HanoiEngine {
    /// Start a session for a player.
    ///
    /// Validates the disk count; on `Err` no session exists and nothing
    /// was built.
    pub fn new(
        player_id: impl Into<String>,
        player_name: impl Into<String>,
        disks: u8,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(player_id, player_name, disks)?,
        })
    }

    /// Replace the session with a fresh game for (possibly different)
    /// player parameters.
    ///
    /// On `Err` the previous game is untouched - the new state is built
    /// and validated before anything is replaced.
    pub fn initialize(
        &mut self,
        player_id: impl Into<String>,
        player_name: impl Into<String>,
        disks: u8,
    ) -> Result<(), ConfigError> {
        self.state = GameState::new(player_id, player_name, disks)?;
        Ok(())
    }

    /// Restart with the same player and disk count, discarding all history.
    pub fn restart(&mut self) {
        // same parameters already passed validation once
        let fresh = GameState::new(
            self.state.player_id.clone(),
            self.state.player_name.clone(),
            self.state.disks(),
        );
        if let Ok(state) = fresh {
            self.state = state;
        }
    }

    /// Read-only view of the current game.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether moving the top disk of `from` onto `to` would be legal right
    /// now. Pure; drives drag-target highlighting and keyboard selection.
    #[must_use]
    pub fn can_move(&self, from: Peg, to: Peg) -> bool {
        self.state.towers().can_move(from, to)
    }

    /// Attempt a move. `true` and a fully committed state change on
    /// success; `false` and no change if the game is over, inactive, or
    /// the move is illegal.
    pub fn move_disk(&mut self, from: Peg, to: Peg) -> bool {
        self.state.apply_move(from, to)
    }

    /// Undo the most recent move. `false` if there is nothing to undo.
    /// Undoing past a win reopens the game.
    pub fn undo_move(&mut self) -> bool {
        self.state.undo_last()
    }

    /// All currently legal `(from, to)` moves, in canonical peg order.
    ///
    /// Empty once the game is completed. At most six ordered pairs exist.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[(Peg, Peg); 6]> {
        if !self.state.is_active() || self.state.is_completed() {
            return SmallVec::new();
        }
        Peg::ordered_pairs()
            .filter(|&(from, to)| self.state.towers().can_move(from, to))
            .collect()
    }

    /// Current derived statistics.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats::for_state(&self.state)
    }

    /// Current elapsed seconds; the external one-second tick calls this to
    /// refresh the display. Frozen once the game completes.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.state.seconds_elapsed()
    }

    /// The result snapshot the persistence collaborator submits when the
    /// game completes. `None` while the game is unfinished.
    #[must_use]
    pub fn completion_record(&self) -> Option<NewHanoiRecord> {
        if !self.state.is_completed() {
            return None;
        }
        Some(NewHanoiRecord {
            player_id: self.state.player_id.clone(),
            player_name: self.state.player_name.clone(),
            disks: self.state.disks(),
            moves: self.state.moves(),
            seconds: self.state.seconds_elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_three(engine: &mut HanoiEngine) {
        let moves = [
            (Peg::A, Peg::C),
            (Peg::A, Peg::B),
            (Peg::C, Peg::B),
            (Peg::A, Peg::C),
            (Peg::B, Peg::A),
            (Peg::B, Peg::C),
            (Peg::A, Peg::C),
        ];
        for (from, to) in moves {
            assert!(engine.move_disk(from, to));
        }
    }

    #[test]
    fn test_new_rejects_bad_disk_count() {
        assert!(HanoiEngine::new("s1", "Ada", 0).is_err());
        assert!(HanoiEngine::new("s1", "Ada", 11).is_err());
        assert!(HanoiEngine::new("s1", "Ada", 3).is_ok());
    }

    #[test]
    fn test_initialize_error_preserves_game() {
        let mut engine = HanoiEngine::new("s1", "Ada", 3).unwrap();
        engine.move_disk(Peg::A, Peg::C);

        assert!(engine.initialize("s2", "Grace", 0).is_err());
        // the running game is untouched
        assert_eq!(engine.state().player_id, "s1");
        assert_eq!(engine.state().moves(), 1);
    }

    #[test]
    fn test_restart_keeps_player_and_disks() {
        let mut engine = HanoiEngine::new("s1", "Ada", 4).unwrap();
        engine.move_disk(Peg::A, Peg::B);
        engine.move_disk(Peg::A, Peg::C);

        engine.restart();

        assert_eq!(engine.state().player_id, "s1");
        assert_eq!(engine.state().disks(), 4);
        assert_eq!(engine.state().moves(), 0);
        assert!(engine.state().history().is_empty());
        assert_eq!(engine.state().towers().height(Peg::A), 4);
    }

    #[test]
    fn test_legal_moves_from_start() {
        let engine = HanoiEngine::new("s1", "Ada", 3).unwrap();
        let legal: Vec<(Peg, Peg)> = engine.legal_moves().into_iter().collect();

        // only the small disk on A can move
        assert_eq!(legal, vec![(Peg::A, Peg::B), (Peg::A, Peg::C)]);
    }

    #[test]
    fn test_legal_moves_empty_after_win() {
        let mut engine = HanoiEngine::new("s1", "Ada", 3).unwrap();
        solve_three(&mut engine);

        assert!(engine.state().is_completed());
        assert!(engine.legal_moves().is_empty());
    }

    #[test]
    fn test_moves_rejected_after_win() {
        let mut engine = HanoiEngine::new("s1", "Ada", 3).unwrap();
        solve_three(&mut engine);

        assert!(!engine.move_disk(Peg::C, Peg::A));
        assert_eq!(engine.state().moves(), 7);
    }

    #[test]
    fn test_completion_record() {
        let mut engine = HanoiEngine::new("s-01", "Ada", 3).unwrap();
        assert!(engine.completion_record().is_none());

        solve_three(&mut engine);

        let record = engine.completion_record().unwrap();
        assert_eq!(record.player_id, "s-01");
        assert_eq!(record.player_name, "Ada");
        assert_eq!(record.disks, 3);
        assert_eq!(record.moves, 7);
    }

    #[test]
    fn test_undo_after_win_withdraws_record() {
        let mut engine = HanoiEngine::new("s1", "Ada", 3).unwrap();
        solve_three(&mut engine);

        assert!(engine.undo_move());
        assert!(engine.completion_record().is_none());
        assert!(engine.state().is_active());
    }
}
