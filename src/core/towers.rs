//! Tower state: the three peg stacks.
//!
//! Each peg holds an ordered sequence of disk sizes, bottom to top; the last
//! element is the top (movable) disk. Two invariants hold for every state
//! reachable through the engine:
//!
//! - **Conservation**: for a game with N disks, the union of the three
//!   sequences is exactly {1..N}, each size on exactly one peg.
//! - **Ordering**: within a peg, sizes strictly decrease from bottom to top.
//!
//! Sequences are `im::Vector`, so cloning a `TowerState` is O(1) and every
//! previously captured snapshot stays valid when a new state is produced.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::peg::Peg;

/// The three peg stacks.
///
/// ```
/// use hanoi_engine::core::{Peg, TowerState};
///
/// let towers = TowerState::seeded(3);
/// assert_eq!(towers.top(Peg::A), Some(1));
/// assert_eq!(towers.height(Peg::A), 3);
/// assert!(towers.is_empty(Peg::C));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerState {
    pegs: [Vector<u8>; 3],
}

impl TowerState {
    /// Three empty pegs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pegs: [Vector::new(), Vector::new(), Vector::new()],
        }
    }

    /// The starting position: all `disks` disks on peg A, largest at the
    /// bottom (size `disks` down to 1, bottom to top), pegs B and C empty.
    #[must_use]
    pub fn seeded(disks: u8) -> Self {
        let mut towers = Self::new();
        for size in (1..=disks).rev() {
            towers.pegs[Peg::A.index()].push_back(size);
        }
        towers
    }

    /// The disk sequence on a peg, bottom to top.
    #[must_use]
    pub fn peg(&self, peg: Peg) -> &Vector<u8> {
        &self.pegs[peg.index()]
    }

    /// The top (movable) disk of a peg, if any.
    #[must_use]
    pub fn top(&self, peg: Peg) -> Option<u8> {
        self.pegs[peg.index()].last().copied()
    }

    /// Number of disks on a peg.
    #[must_use]
    pub fn height(&self, peg: Peg) -> usize {
        self.pegs[peg.index()].len()
    }

    /// Whether a peg holds no disks.
    #[must_use]
    pub fn is_empty(&self, peg: Peg) -> bool {
        self.pegs[peg.index()].is_empty()
    }

    /// The legal-move predicate. Pure; never mutates.
    ///
    /// - `false` if `from` is empty (nothing to move).
    /// - `true` if `to` is empty (anything may land on an empty peg).
    /// - Otherwise `true` iff the top of `from` is strictly smaller than
    ///   the top of `to`.
    ///
    /// `from == to` needs no special case: both tops are the same disk,
    /// which is not strictly smaller than itself.
    #[must_use]
    pub fn can_move(&self, from: Peg, to: Peg) -> bool {
        match (self.top(from), self.top(to)) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(moving), Some(resting)) => moving < resting,
        }
    }

    /// Pop the top of `from` and push it onto `to`, producing a new state.
    ///
    /// Returns the new state and the disk that moved, or `None` if `from`
    /// is empty. Does NOT check legality - callers gate forward moves with
    /// [`can_move`](Self::can_move); undo reverses a recorded move and is
    /// legal by construction.
    ///
    /// The returned state shares no mutable structure with `self`; old
    /// snapshots are unaffected.
    #[must_use]
    pub fn transfer(&self, from: Peg, to: Peg) -> Option<(Self, u8)> {
        let mut next = self.clone();
        let disk = next.pegs[from.index()].pop_back()?;
        next.pegs[to.index()].push_back(disk);
        Some((next, disk))
    }

    /// Conservation check: the three pegs together hold exactly {1..disks}.
    #[must_use]
    pub fn is_conserved(&self, disks: u8) -> bool {
        let mut seen = [false; 256];
        let mut count = 0usize;
        for peg in Peg::ALL {
            for &size in self.peg(peg) {
                if size == 0 || size > disks || seen[size as usize] {
                    return false;
                }
                seen[size as usize] = true;
                count += 1;
            }
        }
        count == disks as usize
    }

    /// Ordering check: every peg strictly decreases from bottom to top.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        Peg::ALL.iter().all(|&peg| {
            self.peg(peg)
                .iter()
                .zip(self.peg(peg).iter().skip(1))
                .all(|(below, above)| above < below)
        })
    }
}

impl Default for TowerState {
    fn default() -> Self {
        Self::new()
    }
}
