//! Peg identification.
//!
//! The puzzle has exactly three pegs: A, B, and C. The set is closed -
//! every match over `Peg` is exhaustive, so an invalid fourth peg cannot
//! exist anywhere in the engine.
//!
//! Text-driven callers (keyboard input, route parameters) address pegs by
//! letter; `FromStr`/`Display` are the boundary for that.

use serde::{Deserialize, Serialize};

/// One of the three fixed pegs.
///
/// ```
/// use hanoi_engine::core::Peg;
///
/// assert_eq!(Peg::ALL.len(), 3);
/// assert_eq!("B".parse::<Peg>(), Ok(Peg::B));
/// assert_eq!(Peg::C.to_string(), "C");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    /// All pegs, in canonical order.
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// Number of pegs.
    pub const COUNT: usize = 3;

    /// Array index for this peg (A=0, B=1, C=2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }

    /// Iterate over every ordered `(from, to)` pair of distinct pegs.
    ///
    /// There are exactly six such pairs; move enumeration walks them all.
    pub fn ordered_pairs() -> impl Iterator<Item = (Peg, Peg)> {
        Peg::ALL.into_iter().flat_map(|from| {
            Peg::ALL
                .into_iter()
                .filter(move |&to| to != from)
                .map(move |to| (from, to))
        })
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Peg::A => "A",
            Peg::B => "B",
            Peg::C => "C",
        };
        write!(f, "{letter}")
    }
}

/// Error parsing a peg letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePegError(pub String);

impl std::fmt::Display for ParsePegError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid peg {:?}, expected A, B, or C", self.0)
    }
}

impl std::error::Error for ParsePegError {}

impl std::str::FromStr for Peg {
    type Err = ParsePegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(Peg::A),
            "B" | "b" => Ok(Peg::B),
            "C" | "c" => Ok(Peg::C),
            other => Err(ParsePegError(other.to_string())),
        }
    }
}
