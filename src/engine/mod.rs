//! The puzzle engine: sole authority over legality and state transitions.

pub mod session;

pub use session::HanoiEngine;
