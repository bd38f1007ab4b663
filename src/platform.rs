//! Collaborator contracts around the game core
//!
//! The core never touches raw input devices or owns a window; the hosting
//! platform supplies these seams. Raw events arrive already translated into
//! the three abstract signals the game understands, and the score screen is
//! an opaque sink that takes over once the run ends.

use crate::sim::GameOverReason;

/// Abstract input signals, one per translated device event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Rise a fixed amount
    Boost,
    /// Flip pause (honored only while alive)
    PauseToggle,
    /// Tear the outer loop down
    Exit,
}

/// Pull-based input: polled once per outer frame, drained until `None`
pub trait InputSource {
    fn poll(&mut self) -> Option<InputEvent>;
}

/// The score/game-over presentation this core hands control to
pub trait ScoreScreen {
    fn show(&mut self, final_score: u32, reason: GameOverReason);
}
