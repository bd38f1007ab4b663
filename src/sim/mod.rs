//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Whole-millisecond substeps only
//! - Seeded RNG only
//! - Stable obstacle order (generation order, never swap-removed)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use field::{Obstacle, ObstacleField};
pub use state::{GameOver, GameOverReason, GameState, Player, PlayerStatus};
pub use tick::advance;
