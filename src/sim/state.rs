//! Game state and core simulation types
//!
//! The whole data model lives in one owned aggregate so there is exactly one
//! writer per simulation step and nothing hides in process-wide state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::ObstacleField;
use crate::consts::*;

/// Player state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Normal play: gravity, boost, scrolling, and collision all active
    Alive,
    /// Frozen at the point of impact while the flash timer runs
    Collided,
    /// Free fall with gravity only - no collision, no scoring, no scrolling
    Dying,
}

/// Why the run ended, carried to the score screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Left the field through the top or bottom border
    BorderCollision,
    /// Hit an obstacle column
    ObstacleCollision,
}

/// Final result handed to the score screen when the fall ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub score: u32,
    pub reason: GameOverReason,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Position in field space (meters). `pos.x` is fixed after reset.
    pub pos: Vec2,
    /// Vertical speed (m/s, positive = up)
    pub speed: f32,
    /// Wing-flap animation frame
    pub frame: u8,
    /// Counter driving the blink animation
    pub blink_frame: u8,
    /// Time spent in the current animation state (ms)
    pub frame_time: u32,
}

impl Player {
    fn at_start() -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH / 4.0, (FIELD_HEIGHT - PLAYER_SIZE_B) / 2.0),
            speed: 0.0,
            frame: 0,
            blink_frame: 0,
            frame_time: 0,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap-placement and sprite-variant randomness
    pub rng: Pcg32,
    /// One point per obstacle pair crossed
    pub score: u32,
    /// Current player status
    pub status: PlayerStatus,
    /// Orthogonal to status: suspends Alive-state simulation, not rendering
    pub paused: bool,
    /// A boost was requested since the last simulated millisecond
    pub boost_pending: bool,
    /// Set at the moment of impact, consumed by the score-screen handoff
    pub over_reason: Option<GameOverReason>,
    /// The player character
    pub player: Player,
    /// The obstacle columns the player weaves through
    pub field: ObstacleField,
}

impl GameState {
    /// Create a fresh game state seeded for this run
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            status: PlayerStatus::Alive,
            paused: false,
            boost_pending: false,
            over_reason: None,
            player: Player::at_start(),
            field: ObstacleField::new(),
        }
    }

    /// Reinitialize everything for a new game.
    ///
    /// The RNG stream is deliberately left running - replaying a seed
    /// reproduces a whole session, not each individual game.
    pub fn reset(&mut self) {
        self.score = 0;
        self.paused = false;
        self.boost_pending = false;
        self.over_reason = None;
        self.player = Player::at_start();
        self.field.clear();
        self.set_status(PlayerStatus::Alive);
    }

    /// Transition the player state machine.
    ///
    /// Every transition restarts the animation clock; entering Collided or
    /// Dying also kills the player's momentum so the impact freeze and the
    /// subsequent fall both start from rest.
    pub fn set_status(&mut self, status: PlayerStatus) {
        self.player.frame_time = 0;
        if matches!(status, PlayerStatus::Collided | PlayerStatus::Dying) {
            self.player.speed = 0.0;
        }
        self.status = status;
    }

    /// Latch a boost request for the next simulated millisecond
    pub fn request_boost(&mut self) {
        self.boost_pending = true;
    }

    /// Flip pause. Ignored unless the player is alive.
    pub fn toggle_pause(&mut self) {
        if self.status == PlayerStatus::Alive {
            self.paused = !self.paused;
        }
    }
}
