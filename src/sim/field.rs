//! The obstacle field: column pairs the player weaves through
//!
//! Obstacles live in a single `Vec` in generation order, which is also
//! left-to-right spatial order. A pair is pushed as upper column then lower
//! column, so even indices are always upper columns - the renderer's
//! sprite-flip parity depends on that.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One column - half of a vertically split pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Field-space bounds (meters)
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    /// True once the player has crossed the right edge (scoring fires once per pair)
    pub passed: bool,
    /// Visual variant in the column atlas
    pub frame: u8,
}

/// The scrolling collection of obstacle columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    /// Generation order == left-to-right order; removal never reorders
    pub obstacles: Vec<Obstacle>,
    /// Spacing before the next pair spawns; grows over a game as a difficulty ramp
    pub gen_distance: f32,
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            gen_distance: GEN_DISTANCE_START,
        }
    }

    /// Drop all columns and restart the difficulty ramp
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.gen_distance = GEN_DISTANCE_START;
    }

    /// Advance the field by one simulated millisecond.
    ///
    /// Scrolls every column left, marks columns the player has passed, drops
    /// columns that have left the field, and spawns a new pair when the gap
    /// behind the rightmost column has opened far enough. Returns whether a
    /// pair was passed this millisecond (both halves of a pair share a right
    /// edge, so they cross together; the single return collapses them into
    /// one score event).
    pub fn advance_one_ms(&mut self, player_x: f32, rng: &mut impl Rng) -> bool {
        let mut pair_passed = false;

        // Back-to-front so the in-place removal keeps the indices still to be
        // visited valid for the rest of the scan.
        for i in (0..self.obstacles.len()).rev() {
            let ob = &mut self.obstacles[i];
            ob.left += FIELD_SCROLL / 1000.0;
            ob.right += FIELD_SCROLL / 1000.0;
            if !ob.passed && ob.right < player_x {
                ob.passed = true;
                pair_passed = true;
            }
            if ob.right < 0.0 {
                self.obstacles.remove(i);
            }
        }

        if self
            .obstacles
            .last()
            .is_none_or(|last| FIELD_WIDTH - last.right >= self.gen_distance)
        {
            self.spawn_pair(rng);
        }

        pair_passed
    }

    /// Append a new column pair at the right of the field.
    ///
    /// An empty field spawns at the right boundary minus one millisecond of
    /// scroll, as if the pair had been drifting in all along. Otherwise the
    /// pair lands `gen_distance` behind the current rightmost column and the
    /// spacing for the next one grows.
    pub fn spawn_pair(&mut self, rng: &mut impl Rng) {
        let left = match self.obstacles.last() {
            None => FIELD_WIDTH + FIELD_SCROLL / 1000.0,
            Some(last) => {
                let left = last.right + self.gen_distance;
                self.gen_distance += GEN_DISTANCE_STEP;
                left
            }
        };
        let right = left + COLUMN_WIDTH;

        // Where's the place for the player to go through?
        let gap_top = GAP_HEIGHT
            + FIELD_HEIGHT / 16.0
            + rng.random::<f32>() * (FIELD_HEIGHT - GAP_HEIGHT - FIELD_HEIGHT / 8.0);

        self.obstacles.push(Obstacle {
            left,
            right,
            top: FIELD_HEIGHT,
            bottom: gap_top,
            passed: false,
            frame: rng.random_range(0..3),
        });
        self.obstacles.push(Obstacle {
            left,
            right,
            top: gap_top - GAP_HEIGHT,
            bottom: 0.0,
            passed: false,
            frame: rng.random_range(0..3),
        });
    }
}
