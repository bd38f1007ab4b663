//! Collision predicates for the player against borders and columns
//!
//! The obstacle test samples two overlapping size classes - a wide flat box
//! and a tall thin one - and ORs them across both axes. The union is a
//! deliberately forgiving, non-rectangular hitbox; both classes must stay,
//! collapsing them into one box changes the game feel.

use glam::Vec2;

use super::field::Obstacle;
use crate::consts::*;

/// Has the player's vertical extent left the field through the top or bottom?
#[inline]
pub fn hits_border(y: f32) -> bool {
    y + PLAYER_SIZE_B / 2.0 > FIELD_HEIGHT || y - PLAYER_SIZE_B / 2.0 < 0.0
}

/// Does the player at `pos` overlap this column?
///
/// All comparisons are strict: grazing an edge exactly is not a hit.
pub fn hits_obstacle(pos: Vec2, ob: &Obstacle) -> bool {
    let inside_v = |y: f32| y > ob.bottom && y < ob.top;
    let inside_h = |x: f32| x > ob.left && x < ob.right;

    // Wide class: half-width A/2, half-height A/4
    let wide = (inside_v(pos.y + PLAYER_SIZE_A / 4.0) || inside_v(pos.y - PLAYER_SIZE_A / 4.0))
        && (inside_h(pos.x - PLAYER_SIZE_A / 2.0) || inside_h(pos.x + PLAYER_SIZE_A / 2.0));

    // Tall class: half-width B/4, half-height B/2
    let tall = (inside_v(pos.y + PLAYER_SIZE_B / 2.0) || inside_v(pos.y - PLAYER_SIZE_B / 2.0))
        && (inside_h(pos.x - PLAYER_SIZE_B / 4.0) || inside_h(pos.x + PLAYER_SIZE_B / 4.0));

    wide || tall
}
