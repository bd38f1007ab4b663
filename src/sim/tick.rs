//! Millisecond-substepped simulation advance
//!
//! The outer loop hands in an elapsed real-time delta; physics runs in whole
//! 1 ms substeps so the integration is identical at any display frame rate.

use super::collision;
use super::state::{GameOver, GameOverReason, GameState, PlayerStatus};
use crate::consts::*;

/// Advance the game state by an elapsed delta (ms).
///
/// Returns the score-screen handoff once the dying player has fallen past the
/// bottom of the field; the caller owns the actual screen switch.
pub fn advance(state: &mut GameState, elapsed_ms: u32) -> Option<GameOver> {
    match state.status {
        PlayerStatus::Alive if !state.paused => {
            'substep: for _ in 0..elapsed_ms {
                // Scroll, score, and spawn before moving the player, so a pass
                // is awarded the same millisecond the column crosses.
                if state.field.advance_one_ms(state.player.pos.x, &mut state.rng) {
                    state.score += 1;
                }

                state.player.speed += GRAVITY / 1000.0;
                if state.boost_pending {
                    // Each press rises the player a constant amount, so the
                    // boost replaces the speed outright, whatever its sign.
                    state.player.speed = BOOST_SPEED;
                    state.boost_pending = false;
                }
                state.player.pos.y += state.player.speed / 1000.0;

                if collision::hits_border(state.player.pos.y) {
                    state.over_reason = Some(GameOverReason::BorderCollision);
                    state.set_status(PlayerStatus::Collided);
                    break 'substep;
                }
                let pos = state.player.pos;
                if state
                    .field
                    .obstacles
                    .iter()
                    .any(|ob| collision::hits_obstacle(pos, ob))
                {
                    state.over_reason = Some(GameOverReason::ObstacleCollision);
                    state.set_status(PlayerStatus::Collided);
                    break 'substep;
                }
            }
        }

        PlayerStatus::Dying => {
            for _ in 0..elapsed_ms {
                state.player.speed += GRAVITY / 1000.0;
                state.player.pos.y += state.player.speed / 1000.0;
                if state.player.pos.y < 0.0 {
                    if let Some(reason) = state.over_reason.take() {
                        return Some(GameOver {
                            score: state.score,
                            reason,
                        });
                    }
                }
            }
        }

        _ => {}
    }

    animate(state, elapsed_ms);
    None
}

/// Advance the animation clocks.
///
/// Alive and dying players flap: the frame clock wraps over one full flap
/// cycle and the frame/blink counters step by however many whole frames
/// elapsed. A collided player instead counts up to the impact-flash duration
/// and then starts falling.
fn animate(state: &mut GameState, elapsed_ms: u32) {
    match state.status {
        PlayerStatus::Alive | PlayerStatus::Dying => {
            let player = &mut state.player;
            player.frame_time = (player.frame_time + elapsed_ms) % (ANIMATION_FRAME_MS * ANIMATION_FRAMES);
            let steps = player.frame_time / ANIMATION_FRAME_MS;
            player.frame = ((player.frame as u32 + steps) % ANIMATION_FRAMES) as u8;
            player.blink_frame = ((player.blink_frame as u32 + steps) % BLINK_FRAMES) as u8;
        }

        PlayerStatus::Collided => {
            state.player.frame_time += elapsed_ms;
            if state.player.frame_time > COLLISION_DISPLAY_MS {
                state.set_status(PlayerStatus::Dying);
            }
        }
    }
}
