//! Frame composition over an abstract draw surface
//!
//! This module has no simulation authority: it reads the game state, maps
//! field-space meters to screen pixels with a fixed linear scale, picks
//! source rectangles out of the sprite atlases, and asks the surface to
//! composite them. Blitting, text rasterization, and the backdrop itself are
//! all external services.

use crate::consts::*;
use crate::sim::{GameState, PlayerStatus};
use crate::{field_to_screen_x, field_to_screen_y};

/// A rectangle in atlas or screen space (device pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// The sprite atlases the renderer composes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteSheet {
    /// Column art, one variant per `COLUMN_FRAME_PX` stride
    Columns,
    /// Player animation frames, `PLAYER_FRAME_PX` square
    Character,
    /// Impact flash, `COLLISION_FRAME_PX` square
    Collision,
}

/// Rectangle-blit composition target plus the score-text overlay service
pub trait DrawSurface {
    /// Screen dimensions in device pixels
    fn size(&self) -> (i32, i32);
    /// Copy `src` from an atlas onto `dst` in screen space
    fn blit(&mut self, sheet: SpriteSheet, src: Rect, dst: Rect);
    /// Solid highlight fill (hitbox overlay)
    fn fill(&mut self, dst: Rect);
    /// Score overlay, rendered by the host's text service
    fn draw_text(&mut self, text: &str);
    /// Flip the composed frame to the display
    fn present(&mut self);
}

/// The scrolling backdrop behind the playfield
pub trait Backdrop {
    fn advance(&mut self, elapsed_ms: u32);
    fn draw(&mut self, surface: &mut dyn DrawSurface);
}

/// Compose one frame of the current state onto the surface.
pub fn render_frame(
    state: &GameState,
    backdrop: &mut dyn Backdrop,
    surface: &mut dyn DrawSurface,
    show_hitboxes: bool,
) {
    backdrop.draw(surface);
    let (sw, sh) = surface.size();

    for (i, ob) in state.field.obstacles.iter().enumerate() {
        let dst = Rect::new(
            field_to_screen_x(ob.left, sw) - COLUMN_OVERDRAW_PX,
            field_to_screen_y(ob.top, sh),
            ((ob.right - ob.left) * sw as f32 / FIELD_WIDTH) as i32 + 2 * COLUMN_OVERDRAW_PX,
            ((ob.top - ob.bottom) * sh as f32 / FIELD_HEIGHT) as i32,
        );
        // Even indices are upper columns: their art anchors to the bottom of
        // the sheet so the column hangs down into the field. Lower columns
        // read from the top.
        let src_y = if i % 2 == 0 { COLUMN_SHEET_PX - dst.h } else { 0 };
        let src = Rect::new(COLUMN_FRAME_PX * ob.frame as i32, src_y, dst.w, dst.h);
        surface.blit(SpriteSheet::Columns, src, dst);
    }

    draw_player(state, surface, sw, sh);

    if show_hitboxes {
        draw_hitboxes(state, surface, sw, sh);
    }

    surface.draw_text(&format!("Score{:>10}", state.score));
    surface.present();
}

fn draw_player(state: &GameState, surface: &mut dyn DrawSurface, sw: i32, sh: i32) {
    let player = &state.player;
    let dst = Rect::new(
        field_to_screen_x(player.pos.x, sw) - PLAYER_FRAME_PX / 2 - 1,
        field_to_screen_y(player.pos.y, sh) - PLAYER_FRAME_PX / 2,
        PLAYER_FRAME_PX,
        PLAYER_FRAME_PX,
    );

    match state.status {
        PlayerStatus::Alive => {
            // Frame groups in the character sheet: ascending, ascending-blink,
            // diving, diving-blink, then the dying frames.
            let group = if player.speed > DIVE_SPEED { 0 } else { 2 };
            let blink = if player.blink_frame > BLINK_THRESHOLD { 1 } else { 0 };
            let src_x =
                PLAYER_FRAME_PX * ((group + blink) * ANIMATION_FRAMES as i32 + player.frame as i32);
            let src = Rect::new(src_x, 0, PLAYER_FRAME_PX, PLAYER_FRAME_PX);
            surface.blit(SpriteSheet::Character, src, dst);
        }

        PlayerStatus::Collided => {
            // The impact flash is larger than the character frame; keep it centered
            let pad = (COLLISION_FRAME_PX - PLAYER_FRAME_PX) / 2;
            let src = Rect::new(0, 0, COLLISION_FRAME_PX, COLLISION_FRAME_PX);
            let flash = Rect::new(
                dst.x - pad,
                dst.y - pad,
                PLAYER_FRAME_PX + 2 * pad,
                PLAYER_FRAME_PX + 2 * pad,
            );
            surface.blit(SpriteSheet::Collision, src, flash);
        }

        PlayerStatus::Dying => {
            let src_x = PLAYER_FRAME_PX * (4 * ANIMATION_FRAMES as i32 + player.frame as i32);
            let src = Rect::new(src_x, 0, PLAYER_FRAME_PX, PLAYER_FRAME_PX);
            surface.blit(SpriteSheet::Character, src, dst);
        }
    }
}

/// Debug overlay: the two collision size classes, drawn as filled boxes
fn draw_hitboxes(state: &GameState, surface: &mut dyn DrawSurface, sw: i32, sh: i32) {
    let pos = state.player.pos;

    let wide = Rect::new(
        field_to_screen_x(pos.x - PLAYER_SIZE_A / 2.0, sw),
        field_to_screen_y(pos.y + PLAYER_SIZE_A / 4.0, sh),
        (PLAYER_SIZE_A * sw as f32 / FIELD_WIDTH) as i32,
        (PLAYER_SIZE_A / 2.0 * sh as f32 / FIELD_HEIGHT) as i32,
    );
    let tall = Rect::new(
        field_to_screen_x(pos.x - PLAYER_SIZE_B / 4.0, sw),
        field_to_screen_y(pos.y + PLAYER_SIZE_B / 2.0, sh),
        (PLAYER_SIZE_B / 2.0 * sw as f32 / FIELD_WIDTH) as i32,
        (PLAYER_SIZE_B * sh as f32 / FIELD_HEIGHT) as i32,
    );
    surface.fill(wide);
    surface.fill(tall);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::field::Obstacle;

    struct NullBackdrop;

    impl Backdrop for NullBackdrop {
        fn advance(&mut self, _elapsed_ms: u32) {}
        fn draw(&mut self, _surface: &mut dyn DrawSurface) {}
    }

    #[derive(Default)]
    struct RecordingSurface {
        blits: Vec<(SpriteSheet, Rect, Rect)>,
        fills: Vec<Rect>,
        texts: Vec<String>,
        presented: u32,
    }

    impl DrawSurface for RecordingSurface {
        fn size(&self) -> (i32, i32) {
            (320, 240)
        }
        fn blit(&mut self, sheet: SpriteSheet, src: Rect, dst: Rect) {
            self.blits.push((sheet, src, dst));
        }
        fn fill(&mut self, dst: Rect) {
            self.fills.push(dst);
        }
        fn draw_text(&mut self, text: &str) {
            self.texts.push(text.to_string());
        }
        fn present(&mut self) {
            self.presented += 1;
        }
    }

    fn state_with_pair() -> GameState {
        let mut state = GameState::new(1);
        // Gap between y=4.0 and y=6.5 at x ∈ [8.0, 9.5]
        state.field.obstacles.push(Obstacle {
            left: 8.0,
            right: 9.5,
            top: FIELD_HEIGHT,
            bottom: 6.5,
            passed: false,
            frame: 1,
        });
        state.field.obstacles.push(Obstacle {
            left: 8.0,
            right: 9.5,
            top: 4.0,
            bottom: 0.0,
            passed: false,
            frame: 2,
        });
        state
    }

    #[test]
    fn test_field_to_screen_mapping() {
        // 320x240 over a 16x12 field: 20 px per meter, y flipped
        assert_eq!(field_to_screen_x(0.0, 320), 0);
        assert_eq!(field_to_screen_x(8.0, 320), 160);
        assert_eq!(field_to_screen_y(0.0, 240), 240);
        assert_eq!(field_to_screen_y(FIELD_HEIGHT, 240), 0);
    }

    #[test]
    fn test_column_pair_source_parity() {
        let state = state_with_pair();
        let mut surface = RecordingSurface::default();
        render_frame(&state, &mut NullBackdrop, &mut surface, false);

        let columns: Vec<_> = surface
            .blits
            .iter()
            .filter(|(sheet, _, _)| *sheet == SpriteSheet::Columns)
            .collect();
        assert_eq!(columns.len(), 2);

        // Upper column: 5.5 m tall -> 110 px, bottom-anchored in the sheet
        let (_, upper_src, upper_dst) = columns[0];
        assert_eq!(upper_dst.h, 110);
        assert_eq!(upper_src.y, COLUMN_SHEET_PX - 110);
        assert_eq!(upper_src.x, COLUMN_FRAME_PX);
        assert_eq!(upper_dst.y, 0);

        // Lower column: 4 m tall -> 80 px, read from the top of the sheet
        let (_, lower_src, lower_dst) = columns[1];
        assert_eq!(lower_dst.h, 80);
        assert_eq!(lower_src.y, 0);
        assert_eq!(lower_src.x, 2 * COLUMN_FRAME_PX);

        // Both stretch horizontally by the overdraw bleed
        assert_eq!(upper_dst.x, 8 * 20 - COLUMN_OVERDRAW_PX);
        assert_eq!(upper_dst.w, 30 + 2 * COLUMN_OVERDRAW_PX);
    }

    #[test]
    fn test_alive_player_picks_row_by_speed_and_blink() {
        let mut state = state_with_pair();
        let mut surface = RecordingSurface::default();
        state.player.speed = 1.0;
        state.player.frame = 1;
        render_frame(&state, &mut NullBackdrop, &mut surface, false);

        let (sheet, src, dst) = *surface
            .blits
            .iter()
            .find(|(sheet, _, _)| *sheet == SpriteSheet::Character)
            .unwrap();
        assert_eq!(sheet, SpriteSheet::Character);
        // Ascending group, frame 1
        assert_eq!(src.x, PLAYER_FRAME_PX);
        assert_eq!(dst.w, PLAYER_FRAME_PX);

        // Diving and blinking selects the last pre-death group
        state.player.speed = -3.0;
        state.player.blink_frame = BLINK_THRESHOLD + 1;
        let mut surface = RecordingSurface::default();
        render_frame(&state, &mut NullBackdrop, &mut surface, false);
        let (_, src, _) = *surface
            .blits
            .iter()
            .find(|(sheet, _, _)| *sheet == SpriteSheet::Character)
            .unwrap();
        assert_eq!(src.x, PLAYER_FRAME_PX * (3 * ANIMATION_FRAMES as i32 + 1));
    }

    #[test]
    fn test_collided_player_uses_flash_sheet() {
        let mut state = state_with_pair();
        state.set_status(PlayerStatus::Collided);
        let mut surface = RecordingSurface::default();
        render_frame(&state, &mut NullBackdrop, &mut surface, false);

        let (_, src, dst) = *surface
            .blits
            .iter()
            .find(|(sheet, _, _)| *sheet == SpriteSheet::Collision)
            .unwrap();
        assert_eq!(src.w, COLLISION_FRAME_PX);
        assert_eq!(dst.w, COLLISION_FRAME_PX);
    }

    #[test]
    fn test_score_overlay_and_present() {
        let mut state = state_with_pair();
        state.score = 42;
        let mut surface = RecordingSurface::default();
        render_frame(&state, &mut NullBackdrop, &mut surface, false);

        assert_eq!(surface.texts, vec![format!("Score{:>10}", 42)]);
        assert_eq!(surface.presented, 1);
        assert!(surface.fills.is_empty());
    }

    #[test]
    fn test_hitbox_overlay_draws_both_classes() {
        let state = state_with_pair();
        let mut surface = RecordingSurface::default();
        render_frame(&state, &mut NullBackdrop, &mut surface, true);
        assert_eq!(surface.fills.len(), 2);
    }
}
