//! Gapwing entry point
//!
//! Runs the game headless with a hover autopilot on the stick: useful for
//! profiling the simulation and for watching a full game lifecycle in the
//! logs until a windowed front end lands.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;

use gapwing::consts::{FIELD_HEIGHT, FIELD_SCROLL, GAP_HEIGHT};
use gapwing::platform::{InputEvent, InputSource, ScoreScreen};
use gapwing::render::{Backdrop, DrawSurface, Rect, SpriteSheet};
use gapwing::sim::{GameOverReason, GameState};
use gapwing::{Game, Settings};

/// Input queue shared between the driver and the game
#[derive(Clone, Default)]
struct SharedInput(Rc<RefCell<VecDeque<InputEvent>>>);

impl SharedInput {
    fn push(&self, event: InputEvent) {
        self.0.borrow_mut().push_back(event);
    }
}

impl InputSource for SharedInput {
    fn poll(&mut self) -> Option<InputEvent> {
        self.0.borrow_mut().pop_front()
    }
}

/// Accepts composition calls without touching a display
#[derive(Default)]
struct HeadlessSurface;

impl DrawSurface for HeadlessSurface {
    fn size(&self) -> (i32, i32) {
        (320, 240)
    }
    fn blit(&mut self, _sheet: SpriteSheet, _src: Rect, _dst: Rect) {}
    fn fill(&mut self, _dst: Rect) {}
    fn draw_text(&mut self, _text: &str) {}
    fn present(&mut self) {}
}

/// Parallax backdrop drifting at half the field's scroll rate
#[derive(Default)]
struct ScrollingBackdrop {
    offset: f32,
}

impl Backdrop for ScrollingBackdrop {
    fn advance(&mut self, elapsed_ms: u32) {
        self.offset += FIELD_SCROLL / 2.0 / 1000.0 * elapsed_ms as f32;
        self.offset %= gapwing::consts::FIELD_WIDTH;
    }
    fn draw(&mut self, _surface: &mut dyn DrawSurface) {}
}

/// Captures the handoff so the driver knows the run is over
#[derive(Clone, Default)]
struct DemoScoreScreen(Rc<Cell<Option<(u32, GameOverReason)>>>);

impl ScoreScreen for DemoScoreScreen {
    fn show(&mut self, final_score: u32, reason: GameOverReason) {
        self.0.set(Some((final_score, reason)));
    }
}

/// Altitude the autopilot steers toward: the next unpassed gap's center
fn next_gap_center(state: &GameState) -> f32 {
    state
        .field
        .obstacles
        .chunks_exact(2)
        .find(|pair| pair[0].right >= state.player.pos.x)
        .map(|pair| pair[0].bottom - GAP_HEIGHT / 2.0)
        .unwrap_or(FIELD_HEIGHT / 2.0)
}

fn main() {
    env_logger::init();
    log::info!("Gapwing starting");

    let settings = Settings::load(Path::new(Settings::DEFAULT_PATH));
    let seed = settings.seed.unwrap_or_else(rand::random);
    let frame_ms = settings.frame_ms.max(1);
    let demo_ms = settings.demo_ms;

    let input = SharedInput::default();
    let result = DemoScoreScreen::default();
    let mut game = Game::new(
        seed,
        settings,
        Box::new(input.clone()),
        Box::new(HeadlessSurface::default()),
        Box::new(ScrollingBackdrop::default()),
        Box::new(result.clone()),
    );

    let mut simulated_ms = 0u32;
    while result.0.get().is_none() && simulated_ms < demo_ms {
        if game.state().player.pos.y < next_gap_center(game.state()) {
            input.push(InputEvent::Boost);
        }
        if !game.gather_input() {
            break;
        }
        game.advance_simulation(frame_ms);
        game.render_frame();
        simulated_ms += frame_ms;
    }

    match result.0.get() {
        Some((score, reason)) => {
            log::info!("Demo over after {simulated_ms} ms: {score} points ({reason:?})")
        }
        None => log::info!("Demo budget of {demo_ms} ms elapsed with the pilot still flying"),
    }
}
