//! The outer-driver facade
//!
//! One `Game` value owns the simulation state and the platform collaborators
//! and exposes the four entry points the outer loop calls every display
//! frame: gather input, advance by the elapsed delta, render, and reset.

use crate::platform::{InputEvent, InputSource, ScoreScreen};
use crate::render::{self, Backdrop, DrawSurface};
use crate::settings::Settings;
use crate::sim::{self, GameState, PlayerStatus};

pub struct Game {
    state: GameState,
    settings: Settings,
    input: Box<dyn InputSource>,
    surface: Box<dyn DrawSurface>,
    backdrop: Box<dyn Backdrop>,
    score_screen: Box<dyn ScoreScreen>,
    /// The score screen takes over exactly once per game
    handed_off: bool,
}

impl Game {
    pub fn new(
        seed: u64,
        settings: Settings,
        input: Box<dyn InputSource>,
        surface: Box<dyn DrawSurface>,
        backdrop: Box<dyn Backdrop>,
        score_screen: Box<dyn ScoreScreen>,
    ) -> Self {
        log::info!("New game, seed {seed}");
        Self {
            state: GameState::new(seed),
            settings,
            input,
            surface,
            backdrop,
            score_screen,
            handed_off: false,
        }
    }

    /// Read-only view of the simulation state (the renderer's and tests' view)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Drain pending input signals. Returns false once an exit was requested.
    pub fn gather_input(&mut self) -> bool {
        while let Some(event) = self.input.poll() {
            match event {
                InputEvent::Boost if !self.state.paused => self.state.request_boost(),
                InputEvent::Boost => {}
                InputEvent::PauseToggle => self.state.toggle_pause(),
                InputEvent::Exit => return false,
            }
        }
        true
    }

    /// Advance the game by an elapsed real-time delta (whole milliseconds).
    ///
    /// May hand control to the score screen as a side effect; after that the
    /// simulation idles until `reset_to_new_game`.
    pub fn advance_simulation(&mut self, elapsed_ms: u32) {
        if self.handed_off {
            return;
        }

        // The backdrop scrolls with the field, so it shares the field's gate
        let backdrop_scrolls = self.state.status == PlayerStatus::Alive && !self.state.paused;

        if let Some(over) = sim::advance(&mut self.state, elapsed_ms) {
            log::info!("Game over: {:?}, score {}", over.reason, over.score);
            self.handed_off = true;
            self.score_screen.show(over.score, over.reason);
            return;
        }

        if backdrop_scrolls {
            self.backdrop.advance(elapsed_ms);
        }
    }

    /// Compose and present the current frame
    pub fn render_frame(&mut self) {
        render::render_frame(
            &self.state,
            self.backdrop.as_mut(),
            self.surface.as_mut(),
            self.settings.show_hitboxes,
        );
    }

    /// Reinitialize the whole data model for a fresh game
    pub fn reset_to_new_game(&mut self) {
        log::info!("Starting a new game");
        self.state.reset();
        self.handed_off = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Rect, SpriteSheet};
    use crate::sim::{GameOver, GameOverReason};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct ScriptedInput(Rc<RefCell<VecDeque<InputEvent>>>);

    impl ScriptedInput {
        fn push(&self, event: InputEvent) {
            self.0.borrow_mut().push_back(event);
        }
    }

    impl InputSource for ScriptedInput {
        fn poll(&mut self) -> Option<InputEvent> {
            self.0.borrow_mut().pop_front()
        }
    }

    struct NullSurface;

    impl DrawSurface for NullSurface {
        fn size(&self) -> (i32, i32) {
            (320, 240)
        }
        fn blit(&mut self, _sheet: SpriteSheet, _src: Rect, _dst: Rect) {}
        fn fill(&mut self, _dst: Rect) {}
        fn draw_text(&mut self, _text: &str) {}
        fn present(&mut self) {}
    }

    #[derive(Clone, Default)]
    struct CountingBackdrop(Rc<RefCell<u32>>);

    impl Backdrop for CountingBackdrop {
        fn advance(&mut self, elapsed_ms: u32) {
            *self.0.borrow_mut() += elapsed_ms;
        }
        fn draw(&mut self, _surface: &mut dyn DrawSurface) {}
    }

    #[derive(Clone, Default)]
    struct RecordingScreen(Rc<RefCell<Vec<GameOver>>>);

    impl ScoreScreen for RecordingScreen {
        fn show(&mut self, final_score: u32, reason: GameOverReason) {
            self.0.borrow_mut().push(GameOver {
                score: final_score,
                reason,
            });
        }
    }

    struct Rig {
        game: Game,
        input: ScriptedInput,
        backdrop: CountingBackdrop,
        screen: RecordingScreen,
    }

    fn rig() -> Rig {
        let input = ScriptedInput::default();
        let backdrop = CountingBackdrop::default();
        let screen = RecordingScreen::default();
        let game = Game::new(
            1,
            Settings::default(),
            Box::new(input.clone()),
            Box::new(NullSurface),
            Box::new(backdrop.clone()),
            Box::new(screen.clone()),
        );
        Rig {
            game,
            input,
            backdrop,
            screen,
        }
    }

    #[test]
    fn test_exit_signal_stops_the_loop() {
        let mut rig = rig();
        assert!(rig.game.gather_input());

        rig.input.push(InputEvent::Exit);
        assert!(!rig.game.gather_input());
    }

    #[test]
    fn test_boost_is_latched_unless_paused() {
        let mut rig = rig();
        rig.input.push(InputEvent::Boost);
        rig.game.gather_input();
        assert!(rig.game.state().boost_pending);

        let mut rig = rig();
        rig.input.push(InputEvent::PauseToggle);
        rig.input.push(InputEvent::Boost);
        rig.game.gather_input();
        assert!(rig.game.state().paused);
        assert!(!rig.game.state().boost_pending);
    }

    #[test]
    fn test_pause_toggle_ignored_after_impact() {
        let mut rig = rig();
        rig.game.state.set_status(PlayerStatus::Collided);
        rig.input.push(InputEvent::PauseToggle);
        rig.game.gather_input();
        assert!(!rig.game.state().paused);
    }

    #[test]
    fn test_backdrop_scrolls_only_during_live_play() {
        let mut rig = rig();
        rig.game.advance_simulation(16);
        assert_eq!(*rig.backdrop.0.borrow(), 16);

        rig.input.push(InputEvent::PauseToggle);
        rig.game.gather_input();
        rig.game.advance_simulation(16);
        assert_eq!(*rig.backdrop.0.borrow(), 16);

        rig.input.push(InputEvent::PauseToggle);
        rig.game.gather_input();
        rig.game.state.set_status(PlayerStatus::Dying);
        rig.game.state.over_reason = Some(GameOverReason::ObstacleCollision);
        rig.game.advance_simulation(16);
        assert_eq!(*rig.backdrop.0.borrow(), 16);
    }

    #[test]
    fn test_score_screen_takes_over_once_until_reset() {
        let mut rig = rig();
        rig.game.state.score = 3;
        rig.game.state.over_reason = Some(GameOverReason::BorderCollision);
        rig.game.state.set_status(PlayerStatus::Dying);
        rig.game.state.player.pos.y = 0.01;

        // Fall until the handoff fires
        for _ in 0..5000 {
            rig.game.advance_simulation(16);
        }

        let shown = rig.screen.0.borrow();
        assert_eq!(shown.len(), 1);
        assert_eq!(
            shown[0],
            GameOver {
                score: 3,
                reason: GameOverReason::BorderCollision
            }
        );
        drop(shown);

        // After a reset the next run can hand off again
        rig.game.reset_to_new_game();
        assert_eq!(rig.game.state().status, PlayerStatus::Alive);
        assert_eq!(rig.game.state().score, 0);

        rig.game.state.over_reason = Some(GameOverReason::ObstacleCollision);
        rig.game.state.set_status(PlayerStatus::Dying);
        rig.game.state.player.pos.y = 0.01;
        for _ in 0..5000 {
            rig.game.advance_simulation(16);
        }
        assert_eq!(rig.screen.0.borrow().len(), 2);
    }
}
