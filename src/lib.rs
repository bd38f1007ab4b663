//! Gapwing - a side-scrolling gap-dodging arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle field, collisions, scoring)
//! - `game`: Outer-driver facade (input gathering, simulation advance, frame render, reset)
//! - `render`: Frame composition over an abstract draw surface
//! - `platform`: Input and score-screen collaborator contracts
//! - `settings`: JSON-backed runtime settings

pub mod game;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
///
/// Field space is meters, y-up, origin at the bottom-left corner. Velocities
/// are meters per second; all simulation timing is whole milliseconds.
pub mod consts {
    /// Playfield width (meters)
    pub const FIELD_WIDTH: f32 = 16.0;
    /// Playfield height (meters)
    pub const FIELD_HEIGHT: f32 = 12.0;
    /// Horizontal scroll rate of the obstacle field (m/s, negative = leftward)
    pub const FIELD_SCROLL: f32 = -4.0;

    /// Horizontal extent of one obstacle column (meters)
    pub const COLUMN_WIDTH: f32 = 1.5;
    /// Vertical clearance between the two columns of a pair (meters)
    pub const GAP_HEIGHT: f32 = 2.5;
    /// Spacing between successive pairs at the start of a game (meters)
    pub const GEN_DISTANCE_START: f32 = 6.0;
    /// Added to the spacing after every spawn past the first
    pub const GEN_DISTANCE_STEP: f32 = 0.25;

    /// Vertical acceleration on the player (m/s², negative = downward)
    pub const GRAVITY: f32 = -9.78;
    /// Vertical speed a boost sets (not adds - each press rises the same amount)
    pub const BOOST_SPEED: f32 = 4.0;

    /// Collision size class A: a wide, flat box (half-width A/2, half-height A/4)
    pub const PLAYER_SIZE_A: f32 = 1.0;
    /// Collision size class B: a tall, thin box (half-width B/4, half-height B/2).
    /// The B vertical half-size also bounds the player against the field borders.
    pub const PLAYER_SIZE_B: f32 = 0.75;

    /// Duration of one wing-flap animation frame (ms)
    pub const ANIMATION_FRAME_MS: u32 = 50;
    /// Number of wing-flap frames in the sprite sheet
    pub const ANIMATION_FRAMES: u32 = 2;
    /// Cycle length of the blink counter (in animation frames)
    pub const BLINK_FRAMES: u32 = 96;
    /// The eyes are shut while the blink counter is above this
    pub const BLINK_THRESHOLD: u8 = 92;
    /// How long the impact flash stays on screen before the fall starts (ms)
    pub const COLLISION_DISPLAY_MS: u32 = 500;
    /// Below this vertical speed the diving sprite row is shown (m/s)
    pub const DIVE_SPEED: f32 = -2.0;

    /// Width of one column sprite variant in the atlas (pixels)
    pub const COLUMN_FRAME_PX: i32 = 64;
    /// Height of the column sprite sheet (pixels)
    pub const COLUMN_SHEET_PX: i32 = 480;
    /// Horizontal bleed past the column bounds for the sprite art (pixels)
    pub const COLUMN_OVERDRAW_PX: i32 = 20;
    /// Player sprite frame size (pixels)
    pub const PLAYER_FRAME_PX: i32 = 32;
    /// Impact flash sprite frame size (pixels)
    pub const COLLISION_FRAME_PX: i32 = 48;
}

/// Map a field-space x coordinate to screen pixels
#[inline]
pub fn field_to_screen_x(x: f32, screen_width: i32) -> i32 {
    (x * screen_width as f32 / consts::FIELD_WIDTH) as i32
}

/// Map a field-space y coordinate to screen pixels (y flips: field is y-up)
#[inline]
pub fn field_to_screen_y(y: f32, screen_height: i32) -> i32 {
    screen_height - (y * screen_height as f32 / consts::FIELD_HEIGHT) as i32
}
