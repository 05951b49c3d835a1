//! Skyhook - a side-scrolling grapple platformer
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (kinematics, grapple, collision, heat, sky)
//! - `level`: Zones and platform layouts
//! - `tuning`: Data-driven physics constants
//! - `settings`: Player preferences and key bindings
//! - `view`: Read-only snapshot handed to the presentation layer

pub mod level;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod view;

pub use level::{Level, LevelError, Zone};
pub use settings::{KeyBindings, Settings};
pub use tuning::Tuning;
pub use view::FrameView;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions the default level is authored for
    pub const CANVAS_WIDTH: f32 = 1000.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Player body
    pub const PLAYER_WIDTH: f32 = 25.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 300.0;

    /// Kinematics (per tick, one tick per rendered frame)
    pub const GRAVITY: f32 = 0.5;
    pub const FRICTION: f32 = 0.94;
    pub const ACCEL: f32 = 0.8;
    pub const JUMP_FORCE: f32 = -12.0;

    /// Grapple
    pub const GRAPPLE_RADIUS: f32 = 300.0;
    /// Fraction of the anchor offset added to velocity each tick
    pub const GRAPPLE_SPRING: f32 = 0.01;
    /// Extra horizontal damping while swinging
    pub const GRAPPLE_DAMPING: f32 = 0.98;

    /// Heat
    pub const HEAT_PER_GRAPPLE: f64 = 2.0;
    pub const HEAT_DECAY: f64 = 0.01;

    /// Sky phase advance per tick; a full day/sunset/night cycle spans [0, SKY_PERIOD)
    pub const SKY_RATE: f32 = 0.0005;
    pub const SKY_PERIOD: f32 = 2.0;
}
