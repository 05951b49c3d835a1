//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, no variable timestep
//! - Stable iteration order over platforms
//! - No rendering or platform dependencies

pub mod collision;
pub mod grapple;
pub mod heat;
pub mod input;
pub mod player;
pub mod sky;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{lands_on, resolve_landing};
pub use grapple::{Grapple, find_anchor};
pub use heat::HeatMeter;
pub use input::{Action, InputEvent, InputState};
pub use player::Player;
pub use sky::{DayNightCycle, SkyColor};
pub use state::{GameMode, SimContext};
pub use tick::{PIPELINE, Stage, tick, tick_in_place};
pub use world::{Platform, World};
