//! Simulation context
//!
//! Everything one tick reads or writes lives in `SimContext`. The host owns
//! it and hands it to `tick` once per animation frame; input edges are
//! applied between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grapple::{Grapple, find_anchor};
use super::heat::HeatMeter;
use super::input::{Action, InputEvent, InputState};
use super::player::Player;
use super::sky::DayNightCycle;
use super::world::World;
use crate::consts::SKY_PERIOD;
use crate::level::{Level, Zone};
use crate::tuning::Tuning;

/// Coarse mode gate: the simulation only advances while `Playing`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Menu,
    Playing,
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimContext {
    pub mode: GameMode,
    pub zone: Zone,
    pub player: Player,
    pub world: World,
    pub heat: HeatMeter,
    pub sky: DayNightCycle,
    pub input: InputState,
    pub tuning: Tuning,
    /// Ticks simulated since the zone started
    pub time_ticks: u64,
}

impl SimContext {
    /// A context sitting at the menu with the given tuning
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            ..Default::default()
        }
    }

    /// Load a level and begin playing it
    ///
    /// Resets the player and grapple and sets the sky from the zone; heat
    /// carries over between zones.
    pub fn start_level(&mut self, level: &Level) {
        log::info!(
            "Starting zone {} with {} platforms",
            level.zone.number(),
            level.platforms.len()
        );
        self.zone = level.zone;
        self.world = level.world();
        self.player = Player::default();
        // Zone phases are authored for the default cycle length
        let start = level.zone.start_phase() * self.tuning.sky_period / SKY_PERIOD;
        self.sky = DayNightCycle::at_phase(start);
        self.input = InputState::default();
        self.time_ticks = 0;
        self.mode = GameMode::Playing;
    }

    /// Return to the menu; the tick becomes a no-op
    pub fn stop(&mut self) {
        self.mode = GameMode::Menu;
    }

    pub fn is_playing(&self) -> bool {
        self.mode == GameMode::Playing
    }

    /// Apply one input edge. Grapple press/release drive the grapple state
    /// immediately; movement keys are only sampled by the next tick.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.apply(event);
        match event {
            InputEvent::Pressed(Action::Grapple) => {
                self.activate_grapple();
            }
            InputEvent::Released(Action::Grapple) => self.release_grapple(),
            _ => {}
        }
    }

    /// Search for an anchor and attach to it, charging heat on success.
    ///
    /// Returns whether an attachment occurred. Without an eligible anchor
    /// nothing changes. While already attached, a successful search
    /// re-targets the grapple.
    pub fn activate_grapple(&mut self) -> bool {
        match find_anchor(self.player.pos, &self.world, self.tuning.grapple_radius) {
            Some(anchor) => {
                self.player.grapple = Grapple::Attached { anchor };
                self.heat.charge(self.tuning.heat_per_grapple);
                log::info!(
                    "Grapple attached at ({:.0}, {:.0}), heat {:.2}",
                    anchor.x,
                    anchor.y,
                    self.heat.value()
                );
                true
            }
            None => {
                log::debug!(
                    "No grapple anchor within {} of ({:.1}, {:.1})",
                    self.tuning.grapple_radius,
                    self.player.pos.x,
                    self.player.pos.y
                );
                false
            }
        }
    }

    pub fn release_grapple(&mut self) {
        if self.player.grapple.is_attached() {
            log::info!("Grapple released");
        }
        self.player.grapple = Grapple::Idle;
    }

    /// Endpoints of the grapple line while attached
    pub fn grapple_line(&self) -> Option<(Vec2, Vec2)> {
        self.player
            .grapple
            .anchor()
            .map(|anchor| (self.player.grapple_origin(), anchor))
    }
}
