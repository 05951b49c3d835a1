//! Player body and per-tick kinematics

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grapple::Grapple;
use super::input::InputState;
use crate::consts::*;
use crate::tuning::Tuning;

/// The controllable actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    /// Width and height
    pub size: Vec2,
    pub grounded: bool,
    pub grapple: Grapple,
    /// Position before the most recent integration step (swept landing test)
    pub prev_pos: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self::spawn(Vec2::new(PLAYER_START_X, PLAYER_START_Y))
    }
}

impl Player {
    pub fn spawn(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            grounded: false,
            grapple: Grapple::Idle,
            prev_pos: pos,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Where the grapple line leaves the body: top edge, horizontally centered
    pub fn grapple_origin(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y)
    }

    /// Horizontal speed as shown in the HUD
    pub fn display_speed(&self) -> i32 {
        self.vel.x.abs().round() as i32
    }

    /// One tick of motion: branch forces, then friction and gravity, then position.
    ///
    /// Jump fires on every tick the key is held while grounded, not just on press.
    pub fn integrated(mut self, input: &InputState, tuning: &Tuning) -> Self {
        match self.grapple {
            Grapple::Idle => {
                if input.move_right {
                    self.vel.x += tuning.accel;
                }
                if input.move_left {
                    self.vel.x -= tuning.accel;
                }
                if input.jump && self.grounded {
                    self.vel.y = tuning.jump_force;
                    self.grounded = false;
                }
            }
            Grapple::Attached { anchor } => {
                self.vel += (anchor - self.pos) * tuning.grapple_spring;
                self.vel.x *= tuning.grapple_damping;
            }
        }

        self.vel.x *= tuning.friction;
        self.vel.y += tuning.gravity;

        self.prev_pos = self.pos;
        self.pos += self.vel;
        self
    }
}
