//! Held-key state consumed by the simulation
//!
//! Raw key capture and key-name normalization happen in the host; the core
//! only ever sees logical actions.

use serde::{Deserialize, Serialize};

/// Logical actions the player can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Grapple,
}

/// A single input edge from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Action),
    Released(Action),
}

/// Which actions are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub grapple: bool,
}

impl InputState {
    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left,
            Action::MoveRight => self.move_right,
            Action::Jump => self.jump,
            Action::Grapple => self.grapple,
        }
    }

    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::MoveLeft => self.move_left = held,
            Action::MoveRight => self.move_right = held,
            Action::Jump => self.jump = held,
            Action::Grapple => self.grapple = held,
        }
    }

    /// Record a press/release edge
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed(action) => self.set(action, true),
            InputEvent::Released(action) => self.set(action, false),
        }
    }
}
