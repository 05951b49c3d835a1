//! Heat resource charged by grapple use

use serde::{Deserialize, Serialize};

/// Non-negative heat value; charged per grapple, cooled every tick
///
/// There is no upper bound. Accumulated in `f64`; the HUD floors the raw
/// value, so a crossing that lands a hair under an integer shows the lower one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatMeter {
    value: f64,
}

impl HeatMeter {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Add heat for a successful grapple activation
    pub fn charge(&mut self, amount: f64) {
        self.value += amount;
    }

    /// One tick of cooling, clamped at zero
    pub fn decayed(self, rate: f64) -> Self {
        if self.value > 0.0 {
            Self {
                value: (self.value - rate).max(0.0),
            }
        } else {
            self
        }
    }

    /// Heat as shown in the HUD
    pub fn display(&self) -> i32 {
        self.value.floor() as i32
    }
}
