//! Day/night sky color cycle
//!
//! The phase runs from 0 to the cycle period (2 by default). The first half
//! blends day into sunset, the second half blends sunset into night, then
//! the phase snaps back to day.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkyColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SkyColor {
    pub const DAY: SkyColor = SkyColor::new(135, 206, 235);
    pub const SUNSET: SkyColor = SkyColor::new(255, 95, 109);
    pub const NIGHT: SkyColor = SkyColor::new(10, 10, 35);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear blend, rounded to the nearest integer
    pub fn lerp(self, other: SkyColor, factor: f32) -> SkyColor {
        let channel = |a: u8, b: u8| {
            let (a, b) = (a as f32, b as f32);
            (a + (b - a) * factor).round().clamp(0.0, 255.0) as u8
        };
        SkyColor {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// CSS color string, e.g. `rgb(135, 206, 235)`
impl fmt::Display for SkyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Monotonic sky phase with a hard reset at the end of the cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayNightCycle {
    phase: f32,
}

impl DayNightCycle {
    pub fn at_phase(phase: f32) -> Self {
        Self { phase }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Advance one tick. Overshoot past `period` is discarded, not carried.
    pub fn advanced(self, rate: f32, period: f32) -> Self {
        let phase = self.phase + rate;
        if phase > period {
            log::debug!("Sky cycle complete, resetting to day");
            Self { phase: 0.0 }
        } else {
            Self { phase }
        }
    }

    /// Sky color for a cycle of length `period`; sunset sits at `period / 2`
    pub fn current_color(&self, period: f32) -> SkyColor {
        let t = self.phase * 2.0 / period;
        if t <= 1.0 {
            SkyColor::DAY.lerp(SkyColor::SUNSET, t)
        } else {
            SkyColor::SUNSET.lerp(SkyColor::NIGHT, t - 1.0)
        }
    }
}
