//! Zones and platform layouts
//!
//! A level is a zone tag plus an ordered platform list. The built-in layout
//! is shared by all three zones; zones differ in where the sky cycle starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::CANVAS_WIDTH;
use crate::sim::{Platform, World};

/// Errors from loading level data
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("Level parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown zone: {0}")]
    UnknownZone(u8),

    #[error("Invalid platform #{index}: {reason}")]
    InvalidPlatform { index: usize, reason: String },
}

/// Selectable zone; each starts the sky at a different time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Zone {
    #[default]
    Dawn,
    Dusk,
    Midnight,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Dawn, Zone::Dusk, Zone::Midnight];

    /// 1-based zone number as shown to the player
    pub fn number(self) -> u8 {
        match self {
            Zone::Dawn => 1,
            Zone::Dusk => 2,
            Zone::Midnight => 3,
        }
    }

    /// Initial sky phase
    pub fn start_phase(self) -> f32 {
        match self {
            Zone::Dawn => 0.0,
            Zone::Dusk => 0.8,
            Zone::Midnight => 1.2,
        }
    }

    pub fn label(self) -> String {
        format!("ZONE: {}", self.number())
    }
}

impl TryFrom<u8> for Zone {
    type Error = LevelError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Zone::Dawn),
            2 => Ok(Zone::Dusk),
            3 => Ok(Zone::Midnight),
            other => Err(LevelError::UnknownZone(other)),
        }
    }
}

impl From<Zone> for u8 {
    fn from(zone: Zone) -> u8 {
        zone.number()
    }
}

/// Level data: zone plus platforms in authoring order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub zone: Zone,
    pub platforms: Vec<Platform>,
}

impl Level {
    /// Built-in layout for a zone: a full-width floor and three ledges
    pub fn builtin(zone: Zone) -> Self {
        Self {
            zone,
            platforms: vec![
                Platform::new(0.0, 380.0, CANVAS_WIDTH, 40.0),
                Platform::new(300.0, 220.0, 150.0, 20.0),
                Platform::new(600.0, 150.0, 150.0, 20.0),
                Platform::new(850.0, 250.0, 100.0, 20.0),
            ],
        }
    }

    /// Parse and validate a level from JSON
    ///
    /// ```json
    /// { "zone": 2, "platforms": [{ "x": 0, "y": 380, "w": 1000, "h": 40 }] }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: Level = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Rejects non-finite coordinates and non-positive extents.
    /// An empty platform list is valid.
    pub fn validate(&self) -> Result<(), LevelError> {
        for (index, p) in self.platforms.iter().enumerate() {
            if ![p.x, p.y, p.w, p.h].iter().all(|v| v.is_finite()) {
                return Err(LevelError::InvalidPlatform {
                    index,
                    reason: "non-finite coordinate".to_string(),
                });
            }
            if p.w <= 0.0 || p.h <= 0.0 {
                return Err(LevelError::InvalidPlatform {
                    index,
                    reason: format!("extent {}x{} must be positive", p.w, p.h),
                });
            }
        }
        Ok(())
    }

    pub fn world(&self) -> World {
        World::new(self.platforms.clone())
    }
}
