//! Static level geometry

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned platform; `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Grapple anchor point: horizontal center of the top edge
    #[inline]
    pub fn top_center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y)
    }
}

/// Ordered platform list for the active zone
///
/// Iteration order matters: collision lets the last matching platform win and
/// anchor search lets the first of equally-near platforms win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    platforms: Vec<Platform>,
}

impl World {
    pub fn new(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
