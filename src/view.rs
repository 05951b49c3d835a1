//! Presentation snapshot
//!
//! Copies out everything the drawing and HUD code needs for one frame so the
//! host never reaches into simulation internals.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Platform, SimContext, SkyColor};

/// Color tokens for drawn elements
pub mod colors {
    pub const PLAYER: &str = "#00ffcc";
    pub const PLATFORM_FILL: &str = "#1a1a1a";
    pub const PLATFORM_STROKE: &str = "#333";
    pub const GRAPPLE_LINE: &str = "#ff00ff";
    /// Dash pattern for the grapple line (on, off)
    pub const GRAPPLE_DASH: [f64; 2] = [5.0, 5.0];
    /// Glow radius around the player
    pub const PLAYER_GLOW: f64 = 15.0;
}

/// Axis-aligned rectangle to draw, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl From<&Platform> for DrawRect {
    fn from(p: &Platform) -> Self {
        Self {
            x: p.x,
            y: p.y,
            w: p.w,
            h: p.h,
        }
    }
}

/// Everything presented for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub sky: SkyColor,
    /// CSS form of `sky`
    pub sky_css: String,
    pub player: DrawRect,
    pub player_color: &'static str,
    pub platforms: Vec<DrawRect>,
    /// (from, to) while attached
    pub grapple_line: Option<(Vec2, Vec2)>,
    /// Heat floored for display
    pub heat: i32,
    /// |vx| rounded for display
    pub speed: i32,
    pub zone_label: String,
}

impl FrameView {
    pub fn capture(ctx: &SimContext) -> Self {
        let sky = ctx.sky.current_color(ctx.tuning.sky_period);
        let player = &ctx.player;
        Self {
            sky,
            sky_css: sky.to_string(),
            player: DrawRect {
                x: player.pos.x,
                y: player.pos.y,
                w: player.size.x,
                h: player.size.y,
            },
            player_color: colors::PLAYER,
            platforms: ctx.world.platforms().iter().map(DrawRect::from).collect(),
            grapple_line: ctx.grapple_line(),
            heat: ctx.heat.display(),
            speed: player.display_speed(),
            zone_label: ctx.zone.label(),
        }
    }
}
