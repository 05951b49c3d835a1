//! Grapple state machine and anchor search

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::world::World;

/// Grapple state; an attached grapple always carries its anchor
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Grapple {
    #[default]
    Idle,
    Attached { anchor: Vec2 },
}

impl Grapple {
    pub fn is_attached(&self) -> bool {
        matches!(self, Grapple::Attached { .. })
    }

    pub fn anchor(&self) -> Option<Vec2> {
        match *self {
            Grapple::Attached { anchor } => Some(anchor),
            Grapple::Idle => None,
        }
    }
}

/// Nearest platform top-center strictly above `from` and closer than `radius`
///
/// Ties keep the first platform in world order.
pub fn find_anchor(from: Vec2, world: &World, radius: f32) -> Option<Vec2> {
    let mut closest = None;
    let mut min_dist = radius;

    for platform in world.platforms() {
        let candidate = platform.top_center();
        let offset = candidate - from;
        let dist = offset.length();
        if offset.y < 0.0 && dist < min_dist {
            min_dist = dist;
            closest = Some(candidate);
        }
    }

    closest
}
