//! Landing resolution against platform tops
//!
//! Only downward motion through a platform's top edge is resolved. Bodies
//! pass freely through platform sides and undersides.

use super::player::Player;
use super::world::{Platform, World};

/// Swept test: horizontally overlapping, bottom edge was at or above the top
/// before this tick's move and reaches or passes it after.
pub fn lands_on(player: &Player, platform: &Platform) -> bool {
    let prev_bottom = player.prev_pos.y + player.size.y;
    let left = player.pos.x;
    let right = player.pos.x + player.size.x;

    left < platform.right()
        && right > platform.left()
        && prev_bottom <= platform.top()
        && prev_bottom + player.vel.y >= platform.top()
}

/// Recompute `grounded` and snap onto the last platform in world order the
/// body landed on this tick.
pub fn resolve_landing(mut player: Player, world: &World) -> Player {
    player.grounded = false;

    let landing = world
        .platforms()
        .iter()
        .filter(|platform| lands_on(&player, platform))
        .last();

    if let Some(platform) = landing {
        player.vel.y = 0.0;
        player.pos.y = platform.top() - player.size.y;
        player.grounded = true;
    }

    player
}
