//! Axis-aligned collision tests and player-vs-platform resolution.

use crate::entities::{Platform, Player, Rect};

/// Strict AABB overlap: boxes that merely touch along an edge do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Push the player out of every platform it overlaps, in list order.
///
/// `grounded` is cleared first and only set again by a landing, so walking
/// off an edge loses ground support on the very next tick.  Each overlap is
/// classified from the current velocity and the player's top edge relative
/// to the platform's top, not from penetration depth; when several platforms
/// overlap, later ones in the list get the last word.
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform]) {
    player.grounded = false;

    for platform in platforms {
        if !overlaps(&player.rect(), &platform.rect()) {
            continue;
        }

        if player.vy > 0.0 && player.y < platform.y {
            // Landed
            player.y = platform.y - player.height;
            player.vy = 0.0;
            player.grounded = true;
            player.has_double_jump = player.can_double_jump;
        } else if player.vy < 0.0 && player.y > platform.y {
            // Ceiling
            player.y = platform.y + platform.height;
            player.vy = 0.0;
        } else if player.vx > 0.0 {
            player.x = platform.x - player.width;
            player.vx = 0.0;
        } else if player.vx < 0.0 {
            player.x = platform.x + platform.width;
            player.vx = 0.0;
        }
    }
}
