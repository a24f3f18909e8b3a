//! Pure AABB collision resolution between the player rectangle and static
//! geometry. No state lives here; the caller owns the side effects a contact
//! implies (jump availability, clip switches).

use froghop_core::geometry::Rect;

/// Outcome of resolving the player against one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// No overlap; nothing was changed.
    None,
    /// Pushed out horizontally. Position only; horizontal velocity is
    /// untouched.
    Side,
    /// Came to rest on the platform's top edge.
    Landed,
    /// Hit the platform's underside.
    Ceiling,
}

/// Penetration depth along x, measured between the nearer pair of vertical
/// edges: the right edge of whichever rectangle is on the left against the
/// left edge of the other.
pub fn penetration_x(player: &Rect, platform: &Rect) -> f32 {
    if player.x > platform.x {
        platform.right() - player.x
    } else {
        player.right() - platform.x
    }
}

/// Penetration depth along y, same nearer-edge pairing as [`penetration_x`].
pub fn penetration_y(player: &Rect, platform: &Rect) -> f32 {
    if player.y > platform.y {
        platform.bottom() - player.y
    } else {
        player.bottom() - platform.y
    }
}

/// Separate `player` from `platform` along the axis with the strictly
/// smaller penetration; equal penetrations resolve vertically. Vertical
/// contact zeroes `vy`.
///
/// Post-condition: `player` no longer intersects `platform`.
pub fn resolve_platform(player: &mut Rect, vy: &mut f32, platform: &Rect) -> Contact {
    if !player.intersects(platform) {
        return Contact::None;
    }

    let overlap_x = penetration_x(player, platform);
    let overlap_y = penetration_y(player, platform);

    if overlap_x < overlap_y {
        // Push out on the side the player approached from.
        if player.x < platform.x {
            player.x = platform.x - player.width;
        } else {
            player.x = platform.right();
        }
        Contact::Side
    } else if player.y < platform.y {
        player.y = platform.y - player.height;
        *vy = 0.0;
        Contact::Landed
    } else {
        player.y = platform.bottom();
        *vy = 0.0;
        Contact::Ceiling
    }
}

/// Clamp the player to the ground plane at `floor_y`. Returns true when the
/// player was touching or below it.
pub fn resolve_ground(player: &mut Rect, vy: &mut f32, floor_y: f32) -> bool {
    if player.bottom() >= floor_y {
        player.y = floor_y - player.height;
        *vy = 0.0;
        true
    } else {
        false
    }
}
