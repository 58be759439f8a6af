use glam::Vec3;

use crate::config::*;
use crate::tower::{Platform, PlatformKind, Tower};

/// Whether `platform` can support a character whose center is at
/// `position`. The vertical band reaches slightly above the top (landing
/// tolerance) and down past it (so a body that sank into the block during
/// the step is still caught); the footprint test is an AABB check with a
/// forgiving edge margin.
fn supports(platform: &Platform, position: Vec3) -> bool {
    let bottom = position.y - PLAYER_HALF_HEIGHT;
    bottom <= platform.top() + LANDING_TOLERANCE
        && bottom >= platform.bottom() - SUPPORT_DEPTH
        && (position.x - platform.position.x).abs() <= platform.size.x / 2.0 + EDGE_TOLERANCE
        && (position.z - platform.position.z).abs() <= platform.size.z / 2.0 + EDGE_TOLERANCE
}

/// Find the platform supporting a character at `position`, or None while
/// airborne. Only descending or resting characters (`velocity.y` at most
/// the rest epsilon) can land. First match wins: the spawn pad is checked
/// before the spiral, which is scanned in declaration order over the
/// height-filtered candidate band. Checkpoint markers are sensors, not
/// walkable surfaces; they are skipped here and evaluated on landing.
pub fn find_support<'t>(tower: &'t Tower, position: Vec3, velocity: Vec3) -> Option<&'t Platform> {
    if velocity.y > REST_EPSILON {
        return None;
    }
    let spawn = tower.spawn_pad();
    if supports(spawn, position) {
        return Some(spawn);
    }
    tower
        .near(position.y)
        .iter()
        .find(|p| p.kind != PlatformKind::Checkpoint && supports(p, position))
}
