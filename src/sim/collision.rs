//! Crash detection
//!
//! Two hitboxes on purpose: obstacles are tested against the inset player box
//! so near misses feel fair, while the playfield bounds use the full sprite.

use glam::Vec2;

use super::aabb::Aabb;
use super::state::{CrashCause, Obstacle, Player};
use crate::tuning::Tuning;

/// The column above the gap and the column below it, over the obstacle's
/// current horizontal extent
pub fn obstacle_boxes(obstacle: &Obstacle, tuning: &Tuning) -> (Aabb, Aabb) {
    let x0 = obstacle.x;
    let x1 = obstacle.x + tuning.obstacle_width;
    let top = Aabb::new(Vec2::new(x0, 0.0), Vec2::new(x1, obstacle.gap_y));
    let bottom = Aabb::new(
        Vec2::new(x0, obstacle.gap_y + tuning.gap_height),
        Vec2::new(x1, tuning.playfield_height),
    );
    (top, bottom)
}

/// Does the inset player box touch either column of `obstacle`?
pub fn hits_obstacle(player: &Player, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let hitbox = player.hitbox(tuning.hitbox_inset);
    let (top, bottom) = obstacle_boxes(obstacle, tuning);
    hitbox.intersects(&top) || hitbox.intersects(&bottom)
}

/// Has the full sprite left the playfield vertically?
pub fn out_of_bounds(player: &Player, tuning: &Tuning) -> Option<CrashCause> {
    let sprite = player.sprite_box();
    if sprite.min.y < 0.0 {
        Some(CrashCause::Ceiling)
    } else if sprite.max.y > tuning.playfield_height {
        Some(CrashCause::Floor)
    } else {
        None
    }
}

/// First crash found this tick, obstacles checked in spawn order
pub fn detect_crash(player: &Player, obstacles: &[Obstacle], tuning: &Tuning) -> Option<CrashCause> {
    obstacles
        .iter()
        .find(|o| hits_obstacle(player, o, tuning))
        .map(|o| CrashCause::Obstacle { id: o.id })
        .or_else(|| out_of_bounds(player, tuning))
}
