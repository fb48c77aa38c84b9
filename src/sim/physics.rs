//! Player vertical motion
//!
//! Semi-implicit Euler: velocity first, then position. No clamping here;
//! leaving the playfield is detected by the tick.

use super::state::Player;

/// Integrate one step of constant downward acceleration
#[inline]
pub fn apply_gravity(player: &mut Player, gravity: f32, dt: f32) {
    player.vy += gravity * dt;
    player.pos.y += player.vy * dt;
}

/// Flap: replace vertical velocity outright, whatever it was
#[inline]
pub fn apply_impulse(player: &mut Player, impulse: f32) {
    player.vy = impulse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_gravity_accumulates() {
        let mut player = Player::new(&Tuning::default());
        let start_y = player.pos.y;
        let mut last_vy = player.vy;
        for _ in 0..10 {
            apply_gravity(&mut player, GRAVITY, SIM_DT);
            assert!((player.vy - last_vy - GRAVITY * SIM_DT).abs() < 1e-3);
            last_vy = player.vy;
        }
        assert!(player.pos.y > start_y);
        assert_eq!(player.pos.x, PLAYER_X);
    }

    #[test]
    fn test_impulse_overrides_velocity() {
        let mut player = Player::new(&Tuning::default());
        player.vy = 900.0;
        apply_impulse(&mut player, FLAP_IMPULSE);
        assert_eq!(player.vy, FLAP_IMPULSE);
        player.vy = -2000.0;
        apply_impulse(&mut player, FLAP_IMPULSE);
        assert_eq!(player.vy, FLAP_IMPULSE);
    }

    #[test]
    fn test_flap_arrests_fall() {
        let mut player = Player::new(&Tuning::default());
        for _ in 0..20 {
            apply_gravity(&mut player, GRAVITY, SIM_DT);
        }
        let y_before = player.pos.y;
        apply_impulse(&mut player, FLAP_IMPULSE);
        apply_gravity(&mut player, GRAVITY, SIM_DT);
        assert!(player.pos.y < y_before);
    }

    #[test]
    fn test_flap_arc_returns_to_height() {
        // Up and back down to the launch height takes roughly half a second
        let mut player = Player::new(&Tuning::default());
        let start_y = player.pos.y;
        apply_impulse(&mut player, FLAP_IMPULSE);
        let mut ticks = 0;
        loop {
            apply_gravity(&mut player, GRAVITY, SIM_DT);
            ticks += 1;
            if player.pos.y >= start_y {
                break;
            }
        }
        assert!((25..=40).contains(&ticks), "arc took {} ticks", ticks);
    }
}
