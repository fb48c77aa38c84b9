//! Obstacle generation
//!
//! Gap placement is the only random decision in the game. The generator owns
//! its own seeded stream so a given seed always yields the same course.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Seeded source of new obstacles
#[derive(Debug, Clone)]
pub struct ObstacleGenerator {
    rng: Pcg32,
}

impl ObstacleGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Build the next obstacle at `cursor_x`.
    ///
    /// `gap_y` is uniform over [`Tuning::gap_range`], both ends included, so
    /// the gap never touches the top and always leaves the bottom margin clear.
    /// Advancing the cursor is the caller's job.
    pub fn spawn_next(&mut self, id: u32, cursor_x: f32, tuning: &Tuning) -> Obstacle {
        let (min_y, max_y) = tuning.gap_range();
        let gap_y = self.rng.random_range(min_y..=max_y);
        Obstacle {
            id,
            x: cursor_x,
            gap_y,
            passed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_seed_same_course() {
        let tuning = Tuning::default();
        let mut a = ObstacleGenerator::new(42);
        let mut b = ObstacleGenerator::new(42);
        for i in 0..20 {
            let x = 500.0 + i as f32 * tuning.spawn_interval;
            assert_eq!(
                a.spawn_next(i, x, &tuning).gap_y,
                b.spawn_next(i, x, &tuning).gap_y
            );
        }
    }

    #[test]
    fn test_spawns_at_cursor_unpassed() {
        let tuning = Tuning::default();
        let mut generator = ObstacleGenerator::new(1);
        let obstacle = generator.spawn_next(3, 512.5, &tuning);
        assert_eq!(obstacle.id, 3);
        assert_eq!(obstacle.x, 512.5);
        assert!(!obstacle.passed);
    }

    #[test]
    fn test_degenerate_range_is_fixed() {
        let tuning = Tuning {
            gap_margin_top: 454.0,
            ..Default::default()
        };
        let mut generator = ObstacleGenerator::new(9);
        for i in 0..10 {
            assert_eq!(generator.spawn_next(i, 0.0, &tuning).gap_y, 454.0);
        }
    }

    proptest! {
        #[test]
        fn prop_gap_stays_in_range(seed in any::<u64>()) {
            let tuning = Tuning::default();
            let (min_y, max_y) = tuning.gap_range();
            let mut generator = ObstacleGenerator::new(seed);
            for i in 0..64 {
                let gap_y = generator.spawn_next(i, 0.0, &tuning).gap_y;
                prop_assert!(gap_y >= min_y && gap_y <= max_y, "gap_y {} out of range", gap_y);
                prop_assert!(gap_y + tuning.gap_height + tuning.gap_margin_bottom <= tuning.playfield_height);
            }
        }
    }
}
