//! Read-only view of the game for renderers
//!
//! Everything a presentation layer needs to draw one frame, already resolved
//! into boxes so the renderer never repeats collision geometry.

use serde::Serialize;

use super::aabb::Aabb;
use super::collision::obstacle_boxes;
use super::state::{GamePhase, GameState};

/// One obstacle as drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub passed: bool,
    /// Column above the gap
    pub top: Aabb,
    /// Column below the gap
    pub bottom: Aabb,
}

/// Frame snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub best_score: u64,
    /// Sprite box
    pub player: Aabb,
    /// Box used against obstacles
    pub player_hitbox: Aabb,
    /// Left to right
    pub obstacles: Vec<ObstacleView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let tuning = &state.tuning;
        let obstacles = state
            .obstacles
            .iter()
            .map(|o| {
                let (top, bottom) = obstacle_boxes(o, tuning);
                ObstacleView {
                    id: o.id,
                    passed: o.passed,
                    top,
                    bottom,
                }
            })
            .collect();

        Self {
            phase: state.phase,
            score: state.score,
            best_score: state.best_score,
            player: state.player.sprite_box(),
            player_hitbox: state.player.hitbox(tuning.hitbox_inset),
            obstacles,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Score line drawn at the top of the screen
    pub fn hud_text(&self) -> String {
        format!("Score: {}  Best: {}", self.score, self.best_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_resolves_boxes() {
        let mut state = GameState::new(1, Tuning::default(), 4);
        state.obstacles.push(Obstacle {
            id: 2,
            x: 300.0,
            gap_y: 250.0,
            passed: false,
        });

        let snapshot = Snapshot::capture(&state);
        assert_eq!(snapshot.phase, GamePhase::Idle);
        assert_eq!(snapshot.obstacles.len(), 1);
        assert_eq!(snapshot.obstacles[0].top.max.y, 250.0);
        assert_eq!(snapshot.obstacles[0].bottom.min.y, 420.0);
        assert_eq!(snapshot.player_hitbox.width(), 36.0);
        assert_eq!(snapshot.hud_text(), "Score: 0  Best: 4");
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(1, Tuning::default(), 0);
        let json = serde_json::to_string(&Snapshot::capture(&state)).unwrap();
        assert!(json.contains("\"phase\":\"Idle\""));
    }
}
