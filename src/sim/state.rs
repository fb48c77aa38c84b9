//! Game state and core simulation types
//!
//! Everything that changes during play lives in [`GameState`]; the tuning it
//! carries is fixed once the state is created.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::spawn::ObstacleGenerator;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap, nothing moves
    Idle,
    /// Active gameplay
    Running,
    /// Run ended, everything frozen until the next activation
    GameOver,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Hitbox overlapped an obstacle column
    Obstacle { id: u32 },
    /// Left the top of the playfield
    Ceiling,
    /// Fell below the playfield
    Floor,
}

/// Things that happened during an activation or tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Idle -> Running
    Started,
    /// GameOver -> Running, after a full reset
    Restarted,
    /// Flap impulse applied
    Flapped,
    ObstacleSpawned { id: u32, x: f32, gap_y: f32 },
    Scored { score: u64 },
    /// Score went past the stored best; the host should persist it
    NewBest { best: u64 },
    Crashed { cause: CrashCause },
}

/// The player's sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner; x never changes during a session
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels/s, positive is down)
    pub vy: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, tuning.player_start_y),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            vy: 0.0,
        }
    }

    /// Full sprite box, used for the playfield bounds check
    pub fn sprite_box(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Inset box used against obstacles
    pub fn hitbox(&self, inset: f32) -> Aabb {
        self.sprite_box().inset(inset)
    }
}

/// A pair of columns with a gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge in screen space
    pub x: f32,
    /// Top of the gap, fixed at creation
    pub gap_y: f32,
    /// Set once the trailing edge has cleared the player
    pub passed: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the obstacle generator started from
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    /// Ordered left to right (creation order)
    pub obstacles: Vec<Obstacle>,
    /// Screen x of the next obstacle; scrolls with the stream
    pub spawn_cursor: f32,
    pub score: u64,
    /// Highest score seen, seeded from storage
    pub best_score: u64,
    /// Ticks simulated while Running, across all runs
    pub time_ticks: u64,
    pub generator: ObstacleGenerator,
    /// Pending events since the host last drained them
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create an idle game. `best_score` is whatever the store remembered.
    pub fn new(seed: u64, tuning: Tuning, best_score: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            spawn_cursor: tuning.spawn_line(),
            score: 0,
            best_score,
            time_ticks: 0,
            generator: ObstacleGenerator::new(seed),
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Put the player, obstacles, score and spawn cursor back to their start
    /// values. Phase, best score and the RNG stream are left alone.
    pub fn reset_run(&mut self) {
        self.player = Player::new(&self.tuning);
        self.obstacles.clear();
        self.score = 0;
        self.spawn_cursor = self.tuning.spawn_line();
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(7, Tuning::default(), 12);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 12);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.pos, Vec2::new(80.0, 422.0));
        assert_eq!(state.player.vy, 0.0);
    }

    #[test]
    fn test_reset_run_keeps_best() {
        let mut state = GameState::new(7, Tuning::default(), 3);
        state.score = 9;
        state.best_score = 9;
        state.player.pos.y = 10.0;
        state.player.vy = 200.0;
        state.spawn_cursor = 12.0;
        state.obstacles.push(Obstacle {
            id: 1,
            x: 100.0,
            gap_y: 200.0,
            passed: true,
        });

        state.reset_run();

        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 9);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player, Player::new(&state.tuning));
        assert_eq!(state.spawn_cursor, state.tuning.spawn_line());
    }
}
