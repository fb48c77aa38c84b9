//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only advances through `tick`
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, storage or platform dependencies

pub mod aabb;
pub mod collision;
pub mod physics;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{detect_crash, hits_obstacle, obstacle_boxes, out_of_bounds};
pub use physics::{apply_gravity, apply_impulse};
pub use snapshot::{ObstacleView, Snapshot};
pub use spawn::ObstacleGenerator;
pub use state::{CrashCause, GameEvent, GamePhase, GameState, Obstacle, Player};
pub use tick::{TickInput, activate, tick};
