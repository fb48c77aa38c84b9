//! Kokky Flight - a night-sky flap-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Simulation (physics, obstacle spawning, collisions, game state)
//! - `session`: Controller that owns the state and the injected score store
//! - `persistence`: Best score and player identity storage
//! - `platform`: Frame pacing and the browser entry point
//! - `tuning`: Data-driven playfield geometry and physics constants

pub mod persistence;
pub mod platform;
pub mod session;
pub mod sim;
pub mod tuning;

pub use persistence::{FileStore, MemoryStore, ScoreStore, StoreError};
pub use session::Session;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame delta the clock will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Logical playfield, independent of the display size
    pub const PLAYFIELD_WIDTH: f32 = 390.0;
    pub const PLAYFIELD_HEIGHT: f32 = 844.0;

    /// Player sprite box
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_START_Y: f32 = PLAYFIELD_HEIGHT / 2.0;
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    /// Collision box shrinks the sprite by this much on every side
    pub const HITBOX_INSET: f32 = 6.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 1800.0;
    /// Vertical velocity set by a flap (pixels/s, negative is up)
    pub const FLAP_IMPULSE: f32 = -480.0;

    /// Obstacle column width
    pub const OBSTACLE_WIDTH: f32 = 70.0;
    /// Height of the passable opening
    pub const GAP_HEIGHT: f32 = 170.0;
    /// Smallest gap top ordinate
    pub const GAP_MARGIN_TOP: f32 = 120.0;
    /// Space always left below the gap
    pub const GAP_MARGIN_BOTTOM: f32 = 220.0;
    /// Horizontal scroll speed (pixels/s)
    pub const SCROLL_SPEED: f32 = 150.0;
    /// Distance between consecutive obstacles
    pub const SPAWN_INTERVAL: f32 = 270.0;
    /// Extra distance past the right edge where obstacles appear
    pub const SPAWN_MARGIN: f32 = 40.0;
}
