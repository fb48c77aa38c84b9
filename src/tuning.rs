//! Playfield geometry and physics tuning
//!
//! Fixed for the lifetime of a session. Loaded from JSON when a host wants to
//! experiment with difficulty, otherwise the compiled-in defaults are used.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning set is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("gap range is empty: top margin {min} exceeds {max}")]
    EmptyGapRange { min: f32, max: f32 },
    #[error("spawn interval {interval} must exceed obstacle width {width}")]
    SpawnIntervalTooShort { interval: f32, width: f32 },
    #[error("hitbox inset {inset} leaves nothing of a {width}x{height} player")]
    InsetTooLarge { inset: f32, width: f32, height: f32 },
    #[error("flap impulse must point up (got {0})")]
    ImpulseNotUpward(f32),
}

/// All geometry and physics constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Player ===
    pub player_x: f32,
    pub player_start_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Forgiveness margin on each side of the obstacle hitbox
    pub hitbox_inset: f32,
    /// Pixels/s²
    pub gravity: f32,
    /// Pixels/s, negative is up
    pub flap_impulse: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub gap_margin_top: f32,
    pub gap_margin_bottom: f32,
    /// Pixels/s
    pub scroll_speed: f32,
    pub spawn_interval: f32,
    pub spawn_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            player_x: PLAYER_X,
            player_start_y: PLAYER_START_Y,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            hitbox_inset: HITBOX_INSET,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,

            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,
            scroll_speed: SCROLL_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            spawn_margin: SPAWN_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Inclusive range the top of a gap is drawn from
    pub fn gap_range(&self) -> (f32, f32) {
        let max = self.playfield_height - self.gap_height - self.gap_margin_bottom;
        (self.gap_margin_top, max)
    }

    /// Screen x where the first obstacle of a run appears, just off the right edge
    pub fn spawn_line(&self) -> f32 {
        self.playfield_width + self.obstacle_width + self.spawn_margin
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("gravity", self.gravity),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("scroll_speed", self.scroll_speed),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        let (min, max) = self.gap_range();
        if min > max {
            return Err(TuningError::EmptyGapRange { min, max });
        }

        if self.spawn_interval <= self.obstacle_width {
            return Err(TuningError::SpawnIntervalTooShort {
                interval: self.spawn_interval,
                width: self.obstacle_width,
            });
        }

        if self.hitbox_inset < 0.0
            || self.hitbox_inset * 2.0 >= self.player_width
            || self.hitbox_inset * 2.0 >= self.player_height
        {
            return Err(TuningError::InsetTooLarge {
                inset: self.hitbox_inset,
                width: self.player_width,
                height: self.player_height,
            });
        }

        if self.flap_impulse >= 0.0 {
            return Err(TuningError::ImpulseNotUpward(self.flap_impulse));
        }

        Ok(())
    }
}
