//! Game balance and arena geometry
//!
//! Loaded from JSON; any field left out falls back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading a [`Tuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable values for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,
    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_bottom_margin: f32,
    /// Max horizontal ship travel per tick (pixels)
    pub smoothing_step: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Minimum time between spawn events (ms)
    pub spawn_interval_ms: f32,
    /// Probability that a spawn event yields one asteroid instead of two
    pub single_spawn_chance: f64,
    /// Horizontal jitter (± whole pixels)
    pub lane_jitter: i32,
    /// Vertical spacing between asteroids of one spawn, in ship heights
    pub spawn_stagger: f32,
    pub scroll_factor: f32,
    /// UI throttle between move commands (ms)
    pub move_cooldown_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_bottom_margin: SHIP_BOTTOM_MARGIN,
            smoothing_step: SHIP_SMOOTHING_STEP,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            single_spawn_chance: SINGLE_SPAWN_CHANCE,
            lane_jitter: LANE_JITTER,
            spawn_stagger: SPAWN_STAGGER,
            scroll_factor: SCROLL_FACTOR,
            move_cooldown_ms: MOVE_COOLDOWN_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON tuning file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject geometry the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("smoothing_step", self.smoothing_step),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        if self.ship_width > self.lane_width() {
            return Err(TuningError::Invalid {
                field: "ship_width",
                reason: "ship must fit inside one lane",
            });
        }
        if self.ship_height + self.ship_bottom_margin > self.arena_height {
            return Err(TuningError::Invalid {
                field: "ship_height",
                reason: "ship must fit inside the arena",
            });
        }
        if !(0.0..=1.0).contains(&self.single_spawn_chance) {
            return Err(TuningError::Invalid {
                field: "single_spawn_chance",
                reason: "must be within 0.0..=1.0",
            });
        }
        if self.lane_jitter < 0 {
            return Err(TuningError::Invalid {
                field: "lane_jitter",
                reason: "must not be negative",
            });
        }
        if !(self.spawn_interval_ms.is_finite() && self.spawn_interval_ms >= 0.0) {
            return Err(TuningError::Invalid {
                field: "spawn_interval_ms",
                reason: "must be zero or more",
            });
        }
        if !(self.scroll_factor.is_finite() && self.scroll_factor > 0.0) {
            return Err(TuningError::Invalid {
                field: "scroll_factor",
                reason: "must be a positive number",
            });
        }
        let non_negative = [
            ("spawn_stagger", self.spawn_stagger),
            ("ship_bottom_margin", self.ship_bottom_margin),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be zero or more",
                });
            }
        }
        if !(self.move_cooldown_ms.is_finite() && self.move_cooldown_ms >= 0.0) {
            return Err(TuningError::Invalid {
                field: "move_cooldown_ms",
                reason: "must be zero or more",
            });
        }

        Ok(())
    }

    /// Width of a single lane
    #[inline]
    pub fn lane_width(&self) -> f32 {
        self.arena_width / LANE_COUNT as f32
    }

    /// Fixed y of the ship's top edge
    #[inline]
    pub fn ship_y(&self) -> f32 {
        self.arena_height - self.ship_height - self.ship_bottom_margin
    }
}
