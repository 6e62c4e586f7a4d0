//! Astro Lanes - A three-lane asteroid dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, spawning, difficulty, collisions, game state)
//! - `tuning`: Data-driven game balance and arena geometry
//! - `driver`: Frame loop glue between a platform clock and the simulation

pub mod driver;
pub mod sim;
pub mod tuning;

pub use driver::{FrameDriver, MoveGate};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Number of lanes in the arena
    pub const LANE_COUNT: usize = 3;

    /// Arena dimensions (logical pixels)
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 800.0;

    /// Ship sprite size
    pub const SHIP_WIDTH: f32 = 105.0;
    pub const SHIP_HEIGHT: f32 = 162.0;
    /// Gap between the ship's bottom edge and the arena floor
    pub const SHIP_BOTTOM_MARGIN: f32 = 20.0;
    /// Maximum horizontal ship travel per tick while changing lanes
    pub const SHIP_SMOOTHING_STEP: f32 = 10.0;

    /// Asteroid sprite size
    pub const OBSTACLE_WIDTH: f32 = 150.0;
    pub const OBSTACLE_HEIGHT: f32 = 150.0;

    /// Minimum time between spawn events (ms)
    pub const SPAWN_INTERVAL_MS: f32 = 1500.0;
    /// Chance a spawn event yields a single asteroid (otherwise two)
    pub const SINGLE_SPAWN_CHANCE: f64 = 0.7;
    /// Horizontal jitter applied to spawned asteroids (± pixels)
    pub const LANE_JITTER: i32 = 20;
    /// Vertical spacing between asteroids of one spawn, in ship heights
    pub const SPAWN_STAGGER: f32 = 2.5;
    /// Fraction of the current speed applied as downward travel per tick
    pub const SCROLL_FACTOR: f32 = 0.5;

    /// UI cooldown between accepted move commands (ms)
    pub const MOVE_COOLDOWN_MS: f64 = 200.0;
    /// Longest frame the driver will forward to the simulation (ms)
    pub const MAX_FRAME_MS: f32 = 100.0;
}
