//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Time enters only as the elapsed frame length passed to `tick`
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod input;
pub mod lanes;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::lane_clearances;
pub use collision::{Rect, intersects};
pub use difficulty::{BASE_SPEED, compute_speed, target_speed};
pub use input::{Control, ControlLayout, Steer};
pub use lanes::{Lanes, MIDDLE_LANE};
pub use spawner::spawn;
pub use state::{GamePhase, GameState, Obstacle, Ship, Snapshot};
pub use tick::{TickInput, tick};
