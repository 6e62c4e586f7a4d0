//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::difficulty::BASE_SPEED;
use super::lanes::{Lanes, MIDDLE_LANE};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start command
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for the restart command
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Current left edge
    pub x: f32,
    /// Lane the ship is heading for
    pub target_lane: usize,
    /// Left edge of `target_lane`, always taken from the lane table
    pub target_x: f32,
    /// Top edge (fixed for the session)
    pub y: f32,
}

impl Ship {
    /// A ship resting in `lane`
    pub fn in_lane(lanes: &Lanes, lane: usize, y: f32) -> Self {
        let x = lanes.x(lane);
        Self {
            x,
            target_lane: lane,
            target_x: x,
            y,
        }
    }

    /// Retarget to `lane`; the current position is left to the tick
    pub fn set_target_lane(&mut self, lanes: &Lanes, lane: usize) {
        self.target_lane = lane;
        self.target_x = lanes.x(lane);
    }

    /// Step toward the target lane, at most `max_step` pixels, never past it
    pub fn move_toward_target(&mut self, max_step: f32) {
        let delta = self.target_x - self.x;
        if delta.abs() <= max_step {
            self.x = self.target_x;
        } else {
            self.x += max_step.copysign(delta);
        }
    }

    /// Whether the ship has arrived at its target lane
    #[inline]
    pub fn settled(&self) -> bool {
        self.x == self.target_x
    }
}

/// A falling asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub rect: Rect,
    /// Already counted toward the score
    pub scored: bool,
}

/// Read-only view of the game for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub speed: u32,
    pub ship: Rect,
    pub obstacles: Vec<Rect>,
}

/// Complete game state for one player
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub lanes: Lanes,
    pub phase: GamePhase,
    pub score: u32,
    /// Current fall speed (asteroids move `speed * scroll_factor` per tick)
    pub speed: u32,
    /// Milliseconds accumulated since the last spawn event
    pub since_spawn_ms: f32,
    /// Playing ticks this session
    pub time_ticks: u64,
    pub ship: Ship,
    /// Live asteroids, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Asteroids created this session (next id)
    pub spawned: u32,
}

impl GameState {
    /// Create a new game on the title screen with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let lanes = Lanes::from_tuning(&tuning);
        let ship = Ship::in_lane(&lanes, MIDDLE_LANE, tuning.ship_y());
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            lanes,
            phase: GamePhase::Start,
            score: 0,
            speed: BASE_SPEED,
            since_spawn_ms: 0.0,
            time_ticks: 0,
            ship,
            obstacles: Vec::new(),
            spawned: 0,
        }
    }

    /// Put a fresh session into play. The RNG stream carries on.
    pub fn reset(&mut self) {
        self.ship = Ship::in_lane(&self.lanes, MIDDLE_LANE, self.tuning.ship_y());
        self.obstacles.clear();
        self.score = 0;
        self.speed = BASE_SPEED;
        self.since_spawn_ms = 0.0;
        self.time_ticks = 0;
        self.spawned = 0;
        self.phase = GamePhase::Playing;
    }

    /// Start from the title screen. No-op in any other phase.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Start {
            self.reset();
            log::info!("Game started (seed {})", self.seed);
        }
    }

    /// Start again after a game over. No-op in any other phase.
    pub fn restart(&mut self) {
        if self.phase == GamePhase::GameOver {
            let final_score = self.score;
            self.reset();
            log::info!("Game restarted (previous score {})", final_score);
        }
    }

    /// Ship bounding box
    pub fn ship_rect(&self) -> Rect {
        Rect::new(
            self.ship.x,
            self.ship.y,
            self.tuning.ship_width,
            self.tuning.ship_height,
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            speed: self.speed,
            ship: self.ship_rect(),
            obstacles: self.obstacles.iter().map(|o| o.rect).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_on_title_screen() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, BASE_SPEED);
        assert_eq!(state.ship.x, state.lanes.x(MIDDLE_LANE));
        assert_eq!(state.ship.y, 618.0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_start_only_from_title() {
        let mut state = GameState::new(1);
        state.restart();
        assert_eq!(state.phase, GamePhase::Start);

        state.start();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = GameState::new(1);
        state.start();
        state.score = 17;
        state.speed = 9;
        state.since_spawn_ms = 800.0;
        let lanes = state.lanes;
        state.ship.set_target_lane(&lanes, 0);
        state.ship.x = 100.0;
        state.obstacles.push(Obstacle {
            id: 0,
            rect: Rect::new(0.0, 0.0, 150.0, 150.0),
            scored: false,
        });
        state.phase = GamePhase::GameOver;

        // start() is not a restart
        state.start();
        assert_eq!(state.phase, GamePhase::GameOver);

        state.restart();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, BASE_SPEED);
        assert_eq!(state.since_spawn_ms, 0.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.ship.x, state.lanes.x(MIDDLE_LANE));
        assert_eq!(state.ship.target_x, state.lanes.x(MIDDLE_LANE));
        assert_eq!(state.ship.target_lane, MIDDLE_LANE);
    }

    #[test]
    fn test_ship_steps_without_overshoot() {
        let lanes = Lanes::new(600.0, 105.0);
        let mut ship = Ship::in_lane(&lanes, 1, 618.0);
        ship.x = 52.5;
        ship.set_target_lane(&lanes, 0);
        ship.move_toward_target(10.0);
        assert_eq!(ship.x, 47.5);
        assert!(ship.settled());

        ship.set_target_lane(&lanes, 2);
        ship.move_toward_target(10.0);
        assert_eq!(ship.x, 57.5);
        assert!(!ship.settled());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(3);
        state.start();
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
        assert!(json.contains("\"score\":0"));
    }
}
