//! Per-frame simulation tick
//!
//! Movement is per tick (one tick per rendered frame); elapsed time only
//! gates spawning.

use super::autopilot;
use super::collision::intersects;
use super::difficulty::compute_speed;
use super::input::Control;
use super::spawner::spawn;
use super::state::{GamePhase, GameState};

/// One-shot commands collected since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Primary control (left / start / restart)
    pub primary: bool,
    /// Secondary control (right)
    pub secondary: bool,
    /// Idle/demo mode - the autopilot steers
    pub autopilot: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: f32) {
    if input.primary {
        state.press(Control::Primary);
    }
    if input.secondary {
        state.press(Control::Secondary);
    }

    // Start and GameOver hold still until a control moves them on
    if state.phase != GamePhase::Playing {
        return;
    }

    if input.autopilot {
        if let Some(direction) = autopilot::steer(state) {
            state.steer(direction);
        }
    }

    // Bad clock readings count as a zero-length frame
    let elapsed_ms = if elapsed_ms.is_finite() {
        elapsed_ms.max(0.0)
    } else {
        0.0
    };

    state.time_ticks += 1;

    state.ship.move_toward_target(state.tuning.smoothing_step);

    state.speed = compute_speed(state.score, state.speed);

    state.since_spawn_ms += elapsed_ms;
    if state.since_spawn_ms > state.tuning.spawn_interval_ms {
        let wave = spawn(&state.lanes, state.spawned, &state.tuning, &mut state.rng);
        log::debug!(
            "Spawned {} asteroid(s) at tick {} (speed {})",
            wave.len(),
            state.time_ticks,
            state.speed
        );
        state.spawned += wave.len() as u32;
        state.obstacles.extend(wave);
        state.since_spawn_ms = 0.0;
    }

    let fall = state.speed as f32 * state.tuning.scroll_factor;
    let score_line = state.ship.y + state.tuning.ship_height;
    for obstacle in &mut state.obstacles {
        obstacle.rect.pos.y += fall;
        if !obstacle.scored && obstacle.rect.pos.y > score_line {
            obstacle.scored = true;
            state.score += 1;
        }
    }

    let despawn_line = state.tuning.arena_height + state.tuning.obstacle_height;
    state.obstacles.retain(|o| o.rect.pos.y <= despawn_line);

    let ship = state.ship_rect();
    if let Some(hit) = state.obstacles.iter().find(|o| intersects(&ship, &o.rect)) {
        log::info!(
            "Ship hit asteroid {} - game over with score {}",
            hit.id,
            state.score
        );
        state.phase = GamePhase::GameOver;
    }
}

impl GameState {
    /// Advance one frame with no new commands
    pub fn tick(&mut self, elapsed_ms: f32) {
        tick(self, &TickInput::default(), elapsed_ms);
    }
}
