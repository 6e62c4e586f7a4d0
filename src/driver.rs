//! Frame loop glue
//!
//! Platforms hand the driver absolute frame timestamps and raw control
//! presses; the driver turns them into `tick` calls.

use crate::consts::MAX_FRAME_MS;
use crate::sim::{Control, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// UI throttle for lane changes
#[derive(Debug, Clone)]
pub struct MoveGate {
    cooldown_ms: f64,
    last_move: Option<f64>,
}

impl MoveGate {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            last_move: None,
        }
    }

    /// Accept a move at `now_ms` unless the previous one is too recent
    pub fn try_accept(&mut self, now_ms: f64) -> bool {
        match self.last_move {
            Some(last) if now_ms - last < self.cooldown_ms => false,
            _ => {
                self.last_move = Some(now_ms);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_move = None;
    }
}

/// Owns frame timing and pending input for one game
#[derive(Debug, Clone)]
pub struct FrameDriver {
    last_time: Option<f64>,
    max_frame_ms: f32,
    pending: TickInput,
    gate: MoveGate,
}

impl FrameDriver {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            last_time: None,
            max_frame_ms: MAX_FRAME_MS,
            pending: TickInput::default(),
            gate: MoveGate::new(tuning.move_cooldown_ms),
        }
    }

    /// Queue a control press for the next frame.
    ///
    /// While playing, presses are lane changes and pass through the move
    /// cooldown; start/restart presses are never throttled. Returns whether
    /// the press was queued.
    pub fn press(&mut self, control: Control, phase: GamePhase, now_ms: f64) -> bool {
        if phase == GamePhase::Playing {
            if !self.gate.try_accept(now_ms) {
                return false;
            }
        } else if control == Control::Secondary {
            return false;
        } else {
            self.gate.reset();
        }

        match control {
            Control::Primary => self.pending.primary = true,
            Control::Secondary => self.pending.secondary = true,
        }
        true
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.pending.autopilot = enabled;
    }

    pub fn autopilot(&self) -> bool {
        self.pending.autopilot
    }

    /// Elapsed time since the previous frame, clamped to `0..=max_frame_ms`.
    /// The first frame reports zero.
    pub fn elapsed(&mut self, now_ms: f64) -> f32 {
        let elapsed = match self.last_time {
            Some(last) => (now_ms - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now_ms);
        if elapsed.is_finite() {
            elapsed.clamp(0.0, self.max_frame_ms)
        } else {
            0.0
        }
    }

    /// Run one frame: apply queued presses and advance the simulation
    pub fn frame(&mut self, state: &mut GameState, now_ms: f64) {
        let elapsed = self.elapsed(now_ms);
        tick(state, &self.pending, elapsed);

        // One-shot inputs are consumed; autopilot persists
        self.pending = TickInput {
            autopilot: self.pending.autopilot,
            ..Default::default()
        };
    }
}
