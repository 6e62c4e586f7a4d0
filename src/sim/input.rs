//! Lane controls
//!
//! Moves change the ship's *target* lane only; the tick smooths the ship
//! toward it. The two on-screen controls double as start/restart buttons
//! outside of play.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use crate::consts::LANE_COUNT;

/// Lane change direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Steer {
    Left,
    Right,
}

/// The two player controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Left while playing, start/restart otherwise
    Primary,
    /// Right while playing, inactive otherwise
    Secondary,
}

/// How the controls should be presented for a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlLayout {
    pub primary_label: &'static str,
    pub secondary_label: &'static str,
    pub secondary_visible: bool,
}

impl ControlLayout {
    pub fn for_phase(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Start => Self {
                primary_label: "START",
                secondary_label: "RIGHT",
                secondary_visible: false,
            },
            GamePhase::GameOver => Self {
                primary_label: "RESTART",
                secondary_label: "RIGHT",
                secondary_visible: false,
            },
            GamePhase::Playing => Self {
                primary_label: "LEFT",
                secondary_label: "RIGHT",
                secondary_visible: true,
            },
        }
    }
}

impl GameState {
    /// Shift the target one lane left. Ignored at the leftmost lane or when
    /// not playing.
    pub fn move_left(&mut self) {
        self.steer(Steer::Left);
    }

    /// Shift the target one lane right. Ignored at the rightmost lane or when
    /// not playing.
    pub fn move_right(&mut self) {
        self.steer(Steer::Right);
    }

    pub fn steer(&mut self, direction: Steer) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let lane = self.ship.target_lane;
        let next = match direction {
            Steer::Left => lane.saturating_sub(1),
            Steer::Right => (lane + 1).min(LANE_COUNT - 1),
        };
        let lanes = self.lanes;
        self.ship.set_target_lane(&lanes, next);
    }

    /// Apply a control press according to the current phase
    pub fn press(&mut self, control: Control) {
        match (control, self.phase) {
            (Control::Primary, GamePhase::Playing) => self.move_left(),
            (Control::Primary, GamePhase::Start) => self.start(),
            (Control::Primary, GamePhase::GameOver) => self.restart(),
            (Control::Secondary, GamePhase::Playing) => self.move_right(),
            (Control::Secondary, _) => {}
        }
    }

    /// Lane index the ship is heading for
    pub fn target_lane(&self) -> usize {
        self.ship.target_lane
    }

    pub fn control_layout(&self) -> ControlLayout {
        ControlLayout::for_phase(self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> GameState {
        let mut state = GameState::new(11);
        state.start();
        state
    }

    #[test]
    fn test_moves_change_target_only() {
        let mut state = playing();
        let x = state.ship.x;
        state.move_left();
        assert_eq!(state.ship.target_x, state.lanes.x(0));
        assert_eq!(state.ship.x, x);
        assert_eq!(state.target_lane(), 0);
    }

    #[test]
    fn test_moves_clamped_at_edges() {
        let mut state = playing();
        state.move_left();
        state.move_left();
        state.move_left();
        assert_eq!(state.ship.target_x, state.lanes.leftmost());

        for _ in 0..5 {
            state.move_right();
        }
        assert_eq!(state.ship.target_x, state.lanes.rightmost());
        assert_eq!(state.target_lane(), 2);
    }

    #[test]
    fn test_edges_hold_across_arena_widths() {
        use crate::tuning::Tuning;

        let mut checked = 0;
        for width in (320..=2000).step_by(2) {
            let tuning = Tuning {
                arena_width: width as f32,
                ..Tuning::default()
            };
            if tuning.validate().is_err() {
                continue;
            }
            let mut state = GameState::with_tuning(5, tuning);
            state.start();

            for _ in 0..6 {
                state.move_right();
            }
            assert_eq!(state.target_lane(), LANE_COUNT - 1, "width {width}");
            assert_eq!(state.ship.target_x, state.lanes.rightmost(), "width {width}");

            for _ in 0..6 {
                state.move_left();
            }
            assert_eq!(state.target_lane(), 0, "width {width}");
            assert_eq!(state.ship.target_x, state.lanes.leftmost(), "width {width}");
            checked += 1;
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_moves_ignored_outside_play() {
        let mut state = GameState::new(11);
        state.move_left();
        state.move_right();
        assert_eq!(state.ship.target_x, state.lanes.x(1));

        state.start();
        state.phase = GamePhase::GameOver;
        state.move_right();
        assert_eq!(state.ship.target_x, state.lanes.x(1));
    }

    #[test]
    fn test_primary_starts_and_restarts() {
        let mut state = GameState::new(11);
        state.press(Control::Secondary);
        assert_eq!(state.phase, GamePhase::Start);

        state.press(Control::Primary);
        assert_eq!(state.phase, GamePhase::Playing);
        // Now it steers
        state.press(Control::Primary);
        assert_eq!(state.target_lane(), 0);
        state.press(Control::Secondary);
        state.press(Control::Secondary);
        assert_eq!(state.target_lane(), 2);

        state.phase = GamePhase::GameOver;
        state.press(Control::Secondary);
        assert_eq!(state.phase, GamePhase::GameOver);
        state.press(Control::Primary);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.target_lane(), 1);
    }

    #[test]
    fn test_control_layout() {
        let start = ControlLayout::for_phase(GamePhase::Start);
        assert_eq!(start.primary_label, "START");
        assert!(!start.secondary_visible);

        let over = ControlLayout::for_phase(GamePhase::GameOver);
        assert_eq!(over.primary_label, "RESTART");
        assert!(!over.secondary_visible);

        let playing = ControlLayout::for_phase(GamePhase::Playing);
        assert_eq!(playing.primary_label, "LEFT");
        assert_eq!(playing.secondary_label, "RIGHT");
        assert!(playing.secondary_visible);
    }
}
