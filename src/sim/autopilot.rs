//! Lane sensors and the idle/demo pilot

use super::input::Steer;
use super::state::GameState;
use crate::consts::LANE_COUNT;

/// Clearance below which the pilot leaves its lane
pub const DANGER_CLEARANCE: f32 = 0.45;

/// Free distance above the ship in each lane.
///
/// Measured from the ship's vertical centre to the bottom of the nearest
/// asteroid still above the ship, divided by the ship's y. Empty lanes read
/// 1.0 and blocked lanes bottom out at 0.0.
pub fn lane_clearances(state: &GameState) -> [f32; LANE_COUNT] {
    let ship_center_y = state.ship.y + state.tuning.ship_height * 0.5;
    let mut clearances = [1.0_f32; LANE_COUNT];

    for obstacle in &state.obstacles {
        if obstacle.rect.pos.y >= state.ship.y {
            continue;
        }
        if let Some(lane) = state.lanes.containing(obstacle.rect.pos.x) {
            let gap = (ship_center_y - obstacle.rect.max().y) / state.ship.y;
            clearances[lane] = clearances[lane].min(gap.max(0.0));
        }
    }

    clearances
}

/// Pick a lane change for the demo pilot, if one is needed.
///
/// Only decides once the ship has settled, then heads one lane toward the
/// clearest lane (the nearer one on ties).
pub fn steer(state: &GameState) -> Option<Steer> {
    if !state.ship.settled() {
        return None;
    }

    let clearances = lane_clearances(state);
    let current = state.target_lane();
    if clearances[current] >= DANGER_CLEARANCE {
        return None;
    }

    let best = (0..LANE_COUNT).max_by(|&a, &b| {
        clearances[a]
            .total_cmp(&clearances[b])
            .then_with(|| current.abs_diff(b).cmp(&current.abs_diff(a)))
    })?;

    match best.cmp(&current) {
        std::cmp::Ordering::Less => Some(Steer::Left),
        std::cmp::Ordering::Greater => Some(Steer::Right),
        std::cmp::Ordering::Equal => None,
    }
}
