//! Score-driven fall speed

/// Speed at the start of every session
pub const BASE_SPEED: u32 = 3;

/// Score at which the slow ramp takes over
const EARLY_RAMP_END: u32 = 15;
const EARLY_STEP: u32 = 3;
const EARLY_CAP: u32 = 10;
const LATE_BASE: u32 = 4;
const LATE_STEP: u32 = 6;
const LATE_CAP: u32 = 12;

/// Piecewise speed for a cumulative score.
///
/// Up to 15 points the speed gains 1 every 3 points from 3 (capped at 10);
/// after that it is `4 + score / 6` (capped at 12).
pub fn target_speed(score: u32) -> u32 {
    if score <= EARLY_RAMP_END {
        (BASE_SPEED + score / EARLY_STEP).min(EARLY_CAP)
    } else {
        (LATE_BASE + score / LATE_STEP).min(LATE_CAP)
    }
}

/// Speed to use this tick given last tick's speed.
///
/// The late ramp restarts below the early ramp's last value (15 → 8 but
/// 18 → 7), so the applied speed holds until the late ramp catches up.
pub fn compute_speed(score: u32, previous: u32) -> u32 {
    previous.max(target_speed(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(target_speed(0), 3);
        assert_eq!(target_speed(2), 3);
        assert_eq!(target_speed(3), 4);
        assert_eq!(target_speed(14), 7);
        assert_eq!(target_speed(15), 8);
        assert_eq!(target_speed(16), 6);
        assert_eq!(target_speed(21), 7);
        assert_eq!(target_speed(48), 12);
        assert_eq!(target_speed(600), 12);
    }

    #[test]
    fn test_session_ramp_never_drops() {
        let mut speed = BASE_SPEED;
        let mut trace = Vec::new();
        for score in 0..=60 {
            let next = compute_speed(score, speed);
            assert!(next >= speed, "speed dropped at score {score}");
            speed = next;
            trace.push(speed);
        }
        assert_eq!(trace[15], 8);
        // Held through the late ramp's restart
        assert_eq!(trace[18], 8);
        assert_eq!(trace[21], 8);
        assert_eq!(trace[30], 9);
        assert_eq!(trace[48], 12);
        assert_eq!(trace[60], 12);
    }

    #[test]
    fn test_score_jumping_over_multiple() {
        // Two asteroids scored in one tick: 2 -> 4 still crosses 3
        assert_eq!(compute_speed(4, BASE_SPEED), 4);
    }
}
