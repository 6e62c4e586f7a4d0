//! Asteroid spawning
//!
//! Each spawn event drops one asteroid (70%) or two (30%) into distinct lanes.

use rand::Rng;
use rand::seq::SliceRandom;

use super::collision::Rect;
use super::lanes::Lanes;
use super::state::Obstacle;
use crate::consts::LANE_COUNT;
use crate::tuning::Tuning;

/// Create the asteroids for one spawn event.
///
/// `existing` is the number of asteroids created so far this session and
/// seeds the new ids. Asteroids start above the visible area; a second one is
/// stacked further up so the two never overlap vertically.
pub fn spawn<R: Rng + ?Sized>(
    lanes: &Lanes,
    existing: u32,
    tuning: &Tuning,
    rng: &mut R,
) -> Vec<Obstacle> {
    let count = if rng.random_bool(tuning.single_spawn_chance) {
        1
    } else {
        2
    };

    let mut lane_order: [usize; LANE_COUNT] = std::array::from_fn(|i| i);
    lane_order.shuffle(rng);

    lane_order
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, &lane)| {
            let jitter = rng.random_range(-tuning.lane_jitter..=tuning.lane_jitter);
            let x = lanes.x(lane) + jitter as f32;
            let y = -tuning.obstacle_height - i as f32 * tuning.ship_height * tuning.spawn_stagger;
            Obstacle {
                id: existing + i as u32,
                rect: Rect::new(x, y, tuning.obstacle_width, tuning.obstacle_height),
                scored: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (Lanes, Tuning) {
        let tuning = Tuning::default();
        (Lanes::from_tuning(&tuning), tuning)
    }

    #[test]
    fn test_single_and_double_ratio() {
        let (lanes, tuning) = setup();
        let mut rng = Pcg32::seed_from_u64(42);
        let calls = 20_000;
        let singles = (0..calls)
            .filter(|_| spawn(&lanes, 0, &tuning, &mut rng).len() == 1)
            .count();
        let ratio = singles as f64 / calls as f64;
        assert!((0.68..0.72).contains(&ratio), "single ratio {ratio}");
    }

    #[test]
    fn test_doubles_use_distinct_lanes() {
        let (lanes, tuning) = setup();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut doubles = 0;
        for _ in 0..2_000 {
            let wave = spawn(&lanes, 0, &tuning, &mut rng);
            assert!(matches!(wave.len(), 1 | 2));
            if wave.len() == 2 {
                doubles += 1;
                let a = lanes.containing(wave[0].rect.pos.x);
                let b = lanes.containing(wave[1].rect.pos.x);
                assert!(a.is_some() && b.is_some());
                assert_ne!(a, b);
            }
        }
        assert!(doubles > 0);
    }

    #[test]
    fn test_every_lane_gets_used() {
        let (lanes, tuning) = setup();
        let mut rng = Pcg32::seed_from_u64(99);
        let mut hits = [0u32; LANE_COUNT];
        for _ in 0..3_000 {
            for obstacle in spawn(&lanes, 0, &tuning, &mut rng) {
                if let Some(lane) = lanes.containing(obstacle.rect.pos.x) {
                    hits[lane] += 1;
                }
            }
        }
        // Roughly uniform: each lane near a third of ~3900 asteroids
        for count in hits {
            assert!((1_100..1_500).contains(&count), "lane hits {hits:?}");
        }
    }

    #[test]
    fn test_placement() {
        let (lanes, tuning) = setup();
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..500 {
            let wave = spawn(&lanes, 10, &tuning, &mut rng);
            for (i, obstacle) in wave.iter().enumerate() {
                let lane = lanes.containing(obstacle.rect.pos.x).unwrap();
                let jitter = obstacle.rect.pos.x - lanes.x(lane);
                assert!((-20.0..=20.0).contains(&jitter));
                assert_eq!(jitter, jitter.round());
                let expected_y = -150.0 - i as f32 * 162.0 * 2.5;
                assert_eq!(obstacle.rect.pos.y, expected_y);
                assert_eq!(obstacle.rect.size.x, 150.0);
                assert_eq!(obstacle.id, 10 + i as u32);
                assert!(!obstacle.scored);
            }
        }
    }

    #[test]
    fn test_seeded_spawns_repeat() {
        let (lanes, tuning) = setup();
        let mut a = Pcg32::seed_from_u64(1234);
        let mut b = Pcg32::seed_from_u64(1234);
        for _ in 0..50 {
            let wa: Vec<_> = spawn(&lanes, 0, &tuning, &mut a)
                .into_iter()
                .map(|o| o.rect)
                .collect();
            let wb: Vec<_> = spawn(&lanes, 0, &tuning, &mut b)
                .into_iter()
                .map(|o| o.rect)
                .collect();
            assert_eq!(wa, wb);
        }
    }
}
