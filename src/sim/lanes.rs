//! Lane geometry
//!
//! The arena is split into three equal columns. A lane position is the x of
//! the ship's left edge when the ship is centred in that column.

use serde::{Deserialize, Serialize};

use crate::consts::LANE_COUNT;
use crate::tuning::Tuning;

/// Index of the lane the ship starts in
pub const MIDDLE_LANE: usize = LANE_COUNT / 2;

/// The fixed lane positions for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lanes {
    xs: [f32; LANE_COUNT],
    width: f32,
}

impl Lanes {
    pub fn new(arena_width: f32, ship_width: f32) -> Self {
        let width = arena_width / LANE_COUNT as f32;
        let xs = std::array::from_fn(|i| width * (i as f32 + 0.5) - ship_width * 0.5);
        Self { xs, width }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.arena_width, tuning.ship_width)
    }

    /// Lane position by index
    #[inline]
    pub fn x(&self, lane: usize) -> f32 {
        self.xs[lane]
    }

    /// Horizontal distance between adjacent lanes
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn leftmost(&self) -> f32 {
        self.xs[0]
    }

    #[inline]
    pub fn rightmost(&self) -> f32 {
        self.xs[LANE_COUNT - 1]
    }

    /// Lane whose position is within half a lane width of `x`
    pub fn containing(&self, x: f32) -> Option<usize> {
        self.xs
            .iter()
            .position(|&lane| (x - lane).abs() < self.width * 0.5)
    }
}
