//! The rectangle a sketch draws into.

use serde::{Deserialize, Serialize};

use crate::point::{Point, ORIGIN};
use crate::random::RandomSource;

/// A drawing area with its origin at the bottom-left corner, y up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Bottom-left, top-left, top-right, bottom-right.
    pub fn corners(&self) -> [Point; 4] {
        [
            ORIGIN,
            Point::new(0.0, self.height),
            Point::new(self.width, self.height),
            Point::new(self.width, 0.0),
        ]
    }

    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// The smaller of width and height.
    pub fn short_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// A uniformly random point inside the frame. Draws x, then y.
    pub fn random_point(&self, rng: &mut dyn RandomSource) -> Point {
        let x = rng.next_f64() * self.width;
        let y = rng.next_f64() * self.height;
        Point::new(x, y)
    }

    /// Distance from `point` to the farthest corner.
    pub fn longest_distance_from(&self, point: Point) -> f64 {
        self.corners()
            .iter()
            .map(|corner| point.distance_to(*corner))
            .fold(0.0, f64::max)
    }

    pub fn is_outside(&self, point: Point) -> bool {
        point.x < 0.0 || point.x > self.width || point.y < 0.0 || point.y > self.height
    }
}
