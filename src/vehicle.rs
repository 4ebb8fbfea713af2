use crate::constants::*;
use crate::geometry::Rgb;

/// A car driving left to right along a fixed lane.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub x: f32,
    pub lane_y: f32,
    pub color: Rgb,
}

impl Car {
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);

    pub fn new(x: f32, lane_y: f32, color: Rgb) -> Self {
        Car { x, lane_y, color }
    }

    pub fn advance(&mut self, speed: f32) {
        self.x += speed;
    }

    pub fn is_in_clamp_band(&self, stop_line: f32) -> bool {
        self.x >= stop_line - CLAMP_BAND && self.x <= stop_line + CLAMP_BAND
    }

    /// Pulls the car back to the near edge of the band when it is inside it.
    /// Returns whether the car was held.
    pub fn hold_at(&mut self, stop_line: f32) -> bool {
        if self.is_in_clamp_band(stop_line) {
            self.x = stop_line - CLAMP_BAND;
            true
        } else {
            false
        }
    }

    /// Moves the car back to the left edge once it has left the world.
    /// Returns whether it wrapped.
    pub fn wrap_around(&mut self) -> bool {
        if self.x > WRAP_THRESHOLD_X {
            self.x = RESPAWN_X;
            true
        } else {
            false
        }
    }
}

impl Default for Car {
    fn default() -> Self {
        Car::new(CAR_START_X, CAR_LANE_Y, Car::BLUE)
    }
}
