use crate::constants::CIRCLE_SEGMENTS;
use crate::geometry::{draw_circle, draw_rectangle, Primitive, Rgb};

const TRUNK_COLOR: Rgb = Rgb::new(0.55, 0.27, 0.07);
const CANOPY_COLOR: Rgb = Rgb::new(0.0, 0.5, 0.0);
const TRUNK_HALF_WIDTH: f32 = 0.05;
const TRUNK_HEIGHT: f32 = 0.3;
const CANOPY_RADIUS: f32 = 0.15;
const CANOPY_LIFT: f32 = 0.1;

/// Roadside decoration, `(x, y)` is the top of the trunk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tree {
    pub x: f32,
    pub y: f32,
}

impl Tree {
    pub const fn new(x: f32, y: f32) -> Self {
        Tree { x, y }
    }

    pub fn primitives(&self) -> [Primitive; 2] {
        [
            draw_rectangle(
                self.x - TRUNK_HALF_WIDTH,
                self.y - TRUNK_HEIGHT,
                self.x + TRUNK_HALF_WIDTH,
                self.y,
                TRUNK_COLOR,
            ),
            draw_circle(
                self.x,
                self.y + CANOPY_LIFT,
                CANOPY_RADIUS,
                CIRCLE_SEGMENTS,
                CANOPY_COLOR,
            ),
        ]
    }
}

pub const ROADSIDE_TREES: [Tree; 2] = [Tree::new(-1.2, 0.6), Tree::new(1.2, 0.6)];
