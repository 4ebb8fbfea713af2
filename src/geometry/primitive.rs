use std::f32::consts::TAU;

use super::color::Rgb;
use super::position::Position;

const MIN_SEGMENTS: u32 = 3;

/// A single immediate-mode draw call in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Axis-aligned box, `min` is bottom-left and `max` top-right.
    Rect { min: Position, max: Position, color: Rgb },
    /// Filled regular polygon approximating a disc.
    Disc {
        center: Position,
        radius: f32,
        segments: u32,
        color: Rgb,
    },
}

impl Primitive {
    pub fn color(&self) -> Rgb {
        match self {
            Primitive::Rect { color, .. } | Primitive::Disc { color, .. } => *color,
        }
    }

    /// Rim of the triangle fan for a disc, closing back on the first point.
    /// Rectangles yield their four corners counter-clockwise.
    pub fn outline(&self) -> Vec<Position> {
        match *self {
            Primitive::Rect { min, max, .. } => vec![
                min,
                Position::new(max.x, min.y),
                max,
                Position::new(min.x, max.y),
            ],
            Primitive::Disc {
                center,
                radius,
                segments,
                ..
            } => {
                let step = TAU / segments as f32;
                (0..=segments)
                    .map(|i| center.on_circle(radius, i as f32 * step))
                    .collect()
            }
        }
    }
}

/// Filled box between two opposite corners given in any order.
pub fn draw_rectangle(x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb) -> Primitive {
    Primitive::Rect {
        min: Position::new(x1.min(x2), y1.min(y2)),
        max: Position::new(x1.max(x2), y1.max(y2)),
        color,
    }
}

pub fn draw_circle(cx: f32, cy: f32, r: f32, segments: u32, color: Rgb) -> Primitive {
    Primitive::Disc {
        center: Position::new(cx, cy),
        radius: r.abs(),
        segments: segments.max(MIN_SEGMENTS),
        color,
    }
}
