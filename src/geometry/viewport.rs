use crate::constants::*;

use super::position::Position;

/// World-space rectangle that maps onto the whole window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        WorldBounds {
            left: WORLD_LEFT,
            right: WORLD_RIGHT,
            bottom: WORLD_BOTTOM,
            top: WORLD_TOP,
        }
    }
}

/// Pixel-space box, `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[cfg(feature = "window")]
impl From<PixelRect> for sdl2::rect::Rect {
    fn from(rect: PixelRect) -> Self {
        sdl2::rect::Rect::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// Orthographic projection of the world onto a `width` x `height` window.
/// World Y grows upwards, pixel Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    bounds: WorldBounds,
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(bounds: WorldBounds, width: u32, height: u32) -> Self {
        Viewport {
            bounds,
            width,
            height,
        }
    }

    pub fn to_pixel(&self, point: Position) -> (f32, f32) {
        let span_x = self.bounds.right - self.bounds.left;
        let span_y = self.bounds.top - self.bounds.bottom;
        (
            (point.x - self.bounds.left) / span_x * self.width as f32,
            (self.bounds.top - point.y) / span_y * self.height as f32,
        )
    }

    /// Pixel box covering the world box `min`-`max`, never thinner than one pixel.
    pub fn to_pixel_rect(&self, min: Position, max: Position) -> PixelRect {
        let (left, top) = self.to_pixel(Position::new(min.x, max.y));
        let (right, bottom) = self.to_pixel(Position::new(max.x, min.y));
        let x = left.round() as i32;
        let y = top.round() as i32;
        PixelRect {
            x,
            y,
            width: (right.round() as i32 - x).max(1) as u32,
            height: (bottom.round() as i32 - y).max(1) as u32,
        }
    }

    pub fn to_pixel_polygon(&self, points: &[Position]) -> Vec<(f32, f32)> {
        points.iter().map(|p| self.to_pixel(*p)).collect()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(WorldBounds::default(), WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}
