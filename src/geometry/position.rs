/// A point in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }

    /// Point on the circle of `radius` around `self` at `angle` radians.
    pub fn on_circle(&self, radius: f32, angle: f32) -> Position {
        Position::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}
