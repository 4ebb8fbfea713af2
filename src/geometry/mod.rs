pub mod color;
pub mod position;
pub mod primitive;
pub mod raster;
pub mod viewport;

pub use color::Rgb;
pub use position::Position;
pub use primitive::{draw_circle, draw_rectangle, Primitive};
pub use viewport::{PixelRect, Viewport, WorldBounds};
