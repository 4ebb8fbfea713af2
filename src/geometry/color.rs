/// Flat color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
    }

    pub const fn gray(level: f32) -> Self {
        Rgb::new(level, level, level)
    }

    /// Multiplies every channel by `factor`, clamped back into range.
    pub fn shade(&self, factor: f32) -> Rgb {
        Rgb::new(
            (self.r * factor).clamp(0.0, 1.0),
            (self.g * factor).clamp(0.0, 1.0),
            (self.b * factor).clamp(0.0, 1.0),
        )
    }

    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (channel_to_u8(self.r), channel_to_u8(self.g), channel_to_u8(self.b))
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(feature = "window")]
impl From<Rgb> for sdl2::pixels::Color {
    fn from(color: Rgb) -> Self {
        let (r, g, b) = color.to_rgb8();
        sdl2::pixels::Color::RGB(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_scales_each_channel() {
        let shaded = Rgb::new(0.0, 0.5, 1.0).shade(0.8);
        assert_eq!(shaded, Rgb::new(0.0, 0.5 * 0.8, 0.8));
    }

    #[test]
    fn to_rgb8_clamps_out_of_range_channels() {
        assert_eq!(Rgb::new(-0.2, 1.7, 0.5).to_rgb8(), (0, 255, 128));
    }
}
