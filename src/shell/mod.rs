use std::time::{Duration, Instant};

use crate::constants::{FRAME_DURATION, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::ShellError;
use crate::geometry::{Primitive, Rgb};
use crate::rendering::SceneVariant;

pub mod recording;
#[cfg(feature = "window")]
pub mod sdl_shell;

pub use recording::RecordingShell;
#[cfg(feature = "window")]
pub use sdl_shell::SdlShell;

/// A window the frame loop can draw into. Creating one is the
/// implementation's constructor; dropping it releases the window.
pub trait WindowShell {
    /// Drains pending input events.
    fn poll_input(&mut self);

    fn should_quit(&self) -> bool;

    /// Clears to `background` and rasterizes `primitives` in order.
    fn render(&mut self, background: Rgb, primitives: &[Primitive]) -> Result<(), ShellError>;

    fn present(&mut self);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FramePacing {
    /// Sleep out the rest of each frame.
    Fixed(Duration),
    Uncapped,
}

impl FramePacing {
    /// Time left in the frame that started at `frame_start`.
    pub fn remaining(&self, frame_start: Instant) -> Option<Duration> {
        match self {
            FramePacing::Fixed(frame) => frame.checked_sub(frame_start.elapsed()),
            FramePacing::Uncapped => None,
        }
    }

    pub fn wait(&self, frame_start: Instant) {
        if let Some(rest) = self.remaining(frame_start) {
            std::thread::sleep(rest);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub pacing: FramePacing,
}

impl ShellConfig {
    /// The crossing scene runs on a fixed 16 ms frame, the plain one is
    /// uncapped and leans on vsync.
    pub fn for_variant(variant: SceneVariant) -> Self {
        let (vsync, pacing) = match variant {
            SceneVariant::Plain => (true, FramePacing::Uncapped),
            SceneVariant::Crossing => (false, FramePacing::Fixed(FRAME_DURATION)),
        };

        ShellConfig {
            title: variant.title().to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            vsync,
            pacing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncapped_never_waits() {
        assert_eq!(FramePacing::Uncapped.remaining(Instant::now()), None);
    }

    #[test]
    fn fixed_pacing_waits_at_most_one_frame() {
        let pacing = FramePacing::Fixed(Duration::from_millis(16));
        let rest = pacing.remaining(Instant::now()).unwrap();
        assert!(rest <= Duration::from_millis(16));
    }

    #[test]
    fn variants_pick_their_pacing() {
        let plain = ShellConfig::for_variant(SceneVariant::Plain);
        let crossing = ShellConfig::for_variant(SceneVariant::Crossing);
        assert_eq!(plain.pacing, FramePacing::Uncapped);
        assert!(plain.vsync);
        assert_eq!(crossing.pacing, FramePacing::Fixed(FRAME_DURATION));
        assert_eq!((crossing.width, crossing.height), (800, 600));
        assert_eq!(crossing.title, "Cars Stop at Zebra Crossing and Continue");
    }
}
