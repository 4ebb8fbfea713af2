use crate::error::ShellError;
use crate::geometry::{Primitive, Rgb};
use crate::input::InputAction;

use super::WindowShell;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    pub background: Rgb,
    pub primitives: Vec<Primitive>,
}

/// Headless shell that keeps every presented frame and asks to quit once
/// a set number of frames has gone by.
#[derive(Debug, Default)]
pub struct RecordingShell {
    quit_after: Option<usize>,
    pending: Option<RecordedFrame>,
    frames: Vec<RecordedFrame>,
    quit_requested: bool,
    polls: usize,
}

impl RecordingShell {
    /// Runs until [`RecordingShell::request_quit`] is called.
    pub fn new() -> Self {
        RecordingShell::default()
    }

    pub fn quit_after(frames: usize) -> Self {
        RecordingShell {
            quit_after: Some(frames),
            ..RecordingShell::default()
        }
    }

    pub fn request_quit(&mut self) {
        self.handle(InputAction::Quit);
    }

    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    pub fn polls(&self) -> usize {
        self.polls
    }

    fn handle(&mut self, action: InputAction) {
        match action {
            InputAction::Quit => self.quit_requested = true,
            InputAction::None => {}
        }
    }
}

impl WindowShell for RecordingShell {
    fn poll_input(&mut self) {
        self.polls += 1;
        let action = match self.quit_after {
            Some(limit) if self.frames.len() >= limit => InputAction::Quit,
            _ => InputAction::None,
        };
        self.handle(action);
    }

    fn should_quit(&self) -> bool {
        self.quit_requested
    }

    fn render(&mut self, background: Rgb, primitives: &[Primitive]) -> Result<(), ShellError> {
        self.pending = Some(RecordedFrame {
            background,
            primitives: primitives.to_vec(),
        });
        Ok(())
    }

    fn present(&mut self) {
        if let Some(frame) = self.pending.take() {
            self.frames.push(frame);
        }
    }
}
