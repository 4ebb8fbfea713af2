#[cfg(feature = "window")]
use sdl2::event::Event;
#[cfg(feature = "window")]
use sdl2::keyboard::Keycode;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
}

/// Maps raw SDL events onto actions and remembers a pending quit.
#[cfg(feature = "window")]
pub struct InputHandler {
    quit_requested: bool,
}

#[cfg(feature = "window")]
impl InputHandler {
    pub fn new() -> Self {
        InputHandler {
            quit_requested: false,
        }
    }

    // Keycode Q covers both q and Q, shift only changes the keymod
    pub fn process_event(&mut self, event: &Event) -> InputAction {
        let action = match event {
            Event::Quit { .. } => InputAction::Quit,
            Event::KeyDown {
                keycode: Some(Keycode::Q),
                ..
            } => InputAction::Quit,
            _ => InputAction::None,
        };

        if action == InputAction::Quit {
            self.quit_requested = true;
        }
        action
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(feature = "window")]
impl Default for InputHandler {
    fn default() -> Self {
        InputHandler::new()
    }
}

#[cfg(all(test, feature = "window"))]
mod tests {
    use super::*;
    use sdl2::keyboard::{Mod, Scancode};

    fn key_down(keycode: Keycode, keymod: Mod) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: Some(Scancode::Q),
            keymod,
            repeat: false,
        }
    }

    #[test]
    fn q_quits_with_or_without_shift() {
        for keymod in [Mod::NOMOD, Mod::LSHIFTMOD] {
            let mut input = InputHandler::new();
            assert_eq!(input.process_event(&key_down(Keycode::Q, keymod)), InputAction::Quit);
            assert!(input.should_quit());
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut input = InputHandler::new();
        assert_eq!(input.process_event(&key_down(Keycode::Escape, Mod::NOMOD)), InputAction::None);
        assert_eq!(input.process_event(&key_down(Keycode::Space, Mod::NOMOD)), InputAction::None);
        assert!(!input.should_quit());
    }

    #[test]
    fn closing_the_window_quits() {
        let mut input = InputHandler::new();
        input.process_event(&Event::Quit { timestamp: 0 });
        assert!(input.should_quit());
    }
}
