/// Platform-agnostic input handling system
use std::collections::{HashSet, VecDeque};

use super::camera_rig::CameraMode;

/// Platform-independent input events
#[derive(Debug, Clone)]
pub enum InputEvent {
    // Keyboard events
    KeyDown(String),
    KeyUp(String),

    // Mouse events (screen pixels)
    PointerClick { button: MouseButton, x: f32, y: f32 },

    // Window events
    FocusLost,
    VisibilityChanged { visible: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn from_web_button(button: i16) -> Self {
        match button {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            _ => MouseButton::Left,
        }
    }
}

/// The four held movement directions, relative to the character's facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::StrafeLeft,
        Direction::StrafeRight,
    ];
}

/// One-shot command raised on a key-press edge or a click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SelectCamera(CameraMode),
    /// +1 turns one step clockwise, -1 one step counter-clockwise.
    Rotate(i8),
    Throw { x: f32, y: f32 },
}

/// Key mapping configuration
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub forward: String,
    pub backward: String,
    pub left: String,
    pub right: String,
    pub camera_default: String,
    pub camera_front: String,
    pub camera_back: String,
    pub camera_ball: String,
    pub rotate_cw: String,
    pub rotate_ccw: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "w".to_string(),
            backward: "s".to_string(),
            left: "a".to_string(),
            right: "d".to_string(),
            camera_default: "1".to_string(),
            camera_front: "2".to_string(),
            camera_back: "3".to_string(),
            camera_ball: "4".to_string(),
            rotate_cw: "r".to_string(),
            rotate_ccw: "t".to_string(),
        }
    }
}

impl KeyBindings {
    fn key_for(&self, direction: Direction) -> (&str, &str) {
        match direction {
            Direction::Forward => (self.forward.as_str(), "arrowup"),
            Direction::Backward => (self.backward.as_str(), "arrowdown"),
            Direction::StrafeLeft => (self.left.as_str(), "arrowleft"),
            Direction::StrafeRight => (self.right.as_str(), "arrowright"),
        }
    }

    /// Command bound to a (normalized) key, if any.
    pub fn command_for(&self, key: &str) -> Option<Command> {
        let is = |binding: &String| key.eq_ignore_ascii_case(binding);
        if is(&self.camera_default) {
            Some(Command::SelectCamera(CameraMode::Default))
        } else if is(&self.camera_front) {
            Some(Command::SelectCamera(CameraMode::FrontFollow))
        } else if is(&self.camera_back) {
            Some(Command::SelectCamera(CameraMode::BackFollow))
        } else if is(&self.camera_ball) {
            Some(Command::SelectCamera(CameraMode::BallFollow))
        } else if is(&self.rotate_cw) {
            Some(Command::Rotate(1))
        } else if is(&self.rotate_ccw) {
            Some(Command::Rotate(-1))
        } else {
            None
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

/// Held keys plus the queue of commands waiting for the next tick.
#[derive(Debug, Clone)]
pub struct InputState {
    pub pressed_keys: HashSet<String>,
    commands: VecDeque<Command>,
    bindings: KeyBindings,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            pressed_keys: HashSet::new(),
            commands: VecDeque::new(),
            bindings,
        }
    }

    /// Process an input event and update state
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                let key = normalize_key(key);
                let command = self.bindings.command_for(&key);
                // Auto-repeat of a held key is not a new edge
                if self.pressed_keys.insert(key) {
                    if let Some(command) = command {
                        tracing::debug!(?command, "queued key command");
                        self.commands.push_back(command);
                    }
                }
            }
            InputEvent::KeyUp(key) => {
                self.pressed_keys.remove(normalize_key(key).as_str());
            }
            InputEvent::PointerClick { button, x, y } => {
                if *button == MouseButton::Left {
                    self.commands.push_back(Command::Throw { x: *x, y: *y });
                }
            }
            InputEvent::FocusLost | InputEvent::VisibilityChanged { .. } => {
                self.clear_keys();
            }
        }
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(normalize_key(key).as_str())
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        let (key, alias) = self.bindings.key_for(direction);
        self.is_key_pressed(key) || self.is_key_pressed(alias)
    }

    pub fn clear_keys(&mut self) {
        self.pressed_keys.clear();
    }

    /// Hand out every queued command exactly once, oldest first.
    pub fn drain_commands(&mut self) -> Vec<Command> {
        self.commands.drain(..).collect()
    }

    pub fn has_pending_commands(&self) -> bool {
        !self.commands.is_empty()
    }
}

pub mod wasm {
    use super::*;
    use web_sys::{KeyboardEvent, MouseEvent};

    pub fn keyboard_event_to_input(e: &KeyboardEvent, is_down: bool) -> InputEvent {
        let key = e.key();
        if is_down {
            InputEvent::KeyDown(key)
        } else {
            InputEvent::KeyUp(key)
        }
    }

    pub fn mouse_click_to_input(e: &MouseEvent) -> InputEvent {
        InputEvent::PointerClick {
            button: MouseButton::from_web_button(e.button()),
            x: e.client_x() as f32,
            y: e.client_y() as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(key: &str) -> InputEvent {
        InputEvent::KeyDown(key.to_string())
    }

    fn up(key: &str) -> InputEvent {
        InputEvent::KeyUp(key.to_string())
    }

    #[test]
    fn test_held_keys_are_case_insensitive() {
        let mut input = InputState::default();
        input.process_event(&down("W"));
        assert!(input.is_held(Direction::Forward));
        input.process_event(&up("w"));
        assert!(!input.is_held(Direction::Forward));
    }

    #[test]
    fn test_arrow_aliases() {
        let mut input = InputState::default();
        input.process_event(&down("ArrowLeft"));
        assert!(input.is_held(Direction::StrafeLeft));
        assert!(!input.is_held(Direction::StrafeRight));
    }

    #[test]
    fn test_commands_fire_once_per_press_edge() {
        let mut input = InputState::default();
        input.process_event(&down("r"));
        input.process_event(&down("r")); // auto-repeat
        input.process_event(&down("3"));
        assert_eq!(
            input.drain_commands(),
            vec![Command::Rotate(1), Command::SelectCamera(CameraMode::BackFollow)]
        );
        assert!(input.drain_commands().is_empty(), "queue drained exactly once");

        input.process_event(&up("r"));
        input.process_event(&down("R"));
        assert_eq!(input.drain_commands(), vec![Command::Rotate(1)]);
    }

    #[test]
    fn test_only_primary_click_throws() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::PointerClick { button: MouseButton::Right, x: 1.0, y: 2.0 });
        assert!(!input.has_pending_commands());
        input.process_event(&InputEvent::PointerClick { button: MouseButton::Left, x: 1.0, y: 2.0 });
        assert_eq!(input.drain_commands(), vec![Command::Throw { x: 1.0, y: 2.0 }]);
    }

    #[test]
    fn test_focus_loss_releases_keys() {
        let mut input = InputState::default();
        input.process_event(&down("a"));
        input.process_event(&down("d"));
        input.process_event(&InputEvent::FocusLost);
        assert!(input.pressed_keys.is_empty());
    }
}
