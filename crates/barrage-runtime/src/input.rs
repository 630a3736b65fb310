//! Input state management

use barrage_core::Vec2;
use std::collections::{HashMap, HashSet};
use winit::keyboard::KeyCode;

/// Action names for the five pattern-select bindings, in pattern index order
pub const PATTERN_ACTIONS: [&str; 5] = [
    "pattern_1",
    "pattern_2",
    "pattern_3",
    "pattern_4",
    "pattern_5",
];

/// Tracks keyboard and pointer input state per frame
pub struct InputState {
    /// Keys currently held down
    keys_down: HashSet<KeyCode>,
    /// Keys pressed this frame
    keys_just_pressed: HashSet<KeyCode>,
    /// Keys released this frame
    keys_just_released: HashSet<KeyCode>,

    /// Current pointer position in logical window pixels
    pub mouse_position: (f64, f64),

    /// Action map: action name -> list of key bindings
    action_map: HashMap<String, Vec<KeyCode>>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_just_pressed: HashSet::new(),
            keys_just_released: HashSet::new(),
            mouse_position: (0.0, 0.0),
            action_map: Self::default_action_map(),
        }
    }

    fn default_action_map() -> HashMap<String, Vec<KeyCode>> {
        let mut map = HashMap::new();
        map.insert(
            PATTERN_ACTIONS[0].into(),
            vec![KeyCode::Digit1, KeyCode::Numpad1],
        );
        map.insert(
            PATTERN_ACTIONS[1].into(),
            vec![KeyCode::Digit2, KeyCode::Numpad2],
        );
        map.insert(
            PATTERN_ACTIONS[2].into(),
            vec![KeyCode::Digit3, KeyCode::Numpad3],
        );
        map.insert(
            PATTERN_ACTIONS[3].into(),
            vec![KeyCode::Digit4, KeyCode::Numpad4],
        );
        map.insert(
            PATTERN_ACTIONS[4].into(),
            vec![KeyCode::Digit5, KeyCode::Numpad5],
        );
        map.insert("preset".into(), vec![KeyCode::KeyP]);
        map.insert("clear".into(), vec![KeyCode::KeyC]);
        map.insert("quit".into(), vec![KeyCode::Escape]);
        map
    }

    /// Bind an action to one or more keys
    pub fn bind_action(&mut self, action: impl Into<String>, keys: Vec<KeyCode>) {
        self.action_map.insert(action.into(), keys);
    }

    /// Process a key press event
    pub fn process_key_down(&mut self, key: KeyCode) {
        if !self.keys_down.contains(&key) {
            self.keys_just_pressed.insert(key);
        }
        self.keys_down.insert(key);
    }

    /// Process a key release event
    pub fn process_key_up(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
        self.keys_just_released.insert(key);
    }

    /// Process pointer movement (cursor position in logical pixels)
    pub fn process_mouse_move(&mut self, x: f64, y: f64) {
        self.mouse_position = (x, y);
    }

    /// Call at end of frame to clear per-frame state
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.keys_just_released.clear();
    }

    // --- Query methods ---

    /// Is a key currently held down?
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Was a key pressed this frame?
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    /// Is an action currently held? (any bound key is down)
    pub fn is_action_pressed(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_down.contains(k)))
            .unwrap_or(false)
    }

    /// Was an action just pressed this frame?
    pub fn is_action_just_pressed(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_just_pressed.contains(k)))
            .unwrap_or(false)
    }

    /// Index (0-4) of the pattern-select action pressed this frame, if any.
    ///
    /// When several are pressed in the same frame the highest index wins,
    /// matching the order key events would have been applied in.
    pub fn pattern_selected(&self) -> Option<usize> {
        PATTERN_ACTIONS
            .iter()
            .rposition(|action| self.is_action_just_pressed(action))
    }

    /// Current pointer position as a vector
    pub fn pointer_position(&self) -> Vec2 {
        Vec2::new(self.mouse_position.0, self.mouse_position.1)
    }
}
