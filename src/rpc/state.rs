//! Server state management for the selection server

use crate::io::ParsedInput;
use crate::scene::{Point, Scene};

/// Scene loaded by the last successful `Load`, plus its click points
pub struct ServerState {
    pub scene: Option<Scene>,
    pub clicks: Vec<Point>,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            scene: None,
            clicks: Vec::new(),
        }
    }

    /// Replace the current scene with freshly parsed input
    pub fn install(&mut self, parsed: ParsedInput) {
        self.scene = Some(parsed.scene);
        self.clicks = parsed.clicks;
    }

    pub fn clear(&mut self) {
        self.scene = None;
        self.clicks.clear();
    }

    /// Check if a scene is loaded
    pub fn is_scene_loaded(&self) -> bool {
        self.scene.is_some()
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_input;

    #[test]
    fn test_install_and_clear() {
        let mut state = ServerState::new();
        assert!(!state.is_scene_loaded());

        state.install(parse_input("I 0 0 R 1 1 2 2 M 5 5 #").unwrap());
        assert!(state.is_scene_loaded());
        assert_eq!(state.scene.as_ref().map(Scene::len), Some(2));
        assert_eq!(state.clicks, vec![Point::new(5, 5)]);

        state.clear();
        assert!(!state.is_scene_loaded());
        assert!(state.clicks.is_empty());
    }
}
