pub mod scene;
pub mod two_body;

use crate::engine::canvas::Canvas;

#[derive(Debug, Clone)]
pub struct GameWindowDescriptor {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub resizable: bool,
}

impl Default for GameWindowDescriptor {
    fn default() -> Self {
        Self {
            title: None,
            width: None,
            height: None,
            resizable: true,
        }
    }
}

/// Something the engine can drive one frame at a time.
pub trait Game {
    fn name(&self) -> &str;

    /// Advances the game by one tick and draws the result into `canvas`.
    fn frame(&mut self, canvas: &mut Canvas);

    fn window_descriptor(&self) -> GameWindowDescriptor {
        GameWindowDescriptor::default()
    }
}

pub use two_body::TwoBodyGame;
