// Application settings. There is no config file; everything is a default
// that tests can override field by field.

use crate::save::SAVE_SUBDIR;
use crate::types::{Color, Rect};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub window_width: usize,
    pub window_height: usize,
    /// Where the canvas sits on screen; its size is the canvas size.
    pub canvas_rect: Rect,
    pub background: Color,
    pub target_fps: usize,
    pub save_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Paint Brush".to_string(),
            window_width: 1000,
            window_height: 900,
            canvas_rect: Rect::new(50, 300, 900, 500),
            background: Color::WHITE,
            target_fps: 60,
            save_dir: PathBuf::from(SAVE_SUBDIR),
        }
    }
}

impl AppConfig {
    pub fn canvas_size(&self) -> (usize, usize) {
        (self.canvas_rect.width as usize, self.canvas_rect.height as usize)
    }
}
