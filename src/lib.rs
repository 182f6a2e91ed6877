pub mod app;
pub mod brush;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod logging;
pub mod palette;
pub mod save;
pub mod types;
pub mod ui;
