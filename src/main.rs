// What you SEE:
// • A toolbar with colors, brush sizes and brush types, plus Clear and Save.
// • Hold Left Mouse on the white canvas to paint with the selected brush.
// • Save writes saves/painting_<timestamp>.png. ESC or closing the window quits.

use paint_brush::app::App;
use paint_brush::config::AppConfig;
use paint_brush::draw::Drawer;
use paint_brush::error::Error;
use paint_brush::logging;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Error> {
    logging::init(cfg!(debug_assertions));

    let config = AppConfig::default();
    let mut drawer = Drawer::new(&config.title, config.window_width, config.window_height, config.target_fps)?;

    /* --- App state + reusable screen buffer ---
       Visual: `screen` is the image you actually see each frame. */
    let mut app = App::new(config, StdRng::from_entropy());
    let mut screen = app.screen_buffer();

    /* ------------------------------ Main loop ------------------------------ */
    while app.is_running() {
        // 1) Inputs: clicks hit the toolbar, drags paint the canvas.
        for event in drawer.poll_events() {
            app.handle_event(event);
        }
        if !app.is_running() {
            break;
        }

        // 2) Compose the frame and show it (paced to the target FPS).
        app.render(&mut screen);
        drawer.present(&screen)?;
    }

    tracing::info!("window closed");
    Ok(())
}
