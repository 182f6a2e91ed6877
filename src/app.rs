// The whole application state, minus the window.
// Visual: `handle_event` changes what's on the canvas/toolbar, `render`
// composes the frame that the window then shows.

use crate::brush::paint_segment;
use crate::canvas::Canvas;
use crate::config::AppConfig;
use crate::draw::{draw_text, stroke_rect};
use crate::input::{InputEvent, PointerButton, StrokeInput};
use crate::palette::Palette;
use crate::save::{save_painting, SaveOutcome};
use crate::types::{Point, Rect};
use crate::ui::{brush_summary, theme, Toolbar, UiAction};
use chrono::Local;
use rand::Rng;

const SUMMARY_Y: i32 = 820;
const STATUS_Y: i32 = 850;
const TIP: &str = "Tip: Use different brush types and sizes for various effects";

pub struct App<R: Rng> {
    config: AppConfig,
    canvas: Canvas,
    palette: Palette,
    stroke: StrokeInput,
    toolbar: Toolbar,
    rng: R,
    status: Option<String>,
    running: bool,
}

impl<R: Rng> App<R> {
    /// `rng` drives the spray brush; pass a seeded one for reproducible output.
    pub fn new(config: AppConfig, rng: R) -> Self {
        let (w, h) = config.canvas_size();
        tracing::info!(width = w, height = h, "canvas created");
        Self {
            canvas: Canvas::new(w, h, config.background),
            palette: Palette::new(),
            stroke: StrokeInput::new(config.canvas_rect),
            toolbar: Toolbar::new(config.window_width),
            rng,
            status: None,
            running: true,
            config,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_drawing()
    }

    /// Status text from the last save, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                self.running = false;
                return;
            }
            InputEvent::Move { pos } => self.toolbar.hover(pos),
            InputEvent::Press { pos, button: PointerButton::Primary } => {
                if let Some(action) = self.toolbar.hit_test(pos) {
                    self.apply(action);
                }
            }
            _ => {}
        }

        let brush = self.palette.brush();
        if let Some(segment) = self.stroke.handle(event, brush, self.canvas.background()) {
            paint_segment(&mut self.canvas, &segment, &mut self.rng);
        }
    }

    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::SelectColor(i) => {
                self.palette.select_color(i);
            }
            UiAction::SelectSize(i) => {
                self.palette.select_size(i);
            }
            UiAction::SelectStyle(i) => {
                self.palette.select_style(i);
            }
            UiAction::Clear => self.clear(),
            UiAction::Save => {
                self.save();
            }
        }
    }

    pub fn clear(&mut self) {
        self.canvas.fill(self.canvas.background());
        tracing::info!("canvas cleared");
    }

    /// Save into the configured directory. Never fails the app; the result
    /// ends up in the status line.
    pub fn save(&mut self) -> SaveOutcome {
        let outcome = save_painting(&self.canvas, &self.config.save_dir, Local::now());
        self.status = Some(outcome.message());
        outcome
    }

    /// Compose the full window frame into `screen`.
    pub fn render(&self, screen: &mut Canvas) {
        screen.fill(theme::BACKGROUND);
        self.toolbar.render(screen, &self.palette);

        let frame = self.config.canvas_rect;
        screen.blit(&self.canvas, frame.origin());
        let border = Rect::new(frame.x - 2, frame.y - 2, frame.width + 4, frame.height + 4);
        stroke_rect(screen, border, 2, theme::BORDER);

        draw_text(screen, frame.x, SUMMARY_Y, &brush_summary(&self.palette), 2, theme::TEXT_LIGHT);
        let line = self.status.as_deref().unwrap_or(TIP);
        draw_text(screen, frame.x, STATUS_Y, line, 1, theme::TEXT_LIGHT);
    }

    /// A blank screen buffer sized for this app's window.
    pub fn screen_buffer(&self) -> Canvas {
        Canvas::new(self.config.window_width, self.config.window_height, theme::BACKGROUND)
    }

    /// Canvas-local -> screen coordinates.
    pub fn to_screen(&self, local: Point) -> Point {
        Point::new(local.x + self.config.canvas_rect.x, local.y + self.config.canvas_rect.y)
    }
}
