// Toolbar widgets: clear/save buttons, color swatches, size and type pickers.
// Visual: the band above the canvas; the selected entry of each group is
// drawn in the accent color.

use crate::draw::{draw_text, draw_text_centered, stroke_rect, stroke_ring, text_width};
use crate::canvas::Canvas;
use crate::palette::{BrushStyle, Palette, COLORS, SIZES};
use crate::types::{Color, Point, Rect};

pub mod theme {
    use crate::types::Color;

    pub const BACKGROUND: Color = Color::rgb(243, 243, 243);
    pub const SURFACE: Color = Color::rgb(255, 255, 255);
    pub const ACCENT: Color = Color::rgb(0, 120, 215);
    pub const ACCENT_LIGHT: Color = Color::rgb(0, 153, 255);
    pub const TEXT: Color = Color::rgb(0, 0, 0);
    pub const TEXT_LIGHT: Color = Color::rgb(118, 118, 118);
    pub const BORDER: Color = Color::rgb(225, 225, 225);
    pub const TOOLBAR: Color = Color::rgb(250, 250, 250);
    pub const DANGER: Color = Color::rgb(196, 43, 28);
    pub const SUCCESS: Color = Color::rgb(19, 161, 14);
}

const TITLE_BAR_HEIGHT: i32 = 60;
const TOOLBAR_TOP: i32 = 60;
const TOOLBAR_HEIGHT: i32 = 200;
const SWATCH_DIAMETER: i32 = 40;
const LABEL_PADDING: i32 = 8;

/// What a click on the toolbar asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    SelectColor(usize),
    SelectSize(usize),
    SelectStyle(usize),
    Clear,
    Save,
}

#[derive(Debug, Clone)]
struct Button {
    rect: Rect,
    label: &'static str,
    fill: Color,
    hovered: bool,
}

impl Button {
    fn new(rect: Rect, label: &'static str, fill: Color) -> Self {
        Self { rect, label, fill, hovered: false }
    }

    fn render(&self, fb: &mut Canvas) {
        fb.stamp_rect(self.rect.origin(), self.rect.width as u32, self.rect.height as u32, self.fill);
        if self.hovered {
            stroke_rect(fb, self.rect, 2, theme::ACCENT_LIGHT);
        }
        // Long labels drop to the small font rather than spill over the edge.
        let scale = if text_width(self.label, 2) <= self.rect.width - LABEL_PADDING { 2 } else { 1 };
        draw_text_centered(fb, self.rect.center(), self.label, scale, theme::SURFACE);
    }
}

/// `name` if it fits in `max_width` at scale 1, otherwise every word but the
/// last shortened to its initial: "Extra Thick" -> "E. Thick".
pub fn fit_label(name: &str, max_width: i32) -> String {
    if text_width(name, 1) <= max_width {
        return name.to_string();
    }
    let mut words: Vec<&str> = name.split_whitespace().collect();
    let Some(last) = words.pop() else {
        return String::new();
    };
    let mut short: String = words
        .iter()
        .filter_map(|w| w.chars().next())
        .map(|c| format!("{c}. "))
        .collect();
    short.push_str(last);
    short
}

#[derive(Debug, Clone)]
pub struct Toolbar {
    window_width: i32,
    clear: Button,
    save: Button,
    swatches: Vec<Rect>,
    sizes: Vec<Rect>,
    styles: Vec<Rect>,
}

impl Toolbar {
    /// Lay out the toolbar for a window `window_width` pixels wide.
    pub fn new(window_width: usize) -> Self {
        let w = window_width as i32;
        Self {
            window_width: w,
            clear: Button::new(Rect::new(w - 120, 20, 100, 40), "Clear Canvas", theme::DANGER),
            save: Button::new(Rect::new(w - 240, 20, 100, 40), "Save", theme::SUCCESS),
            swatches: (0..COLORS.len() as i32)
                .map(|i| Rect::new(20 + i * 70, 80, SWATCH_DIAMETER, SWATCH_DIAMETER))
                .collect(),
            sizes: (0..SIZES.len() as i32).map(|i| Rect::new(20 + i * 70, 150, 60, 40)).collect(),
            styles: (0..BrushStyle::ALL.len() as i32)
                .map(|i| Rect::new(20 + i * 110, 210, 100, 60))
                .collect(),
        }
    }

    /// Which control (if any) sits under `pos`. Swatches are round, so they
    /// only react inside their circle.
    pub fn hit_test(&self, pos: Point) -> Option<UiAction> {
        if self.clear.rect.contains(pos) {
            return Some(UiAction::Clear);
        }
        if self.save.rect.contains(pos) {
            return Some(UiAction::Save);
        }
        if let Some(i) = self
            .swatches
            .iter()
            .position(|r| r.center().distance(pos) <= (r.width / 2) as f64)
        {
            return Some(UiAction::SelectColor(i));
        }
        if let Some(i) = self.sizes.iter().position(|r| r.contains(pos)) {
            return Some(UiAction::SelectSize(i));
        }
        self.styles
            .iter()
            .position(|r| r.contains(pos))
            .map(UiAction::SelectStyle)
    }

    /// Track the pointer for the clear/save hover outline.
    pub fn hover(&mut self, pos: Point) {
        self.clear.hovered = self.clear.rect.contains(pos);
        self.save.hovered = self.save.rect.contains(pos);
    }

    pub fn render(&self, fb: &mut Canvas, palette: &Palette) {
        // Title bar
        fb.stamp_rect(Point::new(0, 0), self.window_width as u32, TITLE_BAR_HEIGHT as u32, theme::SURFACE);
        draw_text(fb, 20, 20, "Paint Brush", 3, theme::TEXT);

        // Toolbar band
        let band = Rect::new(0, TOOLBAR_TOP, self.window_width, TOOLBAR_HEIGHT);
        fb.stamp_rect(band.origin(), band.width as u32, band.height as u32, theme::TOOLBAR);
        stroke_rect(fb, band, 1, theme::BORDER);

        draw_text(fb, 20, 66, "Colors", 1, theme::TEXT);
        draw_text(fb, 20, 136, "Brush Size", 1, theme::TEXT);
        draw_text(fb, 20, 198, "Brush Type", 1, theme::TEXT);

        self.clear.render(fb);
        self.save.render(fb);

        for (i, rect) in self.swatches.iter().enumerate() {
            let c = rect.center();
            let r = rect.width / 2;
            fb.stamp_disk(c, (r - 2) as u32, COLORS[i].color);
            if i == palette.color_index() {
                stroke_ring(fb, c, r, 3, theme::ACCENT);
            } else {
                stroke_ring(fb, c, r, 1, theme::BORDER);
            }
        }

        for (i, rect) in self.sizes.iter().enumerate() {
            let selected = i == palette.size_index();
            let (bg, fg) = if selected { (theme::ACCENT, theme::SURFACE) } else { (theme::SURFACE, theme::TEXT) };
            fb.stamp_rect(rect.origin(), rect.width as u32, rect.height as u32, bg);
            if !selected {
                stroke_rect(fb, *rect, 1, theme::BORDER);
            }
            let c = rect.center();
            let preview = if selected { theme::SURFACE } else { theme::TEXT };
            fb.stamp_disk(Point::new(c.x, c.y - 5), SIZES[i].size / 2 + 1, preview);
            let label = fit_label(SIZES[i].name, rect.width - LABEL_PADDING);
            draw_text_centered(fb, Point::new(c.x, rect.bottom() - 6), &label, 1, fg);
        }

        for (i, rect) in self.styles.iter().enumerate() {
            let selected = i == palette.style_index();
            let (bg, fg) = if selected { (theme::ACCENT, theme::SURFACE) } else { (theme::SURFACE, theme::TEXT) };
            fb.stamp_rect(rect.origin(), rect.width as u32, rect.height as u32, bg);
            if !selected {
                stroke_rect(fb, *rect, 1, theme::BORDER);
            }
            draw_text_centered(fb, rect.center(), BrushStyle::ALL[i].name(), 2, fg);
        }
    }
}

/// "Current: Round Brush, Size: 3"
pub fn brush_summary(palette: &Palette) -> String {
    let brush = palette.brush();
    format!("Current: {} Brush, Size: {}", brush.style, brush.size)
}
