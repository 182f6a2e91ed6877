// Brush selection state: one color, one size, one style at a time.
// Visual: the highlighted swatch/size/type buttons in the toolbar mirror this.

use crate::types::Color;
use std::fmt;

/// The five ways a segment can be stamped onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrushStyle {
    #[default]
    Round,
    Square,
    Spray,
    Marker,
    Eraser,
}

impl BrushStyle {
    pub const ALL: [BrushStyle; 5] = [
        BrushStyle::Round,
        BrushStyle::Square,
        BrushStyle::Spray,
        BrushStyle::Marker,
        BrushStyle::Eraser,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BrushStyle::Round => "Round",
            BrushStyle::Square => "Square",
            BrushStyle::Spray => "Spray",
            BrushStyle::Marker => "Marker",
            BrushStyle::Eraser => "Eraser",
        }
    }
}

impl fmt::Display for BrushStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct NamedColor {
    pub name: &'static str,
    pub color: Color,
}

pub struct NamedSize {
    pub name: &'static str,
    pub size: u32,
}

pub const COLORS: [NamedColor; 9] = [
    NamedColor { name: "Black", color: Color::rgb(0, 0, 0) },
    NamedColor { name: "Red", color: Color::rgb(196, 43, 28) },
    NamedColor { name: "Green", color: Color::rgb(19, 161, 14) },
    NamedColor { name: "Blue", color: Color::rgb(0, 120, 215) },
    NamedColor { name: "Yellow", color: Color::rgb(251, 188, 5) },
    NamedColor { name: "Purple", color: Color::rgb(136, 23, 152) },
    NamedColor { name: "Orange", color: Color::rgb(247, 99, 12) },
    NamedColor { name: "Pink", color: Color::rgb(227, 0, 140) },
    NamedColor { name: "Teal", color: Color::rgb(0, 183, 195) },
];

pub const SIZES: [NamedSize; 6] = [
    NamedSize { name: "Fine", size: 1 },
    NamedSize { name: "Thin", size: 3 },
    NamedSize { name: "Medium", size: 5 },
    NamedSize { name: "Thick", size: 8 },
    NamedSize { name: "Very Thick", size: 12 },
    NamedSize { name: "Extra Thick", size: 18 },
];

/// Snapshot of everything the rasterizer needs from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushConfig {
    pub color: Color,
    /// Radius for round/spray/marker/eraser, side length for square.
    pub size: u32,
    pub style: BrushStyle,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            color: COLORS[0].color,
            size: SIZES[1].size,
            style: BrushStyle::Round,
        }
    }
}

/// Index-based selection over the fixed tables above.
/// Each axis is independent: picking a color leaves size and style alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    color_idx: usize,
    size_idx: usize,
    style_idx: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self { color_idx: 0, size_idx: 1, style_idx: 0 }
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_index(&self) -> usize {
        self.color_idx
    }

    pub fn size_index(&self) -> usize {
        self.size_idx
    }

    pub fn style_index(&self) -> usize {
        self.style_idx
    }

    /// Returns false (and changes nothing) for an out-of-range index.
    pub fn select_color(&mut self, idx: usize) -> bool {
        if idx >= COLORS.len() {
            return false;
        }
        self.color_idx = idx;
        tracing::debug!(color = COLORS[idx].name, "brush color selected");
        true
    }

    pub fn select_size(&mut self, idx: usize) -> bool {
        if idx >= SIZES.len() {
            return false;
        }
        self.size_idx = idx;
        tracing::debug!(size = SIZES[idx].size, "brush size selected");
        true
    }

    pub fn select_style(&mut self, idx: usize) -> bool {
        if idx >= BrushStyle::ALL.len() {
            return false;
        }
        self.style_idx = idx;
        tracing::debug!(style = %BrushStyle::ALL[idx], "brush style selected");
        true
    }

    pub fn brush(&self) -> BrushConfig {
        BrushConfig {
            color: COLORS[self.color_idx].color,
            size: SIZES[self.size_idx].size,
            style: BrushStyle::ALL[self.style_idx],
        }
    }
}
