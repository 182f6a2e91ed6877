// Stroke rasterizer: turns one pointer segment (last sample -> new sample)
// into marks on the canvas, with a different stamping rule per brush style.
// Visual: a fast mouse drag still leaves a continuous line instead of dots,
// because every segment is re-sampled densely before stamping.

use crate::canvas::Canvas;
use crate::palette::{BrushConfig, BrushStyle};
use crate::types::{Color, Point};
use rand::Rng;

/// Marker opacity out of 255.
pub const MARKER_ALPHA: u8 = 100;
/// Smallest marker radius, so "Fine" still reads as a highlighter.
pub const MARKER_MIN_RADIUS: u32 = 2;
/// Spray dots per interpolated point, per unit of brush size.
pub const SPRAY_DOTS_PER_SIZE: u32 = 2;
const SPRAY_DOT_RADIUS: u32 = 1;

/// One piece of a stroke plus the brush it was drawn with.
/// Built fresh for every pointer move, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub brush: BrushConfig,
}

impl Segment {
    /// Snapshot `brush` for this segment. The eraser paints with the
    /// canvas background instead of the selected color.
    pub fn from_brush(start: Point, end: Point, brush: BrushConfig, background: Color) -> Self {
        let mut brush = brush;
        if brush.style == BrushStyle::Eraser {
            brush.color = background;
        }
        Self { start, end, brush }
    }
}

/// Number of samples for a segment: the rounded length, never below 1.
pub fn sample_count(start: Point, end: Point) -> usize {
    (start.distance(end).round() as usize).max(1)
}

/// Point `i` of `n` on the way from `start` to `end`, truncated toward zero.
#[inline]
fn lerp(start: Point, end: Point, i: usize, n: usize) -> Point {
    // Scale before dividing so whole-pixel positions come out exact.
    let (i, n) = (i as f64, n as f64);
    let dx = (end.x - start.x) as f64;
    let dy = (end.y - start.y) as f64;
    Point::new(
        (start.x as f64 + i * dx / n) as i32,
        (start.y as f64 + i * dy / n) as i32,
    )
}

/// Dense samples along a segment: `sample_count` points, starting at `start`
/// and stopping one step short of `end` (the next segment starts there).
pub fn interpolate(start: Point, end: Point) -> impl Iterator<Item = Point> {
    stepped(start, end, 1)
}

/// Like `interpolate` but only every `step`-th sample.
pub fn stepped(start: Point, end: Point, step: usize) -> impl Iterator<Item = Point> {
    let n = sample_count(start, end);
    (0..n).step_by(step.max(1)).map(move |i| lerp(start, end, i, n))
}

/// Paint one segment onto `canvas` in place.
///
/// Deterministic for every style except spray, whose scatter comes from `rng`;
/// seed it to make spray reproducible.
pub fn paint_segment<R: Rng + ?Sized>(canvas: &mut Canvas, segment: &Segment, rng: &mut R) {
    let Segment { start, end, brush } = *segment;
    match brush.style {
        // Eraser is the round brush; the color swap already happened in `Segment::from_brush`.
        BrushStyle::Round | BrushStyle::Eraser => paint_round(canvas, brush.color, brush.size, start, end),
        BrushStyle::Square => paint_square(canvas, brush.color, brush.size, start, end),
        BrushStyle::Spray => paint_spray(canvas, brush.color, brush.size, start, end, rng),
        BrushStyle::Marker => paint_marker(canvas, brush.color, brush.size, start, end),
    }
}

/// Filled disk of radius `size` at every sample.
fn paint_round(canvas: &mut Canvas, color: Color, size: u32, start: Point, end: Point) {
    for p in interpolate(start, end) {
        canvas.stamp_disk(p, size, color);
    }
}

/// Filled square of side `size` centred (floor) on every sample.
fn paint_square(canvas: &mut Canvas, color: Color, size: u32, start: Point, end: Point) {
    let half = (size / 2) as i32;
    for p in interpolate(start, end) {
        canvas.stamp_rect(Point::new(p.x - half, p.y - half), size, size, color);
    }
}

/// Scatter of tiny dots around every sample, radius in [0, size).
/// Visual: an airbrush haze that gets denser where the path lingers.
fn paint_spray<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    color: Color,
    size: u32,
    start: Point,
    end: Point,
    rng: &mut R,
) {
    let dots = (size * SPRAY_DOTS_PER_SIZE).max(1);
    for p in interpolate(start, end) {
        for _ in 0..dots {
            let angle = rng.gen_range(0.0..360.0_f64).to_radians();
            let radius = if size > 0 { rng.gen_range(0..size) as f64 } else { 0.0 };
            let dot = Point::new(
                p.x + (radius * angle.cos()) as i32,
                p.y + (radius * angle.sin()) as i32,
            );
            canvas.stamp_disk(dot, SPRAY_DOT_RADIUS, color);
        }
    }
}

/// Translucent disks stamped every `size/2` samples.
/// Sparser than the other brushes: stamping every pixel would saturate the
/// color after a few pixels of travel.
fn paint_marker(canvas: &mut Canvas, color: Color, size: u32, start: Point, end: Point) {
    let radius = size.max(MARKER_MIN_RADIUS);
    let step = (size / 2).max(1) as usize;
    for p in stepped(start, end, step) {
        canvas.blend_disk(p, radius, color, MARKER_ALPHA);
    }
}

#[cfg(test)]
mod tests {
    use super::{interpolate, paint_segment, sample_count, stepped, Segment, MARKER_ALPHA};
    use crate::canvas::Canvas;
    use crate::palette::{BrushConfig, BrushStyle};
    use crate::types::{Color, Point};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const RED: Color = Color::rgb(196, 43, 28);

    fn brush(style: BrushStyle, size: u32) -> BrushConfig {
        BrushConfig { color: RED, size, style }
    }

    fn paint(canvas: &mut Canvas, style: BrushStyle, size: u32, start: (i32, i32), end: (i32, i32)) {
        let seg = Segment::from_brush(
            Point::new(start.0, start.1),
            Point::new(end.0, end.1),
            brush(style, size),
            canvas.background(),
        );
        let mut rng = StdRng::seed_from_u64(7);
        paint_segment(canvas, &seg, &mut rng);
    }

    fn changed(canvas: &Canvas) -> Vec<Point> {
        let bg = canvas.background().to_u32();
        let w = canvas.width();
        canvas
            .pixels()
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != bg)
            .map(|(i, _)| Point::new((i % w) as i32, (i / w) as i32))
            .collect()
    }

    #[test]
    fn zero_length_segment_samples_once() {
        let p = Point::new(10, 10);
        assert_eq!(sample_count(p, p), 1);
        assert_eq!(interpolate(p, p).collect::<Vec<_>>(), vec![p]);
    }

    #[test]
    fn interpolation_is_dense_and_excludes_end() {
        let pts: Vec<_> = interpolate(Point::new(0, 50), Point::new(100, 50)).collect();
        assert_eq!(pts.len(), 100);
        assert_eq!(pts[0], Point::new(0, 50));
        assert_eq!(pts[99], Point::new(99, 50));
        assert!(pts.windows(2).all(|w| w[1].x - w[0].x == 1));
    }

    #[test]
    fn distance_is_rounded() {
        // hypot(3, 3) = 4.24 -> 4; hypot(5, 5) = 7.07 -> 7; hypot(1, 1) = 1.41 -> 1
        assert_eq!(sample_count(Point::new(0, 0), Point::new(3, 3)), 4);
        assert_eq!(sample_count(Point::new(0, 0), Point::new(5, 5)), 7);
        assert_eq!(sample_count(Point::new(0, 0), Point::new(1, 1)), 1);
        // hypot(3, 4) = 5 exactly
        assert_eq!(sample_count(Point::new(0, 0), Point::new(3, 4)), 5);
    }

    #[test]
    fn interpolation_truncates_toward_zero() {
        let pts: Vec<_> = interpolate(Point::new(0, 0), Point::new(-3, -4)).collect();
        assert_eq!(pts.len(), 5);
        // 0.2 * -3 = -0.6 -> 0, 0.2 * -4 = -0.8 -> 0
        assert_eq!(pts[1], Point::new(0, 0));
        assert_eq!(pts[2], Point::new(-1, -1));
    }

    #[test]
    fn stepped_skips_samples() {
        let pts: Vec<_> = stepped(Point::new(0, 0), Point::new(10, 0), 4).collect();
        assert_eq!(pts, vec![Point::new(0, 0), Point::new(4, 0), Point::new(8, 0)]);
        // Step 0 is treated as 1.
        assert_eq!(stepped(Point::new(0, 0), Point::new(3, 0), 0).count(), 3);
    }

    #[test]
    fn degenerate_segment_matches_single_stamp_for_every_style() {
        let c = Point::new(20, 20);
        for style in BrushStyle::ALL {
            let mut stroked = Canvas::new(40, 40, Color::WHITE);
            paint(&mut stroked, style, 5, (20, 20), (20, 20));

            let mut expected = Canvas::new(40, 40, Color::WHITE);
            match style {
                BrushStyle::Round => expected.stamp_disk(c, 5, RED),
                BrushStyle::Eraser => expected.stamp_disk(c, 5, Color::WHITE),
                BrushStyle::Square => expected.stamp_rect(Point::new(18, 18), 5, 5, RED),
                BrushStyle::Marker => expected.blend_disk(c, 5, RED, MARKER_ALPHA),
                BrushStyle::Spray => {
                    // Scatter is random; only its footprint is bounded.
                    assert!(changed(&stroked).iter().all(|p| p.distance(c) <= 5.0));
                    continue;
                }
            }
            assert_eq!(stroked.pixels(), expected.pixels(), "style {style}");
        }
    }

    #[test]
    fn round_never_overshoots_radius() {
        let mut canvas = Canvas::new(80, 80, Color::WHITE);
        let (a, b) = (Point::new(5, 7), Point::new(60, 41));
        paint(&mut canvas, BrushStyle::Round, 4, (a.x, a.y), (b.x, b.y));
        let samples: Vec<_> = interpolate(a, b).collect();
        let marks = changed(&canvas);
        assert!(!marks.is_empty());
        for m in marks {
            let nearest = samples.iter().map(|s| s.distance(m)).fold(f64::MAX, f64::min);
            assert!(nearest <= 4.0, "{m:?} is {nearest} from the path");
        }
    }

    #[test]
    fn zero_size_round_and_square_leave_one_pixel() {
        for style in [BrushStyle::Round, BrushStyle::Square] {
            let mut canvas = Canvas::new(10, 10, Color::WHITE);
            paint(&mut canvas, style, 0, (3, 4), (3, 4));
            assert_eq!(changed(&canvas), vec![Point::new(3, 4)], "style {style}");
        }
    }

    #[test]
    fn zero_size_spray_and_marker_do_not_panic() {
        let mut canvas = Canvas::new(10, 10, Color::WHITE);
        paint(&mut canvas, BrushStyle::Spray, 0, (3, 4), (8, 4));
        paint(&mut canvas, BrushStyle::Marker, 0, (3, 4), (8, 4));
        assert!(!changed(&canvas).is_empty());
    }

    #[test]
    fn fine_square_stroke_has_no_gaps() {
        let mut canvas = Canvas::new(120, 100, Color::WHITE);
        paint(&mut canvas, BrushStyle::Square, 1, (0, 50), (100, 50));
        let gaps: Vec<i32> = (0..100).filter(|&x| canvas.pixel(x, 50) == Some(Color::WHITE)).collect();
        assert!(gaps.is_empty(), "unpainted xs on row 50: {gaps:?}");
    }

    #[test]
    fn square_is_floor_centred() {
        let mut canvas = Canvas::new(20, 20, Color::WHITE);
        paint(&mut canvas, BrushStyle::Square, 3, (10, 10), (10, 10));
        let marks = changed(&canvas);
        assert_eq!(marks.len(), 9);
        assert!(marks.iter().all(|p| (9..12).contains(&p.x) && (9..12).contains(&p.y)));
    }

    #[test]
    fn spray_stays_within_scatter_radius() {
        let mut canvas = Canvas::new(120, 60, Color::WHITE);
        let (a, b) = (Point::new(10, 30), Point::new(100, 30));
        paint(&mut canvas, BrushStyle::Spray, 8, (a.x, a.y), (b.x, b.y));
        let samples: Vec<_> = interpolate(a, b).collect();
        let marks = changed(&canvas);
        assert!(marks.len() > 50);
        for m in &marks {
            let nearest = samples.iter().map(|s| s.distance(*m)).fold(f64::MAX, f64::min);
            assert!(nearest <= 8.0);
        }
        // Scatter lands on both sides of the path.
        assert!(marks.iter().any(|m| m.y < 30));
        assert!(marks.iter().any(|m| m.y > 30));
    }

    #[test]
    fn spray_is_reproducible_with_same_seed() {
        let mut a = Canvas::new(50, 50, Color::WHITE);
        let mut b = Canvas::new(50, 50, Color::WHITE);
        paint(&mut a, BrushStyle::Spray, 12, (5, 5), (45, 40));
        paint(&mut b, BrushStyle::Spray, 12, (5, 5), (45, 40));
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn marker_darkens_on_overlap() {
        let mut canvas = Canvas::new(30, 30, Color::WHITE);
        paint(&mut canvas, BrushStyle::Marker, 3, (15, 15), (15, 15));
        let once = canvas.pixel(15, 15).expect("inside");
        assert_ne!(once, Color::WHITE);
        assert_ne!(once, RED);
        paint(&mut canvas, BrushStyle::Marker, 3, (15, 15), (15, 15));
        let twice = canvas.pixel(15, 15).expect("inside");
        assert!(twice.g < once.g && twice.b < once.b);
    }

    #[test]
    fn marker_radius_has_a_floor() {
        let mut canvas = Canvas::new(20, 20, Color::WHITE);
        paint(&mut canvas, BrushStyle::Marker, 1, (10, 10), (10, 10));
        assert_ne!(canvas.pixel(12, 10), Some(Color::WHITE));
        assert_eq!(canvas.pixel(13, 10), Some(Color::WHITE));
    }

    #[test]
    fn eraser_restores_background_and_is_idempotent() {
        let mut canvas = Canvas::new(60, 60, Color::WHITE);
        paint(&mut canvas, BrushStyle::Round, 8, (0, 30), (59, 30));
        paint(&mut canvas, BrushStyle::Eraser, 5, (30, 10), (30, 50));

        // Every pixel in the eraser footprint is background.
        for s in interpolate(Point::new(30, 10), Point::new(30, 50)) {
            for dy in -5..=5 {
                for dx in -5..=5_i32 {
                    if dx * dx + dy * dy <= 25 {
                        let px = canvas.pixel(s.x + dx, s.y + dy);
                        assert!(px.is_none() || px == Some(Color::WHITE));
                    }
                }
            }
        }

        let once = canvas.pixels().to_vec();
        paint(&mut canvas, BrushStyle::Eraser, 5, (30, 10), (30, 50));
        assert_eq!(canvas.pixels(), &once[..]);
    }

    #[test]
    fn eraser_ignores_selected_color() {
        let seg = Segment::from_brush(
            Point::new(0, 0),
            Point::new(1, 1),
            brush(BrushStyle::Eraser, 3),
            Color::WHITE,
        );
        assert_eq!(seg.brush.color, Color::WHITE);
        let seg = Segment::from_brush(Point::new(0, 0), Point::new(1, 1), brush(BrushStyle::Round, 3), Color::WHITE);
        assert_eq!(seg.brush.color, RED);
    }
}
