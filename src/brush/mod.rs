//! Brush engine: turns a live pointer-sample stream into pixels.
//!
//! The marker tool is dispatched by [`BrushStyle`]: a plain full-opacity
//! segment, a jittered multi-pass "crayon", or a flowing Bézier "ink". The
//! eraser is style-independent. Stylized brushes keep a short rolling window
//! of recent samples ([`StrokeWindow`]) that exists only for the duration of
//! one gesture.
//!
//! Randomness (jitter offsets, synthetic pressure) comes from an owned
//! [`StdRng`] so tests can seed the engine and get reproducible strokes.

use crate::draw::{Color, Composite, Surface};
use crate::util::{self, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Rendering style for the marker tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushStyle {
    /// Plain full-opacity stroke at the configured width (default)
    #[default]
    Normal,
    /// Jittered, layered sub-segments at reduced opacity
    Crayon,
    /// Variable-width Bézier stroke that curves with pointer speed
    Ink,
}

impl BrushStyle {
    /// Parses a style name from the config file (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "crayon" => Some(Self::Crayon),
            "ink" => Some(Self::Ink),
            _ => None,
        }
    }

    /// Human-readable style name (status displays, logs).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Crayon => "crayon",
            Self::Ink => "ink",
        }
    }

    /// Stroke window capacity for this style.
    ///
    /// Normal strokes only ever look one sample back, so a single slot is
    /// enough; the stylized brushes re-render a short look-back window.
    pub fn window_capacity(&self) -> usize {
        match self {
            Self::Normal => 1,
            Self::Crayon => 4,
            Self::Ink => 5,
        }
    }
}

/// One pointer sample in surface space.
///
/// Pressure is synthetic: fixed at 1.0 at gesture start, randomized per
/// sample by the stylized brushes. It is stored with the sample but the ink
/// renderer does not currently consume it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSample {
    pub x: f64,
    pub y: f64,
    /// Simulated pen pressure in [0, 1]
    pub pressure: f64,
}

impl PointSample {
    fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Bounded FIFO of the most recent samples of the current gesture.
pub type StrokeWindow = VecDeque<PointSample>;

/// Fraction of the line width used as the per-axis crayon jitter bound.
const CRAYON_JITTER: f64 = 0.25;

/// Sub-segments drawn per window pair by the crayon brush.
const CRAYON_PASSES: usize = 3;

/// Opacity of crayon sub-segments.
const CRAYON_OPACITY: f64 = 0.7;

/// Control-point rotation away from the segment direction for ink flow.
const INK_FLOW_ANGLE: f64 = std::f64::consts::FRAC_PI_6;

/// Control-point distance as a fraction of the segment length.
const INK_FLOW_REACH: f64 = 0.3;

/// Consumes pointer samples and emits raster operations onto the surface.
pub struct BrushEngine {
    window: StrokeWindow,
    rng: StdRng,
}

impl BrushEngine {
    /// Creates an engine using randomness from the operating system.
    pub fn new() -> Self {
        Self {
            window: StrokeWindow::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an engine with a fixed seed (deterministic strokes for tests).
    pub fn from_seed(seed: u64) -> Self {
        Self {
            window: StrokeWindow::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Current window contents (read-only; used by tests and diagnostics).
    pub fn window(&self) -> &StrokeWindow {
        &self.window
    }

    /// Starts a gesture: resets the window to the single anchor sample at
    /// full pressure.
    pub fn begin_stroke(&mut self, anchor: (f64, f64)) {
        self.window.clear();
        self.window.push_back(PointSample {
            x: anchor.0,
            y: anchor.1,
            pressure: 1.0,
        });
    }

    /// Re-seeds the window after the pointer re-enters the surface
    /// mid-gesture, so no spurious segment joins the exit and entry points.
    pub fn reseed(&mut self, position: (f64, f64)) {
        self.begin_stroke(position);
    }

    /// Ends a gesture: the window is discarded.
    pub fn end_stroke(&mut self) {
        self.window.clear();
    }

    /// Renders one marker movement from `last` to `position`.
    ///
    /// Returns the damage rectangle of whatever was painted, or `None` when
    /// nothing visible was produced (degenerate movement).
    pub fn stroke_to(
        &mut self,
        surface: &mut Surface,
        last: (f64, f64),
        position: (f64, f64),
        style: BrushStyle,
        color: Color,
        width: f64,
    ) -> Option<Rect> {
        match style {
            BrushStyle::Normal => {
                surface.stroke_segment(last, position, color, width, Composite::Paint);
                Rect::from_points_padded(&[last, position], width / 2.0 + 1.0)
            }
            BrushStyle::Crayon => self.crayon_to(surface, position, color, width),
            BrushStyle::Ink => self.ink_to(surface, position, color, width),
        }
    }

    /// Erases a disk of diameter `width` at `position`.
    ///
    /// Style-independent and windowless: the eraser never looks back.
    pub fn erase_at(&mut self, surface: &mut Surface, position: (f64, f64), width: f64) -> Option<Rect> {
        let radius = width / 2.0;
        surface.fill_circle(position, radius, crate::draw::TRANSPARENT, Composite::Erase);
        Rect::from_points_padded(&[position], radius + 1.0)
    }

    /// Crayon: push the sample, then redraw every consecutive window pair as
    /// three jittered sub-segments at reduced opacity. Redrawing the whole
    /// window on every sample is what layers the texture up as the stroke
    /// progresses.
    fn crayon_to(
        &mut self,
        surface: &mut Surface,
        position: (f64, f64),
        color: Color,
        width: f64,
    ) -> Option<Rect> {
        let pressure = self.rng.gen_range(0.5..1.0);
        self.push_sample(position, pressure, BrushStyle::Crayon);

        let faded = color.with_alpha_scaled(CRAYON_OPACITY);
        let mut touched: Vec<(f64, f64)> = Vec::with_capacity(self.window.len());
        touched.extend(self.window.iter().map(PointSample::position));

        for i in 1..self.window.len() {
            let from = self.window[i - 1].position();
            let to = self.window[i].position();
            for _ in 0..CRAYON_PASSES {
                // One offset per sub-segment, applied to both endpoints, so
                // the sub-segment stays parallel to the true path.
                let ox = self.rng.gen_range(-0.5..0.5) * width * 2.0 * CRAYON_JITTER;
                let oy = self.rng.gen_range(-0.5..0.5) * width * 2.0 * CRAYON_JITTER;
                surface.stroke_segment(
                    (from.0 + ox, from.1 + oy),
                    (to.0 + ox, to.1 + oy),
                    faded,
                    width,
                    Composite::Paint,
                );
            }
        }

        Rect::from_points_padded(&touched, width * CRAYON_JITTER + width / 2.0 + 1.0)
    }

    /// Ink: push the sample with randomized pressure, then draw a cubic
    /// Bézier between the last two samples whose width swells with pointer
    /// speed and whose control points bow away from the travel direction.
    fn ink_to(
        &mut self,
        surface: &mut Surface,
        position: (f64, f64),
        color: Color,
        width: f64,
    ) -> Option<Rect> {
        let pressure = self.rng.gen_range(0.0..1.0);
        self.push_sample(position, pressure, BrushStyle::Ink);

        if self.window.len() < 2 {
            return None;
        }

        let prev = self.window[self.window.len() - 2].position();
        let current = self.window[self.window.len() - 1].position();
        let dist = util::distance(prev, current);
        if dist <= f64::EPSILON {
            // Zero travel: nothing to render, and no angle to divide out of.
            return None;
        }

        let angle = util::segment_angle(prev, current);
        let flow_width = width * (1.0 + 0.5 * (0.5 * dist).sin());
        let reach = INK_FLOW_REACH * dist;
        let c1 = (
            prev.0 + (angle - INK_FLOW_ANGLE).cos() * reach,
            prev.1 + (angle - INK_FLOW_ANGLE).sin() * reach,
        );
        let c2 = (
            current.0 - (angle + INK_FLOW_ANGLE).cos() * reach,
            current.1 - (angle + INK_FLOW_ANGLE).sin() * reach,
        );

        surface.stroke_bezier(prev, c1, c2, current, color, flow_width);
        Rect::from_points_padded(&[prev, c1, c2, current], flow_width / 2.0 + 1.0)
    }

    /// Appends a sample and evicts the oldest entries beyond the style's
    /// window capacity (FIFO).
    fn push_sample(&mut self, position: (f64, f64), pressure: f64, style: BrushStyle) {
        self.window.push_back(PointSample {
            x: position.0,
            y: position.1,
            pressure,
        });
        while self.window.len() > style.window_capacity() {
            self.window.pop_front();
        }
    }
}

impl Default for BrushEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    fn surface() -> Surface {
        Surface::new(120, 120).unwrap()
    }

    #[test]
    fn style_names_parse_case_insensitively() {
        assert_eq!(BrushStyle::parse("Crayon"), Some(BrushStyle::Crayon));
        assert_eq!(BrushStyle::parse("INK"), Some(BrushStyle::Ink));
        assert_eq!(BrushStyle::parse("normal"), Some(BrushStyle::Normal));
        assert!(BrushStyle::parse("airbrush").is_none());
    }

    #[test]
    fn begin_stroke_seeds_full_pressure_anchor() {
        let mut engine = BrushEngine::from_seed(1);
        engine.begin_stroke((10.0, 20.0));
        assert_eq!(engine.window().len(), 1);
        assert_eq!(engine.window()[0].pressure, 1.0);
        assert_eq!(engine.window()[0].position(), (10.0, 20.0));
    }

    #[test]
    fn crayon_window_evicts_fifo_at_capacity() {
        let mut engine = BrushEngine::from_seed(7);
        let mut surface = surface();
        engine.begin_stroke((0.0, 50.0));
        for i in 1..=6 {
            engine.stroke_to(
                &mut surface,
                (0.0, 50.0),
                (i as f64 * 10.0, 50.0),
                BrushStyle::Crayon,
                BLACK,
                6.0,
            );
        }
        assert_eq!(engine.window().len(), 4);
        // Oldest surviving entry is sample #3 (anchor plus samples 1-2 evicted).
        assert_eq!(engine.window()[0].position(), (30.0, 50.0));
        assert_eq!(engine.window()[3].position(), (60.0, 50.0));
    }

    #[test]
    fn ink_window_caps_at_five_samples() {
        let mut engine = BrushEngine::from_seed(7);
        let mut surface = surface();
        engine.begin_stroke((0.0, 0.0));
        for i in 1..=8 {
            engine.stroke_to(
                &mut surface,
                (0.0, 0.0),
                (i as f64 * 5.0, i as f64 * 5.0),
                BrushStyle::Ink,
                BLACK,
                4.0,
            );
        }
        assert_eq!(engine.window().len(), 5);
    }

    #[test]
    fn crayon_pressure_is_in_upper_half_and_ink_in_unit_range() {
        let mut engine = BrushEngine::from_seed(99);
        let mut surface = surface();
        engine.begin_stroke((10.0, 10.0));
        for i in 1..=20 {
            engine.stroke_to(
                &mut surface,
                (10.0, 10.0),
                (10.0 + i as f64, 10.0),
                BrushStyle::Crayon,
                BLACK,
                4.0,
            );
        }
        assert!(
            engine
                .window()
                .iter()
                .all(|s| (0.5..1.0).contains(&s.pressure))
        );

        engine.begin_stroke((10.0, 10.0));
        for i in 1..=20 {
            engine.stroke_to(
                &mut surface,
                (10.0, 10.0),
                (10.0 + i as f64, 40.0),
                BrushStyle::Ink,
                BLACK,
                4.0,
            );
        }
        assert!(
            engine
                .window()
                .iter()
                .skip(1)
                .all(|s| (0.0..1.0).contains(&s.pressure))
        );
    }

    #[test]
    fn crayon_jitter_stays_within_quarter_width_of_the_path() {
        let mut engine = BrushEngine::from_seed(42);
        let mut surface = surface();
        let width = 10.0;
        let path_y = 60.0;

        engine.begin_stroke((10.0, path_y));
        let mut last = (10.0, path_y);
        for i in 1..=10 {
            let pos = (10.0 + i as f64 * 8.0, path_y);
            engine.stroke_to(&mut surface, last, pos, BrushStyle::Crayon, BLACK, width);
            last = pos;
        }

        // Every painted pixel lies within jitter bound (2.5) + stroke radius
        // (5.0) + antialias margin of the true horizontal path.
        let limit = width * CRAYON_JITTER + width / 2.0 + 1.0;
        for (_, y, px) in surface.pixels().enumerate_pixels() {
            if *px != WHITE.to_rgba8() {
                assert!(
                    (y as f64 + 0.5 - path_y).abs() <= limit,
                    "pixel at y={y} outside jitter bound"
                );
            }
        }
    }

    #[test]
    fn ink_needs_two_samples_and_guards_zero_distance() {
        let mut engine = BrushEngine::from_seed(3);
        let mut surface = surface();
        let clean = surface.snapshot();

        // First sample after a reseed: nothing to connect yet.
        engine.end_stroke();
        assert!(
            engine
                .stroke_to(&mut surface, (30.0, 30.0), (30.0, 30.0), BrushStyle::Ink, BLACK, 4.0)
                .is_none()
        );
        // Repeated position: zero distance, nothing rendered.
        assert!(
            engine
                .stroke_to(&mut surface, (30.0, 30.0), (30.0, 30.0), BrushStyle::Ink, BLACK, 4.0)
                .is_none()
        );
        assert_eq!(surface.snapshot(), clean);
    }

    #[test]
    fn eraser_ignores_the_window_and_clears_pixels() {
        let mut engine = BrushEngine::from_seed(5);
        let mut surface = surface();
        surface.fill(BLACK);

        engine.end_stroke();
        let damage = engine.erase_at(&mut surface, (60.0, 60.0), 20.0);
        assert!(damage.is_some());
        assert!(engine.window().is_empty());
        assert_eq!(surface.pixels().get_pixel(60, 60)[3], 0);
    }

    #[test]
    fn seeded_engines_produce_identical_strokes() {
        let mut a = BrushEngine::from_seed(1234);
        let mut b = BrushEngine::from_seed(1234);
        let mut sa = surface();
        let mut sb = surface();

        for engine_surface in [(&mut a, &mut sa), (&mut b, &mut sb)] {
            let (engine, surface) = engine_surface;
            engine.begin_stroke((20.0, 20.0));
            let mut last = (20.0, 20.0);
            for i in 1..=6 {
                let pos = (20.0 + i as f64 * 10.0, 20.0 + i as f64 * 5.0);
                engine.stroke_to(surface, last, pos, BrushStyle::Crayon, BLACK, 8.0);
                last = pos;
            }
        }

        assert_eq!(sa.snapshot(), sb.snapshot());
    }
}
