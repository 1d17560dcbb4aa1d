//! CPU rasterization primitives.
//!
//! Every primitive walks the pixels of its padded bounding box and derives
//! per-pixel coverage from a signed distance to the ideal geometry, with
//! smoothstep antialiasing across a one-pixel band. Painted coverage is
//! composited source-over; erase coverage is applied as a hard mask so that
//! repeated erasure of the same region is byte-for-byte idempotent.

use super::color::Color;
use image::{Rgba, RgbaImage};

/// How new pixels combine with existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Source-over alpha blending (normal painting).
    Paint,
    /// Destination-out: covered pixels become fully transparent.
    Erase,
}

/// Coverage below this threshold is treated as empty and skipped.
const COVERAGE_EPSILON: f64 = 1.0 / 510.0;

/// Distances below this are considered degenerate geometry.
const GEOMETRY_EPSILON: f64 = 1e-9;

/// Draws a round-capped line segment.
pub fn stroke_segment(
    img: &mut RgbaImage,
    p0: (f64, f64),
    p1: (f64, f64),
    color: Color,
    width: f64,
    mode: Composite,
) {
    if width <= 0.0 || crate::util::distance(p0, p1) < GEOMETRY_EPSILON {
        return;
    }

    let half = width / 2.0;
    composite_band(
        img,
        &[p0, p1],
        half + 1.0,
        color,
        mode,
        |x, y| sdf_segment((x, y), p0, p1) - half,
    );
}

/// Fills a disk centered at `center`. This is the eraser stamp when `mode`
/// is [`Composite::Erase`].
pub fn fill_circle(
    img: &mut RgbaImage,
    center: (f64, f64),
    radius: f64,
    color: Color,
    mode: Composite,
) {
    if radius <= 0.0 {
        return;
    }

    composite_band(
        img,
        &[center],
        radius + 1.0,
        color,
        mode,
        |x, y| crate::util::distance((x, y), center) - radius,
    );
}

/// Draws a circle outline of the given stroke width.
pub fn stroke_circle(
    img: &mut RgbaImage,
    center: (f64, f64),
    radius: f64,
    color: Color,
    width: f64,
) {
    if radius <= 0.0 || width <= 0.0 {
        return;
    }

    let half = width / 2.0;
    composite_band(
        img,
        &[center],
        radius + half + 1.0,
        color,
        Composite::Paint,
        |x, y| (crate::util::distance((x, y), center) - radius).abs() - half,
    );
}

/// Draws an axis-aligned rectangle outline with corners at `a` and `b`.
pub fn stroke_rect(img: &mut RgbaImage, a: (f64, f64), b: (f64, f64), color: Color, width: f64) {
    if width <= 0.0 {
        return;
    }

    let hx = (b.0 - a.0).abs() / 2.0;
    let hy = (b.1 - a.1).abs() / 2.0;
    if hx < GEOMETRY_EPSILON && hy < GEOMETRY_EPSILON {
        return;
    }

    let cx = (a.0 + b.0) / 2.0;
    let cy = (a.1 + b.1) / 2.0;
    let half = width / 2.0;
    composite_band(
        img,
        &[a, b],
        half + 1.0,
        color,
        Composite::Paint,
        |x, y| sdf_box(x - cx, y - cy, hx, hy).abs() - half,
    );
}

/// Draws a cubic Bézier curve as a round-joined polyline stroke.
///
/// The curve is flattened adaptively: step count scales with the chord
/// length so short flicks stay cheap and long sweeps stay smooth.
pub fn stroke_bezier(
    img: &mut RgbaImage,
    p0: (f64, f64),
    c1: (f64, f64),
    c2: (f64, f64),
    p1: (f64, f64),
    color: Color,
    width: f64,
) {
    if width <= 0.0 {
        return;
    }

    let chord = crate::util::distance(p0, p1);
    if chord < GEOMETRY_EPSILON {
        return;
    }

    let steps = (chord / 2.0).ceil().clamp(8.0, 64.0) as usize;
    let mut prev = p0;
    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        let point = cubic_point(p0, c1, c2, p1, t);
        stroke_segment(img, prev, point, color, width, Composite::Paint);
        prev = point;
    }
}

/// Evaluates a cubic Bézier at parameter `t`.
fn cubic_point(
    p0: (f64, f64),
    c1: (f64, f64),
    c2: (f64, f64),
    p1: (f64, f64),
    t: f64,
) -> (f64, f64) {
    let u = 1.0 - t;
    let w0 = u * u * u;
    let w1 = 3.0 * u * u * t;
    let w2 = 3.0 * u * t * t;
    let w3 = t * t * t;
    (
        w0 * p0.0 + w1 * c1.0 + w2 * c2.0 + w3 * p1.0,
        w0 * p0.1 + w1 * c1.1 + w2 * c2.1 + w3 * p1.1,
    )
}

/// Walks the padded bounding box of `anchors` and composites per-pixel
/// coverage derived from `band(x, y)` (negative = fully inside the stroke).
fn composite_band<F>(
    img: &mut RgbaImage,
    anchors: &[(f64, f64)],
    pad: f64,
    color: Color,
    mode: Composite,
    band: F,
) where
    F: Fn(f64, f64) -> f64,
{
    let (width, height) = img.dimensions();
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;
    for &(x, y) in anchors {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    let x0 = ((min_x - pad).floor() as i64).max(0) as u32;
    let y0 = ((min_y - pad).floor() as i64).max(0) as u32;
    let x1 = (((max_x + pad).ceil() as i64).max(0) as u32).min(width);
    let y1 = (((max_y + pad).ceil() as i64).max(0) as u32).min(height);

    for y in y0..y1 {
        let py = y as f64 + 0.5;
        for x in x0..x1 {
            let px = x as f64 + 0.5;
            let d = band(px, py);

            match mode {
                Composite::Paint => {
                    let coverage = smoothstep(0.5, -0.5, d);
                    if coverage > COVERAGE_EPSILON {
                        blend_over(img.get_pixel_mut(x, y), color, coverage);
                    }
                }
                Composite::Erase => {
                    // Hard mask: majority-covered pixels drop to transparent,
                    // so a second pass over the same region changes nothing.
                    if d < 0.0 {
                        *img.get_pixel_mut(x, y) = Rgba([0, 0, 0, 0]);
                    }
                }
            }
        }
    }
}

/// Source-over blend of `color` at the given coverage onto a straight-alpha
/// RGBA8 pixel.
fn blend_over(px: &mut Rgba<u8>, color: Color, coverage: f64) {
    let sa = (color.a * coverage).clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }

    let da = px[3] as f64 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        *px = Rgba([0, 0, 0, 0]);
        return;
    }

    let channel = |src: f64, dst: u8| -> u8 {
        let dst = dst as f64 / 255.0;
        let out = (src * sa + dst * da * (1.0 - sa)) / out_a;
        (out * 255.0).round().clamp(0.0, 255.0) as u8
    };

    *px = Rgba([
        channel(color.r, px[0]),
        channel(color.g, px[1]),
        channel(color.b, px[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ]);
}

/// Distance from `p` to the segment `a`-`b`.
fn sdf_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let len_sq = dx * dx + dy * dy;
    if len_sq < GEOMETRY_EPSILON {
        return crate::util::distance(p, a);
    }
    let t = (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0);
    crate::util::distance(p, (a.0 + t * dx, a.1 + t * dy))
}

/// Signed distance to a box centred at the origin with half-extents (hx, hy).
fn sdf_box(px: f64, py: f64, hx: f64, hy: f64) -> f64 {
    let dx = px.abs() - hx;
    let dy = py.abs() - hy;
    let outside = (dx.max(0.0).powi(2) + dy.max(0.0).powi(2)).sqrt();
    let inside = dx.max(dy).min(0.0);
    outside + inside
}

/// Smoothstep between edge0 and edge1.
fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    fn white_canvas(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, WHITE.to_rgba8())
    }

    #[test]
    fn segment_paints_only_near_its_geometry() {
        let mut img = white_canvas(60, 60);
        stroke_segment(&mut img, (10.0, 30.0), (50.0, 30.0), RED, 4.0, Composite::Paint);

        // On the centerline: fully red.
        assert_eq!(*img.get_pixel(30, 30), RED.to_rgba8());
        // Far off the line: untouched.
        assert_eq!(*img.get_pixel(30, 10), WHITE.to_rgba8());
        // Beyond the round cap: untouched.
        assert_eq!(*img.get_pixel(56, 30), WHITE.to_rgba8());
    }

    #[test]
    fn zero_length_segment_renders_nothing() {
        let mut img = white_canvas(20, 20);
        let before = img.clone();
        stroke_segment(&mut img, (10.0, 10.0), (10.0, 10.0), RED, 6.0, Composite::Paint);
        assert_eq!(img.as_raw(), before.as_raw());
    }

    #[test]
    fn erase_is_a_hard_mask() {
        let mut img = white_canvas(40, 40);
        fill_circle(&mut img, (20.0, 20.0), 5.0, RED, Composite::Erase);

        assert_eq!(*img.get_pixel(20, 20), Rgba([0, 0, 0, 0]));
        // No partially-faded pixels anywhere: either untouched or fully clear.
        for px in img.pixels() {
            assert!(px[3] == 0 || px[3] == 255);
        }
    }

    #[test]
    fn circle_outline_leaves_interior_untouched() {
        let mut img = white_canvas(80, 80);
        stroke_circle(&mut img, (40.0, 40.0), 20.0, RED, 2.0);

        assert_eq!(*img.get_pixel(40, 40), WHITE.to_rgba8());
        // A point on the ring is red.
        assert_eq!(*img.get_pixel(60, 40), RED.to_rgba8());
    }

    #[test]
    fn degenerate_shapes_render_nothing() {
        let mut img = white_canvas(30, 30);
        let before = img.clone();
        stroke_circle(&mut img, (15.0, 15.0), 0.0, RED, 2.0);
        fill_circle(&mut img, (15.0, 15.0), 0.0, RED, Composite::Paint);
        stroke_rect(&mut img, (15.0, 15.0), (15.0, 15.0), RED, 2.0);
        stroke_bezier(
            &mut img,
            (15.0, 15.0),
            (15.0, 15.0),
            (15.0, 15.0),
            (15.0, 15.0),
            RED,
            2.0,
        );
        assert_eq!(img.as_raw(), before.as_raw());
    }

    #[test]
    fn rect_outline_covers_all_four_edges() {
        let mut img = white_canvas(60, 60);
        stroke_rect(&mut img, (10.0, 10.0), (50.0, 40.0), RED, 2.0);

        assert_eq!(*img.get_pixel(30, 10), RED.to_rgba8()); // top
        assert_eq!(*img.get_pixel(30, 40), RED.to_rgba8()); // bottom
        assert_eq!(*img.get_pixel(10, 25), RED.to_rgba8()); // left
        assert_eq!(*img.get_pixel(50, 25), RED.to_rgba8()); // right
        assert_eq!(*img.get_pixel(30, 25), WHITE.to_rgba8()); // interior
    }
}
