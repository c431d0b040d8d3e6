// Software rasterization: pixel pokes, whole-surface fills, and the
// round-capped line segments that strokes are made of. Everything writes
// straight into the Canvas pixel buffer; coordinates outside the surface
// are clipped, never an error.

use crate::types::{Canvas, Point, StrokeStyle};

/// Fill the whole surface with one color.
/// Visual: the drawing vanishes and the surface becomes a flat sheet.
pub fn fill(canvas: &mut Canvas, color: u32) {
    for px in &mut canvas.pixels {
        *px = color;
    }
}

/// Put a pixel on the canvas if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
pub fn put_pixel(canvas: &mut Canvas, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= canvas.width || y >= canvas.height {
        return;
    }
    let idx = y * canvas.width + x;
    canvas.pixels[idx] = color;
}

/// Read the pixel at (x,y), or None outside the surface.
#[inline]
pub fn pixel_at(canvas: &Canvas, x: i32, y: i32) -> Option<u32> {
    if x < 0 || y < 0 {
        return None;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= canvas.width || y >= canvas.height {
        return None;
    }
    Some(canvas.pixels[y * canvas.width + x])
}

/// Stamp one straight segment from `from` to `to`.
/// The walk between the endpoints is Bresenham; a filled disc of radius
/// width/2 is stamped at every visited pixel, which gives the stroke its
/// thickness and its round caps and joins in one go. `from == to`
/// degenerates to a single disc: the dot a stroke's first move leaves.
/// Visual: a smooth ink segment appears, rounded at both ends.
pub fn stroke_segment(canvas: &mut Canvas, from: Point, to: Point, style: StrokeStyle) {
    let radius = style.width / 2.0;
    let (mut x0, mut y0) = (from.x.round() as i32, from.y.round() as i32);
    let (x1, y1) = (to.x.round() as i32, to.y.round() as i32);

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp_disc(canvas, x0, y0, radius, style.color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Fill a disc centered at (cx,cy) by scanning its bounding box.
/// A radius at or below half a pixel still covers the center pixel, so a
/// width-1 style degenerates to a plain one-pixel Bresenham line.
fn stamp_disc(canvas: &mut Canvas, cx: i32, cy: i32, radius: f32, color: u32) {
    if radius <= 0.5 {
        put_pixel(canvas, cx, cy, color);
        return;
    }
    let r = radius.ceil() as i32;
    let r2 = radius * radius;
    for y in (cy - r)..=(cy + r) {
        for x in (cx - r)..=(cx + r) {
            let ox = (x - cx) as f32;
            let oy = (y - cy) as f32;
            if ox * ox + oy * oy > r2 {
                continue; // outside the disc
            }
            put_pixel(canvas, x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: u32 = 0x00FF_FFFF;
    const BLACK: u32 = 0x0000_0000;

    fn blank(width: usize, height: usize) -> Canvas {
        Canvas {
            width,
            height,
            pixels: vec![WHITE; width * height],
        }
    }

    fn ink() -> StrokeStyle {
        StrokeStyle { color: BLACK, width: 3.0 }
    }

    #[test]
    fn put_pixel_clips_out_of_bounds() {
        let mut canvas = blank(8, 8);
        put_pixel(&mut canvas, -1, 3, BLACK);
        put_pixel(&mut canvas, 3, -1, BLACK);
        put_pixel(&mut canvas, 8, 3, BLACK);
        put_pixel(&mut canvas, 3, 8, BLACK);
        assert!(canvas.pixels.iter().all(|&px| px == WHITE));
    }

    #[test]
    fn fill_covers_every_pixel() {
        let mut canvas = blank(16, 4);
        fill(&mut canvas, 0x0012_3456);
        assert!(canvas.pixels.iter().all(|&px| px == 0x0012_3456));
    }

    #[test]
    fn vertical_segment_covers_every_row() {
        let mut canvas = blank(64, 64);
        stroke_segment(&mut canvas, Point::new(10.0, 10.0), Point::new(10.0, 40.0), ink());
        for y in 10..=40 {
            assert_eq!(pixel_at(&canvas, 10, y), Some(BLACK), "row {y} missing ink");
        }
        // Nowhere near the segment: untouched.
        assert_eq!(pixel_at(&canvas, 30, 25), Some(WHITE));
    }

    #[test]
    fn default_width_spans_three_pixels() {
        let mut canvas = blank(64, 64);
        stroke_segment(&mut canvas, Point::new(10.0, 20.0), Point::new(30.0, 20.0), ink());
        for y in 19..=21 {
            assert_eq!(pixel_at(&canvas, 15, y), Some(BLACK));
        }
        assert_eq!(pixel_at(&canvas, 15, 17), Some(WHITE));
        assert_eq!(pixel_at(&canvas, 15, 23), Some(WHITE));
    }

    #[test]
    fn zero_length_segment_stamps_a_dot() {
        let mut canvas = blank(16, 16);
        stroke_segment(&mut canvas, Point::new(5.0, 5.0), Point::new(5.0, 5.0), ink());
        assert_eq!(pixel_at(&canvas, 5, 5), Some(BLACK));
        assert_eq!(pixel_at(&canvas, 4, 5), Some(BLACK));
        assert_eq!(pixel_at(&canvas, 5, 6), Some(BLACK));
        assert_eq!(pixel_at(&canvas, 5, 8), Some(WHITE));
        assert_eq!(pixel_at(&canvas, 8, 5), Some(WHITE));
    }

    #[test]
    fn width_one_degenerates_to_a_single_pixel_line() {
        let mut canvas = blank(32, 32);
        let thin = StrokeStyle { color: BLACK, width: 1.0 };
        stroke_segment(&mut canvas, Point::new(4.0, 10.0), Point::new(20.0, 10.0), thin);
        for x in 4..=20 {
            assert_eq!(pixel_at(&canvas, x, 10), Some(BLACK));
        }
        assert_eq!(pixel_at(&canvas, 12, 9), Some(WHITE));
        assert_eq!(pixel_at(&canvas, 12, 11), Some(WHITE));
    }

    #[test]
    fn segment_near_the_edge_clips_instead_of_panicking() {
        let mut canvas = blank(20, 20);
        stroke_segment(&mut canvas, Point::new(-5.0, 0.0), Point::new(25.0, 0.0), ink());
        assert_eq!(pixel_at(&canvas, 0, 0), Some(BLACK));
        assert_eq!(pixel_at(&canvas, 19, 1), Some(BLACK));
    }

    #[test]
    fn half_pixel_coordinates_round_to_the_nearest_pixel() {
        let mut canvas = blank(16, 16);
        let thin = StrokeStyle { color: BLACK, width: 1.0 };
        stroke_segment(&mut canvas, Point::new(3.4, 7.6), Point::new(3.4, 7.6), thin);
        assert_eq!(pixel_at(&canvas, 3, 8), Some(BLACK));
        assert_eq!(pixel_at(&canvas, 3, 7), Some(WHITE));
    }
}
