//! Property tests for canvas primitives: compositing identities, clipping,
//! and degenerate shapes.

use neonecho_raster::{blend_over, BlendMode, Canvas, Rgba};

// ============================================================================
// Helpers
// ============================================================================

/// A small spread of channel values covering the edges and the middle.
const SAMPLES: [u8; 6] = [0, 1, 64, 127, 200, 255];

fn sample_pixels() -> Vec<Rgba> {
    let mut out = Vec::new();
    for &r in &SAMPLES {
        for &a in &SAMPLES {
            out.push(Rgba::new(r, 255 - r, r / 2, a));
        }
    }
    out
}

fn noisy_canvas(width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height, Rgba::TRANSPARENT).unwrap();
    canvas.map_pixels(|x, y, _| {
        Rgba::new(
            (x * 37 + y * 11) as u8,
            (x * 5 + y * 91) as u8,
            (x * y) as u8,
            (x * 17 + y * 23) as u8,
        )
    });
    canvas
}

fn touched(before: &Canvas, after: &Canvas) -> Vec<(u32, u32)> {
    let width = before.width();
    before
        .pixels()
        .iter()
        .zip(after.pixels())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| (i as u32 % width, i as u32 / width))
        .collect()
}

// ============================================================================
// Compositing
// ============================================================================

#[test]
fn test_opaque_source_wins() {
    for dst in sample_pixels() {
        for src in sample_pixels().into_iter().map(|p| p.with_alpha(255)) {
            let mut canvas = Canvas::new(1, 1, dst).unwrap();
            canvas.set_pixel(0, 0, src, BlendMode::Over);
            assert_eq!(canvas.get(0, 0), Some(Rgba::new(src.r, src.g, src.b, 255)));
        }
    }
}

#[test]
fn test_zero_alpha_source_is_noop() {
    for dst in sample_pixels() {
        for src in sample_pixels().into_iter().map(|p| p.with_alpha(0)) {
            let mut canvas = Canvas::new(1, 1, dst).unwrap();
            canvas.set_pixel(0, 0, src, BlendMode::Over);
            assert_eq!(canvas.get(0, 0), Some(dst));
        }
    }
}

#[test]
fn test_replace_always_yields_source() {
    for dst in sample_pixels() {
        for src in sample_pixels() {
            let mut canvas = Canvas::new(1, 1, dst).unwrap();
            canvas.set_pixel(0, 0, src, BlendMode::Replace);
            assert_eq!(canvas.get(0, 0), Some(src));
        }
    }
}

#[test]
fn test_over_never_lowers_alpha() {
    for dst in sample_pixels() {
        for src in sample_pixels() {
            let out = blend_over(dst, src);
            if src.a > 0 {
                assert!(out.a >= dst.a.max(src.a) || out.a == 255);
            }
        }
    }
}

// ============================================================================
// Clipping
// ============================================================================

#[test]
fn test_far_outside_primitives_leave_canvas_untouched() {
    let original = noisy_canvas(10, 10);
    let mut canvas = original.clone();
    let color = Rgba::new(30, 245, 255, 180);

    canvas.fill_rect(-50, -50, -1, -1, color, BlendMode::Replace);
    canvas.fill_rect(10, 0, 1_000, 10, color, BlendMode::Over);
    canvas.fill_rect(i32::MIN, i32::MIN, -1, i32::MAX, color, BlendMode::Replace);
    canvas.draw_rect_outline(-40, -40, -20, -20, color);
    canvas.draw_rect_outline(20, 20, 60, 60, color);
    canvas.draw_line(-30, -5, -2, -90, color);
    canvas.draw_line(11, 11, 40, 12, color);
    canvas.draw_filled_circle(-20, 5, 6, color);
    canvas.draw_filled_circle(5, 40, 20, color);

    canvas.draw_rect_outline(i32::MIN, i32::MIN, i32::MAX, -1, color);
    canvas.draw_rect_outline(i32::MIN, 20, i32::MAX, i32::MAX, color);
    canvas.draw_line(i32::MIN, -5, i32::MAX, -5, color);
    canvas.draw_line(-1, 11, i32::MIN, i32::MAX, color);
    canvas.draw_line(i32::MAX, i32::MAX, i32::MIN, i32::MAX, color);
    canvas.draw_filled_circle(i32::MAX - 1, 5, 5, color);
    canvas.draw_filled_circle(5, i32::MIN + 1, 5, color);
    canvas.draw_filled_circle(i32::MIN, i32::MIN, i32::MAX, color);
    canvas.draw_filled_circle(i32::MAX, i32::MAX, 0, color);

    assert_eq!(canvas, original);
}

/// Shapes whose far corners sit at the edge of the `i32` range still draw
/// their visible part exactly.
#[test]
fn test_extreme_coordinates_draw_visible_part() {
    let color = Rgba::rgb(200, 40, 90);
    let blank = Canvas::new(10, 10, Rgba::TRANSPARENT).unwrap();

    // Only the top edge of this outline is on the canvas.
    let mut canvas = blank.clone();
    canvas.draw_rect_outline(0, 0, 5, i32::MIN, color);
    assert_eq!(
        touched(&blank, &canvas),
        vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]
    );

    // Only the left edge of this one is.
    let mut canvas = blank.clone();
    canvas.draw_rect_outline(0, 0, i32::MIN, 5, color);
    assert_eq!(
        touched(&blank, &canvas),
        vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]
    );

    // An outline covering the whole canvas leaves the interior alone.
    let mut canvas = blank.clone();
    canvas.draw_rect_outline(0, 0, i32::MAX, i32::MAX, color);
    assert_eq!(touched(&blank, &canvas).len(), 19);
    assert_eq!(canvas.get(0, 0), Some(color));
    assert_eq!(canvas.get(9, 9), Some(Rgba::TRANSPARENT));

    let mut canvas = blank.clone();
    canvas.draw_line(2, 3, i32::MAX, 3, color);
    assert_eq!(
        touched(&blank, &canvas),
        (2..10).map(|x| (x, 3)).collect::<Vec<_>>()
    );

    let mut canvas = blank.clone();
    canvas.draw_line(0, 0, i32::MAX, i32::MAX, color);
    assert_eq!(
        touched(&blank, &canvas),
        (0..10).map(|i| (i, i)).collect::<Vec<_>>()
    );

    // A huge circle centered on the canvas covers all of it, once.
    let mut canvas = blank.clone();
    canvas.draw_filled_circle(4, 4, i32::MAX, color.with_alpha(128));
    let once = blend_over(Rgba::TRANSPARENT, color.with_alpha(128));
    assert!(canvas.pixels().iter().all(|&p| p == once));
}

#[test]
fn test_partially_outside_rect_clips_to_canvas() {
    let mut canvas = Canvas::new(10, 10, Rgba::TRANSPARENT).unwrap();
    canvas.fill_rect(7, -3, 20, 2, Rgba::rgb(1, 2, 3), BlendMode::Replace);
    let before = Canvas::new(10, 10, Rgba::TRANSPARENT).unwrap();
    let mut got = touched(&before, &canvas);
    got.sort();
    assert_eq!(got, vec![(7, 0), (7, 1), (8, 0), (8, 1), (9, 0), (9, 1)]);
}

#[test]
fn test_circle_overlapping_edge() {
    let mut canvas = Canvas::new(4, 4, Rgba::TRANSPARENT).unwrap();
    canvas.draw_filled_circle(0, 0, 1, Rgba::rgb(9, 9, 9));
    let before = Canvas::new(4, 4, Rgba::TRANSPARENT).unwrap();
    assert_eq!(touched(&before, &canvas), vec![(0, 0), (1, 0), (0, 1)]);
}

// ============================================================================
// Degenerate shapes
// ============================================================================

#[test]
fn test_point_line_touches_one_pixel() {
    let original = noisy_canvas(6, 6);
    let mut canvas = original.clone();
    let color = Rgba::new(255, 63, 179, 140);
    canvas.draw_line(2, 2, 2, 2, color);

    assert_eq!(touched(&original, &canvas), vec![(2, 2)]);
    assert_eq!(
        canvas.get(2, 2),
        Some(blend_over(original.get(2, 2).unwrap(), color))
    );
}

#[test]
fn test_zero_radius_circle_touches_center() {
    let original = noisy_canvas(10, 10);
    let mut canvas = original.clone();
    canvas.draw_filled_circle(5, 5, 0, Rgba::rgb(177, 75, 255));
    assert_eq!(touched(&original, &canvas), vec![(5, 5)]);
}

#[test]
fn test_empty_rect_ranges() {
    let original = noisy_canvas(8, 8);
    let mut canvas = original.clone();
    let color = Rgba::rgb(255, 0, 0);
    canvas.fill_rect(0, 0, 0, 5, color, BlendMode::Replace);
    canvas.fill_rect(0, 0, 5, 0, color, BlendMode::Replace);
    canvas.fill_rect(0, 0, 0, 5, color, BlendMode::Over);
    canvas.fill_rect(0, 0, 5, 0, color, BlendMode::Over);
    assert_eq!(canvas, original);
}

#[test]
fn test_single_row_outline_overdraws() {
    // A 1-tall outline hits every column twice (top and bottom rows coincide)
    // and the end columns once more.
    let mut canvas = Canvas::new(5, 1, Rgba::TRANSPARENT).unwrap();
    let color = Rgba::new(255, 255, 255, 100);
    canvas.draw_rect_outline(0, 0, 5, 1, color);

    let twice = blend_over(blend_over(Rgba::TRANSPARENT, color), color);
    let thrice = blend_over(twice, color);
    assert_eq!(canvas.get(2, 0), Some(twice));
    assert_eq!(canvas.get(0, 0), Some(thrice));
    assert_eq!(canvas.get(4, 0), Some(thrice));
}
