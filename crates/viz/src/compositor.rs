use image::{Rgb, RgbImage};
use imageproc::drawing::BresenhamLineIter;
use outline::Contour;

pub const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const STROKE_WIDTH: i32 = 2;

/// Stroke every contour over a copy of the source image.
///
/// Each contour is drawn as a closed polygon: the implicit edge from its
/// last point back to its first is stroked too. All contours share one
/// stroke color, so the result does not depend on their order. The source
/// buffer is never mutated.
pub fn draw_contours(image: &RgbImage, contours: &[Contour]) -> RgbImage {
    let mut canvas = image.clone();
    for contour in contours {
        stroke_closed_polyline(&mut canvas, contour);
    }
    canvas
}

fn stroke_closed_polyline(canvas: &mut RgbImage, contour: &Contour) {
    let points = &contour.points;
    match points.len() {
        0 => {}
        1 => stamp(canvas, points[0][0], points[0][1]),
        n => {
            for i in 0..n {
                let start = points[i];
                let end = points[(i + 1) % n];
                let line = BresenhamLineIter::new(
                    (start[0] as f32, start[1] as f32),
                    (end[0] as f32, end[1] as f32),
                );
                for (x, y) in line {
                    stamp(canvas, x, y);
                }
            }
        }
    }
}

/// Stamp a STROKE_WIDTH x STROKE_WIDTH block around one boundary pixel,
/// clipped to the canvas.
fn stamp(canvas: &mut RgbImage, x: i32, y: i32) {
    let half = STROKE_WIDTH / 2;
    for dy in -half..STROKE_WIDTH - half {
        for dx in -half..STROKE_WIDTH - half {
            let px = x + dx;
            let py = y + dy;
            if px >= 0 && py >= 0 && (px as u32) < canvas.width() && (py as u32) < canvas.height() {
                canvas.put_pixel(px as u32, py as u32, OUTLINE_COLOR);
            }
        }
    }
}
