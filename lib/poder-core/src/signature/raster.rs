use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use super::{Point, SignatureError, Stroke};

const BACKGROUND: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
// #0f172a
const PEN: Rgb<u8> = Rgb([0x0f, 0x17, 0x2a]);
/// Pen width in CSS pixels
const LINE_WIDTH: f32 = 2.0;

/// Filled disc, which gives round joins and caps when stamped along a path
fn stamp(image: &mut RgbImage, center: Point, radius: f32) {
    let min_x = (center.x - radius).floor().max(0.0) as u32;
    let min_y = (center.y - radius).floor().max(0.0) as u32;
    let max_x = ((center.x + radius).ceil().max(0.0) as u32).min(image.width().saturating_sub(1));
    let max_y = ((center.y + radius).ceil().max(0.0) as u32).min(image.height().saturating_sub(1));

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if dx * dx + dy * dy > radius * radius {
                continue;
            }

            if let Some(pixel) = image.get_pixel_mut_checked(x, y) {
                *pixel = PEN;
            }
        }
    }
}

fn line(image: &mut RgbImage, from: Point, to: Point, radius: f32) {
    let distance = ((to.x - from.x).powi(2) + (to.y - from.y).powi(2)).sqrt();
    let step = (radius / 2.0).max(0.5);
    let steps = (distance / step).ceil().max(1.0) as u32;

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp(
            image,
            Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t),
            radius,
        );
    }
}

/// Rasterizes `strokes` (CSS pixels) onto a `width` x `height` device pixel
/// surface. The size must already be checked against the surface bounds.
pub(super) fn render_png(
    width: u32,
    height: u32,
    ratio: f32,
    strokes: &[Stroke],
) -> Result<Vec<u8>, SignatureError> {
    let mut image = RgbImage::from_pixel(width, height, BACKGROUND);
    let radius = LINE_WIDTH * ratio / 2.0;
    let scale = |point: &Point| Point::new(point.x * ratio, point.y * ratio);

    for stroke in strokes {
        match stroke.as_slice() {
            [] => {}
            [dot] => stamp(&mut image, scale(dot), radius),
            points => {
                for segment in points.windows(2) {
                    line(&mut image, scale(&segment[0]), scale(&segment[1]), radius);
                }
            }
        }
    }

    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png)?;

    Ok(out.into_inner())
}
