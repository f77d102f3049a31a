//! Per-pixel rendering of phase glyphs.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::phase::{PhaseGlyph, Shade, Side};

const DARK: Rgba<u8> = Rgba([38, 40, 52, 255]);
const LIT: Rgba<u8> = Rgba([235, 233, 214, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn paint(shade: Shade) -> Rgba<u8> {
    match shade {
        Shade::Dark => DARK,
        Shade::Lit => LIT,
    }
}

/// Renders `glyph` as a square RGBA image, `size` pixels on a side.
///
/// The disk fills the image; pixels outside it stay transparent. Each
/// pixel is classified against the disk, the half overlay, and the
/// terminator ellipse at its center point, in the glyph's paint order.
pub fn rasterize(glyph: &PhaseGlyph, size: u32) -> RgbaImage {
    let radius = f64::from(size) / 2.0;
    let mut image = ImageBuffer::new(size, size);
    for (px, py, pixel) in image.enumerate_pixels_mut() {
        // Center-origin coordinates, x growing to the viewer's right.
        let x = f64::from(px) + 0.5 - radius;
        let y = f64::from(py) + 0.5 - radius;
        if x * x + y * y > radius * radius {
            *pixel = TRANSPARENT;
            continue;
        }

        let mut shade = glyph.base;
        if let Some(side) = glyph.lit_half {
            let covered = match side {
                Side::Right => x >= 0.0,
                Side::Left => x <= 0.0,
            };
            if covered {
                shade = Shade::Lit;
            }
        }
        if let Some(terminator) = glyph.terminator {
            let semi_axis = terminator.half_width * radius;
            if semi_axis > 0.0 {
                let nx = x / semi_axis;
                let ny = y / radius;
                if nx * nx + ny * ny <= 1.0 {
                    shade = terminator.shade;
                }
            }
        }
        *pixel = paint(shade);
    }
    image
}
