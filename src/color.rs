use image::GenericImageView;
use image::Rgb;
use image::Rgba;
use image::RgbaImage;
use imageproc::rect::Rect;
use std::fmt;

/// Rough classification of a pixel, used to find where the cards start and end when tuning the
/// sheet geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    Green,
    White,
    Other,
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorClass::Green => "GREEN",
            ColorClass::White => "WHITE",
            ColorClass::Other => "OTHER",
        })
    }
}

pub fn classify(Rgb([r, g, b]): Rgb<u8>) -> ColorClass {
    if green_dominant(r, g, b) {
        ColorClass::Green
    } else if r > 200 && g > 200 && b > 200 {
        ColorClass::White
    } else {
        ColorClass::Other
    }
}

// Green channel clearly above the other two. Widened to u16 so that r + 10 cannot overflow
fn green_dominant(r: u8, g: u8, b: u8) -> bool {
    let (r, g, b) = (u16::from(r), u16::from(g), u16::from(b));
    g > r + 10 && g > b + 5
}

// Return the absolute difference between two values
fn abs_diff(a: u8, b: u8) -> u8 {
    std::cmp::max(a, b) - std::cmp::min(a, b)
}

/// The table background is a dark green, approximately rgb(17, 94, 63)
pub const BACKGROUND_GREEN: Rgb<u8> = Rgb([17, 94, 63]);

/// Returns true if the pixel belongs to the green table the cards are drawn on. Alpha is ignored.
///
/// Two rules are combined:
/// * pixels close to `BACKGROUND_GREEN`, with a different tolerance per channel
/// * darker green-dominant pixels, found in the shadows and anti-aliased borders around the
/// cards, which are too far from the target color to match the first rule
pub fn is_background(Rgba([r, g, b, _a]): Rgba<u8>) -> bool {
    let Rgb([r0, g0, b0]) = BACKGROUND_GREEN;
    let is_green =
        abs_diff(r, r0) < 40 && abs_diff(g, g0) < 50 && abs_diff(b, b0) < 40 && g > r && g > b;
    let is_dark_green = green_dominant(r, g, b) && r < 80 && g < 180 && b < 100;

    is_green || is_dark_green
}

/// Make all the background pixels fully transparent. Other pixels are left unchanged.
pub fn remove_background(img: &RgbaImage) -> RgbaImage {
    let transparent = Rgba([0, 0, 0, 0]);

    imageproc::map::map_colors(img, |p| if is_background(p) { transparent } else { p })
}

/// Smallest rectangle that contains all the pixels with non-zero alpha, or None if the image is
/// fully transparent.
pub fn content_bounds(img: &RgbaImage) -> Option<Rect> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    bounds.map(|(x0, y0, x1, y1)| {
        Rect::at(x0 as i32, y0 as i32).of_size(x1 - x0 + 1, y1 - y0 + 1)
    })
}

/// Crop the transparent padding around the card. A fully transparent image is returned as is.
pub fn trim_transparent(img: RgbaImage) -> RgbaImage {
    match content_bounds(&img) {
        Some(rect) if rect.width() != img.width() || rect.height() != img.height() => img
            .view(
                rect.left() as u32,
                rect.top() as u32,
                rect.width(),
                rect.height(),
            )
            .to_image(),
        _ => img,
    }
}
