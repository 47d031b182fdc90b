//! Conversion of raw radiance buffers into displayable images.

use glint_core::Color;
use image::{Rgb, RgbImage};

use crate::options::RenderMode;
use crate::renderer::ColorBuffer;

const GAMMA: f64 = 2.2;

/// Map a buffer of raw shading results to 8-bit RGB for `mode`.
pub fn post_process(colors: &ColorBuffer, mode: RenderMode) -> RgbImage {
    let mapping: Box<dyn Fn(Color) -> Color> = match mode {
        RenderMode::Depth => {
            let max_depth = colors.pixels.iter().map(|c| c.x).fold(0.0, f64::max);
            Box::new(move |c| if max_depth > 0.0 { c / max_depth } else { c })
        }
        RenderMode::Normal => Box::new(|n| 0.5 * n + Color::splat(0.5)),
        RenderMode::Full => {
            let white = colors.pixels.iter().map(|c| c.max_element()).fold(0.0, f64::max);
            Box::new(move |c| tone_map(c, white).powf(1.0 / GAMMA))
        }
    };

    RgbImage::from_fn(colors.width, colors.height, |x, y| {
        Rgb(color_to_rgb(mapping(colors.get(x, y))))
    })
}

/// Extended Reinhard operator with white point `white`.
fn tone_map(c: Color, white: f64) -> Color {
    if white <= 0.0 {
        return c;
    }
    let white_sq = white * white;
    let reinhard = |v: f64| v * (1.0 + v / white_sq) / (1.0 + v);
    Color::new(reinhard(c.x), reinhard(c.y), reinhard(c.z))
}

/// Clamp to [0, 1] and quantize to bytes.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = color.clamp(Color::ZERO, Color::ONE);
    [
        (255.0 * c.x) as u8,
        (255.0 * c.y) as u8,
        (255.0 * c.z) as u8,
    ]
}
