//! Pixel synthesis for the layered icon.
//!
//! Every pixel is decided on its own: outside the rounded square it is transparent,
//! on one of the chevron strokes it is [`DARK`], otherwise it takes the diagonal
//! cyan-to-purple gradient.

use crate::error::{IconError, IconResult};
use crate::palette::{
    CHEVRON_SLOPE, CORNER_RADIUS_FACTOR, CYAN, DARK, LAYER_BAND, LAYER_OFFSETS, PATTERN_RADIUS_FACTOR,
    PURPLE, STROKE_HALF_WIDTH, TRANSPARENT,
};
use image::Rgba;

/// Row-major RGBA pixels, top row first.
pub type PixelBuffer = Vec<Rgba<u8>>;

/// Paint a `size`×`size` icon.
///
/// Deterministic: the same size always yields the same pixels. Fails only for `size == 0`.
#[tracing::instrument]
pub fn synthesize(size: u32) -> IconResult<PixelBuffer> {
    if size == 0 {
        return Err(IconError::invalid_size(size));
    }

    let geometry = Geometry::new(size);
    let mut pixels = Vec::with_capacity(size as usize * size as usize);
    for y in 0..size {
        for x in 0..size {
            pixels.push(geometry.pixel(x, y));
        }
    }

    tracing::debug!(pixels = pixels.len(), "synthesized icon");
    Ok(pixels)
}

/// Linear interpolation between two colors, channel by channel (alpha included).
///
/// Channels are truncated towards zero, not rounded.
pub fn lerp_color(from: Rgba<u8>, to: Rgba<u8>, t: f64) -> Rgba<u8> {
    let mut out = [0u8; 4];
    for (i, channel) in out.iter_mut().enumerate() {
        let a = f64::from(from[i]);
        let b = f64::from(to[i]);
        *channel = (a + (b - a) * t) as u8;
    }
    Rgba(out)
}

struct Geometry {
    size: f64,
    center: f64,
    radius: f64,
    corner_radius: f64,
}

impl Geometry {
    fn new(size: u32) -> Self {
        let size = f64::from(size);
        Self {
            size,
            center: size / 2.0,
            radius: size * PATTERN_RADIUS_FACTOR,
            corner_radius: size * CORNER_RADIUS_FACTOR,
        }
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        let x = f64::from(x);
        let y = f64::from(y);

        if !self.contains(x, y) {
            return TRANSPARENT;
        }
        if self.on_chevron(x, y) {
            return DARK;
        }

        // Top-left to bottom-right
        let t = (x + y) / (2.0 * self.size);
        lerp_color(CYAN, PURPLE, t)
    }

    /// Rounded-square test. The corner zones are folded onto one quadrant through
    /// `|dx|`, `|dy|`, so a single arc center serves all four corners.
    fn contains(&self, x: f64, y: f64) -> bool {
        let dx = (x - self.center).abs();
        let dy = (y - self.center).abs();
        let arc_center = self.center - self.corner_radius;

        if dx > arc_center && dy > arc_center {
            let dist = ((dx - arc_center).powi(2) + (dy - arc_center).powi(2)).sqrt();
            dist <= self.corner_radius
        } else {
            dx <= self.center && dy <= self.center
        }
    }

    fn on_chevron(&self, x: f64, y: f64) -> bool {
        let rel_x = (x - self.center) / self.radius;
        let rel_y = (y - self.center) / self.radius;

        LAYER_OFFSETS.iter().any(|&offset| {
            if (rel_y - offset).abs() >= LAYER_BAND {
                return false;
            }
            let expected_y = offset + rel_x.abs() * CHEVRON_SLOPE;
            (rel_y - expected_y).abs() < STROKE_HALF_WIDTH
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(pixels: &[Rgba<u8>], size: u32, x: u32, y: u32) -> Rgba<u8> {
        pixels[(y * size + x) as usize]
    }

    #[test]
    fn buffer_holds_size_squared_pixels() {
        for size in [1, 2, 3, 7, 16, 48, 128] {
            let pixels = synthesize(size).unwrap();
            assert_eq!(pixels.len(), (size * size) as usize, "size {size}");
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = synthesize(0).unwrap_err();
        assert!(matches!(
            err,
            IconError::InvalidDimension {
                width: 0,
                height: 0
            }
        ));
    }

    #[test]
    fn top_left_corner_is_transparent_for_every_size() {
        for size in 1..=64 {
            let pixels = synthesize(size).unwrap();
            assert_eq!(pixels[0], TRANSPARENT, "size {size}");
        }
    }

    #[test]
    fn same_size_gives_identical_pixels() {
        assert_eq!(synthesize(48).unwrap(), synthesize(48).unwrap());
    }

    #[test]
    fn alpha_is_either_clear_or_opaque() {
        let pixels = synthesize(128).unwrap();
        assert!(pixels.iter().all(|p| p[3] == 0 || p[3] == 255));
    }

    #[test]
    fn transparent_pixels_carry_no_color() {
        let pixels = synthesize(48).unwrap();
        for p in pixels.iter().filter(|p| p[3] == 0) {
            assert_eq!(*p, TRANSPARENT);
        }
    }

    #[test]
    fn sixteen_pixel_icon() {
        let pixels = synthesize(16).unwrap();

        assert_eq!(at(&pixels, 16, 0, 0), TRANSPARENT);
        assert_ne!(at(&pixels, 16, 8, 8)[3], 0);

        // The middle chevron runs through the center
        assert_eq!(at(&pixels, 16, 8, 8), DARK);

        // t = 0.25
        assert_eq!(at(&pixels, 16, 4, 4), Rgba([40, 191, 253, 255]));
        // t = 0.9375; channels truncate rather than round
        assert_eq!(at(&pixels, 16, 15, 15), Rgba([152, 119, 247, 255]));

        assert_eq!(pixels.iter().filter(|p| **p == TRANSPARENT).count(), 13);
        assert_eq!(pixels.iter().filter(|p| **p == DARK).count(), 26);
    }

    #[test]
    fn single_pixel_icon_falls_outside_the_corner_arc() {
        assert_eq!(synthesize(1).unwrap(), vec![TRANSPARENT]);
    }

    #[test]
    fn lerp_hits_both_endpoints() {
        assert_eq!(lerp_color(CYAN, PURPLE, 0.0), CYAN);
        assert_eq!(lerp_color(CYAN, PURPLE, 1.0), PURPLE);
        assert_eq!(lerp_color(CYAN, PURPLE, 0.5), Rgba([81, 165, 251, 255]));
    }
}
