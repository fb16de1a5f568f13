//! Fixed colors and proportions of the layered icon.

use image::Rgba;

/// Gradient start, painted towards the top-left corner.
pub const CYAN: Rgba<u8> = Rgba([0, 217, 255, 255]);

/// Gradient end, painted towards the bottom-right corner.
pub const PURPLE: Rgba<u8> = Rgba([163, 113, 247, 255]);

/// Stroke color of the chevron layers.
pub const DARK: Rgba<u8> = Rgba([13, 17, 23, 255]);

/// Everything outside the rounded square.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Corner radius as a fraction of the icon size.
pub const CORNER_RADIUS_FACTOR: f64 = 0.2;

/// Radius used to normalize coordinates for the chevron pattern.
pub const PATTERN_RADIUS_FACTOR: f64 = 0.45;

/// Vertical position of each chevron, in normalized units. Checked in this order.
pub const LAYER_OFFSETS: [f64; 3] = [-0.3, 0.1, 0.5];

/// Half-height of the band around a layer offset in which the chevron is tested.
pub const LAYER_BAND: f64 = 0.15;

/// How fast a chevron arm drops with horizontal distance from the center.
pub const CHEVRON_SLOPE: f64 = 0.3;

/// Half-width of a chevron stroke.
pub const STROKE_HALF_WIDTH: f64 = 0.12;
