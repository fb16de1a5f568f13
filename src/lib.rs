//! Procedural generator for the layered gradient icon.
//!
//! [`synth::synthesize`] paints a square RGBA buffer and [`png::encode`] packs it into a
//! PNG file. [`icon_gen::generate_icons`] ties both to the filesystem.

pub mod error;
pub mod icon_gen;
pub mod manifest;
pub mod palette;
pub mod png;
pub mod synth;

pub use error::{IconError, IconResult};
pub use png::encode;
pub use synth::{synthesize, PixelBuffer};
