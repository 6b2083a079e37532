//! Color compaction, conversion and adjustment module
//!
//! This module handles the 12-digit palette color format: positional
//! compaction to the standard #rrggbb form, numeric conversion to RGB,
//! and the adjustments used during scheme assignment.

pub mod adjust;
pub mod compact;
pub mod convert;

pub use adjust::{brighten, closest_color, luminance, text_color};
pub use compact::compact;
pub use convert::{rgb_to_hex, short_to_rgb, twelve_to_rgb};
