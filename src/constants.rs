//! Reference values for CDE palette color handling
//!
//! This module contains compile-time constants for the 12-digit palette
//! color format, luminance calculation, and the anchor colors used when
//! assigning palette entries to terminal scheme slots.

/// 12-digit hex color string layout
///
/// A CDE palette color is written `#rrrrggggbbbb`: a marker character
/// followed by 3 channels of 4 hex digits each. Only the leading 2 digits
/// of each channel are significant for the 8-bit form.
pub mod format {
    /// Marker character that prefixes every palette color string
    pub const MARKER: char = '#';

    /// Number of hex digits in the high-precision form
    pub const COMPACT_DIGITS: usize = 12;

    /// Number of hex digits in the standard #rrggbb form
    pub const SHORT_DIGITS: usize = 6;

    /// Digits stored per channel in the high-precision form
    pub const DIGITS_PER_CHANNEL: usize = 4;

    /// Digits retained per channel when compacting
    pub const RETAINED_DIGITS: usize = 2;

    /// Starting offset of each channel within the marker-stripped remainder
    pub const CHANNEL_OFFSETS: [usize; 3] = [0, 4, 8];

    /// Minimum remainder length required to read all three channel pairs
    /// (the last access ends at offset 10)
    pub const MIN_COMPACT_DIGITS: usize = 10;
}

/// Relative luminance calculation (ITU-R BT.601)
///
/// Used to pick a readable text color against a given background.
pub mod luminance {
    /// Per-channel luminance weights, red/green/blue
    pub const RED_WEIGHT: f32 = 0.299;
    pub const GREEN_WEIGHT: f32 = 0.587;
    pub const BLUE_WEIGHT: f32 = 0.114;

    /// Normalized luminance above this midpoint reads better with dark text
    pub const MIDPOINT: f32 = 0.5;
}

/// Anchor colors for scheme slot assignment
///
/// Each of the 16 terminal color slots is filled with the palette entry
/// closest to one of these pure anchors.
/// Note: palette crate doesn't support const RGB values, so we use arrays.
pub mod anchors {
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const YELLOW: [u8; 3] = [255, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const MAGENTA: [u8; 3] = [255, 0, 255];
    pub const CYAN: [u8; 3] = [0, 255, 255];
    pub const WHITE: [u8; 3] = [255, 255, 255];
}

/// Brightness adjustment defaults and palette size limits
pub mod brightness {
    /// Default per-channel brightening step
    pub const DEFAULT_STEP: u8 = 20;

    /// Palette sizes accepted by the scheme builder.
    /// 4-color palettes still carry 8 entries in practice and are
    /// treated the same as 8-color palettes.
    pub const SUPPORTED_PALETTE_SIZES: [u8; 2] = [4, 8];

    /// Default palette size
    pub const DEFAULT_PALETTE_SIZE: u8 = 8;
}
