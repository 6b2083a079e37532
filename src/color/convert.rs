//! Numeric conversion between hex color strings and RGB
//!
//! Provides conversions between the palette string formats and 8-bit RGB:
//! - 12-digit `#rrrrggggbbbb` to RGB (leading 2 digits per channel)
//! - 6-digit `#rrggbb` to RGB
//! - RGB to `#RRGGBB`

use palette::Srgb;
use tracing::debug;

use crate::{
    constants::format::{COMPACT_DIGITS, MARKER},
    ColorError, Result,
};

/// Convert a 12-digit palette color string to RGB
///
/// The string must be exactly 13 characters: the `#` marker followed by
/// 12 hex digits. The most-significant 2 digits of each 4-digit channel
/// are interpreted as that channel's 8-bit value.
///
/// # Arguments
///
/// * `twelve` - A palette color string, e.g. `#ffff00000000`
///
/// # Returns
///
/// The corresponding RGB color
///
/// # Errors
///
/// Returns `ColorError::InvalidFormat` if the length or marker is wrong,
/// or `ColorError::InvalidHexDigit` if a channel pair is not hexadecimal.
pub fn twelve_to_rgb(twelve: &str) -> Result<Srgb<u8>> {
    if !twelve.is_ascii() {
        return Err(ColorError::invalid_format(
            "color string contains non-ASCII characters",
        ));
    }
    match twelve.len() {
        13 => {}
        len if len == COMPACT_DIGITS => {
            return Err(ColorError::invalid_format(
                "missing leading '#' (expected #xxxxxxxxxxxx)",
            ));
        }
        len => {
            return Err(ColorError::invalid_format(format!(
                "expected 12 hex digits with a leading '#', got {} characters",
                len
            )));
        }
    }
    if !twelve.starts_with(MARKER) {
        return Err(ColorError::invalid_format("expected leading '#'"));
    }

    let r = parse_channel(&twelve[1..3], "red")?;
    let g = parse_channel(&twelve[5..7], "green")?;
    let b = parse_channel(&twelve[9..11], "blue")?;
    Ok(Srgb::new(r, g, b))
}

/// Parse a 6-digit hex color string to RGB
///
/// # Arguments
///
/// * `hex` - Hex color string (e.g. `#FF0000` or `FF0000`)
///
/// # Errors
///
/// Returns an error if the string is not 6 hex digits after the optional
/// marker.
pub fn short_to_rgb(hex: &str) -> Result<Srgb<u8>> {
    let hex = hex.strip_prefix(MARKER).unwrap_or(hex);
    if !hex.is_ascii() || hex.len() != 6 {
        return Err(ColorError::invalid_format(format!(
            "expected 6 hex digits, got {:?}",
            hex
        )));
    }

    let r = parse_channel(&hex[0..2], "red")?;
    let g = parse_channel(&hex[2..4], "green")?;
    let b = parse_channel(&hex[4..6], "blue")?;
    Ok(Srgb::new(r, g, b))
}

/// Format an RGB color as a zero-padded hex string (e.g. `#FF0000`)
pub fn rgb_to_hex(rgb: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}

fn parse_channel(pair: &str, channel: &'static str) -> Result<u8> {
    u8::from_str_radix(pair, 16).map_err(|source| {
        debug!(channel, pair, "rejecting non-hex channel value");
        ColorError::InvalidHexDigit { channel, source }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_to_rgb_primaries() {
        assert_eq!(twelve_to_rgb("#ffff00000000").unwrap(), Srgb::new(255, 0, 0));
        assert_eq!(twelve_to_rgb("#0000ffff0000").unwrap(), Srgb::new(0, 255, 0));
        assert_eq!(twelve_to_rgb("#00000000ffff").unwrap(), Srgb::new(0, 0, 255));
    }

    #[test]
    fn test_twelve_to_rgb_ignores_trailing_channel_digits() {
        // Only the leading pair of each channel is significant
        assert_eq!(
            twelve_to_rgb("#ab12cd34ef56").unwrap(),
            Srgb::new(0xab, 0xcd, 0xef)
        );
    }

    #[test]
    fn test_twelve_to_rgb_missing_marker() {
        let err = twelve_to_rgb("ffff00000000").unwrap_err();
        assert!(matches!(err, ColorError::InvalidFormat { .. }));
        assert!(err.to_string().contains('#'));
    }

    #[test]
    fn test_twelve_to_rgb_wrong_length() {
        assert!(twelve_to_rgb("#fff").is_err());
        assert!(twelve_to_rgb("#ffff0000000000").is_err());
        assert!(twelve_to_rgb("").is_err());
    }

    #[test]
    fn test_twelve_to_rgb_invalid_digits() {
        let err = twelve_to_rgb("#zzzz00000000").unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidHexDigit { channel: "red", .. }
        ));
    }

    #[test]
    fn test_short_to_rgb() {
        assert_eq!(short_to_rgb("#FF0000").unwrap(), Srgb::new(255, 0, 0));
        // Marker is optional
        assert_eq!(short_to_rgb("00ff00").unwrap(), Srgb::new(0, 255, 0));
    }

    #[test]
    fn test_short_to_rgb_invalid() {
        assert!(short_to_rgb("#FF").is_err());
        assert!(short_to_rgb("#GGGGGG").is_err());
    }

    #[test]
    fn test_rgb_to_hex_zero_padded() {
        assert_eq!(rgb_to_hex(Srgb::new(255, 0, 0)), "#FF0000");
        // Single-digit channel values keep their leading zero
        assert_eq!(rgb_to_hex(Srgb::new(1, 2, 3)), "#010203");
    }

    #[test]
    fn test_hex_roundtrip() {
        let rgb = Srgb::new(0x12, 0xab, 0xef);
        assert_eq!(short_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
    }
}
