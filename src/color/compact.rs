//! Positional compaction of 12-digit palette colors
//!
//! A CDE palette stores each channel with 4 hex digits of precision;
//! only the leading 2 digits of each channel survive in the standard
//! 8-bit form. Compaction is purely positional: the marker is stripped,
//! the three leading pairs are sampled at fixed offsets, and the result
//! is reassembled with the marker. Digit content is not inspected.

use tracing::trace;

use crate::{
    constants::format::{CHANNEL_OFFSETS, MARKER, MIN_COMPACT_DIGITS, RETAINED_DIGITS},
    ColorError, Result,
};

/// Compact a 12-digit palette color string to the standard #rrggbb form
///
/// Strips one leading marker (if present), then concatenates the marker
/// with the 2-character substrings at offsets [0,2), [4,6) and [8,10) of
/// the remainder. No validation of the digits themselves is performed;
/// malformed content is reshaped, not rejected.
///
/// # Arguments
///
/// * `input` - A palette color string, e.g. `#aabbccddeeff`
///
/// # Returns
///
/// The compacted color string, e.g. `#aaccee`. For a well-formed
/// 13-character input the output is always exactly 7 characters.
///
/// # Errors
///
/// Returns `ColorError::InputTooShort` if fewer than 10 characters remain
/// after the marker is stripped. No partial output is produced.
///
/// # Example
///
/// ```
/// use cde_colors::color::compact;
///
/// assert_eq!(compact("#aabbccddeeff")?, "#aaccee");
/// # Ok::<(), cde_colors::ColorError>(())
/// ```
pub fn compact(input: &str) -> Result<String> {
    let remainder = input.strip_prefix(MARKER).unwrap_or(input);

    // Char-based indexing keeps slicing well-defined for arbitrary input
    let digits: Vec<char> = remainder.chars().collect();
    if digits.len() < MIN_COMPACT_DIGITS {
        return Err(ColorError::input_too_short(digits.len()));
    }

    let mut output = String::with_capacity(1 + CHANNEL_OFFSETS.len() * RETAINED_DIGITS);
    output.push(MARKER);
    for offset in CHANNEL_OFFSETS {
        output.extend(&digits[offset..offset + RETAINED_DIGITS]);
    }

    trace!(input, output = %output, "compacted palette color");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_basic() {
        assert_eq!(compact("#aabbccddeeff").unwrap(), "#aaccee");
        assert_eq!(compact("#000011112222").unwrap(), "#001122");
    }

    #[test]
    fn test_compact_output_length() {
        let out = compact("#123456789abc").unwrap();
        assert_eq!(out.len(), 7);
        assert!(out.starts_with('#'));
    }

    #[test]
    fn test_compact_samples_leading_pair_of_each_channel() {
        // Channels: rrrr=1234, gggg=5678, bbbb=9abc
        assert_eq!(compact("#123456789abc").unwrap(), "#12569a");
    }

    #[test]
    fn test_compact_without_marker() {
        // Marker is optional on input, always present on output
        assert_eq!(compact("aabbccddeeff").unwrap(), "#aaccee");
    }

    #[test]
    fn test_compact_does_not_validate_digits() {
        // Non-hex content is reshaped, not rejected
        assert_eq!(compact("#zzzzyyyyxxxx").unwrap(), "#zzyyxx");
    }

    #[test]
    fn test_compact_exactly_minimum_length() {
        // 10 characters after the marker is just enough
        assert_eq!(compact("#0011223344").unwrap(), "#002244");
    }

    #[test]
    fn test_compact_too_short() {
        let err = compact("#1234").unwrap_err();
        match err {
            ColorError::InputTooShort { len, minimum } => {
                assert_eq!(len, 4);
                assert_eq!(minimum, 10);
            }
            other => panic!("expected InputTooShort, got: {:?}", other),
        }
    }

    #[test]
    fn test_compact_nine_after_marker_is_too_short() {
        assert!(matches!(
            compact("#123456789"),
            Err(ColorError::InputTooShort { len: 9, .. })
        ));
    }

    #[test]
    fn test_compact_empty_input() {
        assert!(compact("").is_err());
        assert!(compact("#").is_err());
    }

    #[test]
    fn test_compact_idempotent_through_padding() {
        // Padding each channel of a compact color back to 4 digits and
        // re-compacting round-trips the leading pairs
        let short = compact("#aabbccddeeff").unwrap(); // #aaccee
        let repadded = "#aa00cc00ee00";
        assert_eq!(compact(repadded).unwrap(), short);
    }

    #[test]
    fn test_compact_non_ascii_input() {
        // Multi-byte characters count as single positions
        let out = compact("#éééééééééééé").unwrap();
        assert_eq!(out.chars().count(), 7);
    }
}
