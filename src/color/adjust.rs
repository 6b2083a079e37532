//! Palette color adjustments used during scheme assignment
//!
//! Brightening with guaranteed-valid output, luminance-based text color
//! selection, and nearest-color matching against a shrinking pool.

use palette::Srgb;

use crate::{
    constants::luminance::{BLUE_WEIGHT, GREEN_WEIGHT, MIDPOINT, RED_WEIGHT},
    ColorError, Result,
};

/// Brighten an RGB color by per-channel deltas
///
/// If any brightened channel would exceed 255, the deltas are subtracted
/// instead, effectively dimming the color. If that in turn would go below
/// zero, the original color is returned. The result is always a valid
/// (and hopefully different) color.
pub fn brighten(rgb: Srgb<u8>, deltas: [u8; 3]) -> Srgb<u8> {
    let channels = [rgb.red, rgb.green, rgb.blue];
    let added: Vec<i16> = channels
        .iter()
        .zip(deltas)
        .map(|(&c, d)| i16::from(c) + i16::from(d))
        .collect();

    let adjusted: Vec<i16> = if added.iter().any(|&c| c > 255) {
        channels
            .iter()
            .zip(deltas)
            .map(|(&c, d)| i16::from(c) - i16::from(d))
            .collect()
    } else {
        added
    };

    if adjusted.iter().any(|&c| c < 0) {
        return rgb;
    }
    Srgb::new(adjusted[0] as u8, adjusted[1] as u8, adjusted[2] as u8)
}

/// Normalized relative luminance of an RGB color (BT.601 weights), 0.0-1.0
pub fn luminance(rgb: Srgb<u8>) -> f32 {
    (RED_WEIGHT * f32::from(rgb.red)
        + GREEN_WEIGHT * f32::from(rgb.green)
        + BLUE_WEIGHT * f32::from(rgb.blue))
        / 255.0
}

/// Pick a readable text color for the given background
///
/// Light backgrounds get black text, dark backgrounds get white text.
pub fn text_color(background: Srgb<u8>) -> Srgb<u8> {
    if luminance(background) > MIDPOINT {
        Srgb::new(0, 0, 0)
    } else {
        Srgb::new(255, 255, 255)
    }
}

/// Remove and return the pool entry closest to `target`
///
/// Distance is Euclidean in RGB. The winner is removed from the pool so
/// that repeated assignment never reuses a palette color; ties are broken
/// toward the numerically smallest color for determinism.
///
/// # Errors
///
/// Returns `ColorError::EmptyPalette` if the pool is empty.
pub fn closest_color(target: [u8; 3], pool: &mut Vec<Srgb<u8>>) -> Result<Srgb<u8>> {
    let (index, _) = pool
        .iter()
        .enumerate()
        .min_by_key(|(_, c)| (distance_squared(target, **c), (c.red, c.green, c.blue)))
        .ok_or(ColorError::EmptyPalette)?;
    Ok(pool.remove(index))
}

fn distance_squared(target: [u8; 3], color: Srgb<u8>) -> u32 {
    let dr = i32::from(target[0]) - i32::from(color.red);
    let dg = i32::from(target[1]) - i32::from(color.green);
    let db = i32::from(target[2]) - i32::from(color.blue);
    (dr * dr + dg * dg + db * db) as u32
}
