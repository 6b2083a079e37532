//! Terminal color scheme assignment
//!
//! Maps a CDE palette (typically 8 colors) onto the 16 ANSI terminal
//! slots plus foreground, background, cursor and selection colors:
//! - A normal and a bright pool are derived from the palette
//! - Each slot takes the unused pool color closest to a pure anchor
//! - Foreground is chosen by luminance for contrast against the background

use palette::Srgb;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    color::{brighten, closest_color, text_color},
    config::SchemeConfig,
    constants::{anchors, brightness::SUPPORTED_PALETTE_SIZES},
    ColorError, Result,
};

/// A complete terminal color scheme as RGB values
///
/// This is a pure value model; rendering it into any particular theme
/// file format is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalScheme {
    /// Default text color
    pub foreground: Srgb<u8>,
    /// Default background color
    pub background: Srgb<u8>,
    /// Cursor color
    pub cursor: Srgb<u8>,
    /// Selected text color (background, inverted)
    pub selection_foreground: Srgb<u8>,
    /// Selection highlight color (foreground, inverted)
    pub selection_background: Srgb<u8>,
    /// The 16 ANSI slots: 0-7 normal, 8-15 bright
    pub ansi: [Srgb<u8>; 16],
}

impl TerminalScheme {
    /// Iterate the scheme as named entries, in conventional order
    pub fn entries(&self) -> impl Iterator<Item = (String, Srgb<u8>)> + '_ {
        let named = [
            ("foreground".to_string(), self.foreground),
            ("background".to_string(), self.background),
            ("cursor".to_string(), self.cursor),
            ("selection_foreground".to_string(), self.selection_foreground),
            ("selection_background".to_string(), self.selection_background),
        ];
        named.into_iter().chain(
            self.ansi
                .iter()
                .enumerate()
                .map(|(i, &c)| (format!("color{}", i), c)),
        )
    }
}

/// Scheme builder implementing anchor-matched slot assignment
pub struct SchemeBuilder {
    config: SchemeConfig,
}

impl Default for SchemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemeBuilder {
    /// Create a scheme builder with default parameters
    pub fn new() -> Self {
        Self {
            config: SchemeConfig::default(),
        }
    }

    /// Create a scheme builder with custom parameters
    pub fn with_config(config: SchemeConfig) -> Self {
        Self { config }
    }

    /// Build a terminal scheme from a palette
    ///
    /// Derives a normal and a bright pool from the palette, then fills
    /// each slot with the unused pool color closest to its anchor. With
    /// `vibrant` set, the base palette itself is brightened first, so
    /// every pool shifts up by the configured deltas.
    ///
    /// # Arguments
    ///
    /// * `palette` - Palette colors; 8 entries fill every slot exactly once
    ///
    /// # Returns
    ///
    /// A `TerminalScheme` with all 21 slots assigned
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedPaletteSize` if the configured size is not 8
    /// or 4, and `EmptyPalette` if the palette is empty or runs out of
    /// colors mid-assignment.
    pub fn build(&self, palette: &[Srgb<u8>]) -> Result<TerminalScheme> {
        if palette.is_empty() {
            return Err(ColorError::EmptyPalette);
        }
        if !SUPPORTED_PALETTE_SIZES.contains(&self.config.ncolors) {
            return Err(ColorError::UnsupportedPaletteSize {
                size: self.config.ncolors,
            });
        }

        let deltas = self.config.channel_deltas();
        let mut normal: Vec<Srgb<u8>> = if self.config.vibrant {
            palette.iter().map(|&c| brighten(c, deltas)).collect()
        } else {
            palette.to_vec()
        };
        let mut bright: Vec<Srgb<u8>> = normal.iter().map(|&c| brighten(c, deltas)).collect();

        let background = closest_color(anchors::BLACK, &mut normal)?;
        let foreground = text_color(background);
        let cursor = closest_color(anchors::YELLOW, &mut normal)?;
        debug!(
            background = ?(background.red, background.green, background.blue),
            cursor = ?(cursor.red, cursor.green, cursor.blue),
            vibrant = self.config.vibrant,
            "assigned scheme base colors"
        );

        let mut ansi = [Srgb::new(0u8, 0, 0); 16];
        ansi[0] = background;
        ansi[8] = closest_color(anchors::BLACK, &mut bright)?;

        ansi[1] = closest_color(anchors::RED, &mut normal)?;
        ansi[9] = closest_color(anchors::RED, &mut bright)?;

        ansi[2] = closest_color(anchors::GREEN, &mut normal)?;
        ansi[10] = closest_color(anchors::GREEN, &mut bright)?;

        // Yellow slot reuses the cursor color
        ansi[3] = cursor;
        ansi[11] = closest_color(anchors::YELLOW, &mut bright)?;

        ansi[4] = closest_color(anchors::BLUE, &mut normal)?;
        ansi[12] = closest_color(anchors::BLUE, &mut bright)?;

        ansi[5] = closest_color(anchors::MAGENTA, &mut normal)?;
        ansi[13] = closest_color(anchors::MAGENTA, &mut bright)?;

        ansi[6] = closest_color(anchors::CYAN, &mut normal)?;
        ansi[14] = closest_color(anchors::CYAN, &mut bright)?;

        ansi[7] = closest_color(anchors::WHITE, &mut normal)?;
        ansi[15] = closest_color(anchors::WHITE, &mut bright)?;

        Ok(TerminalScheme {
            foreground,
            background,
            cursor,
            selection_foreground: background,
            selection_background: foreground,
            ansi,
        })
    }
}
