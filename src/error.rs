//! Error types for the cde_colors library

use thiserror::Error;

/// Result type alias for cde_colors operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for palette color conversion operations
#[derive(Error, Debug)]
pub enum ColorError {
    /// Color string has too few digits after the marker is removed
    #[error("color string too short: {len} digits after marker (minimum {minimum})")]
    InputTooShort { len: usize, minimum: usize },

    /// Color string does not match the expected shape
    #[error("invalid color format: {reason}")]
    InvalidFormat { reason: String },

    /// A channel substring is not valid hexadecimal
    #[error("invalid hex digits in {channel} channel")]
    InvalidHexDigit {
        channel: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Palette size is not one of the supported CDE modes
    #[error("unsupported palette size: {size} (expected 4 or 8)")]
    UnsupportedPaletteSize { size: u8 },

    /// No palette colors remain to satisfy an assignment
    #[error("palette exhausted: no colors left to assign")]
    EmptyPalette,
}

impl ColorError {
    /// Create an InputTooShort error for a marker-stripped remainder
    pub fn input_too_short(len: usize) -> Self {
        Self::InputTooShort {
            len,
            minimum: crate::constants::format::MIN_COMPACT_DIGITS,
        }
    }

    /// Create an InvalidFormat error with context
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Per-color errors are recoverable: the caller can skip the offending
    /// palette entry and continue. Palette-level errors are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ColorError::InputTooShort { .. }
                | ColorError::InvalidFormat { .. }
                | ColorError::InvalidHexDigit { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InputTooShort { len, minimum } => {
                format!(
                    "Color value has only {} digits (at least {} required). Please check the palette entry.",
                    len, minimum
                )
            }
            ColorError::InvalidFormat { .. } | ColorError::InvalidHexDigit { .. } => {
                "Color value is not a valid hex color. Please check the palette entry.".to_string()
            }
            ColorError::UnsupportedPaletteSize { size } => {
                format!(
                    "Palette size {} is not supported. Use an 8 or 4 color palette.",
                    size
                )
            }
            ColorError::EmptyPalette => {
                "The palette has too few colors to build a full scheme.".to_string()
            }
        }
    }
}
