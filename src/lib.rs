//! # CDE Colors
//!
//! A Rust crate for working with CDE/NsCDE high-precision palette colors.
//!
//! CDE palettes store each color as 12 hex digits (4 per channel); only
//! the leading 2 digits of each channel carry the conventional 8-bit
//! value. This library provides:
//! - Positional compaction of `#rrrrggggbbbb` strings to `#rrggbb`
//! - Numeric conversion between the palette formats and RGB
//! - Brightening, luminance and nearest-color adjustments
//! - Assignment of a palette onto the 16-slot terminal scheme layout
//!
//! File handling and theme file formats are deliberately out of scope;
//! callers feed palette colors in and render the resulting values out.
//!
//! ## Example
//!
//! ```
//! use cde_colors::{compact, SchemeBuilder, color::twelve_to_rgb};
//!
//! // Reduce a high-precision palette color to the standard form
//! assert_eq!(compact("#aeae54549090")?, "#ae5490");
//!
//! // Or convert a full palette into a terminal scheme
//! let palette: Vec<_> = [
//!     "#000000000000", "#aeae54549090", "#54aeae549090", "#aeae90905454",
//!     "#545490ae90ae", "#ae54ae549090", "#54ae90ae90ae", "#aeaeaeaeaeae",
//! ]
//! .iter()
//! .map(|s| twelve_to_rgb(s))
//! .collect::<Result<_, _>>()?;
//! let scheme = SchemeBuilder::new().build(&palette)?;
//! println!("background: {:?}", scheme.background);
//! # Ok::<(), cde_colors::ColorError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod scheme;

pub use color::compact;
pub use config::SchemeConfig;
pub use error::{ColorError, Result};
pub use scheme::{SchemeBuilder, TerminalScheme};
