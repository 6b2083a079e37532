//! Configuration for palette-to-scheme conversion.
//!
//! This module defines the tunable parameters of scheme assignment as an
//! explicit configuration value, replacing the process-wide variables the
//! conversion was historically driven by.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use cde_colors::SchemeConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = SchemeConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = SchemeConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::brightness::{DEFAULT_PALETTE_SIZE, DEFAULT_STEP};

/// Parameters for building a terminal scheme from a palette.
///
/// Can be serialized to/from JSON for reproducible conversions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeConfig {
    /// Overall brightening amount applied to every channel (0-255)
    pub brightness: u8,

    /// Per-channel overrides; a positive value replaces `brightness`
    /// for that channel
    #[serde(default)]
    pub red: u8,
    #[serde(default)]
    pub green: u8,
    #[serde(default)]
    pub blue: u8,

    /// Brighten the base palette as well, producing more vibrant colors
    #[serde(default)]
    pub vibrant: bool,

    /// Declared palette size (8 or 4; 4-color palettes are handled as 8)
    pub ncolors: u8,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_STEP,
            red: 0,
            green: 0,
            blue: 0,
            vibrant: false,
            ncolors: DEFAULT_PALETTE_SIZE,
        }
    }
}

impl SchemeConfig {
    /// Effective per-channel brightening deltas after overrides
    pub fn channel_deltas(&self) -> [u8; 3] {
        let pick = |channel: u8| if channel > 0 { channel } else { self.brightness };
        [pick(self.red), pick(self.green), pick(self.blue)]
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
