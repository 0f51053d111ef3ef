//! Configuration structures for the splitting pipeline.

use serde::{Deserialize, Serialize};

/// Anchor token marking the start of the per-statement block on a page.
pub const DEFAULT_ANCHOR_TOKEN: &str = "4300";

/// Main configuration for the paysplit pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaysplitConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,
}

impl Default for PaysplitConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Template marker that starts the per-statement block. Text before the
    /// first occurrence (shared headers/footers) is not scanned for fields.
    pub anchor_token: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            anchor_token: DEFAULT_ANCHOR_TOKEN.to_string(),
        }
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Abort the whole batch on the first page failure instead of skipping
    /// the page and continuing.
    pub stop_on_page_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            stop_on_page_error: false,
        }
    }
}

impl PaysplitConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
