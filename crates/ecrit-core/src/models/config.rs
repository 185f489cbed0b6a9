//! Configuration structures for the inference pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the ecrit pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EcritConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for EcritConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// How many leading non-empty lines are scanned for a counterparty name.
    pub counterparty_scan_lines: usize,

    /// Size in characters of the window searched for a number after an
    /// amount keyword.
    pub amount_window: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            counterparty_scan_lines: 10,
            amount_window: 120,
        }
    }
}

impl EcritConfig {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_constants() {
        let config = EcritConfig::default();
        assert_eq!(config.extraction.counterparty_scan_lines, 10);
        assert_eq!(config.extraction.amount_window, 120);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: EcritConfig =
            serde_json::from_str(r#"{"extraction":{"amount_window":80}}"#).unwrap();
        assert_eq!(config.extraction.amount_window, 80);
        assert_eq!(config.extraction.counterparty_scan_lines, 10);
    }
}
