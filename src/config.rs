//! Configuration file handling
//!
//! Experience settings saved as JSON. Every field has a default, so a
//! partial file (or none at all) is valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one run of the experience
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceConfig {
    /// Skip the audio cue entirely
    pub mute: bool,
    /// Master volume for the cue, 0.0 to 1.0
    pub volume: f32,
    /// Rendering rate for synthesized audio
    pub sample_rate: u32,
    /// Pixels per terminal column, for the responsive breakpoint
    pub cell_width_px: u32,
    /// Frame/tick interval of the event loop
    pub tick_rate_ms: u64,
    /// Where to write logs. None discards them.
    pub log_file: Option<PathBuf>,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            mute: false,
            volume: 1.0,
            sample_rate: 44_100,
            cell_width_px: 8,
            tick_rate_ms: 33,
            log_file: None,
        }
    }
}

impl ExperienceConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate and hand back the configuration, for the startup path
    pub fn validated(self) -> crate::error::Result<Self> {
        self.validate()
            .map_err(|e| crate::error::UfoError::config(format!("{:#}", e)))?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.volume) || self.volume.is_nan() {
            anyhow::bail!("Volume must be between 0.0 and 1.0 (got {})", self.volume);
        }
        if !(8_000..=192_000).contains(&self.sample_rate) {
            anyhow::bail!(
                "Sample rate must be between 8000 and 192000 Hz (got {})",
                self.sample_rate
            );
        }
        if !(1..=64).contains(&self.cell_width_px) {
            anyhow::bail!(
                "Cell width must be between 1 and 64 pixels (got {})",
                self.cell_width_px
            );
        }
        if !(10..=1000).contains(&self.tick_rate_ms) {
            anyhow::bail!(
                "Tick rate must be between 10 and 1000 ms (got {})",
                self.tick_rate_ms
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ExperienceConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.mute);
        assert_eq!(config.cell_width_px, 8);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ExperienceConfig = serde_json::from_str(r#"{"mute": true}"#).unwrap();
        assert!(config.mute);
        assert_eq!(config.sample_rate, 44_100);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_validation_volume() {
        let config = ExperienceConfig {
            volume: 1.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Volume"));
    }

    #[test]
    fn test_validation_sample_rate() {
        let config = ExperienceConfig {
            sample_rate: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_cell_width_and_tick() {
        let config = ExperienceConfig {
            cell_width_px: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ExperienceConfig {
            tick_rate_ms: 5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ExperienceConfig::load_from_file("/nonexistent/ufoburgers.json");
        assert!(result.is_err());
    }
}
