use std::path::Path;

use anyhow::{Result, Context};
use log::{debug, info};
use serde::Deserialize;

use crate::report::types::SlaThresholds;
use crate::utils::file_utils;

/// Threshold overrides as they appear in an optional TOML config file.
/// Absent keys fall back to the shipped defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThresholdsFile {
    sdwan: Option<f64>,
    wan1: Option<f64>,
    wan2: Option<f64>,
}

impl ThresholdsFile {
    fn into_thresholds(self) -> SlaThresholds {
        let defaults = SlaThresholds::default();
        SlaThresholds {
            sdwan: self.sdwan.unwrap_or(defaults.sdwan),
            wan1: self.wan1.unwrap_or(defaults.wan1),
            wan2: self.wan2.unwrap_or(defaults.wan2),
        }
    }
}

/// Load SLA thresholds from a TOML file.
/// A missing file is not an error: the shipped defaults are returned.
pub fn load_thresholds(path: impl AsRef<Path>) -> Result<SlaThresholds> {
    let path = path.as_ref();
    debug!("Loading threshold config from {}", path.display());

    if !path.exists() {
        info!("Threshold config does not exist, using defaults");
        return Ok(SlaThresholds::default());
    }

    let content = file_utils::read_file_to_string(path)?;
    let file: ThresholdsFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse threshold config {}", path.display()))?;

    Ok(file.into_thresholds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() -> Result<()> {
        let dir = tempdir()?;
        let thresholds = load_thresholds(dir.path().join("thresholds.toml"))?;
        assert_eq!(thresholds, SlaThresholds::default());
        Ok(())
    }

    #[test]
    fn partial_config_falls_back_per_field() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("thresholds.toml");
        fs::write(&path, "sdwan = 99.5\n")?;

        let thresholds = load_thresholds(&path)?;
        assert_eq!(thresholds.sdwan, 99.5);
        assert_eq!(thresholds.wan1, 99.90);
        assert_eq!(thresholds.wan2, 99.90);
        Ok(())
    }

    #[test]
    fn full_config_overrides_all_fields() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("thresholds.toml");
        fs::write(&path, "sdwan = 99.99\nwan1 = 99.0\nwan2 = 98.0\n")?;

        let thresholds = load_thresholds(&path)?;
        assert_eq!(
            thresholds,
            SlaThresholds {
                sdwan: 99.99,
                wan1: 99.0,
                wan2: 98.0,
            }
        );
        Ok(())
    }

    #[test]
    fn malformed_config_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("thresholds.toml");
        fs::write(&path, "sdwan = \"not a number\"\n")?;

        assert!(load_thresholds(&path).is_err());
        Ok(())
    }
}
