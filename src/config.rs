use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fs;

/// Knobs for the dataset generator. The anchor timestamp stands in for
/// "now" everywhere during generation so output never depends on the wall
/// clock.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub case_count: usize,
    pub standalone_alert_count: usize,
    pub standalone_log_count: usize,
    pub anchor: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct Config {
    generator: GeneratorConfig,
}

impl GeneratorConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config.generator)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            case_count: 150,
            standalone_alert_count: 300,
            standalone_log_count: 1200,
            anchor: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();

        assert_eq!(config.seed, 12345);
        assert_eq!(config.case_count, 150);
        assert_eq!(config.standalone_alert_count, 300);
        assert_eq!(config.standalone_log_count, 1200);
        assert_eq!(config.anchor.to_rfc3339(), "2024-01-15T10:00:00+00:00");
    }

    #[test]
    fn test_generator_config_from_file() -> Result<()> {
        let toml_content = r#"
[generator]
seed = 777
case_count = 5
standalone_alert_count = 10
standalone_log_count = 20
anchor = "2024-06-01T00:00:00Z"
"#;

        let temp_file = NamedTempFile::new()?;
        fs::write(temp_file.path(), toml_content)?;

        let config = GeneratorConfig::from_file(temp_file.path().to_str().unwrap())?;

        assert_eq!(config.seed, 777);
        assert_eq!(config.case_count, 5);
        assert_eq!(config.standalone_alert_count, 10);
        assert_eq!(config.standalone_log_count, 20);
        assert_eq!(config.anchor, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());

        Ok(())
    }

    #[test]
    fn test_generator_config_file_not_found() {
        let result = GeneratorConfig::from_file("nonexistent_file.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_generator_config_invalid_toml() -> Result<()> {
        let invalid_toml = "invalid toml content [[[";

        let temp_file = NamedTempFile::new()?;
        fs::write(temp_file.path(), invalid_toml)?;

        let result = GeneratorConfig::from_file(temp_file.path().to_str().unwrap());
        assert!(result.is_err());

        Ok(())
    }

    #[test]
    fn test_generator_config_negative_count_rejected() -> Result<()> {
        // counts are unsigned, so a negative count is a parse error
        let toml_content = r#"
[generator]
seed = 1
case_count = -3
standalone_alert_count = 0
standalone_log_count = 0
anchor = "2024-01-15T10:00:00Z"
"#;

        let temp_file = NamedTempFile::new()?;
        fs::write(temp_file.path(), toml_content)?;

        let result = GeneratorConfig::from_file(temp_file.path().to_str().unwrap());
        assert!(result.is_err());

        Ok(())
    }
}
