use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// decimals shown for balances and amounts
    pub precision: usize,
    pub prompt: String,
    /// used when RUST_LOG is unset
    pub log_level: String,
    pub format: OutputFormat,
    /// stop a script at the first failing line
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: 2,
            prompt: "divvy> ".to_string(),
            log_level: "warn".to_string(),
            format: OutputFormat::Text,
            strict: false,
        }
    }
}

impl Config {
    /// Get (~/.divvy)
    pub fn divvy_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".divvy"))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::divvy_dir()?.join("config.json"))
    }

    pub fn load_or_default(custom: Option<&Path>) -> Result<Self> {
        let config_path = match custom {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => Self::config_file()?,
        };

        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).context("Failed to parse YAML config")?
            }
            _ => serde_json::from_str(&content).context("Failed to parse config file")?,
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
        write!(file, r#"{{"precision": 3}}"#)?;

        let config = Config::load(file.path())?;

        assert_eq!(config.precision, 3);
        assert_eq!(config.prompt, "divvy> ");
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.strict);
        Ok(())
    }

    #[test]
    fn test_yaml_config() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile()?;
        writeln!(file, "format: json")?;
        writeln!(file, "strict: true")?;
        writeln!(file, "log_level: debug")?;

        let config = Config::load(file.path())?;

        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.strict);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.precision, 2);
        Ok(())
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let result = Config::load_or_default(Some(Path::new("/definitely/not/here.json")));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_config() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
        write!(file, "precision = 2")?;

        assert!(Config::load(file.path()).is_err());
        Ok(())
    }
}
