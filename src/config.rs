use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default)]
    pub source: SourceConfig,
}

/// Which backend supplies the listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    Sqlite {
        #[serde(default = "default_db_path")]
        db_path: String,
        #[serde(default = "default_true")]
        seed: bool,
    },
    CsvFile {
        #[serde(default = "default_csv_path")]
        path: PathBuf,
    },
    Sheet {
        url: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Sqlite {
            db_path: default_db_path(),
            seed: true,
        }
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_db_path() -> String {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("opportunity-board");
    std::fs::create_dir_all(&data_dir).ok();
    data_dir.join("project.db").to_string_lossy().to_string()
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("data/opportunities.csv")
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            source: SourceConfig::default(),
        }
    }
}

impl Config {
    /// Reads `path`, or the per-user config file when none is given. A
    /// missing file is replaced by the defaults, which are written back.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save(&config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("opportunity-board")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_source_kind() {
        let config: Config = toml::from_str(
            r#"
            listen_addr = "0.0.0.0:8080"

            [source]
            kind = "sheet"
            url = "https://docs.example.com/sheet/pub?output=csv"
            "#,
        )
        .unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(
            config.source,
            SourceConfig::Sheet {
                url: "https://docs.example.com/sheet/pub?output=csv".to_string(),
                timeout_secs: 30,
            }
        );

        let config: Config = toml::from_str("[source]\nkind = \"csv_file\"\n").unwrap();
        assert_eq!(
            config.source,
            SourceConfig::CsvFile {
                path: PathBuf::from("data/opportunities.csv")
            }
        );

        let config: Config =
            toml::from_str("[source]\nkind = \"sqlite\"\ndb_path = \"project.db\"\n").unwrap();
        assert_eq!(
            config.source,
            SourceConfig::Sqlite {
                db_path: "project.db".to_string(),
                seed: true
            }
        );
    }

    #[test]
    fn sheet_requires_a_url() {
        assert!(toml::from_str::<Config>("[source]\nkind = \"sheet\"\n").is_err());
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:5000");
        assert!(path.exists());

        let reloaded = Config::load(Some(&path)).unwrap();
        assert_eq!(reloaded.source, config.source);
    }
}
