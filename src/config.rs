use crate::cases::Case;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const LOCAL_CONFIG_FILE: &str = ".strplus.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Separator {0:?} is listed more than once")]
    DuplicateSeparator(char),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Target case for `convert` when none is given on the command line
    pub case: Case,

    /// Separator priority list; empty means the built-in list
    pub separators: Vec<char>,

    pub color: bool,
}

/// One config file. Keys it leaves out keep the value of the layer below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub case: Option<Case>,
    pub separators: Option<Vec<char>>,
    pub color: Option<bool>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case: Case::default(),
            separators: Vec::new(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > explicit file > local config > global config > defaults
    pub fn load(
        explicit: Option<&Path>,
        case: Option<Case>,
        separators: Vec<char>,
        no_color: bool,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                log::debug!("loading global config {}", global_path.display());
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            log::debug!("loading local config {}", local_path.display());
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        // An explicitly requested file must exist, so no exists() check here
        if let Some(path) = explicit {
            log::debug!("loading config {}", path.display());
            config = config.merge(ConfigLayer::from_file(path)?);
        }

        config = config.merge(ConfigLayer {
            case,
            separators: (!separators.is_empty()).then_some(separators),
            color: no_color.then_some(false),
        });

        config.validate()?;
        log::debug!("effective config: {:?}", config);
        Ok(config)
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(case) = layer.case {
            self.case = case;
        }
        if let Some(separators) = layer.separators {
            self.separators = separators;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, sep) in self.separators.iter().enumerate() {
            if self.separators[..i].contains(sep) {
                return Err(ConfigError::DuplicateSeparator(*sep));
            }
        }
        Ok(())
    }

    /// The separator priority list to hand to the analyzer, `None` for the built-in one.
    pub fn priority(&self) -> Option<&[char]> {
        if self.separators.is_empty() {
            None
        } else {
            Some(&self.separators)
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "strplus").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.case, Case::Snake);
        assert!(config.separators.is_empty());
        assert!(config.color);
        assert_eq!(config.priority(), None);
    }

    #[test]
    fn test_merge_configs() {
        let layer = ConfigLayer {
            case: Some(Case::Kebab),
            separators: Some(vec![';']),
            color: None,
        };

        let merged = Config::default().merge(layer);
        assert_eq!(merged.case, Case::Kebab);
        assert_eq!(merged.priority(), Some(&[';'][..]));
        assert!(merged.color);
    }

    #[test]
    fn test_merge_keeps_base_when_layer_is_empty() {
        let base = Config {
            case: Case::Title,
            separators: vec!['|'],
            color: false,
        };
        let merged = base.clone().merge(ConfigLayer::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_merge_can_restore_default_values() {
        let global = Config {
            case: Case::Kebab,
            separators: vec!['|'],
            color: false,
        };
        let local = ConfigLayer {
            case: Some(Case::Snake),
            separators: Some(Vec::new()),
            color: Some(true),
        };

        let merged = global.merge(local);
        assert_eq!(merged, Config::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "case = \"screaming_snake\"").unwrap();
        writeln!(file, "separators = [\";\", \",\", \"\\t\"]").unwrap();
        writeln!(file, "color = false").unwrap();

        let layer = ConfigLayer::from_file(file.path()).unwrap();
        assert_eq!(layer.case, Some(Case::Constant));
        assert_eq!(layer.separators, Some(vec![';', ',', '\t']));
        assert_eq!(layer.color, Some(false));
    }

    #[test]
    fn test_from_file_leaves_missing_keys_unset() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "case = \"snake\"").unwrap();

        let layer = ConfigLayer::from_file(file.path()).unwrap();
        assert_eq!(layer.case, Some(Case::Snake));
        assert_eq!(layer.separators, None);
        assert_eq!(layer.color, None);
    }

    #[test]
    fn test_from_file_rejects_unknown_keys() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "language = \"en_US\"").unwrap();

        let err = ConfigLayer::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = ConfigLayer::from_file(Path::new("/nonexistent/strplus.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_duplicate_separators_rejected() {
        let config = Config {
            separators: vec![',', ';', ','],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateSeparator(','))));
    }
}
