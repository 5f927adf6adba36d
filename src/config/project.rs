use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigData;
use crate::encoding::TextEncoding;
use crate::error::{ConfigError, TexthooksResult};

pub const CONFIG_FILE_NAME: &str = ".texthooks.toml";

#[derive(Debug, Clone)]
pub struct Config {
    pub data: ConfigData,
    pub path: PathBuf,
}

impl Config {
    /// Load `.texthooks.toml` from `project_root`, or the defaults when the
    /// file does not exist.
    pub fn load_or_default(project_root: impl AsRef<Path>) -> TexthooksResult<Self> {
        let config_path = project_root.as_ref().join(CONFIG_FILE_NAME);

        let data = if config_path.exists() {
            let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                path: config_path.clone(),
                source,
            })?;
            let data: ConfigData = toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: config_path.clone(),
                source,
            })?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            data
        } else {
            ConfigData::default()
        };

        Ok(Self {
            data,
            path: config_path,
        })
    }

    /// The configured encoding, or the one the locale implies.
    pub fn encoding(&self) -> TexthooksResult<TextEncoding> {
        match self.data.encoding.as_deref() {
            Some(label) => TextEncoding::from_label(label).ok_or_else(|| {
                ConfigError::InvalidValue {
                    field: "encoding".to_string(),
                    value: label.to_string(),
                }
                .into()
            }),
            None => TextEncoding::detect(),
        }
    }

    /// `flag` if given, else the configured color, else on.
    pub fn color(&self, flag: Option<bool>) -> bool {
        flag.or(self.data.color).unwrap_or(true)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: ConfigData::default(),
            path: PathBuf::from(CONFIG_FILE_NAME),
        }
    }
}
