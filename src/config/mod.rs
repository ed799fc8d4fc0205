//! Configuration management module.
//!
//! This module handles loading and saving the editor configuration, including
//! the log level and the wording of the discard-changes confirmation.

mod error;

pub use error::ConfigError;

use crate::editor::{DEFAULT_CONFIRM_MESSAGE, DEFAULT_CONFIRM_TITLE};
use crate::error::AppError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/task-editor";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: String,
    pub confirm_title: String,
    pub confirm_message: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_confirm_title")]
    pub confirm_title: String,
    #[serde(default = "default_confirm_message")]
    pub confirm_message: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_confirm_title() -> String {
    DEFAULT_CONFIRM_TITLE.to_string()
}

fn default_confirm_message() -> String {
    DEFAULT_CONFIRM_MESSAGE.to_string()
}

fn access(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Access {
        path: path.to_path_buf(),
        source,
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default values.
    ///
    pub fn new() -> Config {
        Config {
            log_level: default_log_level(),
            confirm_title: default_confirm_title(),
            confirm_message: default_confirm_message(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided, or the default directory otherwise. A missing
    /// file leaves the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(access(&dir_path))?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(access(&file_path))?;
            let data: FileSpec =
                serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                    path: file_path.clone(),
                    source,
                })?;
            self.log_level = data.log_level;
            self.confirm_title = data.confirm_title;
            self.confirm_message = data.confirm_message;
        }
        self.file_path = Some(file_path);

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::NotLoaded)?;
        let data = FileSpec {
            log_level: self.log_level.clone(),
            confirm_title: self.confirm_title.clone(),
            confirm_message: self.confirm_message.clone(),
        };
        let content = serde_yaml::to_string(&data).map_err(ConfigError::Encode)?;
        let mut file = fs::File::create(file_path).map_err(access(file_path))?;
        write!(file, "{}", content)
            .and_then(|_| file.flush())
            .map_err(access(file_path))?;
        Ok(())
    }

    /// Return the configured log level as a filter.
    ///
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::NoHomeDirectory.into()),
        }
    }
}
