use crate::engine::{Difficulty, Settings};
use crate::highscore::{FileScore, HighScoreStore, MemoryScore};
use crate::sound::Sound;
use crate::util::{config_file_path, high_score_file_path, log_file_path};
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Difficulty to start the first game at
    #[serde(default)]
    pub(crate) difficulty: Difficulty,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,

    #[serde(default)]
    pub(crate) sound: SoundConfig,

    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        config_file_path().ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the file in which the high score should be kept: the file
    /// given in the configuration or, if that is not set, the default high
    /// score path.  Returns `None` if no path is configured and the default
    /// could not be computed.
    pub(crate) fn high_score_file(&self) -> Option<PathBuf> {
        self.files
            .high_score_file
            .clone()
            .or_else(high_score_file_path)
    }

    /// Construct the high score store described by the configuration.  If
    /// saving is disabled or there is nowhere to save to, the high score is
    /// only kept in memory.
    pub(crate) fn high_score_store(&self) -> HighScoreStore {
        if !self.files.save_high_score {
            return MemoryScore::default().into();
        }
        match self.high_score_file() {
            Some(path) => {
                log::info!("Keeping high score in {}", path.display());
                FileScore::new(path).into()
            }
            None => {
                log::warn!("Could not determine where to save the high score; it will not be kept");
                MemoryScore::default().into()
            }
        }
    }

    pub(crate) fn log_file(&self) -> Option<PathBuf> {
        self.log.file.clone().or_else(log_file_path)
    }

    pub(crate) fn settings(&self) -> Settings {
        Settings {
            difficulty: self.difficulty,
            store: self.high_score_store(),
            sound: Sound::new(self.sound.enabled),
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawFileConfig")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    pub(crate) save_high_score: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawFileConfig {
    high_score_file: Option<String>,
    save_high_score: bool,
}

impl Default for RawFileConfig {
    fn default() -> RawFileConfig {
        RawFileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = ValueError;

    fn try_from(value: RawFileConfig) -> Result<FileConfig, ValueError> {
        Ok(FileConfig {
            high_score_file: value
                .high_score_file
                .map(expanduser::expanduser)
                .transpose()?,
            save_high_score: value.save_high_score,
        })
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct SoundConfig {
    /// Whether to ring the terminal bell when the snake eats
    pub(crate) enabled: bool,
}

impl Default for SoundConfig {
    fn default() -> SoundConfig {
        SoundConfig { enabled: true }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawLogConfig")]
pub(crate) struct LogConfig {
    /// File to write log messages to
    pub(crate) file: Option<PathBuf>,

    /// Least severe level of message to log
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default)]
struct RawLogConfig {
    file: Option<String>,
    level: Option<String>,
}

impl TryFrom<RawLogConfig> for LogConfig {
    type Error = ValueError;

    fn try_from(value: RawLogConfig) -> Result<LogConfig, ValueError> {
        let level = match value.level {
            Some(s) => s.parse().map_err(|_| ValueError::LogLevel(s))?,
            None => LevelFilter::Info,
        };
        Ok(LogConfig {
            file: value.file.map(expanduser::expanduser).transpose()?,
            level,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ValueError {
    #[error("failed to expand \"~\" in path")]
    Expand(#[from] std::io::Error),
    #[error("invalid log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
