use enum_dispatch::enum_dispatch;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Somewhere to keep the best score between games
#[enum_dispatch]
pub(crate) trait ScoreStore {
    /// Read the stored high score.  A store with nothing in it yet reports 0.
    fn load(&self) -> Result<u32, LoadError>;

    /// Replace the stored high score with `score`
    fn save(&mut self, score: u32) -> Result<(), SaveError>;
}

#[enum_dispatch(ScoreStore)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum HighScoreStore {
    FileScore,
    MemoryScore,
}

/// A high score kept as a decimal integer in a plain text file
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FileScore {
    path: PathBuf,
}

impl FileScore {
    pub(crate) fn new(path: PathBuf) -> FileScore {
        FileScore { path }
    }
}

impl ScoreStore for FileScore {
    fn load(&self) -> Result<u32, LoadError> {
        let src = match fs_err::read_to_string(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        src.trim().parse::<u32>().map_err(LoadError::parse)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        fs_err::write(&self.path, format!("{score}\n")).map_err(SaveError::write)?;
        Ok(())
    }
}

/// A high score that lasts only as long as the process
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryScore(u32);

impl ScoreStore for MemoryScore {
    fn load(&self) -> Result<u32, LoadError> {
        Ok(self.0)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        self.0 = score;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn parse(e: ParseIntError) -> Self {
        LoadError(LoadErrorSource::Parse(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("high score file does not contain a valid score")]
    Parse(#[source] ParseIntError),
}
