use crate::config::Config;
use crate::engine::Difficulty;
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;
use thiserror::Error;

pub(crate) const USAGE: &str = "Usage: gridsnake [OPTIONS]";

pub(crate) const HELP: &str = "\
Usage: gridsnake [OPTIONS]

Steer a snake around a grid, eat the food, and don't hit the walls or
yourself.

Options:
  -c, --config <FILE>          Read configuration from the given file
  -d, --difficulty <LEVEL>     Start at the given difficulty: easy, medium,
                               or hard (or 1, 2, or 3)
      --high-score-file <FILE> Keep the high score in the given file
      --no-sound               Do not ring the terminal bell when eating
      --log-file <FILE>        Write log messages to the given file
  -h, --help                   Show this help message and exit
  -V, --version                Show the program version and exit

Keys:
  Arrows, WASD, HJKL   Steer
  p                    Pause/resume
  1 / 2 / 3            Easy / Medium / Hard
  Enter                Restart after a game over
  q, Esc               Quit
";

/// What the program was asked to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

impl Invocation {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Invocation, UsageError> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('d') | Arg::Long("difficulty") => {
                    args.difficulty = Some(parser.value()?.parse::<Difficulty>()?);
                }
                Arg::Long("high-score-file") => {
                    args.high_score_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("no-sound") => args.no_sound = true,
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected().into()),
            }
        }
        Ok(Invocation::Run(args))
    }
}

/// Options for a normal run.  Anything given here overrides the
/// configuration file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) high_score_file: Option<PathBuf>,
    pub(crate) no_sound: bool,
    pub(crate) log_file: Option<PathBuf>,
}

impl Arguments {
    pub(crate) fn apply(&self, config: &mut Config) {
        if let Some(d) = self.difficulty {
            config.difficulty = d;
        }
        if let Some(ref path) = self.high_score_file {
            config.files.high_score_file = Some(path.clone());
            config.files.save_high_score = true;
        }
        if self.no_sound {
            config.sound.enabled = false;
        }
        if let Some(ref path) = self.log_file {
            config.log.file = Some(path.clone());
        }
    }
}

#[derive(Debug, Error)]
#[error(transparent)]
pub(crate) struct UsageError(#[from] lexopt::Error);
