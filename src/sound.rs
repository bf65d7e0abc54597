use enum_dispatch::enum_dispatch;
use std::io::{self, Write};

/// Short audible cues played during a game.  Cues are fire-and-forget: the
/// caller logs any error and carries on.
#[enum_dispatch]
pub(crate) trait SoundCue {
    /// Signal that the snake has eaten the food
    fn play_eat(&mut self) -> io::Result<()>;
}

#[enum_dispatch(SoundCue)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Sound {
    Bell,
    Mute,
    #[cfg(test)]
    Broken,
}

/// Rings the terminal bell
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Bell;

impl SoundCue for Bell {
    fn play_eat(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }
}

/// Plays nothing
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Mute;

impl SoundCue for Mute {
    fn play_eat(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fails every cue
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Broken;

#[cfg(test)]
impl SoundCue for Broken {
    fn play_eat(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "no speaker attached"))
    }
}

impl Sound {
    pub(crate) fn new(enabled: bool) -> Sound {
        if enabled {
            Sound::from(Bell)
        } else {
            Sound::from(Mute)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sound() {
        assert_eq!(Sound::new(true), Sound::Bell(Bell));
        assert_eq!(Sound::new(false), Sound::Mute(Mute));
    }

    #[test]
    fn mute_is_silent() {
        let mut sound = Sound::new(false);
        assert!(sound.play_eat().is_ok());
    }

    #[test]
    fn broken_fails() {
        let mut sound = Sound::from(Broken);
        assert!(sound.play_eat().is_err());
    }
}
