use crate::command::Command;
use crate::engine::Settings;
use crate::game::Game;
use crate::util::get_display_area;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::read;
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Debug)]
pub(crate) struct App {
    screen: Screen,
}

impl App {
    /// Start straight into a game
    pub(crate) fn new(settings: Settings) -> App {
        App {
            screen: Screen::Game(Box::new(Game::new(settings))),
        }
    }

    /// Show `warning` first, then start a game with `settings` once the
    /// player dismisses it
    pub(crate) fn with_warning(warning: Warning, settings: Settings) -> App {
        App {
            screen: Screen::Warning { warning, settings },
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Game(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            Screen::Warning { ref warning, .. } => {
                terminal.draw(|frame| {
                    frame.render_widget(warning, get_display_area(frame.area()));
                })?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        match self.screen {
            Screen::Game(ref mut game) => {
                if let Some(screen) = game.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::Warning {
                ref mut warning,
                ref settings,
            } => {
                let outcome = read()?
                    .as_key_press_event()
                    .and_then(Command::from_key_event)
                    .and_then(|cmd| warning.handle_command(cmd));
                match outcome {
                    Some(WarningOutcome::Dismissed) => {
                        self.screen = Screen::Game(Box::new(Game::new(settings.clone())));
                    }
                    Some(WarningOutcome::Quit) => self.screen = Screen::Quit,
                    None => (),
                }
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Debug)]
pub(crate) enum Screen {
    Game(Box<Game>),
    Warning {
        warning: Warning,
        settings: Settings,
    },
    Quit,
}
