use crate::engine::Difficulty;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Pause,
    Enter,
    Difficulty(Difficulty),
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::Esc) => Some(Command::Quit),
            (_, KeyCode::Up) => Some(Command::Up),
            (_, KeyCode::Down) => Some(Command::Down),
            (_, KeyCode::Left) => Some(Command::Left),
            (_, KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                match c.to_ascii_lowercase() {
                    'w' | 'k' => Some(Command::Up),
                    's' | 'j' => Some(Command::Down),
                    'a' | 'h' => Some(Command::Left),
                    'd' | 'l' => Some(Command::Right),
                    'p' => Some(Command::Pause),
                    'q' => Some(Command::Quit),
                    c @ '1'..='3' => c
                        .to_digit(10)
                        .and_then(|n| u8::try_from(n).ok())
                        .map(|n| Command::Difficulty(Difficulty::from_level(n))),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, Command::Up)]
    #[case(KeyCode::Char('w'), Command::Up)]
    #[case(KeyCode::Char('k'), Command::Up)]
    #[case(KeyCode::Down, Command::Down)]
    #[case(KeyCode::Char('s'), Command::Down)]
    #[case(KeyCode::Char('j'), Command::Down)]
    #[case(KeyCode::Left, Command::Left)]
    #[case(KeyCode::Char('a'), Command::Left)]
    #[case(KeyCode::Char('h'), Command::Left)]
    #[case(KeyCode::Right, Command::Right)]
    #[case(KeyCode::Char('d'), Command::Right)]
    #[case(KeyCode::Char('l'), Command::Right)]
    #[case(KeyCode::Char('p'), Command::Pause)]
    #[case(KeyCode::Enter, Command::Enter)]
    #[case(KeyCode::Char('1'), Command::Difficulty(Difficulty::Easy))]
    #[case(KeyCode::Char('2'), Command::Difficulty(Difficulty::Medium))]
    #[case(KeyCode::Char('3'), Command::Difficulty(Difficulty::Hard))]
    #[case(KeyCode::Char('q'), Command::Quit)]
    #[case(KeyCode::Esc, Command::Quit)]
    fn plain_keys(#[case] code: KeyCode, #[case] cmd: Command) {
        assert_eq!(Command::from_key_event(KeyEvent::from(code)), Some(cmd));
    }

    #[test]
    fn shifted_letters() {
        let ev = KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT);
        assert_eq!(Command::from_key_event(ev), Some(Command::Pause));
        let ev = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(Command::from_key_event(ev), Some(Command::Up));
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Command::from_key_event(ev), Some(Command::Quit));
    }

    #[rstest]
    #[case(KeyEvent::from(KeyCode::Char('x')))]
    #[case(KeyEvent::from(KeyCode::Char('4')))]
    #[case(KeyEvent::from(KeyCode::Tab))]
    #[case(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL))]
    #[case(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::ALT))]
    fn unbound_keys(#[case] ev: KeyEvent) {
        assert_eq!(Command::from_key_event(ev), None);
    }
}
