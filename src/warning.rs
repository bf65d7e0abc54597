use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use std::borrow::Cow;

/// A pop-up reporting an error that the program recovered from, shown before
/// the game starts
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
    scroll_offset: usize,
    max_scroll: usize,
}

impl Warning {
    const MAX_LINES: u16 = 16;
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;
    const FOOTER: &'static str = "Continuing with the default settings.";

    /// Build a warning from an error and its chain of causes
    pub(crate) fn new(e: &anyhow::Error) -> Warning {
        Warning::from_error_messages(e.chain().map(ToString::to_string).collect())
    }

    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<WarningOutcome> {
        match (cmd, self.scrolling()) {
            (Command::Enter, _) => return Some(WarningOutcome::Dismissed),
            (Command::Quit, _) => return Some(WarningOutcome::Quit),
            (Command::Up, true) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            (Command::Down, true) => {
                if self.scroll_offset < self.max_scroll.saturating_sub(1) {
                    self.scroll_offset += 1;
                }
            }
            _ => (),
        }
        None
    }

    fn scrolling(&self) -> bool {
        self.lines.len() > usize::from(Self::MAX_LINES)
    }

    fn wrap_into(lines: &mut Vec<String>, text: &str, opts: textwrap::Options<'_>) {
        lines.extend(textwrap::wrap(text, opts).into_iter().map(Cow::into_owned));
    }

    fn from_error_messages(msgs: Vec<String>) -> Warning {
        let width = usize::from(Warning::TEXT_WIDTH);
        let mut lines = Vec::new();
        let mut msgs = msgs.into_iter();
        if let Some(first) = msgs.next() {
            Warning::wrap_into(
                &mut lines,
                &first,
                textwrap::Options::new(width).break_words(true),
            );
        }
        let causes = msgs.collect::<Vec<_>>();
        match causes.as_slice() {
            [] => (),
            [cause] => {
                lines.push(String::new());
                lines.push(String::from("Caused by:"));
                let opts = textwrap::Options::new(width)
                    .break_words(true)
                    .initial_indent("    ")
                    .subsequent_indent("    ");
                Warning::wrap_into(&mut lines, cause, opts);
            }
            causes => {
                lines.push(String::new());
                lines.push(String::from("Caused by:"));
                for (i, m) in causes.iter().enumerate() {
                    let init_indent = format!("{i:>5}: ");
                    let opts = textwrap::Options::new(width)
                        .break_words(true)
                        .initial_indent(&init_indent)
                        .subsequent_indent("       ");
                    Warning::wrap_into(&mut lines, m, opts);
                }
            }
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(String::from(Warning::FOOTER));
        let max_scroll = lines
            .len()
            .saturating_sub(usize::from(Warning::MAX_LINES) - 1);
        Warning {
            lines,
            scroll_offset: 0,
            max_scroll,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl Widget for &Warning {
    // `area` is here the area of the entire display in which the program is
    // drawing, not the area for just the widget proper.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .min(Warning::MAX_LINES)
            .saturating_add(4);
        let block_area = center_rect(
            area,
            Size {
                width: Warning::WIDTH.saturating_add(u16::from(self.scrolling()) * 2),
                height,
            },
        );
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, ok_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .flex(Flex::Start)
            .spacing(1)
            .areas(block.inner(block_area));
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        if self.scrolling() {
            let [text_area, scrollbar_area] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(1)])
                    .flex(Flex::Start)
                    .spacing(1)
                    .areas(text_area);
            Text::from_iter(
                self.lines
                    .iter()
                    .skip(self.scroll_offset)
                    .take(usize::from(Warning::MAX_LINES))
                    .map(String::as_str),
            )
            .render(text_area, buf);
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .track_symbol(Some(ratatui::symbols::shade::MEDIUM));
            let mut scroll_state =
                ScrollbarState::new(self.max_scroll).position(self.scroll_offset);
            scrollbar.render(scrollbar_area, buf, &mut scroll_state);
        } else {
            Text::from_iter(self.lines.iter().map(String::as_str)).render(text_area, buf);
        }

        Line::from("[OK]").centered().render(ok_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use anyhow::Context;
    use pretty_assertions::assert_eq;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn new_follows_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let e = Err::<(), _>(ConfigError::Read(io))
            .context("Failed to load configuration from /etc/gridsnake.toml")
            .unwrap_err();
        let warning = Warning::new(&e);
        assert_eq!(
            warning.lines,
            [
                "Failed to load configuration from",
                "/etc/gridsnake.toml",
                "",
                "Caused by:",
                "    0: failed to read configuration file",
                "    1: permission denied",
                "",
                "Continuing with the default settings.",
            ]
        );
    }

    #[test]
    fn render_one_cause() {
        let warning = Warning::from_error_messages(vec![
            String::from("failed to read configuration file"),
            String::from("permission denied"),
        ]);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ failed to read configuration file                │              ",
            "              │                                                  │              ",
            "              │ Caused by:                                       │              ",
            "              │     permission denied                            │              ",
            "              │                                                  │              ",
            "              │ Continuing with the default settings.            │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn render_two_causes() {
        let warning = Warning::from_error_messages(vec![
            String::from(
                "failed to load configuration from /home/player/.config/gridsnake/config.toml",
            ),
            String::from("failed to parse configuration file"),
            String::from("TOML parse error at line 1, column 14"),
        ]);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ failed to load configuration from                │              ",
            "              │ /home/player/.config/gridsnake/config.toml       │              ",
            "              │                                                  │              ",
            "              │ Caused by:                                       │              ",
            "              │     0: failed to parse configuration file        │              ",
            "              │     1: TOML parse error at line 1, column 14     │              ",
            "              │                                                  │              ",
            "              │ Continuing with the default settings.            │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn scrolling() {
        let mut msgs = vec![String::from("failed to parse configuration file")];
        msgs.extend((1..=20).map(|i| format!("line {i}: unexpected key")));
        let mut warning = Warning::from_error_messages(msgs);
        assert!(warning.scrolling());
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&warning).render(area, &mut buffer);
        assert!(row_text(&buffer, 2).contains("─ WARNING ─"));
        assert!(row_text(&buffer, 3).contains("│ failed to parse configuration file"));
        assert!(row_text(&buffer, 3).contains('▲'));
        assert!(row_text(&buffer, 18).contains('▼'));
        assert!(row_text(&buffer, 20).contains("[OK]"));

        assert_eq!(warning.handle_command(Command::Up), None);
        assert_eq!(warning.scroll_offset, 0);
        for _ in 0..50 {
            assert_eq!(warning.handle_command(Command::Down), None);
        }
        assert_eq!(warning.scroll_offset, warning.max_scroll - 1);
        let mut buffer = Buffer::empty(area);
        (&warning).render(area, &mut buffer);
        assert!(row_text(&buffer, 18).contains("Continuing with the default settings."));
    }

    #[test]
    fn no_scrolling_when_short() {
        let mut warning =
            Warning::from_error_messages(vec![String::from("failed to read configuration file")]);
        assert!(!warning.scrolling());
        assert_eq!(warning.handle_command(Command::Down), None);
        assert_eq!(warning.scroll_offset, 0);
    }

    #[test]
    fn dismiss_and_quit() {
        let mut warning = Warning::from_error_messages(vec![String::from("oops")]);
        assert_eq!(
            warning.handle_command(Command::Enter),
            Some(WarningOutcome::Dismissed)
        );
        assert_eq!(
            warning.handle_command(Command::Quit),
            Some(WarningOutcome::Quit)
        );
        assert_eq!(warning.handle_command(Command::Pause), None);
    }
}
