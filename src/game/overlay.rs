use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A pop-up shown over the board while the game is paused
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct Paused;

impl Paused {
    /// The size of the `Rect` that should be passed to `Paused::render()`
    pub(super) const SIZE: Size = Size {
        width: 23,
        height: 5,
    };
}

impl Widget for Paused {
    /*
     * ┌────── PAUSED ───────┐
     * │                     │
     * │  Press P to Resume  │
     * │                     │
     * └─────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        let lines = [
            Line::default(),
            Line::from_iter([
                Span::raw("Press "),
                Span::styled("P", consts::KEY_STYLE),
                Span::raw(" to Resume"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.centered().render(row, buf);
        }
    }
}

/// A pop-up shown over the board once the snake has crashed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOver {
    pub(super) score: u32,
    pub(super) high_score: u32,
}

impl GameOver {
    /// The size of the `Rect` that should be passed to `GameOver::render()`
    pub(super) const SIZE: Size = Size {
        width: 26,
        height: 7,
    };
}

impl Widget for GameOver {
    /*
     * ┌────── GAME OVER ───────┐
     * │                        │
     * │        Score: 12       │
     * │     High Score: 30     │
     * │                        │
     * │ Press ENTER to Restart │
     * └────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Line::styled(" GAME OVER ", consts::GAME_OVER_STYLE))
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        let lines = [
            Line::default(),
            Line::from(format!("Score: {}", self.score)),
            Line::from(format!("High Score: {}", self.high_score)),
            Line::default(),
            Line::from_iter([
                Span::raw("Press "),
                Span::styled("ENTER", consts::KEY_STYLE),
                Span::raw(" to Restart"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.centered().render(row, buf);
        }
    }
}
