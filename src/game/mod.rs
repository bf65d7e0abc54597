mod overlay;
use self::overlay::{GameOver, Paused};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::engine::{Board, Difficulty, Direction, Engine, Point, RunState, Settings, Snapshot};
use crate::util::{center_rect, get_display_area, EnumExt};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::time::Instant;

/// The game screen: drives an [`Engine`] from terminal events and draws it
#[derive(Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    engine: Engine<R>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(settings: Settings) -> Self {
        Game::new_with_rng(settings, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(settings: Settings, rng: R) -> Game<R> {
        Game {
            engine: Engine::new(settings, rng, Instant::now()),
        }
    }

    /// Wait for either the next tick or the next input event, whichever
    /// comes first, and act on it.  Once the game is over there are no more
    /// ticks, so this blocks until an event arrives.
    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if let Some(wait) = self.engine.scheduler().time_until(Instant::now()) {
            if wait.is_zero() || !poll(wait)? {
                if let Some(outcome) = self.engine.update(Instant::now()) {
                    log::trace!("Tick: {outcome:?}");
                }
                return Ok(None);
            }
        }
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        if event == Event::FocusLost {
            if self.engine.run_state() == RunState::Running && !self.engine.is_paused() {
                self.engine.toggle_pause();
            }
            return None;
        }
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => return Some(Screen::Quit),
            Command::Up => self.engine.set_direction(Direction::Up),
            Command::Down => self.engine.set_direction(Direction::Down),
            Command::Left => self.engine.set_direction(Direction::Left),
            Command::Right => self.engine.set_direction(Direction::Right),
            Command::Pause => self.engine.toggle_pause(),
            Command::Enter => {
                if self.engine.restart(Instant::now()) {
                    log::debug!("Restarted by player");
                }
            }
            Command::Difficulty(d) => self.engine.set_difficulty(d),
        }
        None
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self.engine.snapshot(Instant::now()), frame.area());
    }
}

impl Widget for Snapshot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [status_area, block_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        StatusBar {
            score: self.score,
            elapsed_secs: self.elapsed.as_secs(),
            difficulty: self.difficulty,
        }
        .render(status_area, buf);

        let block_area = center_rect(block_area, board_size(self.board));
        Block::bordered().render(block_area, buf);
        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            board: self.board,
            buf,
        };
        canvas.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        for &p in self.snake.body() {
            canvas.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_BODY_STYLE);
        }
        // Draw the head last so that it is always visible, even when it
        // overlaps the food or the body
        let head_style = if self.state == RunState::GameOver {
            consts::COLLISION_STYLE
        } else {
            consts::SNAKE_HEAD_STYLE
        };
        canvas.draw_cell(self.snake.head(), consts::SNAKE_HEAD_SYMBOL, head_style);

        help_line(self.difficulty).render(help_area, buf);

        if self.state == RunState::GameOver {
            GameOver {
                score: self.score,
                high_score: self.high_score,
            }
            .render(center_rect(display, GameOver::SIZE), buf);
        } else if self.paused {
            Paused.render(center_rect(display, Paused::SIZE), buf);
        }
    }
}

/// Size of the bordered box around a board, two terminal columns per cell
fn board_size(board: Board) -> Size {
    let width = u16::try_from(board.columns())
        .unwrap_or(u16::MAX)
        .saturating_mul(2)
        .saturating_add(2);
    let height = u16::try_from(board.rows())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    Size { width, height }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct StatusBar {
    score: u32,
    elapsed_secs: u64,
    difficulty: Difficulty,
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, consts::STATUS_BAR_STYLE);
        let [left, middle, right] = Layout::horizontal([Constraint::Fill(1); 3]).areas(area);
        Line::from(format!(" Score: {}", self.score)).render(left, buf);
        Line::from(format!("Time: {}s", self.elapsed_secs))
            .centered()
            .render(middle, buf);
        Line::from(format!("Difficulty: {} ", self.difficulty))
            .right_aligned()
            .render(right, buf);
    }
}

fn help_line(current: Difficulty) -> Line<'static> {
    let mut line = Line::default();
    for d in Difficulty::iter() {
        line.push_span(" ");
        line.push_span(Span::styled(String::from(d.key()), consts::KEY_STYLE));
        line.push_span(" ");
        if d == current {
            line.push_span(Span::styled(d.as_str(), consts::SELECTION_STYLE));
        } else {
            line.push_span(d.as_str());
        }
        line.push_span(" ");
    }
    line.push_span("  ");
    line.push_span(Span::styled("p", consts::KEY_STYLE));
    line.push_span(" Pause   ");
    line.push_span(Span::styled("q", consts::KEY_STYLE));
    line.push_span(" Quit");
    line
}

/// Draws board cells into the area inside the board's border
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    board: Board,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, p: Point, symbol: [char; 2], style: Style) {
        let Some((col, row)) = self.board.cell_of(p) else {
            return;
        };
        let Some(x) = col
            .checked_mul(2)
            .and_then(|dx| self.area.x.checked_add(dx))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        for (x, ch) in (x..).zip(symbol) {
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
