//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Width of the board in board units
pub(crate) const BOARD_WIDTH: i32 = 600;

/// Height of the board in board units
pub(crate) const BOARD_HEIGHT: i32 = 600;

/// Side length of a single grid cell in board units.  Every position on the
/// board is a multiple of this.
pub(crate) const UNIT_SIZE: i32 = 20;

/// Number of segments in a freshly-started snake
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 6;

/// The tick interval never drops below this, no matter the score
pub(crate) const MIN_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// How much faster the snake gets at each speed-up
pub(crate) const SPEEDUP_STEP: Duration = Duration::from_millis(10);

/// The snake speeds up every time the score reaches a multiple of this
pub(crate) const SPEEDUP_EVERY: u32 = 5;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window: a status bar, the bordered board (two terminal columns
/// per grid cell), and a line of key hints.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 62,
    height: 34,
};

/// Glyphs for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: [char; 2] = ['█', '█'];

/// Glyphs for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: [char; 2] = ['█', '█'];

/// Glyphs for the food
pub(crate) const FOOD_SYMBOL: [char; 2] = ['◖', '◗'];

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the snake's body
pub(crate) const SNAKE_BODY_STYLE: Style = Style::new().fg(Color::White);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the snake's head once it has crashed
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the status bar at the top of the game screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected difficulty in the key hints
pub(crate) const SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Style for the title line of the game-over pop-up
pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);
