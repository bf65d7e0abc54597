//! The game proper, independent of any terminal
mod difficulty;
mod direction;
mod geometry;
mod scheduler;
mod snake;
pub(crate) use self::difficulty::Difficulty;
pub(crate) use self::direction::Direction;
pub(crate) use self::geometry::{Board, Point};
pub(crate) use self::scheduler::TickScheduler;
pub(crate) use self::snake::Snake;
use crate::consts;
use crate::highscore::{HighScoreStore, ScoreStore};
use crate::sound::{Sound, SoundCue};
use log::{debug, info, warn};
use rand::Rng;
use std::time::{Duration, Instant};

/// Everything needed to set up an [`Engine`] besides the RNG and the clock
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) difficulty: Difficulty,
    pub(crate) store: HighScoreStore,
    pub(crate) sound: Sound,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum RunState {
    Running,
    GameOver,
}

/// What happened on a call to [`Engine::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    /// Nothing moved, because the game is paused or over
    Idle,
    Moved,
    Ate,
    Crashed,
}

#[derive(Debug)]
pub(crate) struct Engine<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    snake: Snake,
    food: Point,
    score: u32,
    high_score: u32,
    difficulty: Difficulty,
    state: RunState,
    paused: bool,
    scheduler: TickScheduler,
    started: Instant,
    ended: Option<Instant>,
    store: HighScoreStore,
    sound: Sound,
}

impl<R: Rng> Engine<R> {
    /// Load the high score, set up a fresh game, and start the tick
    /// scheduler
    pub(crate) fn new(settings: Settings, rng: R, now: Instant) -> Engine<R> {
        let Settings {
            difficulty,
            store,
            sound,
        } = settings;
        let high_score = match store.load() {
            Ok(score) => score,
            Err(e) => {
                warn!("{:#}", anyhow::Error::new(e));
                0
            }
        };
        let board = Board::STANDARD;
        let mut engine = Engine {
            rng,
            board,
            snake: initial_snake(),
            food: Point::ORIGIN,
            score: 0,
            high_score,
            difficulty,
            state: RunState::Running,
            paused: false,
            scheduler: TickScheduler::new(difficulty.base_interval()),
            started: now,
            ended: None,
            store,
            sound,
        };
        engine.reset(now);
        engine
    }

    /// Fire the scheduler if a tick is due at `now`, and tick if so
    pub(crate) fn update(&mut self, now: Instant) -> Option<TickOutcome> {
        self.scheduler.fire(now).then(|| self.tick(now))
    }

    /// Advance the game by one step
    pub(crate) fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.state != RunState::Running || self.paused {
            return TickOutcome::Idle;
        }
        let vacated = self.snake.advance(self.board.unit);
        let mut outcome = TickOutcome::Moved;
        if self.snake.head() == self.food {
            if let Some(tail) = vacated {
                self.snake.grow(tail);
            }
            self.score += 1;
            self.place_food();
            if let Err(e) = self.sound.play_eat() {
                warn!("Failed to play sound: {e}");
            }
            if self.score % consts::SPEEDUP_EVERY == 0
                && self.scheduler.interval() > consts::MIN_TICK_INTERVAL
            {
                let faster = self
                    .scheduler
                    .interval()
                    .saturating_sub(consts::SPEEDUP_STEP)
                    .max(consts::MIN_TICK_INTERVAL);
                debug!("Speeding up to one tick every {faster:?}");
                self.scheduler.set_interval(faster);
            }
            outcome = TickOutcome::Ate;
        }
        if self.snake.bites_itself() || !self.board.contains(self.snake.head()) {
            self.game_over(now);
            outcome = TickOutcome::Crashed;
        }
        outcome
    }

    /// Start a new game if the current one is over.  Returns `false` and does
    /// nothing if a game is still in progress.
    pub(crate) fn restart(&mut self, now: Instant) -> bool {
        if self.state != RunState::GameOver {
            return false;
        }
        self.reset(now);
        true
    }

    fn reset(&mut self, now: Instant) {
        self.snake = initial_snake();
        self.score = 0;
        self.paused = false;
        self.place_food();
        self.scheduler.stop();
        self.scheduler.set_interval(self.difficulty.base_interval());
        self.scheduler.start(now);
        self.started = now;
        self.ended = None;
        self.state = RunState::Running;
        info!(
            "Starting new game on {} (high score: {})",
            self.difficulty, self.high_score
        );
    }

    /// Food may land on the snake; it is not excluded from the draw.
    fn place_food(&mut self) {
        self.food = self.board.random_cell(&mut self.rng);
    }
}

impl<R> Engine<R> {
    fn game_over(&mut self, now: Instant) {
        self.state = RunState::GameOver;
        self.ended = Some(now);
        self.scheduler.stop();
        info!(
            "Game over with a score of {} (snake length {})",
            self.score,
            self.snake.len()
        );
        if self.score > self.high_score {
            info!("New high score: {}", self.score);
            self.high_score = self.score;
            if let Err(e) = self.store.save(self.score) {
                warn!("{:#}", anyhow::Error::new(e));
            }
        }
    }

    /// Point the snake in `direction` for the next tick.  Reversing straight
    /// into the body is ignored.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if !self.snake.turn(direction) {
            debug!("Ignoring reversal to {direction:?}");
        }
    }

    /// Pause or unpause a running game
    pub(crate) fn toggle_pause(&mut self) {
        if self.state == RunState::Running {
            self.paused = !self.paused;
            debug!("Paused: {}", self.paused);
        }
    }

    /// Switch difficulty.  The tick interval goes back to the new level's
    /// base value, losing any speed-up earned so far.
    pub(crate) fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!("Difficulty set to {difficulty}");
        self.difficulty = difficulty;
        self.scheduler.set_interval(difficulty.base_interval());
    }

    pub(crate) fn snapshot(&self, now: Instant) -> Snapshot<'_> {
        Snapshot {
            board: self.board,
            snake: &self.snake,
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            elapsed: self.elapsed(now),
            difficulty: self.difficulty,
            state: self.state,
            paused: self.paused,
        }
    }

    /// Time since the current game started, stopping once it ends
    pub(crate) fn elapsed(&self, now: Instant) -> Duration {
        self.ended
            .unwrap_or(now)
            .saturating_duration_since(self.started)
    }

    pub(crate) fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub(crate) fn run_state(&self) -> RunState {
        self.state
    }

    pub(crate) fn is_paused(&self) -> bool {
        self.paused
    }
}

fn initial_snake() -> Snake {
    Snake::new(
        Point::ORIGIN,
        consts::INITIAL_SNAKE_LENGTH,
        Direction::Right,
    )
}

/// A read-only view of everything needed to draw the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) board: Board,
    pub(crate) snake: &'a Snake,
    pub(crate) food: Point,
    pub(crate) score: u32,
    pub(crate) high_score: u32,
    pub(crate) elapsed: Duration,
    pub(crate) difficulty: Difficulty,
    pub(crate) state: RunState,
    pub(crate) paused: bool,
}
