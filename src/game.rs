use rand::RngCore;
use tracing::{debug, info, warn};

use crate::apple::place_apple;
use crate::input::{translate, Action};
use crate::render;
use crate::rng::{Clock, Lcg};
use crate::snake::{Direction, MoveResult, Snake};
use crate::surface::Surface;
use crate::{board_center, Coords};

const REDRAW_INTERVAL: u32 = 20_000;
const MOVE_INTERVAL: u32 = 50_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Ticks between two full repaints of the board.
    pub redraw_interval: u32,
    /// Ticks between two snake steps. Paused ticks don't count.
    pub move_interval: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config { redraw_interval: REDRAW_INTERVAL, move_interval: MOVE_INTERVAL }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Counts ticks down to zero, fires, and starts over.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    interval: u32,
    remaining: u32,
}

impl Countdown {
    /// Fires on the first tick, then every `interval` ticks.
    pub fn new(interval: u32) -> Self {
        Countdown { interval: interval.max(1), remaining: 1 }
    }

    pub fn tick(&mut self) -> bool {
        self.remaining -= 1;
        if self.remaining == 0 {
            self.remaining = self.interval;
            true
        } else {
            false
        }
    }
}

pub struct Game<R: RngCore = Lcg> {
    rng: R,
    snake: Snake,
    apple: Coords,
    phase: Phase,
    redraw: Countdown,
    movement: Countdown,
    // Whether the menu or game-over screen is already up.
    screen_shown: bool,
}

impl Game<Lcg> {
    pub fn seeded(config: Config, seed: u32) -> Self {
        Game::new(config, Lcg::new(seed))
    }

    pub fn from_clock<C: Clock>(config: Config, clock: &C) -> Self {
        Game::seeded(config, clock.read_coarse_time())
    }
}

impl<R: RngCore> Game<R> {
    /// A fresh round waiting behind the menu screen.
    pub fn new(config: Config, rng: R) -> Self {
        let mut game = Game {
            rng,
            snake: Snake::new(board_center(), Direction::Right),
            apple: board_center(),
            phase: Phase::Menu,
            redraw: Countdown::new(config.redraw_interval),
            movement: Countdown::new(config.move_interval),
            screen_shown: false,
        };
        game.new_round();
        game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn apple(&self) -> Coords {
        self.apple
    }

    pub fn set_apple(&mut self, apple: Coords) {
        self.apple = apple;
    }

    /// Starts a new round: centered one-cell snake heading a random way,
    /// zero score and a new apple.
    pub fn reset(&mut self) {
        self.new_round();
        self.set_phase(Phase::Playing);
    }

    /// Runs one loop iteration with the key polled for it (0 for none).
    pub fn tick<S: Surface>(&mut self, key: u8, surface: &mut S) {
        match self.phase {
            Phase::Menu => {
                self.show_screen(surface);
                if key != 0 {
                    self.set_phase(Phase::Playing);
                }
            }
            Phase::GameOver => {
                self.show_screen(surface);
                if key != 0 {
                    self.reset();
                }
            }
            Phase::Playing | Phase::Paused => self.play(key, surface),
        }
    }

    /// One movement step: advance, then look for a crash.
    pub fn step_snake(&mut self) -> MoveResult {
        let result = self.snake.move_step();
        if let MoveResult::Crashed(cause) = result {
            info!(?cause, score = self.snake.score(), length = self.snake.len(), "snake crashed");
            self.set_phase(Phase::GameOver);
        }
        result
    }

    /// Eats the apple if the head is on it. Returns whether it did.
    pub fn check_apple(&mut self) -> bool {
        if self.snake.head() != self.apple {
            return false;
        }

        if !self.snake.eat() {
            warn!(length = self.snake.len(), "trail is full, snake stops growing");
        }
        self.apple = place_apple(&mut self.rng);
        debug!(score = self.snake.score(), apple = ?self.apple, "apple eaten");
        true
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Steer(direction) => self.snake.set_direction(direction),
            Action::TogglePause => self.toggle_pause(),
            Action::Any => {}
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Playing => self.set_phase(Phase::Paused),
            Phase::Paused => self.set_phase(Phase::Playing),
            _ => {}
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn new_round(&mut self) {
        let direction = Direction::from_index(self.rng.next_u32());
        self.snake = Snake::new(board_center(), direction);
        self.apple = place_apple(&mut self.rng);
        debug!(?direction, apple = ?self.apple, "new round");
    }

    fn play<S: Surface>(&mut self, key: u8, surface: &mut S) {
        if let Some(action) = translate(key) {
            self.apply(action);
        }

        let paused = self.phase == Phase::Paused;
        if self.redraw.tick() {
            render::draw_board(surface, &self.snake, self.apple, paused);
        }

        if !paused && self.movement.tick() {
            self.step_snake();
        }

        self.check_apple();

        if self.phase == Phase::GameOver {
            self.show_screen(surface);
        }
    }

    /// Draws the menu or game-over screen unless it is already up.
    fn show_screen<S: Surface>(&mut self, surface: &mut S) {
        if self.screen_shown {
            return;
        }
        match self.phase {
            Phase::Menu => render::draw_menu(surface),
            Phase::GameOver => render::draw_game_over(surface, self.snake.score()),
            _ => return,
        }
        self.screen_shown = true;
    }

    fn set_phase(&mut self, phase: Phase) {
        if phase != self.phase {
            debug!(from = ?self.phase, to = ?phase, "phase change");
        }
        self.phase = phase;
        self.screen_shown = false;
    }
}
